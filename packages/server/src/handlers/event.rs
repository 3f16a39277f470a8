use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::{Action, Event};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::event::{EventListQuery, EventRequest, validate_event_request};
use crate::state::AppState;
use crate::utils::lookup::find_event;

#[utoipa::path(
    get,
    path = "/",
    tag = "Events",
    operation_id = "listEvents",
    summary = "List and search events",
    description = "Returns events in creation order. `search` matches name or description case-insensitively; `status` restricts to one status.",
    params(EventListQuery),
    responses(
        (status = 200, description = "Matching events", body = Vec<Event>),
        (status = 400, description = "Malformed query string"),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> Result<Json<Vec<Event>>, AppError> {
    let store = state.store.read().await;
    let events = store
        .search_events(query.search.as_deref(), query.status)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(events))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Events",
    operation_id = "createEvent",
    summary = "Create a new event",
    description = "Creates an event owned by the caller. Requires `event:manage` permission.",
    request_body = EventRequest,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(name = %payload.name))]
pub async fn create_event(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<EventRequest>,
) -> Result<impl IntoResponse, AppError> {
    auth_user.require(Action::ManageEvents)?;
    validate_event_request(&payload)?;

    let mut store = state.store.write().await;
    let id = store.add_event(payload.into_new(auth_user.id()));
    let event = find_event(&store, &id)?.clone();

    Ok((StatusCode::CREATED, Json(event)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Events",
    operation_id = "getEvent",
    summary = "Get an event by ID",
    params(("id" = String, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event details", body = Event),
        (status = 404, description = "Event not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id = %id))]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, AppError> {
    let store = state.store.read().await;
    Ok(Json(find_event(&store, &id)?.clone()))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Events",
    operation_id = "updateEvent",
    summary = "Replace an event",
    description = "Replaces every editable field of an event. The creator is kept. Requires `event:manage` permission.",
    params(("id" = String, Path, description = "Event ID")),
    request_body = EventRequest,
    responses(
        (status = 200, description = "Event updated", body = Event),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Event not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(id = %id))]
pub async fn update_event(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<EventRequest>,
) -> Result<Json<Event>, AppError> {
    auth_user.require(Action::ManageEvents)?;
    validate_event_request(&payload)?;

    let mut store = state.store.write().await;
    let event = payload.into_replacement(find_event(&store, &id)?);
    store.update_event(event.clone());

    Ok(Json(event))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Events",
    operation_id = "deleteEvent",
    summary = "Delete an event by ID",
    description = "Deletes an event together with its candidates, judges, criteria, awards, scores and votes. Requires `event:manage` permission.",
    params(("id" = String, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Event not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id = %id))]
pub async fn delete_event(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    auth_user.require(Action::ManageEvents)?;

    if !state.store.write().await.delete_event(&id) {
        return Err(AppError::NotFound("Event not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
