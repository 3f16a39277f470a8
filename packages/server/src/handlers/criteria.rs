use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::{Action, ScoringCriteria};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::event::{CriteriaRequest, validate_criteria_request};
use crate::state::AppState;
use crate::utils::lookup::{find_criteria, find_event};

#[utoipa::path(
    get,
    path = "/{id}/criteria",
    tag = "Criteria",
    operation_id = "listCriteria",
    summary = "List the scoring criteria of an event",
    params(("id" = String, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Criteria in creation order", body = Vec<ScoringCriteria>),
        (status = 404, description = "Event not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(event_id = %event_id))]
pub async fn list_criteria(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<Vec<ScoringCriteria>>, AppError> {
    let store = state.store.read().await;
    find_event(&store, &event_id)?;
    Ok(Json(
        store
            .criteria_by_event(&event_id)
            .into_iter()
            .cloned()
            .collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/{id}/criteria",
    tag = "Criteria",
    operation_id = "createCriteria",
    summary = "Add a scoring criteria to an event",
    description = "Weights are percentages and are not required to sum to 100 across an event. Requires `event:manage` permission.",
    params(("id" = String, Path, description = "Event ID")),
    request_body = CriteriaRequest,
    responses(
        (status = 201, description = "Criteria created", body = ScoringCriteria),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Event not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(event_id = %event_id, name = %payload.name))]
pub async fn create_criteria(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    AppJson(payload): AppJson<CriteriaRequest>,
) -> Result<impl IntoResponse, AppError> {
    auth_user.require(Action::ManageEvents)?;
    validate_criteria_request(&payload)?;

    let mut store = state.store.write().await;
    find_event(&store, &event_id)?;
    let id = store.add_criteria(payload.into_new(&event_id));
    let criteria = find_criteria(&store, &id)?.clone();

    Ok((StatusCode::CREATED, Json(criteria)))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Criteria",
    operation_id = "updateCriteria",
    summary = "Replace a scoring criteria",
    description = "Existing scores are kept even when they exceed a lowered maximum. Requires `event:manage` permission.",
    params(("id" = String, Path, description = "Criteria ID")),
    request_body = CriteriaRequest,
    responses(
        (status = 200, description = "Criteria updated", body = ScoringCriteria),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Criteria not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(id = %id))]
pub async fn update_criteria(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<CriteriaRequest>,
) -> Result<Json<ScoringCriteria>, AppError> {
    auth_user.require(Action::ManageEvents)?;
    validate_criteria_request(&payload)?;

    let mut store = state.store.write().await;
    let criteria = payload.into_replacement(find_criteria(&store, &id)?);
    store.update_criteria(criteria.clone());

    Ok(Json(criteria))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Criteria",
    operation_id = "deleteCriteria",
    summary = "Delete a scoring criteria",
    description = "Deletes the criteria together with every score given against it. Requires `event:manage` permission.",
    params(("id" = String, Path, description = "Criteria ID")),
    responses(
        (status = 204, description = "Criteria deleted"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Criteria not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id = %id))]
pub async fn delete_criteria(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    auth_user.require(Action::ManageEvents)?;

    if !state.store.write().await.delete_criteria(&id) {
        return Err(AppError::NotFound("Criteria not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
