use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::{Action, Award};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::event::{AwardRequest, validate_award_request};
use crate::models::scoring::TallyResponse;
use crate::state::AppState;
use crate::utils::lookup::{find_award, find_event};

#[utoipa::path(
    get,
    path = "/{id}/awards",
    tag = "Awards",
    operation_id = "listAwards",
    summary = "List the awards of an event",
    params(("id" = String, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Awards in creation order", body = Vec<Award>),
        (status = 404, description = "Event not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(event_id = %event_id))]
pub async fn list_awards(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<Vec<Award>>, AppError> {
    let store = state.store.read().await;
    find_event(&store, &event_id)?;
    Ok(Json(
        store.awards_by_event(&event_id).into_iter().cloned().collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/{id}/awards",
    tag = "Awards",
    operation_id = "createAward",
    summary = "Add an award to an event",
    description = "`judged` awards are decided by the judges; `public` awards take votes. Requires `event:manage` permission.",
    params(("id" = String, Path, description = "Event ID")),
    request_body = AwardRequest,
    responses(
        (status = 201, description = "Award created", body = Award),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Event not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(event_id = %event_id, name = %payload.name))]
pub async fn create_award(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    AppJson(payload): AppJson<AwardRequest>,
) -> Result<impl IntoResponse, AppError> {
    auth_user.require(Action::ManageEvents)?;
    validate_award_request(&payload)?;

    let mut store = state.store.write().await;
    find_event(&store, &event_id)?;
    let id = store.add_award(payload.into_new(&event_id));
    let award = find_award(&store, &id)?.clone();

    Ok((StatusCode::CREATED, Json(award)))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Awards",
    operation_id = "updateAward",
    summary = "Replace an award",
    description = "Requires `event:manage` permission. Switching a public award to judged keeps its votes.",
    params(("id" = String, Path, description = "Award ID")),
    request_body = AwardRequest,
    responses(
        (status = 200, description = "Award updated", body = Award),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Award not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(id = %id))]
pub async fn update_award(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<AwardRequest>,
) -> Result<Json<Award>, AppError> {
    auth_user.require(Action::ManageEvents)?;
    validate_award_request(&payload)?;

    let mut store = state.store.write().await;
    let award = payload.into_replacement(find_award(&store, &id)?);
    store.update_award(award.clone());

    Ok(Json(award))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Awards",
    operation_id = "deleteAward",
    summary = "Delete an award",
    description = "Deleting a public award also deletes its votes. Requires `event:manage` permission.",
    params(("id" = String, Path, description = "Award ID")),
    responses(
        (status = 204, description = "Award deleted"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Award not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id = %id))]
pub async fn delete_award(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    auth_user.require(Action::ManageEvents)?;

    if !state.store.write().await.delete_award(&id) {
        return Err(AppError::NotFound("Award not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/{id}/tally",
    tag = "Awards",
    operation_id = "getAwardTally",
    summary = "Vote tally of an award",
    description = "Votes per candidate, most votes first, ties ordered by candidate ID. Judged awards have an empty tally.",
    params(("id" = String, Path, description = "Award ID")),
    responses(
        (status = 200, description = "Vote tally", body = TallyResponse),
        (status = 404, description = "Award not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id = %id))]
pub async fn get_award_tally(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TallyResponse>, AppError> {
    let store = state.store.read().await;
    find_award(&store, &id)?;
    Ok(Json(TallyResponse::new(&id, store.vote_tally(&id))))
}
