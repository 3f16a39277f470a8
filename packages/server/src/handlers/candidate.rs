use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::{Action, Candidate};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::event::{CandidateRequest, validate_candidate_request};
use crate::state::AppState;
use crate::utils::lookup::{find_candidate, find_event};

#[utoipa::path(
    get,
    path = "/{id}/candidates",
    tag = "Candidates",
    operation_id = "listCandidates",
    summary = "List the candidates of an event",
    params(("id" = String, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Candidates in creation order", body = Vec<Candidate>),
        (status = 404, description = "Event not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(event_id = %event_id))]
pub async fn list_candidates(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<Vec<Candidate>>, AppError> {
    let store = state.store.read().await;
    find_event(&store, &event_id)?;
    Ok(Json(
        store
            .candidates_by_event(&event_id)
            .into_iter()
            .cloned()
            .collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/{id}/candidates",
    tag = "Candidates",
    operation_id = "createCandidate",
    summary = "Add a candidate to an event",
    description = "Requires `event:manage` permission. Candidate numbers are not checked for uniqueness.",
    params(("id" = String, Path, description = "Event ID")),
    request_body = CandidateRequest,
    responses(
        (status = 201, description = "Candidate created", body = Candidate),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Event not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(event_id = %event_id, name = %payload.name))]
pub async fn create_candidate(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    AppJson(payload): AppJson<CandidateRequest>,
) -> Result<impl IntoResponse, AppError> {
    auth_user.require(Action::ManageEvents)?;
    validate_candidate_request(&payload)?;

    let mut store = state.store.write().await;
    find_event(&store, &event_id)?;
    let id = store.add_candidate(payload.into_new(&event_id));
    let candidate = find_candidate(&store, &id)?.clone();

    Ok((StatusCode::CREATED, Json(candidate)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Candidates",
    operation_id = "getCandidate",
    summary = "Get a candidate by ID",
    params(("id" = String, Path, description = "Candidate ID")),
    responses(
        (status = 200, description = "Candidate details", body = Candidate),
        (status = 404, description = "Candidate not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id = %id))]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Candidate>, AppError> {
    let store = state.store.read().await;
    Ok(Json(find_candidate(&store, &id)?.clone()))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Candidates",
    operation_id = "updateCandidate",
    summary = "Replace a candidate",
    description = "Replaces every editable field. The candidate stays in its event. Requires `event:manage` permission.",
    params(("id" = String, Path, description = "Candidate ID")),
    request_body = CandidateRequest,
    responses(
        (status = 200, description = "Candidate updated", body = Candidate),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Candidate not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(id = %id))]
pub async fn update_candidate(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<CandidateRequest>,
) -> Result<Json<Candidate>, AppError> {
    auth_user.require(Action::ManageEvents)?;
    validate_candidate_request(&payload)?;

    let mut store = state.store.write().await;
    let candidate = payload.into_replacement(find_candidate(&store, &id)?);
    store.update_candidate(candidate.clone());

    Ok(Json(candidate))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Candidates",
    operation_id = "deleteCandidate",
    summary = "Delete a candidate by ID",
    description = "Deletes the candidate together with their scores and public votes. Requires `event:manage` permission.",
    params(("id" = String, Path, description = "Candidate ID")),
    responses(
        (status = 204, description = "Candidate deleted"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Candidate not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id = %id))]
pub async fn delete_candidate(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    auth_user.require(Action::ManageEvents)?;

    if !state.store.write().await.delete_candidate(&id) {
        return Err(AppError::NotFound("Candidate not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
