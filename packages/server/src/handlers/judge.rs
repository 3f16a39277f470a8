use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::{Action, Judge};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::event::{JudgeRequest, validate_judge_request};
use crate::state::AppState;
use crate::utils::lookup::{find_event, find_judge};

#[utoipa::path(
    get,
    path = "/{id}/judges",
    tag = "Judges",
    operation_id = "listJudges",
    summary = "List the judges of an event",
    description = "Includes access codes. Requires `judge:manage` permission.",
    params(("id" = String, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Judges in creation order", body = Vec<Judge>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Event not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(event_id = %event_id))]
pub async fn list_judges(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<Vec<Judge>>, AppError> {
    auth_user.require(Action::ManageJudges)?;

    let store = state.store.read().await;
    find_event(&store, &event_id)?;
    Ok(Json(
        store.judges_by_event(&event_id).into_iter().cloned().collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/{id}/judges",
    tag = "Judges",
    operation_id = "createJudge",
    summary = "Invite a judge to an event",
    description = "Creates a judge with a generated 8-character access code. Requires `judge:manage` permission.",
    params(("id" = String, Path, description = "Event ID")),
    request_body = JudgeRequest,
    responses(
        (status = 201, description = "Judge created", body = Judge),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Event not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(event_id = %event_id, email = %payload.email))]
pub async fn create_judge(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    AppJson(payload): AppJson<JudgeRequest>,
) -> Result<impl IntoResponse, AppError> {
    auth_user.require(Action::ManageJudges)?;
    validate_judge_request(&payload)?;

    let mut store = state.store.write().await;
    find_event(&store, &event_id)?;
    let id = store.add_judge(payload.into_new(&event_id));
    let judge = find_judge(&store, &id)?.clone();

    Ok((StatusCode::CREATED, Json(judge)))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Judges",
    operation_id = "updateJudge",
    summary = "Replace a judge",
    description = "Updates name, email and status. The event and access code are kept. Requires `judge:manage` permission.",
    params(("id" = String, Path, description = "Judge ID")),
    request_body = JudgeRequest,
    responses(
        (status = 200, description = "Judge updated", body = Judge),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Judge not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(id = %id))]
pub async fn update_judge(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<JudgeRequest>,
) -> Result<Json<Judge>, AppError> {
    auth_user.require(Action::ManageJudges)?;
    validate_judge_request(&payload)?;

    let mut store = state.store.write().await;
    let judge = payload.into_replacement(find_judge(&store, &id)?);
    store.update_judge(judge.clone());

    Ok(Json(judge))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Judges",
    operation_id = "deleteJudge",
    summary = "Remove a judge",
    description = "Deletes the judge together with every score they gave. Requires `judge:manage` permission.",
    params(("id" = String, Path, description = "Judge ID")),
    responses(
        (status = 204, description = "Judge deleted"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Judge not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id = %id))]
pub async fn delete_judge(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    auth_user.require(Action::ManageJudges)?;

    if !state.store.write().await.delete_judge(&id) {
        return Err(AppError::NotFound("Judge not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
