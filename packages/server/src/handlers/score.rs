use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::{Action, JudgeStatus, Score};
use store::PageantStore;
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::scoring::{
    SubmitScoreRequest, UpdateScoreRequest, validate_submit_score_request,
    validate_update_score_request,
};
use crate::models::shared::normalize_optional;
use crate::state::AppState;
use crate::utils::lookup::{
    find_candidate, find_criteria, find_event, find_judge, find_score, require_event_active,
    require_same_event,
};

#[utoipa::path(
    post,
    path = "/",
    tag = "Scores",
    operation_id = "submitScore",
    summary = "Submit a score",
    description = "Records the caller's score for one candidate against one criteria. \
        A resubmission for the same candidate and criteria replaces the earlier score in place. \
        The event must be active and the score within `0..=maxScore`. Requires `score:submit` permission.",
    request_body = SubmitScoreRequest,
    responses(
        (status = 201, description = "Score recorded", body = Score),
        (status = 200, description = "Earlier score replaced", body = Score),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Event, candidate or criteria not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(
    skip(state, auth_user, payload),
    fields(judge_id = %auth_user.id(), candidate_id = %payload.candidate_id, criteria_id = %payload.criteria_id)
)]
pub async fn submit_score(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<SubmitScoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    auth_user.require(Action::SubmitScore)?;
    validate_submit_score_request(&payload)?;

    if payload.judge_id != auth_user.id() {
        return Err(AppError::PermissionDenied);
    }

    let mut store = state.store.write().await;
    check_submission(&store, &payload)?;

    let replacing = store
        .scores()
        .iter()
        .any(|s| s.matches_key(&payload.candidate_id, &payload.judge_id, &payload.criteria_id));
    let id = store.submit_score(payload.into());
    let score = find_score(&store, &id)?.clone();

    let status = if replacing {
        StatusCode::OK
    } else {
        info!(score_id = %score.id, "Score recorded");
        StatusCode::CREATED
    };
    Ok((status, Json(score)))
}

/// An active judge may only score their own event while it is active, and
/// only candidates and criteria of that event.
fn check_submission(store: &PageantStore, payload: &SubmitScoreRequest) -> Result<(), AppError> {
    let judge = find_judge(store, &payload.judge_id)?;
    if judge.status != JudgeStatus::Active || judge.event_id != payload.event_id {
        return Err(AppError::PermissionDenied);
    }

    require_event_active(find_event(store, &payload.event_id)?)?;

    let candidate = find_candidate(store, &payload.candidate_id)?;
    require_same_event("Candidate", &candidate.event_id, &payload.event_id)?;

    let criteria = find_criteria(store, &payload.criteria_id)?;
    require_same_event("Criteria", &criteria.event_id, &payload.event_id)?;

    if !criteria.accepts(payload.score) {
        return Err(AppError::Validation(format!(
            "Score must be between 0 and {}",
            criteria.max_score
        )));
    }
    Ok(())
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Scores",
    operation_id = "updateScore",
    summary = "Correct a score",
    description = "Overwrites the value and comment of a score. Requires `score:manage` permission.",
    params(("id" = String, Path, description = "Score ID")),
    request_body = UpdateScoreRequest,
    responses(
        (status = 200, description = "Score updated", body = Score),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Score not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(id = %id))]
pub async fn update_score(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateScoreRequest>,
) -> Result<Json<Score>, AppError> {
    auth_user.require(Action::ManageScores)?;
    validate_update_score_request(&payload)?;

    let mut store = state.store.write().await;
    let mut score = find_score(&store, &id)?.clone();
    if !store.score_in_range(&score.criteria_id, payload.score) {
        return Err(AppError::Validation(
            "Score is outside the range of its criteria".into(),
        ));
    }

    score.score = payload.score;
    score.comment = normalize_optional(payload.comment);
    store.update_score(score.clone());

    Ok(Json(score))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Scores",
    operation_id = "deleteScore",
    summary = "Delete a score",
    description = "Requires `score:manage` permission.",
    params(("id" = String, Path, description = "Score ID")),
    responses(
        (status = 204, description = "Score deleted"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Score not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id = %id))]
pub async fn delete_score(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    auth_user.require(Action::ManageScores)?;

    if !state.store.write().await.delete_score(&id) {
        return Err(AppError::NotFound("Score not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
