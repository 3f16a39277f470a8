use axum::{Json, extract::State};
use common::Action;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::models::dashboard::{
    CandidateProgress, CoordinatorDashboard, JudgeAssignment, JudgeDashboard,
};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/coordinator",
    tag = "Dashboard",
    operation_id = "getCoordinatorDashboard",
    summary = "Coordinator overview",
    description = "Counts and lists the events created by the caller. Requires `dashboard:coordinator` permission.",
    responses(
        (status = 200, description = "Coordinator overview", body = CoordinatorDashboard),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.id()))]
pub async fn coordinator_dashboard(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<CoordinatorDashboard>, AppError> {
    auth_user.require(Action::CoordinatorDashboard)?;

    let store = state.store.read().await;
    Ok(Json(CoordinatorDashboard {
        stats: store.coordinator_stats(auth_user.id()),
        events: store
            .events_by_creator(auth_user.id())
            .into_iter()
            .cloned()
            .collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/judge",
    tag = "Dashboard",
    operation_id = "getJudgeDashboard",
    summary = "Judge overview",
    description = "The caller's assigned event with scoring progress and per-candidate status. Requires `dashboard:judge` permission.",
    responses(
        (status = 200, description = "Judge overview", body = JudgeDashboard),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(judge_id = %auth_user.id()))]
pub async fn judge_dashboard(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<JudgeDashboard>, AppError> {
    auth_user.require(Action::JudgeDashboard)?;

    let judge_id = auth_user.id();
    let store = state.store.read().await;
    let assignments = store
        .assigned_event(judge_id)
        .map(|event| JudgeAssignment {
            progress: store.scoring_progress(judge_id, &event.id),
            candidates: store
                .candidates_by_event(&event.id)
                .into_iter()
                .map(|candidate| CandidateProgress {
                    status: store.candidate_status(judge_id, &candidate.id),
                    candidate: candidate.clone(),
                })
                .collect(),
            event: event.clone(),
        })
        .into_iter()
        .collect();

    Ok(Json(JudgeDashboard { assignments }))
}
