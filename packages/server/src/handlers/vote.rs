use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::{Action, AwardType, NewPublicVote, Score};
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::{AuthUser, MaybeAuthUser};
use crate::extractors::client_ip::VoterIp;
use crate::extractors::json::AppJson;
use crate::models::scoring::{CandidateScoresQuery, TallyResponse, VoteRequest};
use crate::state::AppState;
use crate::utils::lookup::{
    find_award, find_candidate, find_event, require_event_active, require_same_event,
};

#[utoipa::path(
    get,
    path = "/{id}/scores",
    tag = "Scores",
    operation_id = "listCandidateScores",
    summary = "List the scores of a candidate",
    description = "Coordinators see every score and may filter by `judgeId`. \
        Judges only ever see their own scores. Requires `score:view` permission.",
    params(
        ("id" = String, Path, description = "Candidate ID"),
        CandidateScoresQuery,
    ),
    responses(
        (status = 200, description = "Scores in submission order", body = Vec<Score>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Candidate not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, query), fields(candidate_id = %candidate_id))]
pub async fn list_candidate_scores(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(candidate_id): Path<String>,
    Query(query): Query<CandidateScoresQuery>,
) -> Result<Json<Vec<Score>>, AppError> {
    auth_user.require(Action::ViewScores)?;

    let judge_id = if auth_user.is_judge() {
        Some(auth_user.id().to_string())
    } else {
        query.judge_id
    };

    let store = state.store.read().await;
    find_candidate(&store, &candidate_id)?;
    let scores = match judge_id {
        Some(judge_id) => store.scores_by_candidate_and_judge(&candidate_id, &judge_id),
        None => store.scores_by_candidate(&candidate_id),
    };
    Ok(Json(scores.into_iter().cloned().collect()))
}

#[utoipa::path(
    post,
    path = "/{id}/votes",
    tag = "Awards",
    operation_id = "castVote",
    summary = "Cast a public vote",
    description = "Votes for a candidate in a public award of an active event. \
        Anonymous visitors may vote. Each client address votes once per award.",
    params(("id" = String, Path, description = "Event ID")),
    request_body = VoteRequest,
    responses(
        (status = 201, description = "Vote counted, current tally returned", body = TallyResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Invalid token (TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Event, award or candidate not found (NOT_FOUND)", body = ErrorBody),
        (status = 409, description = "Already voted for this award (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, principal, voter, payload), fields(event_id = %event_id, award_id = %payload.award_id))]
pub async fn cast_vote(
    principal: MaybeAuthUser,
    VoterIp(voter): VoterIp,
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    AppJson(payload): AppJson<VoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    principal.require(Action::CastVote)?;

    let mut store = state.store.write().await;
    require_event_active(find_event(&store, &event_id)?)?;

    let award = find_award(&store, &payload.award_id)?;
    require_same_event("Award", &award.event_id, &event_id)?;
    if award.award_type != AwardType::Public {
        return Err(AppError::Validation(
            "Award is decided by the judges and does not take votes".into(),
        ));
    }

    let candidate = find_candidate(&store, &payload.candidate_id)?;
    require_same_event("Candidate", &candidate.event_id, &event_id)?;

    let counted = store.submit_public_vote(NewPublicVote {
        event_id: event_id.clone(),
        candidate_id: payload.candidate_id,
        award_id: payload.award_id.clone(),
        voter_ip: voter,
    });
    if !counted {
        return Err(AppError::Conflict(
            "You have already voted for this award".into(),
        ));
    }

    info!("Vote counted");
    let tally = TallyResponse::new(&payload.award_id, store.vote_tally(&payload.award_id));
    Ok((StatusCode::CREATED, Json(tally)))
}
