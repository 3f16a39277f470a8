use common::NewScore;
use serde::{Deserialize, Serialize};
use store::VoteTally;

use crate::error::AppError;
use crate::models::shared::{normalize_optional, validate_text};

/// Request body for submitting (or resubmitting) a score.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreRequest {
    #[schema(example = "event1")]
    pub event_id: String,
    #[schema(example = "cand1")]
    pub candidate_id: String,
    /// Must be the caller's own judge id.
    #[schema(example = "judge1")]
    pub judge_id: String,
    #[schema(example = "criteria1")]
    pub criteria_id: String,
    #[schema(example = 8.5)]
    pub score: f64,
    pub comment: Option<String>,
}

pub fn validate_submit_score_request(payload: &SubmitScoreRequest) -> Result<(), AppError> {
    validate_score_value(payload.score)?;
    validate_comment(payload.comment.as_deref())
}

impl From<SubmitScoreRequest> for NewScore {
    fn from(req: SubmitScoreRequest) -> Self {
        NewScore {
            event_id: req.event_id,
            candidate_id: req.candidate_id,
            judge_id: req.judge_id,
            criteria_id: req.criteria_id,
            score: req.score,
            comment: normalize_optional(req.comment),
        }
    }
}

/// Request body for a coordinator correcting a score.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct UpdateScoreRequest {
    #[schema(example = 9.0)]
    pub score: f64,
    pub comment: Option<String>,
}

pub fn validate_update_score_request(payload: &UpdateScoreRequest) -> Result<(), AppError> {
    validate_score_value(payload.score)?;
    validate_comment(payload.comment.as_deref())
}

fn validate_score_value(score: f64) -> Result<(), AppError> {
    if !score.is_finite() {
        return Err(AppError::Validation("Score must be a number".into()));
    }
    Ok(())
}

fn validate_comment(comment: Option<&str>) -> Result<(), AppError> {
    match comment {
        Some(comment) => validate_text("Comment", comment),
        None => Ok(()),
    }
}

/// Query parameters for listing a candidate's scores.
#[derive(Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CandidateScoresQuery {
    /// Only scores given by this judge.
    #[param(example = "judge1")]
    pub judge_id: Option<String>,
}

/// Request body for a public vote. The voter is identified by client IP.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    #[schema(example = "award3")]
    pub award_id: String,
    #[schema(example = "cand1")]
    pub candidate_id: String,
}

/// Votes per candidate for a public award.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TallyResponse {
    #[schema(example = "award3")]
    pub award_id: String,
    /// Most votes first.
    pub tally: Vec<VoteTally>,
    pub total_votes: usize,
}

impl TallyResponse {
    pub fn new(award_id: &str, tally: Vec<VoteTally>) -> Self {
        let total_votes = tally.iter().map(|t| t.votes).sum();
        Self {
            award_id: award_id.to_string(),
            tally,
            total_votes,
        }
    }
}
