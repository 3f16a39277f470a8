//! Request bodies for events and the records they own.
//!
//! Each request converts into the store's `New*` record on create and into a
//! full replacement record on update; ids, owning event and generated fields
//! are never taken from the body.

use chrono::NaiveDate;
use common::{
    Award, AwardType, Candidate, Event, EventStatus, Judge, JudgeStatus, NewAward, NewCandidate,
    NewCriteria, NewEvent, NewJudge, ScoringCriteria,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::shared::{normalize_optional, validate_email, validate_name, validate_text};

/// Query parameters for listing events.
#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventListQuery {
    /// Case-insensitive substring of the name or description.
    pub search: Option<String>,
    /// Only events with this status.
    pub status: Option<EventStatus>,
}

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[schema(example = "Miss Elegance 2025")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[schema(value_type = String, example = "2025-06-15")]
    pub date: NaiveDate,
    #[schema(example = "Grand Palace Hotel")]
    pub location: String,
    pub status: EventStatus,
    pub image_url: Option<String>,
}

pub fn validate_event_request(payload: &EventRequest) -> Result<(), AppError> {
    validate_name("Name", &payload.name)?;
    validate_name("Location", &payload.location)?;
    validate_text("Description", &payload.description)
}

impl EventRequest {
    pub fn into_new(self, created_by: &str) -> NewEvent {
        NewEvent {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            date: self.date,
            location: self.location.trim().to_string(),
            status: self.status,
            image_url: normalize_optional(self.image_url),
            created_by: created_by.to_string(),
        }
    }

    /// Replacement for `existing`, keeping its id and creator.
    pub fn into_replacement(self, existing: &Event) -> Event {
        self.into_new(&existing.created_by)
            .with_id(existing.id.clone())
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRequest {
    #[schema(example = "Emma Roberts")]
    pub name: String,
    /// Age in years (1-150).
    #[schema(example = 24)]
    pub age: u32,
    #[serde(default)]
    pub bio: String,
    pub image_url: Option<String>,
    #[schema(example = 1)]
    pub candidate_number: u32,
}

pub fn validate_candidate_request(payload: &CandidateRequest) -> Result<(), AppError> {
    validate_name("Name", &payload.name)?;
    if !(1..=150).contains(&payload.age) {
        return Err(AppError::Validation("Age must be 1-150".into()));
    }
    validate_text("Bio", &payload.bio)
}

impl CandidateRequest {
    pub fn into_new(self, event_id: &str) -> NewCandidate {
        NewCandidate {
            event_id: event_id.to_string(),
            name: self.name.trim().to_string(),
            age: self.age,
            bio: self.bio.trim().to_string(),
            image_url: normalize_optional(self.image_url),
            candidate_number: self.candidate_number,
        }
    }

    pub fn into_replacement(self, existing: &Candidate) -> Candidate {
        self.into_new(&existing.event_id)
            .with_id(existing.id.clone())
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct JudgeRequest {
    #[schema(example = "Michael Brown")]
    pub name: String,
    #[schema(example = "michael@example.com")]
    pub email: String,
    /// Defaults to `invited`.
    #[serde(default = "default_judge_status")]
    pub status: JudgeStatus,
}

fn default_judge_status() -> JudgeStatus {
    JudgeStatus::Invited
}

pub fn validate_judge_request(payload: &JudgeRequest) -> Result<(), AppError> {
    validate_name("Name", &payload.name)?;
    validate_email(&payload.email)
}

impl JudgeRequest {
    pub fn into_new(self, event_id: &str) -> NewJudge {
        NewJudge {
            event_id: event_id.to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            status: self.status,
        }
    }

    /// Replacement for `existing`, keeping its event and access code.
    pub fn into_replacement(self, existing: &Judge) -> Judge {
        self.into_new(&existing.event_id)
            .with_id(existing.id.clone(), existing.access_code.clone())
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaRequest {
    #[schema(example = "Talent")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Highest score a judge may give (> 0).
    #[schema(example = 10.0)]
    pub max_score: f64,
    /// Percentage weight (0-100).
    #[schema(example = 25.0)]
    pub weight: f64,
}

pub fn validate_criteria_request(payload: &CriteriaRequest) -> Result<(), AppError> {
    validate_name("Name", &payload.name)?;
    validate_text("Description", &payload.description)?;
    if !payload.max_score.is_finite() || payload.max_score <= 0.0 {
        return Err(AppError::Validation("Max score must be greater than 0".into()));
    }
    if !(0.0..=100.0).contains(&payload.weight) {
        return Err(AppError::Validation("Weight must be 0-100".into()));
    }
    Ok(())
}

impl CriteriaRequest {
    pub fn into_new(self, event_id: &str) -> NewCriteria {
        NewCriteria {
            event_id: event_id.to_string(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            max_score: self.max_score,
            weight: self.weight,
        }
    }

    pub fn into_replacement(self, existing: &ScoringCriteria) -> ScoringCriteria {
        self.into_new(&existing.event_id)
            .with_id(existing.id.clone())
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct AwardRequest {
    #[schema(example = "People's Choice")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub award_type: AwardType,
}

pub fn validate_award_request(payload: &AwardRequest) -> Result<(), AppError> {
    validate_name("Name", &payload.name)?;
    validate_text("Description", &payload.description)
}

impl AwardRequest {
    pub fn into_new(self, event_id: &str) -> NewAward {
        NewAward {
            event_id: event_id.to_string(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            award_type: self.award_type,
        }
    }

    pub fn into_replacement(self, existing: &Award) -> Award {
        self.into_new(&existing.event_id)
            .with_id(existing.id.clone())
    }
}
