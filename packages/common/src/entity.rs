//! Records held by the pageant store.
//!
//! Every record has a `New*` counterpart carrying all fields except the
//! store-assigned ones. Field names serialize in camelCase.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::{AwardType, EventStatus, JudgeStatus, UserRole};

/// An authenticated principal, also the shape persisted for a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = "coord1")]
    pub id: String,
    #[schema(example = "John Smith")]
    pub name: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    pub role: UserRole,
    /// Only set for judges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[schema(example = "event1")]
    pub id: String,
    #[schema(example = "Miss Elegance 2025")]
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "2025-06-15")]
    pub date: NaiveDate,
    pub location: String,
    pub status: EventStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Id of the coordinator who created the event.
    pub created_by: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "2025-06-15")]
    pub date: NaiveDate,
    pub location: String,
    pub status: EventStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_by: String,
}

impl NewEvent {
    pub fn with_id(self, id: String) -> Event {
        Event {
            id,
            name: self.name,
            description: self.description,
            date: self.date,
            location: self.location,
            status: self.status,
            image_url: self.image_url,
            created_by: self.created_by,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[schema(example = "cand1")]
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub age: u32,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Assigned by the coordinator; not unique-checked.
    pub candidate_number: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCandidate {
    pub event_id: String,
    pub name: String,
    pub age: u32,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub candidate_number: u32,
}

impl NewCandidate {
    pub fn with_id(self, id: String) -> Candidate {
        Candidate {
            id,
            event_id: self.event_id,
            name: self.name,
            age: self.age,
            bio: self.bio,
            image_url: self.image_url,
            candidate_number: self.candidate_number,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Judge {
    #[schema(example = "judge1")]
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub email: String,
    #[schema(example = "JUDGE001")]
    pub access_code: String,
    pub status: JudgeStatus,
}

impl Judge {
    /// The principal a judge logs in as.
    pub fn to_principal(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: UserRole::Judge,
            access_code: Some(self.access_code.clone()),
        }
    }
}

/// Judge data supplied by a coordinator. The access code is always generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewJudge {
    pub event_id: String,
    pub name: String,
    pub email: String,
    pub status: JudgeStatus,
}

impl NewJudge {
    pub fn with_id(self, id: String, access_code: String) -> Judge {
        Judge {
            id,
            event_id: self.event_id,
            name: self.name,
            email: self.email,
            access_code,
            status: self.status,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoringCriteria {
    #[schema(example = "criteria1")]
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub description: String,
    #[schema(example = 10.0)]
    pub max_score: f64,
    /// Percentage weight within the event. Not required to sum to 100.
    #[schema(example = 30.0)]
    pub weight: f64,
}

impl ScoringCriteria {
    /// Whether `score` lies in `[0, max_score]`.
    pub fn accepts(&self, score: f64) -> bool {
        (0.0..=self.max_score).contains(&score)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCriteria {
    pub event_id: String,
    pub name: String,
    pub description: String,
    pub max_score: f64,
    pub weight: f64,
}

impl NewCriteria {
    pub fn with_id(self, id: String) -> ScoringCriteria {
        ScoringCriteria {
            id,
            event_id: self.event_id,
            name: self.name,
            description: self.description,
            max_score: self.max_score,
            weight: self.weight,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    #[schema(example = "award3")]
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub award_type: AwardType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewAward {
    pub event_id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub award_type: AwardType,
}

impl NewAward {
    pub fn with_id(self, id: String) -> Award {
        Award {
            id,
            event_id: self.event_id,
            name: self.name,
            description: self.description,
            award_type: self.award_type,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    #[schema(example = "score1")]
    pub id: String,
    pub event_id: String,
    pub candidate_id: String,
    pub judge_id: String,
    pub criteria_id: String,
    #[schema(example = 8.5)]
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Score {
    /// Whether this score belongs to the `(candidate, judge, criteria)` triple.
    pub fn matches_key(&self, candidate_id: &str, judge_id: &str, criteria_id: &str) -> bool {
        self.candidate_id == candidate_id
            && self.judge_id == judge_id
            && self.criteria_id == criteria_id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewScore {
    pub event_id: String,
    pub candidate_id: String,
    pub judge_id: String,
    pub criteria_id: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl NewScore {
    pub fn with_id(self, id: String) -> Score {
        Score {
            id,
            event_id: self.event_id,
            candidate_id: self.candidate_id,
            judge_id: self.judge_id,
            criteria_id: self.criteria_id,
            score: self.score,
            comment: self.comment,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicVote {
    #[schema(example = "vote1")]
    pub id: String,
    pub event_id: String,
    pub candidate_id: String,
    pub award_id: String,
    /// Voter identity; one vote per award per identity.
    #[schema(example = "192.168.1.1")]
    pub voter_ip: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPublicVote {
    pub event_id: String,
    pub candidate_id: String,
    pub award_id: String,
    pub voter_ip: String,
}

impl NewPublicVote {
    pub fn with_id(self, id: String) -> PublicVote {
        PublicVote {
            id,
            event_id: self.event_id,
            candidate_id: self.candidate_id,
            award_id: self.award_id,
            voter_ip: self.voter_ip,
        }
    }
}
