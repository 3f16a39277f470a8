use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of an authenticated principal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Creates and manages events.
    Coordinator,
    /// Scores candidates of the event they are assigned to.
    Judge,
    /// Browses events and votes.
    Public,
}

impl UserRole {
    pub const ALL: &'static [UserRole] = &[Self::Coordinator, Self::Judge, Self::Public];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coordinator => "coordinator",
            Self::Judge => "judge",
            Self::Public => "public",
        }
    }
}

/// Lifecycle of an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    /// Scoring and public voting are open.
    Active,
    Completed,
}

impl EventStatus {
    pub const ALL: &'static [EventStatus] = &[Self::Upcoming, Self::Active, Self::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Returns true while judges may submit scores and the public may vote.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Whether a judge has accepted their invitation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JudgeStatus {
    /// Invited judges cannot log in.
    Invited,
    Active,
}

impl JudgeStatus {
    pub const ALL: &'static [JudgeStatus] = &[Self::Invited, Self::Active];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invited => "invited",
            Self::Active => "active",
        }
    }
}

/// How the winner of an award is decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AwardType {
    /// Decided by the judging panel.
    Judged,
    /// Decided by public votes.
    Public,
}

impl AwardType {
    pub const ALL: &'static [AwardType] = &[Self::Judged, Self::Public];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Judged => "judged",
            Self::Public => "public",
        }
    }
}

/// Error when parsing an invalid enum string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    invalid: String,
    valid: Vec<&'static str>,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid value '{}'. Valid values: {}",
            self.invalid,
            self.valid.join(", ")
        )
    }
}

impl std::error::Error for ParseEnumError {}

fn parse_from<T: Copy>(
    s: &str,
    all: &[T],
    as_str: impl Fn(&T) -> &'static str,
) -> Result<T, ParseEnumError> {
    all.iter()
        .find(|v| as_str(*v) == s)
        .copied()
        .ok_or_else(|| ParseEnumError {
            invalid: s.to_string(),
            valid: all.iter().map(as_str).collect(),
        })
}

impl FromStr for UserRole {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from(s, Self::ALL, Self::as_str)
    }
}

impl FromStr for EventStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from(s, Self::ALL, Self::as_str)
    }
}

impl FromStr for JudgeStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from(s, Self::ALL, Self::as_str)
    }
}

impl FromStr for AwardType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from(s, Self::ALL, Self::as_str)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for JudgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AwardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
