use uuid::Uuid;

pub const EVENT: &str = "event";
pub const CANDIDATE: &str = "cand";
pub const JUDGE: &str = "judge";
pub const CRITERIA: &str = "criteria";
pub const AWARD: &str = "award";
pub const SCORE: &str = "score";
pub const VOTE: &str = "vote";
pub const COORDINATOR: &str = "new";

/// Allocate a new record id. UUIDv7 keeps ids time-ordered and never reused.
pub fn generate(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::now_v7().simple())
}
