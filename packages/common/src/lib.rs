pub mod access_code;
pub mod entity;
pub mod permission;
pub mod status;

pub use entity::{
    Award, Candidate, Event, Judge, NewAward, NewCandidate, NewCriteria, NewEvent, NewJudge,
    NewPublicVote, NewScore, PublicVote, Score, ScoringCriteria, User,
};
pub use permission::{Action, can};
pub use status::{AwardType, EventStatus, JudgeStatus, ParseEnumError, UserRole};
