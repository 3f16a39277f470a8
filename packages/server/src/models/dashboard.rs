use common::{Candidate, Event};
use serde::Serialize;
use store::{CandidateScoringStatus, CoordinatorStats, ScoringProgress};

/// Overview for the logged-in coordinator.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CoordinatorDashboard {
    pub stats: CoordinatorStats,
    /// Events created by the coordinator.
    pub events: Vec<Event>,
}

/// Overview for the logged-in judge.
#[derive(Serialize, utoipa::ToSchema)]
pub struct JudgeDashboard {
    /// The judge's assigned events. Empty when the event was deleted.
    pub assignments: Vec<JudgeAssignment>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct JudgeAssignment {
    pub event: Event,
    pub progress: ScoringProgress,
    pub candidates: Vec<CandidateProgress>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CandidateProgress {
    pub candidate: Candidate,
    pub status: CandidateScoringStatus,
}
