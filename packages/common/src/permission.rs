use std::fmt;

use crate::entity::User;
use crate::status::UserRole;

/// An operation gated by role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Browse events, candidates, criteria and awards.
    ViewEvents,
    /// Create, edit and delete events and their candidates, criteria and awards.
    ManageEvents,
    /// Invite, edit and remove judges.
    ManageJudges,
    /// Submit or resubmit a score as a judge.
    SubmitScore,
    /// Edit or delete any score.
    ManageScores,
    /// Read scores of a candidate.
    ViewScores,
    /// Vote for a public award.
    CastVote,
    CoordinatorDashboard,
    JudgeDashboard,
}

impl Action {
    pub const ALL: &'static [Action] = &[
        Self::ViewEvents,
        Self::ManageEvents,
        Self::ManageJudges,
        Self::SubmitScore,
        Self::ManageScores,
        Self::ViewScores,
        Self::CastVote,
        Self::CoordinatorDashboard,
        Self::JudgeDashboard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewEvents => "event:view",
            Self::ManageEvents => "event:manage",
            Self::ManageJudges => "judge:manage",
            Self::SubmitScore => "score:submit",
            Self::ManageScores => "score:manage",
            Self::ViewScores => "score:view",
            Self::CastVote => "vote:cast",
            Self::CoordinatorDashboard => "dashboard:coordinator",
            Self::JudgeDashboard => "dashboard:judge",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permissions available without logging in.
const ANONYMOUS: &[Action] = &[Action::ViewEvents, Action::CastVote];

const COORDINATOR: &[Action] = &[
    Action::ViewEvents,
    Action::ManageEvents,
    Action::ManageJudges,
    Action::ManageScores,
    Action::ViewScores,
    Action::CastVote,
    Action::CoordinatorDashboard,
];

const JUDGE: &[Action] = &[
    Action::ViewEvents,
    Action::SubmitScore,
    Action::ViewScores,
    Action::CastVote,
    Action::JudgeDashboard,
];

/// Actions granted to a role.
pub fn permissions_for(role: UserRole) -> &'static [Action] {
    match role {
        UserRole::Coordinator => COORDINATOR,
        UserRole::Judge => JUDGE,
        UserRole::Public => ANONYMOUS,
    }
}

/// Whether `principal` may perform `action`. `None` is an anonymous visitor.
pub fn can(principal: Option<&User>, action: Action) -> bool {
    let granted = match principal {
        Some(user) => permissions_for(user.role),
        None => ANONYMOUS,
    };
    granted.contains(&action)
}
