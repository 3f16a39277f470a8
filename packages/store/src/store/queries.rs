use std::collections::BTreeMap;

use common::{
    Award, AwardType, Candidate, Event, EventStatus, Judge, JudgeStatus, Score, ScoringCriteria,
    User,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::PageantStore;

/// How far a judge has got through an event's score sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoringProgress {
    pub completed: usize,
    /// Candidates times criteria of the event.
    pub total: usize,
    /// Rounded to the nearest whole percent; 0 when there is nothing to score.
    pub percentage: u32,
}

impl ScoringProgress {
    fn new(completed: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        };
        Self {
            completed,
            total,
            percentage,
        }
    }
}

/// Per-candidate state of a judge's scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CandidateScoringStatus {
    NotStarted,
    InProgress { scored: usize, total: usize },
    Complete,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatorStats {
    pub events: usize,
    /// Candidates across the coordinator's events.
    pub candidates: usize,
    /// Judges across the coordinator's events.
    pub judges: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoteTally {
    pub candidate_id: String,
    pub votes: usize,
}

impl PageantStore {
    pub fn candidates_by_event(&self, event_id: &str) -> Vec<&Candidate> {
        self.candidates
            .iter()
            .filter(|c| c.event_id == event_id)
            .collect()
    }

    pub fn judges_by_event(&self, event_id: &str) -> Vec<&Judge> {
        self.judges.iter().filter(|j| j.event_id == event_id).collect()
    }

    pub fn criteria_by_event(&self, event_id: &str) -> Vec<&ScoringCriteria> {
        self.criteria
            .iter()
            .filter(|c| c.event_id == event_id)
            .collect()
    }

    pub fn awards_by_event(&self, event_id: &str) -> Vec<&Award> {
        self.awards.iter().filter(|a| a.event_id == event_id).collect()
    }

    /// Awards of the event that the public can vote on.
    pub fn public_awards_by_event(&self, event_id: &str) -> Vec<&Award> {
        self.awards
            .iter()
            .filter(|a| a.event_id == event_id && a.award_type == AwardType::Public)
            .collect()
    }

    pub fn scores_by_candidate(&self, candidate_id: &str) -> Vec<&Score> {
        self.scores
            .iter()
            .filter(|s| s.candidate_id == candidate_id)
            .collect()
    }

    pub fn scores_by_candidate_and_judge(&self, candidate_id: &str, judge_id: &str) -> Vec<&Score> {
        self.scores
            .iter()
            .filter(|s| s.candidate_id == candidate_id && s.judge_id == judge_id)
            .collect()
    }

    pub fn events_by_creator(&self, coordinator_id: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.created_by == coordinator_id)
            .collect()
    }

    /// Events whose name or description contains `query` (case-insensitive),
    /// optionally restricted to one status. A blank query matches everything.
    pub fn search_events(&self, query: Option<&str>, status: Option<EventStatus>) -> Vec<&Event> {
        let needle = query
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());

        self.events
            .iter()
            .filter(|e| status.is_none_or(|s| e.status == s))
            .filter(|e| match &needle {
                Some(n) => {
                    e.name.to_lowercase().contains(n) || e.description.to_lowercase().contains(n)
                }
                None => true,
            })
            .collect()
    }

    /// Exact, case-sensitive access code match.
    pub fn judge_by_access_code(&self, access_code: &str) -> Option<&Judge> {
        self.judges.iter().find(|j| j.access_code == access_code)
    }

    /// Resolve an access code to a judge principal. Invited judges hold a
    /// code but cannot log in until they are active.
    pub fn authenticate_judge(&self, access_code: &str) -> Option<User> {
        self.judge_by_access_code(access_code)
            .filter(|j| j.status == JudgeStatus::Active)
            .map(Judge::to_principal)
    }

    /// The event a judge is assigned to, through `Judge::event_id`.
    pub fn assigned_event(&self, judge_id: &str) -> Option<&Event> {
        let judge = self.get_judge(judge_id)?;
        self.get_event(&judge.event_id)
    }

    pub fn scoring_progress(&self, judge_id: &str, event_id: &str) -> ScoringProgress {
        let total = self.candidates_by_event(event_id).len() * self.criteria_by_event(event_id).len();
        let completed = self
            .scores
            .iter()
            .filter(|s| s.judge_id == judge_id && s.event_id == event_id)
            .count();
        ScoringProgress::new(completed, total)
    }

    /// Compare a judge's scores for a candidate with the number of criteria
    /// in the candidate's event. An event without criteria counts as complete.
    pub fn candidate_status(&self, judge_id: &str, candidate_id: &str) -> CandidateScoringStatus {
        let total = self
            .get_candidate(candidate_id)
            .map(|c| self.criteria_by_event(&c.event_id).len())
            .unwrap_or_default();
        let scored = self.scores_by_candidate_and_judge(candidate_id, judge_id).len();

        if scored >= total {
            CandidateScoringStatus::Complete
        } else if scored == 0 {
            CandidateScoringStatus::NotStarted
        } else {
            CandidateScoringStatus::InProgress { scored, total }
        }
    }

    pub fn coordinator_stats(&self, coordinator_id: &str) -> CoordinatorStats {
        self.events_by_creator(coordinator_id)
            .into_iter()
            .fold(CoordinatorStats::default(), |mut stats, event| {
                stats.events += 1;
                stats.candidates += self.candidates_by_event(&event.id).len();
                stats.judges += self.judges_by_event(&event.id).len();
                stats
            })
    }

    /// Votes per candidate for an award, most votes first. Ties are ordered
    /// by candidate id.
    pub fn vote_tally(&self, award_id: &str) -> Vec<VoteTally> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for vote in self.public_votes.iter().filter(|v| v.award_id == award_id) {
            *counts.entry(vote.candidate_id.as_str()).or_default() += 1;
        }

        let mut tally: Vec<VoteTally> = counts
            .into_iter()
            .map(|(candidate_id, votes)| VoteTally {
                candidate_id: candidate_id.to_string(),
                votes,
            })
            .collect();
        tally.sort_by(|a, b| b.votes.cmp(&a.votes));
        tally
    }

    /// Whether `score` is within the range of `criteria_id`. Unknown criteria
    /// accept nothing.
    pub fn score_in_range(&self, criteria_id: &str, score: f64) -> bool {
        self.get_criteria(criteria_id)
            .is_some_and(|c| c.accepts(score))
    }
}
