use common::{NewPublicVote, NewScore, Score};
use tracing::debug;

use super::{PageantStore, change_for, insert, replace, take};
use crate::id;
use crate::notify::{ChangeKind, EntityKind};

impl PageantStore {
    /// Record a judge's score, replacing any earlier score for the same
    /// `(candidate, judge, criteria)` triple.
    ///
    /// A resubmission keeps the existing id and overwrites only `score` and
    /// `comment`. Returns the id of the stored score.
    pub fn submit_score(&mut self, data: NewScore) -> String {
        let existing = self
            .scores
            .iter_mut()
            .find(|s| s.matches_key(&data.candidate_id, &data.judge_id, &data.criteria_id));

        if let Some(score) = existing {
            score.score = data.score;
            score.comment = data.comment;
            debug!(score_id = %score.id, value = score.score, "Replaced score");
            self.notifier.emit(change_for(&*score, ChangeKind::Updated));
            return score.id.clone();
        }

        let score = data.with_id(id::generate(id::SCORE));
        insert(&mut self.scores, score, &self.notifier)
    }

    pub fn update_score(&mut self, score: Score) -> bool {
        replace(&mut self.scores, score, &self.notifier)
    }

    pub fn delete_score(&mut self, score_id: &str) -> bool {
        match take(&mut self.scores, score_id) {
            Some(score) => {
                self.notifier.emit(change_for(&score, ChangeKind::Deleted));
                true
            }
            None => {
                self.reject(EntityKind::Score, score_id);
                false
            }
        }
    }

    /// Whether `voter_ip` already voted for `award_id`.
    pub fn has_voted(&self, award_id: &str, voter_ip: &str) -> bool {
        self.public_votes
            .iter()
            .any(|v| v.award_id == award_id && v.voter_ip == voter_ip)
    }

    /// Cast a public vote. A second vote by the same voter for the same award
    /// is refused and returns false.
    pub fn submit_public_vote(&mut self, data: NewPublicVote) -> bool {
        if self.has_voted(&data.award_id, &data.voter_ip) {
            debug!(award_id = %data.award_id, "Refused duplicate vote");
            self.reject(EntityKind::PublicVote, &data.award_id);
            return false;
        }

        let vote = data.with_id(id::generate(id::VOTE));
        insert(&mut self.public_votes, vote, &self.notifier);
        true
    }
}
