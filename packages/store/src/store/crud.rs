use common::{
    Award, AwardType, Candidate, Event, Judge, NewAward, NewCandidate, NewCriteria, NewEvent,
    NewJudge, ScoringCriteria, access_code,
};
use tracing::debug;

use super::{PageantStore, change_for, insert, purge, replace, take};
use crate::id;
use crate::notify::{ChangeKind, EntityKind, StoreChange};

impl PageantStore {
    pub fn add_event(&mut self, data: NewEvent) -> String {
        let event = data.with_id(id::generate(id::EVENT));
        insert(&mut self.events, event, &self.notifier)
    }

    pub fn update_event(&mut self, event: Event) -> bool {
        replace(&mut self.events, event, &self.notifier)
    }

    /// Delete an event and every record that references it.
    ///
    /// Each dependent collection is filtered directly by `eventId`; child
    /// deletes are not chained.
    pub fn delete_event(&mut self, event_id: &str) -> bool {
        let Some(event) = take(&mut self.events, event_id) else {
            self.reject(EntityKind::Event, event_id);
            return false;
        };

        let cascaded = purge(&mut self.candidates, |c| c.event_id == event_id)
            + purge(&mut self.judges, |j| j.event_id == event_id)
            + purge(&mut self.criteria, |c| c.event_id == event_id)
            + purge(&mut self.awards, |a| a.event_id == event_id)
            + purge(&mut self.scores, |s| s.event_id == event_id)
            + purge(&mut self.public_votes, |v| v.event_id == event_id);

        debug!(event_id, cascaded, "Deleted event");
        self.notifier
            .emit(change_for(&event, ChangeKind::Deleted).with_cascaded(cascaded));
        true
    }

    pub fn add_candidate(&mut self, data: NewCandidate) -> String {
        let candidate = data.with_id(id::generate(id::CANDIDATE));
        insert(&mut self.candidates, candidate, &self.notifier)
    }

    pub fn update_candidate(&mut self, candidate: Candidate) -> bool {
        replace(&mut self.candidates, candidate, &self.notifier)
    }

    /// Delete a candidate together with their scores and public votes.
    pub fn delete_candidate(&mut self, candidate_id: &str) -> bool {
        let Some(candidate) = take(&mut self.candidates, candidate_id) else {
            self.reject(EntityKind::Candidate, candidate_id);
            return false;
        };

        let cascaded = purge(&mut self.scores, |s| s.candidate_id == candidate_id)
            + purge(&mut self.public_votes, |v| v.candidate_id == candidate_id);

        debug!(candidate_id, cascaded, "Deleted candidate");
        self.notifier
            .emit(change_for(&candidate, ChangeKind::Deleted).with_cascaded(cascaded));
        true
    }

    /// Add a judge with a freshly generated access code.
    pub fn add_judge(&mut self, data: NewJudge) -> String {
        let judge = data.with_id(id::generate(id::JUDGE), access_code::generate());
        insert(&mut self.judges, judge, &self.notifier)
    }

    pub fn update_judge(&mut self, judge: Judge) -> bool {
        replace(&mut self.judges, judge, &self.notifier)
    }

    /// Delete a judge together with the scores they gave.
    pub fn delete_judge(&mut self, judge_id: &str) -> bool {
        let Some(judge) = take(&mut self.judges, judge_id) else {
            self.reject(EntityKind::Judge, judge_id);
            return false;
        };

        let cascaded = purge(&mut self.scores, |s| s.judge_id == judge_id);

        debug!(judge_id, cascaded, "Deleted judge");
        self.notifier
            .emit(change_for(&judge, ChangeKind::Deleted).with_cascaded(cascaded));
        true
    }

    pub fn add_criteria(&mut self, data: NewCriteria) -> String {
        let criteria = data.with_id(id::generate(id::CRITERIA));
        insert(&mut self.criteria, criteria, &self.notifier)
    }

    pub fn update_criteria(&mut self, criteria: ScoringCriteria) -> bool {
        replace(&mut self.criteria, criteria, &self.notifier)
    }

    /// Delete a criteria together with the scores given against it.
    pub fn delete_criteria(&mut self, criteria_id: &str) -> bool {
        let Some(criteria) = take(&mut self.criteria, criteria_id) else {
            self.reject(EntityKind::Criteria, criteria_id);
            return false;
        };

        let cascaded = purge(&mut self.scores, |s| s.criteria_id == criteria_id);

        debug!(criteria_id, cascaded, "Deleted criteria");
        self.notifier
            .emit(change_for(&criteria, ChangeKind::Deleted).with_cascaded(cascaded));
        true
    }

    pub fn add_award(&mut self, data: NewAward) -> String {
        let award = data.with_id(id::generate(id::AWARD));
        insert(&mut self.awards, award, &self.notifier)
    }

    pub fn update_award(&mut self, award: Award) -> bool {
        replace(&mut self.awards, award, &self.notifier)
    }

    /// Delete an award. Public awards also lose their votes; judged awards
    /// have no dependents.
    pub fn delete_award(&mut self, award_id: &str) -> bool {
        let Some(award) = take(&mut self.awards, award_id) else {
            self.reject(EntityKind::Award, award_id);
            return false;
        };

        let cascaded = match award.award_type {
            AwardType::Public => purge(&mut self.public_votes, |v| v.award_id == award_id),
            AwardType::Judged => 0,
        };

        debug!(award_id, cascaded, "Deleted award");
        self.notifier
            .emit(change_for(&award, ChangeKind::Deleted).with_cascaded(cascaded));
        true
    }

    pub(super) fn reject(&self, entity: EntityKind, id: &str) {
        self.notifier
            .emit(StoreChange::new(entity, ChangeKind::Rejected, id));
    }
}
