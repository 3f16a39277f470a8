//! The in-memory pageant data store.
//!
//! Seven collections related through `eventId` (and `candidateId`,
//! `judgeId`, `criteriaId`, `awardId`). Every mutating call is synchronous,
//! all-or-nothing, and emits exactly one [`StoreChange`].

mod crud;
mod queries;
mod scoring;

pub use queries::{CandidateScoringStatus, CoordinatorStats, ScoringProgress, VoteTally};

use common::{Award, Candidate, Event, Judge, PublicVote, Score, ScoringCriteria};
use tokio::sync::broadcast;

use crate::notify::{ChangeKind, EntityKind, Notifier, StoreChange};
use crate::seed::SeedData;

/// Access to the id and display name shared by all stored records.
pub(crate) trait Record {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn label(&self) -> Option<&str> {
        None
    }
}

impl Record for Event {
    const KIND: EntityKind = EntityKind::Event;

    fn id(&self) -> &str {
        &self.id
    }
    fn label(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Record for Candidate {
    const KIND: EntityKind = EntityKind::Candidate;

    fn id(&self) -> &str {
        &self.id
    }
    fn label(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Record for Judge {
    const KIND: EntityKind = EntityKind::Judge;

    fn id(&self) -> &str {
        &self.id
    }
    fn label(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Record for ScoringCriteria {
    const KIND: EntityKind = EntityKind::Criteria;

    fn id(&self) -> &str {
        &self.id
    }
    fn label(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Record for Award {
    const KIND: EntityKind = EntityKind::Award;

    fn id(&self) -> &str {
        &self.id
    }
    fn label(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl Record for Score {
    const KIND: EntityKind = EntityKind::Score;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for PublicVote {
    const KIND: EntityKind = EntityKind::PublicVote;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Default)]
pub struct PageantStore {
    events: Vec<Event>,
    candidates: Vec<Candidate>,
    judges: Vec<Judge>,
    criteria: Vec<ScoringCriteria>,
    awards: Vec<Award>,
    scores: Vec<Score>,
    public_votes: Vec<PublicVote>,
    notifier: Notifier,
}

impl PageantStore {
    /// An empty store publishing to `notifier`.
    pub fn new(notifier: Notifier) -> Self {
        Self {
            events: Vec::new(),
            candidates: Vec::new(),
            judges: Vec::new(),
            criteria: Vec::new(),
            awards: Vec::new(),
            scores: Vec::new(),
            public_votes: Vec::new(),
            notifier,
        }
    }

    /// A store preloaded with `seed`. Seeding emits no changes.
    pub fn from_seed(seed: &SeedData, notifier: Notifier) -> Self {
        Self {
            events: seed.events.clone(),
            candidates: seed.candidates.clone(),
            judges: seed.judges.clone(),
            criteria: seed.criteria.clone(),
            awards: seed.awards.clone(),
            scores: seed.scores.clone(),
            public_votes: seed.public_votes.clone(),
            notifier,
        }
    }

    /// Receive every change made after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.notifier.subscribe()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn judges(&self) -> &[Judge] {
        &self.judges
    }

    pub fn criteria(&self) -> &[ScoringCriteria] {
        &self.criteria
    }

    pub fn awards(&self) -> &[Award] {
        &self.awards
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn public_votes(&self) -> &[PublicVote] {
        &self.public_votes
    }

    pub fn get_event(&self, id: &str) -> Option<&Event> {
        find(&self.events, id)
    }

    pub fn get_candidate(&self, id: &str) -> Option<&Candidate> {
        find(&self.candidates, id)
    }

    pub fn get_judge(&self, id: &str) -> Option<&Judge> {
        find(&self.judges, id)
    }

    pub fn get_criteria(&self, id: &str) -> Option<&ScoringCriteria> {
        find(&self.criteria, id)
    }

    pub fn get_award(&self, id: &str) -> Option<&Award> {
        find(&self.awards, id)
    }

    pub fn get_score(&self, id: &str) -> Option<&Score> {
        find(&self.scores, id)
    }
}

fn find<'a, T: Record>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

fn change_for<T: Record>(record: &T, kind: ChangeKind) -> StoreChange {
    let change = StoreChange::new(T::KIND, kind, record.id());
    match record.label() {
        Some(name) => change.named(name),
        None => change,
    }
}

/// Append `record`, notify, and return its id.
fn insert<T: Record>(items: &mut Vec<T>, record: T, notifier: &Notifier) -> String {
    let id = record.id().to_string();
    notifier.emit(change_for(&record, ChangeKind::Created));
    items.push(record);
    id
}

/// Replace the record with the same id. Unknown ids leave `items` untouched.
fn replace<T: Record>(items: &mut [T], record: T, notifier: &Notifier) -> bool {
    match items.iter_mut().find(|item| item.id() == record.id()) {
        Some(slot) => {
            notifier.emit(change_for(&record, ChangeKind::Updated));
            *slot = record;
            true
        }
        None => {
            notifier.emit(change_for(&record, ChangeKind::Rejected));
            false
        }
    }
}

/// Remove and return the record with `id`.
fn take<T: Record>(items: &mut Vec<T>, id: &str) -> Option<T> {
    let pos = items.iter().position(|item| item.id() == id)?;
    Some(items.remove(pos))
}

/// Drop every item matching `remove_if` and return how many were dropped.
fn purge<T>(items: &mut Vec<T>, mut remove_if: impl FnMut(&T) -> bool) -> usize {
    let before = items.len();
    items.retain(|item| !remove_if(item));
    before - items.len()
}
