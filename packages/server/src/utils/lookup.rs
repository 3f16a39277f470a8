use common::{Award, Candidate, Event, Judge, Score, ScoringCriteria};
use store::PageantStore;

use crate::error::AppError;

/// Look up an event by ID, returning 404 if not found.
pub fn find_event<'a>(store: &'a PageantStore, id: &str) -> Result<&'a Event, AppError> {
    store
        .get_event(id)
        .ok_or_else(|| AppError::NotFound("Event not found".into()))
}

pub fn find_candidate<'a>(store: &'a PageantStore, id: &str) -> Result<&'a Candidate, AppError> {
    store
        .get_candidate(id)
        .ok_or_else(|| AppError::NotFound("Candidate not found".into()))
}

pub fn find_judge<'a>(store: &'a PageantStore, id: &str) -> Result<&'a Judge, AppError> {
    store
        .get_judge(id)
        .ok_or_else(|| AppError::NotFound("Judge not found".into()))
}

pub fn find_criteria<'a>(
    store: &'a PageantStore,
    id: &str,
) -> Result<&'a ScoringCriteria, AppError> {
    store
        .get_criteria(id)
        .ok_or_else(|| AppError::NotFound("Criteria not found".into()))
}

pub fn find_award<'a>(store: &'a PageantStore, id: &str) -> Result<&'a Award, AppError> {
    store
        .get_award(id)
        .ok_or_else(|| AppError::NotFound("Award not found".into()))
}

pub fn find_score<'a>(store: &'a PageantStore, id: &str) -> Result<&'a Score, AppError> {
    store
        .get_score(id)
        .ok_or_else(|| AppError::NotFound("Score not found".into()))
}

/// Check that an event accepts scores and votes, returning 400 if not.
pub fn require_event_active(event: &Event) -> Result<(), AppError> {
    if event.status.is_open() {
        return Ok(());
    }
    Err(AppError::Validation(format!(
        "Event is {}, only active events accept scores and votes",
        event.status
    )))
}

/// Check that a record belongs to `event_id`, returning 400 if not.
pub fn require_same_event(kind: &str, record_event_id: &str, event_id: &str) -> Result<(), AppError> {
    if record_event_id == event_id {
        return Ok(());
    }
    Err(AppError::Validation(format!(
        "{kind} does not belong to this event"
    )))
}
