//! Static mock records every process starts from.

use chrono::NaiveDate;
use common::{
    Award, AwardType, Candidate, Event, EventStatus, Judge, JudgeStatus, PublicVote, Score,
    ScoringCriteria, User, UserRole,
};
use tracing::info;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Coordinators: `(id, name, email)`.
const COORDINATORS: &[(&str, &str, &str)] = &[
    ("coord1", "John Smith", "john@example.com"),
    ("coord2", "Sarah Johnson", "sarah@example.com"),
];

/// Events: `(id, name, description, (year, month, day), location, status, created_by)`.
type EventRow = (&'static str, &'static str, &'static str, (i32, u32, u32), &'static str, EventStatus, &'static str);

const EVENTS: &[EventRow] = &[
    (
        "event1",
        "Miss Elegance 2025",
        "The annual beauty pageant celebrating elegance and grace",
        (2025, 6, 15),
        "Grand Palace Hotel",
        EventStatus::Upcoming,
        "coord1",
    ),
    (
        "event2",
        "Mr. Universe 2025",
        "The premier men's pageant showcasing talent and physique",
        (2025, 7, 22),
        "City Convention Center",
        EventStatus::Upcoming,
        "coord2",
    ),
    (
        "event3",
        "Teen Sparkle 2025",
        "Celebrating talented teenagers across the nation",
        (2025, 5, 10),
        "Youth Center Auditorium",
        EventStatus::Active,
        "coord1",
    ),
];

/// Candidates: `(id, event, name, age, number, bio)`.
const CANDIDATES: &[(&str, &str, &str, u32, u32, &str)] = &[
    (
        "cand1",
        "event1",
        "Emma Roberts",
        24,
        1,
        "Emma is a marketing professional who loves community service and volunteering at animal shelters.",
    ),
    (
        "cand2",
        "event1",
        "Sophia Miller",
        26,
        2,
        "Sophia is a medical resident who advocates for healthcare accessibility and education.",
    ),
    (
        "cand3",
        "event1",
        "Isabella Lopez",
        23,
        3,
        "Isabella is a dance instructor who runs programs for disadvantaged youth.",
    ),
    (
        "cand4",
        "event2",
        "Daniel Johnson",
        28,
        1,
        "Daniel is a fitness coach who promotes healthy living and wellness.",
    ),
    (
        "cand5",
        "event2",
        "Matthew Garcia",
        27,
        2,
        "Matthew is an environmental scientist passionate about sustainability.",
    ),
];

/// Judges: `(id, event, name, email, access code, status)`.
const JUDGES: &[(&str, &str, &str, &str, &str, JudgeStatus)] = &[
    ("judge1", "event1", "Michael Brown", "michael@example.com", "JUDGE001", JudgeStatus::Active),
    ("judge2", "event1", "Jessica Taylor", "jessica@example.com", "JUDGE002", JudgeStatus::Active),
    ("judge3", "event2", "Robert Wilson", "robert@example.com", "JUDGE003", JudgeStatus::Invited),
];

/// Criteria: `(id, event, name, description, weight)`. Every max score is 10.
const CRITERIA: &[(&str, &str, &str, &str, f64)] = &[
    ("criteria1", "event1", "Beauty", "Overall physical appearance and grooming", 30.0),
    ("criteria2", "event1", "Talent", "Performance of a talent showcase", 25.0),
    ("criteria3", "event1", "Intelligence", "Response to Q&A and intellectual abilities", 25.0),
    ("criteria4", "event1", "Poise & Personality", "Confidence, grace, and overall disposition", 20.0),
    ("criteria5", "event2", "Physique", "Physical conditioning and appearance", 35.0),
    ("criteria6", "event2", "Talent", "Performance of a talent showcase", 25.0),
    ("criteria7", "event2", "Intelligence", "Response to Q&A and intellectual abilities", 25.0),
    ("criteria8", "event2", "Presentation", "Stage presence and communication skills", 15.0),
];

const MAX_SCORE: f64 = 10.0;

/// Awards: `(id, event, name, description, type)`.
const AWARDS: &[(&str, &str, &str, &str, AwardType)] = &[
    ("award1", "event1", "Miss Elegance 2025", "Overall winner of the pageant", AwardType::Judged),
    ("award2", "event1", "Miss Congeniality", "Candidate who exhibited the best personality", AwardType::Judged),
    ("award3", "event1", "People's Choice", "Most popular candidate as voted by the public", AwardType::Public),
    ("award4", "event2", "Mr. Universe 2025", "Overall winner of the pageant", AwardType::Judged),
    ("award5", "event2", "Mr. Photogenic", "Candidate with the best camera presence", AwardType::Judged),
    ("award6", "event2", "Public Favorite", "Most popular candidate as voted by the public", AwardType::Public),
];

/// Scores: `(id, event, candidate, judge, criteria, score)`.
const SCORES: &[(&str, &str, &str, &str, &str, f64)] = &[
    ("score1", "event1", "cand1", "judge1", "criteria1", 8.5),
    ("score2", "event1", "cand1", "judge1", "criteria2", 9.0),
    ("score3", "event1", "cand1", "judge2", "criteria1", 8.0),
    ("score4", "event1", "cand2", "judge1", "criteria1", 9.5),
];

/// Public votes: `(id, event, candidate, award, voter)`.
const PUBLIC_VOTES: &[(&str, &str, &str, &str, &str)] = &[
    ("vote1", "event1", "cand1", "award3", "192.168.1.1"),
    ("vote2", "event1", "cand2", "award3", "192.168.1.2"),
    ("vote3", "event1", "cand3", "award3", "192.168.1.3"),
];

/// Initial contents of the coordinator directory and the pageant store.
#[derive(Clone, Debug, Default)]
pub struct SeedData {
    pub coordinators: Vec<User>,
    pub events: Vec<Event>,
    pub candidates: Vec<Candidate>,
    pub judges: Vec<Judge>,
    pub criteria: Vec<ScoringCriteria>,
    pub awards: Vec<Award>,
    pub scores: Vec<Score>,
    pub public_votes: Vec<PublicVote>,
}

impl SeedData {
    /// The demo pageants: three events, two coordinators and their
    /// candidates, judges, criteria, awards, scores and votes.
    pub fn mock() -> Self {
        let seed = Self {
            coordinators: COORDINATORS
                .iter()
                .map(|&(id, name, email)| User {
                    id: id.into(),
                    name: name.into(),
                    email: email.into(),
                    role: UserRole::Coordinator,
                    access_code: None,
                })
                .collect(),
            events: EVENTS
                .iter()
                .filter_map(|&(id, name, description, (y, m, d), location, status, created_by)| {
                    Some(Event {
                        id: id.into(),
                        name: name.into(),
                        description: description.into(),
                        date: NaiveDate::from_ymd_opt(y, m, d)?,
                        location: location.into(),
                        status,
                        image_url: Some(PLACEHOLDER_IMAGE.into()),
                        created_by: created_by.into(),
                    })
                })
                .collect(),
            candidates: CANDIDATES
                .iter()
                .map(|&(id, event_id, name, age, candidate_number, bio)| Candidate {
                    id: id.into(),
                    event_id: event_id.into(),
                    name: name.into(),
                    age,
                    bio: bio.into(),
                    image_url: Some(PLACEHOLDER_IMAGE.into()),
                    candidate_number,
                })
                .collect(),
            judges: JUDGES
                .iter()
                .map(|&(id, event_id, name, email, access_code, status)| Judge {
                    id: id.into(),
                    event_id: event_id.into(),
                    name: name.into(),
                    email: email.into(),
                    access_code: access_code.into(),
                    status,
                })
                .collect(),
            criteria: CRITERIA
                .iter()
                .map(|&(id, event_id, name, description, weight)| ScoringCriteria {
                    id: id.into(),
                    event_id: event_id.into(),
                    name: name.into(),
                    description: description.into(),
                    max_score: MAX_SCORE,
                    weight,
                })
                .collect(),
            awards: AWARDS
                .iter()
                .map(|&(id, event_id, name, description, award_type)| Award {
                    id: id.into(),
                    event_id: event_id.into(),
                    name: name.into(),
                    description: description.into(),
                    award_type,
                })
                .collect(),
            scores: SCORES
                .iter()
                .map(|&(id, event_id, candidate_id, judge_id, criteria_id, score)| Score {
                    id: id.into(),
                    event_id: event_id.into(),
                    candidate_id: candidate_id.into(),
                    judge_id: judge_id.into(),
                    criteria_id: criteria_id.into(),
                    score,
                    comment: None,
                })
                .collect(),
            public_votes: PUBLIC_VOTES
                .iter()
                .map(|&(id, event_id, candidate_id, award_id, voter_ip)| PublicVote {
                    id: id.into(),
                    event_id: event_id.into(),
                    candidate_id: candidate_id.into(),
                    award_id: award_id.into(),
                    voter_ip: voter_ip.into(),
                })
                .collect(),
        };

        info!(
            "Loaded mock data: {} events, {} candidates, {} judges",
            seed.events.len(),
            seed.candidates.len(),
            seed.judges.len()
        );
        seed
    }
}
