use serde::Serialize;
use tokio::sync::broadcast;

/// Default number of changes a lagging subscriber may fall behind by.
pub const DEFAULT_CAPACITY: usize = 256;

/// Collection a change applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Event,
    Candidate,
    Judge,
    Criteria,
    Award,
    Score,
    PublicVote,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Candidate => "candidate",
            Self::Judge => "judge",
            Self::Criteria => "criteria",
            Self::Award => "award",
            Self::Score => "score",
            Self::PublicVote => "public_vote",
        }
    }
}

/// Outcome of a mutating store call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
    /// The call did not mutate anything (unknown id, duplicate vote).
    Rejected,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::Rejected => "rejected",
        }
    }
}

/// One notification per mutating call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StoreChange {
    pub entity: EntityKind,
    pub kind: ChangeKind,
    /// Id of the affected record. For a rejected vote this is the award id.
    pub id: String,
    /// Display name of the record, when it has one.
    pub name: Option<String>,
    /// Dependent records removed by a delete.
    pub cascaded: usize,
}

impl StoreChange {
    pub fn new(entity: EntityKind, kind: ChangeKind, id: impl Into<String>) -> Self {
        Self {
            entity,
            kind,
            id: id.into(),
            name: None,
            cascaded: 0,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_cascaded(mut self, cascaded: usize) -> Self {
        self.cascaded = cascaded;
        self
    }

    /// Topic string such as `candidate.deleted`.
    pub fn topic(&self) -> String {
        format!("{}.{}", self.entity.as_str(), self.kind.as_str())
    }
}

/// Fan-out of store changes to any number of subscribers.
#[derive(Clone, Debug)]
pub struct Notifier {
    sender: broadcast::Sender<StoreChange>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.sender.subscribe()
    }

    /// Publish a change. Having no subscribers is not an error.
    pub fn emit(&self, change: StoreChange) {
        let _ = self.sender.send(change);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
