pub mod directory;
pub mod id;
pub mod notify;
pub mod seed;
pub mod session;
pub mod store;

pub use directory::UserDirectory;
pub use notify::{ChangeKind, EntityKind, Notifier, StoreChange};
pub use seed::SeedData;
pub use session::{
    FileSessionStorage, MemorySessionStorage, SESSION_KEY, SessionStorage, SessionStore,
    StorageError,
};
pub use store::{CandidateScoringStatus, CoordinatorStats, PageantStore, ScoringProgress, VoteTally};
