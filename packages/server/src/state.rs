use std::sync::Arc;

use store::{Notifier, PageantStore, SeedData, UserDirectory};
use tokio::sync::RwLock;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    /// Mutating handlers hold the write lock for the whole store call.
    pub store: Arc<RwLock<PageantStore>>,
    pub directory: Arc<RwLock<UserDirectory>>,
    pub config: AppConfig,
}

impl AppState {
    /// Build the shared state, seeding the store and the coordinator
    /// directory when `store.seed_mock_data` is set.
    pub fn new(config: AppConfig, notifier: Notifier) -> Self {
        let (store, directory) = if config.store.seed_mock_data {
            let seed = SeedData::mock();
            (
                PageantStore::from_seed(&seed, notifier),
                UserDirectory::new(seed.coordinators),
            )
        } else {
            (PageantStore::new(notifier), UserDirectory::default())
        };

        Self {
            store: Arc::new(RwLock::new(store)),
            directory: Arc::new(RwLock::new(directory)),
            config,
        }
    }
}
