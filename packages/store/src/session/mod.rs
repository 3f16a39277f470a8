//! The current principal and its persistence.

mod error;
mod filesystem;
mod storage;

pub use error::StorageError;
pub use filesystem::FileSessionStorage;
pub use storage::{MemorySessionStorage, SessionStorage};

use std::sync::Arc;

use common::{Action, User, UserRole};
use tracing::{info, warn};

use crate::directory::UserDirectory;
use crate::store::PageantStore;

/// Key the principal is persisted under.
pub const SESSION_KEY: &str = "pageantUser";

/// Holds who is logged in and mirrors it to a [`SessionStorage`].
///
/// Storage failures are logged and never undo an in-process login or logout.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    current: Option<User>,
}

impl SessionStore {
    /// Start logged out without looking at `storage`.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            current: None,
        }
    }

    /// Restore the persisted principal. An unreadable or malformed entry is
    /// removed and the session starts logged out.
    pub async fn restore(storage: Arc<dyn SessionStorage>) -> Self {
        let mut session = Self::new(storage);

        let raw = match session.storage.load(SESSION_KEY).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Failed to read persisted session");
                None
            }
        };

        if let Some(raw) = raw {
            match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!(user_id = %user.id, role = %user.role, "Restored session");
                    session.current = Some(user);
                }
                Err(e) => {
                    warn!(error = %e, "Discarding malformed persisted session");
                    session.forget().await;
                }
            }
        }

        session
    }

    /// Log in a coordinator by email. The password is accepted as given.
    pub async fn login(&mut self, directory: &UserDirectory, email: &str, _password: &str) -> bool {
        let Some(user) = directory.find_coordinator(email) else {
            return false;
        };
        self.set(user.clone()).await;
        true
    }

    /// Log in a judge by access code. Only judges with `active` status may
    /// log in.
    pub async fn judge_login(&mut self, store: &PageantStore, access_code: &str) -> bool {
        let Some(user) = store.authenticate_judge(access_code) else {
            return false;
        };
        self.set(user).await;
        true
    }

    /// Register a new coordinator and log them in. Fails when the email is
    /// already taken.
    pub async fn signup(
        &mut self,
        directory: &mut UserDirectory,
        name: &str,
        email: &str,
        _password: &str,
    ) -> bool {
        let Some(user) = directory.register_coordinator(name, email) else {
            return false;
        };
        self.set(user).await;
        true
    }

    pub async fn logout(&mut self) {
        self.current = None;
        self.forget().await;
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.current.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn can(&self, action: Action) -> bool {
        common::can(self.current(), action)
    }

    async fn set(&mut self, user: User) {
        info!(user_id = %user.id, role = %user.role, "Logged in");
        if let Err(e) = self.persist(&user).await {
            warn!(error = %e, "Failed to persist session");
        }
        self.current = Some(user);
    }

    async fn persist(&self, user: &User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user)?;
        self.storage.save(SESSION_KEY, &raw).await
    }

    async fn forget(&self) {
        if let Err(e) = self.storage.remove(SESSION_KEY).await {
            warn!(error = %e, "Failed to remove persisted session");
        }
    }
}
