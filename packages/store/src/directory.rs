use common::{User, UserRole};

use crate::id;

/// The coordinator accounts that can log in with an email.
#[derive(Clone, Debug, Default)]
pub struct UserDirectory {
    coordinators: Vec<User>,
}

impl UserDirectory {
    pub fn new(coordinators: Vec<User>) -> Self {
        Self { coordinators }
    }

    pub fn coordinators(&self) -> &[User] {
        &self.coordinators
    }

    /// Exact, case-sensitive email match.
    pub fn find_coordinator(&self, email: &str) -> Option<&User> {
        self.coordinators.iter().find(|u| u.email == email)
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.find_coordinator(email).is_some()
    }

    /// Add a coordinator under a fresh time-ordered `new-` id. Returns `None`
    /// when the email is already registered.
    pub fn register_coordinator(&mut self, name: &str, email: &str) -> Option<User> {
        if self.contains_email(email) {
            return None;
        }

        let user = User {
            id: id::generate(id::COORDINATOR),
            name: name.to_string(),
            email: email.to_string(),
            role: UserRole::Coordinator,
            access_code: None,
        };
        self.coordinators.push(user.clone());
        Some(user)
    }
}
