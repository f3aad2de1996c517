//! Driven port persisting accounts created through `POST /api/user`.

use async_trait::async_trait;

use crate::domain::{Account, NewUser};

use super::define_port_error;

define_port_error! {
    /// Failures reported by user repository adapters.
    pub enum UserRepositoryError {
        /// An account already uses this e-mail address.
        DuplicateEmail { email: String } => "an account already exists for {email}",
        /// The backing store failed.
        Backend { message: String } => "user repository failed: {message}",
    }
}

/// Account persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store `user`, assigning its identifier.
    async fn insert(&self, user: NewUser) -> Result<Account, UserRepositoryError>;
}
