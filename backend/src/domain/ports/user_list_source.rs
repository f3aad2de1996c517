//! Driven port for the upstream service that lists public user profiles.

use async_trait::async_trait;

use crate::domain::UserSummary;

use super::define_port_error;

define_port_error! {
    /// Failures reported by user list adapters.
    pub enum UserListError {
        /// The upstream service could not be reached.
        Transport { message: String } => "user list transport failed: {message}",
        /// The upstream payload was not a user list.
        Decode { message: String } => "user list could not be decoded: {message}",
    }
}

/// Upstream user list provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserListSource: Send + Sync {
    /// Fetch every public user profile.
    async fn fetch_users(&self) -> Result<Vec<UserSummary>, UserListError>;
}
