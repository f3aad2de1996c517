//! Driven port for the remote user API that persists new accounts.

use async_trait::async_trait;

use crate::domain::NewUser;

use super::define_port_error;

define_port_error! {
    /// Failures reported by user API adapters.
    pub enum UserApiError {
        /// The request could not be completed (connection, DNS, timeout).
        Transport { message: String } => "user API transport failed: {message}",
        /// The response body could not be decoded.
        Decode { message: String } => "user API response could not be decoded: {message}",
        /// The API answered with a non-success status and its own message.
        Rejected { status: u16, message: String } =>
            "user API rejected the request with status {status}: {message}",
    }
}

/// Client side of `POST /api/user`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Create `user`, returning the confirmation message sent by the API.
    async fn create_user(&self, user: &NewUser) -> Result<String, UserApiError>;
}
