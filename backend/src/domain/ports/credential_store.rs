//! Driven port used by the login action to look accounts up.

use async_trait::async_trait;

use crate::domain::Account;

use super::define_port_error;

define_port_error! {
    /// Failures reported by credential store adapters.
    pub enum CredentialStoreError {
        /// The backing store could not answer.
        Backend { message: String } => "credential store failed: {message}",
    }
}

/// Account lookup by e-mail and password.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Return the account matching both `email` and `password`, if any.
    async fn find_user_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, CredentialStoreError>;
}
