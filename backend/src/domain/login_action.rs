//! Login server action.
//!
//! `Idle → Validating → {ValidationFailed | CredentialCheck} →
//! {CredentialFailed | SessionEstablished}`. Rejections are ordinary values;
//! an established session carries everything the inbound adapter needs to set
//! the `token` cookie and redirect.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::auth::{CREDENTIALS_FIELD, INVALID_CREDENTIALS};
use crate::domain::ports::{CredentialStore, CredentialStoreError, LoginCommand};
use crate::domain::{DASHBOARD_PATH, Error, FieldErrors, LoginCredentials, SessionUser};

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Validation or credential check failed.
    Rejected(LoginRejection),
    /// Credentials matched an account.
    Established {
        /// Record to store in the session cookie.
        session: SessionUser,
        /// Where the client is sent next.
        redirect_to: String,
    },
}

impl LoginOutcome {
    fn rejected(errors: FieldErrors) -> Self {
        Self::Rejected(LoginRejection { errors })
    }
}

/// Failed login reported to the caller as `{"success": false, "errors": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRejection {
    /// Field-scoped failure messages.
    pub errors: FieldErrors,
}

#[derive(Serialize)]
struct RejectionWire<'a> {
    success: bool,
    errors: &'a FieldErrors,
}

impl Serialize for LoginRejection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RejectionWire {
            success: false,
            errors: &self.errors,
        }
        .serialize(serializer)
    }
}

fn map_store_error(error: CredentialStoreError) -> Error {
    match error {
        CredentialStoreError::Backend { message } => {
            Error::service_unavailable(format!("credential store unavailable: {message}"))
        }
    }
}

/// Login service implementing [`LoginCommand`] over a [`CredentialStore`].
#[derive(Clone)]
pub struct LoginActionService<S> {
    store: Arc<S>,
}

impl<S> LoginActionService<S> {
    /// Create a service backed by `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> LoginCommand for LoginActionService<S>
where
    S: CredentialStore,
{
    async fn submit_login(&self, input: &Value) -> Result<LoginOutcome, Error> {
        let credentials = match LoginCredentials::parse(input) {
            Ok(credentials) => credentials,
            Err(errors) => {
                debug!(fields = ?errors.fields().collect::<Vec<_>>(), "login validation failed");
                return Ok(LoginOutcome::rejected(errors));
            }
        };

        let account = self
            .store
            .find_user_by_credentials(credentials.email(), credentials.password().expose())
            .await
            .map_err(|error| {
                warn!(error = %error, "credential lookup failed");
                map_store_error(error)
            })?;

        let Some(account) = account else {
            info!("login rejected: unknown credentials");
            return Ok(LoginOutcome::rejected(FieldErrors::single(
                CREDENTIALS_FIELD,
                INVALID_CREDENTIALS,
            )));
        };

        info!(user_id = account.user_id, role = %account.role, "session established");
        Ok(LoginOutcome::Established {
            session: account.to_session_user(),
            redirect_to: DASHBOARD_PATH.to_owned(),
        })
    }
}
