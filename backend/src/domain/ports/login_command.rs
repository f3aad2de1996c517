//! Driving port for the login server action.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Error, LoginOutcome};

/// Login use-case invoked by inbound adapters.
#[async_trait]
pub trait LoginCommand: Send + Sync {
    /// Validate `input` and look the account up.
    ///
    /// Rejections are values; `Err` is reserved for an unavailable store.
    async fn submit_login(&self, input: &Value) -> Result<LoginOutcome, Error>;
}
