//! Driving port for the sign-up server action.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{ActionResult, RedirectTarget};

/// Sign-up use-case invoked by inbound adapters.
///
/// Implementations never fail: every failure mode is folded into the
/// returned [`ActionResult`].
#[async_trait]
pub trait SignupCommand: Send + Sync {
    /// Validate `input` and create the account it describes.
    async fn submit_signup(&self, input: &Value) -> ActionResult<RedirectTarget>;
}
