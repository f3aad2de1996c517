//! Sign-up server action.
//!
//! Validates the submitted form, then asks the remote user API to create the
//! account. Every failure mode is folded into the returned [`ActionResult`];
//! nothing is raised to the caller.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::ports::{SignupCommand, UserApi, UserApiError};
use crate::domain::{ActionResult, RedirectTarget, SignupForm};

/// Message returned when the submitted form fails validation.
pub const VALIDATION_FAILED: &str = "Validation failed.";
/// Message returned when the user API cannot be reached. The wording is part
/// of the client contract and must not be corrected.
pub const FETCH_FAILED: &str = "Faild to Fetch";

/// Sign-up service implementing [`SignupCommand`] over a [`UserApi`].
#[derive(Clone)]
pub struct SignupActionService<A> {
    user_api: Arc<A>,
}

impl<A> SignupActionService<A> {
    /// Create a service backed by `user_api`.
    pub fn new(user_api: Arc<A>) -> Self {
        Self { user_api }
    }
}

#[async_trait]
impl<A> SignupCommand for SignupActionService<A>
where
    A: UserApi,
{
    async fn submit_signup(&self, input: &Value) -> ActionResult<RedirectTarget> {
        let form = match SignupForm::parse(input) {
            Ok(form) => form,
            Err(errors) => {
                debug!(
                    fields = ?errors.field_errors().fields().collect::<Vec<_>>(),
                    "sign-up validation failed"
                );
                return ActionResult::invalid(VALIDATION_FAILED, errors);
            }
        };

        let user = form.into_new_user();
        match self.user_api.create_user(&user).await {
            Ok(message) => {
                info!(username = %user.username, "account created");
                ActionResult::success(message, RedirectTarget::dashboard())
            }
            Err(UserApiError::Rejected { status, message }) => {
                info!(status, %message, "user API rejected sign-up");
                ActionResult::failure(message)
            }
            Err(error @ (UserApiError::Transport { .. } | UserApiError::Decode { .. })) => {
                warn!(error = %error, "user API call failed");
                ActionResult::failure(FETCH_FAILED)
            }
        }
    }
}
