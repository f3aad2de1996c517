//! Uniform result of a server action.
//!
//! [`ActionResult`] is a two-variant sum type so a success can never carry
//! validation errors. On the wire both variants share one object shape:
//! `{ "success": bool, "message": string, "payload"?: ... }`, where the
//! payload of a failure is the validation bag (when there is one).

use serde::{Serialize, Serializer};

use super::ValidationErrors;

/// Path the client navigates to after a successful sign-up or login.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Follow-up navigation carried by a successful action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct RedirectTarget {
    /// Relative URL to navigate to.
    pub url: String,
}

impl RedirectTarget {
    /// Redirect to the dashboard.
    #[must_use]
    pub fn dashboard() -> Self {
        Self {
            url: DASHBOARD_PATH.to_owned(),
        }
    }
}

/// Outcome of a server action invocation.
///
/// # Examples
/// ```
/// use portal::domain::{ActionResult, RedirectTarget};
/// use serde_json::json;
///
/// let result = ActionResult::success("done", RedirectTarget::dashboard());
/// assert_eq!(
///     serde_json::to_value(&result).unwrap(),
///     json!({ "success": true, "message": "done", "payload": { "url": "/dashboard" } })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult<T> {
    /// The action completed; `payload` carries follow-up data.
    Success {
        /// Message shown to the user.
        message: String,
        /// Follow-up data such as a redirect target.
        payload: Option<T>,
    },
    /// The action failed; `errors` is present for validation failures only.
    Failure {
        /// Message shown to the user.
        message: String,
        /// Field-scoped validation errors.
        errors: Option<ValidationErrors>,
    },
}

impl<T> ActionResult<T> {
    /// Successful outcome carrying `payload`.
    pub fn success(message: impl Into<String>, payload: T) -> Self {
        Self::Success {
            message: message.into(),
            payload: Some(payload),
        }
    }

    /// Failed outcome with a form-level message only.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
            errors: None,
        }
    }

    /// Failed outcome carrying validation errors.
    pub fn invalid(message: impl Into<String>, errors: ValidationErrors) -> Self {
        Self::Failure {
            message: message.into(),
            errors: Some(errors),
        }
    }

    /// Whether the action succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Message shown to the user.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Failure { message, .. } => message,
        }
    }
}

#[derive(Serialize)]
struct Wire<'a, P> {
    success: bool,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<P>,
}

impl<T: Serialize> Serialize for ActionResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success { message, payload } => Wire {
                success: true,
                message,
                payload: payload.as_ref(),
            }
            .serialize(serializer),
            Self::Failure { message, errors } => Wire {
                success: false,
                message,
                payload: errors.as_ref(),
            }
            .serialize(serializer),
        }
    }
}
