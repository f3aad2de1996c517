//! Domain-level error envelope.
//!
//! The type is transport agnostic. The HTTP adapter maps [`ErrorCode`] to a
//! status code and serialises the envelope as the response body.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TraceId;

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// Authentication failed or is missing.
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    Forbidden,
    /// The requested resource does not exist.
    NotFound,
    /// The request conflicts with existing state.
    Conflict,
    /// A downstream dependency is unavailable.
    ServiceUnavailable,
    /// An unexpected error occurred inside the portal.
    InternalError,
}

/// Errors raised when an [`Error`] is constructed from invalid parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The trace identifier was blank once trimmed.
    #[error("trace identifier must not be empty")]
    EmptyTraceId,
}

/// Error envelope returned to API clients.
///
/// ## Invariants
/// - `message` is non-empty once trimmed.
/// - `trace_id`, when present, is non-empty.
///
/// # Examples
/// ```
/// use portal::domain::{Error, ErrorCode};
///
/// let err = Error::unauthorized("login required");
/// assert_eq!(err.code(), ErrorCode::Unauthorized);
/// assert_eq!(err.message(), "login required");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create a new error, capturing the trace identifier in scope.
    ///
    /// A blank message is replaced by a generic one rather than rejected so
    /// this constructor never fails.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "Unexpected error".to_owned()
        } else {
            message
        };
        Self {
            code,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier, when one was in scope or attached.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary structured details.
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach a trace identifier.
    ///
    /// # Errors
    /// Returns [`ErrorValidationError::EmptyTraceId`] for blank identifiers.
    pub fn try_with_trace_id(mut self, id: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ErrorValidationError::EmptyTraceId);
        }
        self.trace_id = Some(id);
        Ok(self)
    }

    /// Attach a trace identifier, ignoring blank values.
    #[must_use]
    pub fn with_trace_id(self, id: impl Into<String>) -> Self {
        let id = id.into();
        match self.clone().try_with_trace_id(id) {
            Ok(error) => error,
            Err(_) => self,
        }
    }

    /// Attach structured details.
    ///
    /// # Examples
    /// ```
    /// use portal::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "field": "email" }));
    /// assert!(err.details().is_some());
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    //! Construction and serialisation coverage for the error envelope.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    const TRACE: &str = "00000000-0000-0000-0000-000000000000";

    #[rstest]
    #[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
    #[case(Error::unauthorized("no"), ErrorCode::Unauthorized)]
    #[case(Error::new(ErrorCode::Forbidden, "no"), ErrorCode::Forbidden)]
    #[case(Error::new(ErrorCode::NotFound, "gone"), ErrorCode::NotFound)]
    #[case(Error::new(ErrorCode::Conflict, "dup"), ErrorCode::Conflict)]
    #[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
    #[case(Error::internal("boom"), ErrorCode::InternalError)]
    fn constructors_set_codes(#[case] error: Error, #[case] expected: ErrorCode) {
        assert_eq!(error.code(), expected);
    }

    #[rstest]
    fn new_substitutes_blank_messages() {
        assert_eq!(Error::internal(" ").message(), "Unexpected error");
    }

    #[rstest]
    fn try_with_trace_id_rejects_blank_values() {
        let result = Error::invalid_request("bad").try_with_trace_id(" ");
        assert_eq!(result, Err(ErrorValidationError::EmptyTraceId));
    }

    #[rstest]
    fn trace_id_is_absent_out_of_scope() {
        assert!(Error::internal("boom").trace_id().is_none());
    }

    #[tokio::test]
    async fn new_captures_scoped_trace_id() {
        let trace_id: TraceId = TRACE.parse().expect("valid UUID");
        let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
        assert_eq!(error.trace_id(), Some(TRACE));
    }

    #[rstest]
    fn serialises_camel_case_and_skips_empty_fields() {
        let plain = serde_json::to_value(Error::unauthorized("missing")).expect("serialise");
        assert_eq!(plain, json!({ "code": "unauthorized", "message": "missing" }));

        let traced = Error::invalid_request("bad")
            .with_trace_id(TRACE)
            .with_details(json!({ "field": "email" }));
        let value = serde_json::to_value(traced).expect("serialise");
        assert_eq!(value["traceId"], json!(TRACE));
        assert_eq!(value["details"]["field"], json!("email"));
    }
}
