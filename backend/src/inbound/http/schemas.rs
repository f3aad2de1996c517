//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and live in the inbound adapter
//! layer where framework concerns belong.

use std::collections::BTreeMap;

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The resource already exists.
    #[schema(rename = "conflict")]
    Conflict,
    /// A dependency is temporarily unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "login required")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Role`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Role)]
pub enum RoleSchema {
    /// Regular account.
    #[schema(rename = "user")]
    User,
    /// Administrative account.
    #[schema(rename = "admin")]
    Admin,
}

/// OpenAPI schema for [`crate::domain::FieldErrors`]: field name to messages.
#[derive(ToSchema)]
#[schema(as = crate::domain::FieldErrors)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FieldErrorsSchema(BTreeMap<String, Vec<String>>);

/// OpenAPI schema for [`crate::domain::ValidationErrors`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ValidationErrors, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ValidationErrorsSchema {
    /// Errors about the submission as a whole.
    form_errors: Vec<String>,
    /// Errors keyed by field.
    field_errors: FieldErrorsSchema,
}

/// OpenAPI schema for [`crate::domain::ActionResult`].
///
/// `payload` is the redirect target on success and the validation bag on a
/// validation failure; it is omitted otherwise.
#[derive(ToSchema)]
#[schema(as = crate::domain::ActionResult)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ActionResultSchema {
    /// Whether the action succeeded.
    success: bool,
    /// Message shown to the user.
    #[schema(example = "User created successfully")]
    message: String,
    /// `{ "url": "/dashboard" }` or a validation bag.
    payload: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::LoginRejection`].
#[derive(ToSchema)]
#[schema(as = crate::domain::LoginRejection)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LoginRejectionSchema {
    /// Always `false`.
    success: bool,
    /// Failure messages keyed by field (`credentials` for unknown accounts).
    errors: FieldErrorsSchema,
}

/// OpenAPI schema for [`crate::domain::SessionProfile`].
#[derive(ToSchema)]
#[schema(as = crate::domain::SessionProfile)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SessionProfileSchema {
    /// Account identifier.
    #[schema(rename = "userID", example = 1)]
    user_id: u64,
    /// Login e-mail address.
    #[schema(example = "user@gmail.com")]
    email: String,
    /// Account role.
    role: RoleSchema,
}

/// OpenAPI schema for [`crate::domain::UserSummary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::UserSummary, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSummarySchema {
    /// Identifier assigned by the listing service.
    id: String,
    /// Display name.
    name: String,
    /// Public handle.
    username: String,
    /// Avatar URL, possibly empty.
    avatar: String,
    /// Creation timestamp.
    created_at: String,
}

/// Documented shape of a sign-up submission. The endpoint accepts any JSON
/// and reports shape problems as field errors.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SignupRequestSchema {
    /// 3 to 20 letters, digits or underscores.
    #[schema(example = "mohammd234")]
    username: String,
    /// Contact and login e-mail address.
    #[schema(example = "test@gmail.com")]
    email: String,
    /// At least six characters.
    #[schema(example = "123412341234")]
    password: String,
}

/// Documented shape of a login submission.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LoginRequestSchema {
    /// Login e-mail address.
    #[schema(example = "user@gmail.com")]
    email: String,
    /// At least six characters.
    #[schema(example = "useruser")]
    password: String,
}
