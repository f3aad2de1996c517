//! Domain primitives, services and ports.
//!
//! Purpose: hold the sign-up and login server actions, the form schemas they
//! validate against, and the records exchanged with the user API. Inbound and
//! outbound adapters depend on this module; it depends on neither.
//!
//! Public surface:
//! - Error / ErrorCode: API error envelope and stable error identifiers.
//! - SignupForm / LoginCredentials: validated form inputs.
//! - ActionResult: tagged result of a server action.
//! - SignupActionService / LoginActionService / UsersQueryService: driving
//!   port implementations.

pub mod action_result;
pub mod auth;
pub mod error;
pub mod field_errors;
pub(crate) mod form_schema;
pub mod login_action;
pub mod ports;
pub mod signup;
pub mod signup_action;
pub mod trace_id;
pub mod user;
pub mod users_query;

pub use self::action_result::{ActionResult, DASHBOARD_PATH, RedirectTarget};
pub use self::auth::LoginCredentials;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::field_errors::{FieldErrors, ValidationErrors};
pub use self::login_action::{LoginActionService, LoginOutcome, LoginRejection};
pub use self::signup::SignupForm;
pub use self::signup_action::{FETCH_FAILED, SignupActionService, VALIDATION_FAILED};
pub use self::trace_id::TraceId;
pub use self::user::{
    Account, NewUser, Password, Role, SessionProfile, SessionUser, UserSummary,
};
pub use self::users_query::UsersQueryService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use portal::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("login required"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
