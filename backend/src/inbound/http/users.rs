//! User API handlers.
//!
//! ```text
//! POST /api/user {"email":"…","password":"…","role":"user","username":"…"}
//! GET /api/users
//! ```
//!
//! `POST /api/user` is the remote user API the sign-up action calls. It
//! answers `{ "message": … }` on every path instead of the error envelope.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::domain::ports::UserRepositoryError;
use crate::domain::{NewUser, Password, Role, UserSummary};
use crate::inbound::http::schemas::UserSummarySchema;
use crate::inbound::http::state::HttpState;

/// Reply when any field is missing or empty. The spelling is part of the
/// client contract.
pub const INVALID_CREDENTIALS: &str = "Invalid credentionals";
/// Reply when the role is neither `user` nor `admin`.
pub const INVALID_ROLE: &str = "Invalid role";
/// Reply when the e-mail address is already registered.
pub const EMAIL_EXISTS: &str = "Email already exists";
/// Reply when the account was stored.
pub const USER_CREATED: &str = "User created successfully!";

/// Request body for `POST /api/user`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    /// Login e-mail address.
    pub email: Option<String>,
    /// Login password.
    pub password: Option<String>,
    /// `user` or `admin`.
    pub role: Option<String>,
    /// Public handle.
    pub username: Option<String>,
}

/// Body of every `POST /api/user` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

impl MessageResponse {
    fn reply(status: StatusCode, message: impl Into<String>) -> HttpResponse {
        HttpResponse::build(status).json(Self {
            message: message.into(),
        })
    }
}

enum CreateUserRejection {
    MissingField,
    UnknownRole,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_request(request: CreateUserRequest) -> Result<NewUser, CreateUserRejection> {
    let (Some(email), Some(password), Some(role), Some(username)) = (
        non_empty(request.email),
        non_empty(request.password),
        non_empty(request.role),
        non_empty(request.username),
    ) else {
        return Err(CreateUserRejection::MissingField);
    };
    let role = Role::parse(&role).ok_or(CreateUserRejection::UnknownRole)?;
    Ok(NewUser {
        email,
        password: Password::new(password),
        role,
        username,
    })
}

/// Create an account.
#[utoipa::path(
    post,
    path = "/api/user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Account created", body = MessageResponse),
        (status = 400, description = "Unknown role", body = MessageResponse),
        (status = 401, description = "Missing or empty field", body = MessageResponse),
        (status = 409, description = "E-mail already registered", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tags = ["users"],
    operation_id = "createUser",
    security([])
)]
#[post("/api/user")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> HttpResponse {
    let user = match parse_request(payload.into_inner()) {
        Ok(user) => user,
        Err(CreateUserRejection::MissingField) => {
            return MessageResponse::reply(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS);
        }
        Err(CreateUserRejection::UnknownRole) => {
            return MessageResponse::reply(StatusCode::BAD_REQUEST, INVALID_ROLE);
        }
    };

    match state.accounts.insert(user).await {
        Ok(account) => {
            info!(user_id = account.user_id, role = %account.role, "account stored");
            MessageResponse::reply(StatusCode::CREATED, USER_CREATED)
        }
        Err(UserRepositoryError::DuplicateEmail { .. }) => {
            MessageResponse::reply(StatusCode::CONFLICT, EMAIL_EXISTS)
        }
        Err(err @ UserRepositoryError::Backend { .. }) => {
            error!(error = %err, "account store failed");
            MessageResponse::reply(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

/// List public user profiles.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use portal::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users; empty when the listing service is unavailable", body = [UserSummarySchema])
    ),
    tags = ["users"],
    operation_id = "listUsers",
    security([])
)]
#[get("/api/users")]
pub async fn list_users(state: web::Data<HttpState>) -> web::Json<Vec<UserSummary>> {
    web::Json(state.users.list_users().await)
}
