//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer, the schema
//! wrappers that describe domain types without coupling them to utoipa, and
//! the `token` cookie security scheme.
//!
//! The document backs Swagger UI (debug builds) and is exported with
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{
    ActionResultSchema, ErrorCodeSchema, ErrorSchema, FieldErrorsSchema, LoginRejectionSchema,
    LoginRequestSchema, RoleSchema, SessionProfileSchema, SignupRequestSchema, UserSummarySchema,
    ValidationErrorsSchema,
};
use crate::inbound::http::users::{CreateUserRequest, MessageResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "token",
                "Session cookie issued by POST /actions/login.",
            ))),
        );
    }
}

/// OpenAPI document for the portal.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Account portal API",
        description = "Sign-up and login server actions, the user API they call, and the session dashboard.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::actions::signup,
        crate::inbound::http::actions::login,
        crate::inbound::http::actions::logout,
        crate::inbound::http::dashboard::dashboard,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        RoleSchema,
        FieldErrorsSchema,
        ValidationErrorsSchema,
        ActionResultSchema,
        LoginRejectionSchema,
        SessionProfileSchema,
        UserSummarySchema,
        SignupRequestSchema,
        LoginRequestSchema,
        CreateUserRequest,
        MessageResponse,
    )),
    tags(
        (name = "users", description = "User API and public user list"),
        (name = "actions", description = "Form server actions"),
        (name = "session", description = "Endpoints behind the session cookie")
    )
)]
pub struct ApiDoc;
