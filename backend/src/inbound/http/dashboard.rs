//! Dashboard endpoint: the landing page after sign-up or login.

use actix_web::{get, web};

use crate::domain::SessionProfile;
use crate::inbound::http::schemas::{ErrorSchema, SessionProfileSchema};
use crate::inbound::http::session::CurrentSession;

/// Profile of the logged-in user. The stored password is never echoed.
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Session profile", body = SessionProfileSchema),
        (status = 401, description = "No valid session", body = ErrorSchema)
    ),
    tags = ["session"],
    operation_id = "dashboard",
    security(("SessionCookie" = []))
)]
#[get("/dashboard")]
pub async fn dashboard(session: CurrentSession) -> web::Json<SessionProfile> {
    web::Json(SessionProfile::from(&session.0))
}
