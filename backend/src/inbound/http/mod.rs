//! HTTP inbound adapter exposing the portal endpoints.

pub mod actions;
pub mod dashboard;
pub mod error;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod users;

use actix_web::web;

pub use error::{ApiResult, json_config};

/// Register every portal endpoint and the JSON extractor configuration.
///
/// # Examples
/// ```
/// use actix_web::App;
///
/// let app = App::new().configure(portal::inbound::http::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(users::create_user)
        .service(users::list_users)
        .service(actions::signup)
        .service(actions::login)
        .service(actions::logout)
        .service(dashboard::dashboard);
}
