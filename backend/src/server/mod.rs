//! Server construction and adapter wiring.

mod config;

pub use config::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use portal::Trace;
#[cfg(debug_assertions)]
use portal::doc::ApiDoc;
use portal::domain::{LoginActionService, SignupActionService, UsersQueryService};
use portal::inbound::http::session::SessionCookies;
use portal::inbound::http::state::{HttpState, HttpStatePorts};
use portal::outbound::memory::InMemoryAccounts;
use portal::outbound::user_api::{HttpUserApi, user_api_endpoint};
use portal::outbound::user_list::HttpUserListSource;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build adapters and services from `settings`.
///
/// # Errors
/// Returns an error when an endpoint URL is invalid or an HTTP client cannot
/// be constructed.
pub fn build_http_state(settings: &ServerSettings) -> std::io::Result<HttpState> {
    let endpoint = user_api_endpoint(&settings.currect_domain).map_err(std::io::Error::other)?;
    let user_api =
        HttpUserApi::new(endpoint, settings.user_api_timeout()).map_err(std::io::Error::other)?;
    info!(endpoint = %user_api.endpoint(), timeout = ?settings.user_api_timeout(), "user API configured");
    let user_list =
        HttpUserListSource::new(settings.users_endpoint.clone()).map_err(std::io::Error::other)?;
    let accounts = Arc::new(InMemoryAccounts::seeded());

    let ports = HttpStatePorts {
        signup: Arc::new(SignupActionService::new(Arc::new(user_api))),
        login: Arc::new(LoginActionService::new(Arc::clone(&accounts))),
        users: Arc::new(UsersQueryService::new(Arc::new(user_list))),
        accounts,
    };
    Ok(HttpState::new(
        ports,
        SessionCookies::new(settings.cookie_secure()),
    ))
}

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .wrap(Trace)
        .configure(portal::inbound::http::configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the Actix HTTP server described by `settings`.
///
/// # Errors
/// Propagates failures building adapters or binding the socket.
pub fn create_server(settings: &ServerSettings) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(settings)?);
    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(settings.bind)?
        .run();
    info!(bind = %settings.bind, "portal listening");
    Ok(server)
}
