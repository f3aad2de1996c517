//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{LoginCommand, SignupCommand, UserRepository, UsersQuery};

use super::session::SessionCookies;

/// Parameter object bundling the port implementations used by handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// Sign-up server action.
    pub signup: Arc<dyn SignupCommand>,
    /// Login server action.
    pub login: Arc<dyn LoginCommand>,
    /// Public user list.
    pub users: Arc<dyn UsersQuery>,
    /// Store behind `POST /api/user`.
    pub accounts: Arc<dyn UserRepository>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Sign-up server action.
    pub signup: Arc<dyn SignupCommand>,
    /// Login server action.
    pub login: Arc<dyn LoginCommand>,
    /// Public user list.
    pub users: Arc<dyn UsersQuery>,
    /// Store behind `POST /api/user`.
    pub accounts: Arc<dyn UserRepository>,
    /// Session cookie attributes.
    pub cookies: SessionCookies,
}

impl HttpState {
    /// Construct state from a ports bundle and cookie settings.
    pub fn new(ports: HttpStatePorts, cookies: SessionCookies) -> Self {
        let HttpStatePorts {
            signup,
            login,
            users,
            accounts,
        } = ports;
        Self {
            signup,
            login,
            users,
            accounts,
            cookies,
        }
    }
}
