//! Command-line and environment configuration for the portal server.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use portal::outbound::user_list::DEFAULT_USERS_ENDPOINT;
use url::Url;

/// Settings read once at start-up.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "portal",
    about = "Serve the account portal: server actions, user API and dashboard"
)]
pub struct ServerSettings {
    /// Socket address to listen on.
    #[arg(long, env = "PORTAL_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,
    /// Base URL of the user API; sign-ups are posted to `<url>/api/user`.
    ///
    /// Read once at start-up. Changing it requires a restart.
    #[arg(long = "currect-domain", env = "CURRECT_DOMAIN", value_name = "url")]
    pub currect_domain: Url,
    /// Upstream service listing public user profiles.
    #[arg(
        long,
        env = "PORTAL_USERS_ENDPOINT",
        value_name = "url",
        default_value = DEFAULT_USERS_ENDPOINT
    )]
    pub users_endpoint: Url,
    /// Deadline for user API calls in milliseconds; unset waits indefinitely.
    #[arg(long, env = "PORTAL_USER_API_TIMEOUT_MS", value_name = "ms")]
    pub user_api_timeout_ms: Option<u64>,
    /// Issue session cookies without the `Secure` flag (plain-HTTP development).
    #[arg(long, env = "PORTAL_INSECURE_COOKIES")]
    pub insecure_cookies: bool,
}

impl ServerSettings {
    /// Optional deadline applied to user API requests.
    #[must_use]
    pub fn user_api_timeout(&self) -> Option<Duration> {
        self.user_api_timeout_ms.map(Duration::from_millis)
    }

    /// Whether session cookies carry the `Secure` flag.
    #[must_use]
    pub fn cookie_secure(&self) -> bool {
        !self.insecure_cookies
    }
}
