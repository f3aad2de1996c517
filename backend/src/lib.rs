//! Account portal backend.
//!
//! Hosts the sign-up and login server actions, the user API they talk to,
//! and the UI-side input controllers that drive them.

pub mod client;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
