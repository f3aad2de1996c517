//! Public user list adapters.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_USERS_ENDPOINT, HttpUserListSource};
