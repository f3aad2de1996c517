//! Remote user API adapters.
//!
//! Provides the reqwest implementation of the `UserApi` port used by the
//! sign-up action.

mod dto;
mod http_source;

pub use http_source::{HttpUserApi, USER_API_PATH, user_api_endpoint};
