//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **user_api**: reqwest client for the remote user API (`POST /api/user`)
//! - **user_list**: reqwest client for the public user list
//! - **memory**: in-process account store used for login and account creation
//!
//! Adapters are thin translators between domain types and transport
//! representations. They contain no business logic.

pub mod memory;
pub mod user_api;
pub mod user_list;
