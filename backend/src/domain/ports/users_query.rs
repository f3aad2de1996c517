//! Driving port for the public user list.

use async_trait::async_trait;

use crate::domain::UserSummary;

/// User list use-case invoked by inbound adapters.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return the public user list; empty when the upstream is unavailable.
    async fn list_users(&self) -> Vec<UserSummary>;
}
