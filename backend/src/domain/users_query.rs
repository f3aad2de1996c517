//! Public user list service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::UserSummary;
use crate::domain::ports::{UserListSource, UsersQuery};

/// Service implementing [`UsersQuery`] over a [`UserListSource`].
///
/// Upstream failures degrade to an empty list.
#[derive(Clone)]
pub struct UsersQueryService<S> {
    source: Arc<S>,
}

impl<S> UsersQueryService<S> {
    /// Create a service backed by `source`.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> UsersQuery for UsersQueryService<S>
where
    S: UserListSource,
{
    async fn list_users(&self) -> Vec<UserSummary> {
        match self.source.fetch_users().await {
            Ok(users) => users,
            Err(error) => {
                warn!(error = %error, "user list unavailable");
                Vec::new()
            }
        }
    }
}
