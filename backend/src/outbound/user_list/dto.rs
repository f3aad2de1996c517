//! DTOs for decoding the upstream user list.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::UserSummary;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserSummaryDto {
    id: Value,
    #[serde(default)]
    name: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    avatar: String,
    #[serde(default)]
    created_at: String,
}

impl UserSummaryDto {
    /// Identifiers arrive as strings or numbers depending on the upstream.
    pub(super) fn into_domain(self) -> Result<UserSummary, String> {
        let id = match self.id {
            Value::String(id) => id,
            Value::Number(id) => id.to_string(),
            other => return Err(format!("unsupported user id: {other}")),
        };
        Ok(UserSummary {
            id,
            name: self.name,
            username: self.username,
            avatar: self.avatar,
            created_at: self.created_at,
        })
    }
}
