//! Reqwest-backed user list adapter.

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::dto::UserSummaryDto;
use crate::domain::UserSummary;
use crate::domain::ports::{UserListError, UserListSource};

/// Listing service queried when no endpoint is configured.
pub const DEFAULT_USERS_ENDPOINT: &str = "https://674c4a4454e1fca9290c1f5f.mockapi.io/users";

/// User list adapter issuing one `GET` per query.
pub struct HttpUserListSource {
    client: Client,
    endpoint: Url,
}

impl HttpUserListSource {
    /// Build an adapter for `endpoint`.
    ///
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint,
        })
    }
}

#[async_trait]
impl UserListSource for HttpUserListSource {
    async fn fetch_users(&self) -> Result<Vec<UserSummary>, UserListError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| UserListError::transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UserListError::transport(format!(
                "status {}",
                status.as_u16()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| UserListError::transport(error.to_string()))?;
        parse_users(body.as_ref())
    }
}

fn parse_users(body: &[u8]) -> Result<Vec<UserSummary>, UserListError> {
    let decoded: Vec<UserSummaryDto> = serde_json::from_slice(body)
        .map_err(|error| UserListError::decode(format!("invalid user list payload: {error}")))?;
    decoded
        .into_iter()
        .map(UserSummaryDto::into_domain)
        .collect::<Result<_, _>>()
        .map_err(UserListError::decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_id_representations() {
        let body = r#"[
            { "id": "1", "name": "Ada", "username": "ada", "avatar": "", "createdAt": "2024-12-01" },
            { "id": 2, "name": "Grace", "username": "grace" }
        ]"#;

        let users = parse_users(body.as_bytes()).expect("list decodes");

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].created_at, "2024-12-01");
        assert_eq!(users[1].id, "2");
        assert!(users[1].avatar.is_empty());
    }

    #[test]
    fn rejects_non_list_payloads() {
        let error = parse_users(br#"{"message":"Not found"}"#).expect_err("decode fails");
        assert!(matches!(error, UserListError::Decode { .. }));
    }

    #[test]
    fn rejects_structured_ids() {
        let error = parse_users(br#"[{ "id": { "oid": 1 } }]"#).expect_err("decode fails");
        assert!(matches!(error, UserListError::Decode { .. }));
    }

    #[test]
    fn default_endpoint_is_a_valid_url() {
        assert!(Url::parse(DEFAULT_USERS_ENDPOINT).is_ok());
    }
}
