//! Reqwest-backed user API adapter.
//!
//! This adapter owns transport details only: request serialisation, optional
//! timeout, status mapping and decoding of the `{ message }` body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::{CreateUserRequestDto, MessageResponseDto};
use crate::domain::NewUser;
use crate::domain::ports::{UserApi, UserApiError};

/// Path of the user creation endpoint relative to the configured domain.
pub const USER_API_PATH: &str = "/api/user";

/// Append [`USER_API_PATH`] to `base`, tolerating a trailing slash.
///
/// # Errors
/// Returns an error when the joined string is not a valid URL.
///
/// # Examples
/// ```
/// use portal::outbound::user_api::user_api_endpoint;
/// use url::Url;
///
/// let base = Url::parse("http://localhost:3000/").unwrap();
/// let endpoint = user_api_endpoint(&base).unwrap();
/// assert_eq!(endpoint.as_str(), "http://localhost:3000/api/user");
/// ```
pub fn user_api_endpoint(base: &Url) -> Result<Url, url::ParseError> {
    let trimmed = base.as_str().trim_end_matches('/');
    Url::parse(&format!("{trimmed}{USER_API_PATH}"))
}

/// User API adapter issuing one `POST` per sign-up.
pub struct HttpUserApi {
    client: Client,
    endpoint: Url,
}

impl HttpUserApi {
    /// Build an adapter for `endpoint`.
    ///
    /// Requests have no deadline unless `timeout` is set.
    ///
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    /// Endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn create_user(&self, user: &NewUser) -> Result<String, UserApiError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&CreateUserRequestDto::from(user))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(status = status.as_u16(), endpoint = %self.endpoint, "user API answered");
        interpret_response(status, body.as_ref())
    }
}

fn interpret_response(status: StatusCode, body: &[u8]) -> Result<String, UserApiError> {
    let decoded: MessageResponseDto = serde_json::from_slice(body).map_err(|error| {
        UserApiError::decode(format!("invalid user API JSON payload: {error}"))
    })?;
    if status.is_success() {
        Ok(decoded.message)
    } else {
        Err(UserApiError::rejected(status.as_u16(), decoded.message))
    }
}

fn map_transport_error(error: reqwest::Error) -> UserApiError {
    UserApiError::transport(error.to_string())
}
