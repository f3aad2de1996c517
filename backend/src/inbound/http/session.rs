//! `token` session cookie handling.
//!
//! The cookie value is the JSON-serialised [`SessionUser`], percent-encoded
//! on the wire. Handlers use [`SessionCookies`] to issue or clear it and the
//! [`CurrentSession`] extractor to read it back.

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header::{self, HeaderValue};
use actix_web::{FromRequest, HttpRequest, HttpResponseBuilder, dev::Payload};
use futures_util::future::{Ready, ready};
use tracing::warn;

use crate::domain::{Error, SessionUser};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";
/// Lifetime of the session cookie: seven days.
pub const SESSION_MAX_AGE_SECS: i64 = 604_800;

/// Attributes applied to the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCookies {
    secure: bool,
}

impl Default for SessionCookies {
    fn default() -> Self {
        Self { secure: true }
    }
}

impl SessionCookies {
    /// Configure whether the `Secure` flag is set.
    #[must_use]
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Build the cookie carrying `user`.
    ///
    /// # Errors
    /// Returns an internal error when the record cannot be serialised.
    pub fn issue(&self, user: &SessionUser) -> Result<Cookie<'static>, Error> {
        let value = serde_json::to_string(user)
            .map_err(|err| Error::internal(format!("failed to serialise session: {err}")))?;
        Ok(self.base(value).max_age(Duration::seconds(SESSION_MAX_AGE_SECS)).finish())
    }

    /// Build an already-expired cookie that clears the session.
    #[must_use]
    pub fn clear(&self) -> Cookie<'static> {
        let mut cookie = self.base(String::new()).finish();
        cookie.make_removal();
        cookie
    }

    fn base(&self, value: String) -> actix_web::cookie::CookieBuilder<'static> {
        Cookie::build(SESSION_COOKIE, value)
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .path("/")
    }
}

/// Append `cookie` to the response, percent-encoding its value.
///
/// # Errors
/// Returns an internal error when the encoded cookie is not a valid header.
pub fn set_cookie(builder: &mut HttpResponseBuilder, cookie: &Cookie<'_>) -> Result<(), Error> {
    let value = HeaderValue::from_str(&cookie.encoded().to_string())
        .map_err(|err| Error::internal(format!("invalid session cookie header: {err}")))?;
    builder.append_header((header::SET_COOKIE, value));
    Ok(())
}

/// Session user read from the `token` cookie, or `401 Unauthorized`.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub SessionUser);

impl CurrentSession {
    fn from_request_cookie(req: &HttpRequest) -> Result<Self, Error> {
        let cookie = req
            .cookie(SESSION_COOKIE)
            .ok_or_else(|| Error::unauthorized("login required"))?;
        serde_json::from_str::<SessionUser>(cookie.value())
            .map(Self)
            .map_err(|err| {
                warn!(error = %err, "unreadable session cookie");
                Error::unauthorized("login required")
            })
    }
}

impl FromRequest for CurrentSession {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_request_cookie(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Password, Role};
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test as actix_test, web};
    use rstest::rstest;

    fn user() -> SessionUser {
        SessionUser {
            user_id: 1,
            email: "user@gmail.com".to_owned(),
            password: Password::new("useruser"),
            role: Role::User,
        }
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn issued_cookie_carries_session_attributes(#[case] secure: bool) {
        let cookie = SessionCookies::new(secure).issue(&user()).expect("cookie");

        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(secure));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(604_800)));
        assert_eq!(
            cookie.value(),
            r#"{"userID":1,"email":"user@gmail.com","password":"useruser","role":"user"}"#
        );
    }

    #[test]
    fn cleared_cookie_expires_immediately() {
        let cookie = SessionCookies::default().clear();

        assert_eq!(cookie.name(), "token");
        assert!(cookie.value().is_empty());
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }

    #[actix_web::test]
    async fn issued_cookie_round_trips_through_the_extractor() {
        let app = actix_test::init_service(
            App::new()
                .route(
                    "/set",
                    web::get().to(|| async {
                        let cookie = SessionCookies::default().issue(&user())?;
                        let mut builder = HttpResponse::Ok();
                        set_cookie(&mut builder, &cookie)?;
                        Ok::<_, Error>(builder.finish())
                    }),
                )
                .route(
                    "/get",
                    web::get().to(|session: CurrentSession| async move {
                        HttpResponse::Ok().body(session.0.email)
                    }),
                ),
        )
        .await;

        let set = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/set").to_request()).await;
        let header = set
            .headers()
            .get(header::SET_COOKIE)
            .expect("cookie set")
            .to_str()
            .expect("ascii header")
            .to_owned();
        let pair = header.split(';').next().expect("name=value pair").to_owned();
        assert!(pair.starts_with("token="));

        let get = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/get")
                .insert_header((header::COOKIE, pair))
                .to_request(),
        )
        .await;
        assert_eq!(get.status(), StatusCode::OK);
        assert_eq!(actix_test::read_body(get).await, "user@gmail.com");
    }

    #[rstest]
    #[case(None)]
    #[case(Some("token=not-json"))]
    #[actix_web::test]
    async fn missing_or_corrupt_cookie_is_unauthorised(#[case] cookie: Option<&'static str>) {
        let app = actix_test::init_service(App::new().route(
            "/get",
            web::get().to(|_: CurrentSession| async { HttpResponse::Ok().finish() }),
        ))
        .await;
        let mut request = actix_test::TestRequest::get().uri("/get");
        if let Some(cookie) = cookie {
            request = request.insert_header((header::COOKIE, cookie));
        }

        let response = actix_test::call_service(&app, request.to_request()).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
