//! Server action endpoints.
//!
//! ```text
//! POST /actions/signup {"username":"…","email":"…","password":"…"}
//! POST /actions/login {"email":"…","password":"…"}
//! POST /actions/logout
//! ```
//!
//! Bodies are accepted as arbitrary JSON; shape checks belong to the domain
//! schemas so every malformed submission yields field errors rather than a
//! generic `400`.

use actix_web::http::header;
use actix_web::{HttpResponse, post, web};
use serde_json::Value;

use crate::domain::{ActionResult, LoginOutcome, RedirectTarget};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    ActionResultSchema, ErrorSchema, LoginRejectionSchema, LoginRequestSchema, SignupRequestSchema,
};
use crate::inbound::http::session::set_cookie;
use crate::inbound::http::state::HttpState;

/// Where logout sends the client.
pub const LOGOUT_REDIRECT: &str = "/";

/// Submit the sign-up form.
#[utoipa::path(
    post,
    path = "/actions/signup",
    request_body = SignupRequestSchema,
    responses(
        (status = 200, description = "Action outcome", body = ActionResultSchema),
        (status = 400, description = "Malformed JSON", body = ErrorSchema)
    ),
    tags = ["actions"],
    operation_id = "submitSignup",
    security([])
)]
#[post("/actions/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> web::Json<ActionResult<RedirectTarget>> {
    web::Json(state.signup.submit_signup(&payload).await)
}

/// Submit the login form.
///
/// A rejected attempt answers `200` with the field errors. A successful one
/// sets the `token` cookie and redirects to the dashboard.
#[utoipa::path(
    post,
    path = "/actions/login",
    request_body = LoginRequestSchema,
    responses(
        (status = 200, description = "Login rejected", body = LoginRejectionSchema),
        (status = 303, description = "Session established", headers(
            ("Set-Cookie" = String, description = "`token` session cookie"),
            ("Location" = String, description = "`/dashboard`")
        )),
        (status = 400, description = "Malformed JSON", body = ErrorSchema),
        (status = 503, description = "Credential store unavailable", body = ErrorSchema)
    ),
    tags = ["actions"],
    operation_id = "submitLogin",
    security([])
)]
#[post("/actions/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    match state.login.submit_login(&payload).await? {
        LoginOutcome::Rejected(rejection) => Ok(HttpResponse::Ok().json(rejection)),
        LoginOutcome::Established {
            session,
            redirect_to,
        } => {
            let cookie = state.cookies.issue(&session)?;
            let mut response = HttpResponse::SeeOther();
            response.insert_header((header::LOCATION, redirect_to));
            set_cookie(&mut response, &cookie)?;
            Ok(response.finish())
        }
    }
}

/// Clear the session cookie.
#[utoipa::path(
    post,
    path = "/actions/logout",
    responses(
        (status = 303, description = "Session cleared", headers(
            ("Set-Cookie" = String, description = "Expired `token` cookie")
        ))
    ),
    tags = ["actions"],
    operation_id = "logout",
    security([])
)]
#[post("/actions/logout")]
pub async fn logout(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let mut response = HttpResponse::SeeOther();
    response.insert_header((header::LOCATION, LOGOUT_REDIRECT));
    set_cookie(&mut response, &state.cookies.clear())?;
    Ok(response.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockUserApi, UserApiError};
    use crate::inbound::http::test_utils::{TestPorts, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::json;

    fn set_cookie_header(response: &actix_web::dev::ServiceResponse) -> String {
        response
            .headers()
            .get(header::SET_COOKIE)
            .expect("Set-Cookie header")
            .to_str()
            .expect("ascii header")
            .to_owned()
    }

    #[actix_web::test]
    async fn signup_returns_the_action_result() {
        let mut api = MockUserApi::new();
        api.expect_create_user()
            .times(1)
            .return_once(|_| Ok("User created successfully".to_owned()));
        let app = test::init_service(test_app(TestPorts::default().with_user_api(api))).await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/actions/signup")
                .set_json(json!({
                    "username": "mohammd234",
                    "email": "test@gmail.com",
                    "password": "123412341234",
                }))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "User created successfully",
                "payload": { "url": "/dashboard" },
            })
        );
    }

    #[actix_web::test]
    async fn signup_folds_transport_failures_into_the_result() {
        let mut api = MockUserApi::new();
        api.expect_create_user()
            .times(1)
            .return_once(|_| Err(UserApiError::transport("dns error")));
        let app = test::init_service(test_app(TestPorts::default().with_user_api(api))).await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/actions/signup")
                .set_json(json!({
                    "username": "mohammd234",
                    "email": "test@gmail.com",
                    "password": "123412341234",
                }))
                .to_request(),
        )
        .await;

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body, json!({ "success": false, "message": "Faild to Fetch" }));
    }

    #[actix_web::test]
    async fn login_success_sets_cookie_and_redirects() {
        let app = test::init_service(test_app(TestPorts::default())).await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/actions/login")
                .set_json(json!({ "email": "user@gmail.com", "password": "useruser" }))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).map(|v| v.as_bytes()),
            Some(b"/dashboard".as_slice())
        );
        let cookie = set_cookie_header(&response);
        assert!(cookie.starts_with("token="));
        for attribute in ["HttpOnly", "Secure", "Path=/", "Max-Age=604800"] {
            assert!(cookie.contains(attribute), "missing {attribute} in {cookie}");
        }
        let pair = cookie.split(';').next().expect("name=value pair");
        let (_, value) = url::form_urlencoded::parse(pair.as_bytes())
            .next()
            .expect("cookie pair decodes");
        let session: Value = serde_json::from_str(&value).expect("cookie holds JSON");
        assert_eq!(
            session,
            json!({ "userID": 1, "email": "user@gmail.com", "password": "useruser", "role": "user" })
        );
    }

    #[rstest]
    #[case(
        json!({ "email": "user@gmail.com", "password": "wrongpass" }),
        json!({ "credentials": ["Invalid email or password"] })
    )]
    #[case(
        json!({ "email": "nope", "password": "useruser" }),
        json!({ "email": ["Invalid email address"] })
    )]
    #[actix_web::test]
    async fn login_rejections_are_values(#[case] input: Value, #[case] errors: Value) {
        let app = test::init_service(test_app(TestPorts::default())).await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/actions/login")
                .set_json(input)
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body, json!({ "success": false, "errors": errors }));
    }

    #[actix_web::test]
    async fn logout_expires_the_cookie() {
        let app = test::init_service(test_app(TestPorts::default())).await;

        let response = test::call_service(
            &app,
            test::TestRequest::post().uri("/actions/logout").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let cookie = set_cookie_header(&response);
        assert!(cookie.starts_with("token=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
