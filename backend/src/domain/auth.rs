//! Login credentials schema.
//!
//! Login uses a reduced schema: a well-formed e-mail address and a password
//! of at least six characters. Failures are reported as a plain field map.

use serde_json::Value;

use super::FieldErrors;
use super::form_schema::{FormFields, check_email, check_password};
use super::user::Password;

/// Field key used for failures that concern the submission as a whole.
pub const FORM_FIELD: &str = "form";
/// Field key used for unknown e-mail/password combinations.
pub const CREDENTIALS_FIELD: &str = "credentials";
/// Message reported for unknown e-mail/password combinations.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Validated login credentials.
///
/// # Examples
/// ```
/// use portal::domain::LoginCredentials;
/// use serde_json::json;
///
/// let creds = LoginCredentials::parse(&json!({
///     "email": "user@gmail.com",
///     "password": "useruser",
/// }))
/// .expect("valid credentials");
/// assert_eq!(creds.email(), "user@gmail.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Password,
}

impl LoginCredentials {
    /// Validate an arbitrary JSON submission.
    ///
    /// # Errors
    /// Returns the first failing message per field. Non-object input is
    /// reported under the `form` key.
    pub fn parse(input: &Value) -> Result<Self, FieldErrors> {
        let fields =
            FormFields::new(input).map_err(|message| FieldErrors::single(FORM_FIELD, message))?;

        let mut errors = FieldErrors::new();
        let email = fields.checked("email", check_email, &mut errors);
        let password = fields.checked("password", check_password, &mut errors);

        match (email, password) {
            (Some(email), Some(password)) if errors.is_empty() => Ok(Self {
                email: email.to_owned(),
                password: Password::new(password),
            }),
            _ => Err(errors),
        }
    }

    /// E-mail address used for the lookup.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Password used for the lookup.
    #[must_use]
    pub fn password(&self) -> &Password {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form_schema::{INVALID_EMAIL, PASSWORD_TOO_SHORT, REQUIRED};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({ "email": "test", "password": "123456" }), "email", INVALID_EMAIL)]
    #[case(json!({ "email": "test@234", "password": "123456" }), "email", INVALID_EMAIL)]
    #[case(json!({ "email": "test@example.com", "password": "234" }), "password", PASSWORD_TOO_SHORT)]
    #[case(json!({ "email": "test@example.com" }), "password", REQUIRED)]
    fn rejects_single_bad_field(#[case] input: Value, #[case] field: &str, #[case] message: &str) {
        let errors = LoginCredentials::parse(&input).expect_err("invalid credentials");
        assert_eq!(errors, FieldErrors::single(field, message));
    }

    #[rstest]
    fn ignores_username_rules() {
        let creds = LoginCredentials::parse(&json!({
            "email": "admin@gmail.com",
            "password": "adminadmin",
            "username": "x",
        }))
        .expect("username is not part of the login schema");
        assert_eq!(creds.password().expose(), "adminadmin");
    }

    #[rstest]
    fn non_object_input_is_reported_under_form_key() {
        let errors = LoginCredentials::parse(&json!(7)).expect_err("number input");
        assert_eq!(
            errors,
            FieldErrors::single(FORM_FIELD, "Expected object, received number")
        );
    }
}
