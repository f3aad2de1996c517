//! Sign-up form schema.
//!
//! [`SignupForm::parse`] is the schema validator for the sign-up server
//! action: it checks every field independently and reports all failing fields
//! in one [`ValidationErrors`] bag.

use serde_json::Value;

use super::form_schema::{FormFields, check_email, check_password, check_username};
use super::user::{NewUser, Password, Role};
use super::{FieldErrors, ValidationErrors};

/// Validated sign-up submission.
///
/// ## Invariants
/// - `username` is 3 to 20 characters from `[A-Za-z0-9_]`.
/// - `email` is a syntactically valid address.
/// - `password` is at least 6 characters.
///
/// # Examples
/// ```
/// use portal::domain::SignupForm;
/// use serde_json::json;
///
/// let form = SignupForm::parse(&json!({
///     "username": "mohammd234",
///     "email": "test@gmail.com",
///     "password": "123412341234",
/// }))
/// .expect("valid form");
/// assert_eq!(form.username(), "mohammd234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    username: String,
    email: String,
    password: Password,
}

impl SignupForm {
    /// Validate an arbitrary JSON submission.
    ///
    /// # Errors
    /// Returns every violated rule: a form-level message when `input` is not a
    /// JSON object, otherwise the first failing message of each bad field.
    pub fn parse(input: &Value) -> Result<Self, ValidationErrors> {
        let fields = FormFields::new(input)
            .map_err(|message| ValidationErrors::new(vec![message], FieldErrors::new()))?;

        let mut errors = FieldErrors::new();
        let username = fields.checked("username", check_username, &mut errors);
        let email = fields.checked("email", check_email, &mut errors);
        let password = fields.checked("password", check_password, &mut errors);

        match (username, email, password) {
            (Some(username), Some(email), Some(password)) if errors.is_empty() => Ok(Self {
                username: username.to_owned(),
                email: email.to_owned(),
                password: Password::new(password),
            }),
            _ => Err(errors.into()),
        }
    }

    /// Validated username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Validated e-mail address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Validated password.
    #[must_use]
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Build the record sent to the user API. Sign-up always creates `user`
    /// accounts.
    #[must_use]
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            email: self.email,
            password: self.password,
            role: Role::User,
            username: self.username,
        }
    }
}
