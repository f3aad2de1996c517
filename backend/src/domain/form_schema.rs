//! Field rules shared by the sign-up and login schemas.
//!
//! Each rule evaluates its constraints in a fixed order and reports only the
//! first one that fails, so a too-short username is never also reported as
//! containing invalid characters.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};
use validator::ValidateEmail;

use super::FieldErrors;

/// Minimum username length, in characters.
pub const USERNAME_MIN: usize = 3;
/// Maximum username length, in characters.
pub const USERNAME_MAX: usize = 20;
/// Minimum password length, in characters.
pub const PASSWORD_MIN: usize = 6;

/// Message reported for an absent field.
pub const REQUIRED: &str = "Required";
/// Username shorter than [`USERNAME_MIN`].
pub const USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters";
/// Username longer than [`USERNAME_MAX`].
pub const USERNAME_TOO_LONG: &str = "Username must be at most 20 characters";
/// Username outside `[A-Za-z0-9_]`.
pub const USERNAME_INVALID_CHARACTERS: &str =
    "Username can only contain letters, numbers, and underscores";
/// Malformed e-mail address.
pub const INVALID_EMAIL: &str = "Invalid email address";
/// Password shorter than [`PASSWORD_MIN`].
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();

fn username_regex() -> &'static Regex {
    USERNAME_RE.get_or_init(|| {
        Regex::new("^[a-zA-Z0-9_]+$")
            .unwrap_or_else(|error| panic!("username regex failed to compile: {error}"))
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read-only view over a raw form submission.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FormFields<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> FormFields<'a> {
    /// Accept JSON objects only; anything else yields a form-level message.
    pub(crate) fn new(input: &'a Value) -> Result<Self, String> {
        match input {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(format!("Expected object, received {}", kind_of(other))),
        }
    }

    /// String value of `name`, or the message describing why there is none.
    pub(crate) fn text(&self, name: &str) -> Result<&'a str, String> {
        match self.fields.get(name) {
            None => Err(REQUIRED.to_owned()),
            Some(Value::String(value)) => Ok(value.as_str()),
            Some(other) => Err(format!("Expected string, received {}", kind_of(other))),
        }
    }

    /// Read `name` and apply `rule`, recording the first failure in `errors`.
    pub(crate) fn checked(
        &self,
        name: &'static str,
        rule: fn(&str) -> Result<(), &'static str>,
        errors: &mut FieldErrors,
    ) -> Option<&'a str> {
        let outcome = self
            .text(name)
            .and_then(|value| rule(value).map(|()| value).map_err(str::to_owned));
        match outcome {
            Ok(value) => Some(value),
            Err(message) => {
                errors.push(name, message);
                None
            }
        }
    }
}

/// Username rule: length in `[3, 20]`, then `^[a-zA-Z0-9_]+$`.
///
/// # Errors
/// Returns the message of the first violated constraint.
pub fn check_username(value: &str) -> Result<(), &'static str> {
    let length = value.chars().count();
    if length < USERNAME_MIN {
        return Err(USERNAME_TOO_SHORT);
    }
    if length > USERNAME_MAX {
        return Err(USERNAME_TOO_LONG);
    }
    if !username_regex().is_match(value) {
        return Err(USERNAME_INVALID_CHARACTERS);
    }
    Ok(())
}

/// Domain must be dotted and end in an alphabetic label of two or more
/// characters; bare hosts such as `localhost` are refused.
fn has_public_suffix(value: &str) -> bool {
    value
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit_once('.'))
        .is_some_and(|(host, suffix)| {
            !host.is_empty()
                && suffix.len() >= 2
                && suffix.chars().all(|c| c.is_ascii_alphabetic())
        })
}

/// E-mail rule: a syntactically valid address on a dotted domain.
///
/// # Errors
/// Returns [`INVALID_EMAIL`] for malformed addresses.
pub fn check_email(value: &str) -> Result<(), &'static str> {
    if value.validate_email() && has_public_suffix(value) {
        Ok(())
    } else {
        Err(INVALID_EMAIL)
    }
}

/// Password rule: at least [`PASSWORD_MIN`] characters.
///
/// # Errors
/// Returns [`PASSWORD_TOO_SHORT`] for short passwords.
pub fn check_password(value: &str) -> Result<(), &'static str> {
    if value.chars().count() < PASSWORD_MIN {
        Err(PASSWORD_TOO_SHORT)
    } else {
        Ok(())
    }
}
