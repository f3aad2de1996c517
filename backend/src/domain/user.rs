//! User records exchanged with the user API, the account store and the
//! session cookie.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use zeroize::Zeroizing;

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account created through sign-up.
    User,
    /// Administrative account.
    Admin,
}

impl Role {
    /// Wire representation of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Parse the wire representation, returning `None` for unknown roles.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plain-text password held in memory that is wiped on drop.
///
/// `Debug` output is redacted; serialisation writes the raw value because the
/// user API and the session cookie both carry it verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wrap a raw password.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Zeroizing::new(raw.into()))
    }

    /// Borrow the raw password.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

impl Serialize for Password {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.expose())
    }
}

impl<'de> Deserialize<'de> for Password {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// User record sent to the user API. Identity and timestamps are assigned by
/// the service that stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Contact and login e-mail address.
    pub email: String,
    /// Login password.
    pub password: Password,
    /// Account role.
    pub role: Role,
    /// Public handle.
    pub username: String,
}

/// Stored account as seen by the credential store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Numeric identifier assigned by the store.
    pub user_id: u64,
    /// Public handle, absent for seeded fixture accounts.
    pub username: Option<String>,
    /// Login e-mail address.
    pub email: String,
    /// Login password.
    pub password: Password,
    /// Account role.
    pub role: Role,
}

impl Account {
    /// Project the account into the payload stored in the session cookie.
    #[must_use]
    pub fn to_session_user(&self) -> SessionUser {
        SessionUser {
            user_id: self.user_id,
            email: self.email.clone(),
            password: self.password.clone(),
            role: self.role,
        }
    }
}

/// Payload of the `token` session cookie.
///
/// Serialises as `{"userID":1,"email":"…","password":"…","role":"user"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Account identifier.
    #[serde(rename = "userID")]
    pub user_id: u64,
    /// Login e-mail address.
    pub email: String,
    /// Login password.
    pub password: Password,
    /// Account role.
    pub role: Role,
}

/// Public profile returned by `GET /dashboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProfile {
    /// Account identifier.
    #[serde(rename = "userID")]
    pub user_id: u64,
    /// Login e-mail address.
    pub email: String,
    /// Account role.
    pub role: Role,
}

impl From<&SessionUser> for SessionProfile {
    fn from(user: &SessionUser) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Entry of the public user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Identifier assigned by the listing service.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Public handle.
    pub username: String,
    /// Avatar URL, possibly empty.
    #[serde(default)]
    pub avatar: String,
    /// Creation timestamp as reported by the listing service.
    #[serde(default)]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn account() -> Account {
        Account {
            user_id: 1,
            username: None,
            email: "user@gmail.com".to_owned(),
            password: Password::new("useruser"),
            role: Role::User,
        }
    }

    #[test]
    fn session_user_serialises_with_cookie_field_names() {
        let value = serde_json::to_value(account().to_session_user()).expect("serialise");
        assert_eq!(
            value,
            json!({
                "userID": 1,
                "email": "user@gmail.com",
                "password": "useruser",
                "role": "user"
            })
        );
    }

    #[test]
    fn session_cookie_json_keeps_field_order() {
        let raw = serde_json::to_string(&account().to_session_user()).expect("serialise");
        assert_eq!(
            raw,
            r#"{"userID":1,"email":"user@gmail.com","password":"useruser","role":"user"}"#
        );
    }

    #[test]
    fn password_debug_is_redacted() {
        let rendered = format!("{:?}", account());
        assert!(!rendered.contains("useruser"));
        assert!(rendered.contains("Password(***)"));
    }

    #[test]
    fn role_parse_accepts_known_roles_only() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("user"), Some(Role::User));
        assert_eq!(Role::parse("root"), None);
    }

    #[test]
    fn new_user_serialises_api_body() {
        let user = NewUser {
            email: "test@gmail.com".to_owned(),
            password: Password::new("123412341234"),
            role: Role::User,
            username: "mohammd234".to_owned(),
        };
        let value = serde_json::to_value(&user).expect("serialise");
        assert_eq!(
            value,
            json!({
                "email": "test@gmail.com",
                "password": "123412341234",
                "role": "user",
                "username": "mohammd234"
            })
        );
    }

    #[test]
    fn user_summary_reads_camel_case_and_defaults() {
        let summary: UserSummary = serde_json::from_value(json!({
            "id": "1",
            "name": "mohammad",
            "username": "mk13",
            "createdAt": "2024-12-01T00:00:00.000Z"
        }))
        .expect("decode");
        assert_eq!(summary.created_at, "2024-12-01T00:00:00.000Z");
        assert!(summary.avatar.is_empty());
    }
}
