//! Wire shapes exchanged with `POST /api/user`.

use serde::{Deserialize, Serialize};

use crate::domain::NewUser;

#[derive(Debug, Serialize)]
pub(super) struct CreateUserRequestDto<'a> {
    pub(super) email: &'a str,
    pub(super) password: &'a str,
    pub(super) role: &'static str,
    pub(super) username: &'a str,
}

impl<'a> From<&'a NewUser> for CreateUserRequestDto<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            email: &user.email,
            password: user.password.expose(),
            role: user.role.as_str(),
            username: &user.username,
        }
    }
}

/// Every answer from the user API carries a `message`, success or not.
#[derive(Debug, Deserialize)]
pub(super) struct MessageResponseDto {
    #[serde(default)]
    pub(super) message: String,
}
