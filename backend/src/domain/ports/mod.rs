//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports (`*Command`, `*Query`) are called by inbound adapters.
//! Driven ports describe what the domain needs from the outside world; each
//! exposes a typed error enum so adapters map their failures into predictable
//! variants.

mod macros;
pub(crate) use macros::define_port_error;

mod credential_store;
mod login_command;
mod signup_command;
mod user_api;
mod user_list_source;
mod user_repository;
mod users_query;

#[cfg(test)]
pub use credential_store::MockCredentialStore;
pub use credential_store::{CredentialStore, CredentialStoreError};
pub use login_command::LoginCommand;
pub use signup_command::SignupCommand;
#[cfg(test)]
pub use user_api::MockUserApi;
pub use user_api::{UserApi, UserApiError};
#[cfg(test)]
pub use user_list_source::MockUserListSource;
pub use user_list_source::{UserListError, UserListSource};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
pub use users_query::UsersQuery;
