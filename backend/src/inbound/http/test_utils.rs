//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::{
    LoginCommand, MockUserApi, MockUserListSource, MockUserRepository, SignupCommand,
    UserRepository, UsersQuery,
};
use crate::domain::{LoginActionService, SignupActionService, UsersQueryService};
use crate::outbound::memory::InMemoryAccounts;

use super::session::SessionCookies;
use super::state::{HttpState, HttpStatePorts};

/// Ports wired to real services over mocks and a seeded in-memory store.
///
/// Mocks start without expectations, so any unexpected outbound call fails
/// the test.
pub(crate) struct TestPorts {
    signup: Arc<dyn SignupCommand>,
    login: Arc<dyn LoginCommand>,
    users: Arc<dyn UsersQuery>,
    accounts: Arc<dyn UserRepository>,
}

impl Default for TestPorts {
    fn default() -> Self {
        let accounts = Arc::new(InMemoryAccounts::seeded());
        Self {
            signup: Arc::new(SignupActionService::new(Arc::new(MockUserApi::new()))),
            login: Arc::new(LoginActionService::new(Arc::clone(&accounts))),
            users: Arc::new(UsersQueryService::new(Arc::new(MockUserListSource::new()))),
            accounts,
        }
    }
}

impl TestPorts {
    pub(crate) fn with_user_api(mut self, api: MockUserApi) -> Self {
        self.signup = Arc::new(SignupActionService::new(Arc::new(api)));
        self
    }

    pub(crate) fn with_user_list(mut self, source: MockUserListSource) -> Self {
        self.users = Arc::new(UsersQueryService::new(Arc::new(source)));
        self
    }

    pub(crate) fn with_accounts(mut self, accounts: MockUserRepository) -> Self {
        self.accounts = Arc::new(accounts);
        self
    }
}

/// Build the full portal app over `ports` with secure session cookies.
pub(crate) fn test_app(
    ports: TestPorts,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let TestPorts {
        signup,
        login,
        users,
        accounts,
    } = ports;
    let state = HttpState::new(
        HttpStatePorts {
            signup,
            login,
            users,
            accounts,
        },
        SessionCookies::default(),
    );
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(super::configure)
}
