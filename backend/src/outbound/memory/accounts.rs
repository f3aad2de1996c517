//! Thread-safe in-memory account store.
//!
//! Backs both the login credential lookup and the server side of
//! `POST /api/user`, so accounts created through sign-up can log in.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    CredentialStore, CredentialStoreError, UserRepository, UserRepositoryError,
};
use crate::domain::{Account, NewUser, Password, Role};

struct State {
    accounts: Vec<Account>,
    next_id: u64,
}

/// Account store held in process memory.
pub struct InMemoryAccounts {
    state: Mutex<State>,
}

impl InMemoryAccounts {
    /// Create an empty store.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_accounts(Vec::new())
    }

    /// Create a store holding the fixture accounts
    /// `user@gmail.com`/`useruser` (id 1, user) and
    /// `admin@gmail.com`/`adminadmin` (id 2, admin).
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_accounts(vec![
            seed_account(1, "user@gmail.com", "useruser", Role::User),
            seed_account(2, "admin@gmail.com", "adminadmin", Role::Admin),
        ])
    }

    fn with_accounts(accounts: Vec<Account>) -> Self {
        let next_id = accounts.iter().map(|a| a.user_id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(State { accounts, next_id }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, String> {
        self.state
            .lock()
            .map_err(|_| "account store lock poisoned".to_owned())
    }
}

impl Default for InMemoryAccounts {
    fn default() -> Self {
        Self::seeded()
    }
}

fn seed_account(user_id: u64, email: &str, password: &str, role: Role) -> Account {
    Account {
        user_id,
        username: None,
        email: email.to_owned(),
        password: Password::new(password),
        role,
    }
}

#[async_trait]
impl CredentialStore for InMemoryAccounts {
    async fn find_user_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, CredentialStoreError> {
        let state = self.lock().map_err(CredentialStoreError::backend)?;
        Ok(state
            .accounts
            .iter()
            .find(|account| account.email == email && account.password.expose() == password)
            .cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryAccounts {
    async fn insert(&self, user: NewUser) -> Result<Account, UserRepositoryError> {
        let mut state = self.lock().map_err(UserRepositoryError::backend)?;
        if state.accounts.iter().any(|account| account.email == user.email) {
            return Err(UserRepositoryError::duplicate_email(user.email));
        }

        let account = Account {
            user_id: state.next_id,
            username: Some(user.username),
            email: user.email,
            password: user.password,
            role: user.role,
        };
        state.next_id += 1;
        state.accounts.push(account.clone());
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryAccounts {
        InMemoryAccounts::seeded()
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_owned(),
            password: Password::new("123412341234"),
            role: Role::User,
            username: "mohammd234".to_owned(),
        }
    }

    #[rstest]
    #[case("user@gmail.com", "useruser", 1, Role::User)]
    #[case("admin@gmail.com", "adminadmin", 2, Role::Admin)]
    #[tokio::test]
    async fn seeded_accounts_match_their_credentials(
        store: InMemoryAccounts,
        #[case] email: &str,
        #[case] password: &str,
        #[case] user_id: u64,
        #[case] role: Role,
    ) {
        let account = store
            .find_user_by_credentials(email, password)
            .await
            .expect("lookup")
            .expect("account exists");
        assert_eq!(account.user_id, user_id);
        assert_eq!(account.role, role);
    }

    #[rstest]
    #[case("user@gmail.com", "adminadmin")]
    #[case("nobody@gmail.com", "useruser")]
    #[case("USER@gmail.com", "useruser")]
    #[tokio::test]
    async fn mismatched_credentials_find_nothing(
        store: InMemoryAccounts,
        #[case] email: &str,
        #[case] password: &str,
    ) {
        let found = store
            .find_user_by_credentials(email, password)
            .await
            .expect("lookup");
        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn inserted_accounts_get_sequential_ids_and_can_log_in(store: InMemoryAccounts) {
        let first = store.insert(new_user("a@gmail.com")).await.expect("insert");
        let second = store.insert(new_user("b@gmail.com")).await.expect("insert");

        assert_eq!(first.user_id, 3);
        assert_eq!(second.user_id, 4);
        let found = store
            .find_user_by_credentials("a@gmail.com", "123412341234")
            .await
            .expect("lookup");
        assert_eq!(found.map(|a| a.user_id), Some(3));
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_email_is_rejected(store: InMemoryAccounts) {
        let error = store
            .insert(new_user("user@gmail.com"))
            .await
            .expect_err("duplicate");
        assert_eq!(error, UserRepositoryError::duplicate_email("user@gmail.com"));
    }

    #[tokio::test]
    async fn empty_store_starts_at_one() {
        let store = InMemoryAccounts::empty();
        let account = store.insert(new_user("a@gmail.com")).await.expect("insert");
        assert_eq!(account.user_id, 1);
    }
}
