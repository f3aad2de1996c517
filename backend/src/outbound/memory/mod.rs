//! In-process adapters.

mod accounts;

pub use accounts::InMemoryAccounts;
