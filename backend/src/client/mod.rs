//! UI-side input controllers.
//!
//! These run next to the forms that call the server actions: a debouncer for
//! search-as-you-type inputs and a guard that keeps a form to one in-flight
//! submission.

pub mod debounce;
pub mod submission;

pub use debounce::{DEFAULT_DEBOUNCE_DELAY, DebounceState, Debouncer};
pub use submission::{PendingSubmission, SubmissionGuard};
