//! Field-keyed validation error bags.
//!
//! Both bags are built fresh per validation run and never mutated once handed
//! to a caller. Fields are kept in a [`BTreeMap`] so serialising the same bag
//! twice yields identical bytes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from field name to its ordered validation messages.
///
/// # Examples
/// ```
/// use portal::domain::FieldErrors;
///
/// let mut errors = FieldErrors::new();
/// errors.push("email", "Invalid email address");
/// assert_eq!(errors.get("email"), Some(&["Invalid email address".to_owned()][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Create an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bag holding a single message for `field`.
    #[must_use]
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    /// Append `message` to the messages recorded for `field`.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Messages recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Whether no field has been flagged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names of the flagged fields in ascending order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Flattened validation failure: form-level messages plus per-field messages.
///
/// Serialises as `{ "formErrors": [...], "fieldErrors": { ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    form_errors: Vec<String>,
    field_errors: FieldErrors,
}

impl ValidationErrors {
    /// Build a failure from its two halves.
    #[must_use]
    pub fn new(form_errors: Vec<String>, field_errors: FieldErrors) -> Self {
        Self {
            form_errors,
            field_errors,
        }
    }

    /// Messages that apply to the input as a whole.
    #[must_use]
    pub fn form_errors(&self) -> &[String] {
        &self.form_errors
    }

    /// Messages keyed by field.
    #[must_use]
    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }
}

impl From<FieldErrors> for ValidationErrors {
    fn from(field_errors: FieldErrors) -> Self {
        Self::new(Vec::new(), field_errors)
    }
}
