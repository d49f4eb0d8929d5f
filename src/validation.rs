//! Input validation utilities for the service layer.
//!
//! Required-field checks collect every blank field before failing, so a
//! client sees all problems with a payload in one response. Identifier
//! checks run before any store access.

use std::collections::HashMap;

use mongodb::bson::oid::ObjectId;

use crate::error::{Error, Result, ValidationErrors};

/// Returns true if the input is empty or whitespace-only.
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Accumulates field errors for a single payload.
///
/// # Example
/// ```
/// use chatstore::validation::RequiredFields;
///
/// let result = RequiredFields::new()
///     .require("login", "", "Login is required.")
///     .require("password", "secret", "Password is required.")
///     .finish();
/// assert!(result.is_err());
/// ```
#[derive(Debug, Default)]
pub struct RequiredFields {
    failures: Vec<(String, String)>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` against `field` if `value` is blank.
    pub fn require(mut self, field: &str, value: &str, message: &str) -> Self {
        if is_blank(value) {
            self.failures.push((field.to_string(), message.to_string()));
        }
        self
    }

    /// Fails with a `Validation` error if any required field was blank.
    pub fn finish(self) -> Result<()> {
        let mut failures = self.failures;
        match failures.len() {
            0 => Ok(()),
            1 => {
                let (field, message) = failures.remove(0);
                Err(Error::Validation(ValidationErrors::Single { field, message }))
            }
            _ => Err(Error::Validation(ValidationErrors::Multiple {
                fields: failures.into_iter().collect::<HashMap<_, _>>(),
            })),
        }
    }
}

/// Returns true if `id` is a 24 character hex object id.
pub fn is_object_id(id: &str) -> bool {
    ObjectId::parse_str(id).is_ok()
}

/// Parses an object id, failing with `InvalidId` and the given message.
///
/// Hex digits are accepted in either case; the parsed value is what the
/// store is queried with.
///
/// # Arguments
/// * `id` - The identifier received from the client
/// * `message` - Error message used when the identifier is malformed
pub fn validate_object_id(id: &str, message: impl FnOnce() -> String) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| Error::InvalidId(message()))
}

/// Generates a fresh object id for a new user or message.
pub fn new_object_id() -> ObjectId {
    ObjectId::new()
}
