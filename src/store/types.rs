//! Store Data Types
//!
//! Defines the persisted record shape, the unvalidated incoming draft, and
//! the error taxonomy shared between the store and the HTTP layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single user record as persisted in the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub age: u64,
}

/// An incoming user payload before validation.
///
/// All fields are optional so that a missing field surfaces as a
/// `MissingFields` validation error instead of a body deserialization
/// rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u64>,
}

impl UserDraft {
    /// Checks that name, email, and age are all present and non-falsy
    /// (non-empty strings, non-zero age).
    pub fn validate(self) -> Result<User, StoreError> {
        match (self.name, self.email, self.age) {
            (Some(name), Some(email), Some(age))
                if !name.is_empty() && !email.is_empty() && age != 0 =>
            {
                Ok(User { name, email, age })
            }
            _ => Err(StoreError::MissingFields),
        }
    }
}

/// Errors produced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field was missing, empty, or zero.
    #[error("name, email, and age are required")]
    MissingFields,
    /// The given index does not address a stored record.
    #[error("user not found")]
    NotFound,
    /// The data file exists but could not be read or parsed, and the store
    /// is configured to surface read failures instead of falling back to an
    /// empty collection.
    #[error("data file is unreadable: {0}")]
    UnreadableData(String),
    /// Encoding the collection to JSON failed.
    #[error("failed to encode user collection: {0}")]
    Encode(#[from] serde_json::Error),
    /// Writing the data file failed.
    #[error("failed to write data file: {0}")]
    Io(#[from] std::io::Error),
}
