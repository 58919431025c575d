//! File-Backed Collection Store
//!
//! Implements List/Get/Create/Update/Delete over a single JSON file holding
//! a pretty-printed array of user records.

use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::fs;

use super::types::{StoreError, User, UserDraft};
use crate::config::Config;

/// The collection store over the backing JSON file.
///
/// Every operation reads the full collection from disk; mutating operations
/// rewrite the full file afterwards. No lock is held between the read and
/// the write, so concurrent mutations race and the last write wins.
pub struct FileStore {
    path: PathBuf,
    empty_on_read_error: bool,
}

impl FileStore {
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.data_path.clone(),
            empty_on_read_error: config.empty_on_read_error,
        }
    }

    /// Returns the full ordered sequence of records.
    pub async fn list(&self) -> Result<Vec<User>, StoreError> {
        self.load().await
    }

    /// Returns the record at `index`, or `NotFound` if out of bounds.
    pub async fn get(&self, index: usize) -> Result<User, StoreError> {
        let users = self.load().await?;
        users.into_iter().nth(index).ok_or(StoreError::NotFound)
    }

    /// Validates the draft and appends it to the sequence.
    ///
    /// Returns the new record together with its positional id (the old
    /// sequence length). Nothing is persisted when validation fails.
    pub async fn create(&self, draft: UserDraft) -> Result<(usize, User), StoreError> {
        let user = draft.validate()?;
        let mut users = self.load().await?;
        users.push(user.clone());
        self.persist(&users).await?;
        Ok((users.len() - 1, user))
    }

    /// Overwrites the record at `index` entirely (no patch semantics).
    ///
    /// The index is checked before the draft is validated, so an invalid
    /// index with an invalid body yields `NotFound`.
    pub async fn update(&self, index: usize, draft: UserDraft) -> Result<User, StoreError> {
        let mut users = self.load().await?;
        if index >= users.len() {
            return Err(StoreError::NotFound);
        }
        let user = draft.validate()?;
        users[index] = user.clone();
        self.persist(&users).await?;
        Ok(user)
    }

    /// Removes the record at `index`, shifting all later records down by one.
    pub async fn delete(&self, index: usize) -> Result<(), StoreError> {
        let mut users = self.load().await?;
        if index >= users.len() {
            return Err(StoreError::NotFound);
        }
        users.remove(index);
        self.persist(&users).await?;
        Ok(())
    }

    async fn load(&self) -> Result<Vec<User>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            // A file that does not exist yet is an empty collection in both
            // modes; the strict switch guards corruption, not first runs.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                if self.empty_on_read_error {
                    tracing::warn!(
                        "Failed to read {}: {}; treating collection as empty",
                        self.path.display(),
                        e
                    );
                    return Ok(Vec::new());
                }
                return Err(StoreError::UnreadableData(e.to_string()));
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(users) => Ok(users),
            Err(e) => {
                if self.empty_on_read_error {
                    tracing::warn!(
                        "Malformed data in {}: {}; treating collection as empty",
                        self.path.display(),
                        e
                    );
                    Ok(Vec::new())
                } else {
                    Err(StoreError::UnreadableData(e.to_string()))
                }
            }
        }
    }

    async fn persist(&self, users: &[User]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(users)?;
        fs::write(&self.path, json).await?;
        tracing::debug!(
            "Persisted {} users to {}",
            users.len(),
            self.path.display()
        );
        Ok(())
    }
}
