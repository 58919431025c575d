//! Collection Store Module
//!
//! File-backed storage for the user collection.
//!
//! ## Core Concepts
//! - **Positional identity**: a record's id is its index in the stored
//!   sequence. Deleting a record shifts every later record's effective id.
//! - **Whole-file persistence**: every operation loads the full collection
//!   from disk; mutations rewrite the full file afterwards. There is no
//!   cross-request state and no locking, so concurrent mutations race and
//!   the last write wins.
//! - **Read fallback**: a missing or (by default) malformed data file is
//!   treated as an empty collection rather than an error.

pub mod file;
pub mod types;
