//! File-Backed User Registry
//!
//! This library crate defines the modules that make up the user registry
//! service. It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three small subsystems:
//!
//! - **`api`**: The HTTP surface. Axum handlers, DTOs, and router wiring for
//!   the CRUD endpoints under `/api/users`.
//! - **`config`**: Runtime configuration (bind address, data file path,
//!   read-failure fallback) passed explicitly to the store at construction.
//! - **`store`**: The collection store. Loads the full user sequence from a
//!   flat JSON file and rewrites it wholesale on every mutation. The file is
//!   the single source of truth; no state is kept between requests.

pub mod api;
pub mod config;
pub mod store;
