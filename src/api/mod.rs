//! HTTP API Module
//!
//! Exposes the user collection over REST.
//!
//! ## Overview
//! Each request maps one HTTP verb+path pair onto a single store call: the
//! handler parses the positional id from the path (when present), invokes
//! the store, and translates the result or `StoreError` into a JSON
//! response with the matching status code.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`protocol`**: Endpoint paths and response DTOs.
//! - **`routes`**: Router construction and store wiring.

pub mod handlers;
pub mod protocol;
pub mod routes;
