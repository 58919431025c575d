//! HTTP API Protocol
//!
//! Defines the endpoint paths and Data Transfer Objects (DTOs) of the REST
//! surface. These structures are serialized as JSON response bodies.

use serde::Serialize;

use crate::store::types::User;

// --- API Endpoints ---

/// Collection endpoint: list (GET) and create (POST).
pub const ENDPOINT_USERS: &str = "/api/users";
/// Single-record endpoint, addressed by positional id: get (GET),
/// overwrite (PUT), remove (DELETE).
pub const ENDPOINT_USER_BY_ID: &str = "/api/users/:id";

// --- Data Transfer Objects ---

/// Response for mutations that return the affected record (POST, PUT).
#[derive(Debug, Serialize)]
pub struct UserMessageResponse {
    pub message: String,
    pub user: User,
}

/// Response carrying only a confirmation message (DELETE).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error payload returned for 400/404/500 responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
