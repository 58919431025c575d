//! Service Configuration
//!
//! An explicit struct handed to the store and the server at startup; there
//! are no globals and no environment lookups.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Runtime configuration for the registry service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind: SocketAddr,
    /// Path of the JSON file holding the user collection.
    pub data_path: PathBuf,
    /// When true, an unreadable or malformed data file is treated as an
    /// empty collection instead of failing the request.
    pub empty_on_read_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_path: PathBuf::from("users.json"),
            empty_on_read_error: true,
        }
    }
}
