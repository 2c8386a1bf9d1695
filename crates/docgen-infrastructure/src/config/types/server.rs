//! HTTP server configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HTTP_PORT, DEFAULT_SERVER_HOST, MAX_REQUEST_BODY_SIZE};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Attach permissive CORS headers to every response
    pub cors_enabled: bool,
    /// Largest accepted JSON body in bytes
    pub max_request_body_bytes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            cors_enabled: true,
            max_request_body_bytes: MAX_REQUEST_BODY_SIZE,
        }
    }
}
