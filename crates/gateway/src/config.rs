//! Application configuration

use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
///
/// The routing tables themselves (hostname map, passthrough prefixes,
/// extension allowlist) are compile-time static; only the server binding
/// and the static build location are environment-driven.
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,

    // Static site build output (directory-style, one subdirectory per brand)
    pub site_root: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            site_root: env::var("SITE_ROOT")
                .unwrap_or_else(|_| "./dist".to_string())
                .into(),
        }
    }
}
