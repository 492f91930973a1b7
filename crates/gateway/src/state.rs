//! Shared application state

use std::sync::Arc;

use growthwave_crm::GhlClient;

use crate::config::Config;
use crate::routing::BrandResolver;

/// State shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub resolver: Arc<BrandResolver>,
    /// CRM client; `None` when credentials are not configured, in which
    /// case form submissions answer 500 and everything else still works.
    pub crm: Option<GhlClient>,
}

impl AppState {
    /// Build state from config, picking up CRM credentials from the
    /// environment when present.
    pub fn new(config: Config) -> Self {
        let crm = match GhlClient::from_env() {
            Ok(client) => Some(client),
            Err(error) => {
                tracing::warn!(error = %error, "CRM not configured; form submissions disabled");
                None
            }
        };
        Self::with_crm(config, crm)
    }

    /// Build state with an explicit CRM client (or none).
    pub fn with_crm(config: Config, crm: Option<GhlClient>) -> Self {
        Self {
            config: Arc::new(config),
            resolver: Arc::new(BrandResolver::new()),
            crm,
        }
    }
}
