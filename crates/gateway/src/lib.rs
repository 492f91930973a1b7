//! GrowthWave Gateway Library
//!
//! This crate contains the edge gateway components for the GrowthWave
//! brand sites: hostname-based path rewriting, static site serving, and
//! the form submission relay.

pub mod config;
pub mod error;
pub mod routes;
pub mod routing;
pub mod security;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use routing::{BrandResolver, RouteDecision};
pub use state::AppState;
