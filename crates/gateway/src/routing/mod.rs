//! Hostname-based routing for the brand sites
//!
//! This module maps incoming Host headers to brand subdirectories of the
//! shared static build, enabling clean per-division URLs:
//! - growthwaveadvisors.com/about -> /advisors/about/
//! - growthwavecapital.com/about -> /capital/about/
//! - growthwaveproperties.com/about -> /properties/about/

mod middleware;
mod resolver;

pub use middleware::rewrite_request;
pub use resolver::{BrandResolver, RouteDecision, FILE_EXTENSIONS, PASSTHROUGH_PREFIXES};
