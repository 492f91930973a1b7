//! Error types shared across the GrowthWave crates

use thiserror::Error;

/// A string that does not name any known brand.
#[derive(Debug, Error)]
#[error("Unknown brand: {0}")]
pub struct UnknownBrand(pub String);
