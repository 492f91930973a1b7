//! GrowthWave Shared Types
//!
//! This crate contains the brand registry and types shared across the
//! GrowthWave gateway and CRM crates.

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
