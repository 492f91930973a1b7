//! Brand configuration endpoints
//!
//! Read-only JSON views of the static brand registry, consumed by the
//! front-end components for brand-aware rendering.

use axum::{extract::Path, Json};

use growthwave_shared::{brand_config, BrandConfig, BRANDS};

use crate::error::{ApiError, ApiResult};

/// List all brand configurations
pub async fn list_brands() -> Json<&'static [BrandConfig]> {
    Json(BRANDS)
}

/// Get a single brand configuration by its lowercase token
pub async fn get_brand(Path(brand_id): Path<String>) -> ApiResult<Json<&'static BrandConfig>> {
    brand_config(&brand_id).map(Json).ok_or(ApiError::NotFound)
}
