//! Gateway routes

pub mod brands;
pub mod forms;
pub mod health;

use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    routing::rewrite_request, security::headers::security_headers_middleware, state::AppState,
};

/// Create the gateway router
pub fn create_router(state: AppState) -> Router {
    // Health probes (at root level for infrastructure monitoring)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness));

    // Public API routes - under /api/v1. The brand sites are separate
    // origins from the gateway host, so the API subtree is CORS-open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let api_v1_routes = Router::new()
        .route("/forms/submit", post(forms::submit_form))
        .route("/brands", get(brands::list_brands))
        .route("/brands/:brand_id", get(brands::get_brand))
        .layer(cors);

    // Everything that is not an API or health route is the static site,
    // served at the (possibly rewritten) internal path. The rewrite layer
    // wraps route matching, so it runs before any of the above resolve;
    // its passthrough prefixes keep /api and /health untouched.
    Router::new()
        .merge(health_routes)
        .nest("/api/v1", api_v1_routes)
        .fallback_service(ServeDir::new(&state.config.site_root))
        .layer(middleware::from_fn_with_state(
            state.resolver.clone(),
            rewrite_request,
        ))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
