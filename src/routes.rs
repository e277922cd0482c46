//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/shorten` - Create a short link (rate limited)
//! - `GET  /s/{id}`      - Short link redirect
//! - `GET  /health`      - Health check
//! - `GET  /metrics`     - HTTP metrics snapshot
//! - `GET  /`            - Web UI index page
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! CORS, request tracing, and metrics collection wrap every route; the rate
//! limiter covers the API only so redirects stay cheap.

use std::path::Path;

use axum::{Router, middleware, routing::get};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::api;
use crate::api::handlers::{health_handler, metrics_handler, redirect_handler};
use crate::api::middleware::{cors, metrics, rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// Rate limiting keys on the peer IP, so the returned service must be driven
/// with connect info (see [`crate::server::run`]).
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let api_router =
        api::routes::api_routes().layer(rate_limit::layer(config.rate_limit, config.rate_window()));

    let static_dir = Path::new(&config.static_dir);

    let router = Router::new()
        .route("/s/{id}", get(redirect_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .nest("/api", api_router)
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(middleware::from_fn_with_state(state.clone(), metrics::track))
        .layer(tracing::layer())
        .layer(cors::layer())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
