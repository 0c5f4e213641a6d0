// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP API module for the Stock API service
//!
//! # Endpoints
//! - `GET /` — greeting
//! - `GET /health` — health check
//! - `GET /stock/{symbol}` — placeholder quote
//! - `GET /metrics` — Prometheus metrics

pub mod handlers;
mod state;

use axum::{Router, routing::get};
use std::sync::Arc;

pub use state::AppState;

/// Route templates, also used as the `endpoint` metric label
pub mod routes {
    pub const ROOT: &str = "/";
    pub const HEALTH: &str = "/health";
    pub const STOCK: &str = "/stock/{symbol}";
    pub const METRICS: &str = "/metrics";
}

/// Creates the main Axum router with all endpoints
///
/// Counted routes get their request series created up front so that they show
/// up in `/metrics` at zero.
pub fn create_router(state: Arc<AppState>) -> Router {
    for endpoint in [routes::ROOT, routes::HEALTH, routes::STOCK] {
        state.metrics.initialize_endpoint("GET", endpoint);
    }

    Router::new()
        .route(routes::ROOT, get(handlers::root))
        .route(routes::HEALTH, get(handlers::health_check))
        .route(routes::STOCK, get(handlers::stock_quote))
        .route(routes::METRICS, get(handlers::metrics_handler))
        .with_state(state)
}
