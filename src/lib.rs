// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Stock API
//!
//! Skeletal HTTP service exposing placeholder stock endpoints and
//! per-endpoint request counters in Prometheus format.
//!
//! ## Main modules
//! - `api`: HTTP router and handlers
//! - `config`: configuration management
//! - `error`: error types
//! - `metrics`: request counters and registry
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod error;
mod metrics;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, ResponseStyle};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router, state, and response bodies
pub use api::handlers::{GREETING, Greeting, HealthResponse, METRICS_CONTENT_TYPE, StockQuote};
pub use api::{AppState, create_router, routes};

/// Metrics registry and labels
pub use metrics::{MetricsRegistry, RequestLabels};
