// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use stock_api::prelude::*;
//! ```

// Core types
pub use crate::config::{Config, ResponseStyle};
pub use crate::error::{AppError, Result};

// HTTP surface
pub use crate::api::handlers::{Greeting, HealthResponse, StockQuote};
pub use crate::api::{AppState, create_router};

// Metrics types
pub use crate::metrics::{MetricsRegistry, RequestLabels};
