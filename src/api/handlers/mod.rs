// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod health;
mod metrics;
mod root;
mod stock;

pub use health::{HealthResponse, health_check};
pub use metrics::{METRICS_CONTENT_TYPE, metrics_handler};
pub use root::{GREETING, Greeting, root};
pub use stock::{StockQuote, stock_quote};
