// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Request metrics for the Stock API service
//!
//! Contains the label set for HTTP request counters and the Prometheus registry
//! that owns them.

mod labels;
mod registry;

/// Labels for HTTP request counters
pub use labels::RequestLabels;

/// Prometheus metrics registry
pub use registry::MetricsRegistry;
