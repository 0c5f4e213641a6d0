// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Registry initialization and metric registration

use crate::metrics::labels::RequestLabels;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::MetricsRegistry;

impl MetricsRegistry {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let http_requests = Family::<RequestLabels, Counter>::default();
        registry.register(
            "stock_api_http_requests",
            "Total HTTP requests by method and endpoint",
            http_requests.clone(),
        );

        Self {
            registry: Arc::new(Mutex::new(registry)),
            http_requests,
        }
    }
}
