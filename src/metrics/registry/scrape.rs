// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Request counting and exposition encoding

use crate::error::Result;
use crate::metrics::labels::RequestLabels;
use prometheus_client::encoding::text::encode;

use super::MetricsRegistry;

impl MetricsRegistry {
    /// Renders every registered metric in text exposition format
    pub async fn encode_metrics(&self) -> Result<String> {
        let registry = self.registry.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &registry)?;
        Ok(buffer)
    }

    /// Counts one request served for `endpoint` with `method`
    pub fn record_request(&self, method: &str, endpoint: &str) {
        self.http_requests
            .get_or_create(&RequestLabels::new(method, endpoint))
            .inc();
    }

    /// Current request count for a label pair (zero if never seen)
    ///
    /// Reading does not create the series.
    pub fn request_count(&self, method: &str, endpoint: &str) -> u64 {
        self.http_requests
            .get(&RequestLabels::new(method, endpoint))
            .map_or(0, |counter| counter.get())
    }

    /// Initialize the counter for a route to zero
    ///
    /// This makes the series visible in `/metrics` before the first request,
    /// so that rates can be computed from the very first scrape.
    pub fn initialize_endpoint(&self, method: &str, endpoint: &str) {
        let _ = self
            .http_requests
            .get_or_create(&RequestLabels::new(method, endpoint));
    }
}
