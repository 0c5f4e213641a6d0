// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry for HTTP request counters

mod init;
mod scrape;

use crate::metrics::labels::RequestLabels;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Process-wide request counters
///
/// Cloning is cheap and every clone shares the same counters.
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Mutex<Registry>>,
    http_requests: Family<RequestLabels, Counter>,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_starts_at_zero() {
        let registry = MetricsRegistry::new();
        assert_eq!(registry.request_count("GET", "/"), 0);
    }

    #[test]
    fn test_record_request_increments_by_one() {
        let registry = MetricsRegistry::new();

        registry.record_request("GET", "/health");
        assert_eq!(registry.request_count("GET", "/health"), 1);

        registry.record_request("GET", "/health");
        registry.record_request("GET", "/health");
        assert_eq!(registry.request_count("GET", "/health"), 3);
    }

    #[test]
    fn test_counters_are_independent_per_label_pair() {
        let registry = MetricsRegistry::new();

        registry.record_request("GET", "/");
        registry.record_request("GET", "/stock/{symbol}");
        registry.record_request("GET", "/stock/{symbol}");

        assert_eq!(registry.request_count("GET", "/"), 1);
        assert_eq!(registry.request_count("GET", "/stock/{symbol}"), 2);
        assert_eq!(registry.request_count("GET", "/health"), 0);
        assert_eq!(registry.request_count("POST", "/"), 0);
    }

    #[test]
    fn test_clones_share_counters() {
        let registry = MetricsRegistry::new();
        let clone = registry.clone();

        clone.record_request("GET", "/");

        assert_eq!(registry.request_count("GET", "/"), 1);
    }

    #[tokio::test]
    async fn test_encode_contains_counter() {
        let registry = MetricsRegistry::new();
        registry.record_request("GET", "/health");
        registry.record_request("GET", "/health");

        let text = registry.encode_metrics().await.unwrap();

        assert!(text.contains("# TYPE stock_api_http_requests counter"));
        assert!(text.contains(
            "stock_api_http_requests_total{method=\"GET\",endpoint=\"/health\"} 2"
        ));
    }

    #[tokio::test]
    async fn test_initialized_endpoint_is_exported_at_zero() {
        let registry = MetricsRegistry::new();
        registry.initialize_endpoint("GET", "/");

        let text = registry.encode_metrics().await.unwrap();

        assert!(text.contains("stock_api_http_requests_total{method=\"GET\",endpoint=\"/\"} 0"));
        assert_eq!(registry.request_count("GET", "/"), 0);
    }

    #[tokio::test]
    async fn test_reading_unseen_pair_does_not_export_it() {
        let registry = MetricsRegistry::new();

        assert_eq!(registry.request_count("DELETE", "/never-served"), 0);

        let text = registry.encode_metrics().await.unwrap();
        assert!(!text.contains("endpoint=\"/never-served\""));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_not_lost() {
        let registry = MetricsRegistry::new();
        let mut handles = Vec::new();

        for _ in 0..8 {
            let registry = registry.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..250 {
                    registry.record_request("GET", "/");
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(registry.request_count("GET", "/"), 2000);
    }
}
