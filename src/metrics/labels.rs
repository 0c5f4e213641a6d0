//! Label types for Prometheus metrics

use prometheus_client::encoding::EncodeLabelSet;

/// Labels of the request counter: HTTP method and route template
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct RequestLabels {
    pub method: String,
    pub endpoint: String,
}

impl RequestLabels {
    pub fn new(method: &str, endpoint: &str) -> Self {
        Self {
            method: method.to_string(),
            endpoint: endpoint.to_string(),
        }
    }
}
