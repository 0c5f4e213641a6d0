use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::{AppState, routes};
use crate::config::ResponseStyle;

pub const GREETING: &str = "Hello from Stock API!";

/// Greeting body in the JSON response style
#[derive(Debug, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

/// GET /
pub async fn root(State(state): State<Arc<AppState>>) -> Response {
    state.metrics.record_request("GET", routes::ROOT);
    tracing::debug!("Greeting served ({:?} style)", state.config.response_style);

    match state.config.response_style {
        ResponseStyle::Json => Json(Greeting {
            message: GREETING.to_string(),
        })
        .into_response(),
        ResponseStyle::Plain => GREETING.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::metrics::MetricsRegistry;
    use axum::http::{StatusCode, header};

    fn state_with(style: ResponseStyle) -> Arc<AppState> {
        Arc::new(AppState {
            config: Config {
                response_style: style,
                ..Config::default()
            },
            metrics: MetricsRegistry::new(),
        })
    }

    #[tokio::test]
    async fn test_root_counts_request_in_both_styles() {
        for style in [ResponseStyle::Json, ResponseStyle::Plain] {
            let state = state_with(style);

            let response = root(State(state.clone())).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(state.metrics.request_count("GET", "/"), 1);

            let _ = root(State(state.clone())).await;
            assert_eq!(state.metrics.request_count("GET", "/"), 2);
        }
    }

    #[tokio::test]
    async fn test_root_content_type_follows_style() {
        let json = root(State(state_with(ResponseStyle::Json))).await;
        let plain = root(State(state_with(ResponseStyle::Plain))).await;

        let content_type = |r: &Response| {
            r.headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string()
        };
        assert!(content_type(&json).starts_with("application/json"));
        assert!(content_type(&plain).starts_with("text/plain"));
    }
}
