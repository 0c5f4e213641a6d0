use axum::{Json, extract::State, http::Uri};
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::{AppState, routes};

/// Quote returned by `/stock/{symbol}`
///
/// No market data is fetched: every quote carries the same placeholder price
/// and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    pub symbol: String,
    pub price: f64,
    pub timestamp: String,
}

impl StockQuote {
    pub const PLACEHOLDER_PRICE: f64 = 100.0;
    pub const PLACEHOLDER_TIMESTAMP: &'static str = "placeholder";

    pub fn placeholder(symbol: String) -> Self {
        Self {
            symbol,
            price: Self::PLACEHOLDER_PRICE,
            timestamp: Self::PLACEHOLDER_TIMESTAMP.to_string(),
        }
    }
}

/// Symbol from the last segment of a `/stock/{symbol}` path
///
/// Percent-escapes are decoded; bytes that are not valid UTF-8 become U+FFFD.
fn symbol_from_path(path: &str) -> String {
    let segment = path.rsplit('/').next().unwrap_or_default();
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// GET /stock/{symbol}
///
/// The raw segment is decoded here instead of through `Path`, so no symbol is
/// ever rejected.
pub async fn stock_quote(State(state): State<Arc<AppState>>, uri: Uri) -> Json<StockQuote> {
    state.metrics.record_request("GET", routes::STOCK);
    let symbol = symbol_from_path(uri.path());
    tracing::debug!("Placeholder quote requested for symbol '{}'", symbol);

    Json(StockQuote::placeholder(symbol))
}
