use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level envelope of the v8 chart endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

/// Either a list of results or a provider-reported error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ProviderError>,
}

/// One fetched series: metadata, timestamps and quote arrays
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
    /// Unix seconds, one entry per observation; absent when the range is empty
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    pub indicators: Indicators,
}

/// Series metadata returned alongside the quotes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub currency: Option<String>,
    pub symbol: String,
    #[serde(default)]
    pub regular_market_price: Option<f64>,
    #[serde(default)]
    pub chart_previous_close: Option<f64>,
    #[serde(default)]
    pub data_granularity: Option<String>,
    #[serde(default)]
    pub range: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteBlock>,
}

/// Parallel OHLCV arrays; entries are null on days without a fix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteBlock {
    #[serde(default)]
    pub open: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub high: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub low: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub close: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub volume: Option<Vec<Option<u64>>>,
}

/// Error object the provider embeds in the envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderError {
    pub code: String,
    pub description: String,
}

/// Comprehensive error type for chart API operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// 400 Bad Request
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// 401 Unauthorized
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// 403 Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),
    /// 404 Not Found
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 429 Too Many Requests (rate limited)
    #[error("Rate Limited: {0}")]
    RateLimited(String),
    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    /// Other HTTP errors
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Deserialization error
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
    /// Error reported inside the provider's envelope
    #[error("Provider Error ({code}): {description}")]
    ProviderError { code: String, description: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "chart": {
            "result": [{
                "meta": {
                    "currency": "EUR",
                    "symbol": "USDEUR=X",
                    "regularMarketPrice": 0.9187,
                    "chartPreviousClose": 0.9154,
                    "dataGranularity": "1d",
                    "range": "1y"
                },
                "timestamp": [1722844800, 1722931200, 1723017600],
                "indicators": {
                    "quote": [{
                        "open": [0.9151, 0.9163, null],
                        "high": [0.9178, 0.9191, 0.9202],
                        "low": [0.9144, 0.9152, 0.9169],
                        "close": [0.9162, 0.9187, null],
                        "volume": [0, 0, null]
                    }]
                }
            }],
            "error": null
        }
    }"#;

    const ERROR_RESPONSE: &str = r#"{
        "chart": {
            "result": null,
            "error": {
                "code": "Not Found",
                "description": "No data found, symbol may be delisted"
            }
        }
    }"#;

    #[test]
    fn test_parse_chart_response() {
        let parsed: ChartResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        let results = parsed.chart.result.unwrap();
        let result = &results[0];

        assert_eq!(result.meta.symbol, "USDEUR=X");
        assert_eq!(result.meta.currency.as_deref(), Some("EUR"));
        assert_eq!(result.timestamp.as_ref().unwrap().len(), 3);

        let quote = &result.indicators.quote[0];
        let close = quote.close.as_ref().unwrap();
        assert_eq!(close.len(), 3);
        assert_eq!(close[1], Some(0.9187));
        assert_eq!(close[2], None);
    }

    #[test]
    fn test_parse_provider_error() {
        let parsed: ChartResponse = serde_json::from_str(ERROR_RESPONSE).unwrap();
        assert!(parsed.chart.result.is_none());

        let error = parsed.chart.error.unwrap();
        assert_eq!(error.code, "Not Found");
        assert!(error.description.contains("No data found"));
    }
}
