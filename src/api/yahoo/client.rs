use reqwest::Client as HttpClient;
use super::models::{ApiError, ChartResponse, ChartResult};
use tracing::{debug, warn};

/// Yahoo Finance chart API client for fetching historical price series
pub struct YahooChartClient {
    http_client: HttpClient,
    base_url: String,
}

impl YahooChartClient {
    const DEFAULT_BASE_URL: &'static str = "https://query1.finance.yahoo.com/v8/finance/chart";
    // The endpoint rejects requests without a browser-style User-Agent
    const USER_AGENT: &'static str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

    /// Create a new chart API client
    pub fn new() -> Self {
        let http_client = HttpClient::builder()
            .user_agent(Self::USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a new client with custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        let mut client = Self::new();
        client.base_url = base_url;
        client
    }

    /// Parse error response based on HTTP status code
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        // The provider usually embeds its own error object even on non-2xx
        if let Ok(envelope) = serde_json::from_str::<ChartResponse>(&body_text) {
            if let Some(error) = envelope.chart.error {
                return ApiError::ProviderError {
                    code: error.code,
                    description: error.description,
                };
            }
        }

        match status_code {
            400 => ApiError::BadRequest(body_text),
            401 => ApiError::Unauthorized(body_text),
            403 => ApiError::Forbidden(body_text),
            404 => ApiError::NotFound(body_text),
            429 => {
                warn!("Rate limited by chart API");
                ApiError::RateLimited(body_text)
            }
            500..=599 => {
                warn!("Server error {}: {}", status_code, body_text);
                ApiError::ServerError(status_code, body_text)
            }
            _ => ApiError::HttpError(status_code, body_text),
        }
    }

    /// GET /{symbol}?range={range}&interval={interval}
    ///
    /// Fetches the historical series for one symbol over a trailing period
    /// at the given sampling interval.
    ///
    /// # Arguments
    /// * `symbol` - Ticker symbol, e.g. "USDEUR=X"
    /// * `range` - Trailing period, e.g. "1y"
    /// * `interval` - Sampling interval, e.g. "1d"
    ///
    /// # Returns
    /// * `Ok(ChartResult)` - The fetched series (its quote arrays may be empty)
    /// * `Err(ApiError)` - Transport, HTTP or provider-reported failure
    pub async fn fetch_daily_history(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<ChartResult, ApiError> {
        let url = format!("{}/{}", self.base_url, symbol);
        debug!("GET {} range={} interval={}", url, range, interval);

        let response = self.http_client
            .get(&url)
            .query(&[("range", range), ("interval", interval)])
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        let envelope = response
            .json::<ChartResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))?;

        if let Some(error) = envelope.chart.error {
            return Err(ApiError::ProviderError {
                code: error.code,
                description: error.description,
            });
        }

        envelope
            .chart
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| {
                ApiError::DeserializationError("Chart response contained no result".to_string())
            })
    }
}
