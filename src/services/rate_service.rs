use chrono::DateTime;
use tracing::debug;

use crate::api::yahoo::{ApiError, ChartResult, YahooChartClient};
use crate::models::PricePoint;

/// Convert a fetched chart result into chronologically ordered price points.
///
/// Timestamps are zipped with the first quote block's close array. Null
/// closes (days without a fix) are skipped. An empty or missing series
/// yields an empty vector.
pub fn to_price_points(result: &ChartResult) -> Vec<PricePoint> {
    let timestamps = match &result.timestamp {
        Some(t) => t,
        None => return Vec::new(),
    };

    let closes = match result.indicators.quote.first().and_then(|q| q.close.as_ref()) {
        Some(c) => c,
        None => return Vec::new(),
    };

    let mut points: Vec<PricePoint> = Vec::new();

    for (ts, close) in timestamps.iter().zip(closes.iter()) {
        let close = match close {
            Some(c) => *c,
            None => continue,
        };

        let date = match DateTime::from_timestamp(*ts, 0) {
            Some(dt) => dt.date_naive(),
            None => continue,
        };

        points.push(PricePoint { date, close });
    }

    // Sort by date (should already be sorted from the provider, but ensure it)
    points.sort_by_key(|p| p.date);

    points
}

/// Fetch one year of daily history for a symbol and shape it for charting.
///
/// An empty series is a valid result, not an error; the caller decides
/// what to do with zero rows.
pub async fn fetch_rate_history(
    client: &YahooChartClient,
    symbol: &str,
) -> Result<Vec<PricePoint>, ApiError> {
    let result = client.fetch_daily_history(symbol, "1y", "1d").await?;
    let points = to_price_points(&result);
    debug!("Shaped {} observations for {}", points.len(), symbol);
    Ok(points)
}
