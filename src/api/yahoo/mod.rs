pub mod client;
pub mod models;

pub use client::YahooChartClient;
pub use models::{ApiError, ChartResponse, ChartResult};
