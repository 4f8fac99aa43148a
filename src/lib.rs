//! Two small charting pipelines sharing one library: a fixed demo sales
//! chart (`sales_chart`) and a one-year USD/EUR exchange rate chart fetched
//! from Yahoo Finance (`rate_chart`).

pub mod api;
pub mod models;
pub mod services;
pub mod utils;
pub mod viewer;
