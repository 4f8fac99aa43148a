//! Chart generation models

use chrono::NaiveDate;

/// A single daily observation on a price chart
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}
