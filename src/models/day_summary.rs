use super::driver::{Driver, normalize};
use chrono::NaiveDate;

/// Derived per-date row: one amount per roster driver plus the day's totals.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub produced: Vec<(Driver, f64)>, // roster order
    pub expense: f64,
    pub note: String,
    pub total_produced: f64,
    pub net: f64,
}

impl DailySummary {
    /// Amount for a driver name; `0` for drivers outside the roster.
    pub fn amount_for(&self, driver: &str) -> f64 {
        let wanted = normalize(driver);
        self.produced
            .iter()
            .find(|(d, _)| d.as_str() == wanted)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }
}
