// src/export/model.rs

use crate::core::sheet::{COL_DATE, COL_EXPENSE, COL_NOTE, format_amount};
use crate::models::day_summary::DailySummary;
use crate::models::driver::DriverRoster;
use serde::Serialize;

pub const COL_TOTAL: &str = "TOTAL_PRODUCIDO";
pub const COL_NET: &str = "NETO";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DriverAmount {
    pub driver: String,
    pub produced: f64,
}

/// Serializable form of a daily summary (JSON export).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SummaryExport {
    pub date: String,
    pub produced: Vec<DriverAmount>,
    pub expense: f64,
    pub total_produced: f64,
    pub net: f64,
    pub note: String,
}

impl From<&DailySummary> for SummaryExport {
    fn from(s: &DailySummary) -> Self {
        Self {
            date: s.date.format("%Y-%m-%d").to_string(),
            produced: s
                .produced
                .iter()
                .map(|(d, v)| DriverAmount {
                    driver: d.as_str().to_string(),
                    produced: *v,
                })
                .collect(),
            expense: s.expense,
            total_produced: s.total_produced,
            net: s.net,
            note: s.note.clone(),
        }
    }
}

/// Column headers for CSV / XLSX: one column per roster driver.
pub(crate) fn get_headers(roster: &DriverRoster) -> Vec<String> {
    let mut h = vec![COL_DATE.to_string()];
    h.extend(roster.iter().map(|d| d.as_str().to_string()));
    h.extend([COL_EXPENSE, COL_TOTAL, COL_NET, COL_NOTE].map(String::from));
    h
}

/// Flat row matching `get_headers`. Amounts as plain decimal text.
pub(crate) fn summary_to_row(s: &DailySummary) -> Vec<String> {
    let mut row = vec![s.date.format("%Y-%m-%d").to_string()];
    row.extend(s.produced.iter().map(|(_, v)| format_amount(*v)));
    row.push(format_amount(s.expense));
    row.push(format_amount(s.total_produced));
    row.push(format_amount(s.net));
    row.push(s.note.clone());
    row
}
