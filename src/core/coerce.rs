//! Field parsing and the lenient/strict coercion policy.
//!
//! Every parser returns a `Result`; `CoercionPolicy` decides whether a
//! failure degrades to a default value (and is counted in a `LoadReport`) or
//! is handed back to the caller.

use crate::models::record::RecordDate;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("unparseable date '{0}'")]
    Date(String),

    #[error("'{value}' is not a number (column {column})")]
    NotANumber { column: &'static str, value: String },

    #[error("negative amount '{value}' (column {column})")]
    Negative { column: &'static str, value: String },
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

pub fn parse_date(raw: &str) -> Result<NaiveDate, FieldError> {
    let s = raw.trim();

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }

    Err(FieldError::Date(raw.to_string()))
}

/// Parse a non-negative decimal amount. Blank text is `0`.
pub fn parse_amount(column: &'static str, raw: &str) -> Result<f64, FieldError> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(0.0);
    }

    let v: f64 = s.parse().map_err(|_| FieldError::NotANumber {
        column,
        value: raw.to_string(),
    })?;

    if !v.is_finite() {
        return Err(FieldError::NotANumber {
            column,
            value: raw.to_string(),
        });
    }
    if v < 0.0 {
        return Err(FieldError::Negative {
            column,
            value: raw.to_string(),
        });
    }

    // "-0" parses fine and must not print as "-0"
    Ok(if v == 0.0 { 0.0 } else { v })
}

/// Parse failures seen while decoding, and rows skipped because every field
/// was blank.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoadReport {
    pub coerced: Vec<FieldError>,
    pub blank_rows: usize,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.coerced.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoercionPolicy {
    /// Bad numbers become `0`, bad dates the "no date" sentinel.
    #[default]
    Lenient,
    /// The first bad field is returned as an error.
    Strict,
}

impl CoercionPolicy {
    pub fn amount(
        self,
        column: &'static str,
        raw: &str,
        report: &mut LoadReport,
    ) -> Result<f64, FieldError> {
        match parse_amount(column, raw) {
            Ok(v) => Ok(v),
            Err(e) => self.degrade(e, report, 0.0),
        }
    }

    pub fn date(self, raw: &str, report: &mut LoadReport) -> Result<RecordDate, FieldError> {
        match parse_date(raw) {
            Ok(d) => Ok(RecordDate::Day(d)),
            Err(e) => self.degrade(e, report, RecordDate::Missing(raw.trim().to_string())),
        }
    }

    fn degrade<T>(self, err: FieldError, report: &mut LoadReport, fallback: T) -> Result<T, FieldError> {
        match self {
            CoercionPolicy::Lenient => {
                report.coerced.push(err);
                Ok(fallback)
            }
            CoercionPolicy::Strict => Err(err),
        }
    }
}
