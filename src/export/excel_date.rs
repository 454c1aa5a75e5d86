// src/export/excel_date.rs

use chrono::NaiveDate;

/// Excel serial day number (1900 date system, epoch 1899-12-30).
pub(crate) fn excel_serial(d: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN);
    (d - epoch).num_days() as f64
}
