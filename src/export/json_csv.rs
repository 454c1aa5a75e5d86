// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{SummaryExport, get_headers, summary_to_row};
use crate::export::notify_export_success;
use crate::models::day_summary::DailySummary;
use crate::models::driver::DriverRoster;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[DailySummary], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let items: Vec<SummaryExport> = rows.iter().map(SummaryExport::from).collect();
    let json_data = serde_json::to_string_pretty(&items)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with one column per roster driver.
pub(crate) fn export_csv(rows: &[DailySummary], roster: &DriverRoster, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(get_headers(roster))
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for s in rows {
        wtr.write_record(summary_to_row(s))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
