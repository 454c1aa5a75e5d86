// src/export/logic.rs

use crate::core::Ledger;
use crate::core::summary::SortOrder;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::store::TableStore;
use crate::ui::messages::warning;
use crate::utils::range::parse_optional_range;
use std::path::Path;

/// High-level export of the daily summary.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the summary, ascending by date.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or a range expression (`YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD`, `START:END`)
    ///
    /// Returns the number of exported days.
    pub fn export<S: TableStore>(
        ledger: &mut Ledger<S>,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds = parse_optional_range(range)?;
        ensure_writable(path, force)?;

        let report = ledger.report(bounds, SortOrder::Ascending)?;

        if report.rows.is_empty() {
            warning("No days found for the selected range.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&report.rows, ledger.roster(), path)?,
            ExportFormat::Json => export_json(&report.rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&report.rows, ledger.roster(), &report.totals, path)?,
        }

        Ok(report.rows.len())
    }
}
