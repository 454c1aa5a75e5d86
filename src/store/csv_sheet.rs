//! CSV file used as the spreadsheet: one header row plus one row per record.

use super::{Grid, TableStore};
use crate::core::sheet::header_row;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

pub struct CsvSheetStore {
    path: PathBuf,
}

impl CsvSheetStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn fail<E: std::fmt::Display>(&self, err: E) -> AppError {
        AppError::store(&self.name(), err)
    }

    /// Write to a sibling temp file, then rename over the target so a failed
    /// write never leaves a half-written sheet behind.
    fn write_grid(&self, rows: &[Vec<String>]) -> AppResult<()> {
        let tmp = self.path.with_extension("csv.tmp");

        {
            let mut wtr = csv::WriterBuilder::new()
                .flexible(true)
                .from_path(&tmp)
                .map_err(|e| self.fail(e))?;

            for row in rows {
                wtr.write_record(row).map_err(|e| self.fail(e))?;
            }
            wtr.flush().map_err(|e| self.fail(e))?;
        }

        fs::rename(&tmp, &self.path).map_err(|e| self.fail(e))?;
        Ok(())
    }
}

impl TableStore for CsvSheetStore {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load_table(&mut self) -> AppResult<Grid> {
        if !self.path.exists() {
            return Err(self.fail("file not found (run `taxiledger init` first)"));
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| self.fail(e))?;

        let mut grid = Vec::new();
        for rec in rdr.records() {
            let rec = rec.map_err(|e| self.fail(e))?;
            grid.push(rec.iter().map(str::to_string).collect());
        }

        Ok(grid)
    }

    fn replace_table(&mut self, rows: &[Vec<String>]) -> AppResult<()> {
        self.write_grid(rows)
    }

    fn initialize(&mut self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.fail(e))?;
        }

        self.write_grid(&[header_row()])?;
        Ok(true)
    }
}
