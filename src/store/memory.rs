//! In-process store. Counts reads and writes so callers can observe caching.

use super::{Grid, TableStore};
use crate::core::sheet::header_row;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    rows: Grid,
    unreachable: bool,
    pub loads: usize,
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Grid) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// A store whose every operation fails as unreachable.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> &Grid {
        &self.rows
    }

    fn check(&self) -> AppResult<()> {
        if self.unreachable {
            return Err(AppError::store(&self.name(), "store offline"));
        }
        Ok(())
    }
}

impl TableStore for MemoryStore {
    fn name(&self) -> String {
        "memory".to_string()
    }

    fn load_table(&mut self) -> AppResult<Grid> {
        self.check()?;
        self.loads += 1;
        Ok(self.rows.clone())
    }

    fn replace_table(&mut self, rows: &[Vec<String>]) -> AppResult<()> {
        self.check()?;
        self.writes += 1;
        self.rows = rows.to_vec();
        Ok(())
    }

    fn initialize(&mut self) -> AppResult<bool> {
        self.check()?;
        if self.rows.is_empty() {
            self.rows = vec![header_row()];
            return Ok(true);
        }
        Ok(false)
    }
}
