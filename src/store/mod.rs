//! Tabular store adapters.
//!
//! The ledger only ever reads the whole table and replaces the whole table,
//! so every backend implements exactly those two operations on a grid of
//! strings whose first row is the header.

pub mod cache;
pub mod csv_sheet;
pub mod memory;
pub mod sqlite_sheet;

pub use cache::CachedStore;
pub use csv_sheet::CsvSheetStore;
pub use memory::MemoryStore;
pub use sqlite_sheet::SqliteSheetStore;

use crate::errors::AppResult;
use std::path::Path;

pub type Grid = Vec<Vec<String>>;

pub trait TableStore {
    /// Human-readable location, used in messages and errors.
    fn name(&self) -> String;

    /// Read every row, header first. An empty store yields an empty grid or
    /// just the header.
    fn load_table(&mut self) -> AppResult<Grid>;

    /// Replace the whole content with `rows` (header first).
    fn replace_table(&mut self, rows: &[Vec<String>]) -> AppResult<()>;

    /// Create an empty store (header only) if none exists yet.
    /// Returns `true` when something was created.
    fn initialize(&mut self) -> AppResult<bool> {
        Ok(false)
    }
}

impl<T: TableStore + ?Sized> TableStore for Box<T> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn load_table(&mut self) -> AppResult<Grid> {
        (**self).load_table()
    }

    fn replace_table(&mut self, rows: &[Vec<String>]) -> AppResult<()> {
        (**self).replace_table(rows)
    }

    fn initialize(&mut self) -> AppResult<bool> {
        (**self).initialize()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Csv,
    Sqlite,
}

impl StoreKind {
    /// `.sqlite` / `.sqlite3` / `.db` select SQLite, anything else CSV.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .as_deref()
        {
            Some("sqlite") | Some("sqlite3") | Some("db") => StoreKind::Sqlite,
            _ => StoreKind::Csv,
        }
    }
}

/// Open the backend matching the file extension. Nothing is touched on disk
/// until the first load/replace/initialize.
pub fn open_store(path: &Path) -> Box<dyn TableStore> {
    match StoreKind::from_path(path) {
        StoreKind::Csv => Box::new(CsvSheetStore::new(path)),
        StoreKind::Sqlite => Box::new(SqliteSheetStore::new(path)),
    }
}
