//! SQLite-backed sheet: one `ledger` row per record, exposed through the same
//! whole-table interface as the CSV sheet.

use super::{Grid, TableStore};
use crate::core::sheet::header_row;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OpenFlags, params};
use std::path::{Path, PathBuf};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS ledger (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        fecha       TEXT NOT NULL DEFAULT '',
        producido   TEXT NOT NULL DEFAULT '0',
        conductor   TEXT NOT NULL DEFAULT '',
        observacion TEXT NOT NULL DEFAULT '',
        gastos      TEXT NOT NULL DEFAULT '0'
    );
    CREATE INDEX IF NOT EXISTS idx_ledger_key ON ledger (fecha, conductor);
"#;

pub struct SqliteSheetStore {
    path: PathBuf,
    conn: Option<Connection>,
}

impl SqliteSheetStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            conn: None,
        }
    }

    fn fail<E: std::fmt::Display>(&self, err: E) -> AppError {
        AppError::store(&self.name(), err)
    }

    /// Lazily open the database. Without `create` a missing file is an error.
    fn conn(&mut self, create: bool) -> AppResult<&mut Connection> {
        if self.conn.is_none() {
            if !create && !self.path.exists() {
                return Err(self.fail("database not found (run `taxiledger init` first)"));
            }

            let mut flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
            if create {
                flags |= OpenFlags::SQLITE_OPEN_CREATE;
            }

            let conn = Connection::open_with_flags(&self.path, flags).map_err(|e| self.fail(e))?;
            conn.execute_batch(SCHEMA).map_err(|e| self.fail(e))?;
            self.conn = Some(conn);
        }

        let name = self.name();
        self.conn
            .as_mut()
            .ok_or_else(|| AppError::store(&name, "connection not available"))
    }
}

impl TableStore for SqliteSheetStore {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load_table(&mut self) -> AppResult<Grid> {
        let name = self.name();
        let conn = self.conn(false)?;

        let mut stmt = conn
            .prepare(
                "SELECT fecha, producido, conductor, observacion, gastos
                 FROM ledger
                 ORDER BY id ASC",
            )
            .map_err(|e| AppError::store(&name, e))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(vec![
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ])
            })
            .map_err(|e| AppError::store(&name, e))?;

        let mut grid = vec![header_row()];
        for r in rows {
            grid.push(r.map_err(|e| AppError::store(&name, e))?);
        }

        Ok(grid)
    }

    /// The header row is matched by name like any other sheet; the remaining
    /// rows replace the table inside a single transaction.
    fn replace_table(&mut self, rows: &[Vec<String>]) -> AppResult<()> {
        let name = self.name();
        let conn = self.conn(false)?;
        let fail = |e: rusqlite::Error| AppError::store(&name, e);

        let Some((header, body)) = rows.split_first() else {
            conn.execute("DELETE FROM ledger", []).map_err(fail)?;
            return Ok(());
        };

        let idx: Vec<Option<usize>> = header_row()
            .iter()
            .map(|col| {
                header
                    .iter()
                    .position(|h| h.trim().eq_ignore_ascii_case(col))
            })
            .collect();
        let cell = |row: &[String], i: usize| -> String {
            idx[i]
                .and_then(|p| row.get(p))
                .cloned()
                .unwrap_or_default()
        };

        let tx = conn.transaction().map_err(fail)?;
        tx.execute("DELETE FROM ledger", []).map_err(fail)?;
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO ledger (fecha, producido, conductor, observacion, gastos)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                )
                .map_err(fail)?;

            for row in body {
                stmt.execute(params![
                    cell(row, 0),
                    cell(row, 1),
                    cell(row, 2),
                    cell(row, 3),
                    cell(row, 4),
                ])
                .map_err(fail)?;
            }
        }
        tx.commit().map_err(fail)?;

        Ok(())
    }

    fn initialize(&mut self) -> AppResult<bool> {
        let existed = self.path.exists();
        self.conn(true)?;
        Ok(!existed)
    }
}
