//! Mapping between the store's grid of strings and `Record` tables.
//!
//! Columns are found by header name (trimmed, case-insensitive), so the
//! store may reorder them or carry extra ones. A missing column reads as
//! blank in every row.

use crate::core::coerce::{CoercionPolicy, FieldError, LoadReport};
use crate::models::driver::Driver;
use crate::models::record::Record;

pub const COL_DATE: &str = "FECHA";
pub const COL_PRODUCED: &str = "PRODUCIDO";
pub const COL_DRIVER: &str = "CONDUCTOR";
pub const COL_NOTE: &str = "OBSERVACION";
pub const COL_EXPENSE: &str = "GASTOS";

/// Physical column order used when writing.
pub const HEADER: [&str; 5] = [COL_DATE, COL_PRODUCED, COL_DRIVER, COL_NOTE, COL_EXPENSE];

pub fn header_row() -> Vec<String> {
    HEADER.iter().map(|h| h.to_string()).collect()
}

struct ColumnMap {
    date: Option<usize>,
    produced: Option<usize>,
    driver: Option<usize>,
    note: Option<usize>,
    expense: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &[String]) -> Self {
        let find = |name: &str| {
            header
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        Self {
            date: find(COL_DATE),
            produced: find(COL_PRODUCED),
            driver: find(COL_DRIVER),
            note: find(COL_NOTE),
            expense: find(COL_EXPENSE),
        }
    }

    fn cell<'a>(idx: Option<usize>, row: &'a [String]) -> &'a str {
        idx.and_then(|i| row.get(i)).map(String::as_str).unwrap_or("")
    }
}

/// Decode a raw grid (header first) into records.
///
/// Under `CoercionPolicy::Strict` the first unparseable field is returned
/// as an error; otherwise it is defaulted and counted in the report.
pub fn decode_table(
    grid: &[Vec<String>],
    policy: CoercionPolicy,
) -> Result<(Vec<Record>, LoadReport), FieldError> {
    let mut report = LoadReport::default();

    let Some((header, rows)) = grid.split_first() else {
        return Ok((Vec::new(), report));
    };

    let cols = ColumnMap::from_header(header);
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let date_raw = ColumnMap::cell(cols.date, row);
        let produced_raw = ColumnMap::cell(cols.produced, row);
        let driver_raw = ColumnMap::cell(cols.driver, row);
        let note_raw = ColumnMap::cell(cols.note, row);
        let expense_raw = ColumnMap::cell(cols.expense, row);

        if [date_raw, produced_raw, driver_raw, note_raw, expense_raw]
            .iter()
            .all(|c| c.trim().is_empty())
        {
            report.blank_rows += 1;
            continue;
        }

        records.push(Record {
            date: policy.date(date_raw, &mut report)?,
            driver: Driver::new(driver_raw),
            produced: policy.amount(COL_PRODUCED, produced_raw, &mut report)?,
            note: note_raw.to_string(),
            expense: policy.amount(COL_EXPENSE, expense_raw, &mut report)?,
        });
    }

    Ok((records, report))
}

/// Encode records into a grid (header first) for `replace_table`.
pub fn encode_table(records: &[Record]) -> Vec<Vec<String>> {
    let mut grid = Vec::with_capacity(records.len() + 1);
    grid.push(header_row());

    for r in records {
        grid.push(vec![
            r.date.to_sheet(),
            format_amount(r.produced),
            r.driver.as_str().to_string(),
            r.note.clone(),
            format_amount(r.expense),
        ]);
    }

    grid
}

/// Decimal text; whole numbers carry no fractional part.
pub fn format_amount(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{:.0}", v)
    } else {
        v.to_string()
    }
}
