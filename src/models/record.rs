use super::driver::Driver;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Date cell of a stored row.
///
/// `Missing` is the "no date" sentinel: it keeps the raw text so the row is
/// written back unchanged, sorts after every real date and never takes part
/// in date grouping or range filtering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordDate {
    Day(NaiveDate),
    Missing(String),
}

impl RecordDate {
    pub fn day(&self) -> Option<NaiveDate> {
        match self {
            RecordDate::Day(d) => Some(*d),
            RecordDate::Missing(_) => None,
        }
    }

    /// Text written to the store.
    pub fn to_sheet(&self) -> String {
        match self {
            RecordDate::Day(d) => d.format("%Y-%m-%d").to_string(),
            RecordDate::Missing(raw) => raw.clone(),
        }
    }
}

impl Ord for RecordDate {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (RecordDate::Day(a), RecordDate::Day(b)) => a.cmp(b),
            (RecordDate::Day(_), RecordDate::Missing(_)) => Ordering::Less,
            (RecordDate::Missing(_), RecordDate::Day(_)) => Ordering::Greater,
            (RecordDate::Missing(a), RecordDate::Missing(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for RecordDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One row of the ledger store, keyed by (date, driver).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub date: RecordDate,     // ⇔ FECHA
    pub driver: Driver,       // ⇔ CONDUCTOR
    pub produced: f64,        // ⇔ PRODUCIDO
    pub note: String,         // ⇔ OBSERVACION (primary driver only)
    pub expense: f64,         // ⇔ GASTOS (primary driver only)
}

impl Record {
    pub fn new(date: NaiveDate, driver: &str, produced: f64, note: &str, expense: f64) -> Self {
        Self {
            date: RecordDate::Day(date),
            driver: Driver::new(driver),
            produced,
            note: note.to_string(),
            expense,
        }
    }

    pub fn is_key(&self, date: &RecordDate, driver: &Driver) -> bool {
        &self.date == date && &self.driver == driver
    }
}
