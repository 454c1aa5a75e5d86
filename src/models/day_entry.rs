use super::driver::Driver;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// One day's input: every driver's output plus the single shared expense and
/// note of that date.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub amounts: BTreeMap<Driver, f64>,
    pub expense: f64,
    pub note: String,
}

impl DayEntry {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            amounts: BTreeMap::new(),
            expense: 0.0,
            note: String::new(),
        }
    }

    pub fn with_amount(mut self, driver: &str, produced: f64) -> Self {
        self.amounts.insert(Driver::new(driver), produced);
        self
    }

    pub fn with_expense(mut self, expense: f64) -> Self {
        self.expense = expense;
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = note.to_string();
        self
    }

    pub fn amount_for(&self, driver: &Driver) -> Option<f64> {
        self.amounts.get(driver).copied()
    }
}
