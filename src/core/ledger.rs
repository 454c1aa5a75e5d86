use crate::core::coerce::{CoercionPolicy, LoadReport};
use crate::core::sheet::{decode_table, encode_table};
use crate::core::summary::{RangeTotals, SortOrder, filter_range, sort_summaries, summarize};
use crate::core::upsert::{sort_records, upsert_day};
use crate::errors::AppResult;
use crate::models::day_entry::DayEntry;
use crate::models::day_summary::DailySummary;
use crate::models::driver::DriverRoster;
use crate::models::record::Record;
use crate::store::TableStore;
use chrono::NaiveDate;

/// Filtered, ordered summary plus its headline totals.
#[derive(Debug, Clone)]
pub struct Report {
    pub rows: Vec<DailySummary>,
    pub totals: RangeTotals,
    pub load: LoadReport,
}

/// High-level operations of the ledger: every call reads the whole table,
/// and `record_day` rewrites it.
pub struct Ledger<S: TableStore> {
    store: S,
    roster: DriverRoster,
    policy: CoercionPolicy,
}

impl<S: TableStore> Ledger<S> {
    pub fn new(store: S, roster: DriverRoster, policy: CoercionPolicy) -> Self {
        Self {
            store,
            roster,
            policy,
        }
    }

    pub fn roster(&self) -> &DriverRoster {
        &self.roster
    }

    pub fn policy(&self) -> CoercionPolicy {
        self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load and decode every record, sorted in canonical order.
    pub fn load(&mut self) -> AppResult<(Vec<Record>, LoadReport)> {
        let grid = self.store.load_table()?;
        let (mut records, report) = decode_table(&grid, self.policy)?;
        sort_records(&mut records, &self.roster);
        Ok((records, report))
    }

    /// Upsert one day and write the whole table back. Nothing is written if
    /// loading fails.
    pub fn record_day(&mut self, entry: &DayEntry) -> AppResult<(Vec<Record>, LoadReport)> {
        let (table, report) = self.load()?;
        let next = upsert_day(&table, entry, &self.roster);
        self.store.replace_table(&encode_table(&next))?;
        Ok((next, report))
    }

    /// Every daily summary, ascending by date.
    pub fn summary(&mut self) -> AppResult<Vec<DailySummary>> {
        let (table, _) = self.load()?;
        Ok(summarize(&table, &self.roster))
    }

    pub fn report(
        &mut self,
        bounds: Option<(NaiveDate, NaiveDate)>,
        order: SortOrder,
    ) -> AppResult<Report> {
        let (table, load) = self.load()?;
        let all = summarize(&table, &self.roster);

        let mut rows = match bounds {
            Some((from, to)) => filter_range(&all, from, to),
            None => all,
        };
        sort_summaries(&mut rows, order);

        let totals = RangeTotals::from_summaries(&rows, &self.roster);
        Ok(Report { rows, totals, load })
    }
}
