use crate::models::day_summary::DailySummary;
use crate::models::driver::{Driver, DriverRoster};
use crate::models::record::Record;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Pivot the table into one summary per date, ascending.
///
/// Rows without a usable date are ignored. Duplicate driver rows for a date
/// are summed; the day's expense is the largest one seen and the note the
/// lexicographically largest non-empty one.
pub fn summarize(table: &[Record], roster: &DriverRoster) -> Vec<DailySummary> {
    let mut groups: BTreeMap<NaiveDate, Vec<&Record>> = BTreeMap::new();

    for rec in table {
        if let Some(day) = rec.date.day() {
            groups.entry(day).or_default().push(rec);
        }
    }

    groups
        .into_iter()
        .map(|(date, recs)| summarize_day(date, &recs, roster))
        .collect()
}

fn summarize_day(date: NaiveDate, recs: &[&Record], roster: &DriverRoster) -> DailySummary {
    let produced: Vec<(Driver, f64)> = roster
        .iter()
        .map(|d| {
            let sum: f64 = recs
                .iter()
                .filter(|r| &r.driver == d)
                .map(|r| r.produced)
                .sum();
            (d.clone(), sum)
        })
        .collect();

    let expense = recs.iter().map(|r| r.expense).fold(0.0, f64::max);

    let note = recs
        .iter()
        .map(|r| r.note.as_str())
        .filter(|n| !n.is_empty())
        .max()
        .unwrap_or_default()
        .to_string();

    let total_produced: f64 = produced.iter().map(|(_, v)| v).sum();

    DailySummary {
        date,
        produced,
        expense,
        note,
        total_produced,
        net: total_produced - expense,
    }
}

/// Inclusive date filter. A reversed range yields nothing.
pub fn filter_range(summaries: &[DailySummary], from: NaiveDate, to: NaiveDate) -> Vec<DailySummary> {
    if from > to {
        return Vec::new();
    }

    summaries
        .iter()
        .filter(|s| s.date >= from && s.date <= to)
        .cloned()
        .collect()
}

pub fn sort_summaries(summaries: &mut [DailySummary], order: SortOrder) {
    match order {
        SortOrder::Ascending => summaries.sort_by_key(|s| s.date),
        SortOrder::Descending => summaries.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}

/// Headline totals over a (usually filtered) summary.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeTotals {
    pub per_driver: Vec<(Driver, f64)>,
    pub expense: f64,
    pub total_produced: f64,
    pub net: f64,
    pub days: usize,
}

impl RangeTotals {
    pub fn from_summaries(summaries: &[DailySummary], roster: &DriverRoster) -> Self {
        let per_driver = roster
            .iter()
            .map(|d| {
                let sum: f64 = summaries.iter().map(|s| s.amount_for(d.as_str())).sum();
                (d.clone(), sum)
            })
            .collect();

        Self {
            per_driver,
            expense: summaries.iter().map(|s| s.expense).sum(),
            total_produced: summaries.iter().map(|s| s.total_produced).sum(),
            net: summaries.iter().map(|s| s.net).sum(),
            days: summaries.len(),
        }
    }
}
