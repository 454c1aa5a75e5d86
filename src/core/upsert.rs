use crate::models::day_entry::DayEntry;
use crate::models::driver::DriverRoster;
use crate::models::record::{Record, RecordDate};

/// Merge one day's input into the table and return the new table.
///
/// For each roster driver with an amount in `entry`, the (date, driver) row is
/// overwritten or appended. Only the primary driver's row carries the day's
/// expense and note; every other driver's row gets `0` and `""`. An entry with
/// an expense or note but no primary amount still writes the primary row,
/// keeping its stored output (`0` for a new row). Duplicate rows for a
/// touched key collapse into the first one.
pub fn upsert_day(table: &[Record], entry: &DayEntry, roster: &DriverRoster) -> Vec<Record> {
    let mut out = table.to_vec();
    let day = RecordDate::Day(entry.date);

    let carries_day_fields = entry.expense != 0.0 || !entry.note.is_empty();

    for driver in roster.iter() {
        let produced = entry.amount_for(driver);
        if produced.is_none() && !(roster.is_primary(driver) && carries_day_fields) {
            continue;
        }

        let (note, expense) = if roster.is_primary(driver) {
            (entry.note.clone(), entry.expense)
        } else {
            (String::new(), 0.0)
        };

        let hits: Vec<usize> = out
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_key(&day, driver))
            .map(|(i, _)| i)
            .collect();

        match hits.split_first() {
            Some((&first, dupes)) => {
                let rec = &mut out[first];
                if let Some(v) = produced {
                    rec.produced = v;
                }
                rec.note = note;
                rec.expense = expense;

                for &i in dupes.iter().rev() {
                    out.remove(i);
                }
            }
            None => out.push(Record {
                date: day.clone(),
                driver: driver.clone(),
                produced: produced.unwrap_or(0.0),
                note,
                expense,
            }),
        }
    }

    sort_records(&mut out, roster);
    out
}

/// Sort by date (no-date rows last), then by canonical driver order.
pub fn sort_records(records: &mut [Record], roster: &DriverRoster) {
    records.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| roster.compare(&a.driver, &b.driver))
    });
}
