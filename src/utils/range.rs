//! Parse `--range` expressions into inclusive date bounds.
//!
//! Supported:
//! - `YYYY`
//! - `YYYY-MM`
//! - `YYYY-MM-DD`
//! - `START:END` with both sides in the same one of the formats above
//! - `all` (no bounds)

use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::NaiveDate;

pub type Bounds = (NaiveDate, NaiveDate);

pub fn parse_optional_range(r: Option<&str>) -> AppResult<Option<Bounds>> {
    match r {
        None => Ok(None),
        Some(s) if s.trim().eq_ignore_ascii_case("all") => Ok(None),
        Some(s) => parse_range(s).map(Some),
    }
}

pub fn parse_range(r: &str) -> AppResult<Bounds> {
    let r = r.trim();

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(invalid(r, "start and end must have the same format"));
        }

        let (from, _) = period_bounds(start).ok_or_else(|| invalid(r, "invalid start"))?;
        let (_, to) = period_bounds(end).ok_or_else(|| invalid(r, "invalid end"))?;
        return Ok((from, to));
    }

    period_bounds(r).ok_or_else(|| invalid(r, "expected YYYY, YYYY-MM or YYYY-MM-DD"))
}

/// First and last day of a single year, month or day.
fn period_bounds(p: &str) -> Option<Bounds> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        // YYYY-MM
        7 => {
            let (ys, ms) = p.split_once('-')?;
            let y: i32 = ys.parse().ok()?;
            let m: u32 = ms.parse().ok()?;
            let last = month_last_day(y, m)?;
            Some((
                NaiveDate::from_ymd_opt(y, m, 1)?,
                NaiveDate::from_ymd_opt(y, m, last)?,
            ))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").ok()?;
            Some((d, d))
        }
        _ => None,
    }
}

fn invalid(r: &str, why: &str) -> AppError {
    AppError::InvalidRange(format!("'{r}': {why}"))
}
