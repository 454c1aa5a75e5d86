use super::{open_ledger, warn_coerced};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::coerce::{CoercionPolicy, LoadReport, parse_date};
use crate::core::sheet::{COL_EXPENSE, COL_PRODUCED};
use crate::errors::{AppError, AppResult};
use crate::models::day_entry::DayEntry;
use crate::models::driver::DriverRoster;
use crate::ui::messages::{field, success};
use crate::utils::date;
use crate::utils::format_pesos;

/// Record or update one day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_arg,
        amounts,
        expense,
        note,
    } = cmd
    {
        let mut ledger = open_ledger(cfg)?;

        //
        // 1. Date (today if omitted). A date is the key, so it is never coerced.
        //
        let day = match date_arg {
            Some(raw) => parse_date(raw).map_err(|_| AppError::InvalidDate(raw.to_string()))?,
            None => date::today(),
        };

        //
        // 2. Build the day entry
        //
        let mut input_report = LoadReport::default();
        let entry = build_entry(
            day,
            amounts,
            expense.as_deref(),
            note.as_deref().unwrap_or(""),
            ledger.roster(),
            ledger.policy(),
            &mut input_report,
        )?;
        warn_coerced("input", &input_report);

        //
        // 3. Read-modify-write the whole table
        //
        let (_, load_report) = ledger.record_day(&entry)?;
        warn_coerced("stored", &load_report);

        //
        // 4. Confirmation
        //
        success("Day saved.");
        field("Fecha", date::label(entry.date, cfg.date_labels));
        for driver in ledger.roster().iter() {
            let v = entry.amount_for(driver).unwrap_or(0.0);
            field(driver, format_pesos(v, &cfg.currency_symbol));
        }
        field("Gastos", format_pesos(entry.expense, &cfg.currency_symbol));
        field(
            "Observación",
            if entry.note.is_empty() { "—" } else { entry.note.as_str() },
        );
    }

    Ok(())
}

/// Turn CLI arguments into a `DayEntry`.
///
/// Every roster driver gets an amount (0 unless given). `DRIVER=AMOUNT`
/// pairs naming a driver outside the roster are rejected; malformed amounts
/// follow the coercion policy.
pub fn build_entry(
    day: chrono::NaiveDate,
    amounts: &[String],
    expense: Option<&str>,
    note: &str,
    roster: &DriverRoster,
    policy: CoercionPolicy,
    report: &mut LoadReport,
) -> AppResult<DayEntry> {
    let mut entry = DayEntry::new(day).with_note(note);

    for driver in roster.iter() {
        entry = entry.with_amount(driver.as_str(), 0.0);
    }

    for pair in amounts {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| AppError::InvalidAmount(format!("expected DRIVER=AMOUNT, got '{pair}'")))?;

        let driver = roster
            .resolve(name)
            .ok_or_else(|| AppError::UnknownDriver(name.trim().to_string()))?;

        let produced = policy.amount(COL_PRODUCED, value, report)?;
        entry = entry.with_amount(driver.as_str(), produced);
    }

    if let Some(raw) = expense {
        entry = entry.with_expense(policy.amount(COL_EXPENSE, raw, report)?);
    }

    Ok(entry)
}
