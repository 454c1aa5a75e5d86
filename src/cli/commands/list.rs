use super::{open_ledger, warn_coerced};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Report;
use crate::core::sheet::{COL_DATE, COL_DRIVER, COL_EXPENSE, COL_NOTE, COL_PRODUCED};
use crate::core::summary::{RangeTotals, SortOrder};
use crate::errors::AppResult;
use crate::export::model::{COL_NET, COL_TOTAL};
use crate::models::driver::DriverRoster;
use crate::models::record::{Record, RecordDate};
use crate::ui::messages::{header, info};
use crate::utils::colors::{paint_net, placeholder};
use crate::utils::date;
use crate::utils::format_pesos;
use crate::utils::range::{Bounds, parse_optional_range};
use crate::utils::table::{Column, Table};

const NOTE_WIDTH: usize = 36;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        range,
        asc,
        records,
    } = cmd
    {
        let bounds = parse_optional_range(range.as_deref())?;
        let mut ledger = open_ledger(cfg)?;

        if *records {
            let (rows, report) = ledger.load()?;
            warn_coerced("stored", &report);
            print_records(&rows, bounds, cfg);
            return Ok(());
        }

        let order = if *asc {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        };
        let report = ledger.report(bounds, order)?;
        warn_coerced("stored", &report.load);

        if report.rows.is_empty() {
            info("No days recorded for the selected range.");
            return Ok(());
        }

        print_totals(&report.totals, ledger.roster(), cfg);
        print_summary(&report, ledger.roster(), cfg);
    }
    Ok(())
}

fn money(v: f64, cfg: &Config) -> String {
    format_pesos(v, &cfg.currency_symbol)
}

/// Headline figures above the table: per-driver totals, expenses, net.
fn print_totals(totals: &RangeTotals, roster: &DriverRoster, cfg: &Config) {
    header(format!("Totals ({} day(s))", totals.days));

    for (driver, v) in &totals.per_driver {
        println!("  {:<18} {}", format!("Total {driver}"), money(*v, cfg));
    }
    println!("  {:<18} {}", "Total Gastos", money(totals.expense, cfg));

    let net_label = format!(
        "Neto ({}-G)",
        roster
            .iter()
            .map(|d| d.as_str().chars().next().unwrap_or('?').to_string())
            .collect::<Vec<_>>()
            .join("+")
    );
    println!(
        "  {:<18} {}",
        net_label,
        paint_net(totals.net, &money(totals.net, cfg))
    );
}

fn print_summary(report: &Report, roster: &DriverRoster, cfg: &Config) {
    let mut columns = vec![Column::left(COL_DATE)];
    columns.extend(roster.iter().map(|d| Column::right(d.as_str())));
    columns.push(Column::right(COL_EXPENSE));
    columns.push(Column::right(COL_TOTAL));
    columns.push(Column::right(COL_NET));
    columns.push(Column::left(COL_NOTE).wrapped(NOTE_WIDTH));

    let mut table = Table::new(columns);

    for s in &report.rows {
        let mut row = vec![date::label(s.date, cfg.date_labels)];
        row.extend(s.produced.iter().map(|(_, v)| money(*v, cfg)));
        row.push(money(s.expense, cfg));
        row.push(money(s.total_produced, cfg));
        row.push(paint_net(s.net, &money(s.net, cfg)));
        row.push(placeholder(&s.note));
        table.add_row(row);
    }

    header("Daily summary");
    print!("{}", table.render());
}

fn print_records(rows: &[Record], bounds: Option<Bounds>, cfg: &Config) {
    let in_range = |d: &RecordDate| match (bounds, d.day()) {
        (None, _) => true,
        (Some((from, to)), Some(day)) => day >= from && day <= to,
        (Some(_), None) => false,
    };

    let mut table = Table::new(vec![
        Column::left(COL_DATE),
        Column::left(COL_DRIVER),
        Column::right(COL_PRODUCED),
        Column::right(COL_EXPENSE),
        Column::left(COL_NOTE).wrapped(NOTE_WIDTH),
    ]);

    let mut shown = 0;
    for r in rows.iter().filter(|r| in_range(&r.date)) {
        let date_cell = match &r.date {
            RecordDate::Day(d) => d.format("%Y-%m-%d").to_string(),
            RecordDate::Missing(raw) => format!("(no date: '{raw}')"),
        };
        table.add_row(vec![
            date_cell,
            r.driver.to_string(),
            money(r.produced, cfg),
            money(r.expense, cfg),
            placeholder(&r.note),
        ]);
        shown += 1;
    }

    if shown == 0 {
        info("No records stored for the selected range.");
        return;
    }

    header(format!("Stored records ({shown})"));
    print!("{}", table.render());
}
