mod common;
use common::{grid, setup_test_store, ymd};

use std::fs;
use std::path::Path;
use std::time::Duration;
use taxiledger::cli::commands::add::build_entry;
use taxiledger::core::Ledger;
use taxiledger::core::coerce::{CoercionPolicy, FieldError, LoadReport, parse_amount, parse_date};
use taxiledger::core::sheet::{HEADER, decode_table, encode_table, format_amount};
use taxiledger::errors::AppError;
use taxiledger::models::day_entry::DayEntry;
use taxiledger::models::driver::{Driver, DriverRoster};
use taxiledger::models::record::{Record, RecordDate};
use taxiledger::store::{
    CachedStore, CsvSheetStore, MemoryStore, SqliteSheetStore, StoreKind, TableStore, open_store,
};

// ---------------------------
// Field parsing
// ---------------------------

#[test]
fn test_parse_amount_rules() {
    assert_eq!(parse_amount("PRODUCIDO", ""), Ok(0.0));
    assert_eq!(parse_amount("PRODUCIDO", "  "), Ok(0.0));
    assert_eq!(parse_amount("PRODUCIDO", "50000"), Ok(50000.0));
    assert_eq!(parse_amount("PRODUCIDO", " 12.5 "), Ok(12.5));
    assert!(matches!(
        parse_amount("PRODUCIDO", "abc"),
        Err(FieldError::NotANumber { .. })
    ));
    assert!(matches!(
        parse_amount("GASTOS", "-5"),
        Err(FieldError::Negative { .. })
    ));
    assert!(matches!(
        parse_amount("GASTOS", "inf"),
        Err(FieldError::NotANumber { .. })
    ));
    assert_eq!(format_amount(parse_amount("GASTOS", "-0").unwrap()), "0");
}

#[test]
fn test_parse_date_formats() {
    assert_eq!(parse_date("2024-05-01"), Ok(ymd(2024, 5, 1)));
    assert_eq!(parse_date(" 2024/05/01 "), Ok(ymd(2024, 5, 1)));
    assert_eq!(parse_date("01/05/2024"), Ok(ymd(2024, 5, 1)));
    assert_eq!(parse_date("2024-05-01 08:30:00"), Ok(ymd(2024, 5, 1)));
    assert!(parse_date("2024-13-01").is_err());
    assert!(parse_date("").is_err());
}

// ---------------------------
// Decoding / encoding
// ---------------------------

#[test]
fn test_decode_matches_columns_by_header_name() {
    let g = grid(&[
        &["conductor", " Gastos ", "EXTRA", "FECHA", "PRODUCIDO", "OBSERVACION"],
        &["jorge", "10000", "x", "2024-05-01", "50000", "full tank"],
    ]);

    let (records, report) = decode_table(&g, CoercionPolicy::Lenient).unwrap();

    assert!(report.is_clean());
    assert_eq!(
        records,
        vec![Record::new(ymd(2024, 5, 1), "JORGE", 50000.0, "full tank", 10000.0)]
    );
}

#[test]
fn test_decode_missing_column_reads_as_blank() {
    let g = grid(&[
        &["FECHA", "PRODUCIDO", "CONDUCTOR"],
        &["2024-05-01", "50000", "ERIK"],
    ]);

    let (records, _) = decode_table(&g, CoercionPolicy::Lenient).unwrap();

    assert_eq!(records[0].expense, 0.0);
    assert_eq!(records[0].note, "");
}

#[test]
fn test_decode_skips_blank_rows_and_counts_them() {
    let g = grid(&[
        &HEADER,
        &["", "", "", "", ""],
        &["2024-05-01", "1", "JORGE", "", ""],
        &[" ", "", "", "  ", ""],
    ]);

    let (records, report) = decode_table(&g, CoercionPolicy::Lenient).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(report.blank_rows, 2);
}

#[test]
fn test_decode_empty_grid() {
    let (records, report) = decode_table(&[], CoercionPolicy::Strict).unwrap();
    assert!(records.is_empty());
    assert!(report.is_clean());
}

#[test]
fn test_lenient_policy_defaults_bad_fields() {
    let g = grid(&[
        &HEADER,
        &["someday", "lots", "JORGE", "", "-3"],
    ]);

    let (records, report) = decode_table(&g, CoercionPolicy::Lenient).unwrap();

    assert_eq!(records[0].date, RecordDate::Missing("someday".into()));
    assert_eq!(records[0].produced, 0.0);
    assert_eq!(records[0].expense, 0.0);
    assert_eq!(report.coerced.len(), 3);
}

#[test]
fn test_strict_policy_rejects_first_bad_field() {
    let g = grid(&[
        &HEADER,
        &["2024-05-01", "lots", "JORGE", "", ""],
    ]);

    let err = decode_table(&g, CoercionPolicy::Strict).unwrap_err();
    assert_eq!(
        err,
        FieldError::NotANumber {
            column: "PRODUCIDO",
            value: "lots".into()
        }
    );
}

#[test]
fn test_encode_writes_header_and_plain_amounts() {
    let records = vec![
        Record::new(ymd(2024, 5, 1), "JORGE", 50000.0, "full tank", 10000.0),
        Record {
            date: RecordDate::Missing("ayer".into()),
            driver: Driver::new("erik"),
            produced: 12.5,
            note: String::new(),
            expense: 0.0,
        },
    ];

    let g = encode_table(&records);

    assert_eq!(g[0], HEADER.map(String::from).to_vec());
    assert_eq!(g[1], vec!["2024-05-01", "50000", "JORGE", "full tank", "10000"]);
    assert_eq!(g[2], vec!["ayer", "12.5", "ERIK", "", "0"]);
}

// ---------------------------
// Backends
// ---------------------------

#[test]
fn test_store_kind_from_extension() {
    assert_eq!(StoreKind::from_path(Path::new("a.csv")), StoreKind::Csv);
    assert_eq!(StoreKind::from_path(Path::new("a.SQLITE")), StoreKind::Sqlite);
    assert_eq!(StoreKind::from_path(Path::new("a.db")), StoreKind::Sqlite);
    assert_eq!(StoreKind::from_path(Path::new("ledger")), StoreKind::Csv);
}

#[test]
fn test_csv_store_missing_file_is_unavailable() {
    let path = setup_test_store("csv_missing", "csv");
    let mut store = CsvSheetStore::new(Path::new(&path));

    let err = store.load_table().unwrap_err();
    assert!(matches!(err, AppError::StoreUnavailable { .. }));
}

#[test]
fn test_csv_store_initialize_and_replace() {
    let path = setup_test_store("csv_replace", "csv");
    let mut store = CsvSheetStore::new(Path::new(&path));

    assert!(store.initialize().unwrap());
    assert!(!store.initialize().unwrap());
    assert_eq!(store.load_table().unwrap(), grid(&[&HEADER]));

    let rows = grid(&[
        &HEADER,
        &["2024-05-01", "50000", "JORGE", "notes, with comma", "10000"],
    ]);
    store.replace_table(&rows).unwrap();

    assert_eq!(store.load_table().unwrap(), rows);
    assert!(!Path::new(&format!("{}.tmp", path)).exists());

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("FECHA,PRODUCIDO,CONDUCTOR,OBSERVACION,GASTOS"));
}

#[test]
fn test_sqlite_store_initialize_and_replace() {
    let path = setup_test_store("sqlite_replace", "sqlite");
    let mut store = SqliteSheetStore::new(Path::new(&path));

    assert!(matches!(
        store.load_table(),
        Err(AppError::StoreUnavailable { .. })
    ));

    assert!(store.initialize().unwrap());
    assert_eq!(store.load_table().unwrap(), grid(&[&HEADER]));

    // columns in another order are mapped by name
    let rows = grid(&[
        &["CONDUCTOR", "FECHA", "PRODUCIDO", "GASTOS", "OBSERVACION"],
        &["JORGE", "2024-05-01", "50000", "10000", "full tank"],
        &["ERIK", "2024-05-01", "30000", "0", ""],
    ]);
    store.replace_table(&rows).unwrap();

    let loaded = store.load_table().unwrap();
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded[1], vec!["2024-05-01", "50000", "JORGE", "full tank", "10000"]);
    assert_eq!(loaded[2], vec!["2024-05-01", "30000", "ERIK", "", "0"]);
}

#[test]
fn test_memory_store_initialize_sets_header() {
    let mut store = MemoryStore::new();
    assert!(store.initialize().unwrap());
    assert!(!store.initialize().unwrap());
    assert_eq!(store.rows(), &grid(&[&HEADER]));
}

#[test]
fn test_cache_serves_reads_until_write() {
    let mut store = CachedStore::new(MemoryStore::with_rows(grid(&[&HEADER])), Duration::from_secs(60));

    store.load_table().unwrap();
    store.load_table().unwrap();
    assert_eq!(store.inner().loads, 1);

    store.replace_table(&grid(&[&HEADER])).unwrap();
    store.load_table().unwrap();
    assert_eq!(store.inner().loads, 2);
    assert_eq!(store.inner().writes, 1);
}

#[test]
fn test_cache_expires_after_ttl() {
    let mut store = CachedStore::new(MemoryStore::with_rows(grid(&[&HEADER])), Duration::from_millis(20));

    store.load_table().unwrap();
    store.load_table().unwrap();
    assert_eq!(store.inner().loads, 1);

    std::thread::sleep(Duration::from_millis(60));

    store.load_table().unwrap();
    assert_eq!(store.inner().loads, 2);
}

#[test]
fn test_cache_with_zero_ttl_always_reads_through() {
    let mut store = CachedStore::new(MemoryStore::with_rows(grid(&[&HEADER])), Duration::ZERO);

    store.load_table().unwrap();
    store.load_table().unwrap();
    assert_eq!(store.into_inner().loads, 2);
}

#[test]
fn test_open_store_picks_backend_by_extension() {
    let path = setup_test_store("open_store", "db");
    let mut store = open_store(Path::new(&path));

    assert!(store.initialize().unwrap());
    assert!(Path::new(&path).exists());
    assert_eq!(store.load_table().unwrap(), grid(&[&HEADER]));
}

// ---------------------------
// Ledger over a store
// ---------------------------

fn entry() -> DayEntry {
    DayEntry::new(ymd(2024, 5, 1))
        .with_amount("JORGE", 50000.0)
        .with_amount("ERIK", 30000.0)
        .with_expense(10000.0)
        .with_note("full tank")
}

#[test]
fn test_ledger_record_day_writes_whole_table() {
    let mut ledger = Ledger::new(
        MemoryStore::with_rows(grid(&[&HEADER])),
        DriverRoster::default(),
        CoercionPolicy::Lenient,
    );

    ledger.record_day(&entry()).unwrap();

    assert_eq!(
        ledger.store().rows(),
        &grid(&[
            &HEADER,
            &["2024-05-01", "50000", "JORGE", "full tank", "10000"],
            &["2024-05-01", "30000", "ERIK", "", "0"],
        ])
    );

    let summary = ledger.summary().unwrap();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].net, 70000.0);
}

#[test]
fn test_unreachable_store_fails_without_writing() {
    let mut ledger = Ledger::new(
        MemoryStore::unreachable(),
        DriverRoster::default(),
        CoercionPolicy::Lenient,
    );

    assert!(matches!(
        ledger.record_day(&entry()),
        Err(AppError::StoreUnavailable { .. })
    ));
    assert!(matches!(
        ledger.summary(),
        Err(AppError::StoreUnavailable { .. })
    ));
    assert_eq!(ledger.store().writes, 0);
}

#[test]
fn test_strict_ledger_refuses_to_rewrite_dirty_sheet() {
    let mut ledger = Ledger::new(
        MemoryStore::with_rows(grid(&[&HEADER, &["2024-05-01", "oops", "JORGE", "", ""]])),
        DriverRoster::default(),
        CoercionPolicy::Strict,
    );

    assert!(matches!(
        ledger.record_day(&entry()),
        Err(AppError::Validation(_))
    ));
    assert_eq!(ledger.store().writes, 0);
}

#[test]
fn test_ledger_report_filters_and_reports_coercions() {
    let mut ledger = Ledger::new(
        MemoryStore::with_rows(grid(&[
            &HEADER,
            &["2024-04-30", "10", "JORGE", "", ""],
            &["2024-05-01", "20", "JORGE", "", "5"],
            &["2024-05-02", "x", "ERIK", "", ""],
        ])),
        DriverRoster::default(),
        CoercionPolicy::Lenient,
    );

    let report = ledger
        .report(
            Some((ymd(2024, 5, 1), ymd(2024, 5, 31))),
            taxiledger::core::summary::SortOrder::Descending,
        )
        .unwrap();

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].date, ymd(2024, 5, 2));
    assert_eq!(report.totals.total_produced, 20.0);
    assert_eq!(report.totals.net, 15.0);
    assert_eq!(report.load.coerced.len(), 1);
}

// ---------------------------
// CLI input → DayEntry
// ---------------------------

fn args(pairs: &[&str]) -> Vec<String> {
    pairs.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_build_entry_defaults_missing_drivers_to_zero() {
    let mut report = LoadReport::default();
    let entry = build_entry(
        ymd(2024, 5, 1),
        &args(&["jorge=50000"]),
        Some("10000"),
        "full tank",
        &DriverRoster::default(),
        CoercionPolicy::Lenient,
        &mut report,
    )
    .unwrap();

    assert_eq!(entry.amount_for(&Driver::new("JORGE")), Some(50000.0));
    assert_eq!(entry.amount_for(&Driver::new("ERIK")), Some(0.0));
    assert_eq!(entry.expense, 10000.0);
    assert_eq!(entry.note, "full tank");
    assert!(report.is_clean());
}

#[test]
fn test_build_entry_rejects_unknown_driver_and_bad_pair() {
    let roster = DriverRoster::default();
    let mut report = LoadReport::default();

    let unknown = build_entry(
        ymd(2024, 5, 1),
        &args(&["PEDRO=1"]),
        None,
        "",
        &roster,
        CoercionPolicy::Lenient,
        &mut report,
    );
    assert!(matches!(unknown, Err(AppError::UnknownDriver(name)) if name == "PEDRO"));

    let malformed = build_entry(
        ymd(2024, 5, 1),
        &args(&["JORGE:1"]),
        None,
        "",
        &roster,
        CoercionPolicy::Lenient,
        &mut report,
    );
    assert!(matches!(malformed, Err(AppError::InvalidAmount(_))));
}

#[test]
fn test_build_entry_bad_amount_follows_policy() {
    let roster = DriverRoster::default();

    let mut report = LoadReport::default();
    let lenient = build_entry(
        ymd(2024, 5, 1),
        &args(&["ERIK=mucho"]),
        None,
        "",
        &roster,
        CoercionPolicy::Lenient,
        &mut report,
    )
    .unwrap();
    assert_eq!(lenient.amount_for(&Driver::new("ERIK")), Some(0.0));
    assert_eq!(report.coerced.len(), 1);

    let strict = build_entry(
        ymd(2024, 5, 1),
        &args(&["ERIK=mucho"]),
        None,
        "",
        &roster,
        CoercionPolicy::Strict,
        &mut LoadReport::default(),
    );
    assert!(matches!(strict, Err(AppError::Validation(_))));
}
