mod common;
use common::{init_store_with_data, setup_test_store, temp_out, tl};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_csv_all() {
    let store = setup_test_store("export_csv_all", "csv");
    init_store_with_data(&store);

    let out = temp_out("export_csv_all", "csv");

    tl().args(["--store", &store, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(
        lines,
        vec![
            "FECHA,JORGE,ERIK,GASTOS,TOTAL_PRODUCIDO,NETO,OBSERVACION",
            "2024-05-01,50000,30000,10000,80000,70000,full tank",
            "2024-05-02,40000,45000,0,85000,85000,",
        ]
    );
}

#[test]
fn test_export_json_range() {
    let store = setup_test_store("export_json_range", "csv");
    init_store_with_data(&store);

    let out = temp_out("export_json_range", "json");

    tl().args([
        "--store", &store, "export", "--format", "json", "--file", &out, "--range", "2024-05-01",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let json: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let days = json.as_array().expect("array of days");
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["date"], "2024-05-01");
    assert_eq!(days[0]["produced"][0]["driver"], "JORGE");
    assert_eq!(days[0]["produced"][0]["produced"], 50000.0);
    assert_eq!(days[0]["net"], 70000.0);
    assert_eq!(days[0]["note"], "full tank");
}

#[test]
fn test_export_xlsx_creates_workbook() {
    let store = setup_test_store("export_xlsx", "sqlite");
    init_store_with_data(&store);

    let out = temp_out("export_xlsx", "xlsx");

    tl().args(["--store", &store, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported xlsx");
    // xlsx files are zip archives
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let store = setup_test_store("export_empty", "csv");
    init_store_with_data(&store);

    let out = temp_out("export_empty", "csv");

    tl().args([
        "--store", &store, "export", "--format", "csv", "--file", &out, "--range", "2023",
    ])
    .assert()
    .success()
    .stdout(contains("No days found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let store = setup_test_store("export_relative", "csv");
    init_store_with_data(&store);

    tl().args(["--store", &store, "export", "--format", "csv", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_needs_force() {
    let store = setup_test_store("export_force", "csv");
    init_store_with_data(&store);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").expect("seed output");

    // no answer on stdin: the export is cancelled
    tl().args(["--store", &store, "export", "--format", "csv", "--file", &out])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("cancelled"));
    assert_eq!(fs::read_to_string(&out).expect("read output"), "old");

    tl().args([
        "--store", &store, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();
    assert!(fs::read_to_string(&out).expect("read output").starts_with("FECHA"));
}
