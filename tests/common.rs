#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary with HOME/APPDATA pointed at a private temp dir, so a real user
/// configuration never leaks into the tests.
pub fn tl() -> Command {
    let home = env::temp_dir().join("taxiledger_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("taxiledger");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique store path inside the system temp dir and remove any existing file
pub fn setup_test_store(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_taxiledger.{}", name, ext));
    let store = path.to_string_lossy().to_string();
    fs::remove_file(&store).ok();
    store
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a store and record two days through the CLI
pub fn init_store_with_data(store: &str) {
    tl().args(["--store", store, "--test", "init"])
        .assert()
        .success();

    tl().args([
        "--store",
        store,
        "add",
        "2024-05-01",
        "--amount",
        "JORGE=50000",
        "--amount",
        "ERIK=30000",
        "--expense",
        "10000",
        "--note",
        "full tank",
    ])
    .assert()
    .success();

    tl().args([
        "--store",
        store,
        "add",
        "2024-05-02",
        "-a",
        "jorge=40000",
        "-a",
        "erik=45000",
    ])
    .assert()
    .success();
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}
