mod common;

use common::{Sandbox, seed_sample};
use predicates::prelude::*;
use std::fs;
use worktimer::store::Backend;

#[test]
fn test_export_csv_header_and_rows() {
    let sb = Sandbox::new();
    seed_sample(sb.data.path(), Backend::Sqlite);
    let out = sb.data.path().join("out.csv");

    sb.cmd(Backend::Sqlite)
        .args(["export", "--file", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 session(s)"));

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Date,Start Time,End Time,Duration");
    assert_eq!(lines[1], "18.10.2026,14:00:00,14:45:00,00:45:00");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_export_empty_store_writes_header_only() {
    let sb = Sandbox::new();
    let out = sb.data.path().join("empty.csv");

    sb.cmd(Backend::Json)
        .args(["export", "--file", out.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&out).unwrap().trim_end(),
        "Date,Start Time,End Time,Duration"
    );
}

#[test]
fn test_export_json_format() {
    let sb = Sandbox::new();
    seed_sample(sb.data.path(), Backend::Json);
    let out = sb.data.path().join("out.json");

    sb.cmd(Backend::Json)
        .args(["export", "--format", "json", "--file", out.to_str().unwrap()])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2]["duration"], "00:20:00");
}

#[test]
fn test_declined_overwrite_is_a_silent_cancel() {
    let sb = Sandbox::new();
    seed_sample(sb.data.path(), Backend::Sqlite);
    let out = sb.data.path().join("keep.csv");
    fs::write(&out, "precious").unwrap();

    sb.cmd(Backend::Sqlite)
        .args(["export", "--file", out.to_str().unwrap()])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Export cancelled."));

    assert_eq!(fs::read_to_string(&out).unwrap(), "precious");
}

#[test]
fn test_force_overwrites() {
    let sb = Sandbox::new();
    seed_sample(sb.data.path(), Backend::Sqlite);
    let out = sb.data.path().join("replace.csv");
    fs::write(&out, "old").unwrap();

    sb.cmd(Backend::Sqlite)
        .args(["export", "--file", out.to_str().unwrap(), "--force"])
        .assert()
        .success();

    assert!(
        fs::read_to_string(&out)
            .unwrap()
            .starts_with("Date,Start Time,End Time,Duration")
    );
}

#[test]
fn test_backup_copy_and_zip() {
    let sb = Sandbox::new();
    seed_sample(sb.data.path(), Backend::Sqlite);
    let plain = sb.home.path().join("bk/work_time.bak");

    sb.cmd(Backend::Sqlite)
        .args(["backup", "--file", plain.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created"));
    assert!(plain.exists());

    sb.cmd(Backend::Sqlite)
        .args(["backup", "--file", plain.to_str().unwrap(), "--compress"])
        .assert()
        .success();
    assert!(plain.with_extension("zip").exists());
}
