mod common;

use common::{Sandbox, seed_sample, wt};
use predicates::prelude::*;
use std::fs;
use worktimer::store::Backend;

#[test]
fn test_init_creates_config_and_store() {
    let sb = Sandbox::new();

    sb.cmd(Backend::Sqlite)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("initialization completed"));

    assert!(sb.store_file(Backend::Sqlite).exists());

    let conf = sb.home.path().join(".worktimer").join("worktimer.conf");
    let content = fs::read_to_string(conf).expect("config written");
    assert!(content.contains("backend: sqlite"));
    assert!(content.contains("reminder_interval: 3600"));
}

#[test]
fn test_init_in_test_mode_leaves_config_alone() {
    let sb = Sandbox::new();

    sb.cmd(Backend::Json)
        .args(["--test", "init"])
        .assert()
        .success();

    assert!(sb.store_file(Backend::Json).exists());
    assert!(
        !sb.home
            .path()
            .join(".worktimer")
            .join("worktimer.conf")
            .exists()
    );
}

#[test]
fn test_summary_on_empty_store() {
    let sb = Sandbox::new();

    sb.cmd(Backend::Sqlite)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions recorded yet."));
}

#[test]
fn test_summary_is_most_recent_first() {
    for backend in [Backend::Sqlite, Backend::Json] {
        let sb = Sandbox::new();
        seed_sample(sb.data.path(), backend);

        let out = sb.cmd(backend).arg("summary").assert().success();
        let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();

        let newer = stdout.find("19.10.2026").expect("19.10 row");
        let older = stdout.find("18.10.2026").expect("18.10 row");
        assert!(newer < older, "{backend:?}: {stdout}");
        assert!(stdout.contains("00:30:00"));
        assert!(stdout.contains("00:45:00"));
    }
}

#[test]
fn test_list_shows_insertion_order() {
    let sb = Sandbox::new();
    seed_sample(sb.data.path(), Backend::Sqlite);

    let out = sb.cmd(Backend::Sqlite).arg("list").assert().success();
    let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();

    let first = stdout.find("14:00:00").expect("first session");
    let last = stdout.find("10:00:00").expect("last session");
    assert!(first < last);
    assert!(stdout.contains("Start Time"));
}

#[test]
fn test_run_records_a_session() {
    let sb = Sandbox::new();

    sb.cmd(Backend::Json)
        .args(["run", "--remind", "0"])
        .write_stdin("start\npause\ncontinue\nstop\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session saved"))
        .stdout(predicate::str::contains("Reminders disabled"));

    let doc = fs::read_to_string(sb.store_file(Backend::Json)).expect("json store");
    let value: serde_json::Value = serde_json::from_str(&doc).expect("valid json");
    let days = value.as_array().expect("array of days");
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["sessions"].as_array().map(|s| s.len()), Some(1));
    assert!(days[0].get("totalDuration").is_some());
}

#[test]
fn test_run_shows_short_reminder_interval() {
    let sb = Sandbox::new();

    sb.cmd(Backend::Json)
        .args(["run", "--remind", "5"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reminder every 00:00:05"));
}

#[test]
fn test_run_refuses_to_quit_with_open_session() {
    let sb = Sandbox::new();

    sb.cmd(Backend::Sqlite)
        .arg("run")
        .write_stdin("start\nquit\nquit!\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A session is still open"));

    sb.cmd(Backend::Sqlite)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions recorded yet."));
}

#[test]
fn test_malformed_json_is_reported_and_kept() {
    let sb = Sandbox::new();
    let file = sb.store_file(Backend::Json);
    fs::write(&file, "{ not json").unwrap();

    sb.cmd(Backend::Json)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "{ not json");
}

#[test]
fn test_missing_data_folder_is_storage_unavailable() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("nowhere");

    wt(home.path())
        .args(["--dir", missing.to_str().unwrap(), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage unavailable"));
}

#[test]
fn test_relocate_updates_config() {
    let sb = Sandbox::new();
    let target = tempfile::tempdir().unwrap();

    sb.cmd(Backend::Sqlite).arg("init").assert().success();
    seed_sample(sb.data.path(), Backend::Sqlite);

    sb.cmd(Backend::Sqlite)
        .args(["relocate", target.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Store relocated"));

    assert!(target.path().join("work_time.db").exists());

    let conf = fs::read_to_string(sb.home.path().join(".worktimer/worktimer.conf")).unwrap();
    let canonical = target.path().canonicalize().unwrap();
    assert!(conf.contains(canonical.to_str().unwrap()));

    // Without --dir the new, empty store is used; old sessions stay behind.
    wt(sb.home.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions recorded yet."));
}

#[test]
fn test_relocate_creates_missing_folder() {
    let sb = Sandbox::new();
    let missing = sb.data.path().join("nope/deeper");

    sb.cmd(Backend::Json)
        .args(["--test", "relocate", missing.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Store relocated"));

    assert!(missing.join("work_time.json").exists());
}

#[test]
fn test_relocate_to_uncreatable_folder_fails() {
    let sb = Sandbox::new();
    let blocker = sb.data.path().join("plain.txt");
    fs::write(&blocker, "x").unwrap();

    sb.cmd(Backend::Json)
        .args(["--test", "relocate", blocker.join("sub").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage unavailable"));
}

#[test]
fn test_relocate_keeps_backend_override_out_of_config() {
    let sb = Sandbox::new();
    let target = tempfile::tempdir().unwrap();

    sb.cmd(Backend::Sqlite).arg("init").assert().success();

    sb.cmd(Backend::Json)
        .args(["relocate", target.path().to_str().unwrap()])
        .assert()
        .success();

    let conf = fs::read_to_string(sb.home.path().join(".worktimer/worktimer.conf")).unwrap();
    assert!(conf.contains("backend: sqlite"));
    assert!(conf.contains(target.path().canonicalize().unwrap().to_str().unwrap()));
}

#[test]
fn test_config_check_and_migrate() {
    let sb = Sandbox::new();
    let conf_dir = sb.home.path().join(".worktimer");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(conf_dir.join("worktimer.conf"), "backend: json\n").unwrap();

    wt(sb.home.path())
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data_dir, reminder_interval"));

    wt(sb.home.path())
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added fields"));

    wt(sb.home.path())
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file is complete."));
}

#[test]
fn test_bad_config_file_is_an_error() {
    let home = tempfile::tempdir().unwrap();
    let conf_dir = home.path().join(".worktimer");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(conf_dir.join("worktimer.conf"), "backend: [oops\n").unwrap();

    wt(home.path())
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_db_commands_need_sqlite() {
    let sb = Sandbox::new();

    sb.cmd(Backend::Json)
        .args(["db", "--info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs the sqlite backend"));

    seed_sample(sb.data.path(), Backend::Sqlite);
    sb.cmd(Backend::Sqlite)
        .args(["db", "--info", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total sessions:"))
        .stdout(predicate::str::contains("Integrity check passed."))
        .stdout(predicate::str::contains("Vacuum completed."));
}

#[test]
fn test_log_lists_saved_sessions() {
    let sb = Sandbox::new();

    sb.cmd(Backend::Sqlite)
        .arg("run")
        .write_stdin("start\nstop\nquit\n")
        .assert()
        .success();

    sb.cmd(Backend::Sqlite)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("session_saved"));
}
