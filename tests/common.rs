#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::Path;
use tempfile::TempDir;
use worktimer::models::session::SessionRecord;
use worktimer::store::{Backend, SessionStore, open_store};

/// Binary under test, isolated from the real home folder.
pub fn wt(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("worktimer");
    cmd.env("HOME", home).env_remove("EDITOR").env_remove("VISUAL");
    cmd
}

/// Home folder plus data folder for one test.
pub struct Sandbox {
    pub home: TempDir,
    pub data: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("home tempdir"),
            data: tempfile::tempdir().expect("data tempdir"),
        }
    }

    /// Command preset with `--dir <data>` and `--backend <backend>`.
    pub fn cmd(&self, backend: Backend) -> Command {
        let mut cmd = wt(self.home.path());
        cmd.args([
            "--dir",
            self.data.path().to_str().expect("utf-8 path"),
            "--backend",
            backend.as_str(),
        ]);
        cmd
    }

    pub fn store_file(&self, backend: Backend) -> std::path::PathBuf {
        backend.file_in(self.data.path())
    }
}

/// Write sessions straight through the library.
pub fn seed(dir: &Path, backend: Backend, rows: &[[&str; 4]]) {
    let mut store = open_store(backend, dir).expect("open store");
    for [date, start, end, duration] in rows {
        let record = SessionRecord::from_labels(date, start, end, duration).expect("valid row");
        store.append(&record).expect("append");
    }
}

/// Two days, three sessions: 18.10 (00:45:00) and 19.10 (00:10:00 + 00:20:00).
pub fn seed_sample(dir: &Path, backend: Backend) {
    seed(
        dir,
        backend,
        &[
            ["18.10.2026", "14:00:00", "14:45:00", "00:45:00"],
            ["19.10.2026", "09:00:00", "09:10:00", "00:10:00"],
            ["19.10.2026", "10:00:00", "10:20:00", "00:20:00"],
        ],
    );
}
