#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated HOME + database for one test.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn home(&self) -> &Path {
        self.dir.path()
    }

    pub fn db(&self) -> String {
        self.path("habitlog_test.sqlite").to_string_lossy().to_string()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Binary with HOME pointed at the temp dir and no ambient API key.
    pub fn hl(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("habitlog");
        cmd.env("HOME", self.home())
            .env_remove("HABITLOG_GEMINI_API_KEY")
            .env_remove("HABITLOG_TESSERACT")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run one interactive session fed with `script` on stdin.
    pub fn session(&self, script: &str) -> assert_cmd::assert::Assert {
        self.hl()
            .args(["--db", &self.db(), "session"])
            .write_stdin(script)
            .assert()
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn time(s: &str) -> chrono::NaiveTime {
    chrono::NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
