use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::TestEnv;

#[test]
fn test_init_writes_config_file() {
    let env = TestEnv::new();

    env.hl()
        .args(["--db", &env.db(), "init"])
        .assert()
        .success()
        .stdout(contains("Database ready"));

    let conf = env.home().join(".habitlog").join("habitlog.conf");
    let content = fs::read_to_string(conf).expect("config written");
    assert!(content.contains("database:"));
    assert!(content.contains("gemini-2.5-flash"));
    assert!(content.contains("tesseract"));
}

#[test]
fn test_init_test_mode_skips_config_file() {
    let env = TestEnv::new();

    env.hl()
        .args(["--db", &env.db(), "--test", "init"])
        .assert()
        .success();

    assert!(!env.home().join(".habitlog").join("habitlog.conf").exists());
}

#[test]
fn test_config_print_masks_api_key() {
    let env = TestEnv::new();

    env.hl()
        .args(["config", "--print"])
        .env("HABITLOG_GEMINI_API_KEY", "secret-key-9876")
        .assert()
        .success()
        .stdout(contains("****9876"))
        .stdout(contains("secret-key").not());
}

#[test]
fn test_config_file_values_are_used() {
    let env = TestEnv::new();
    let dir = env.home().join(".habitlog");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(
        dir.join("habitlog.conf"),
        format!(
            "database: {}\ndefault_window: month\nocr:\n  command: my-ocr\n",
            env.db()
        ),
    )
    .expect("write config");

    env.hl()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_window: month"))
        .stdout(contains("command: my-ocr"))
        .stdout(contains("language: eng"));
}

#[test]
fn test_broken_config_file_is_an_error() {
    let env = TestEnv::new();
    let dir = env.home().join(".habitlog");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(dir.join("habitlog.conf"), "database: [unterminated").expect("write config");

    env.hl()
        .args(["config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_config_without_database_uses_default_path() {
    let env = TestEnv::new();
    let dir = env.home().join(".habitlog");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(dir.join("habitlog.conf"), "default_window: month\n").expect("write config");

    env.hl()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("habitlog.sqlite"))
        .stdout(contains("default_window: month"));

    env.hl()
        .arg("session")
        .write_stdin("info\n")
        .assert()
        .success()
        .stdout(contains("Total entries:"));

    assert!(dir.join("habitlog.sqlite").exists());
}

#[test]
fn test_relative_db_resolves_like_init() {
    let env = TestEnv::new();
    let expected = env.home().join(".habitlog").join("relative.sqlite");

    env.hl()
        .args(["--db", "relative.sqlite", "--test", "init"])
        .assert()
        .success()
        .stdout(contains(expected.to_string_lossy().to_string()));

    env.hl()
        .args(["--db", "relative.sqlite", "session"])
        .current_dir(env.home())
        .write_stdin("info\n")
        .assert()
        .success()
        .stdout(contains(expected.to_string_lossy().to_string()));

    assert!(expected.exists());
    assert!(!env.path("relative.sqlite").exists());
}
