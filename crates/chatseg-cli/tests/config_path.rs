use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("chatseg")
        .env("CHATSEG_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("chatseg")
        .env("CHATSEG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    assert!(config_path.exists());

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("expand_thinking ="));
    assert!(contents.contains("[markdown]"));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(&config_path, "# existing config").unwrap();

    cargo_bin_cmd!("chatseg")
        .env("CHATSEG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_generate_prints_template() {
    cargo_bin_cmd!("chatseg")
        .args(["config", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("thinking_label = \"Thinking\""));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "pretty_json = ").unwrap();

    cargo_bin_cmd!("chatseg")
        .env("CHATSEG_HOME", dir.path())
        .arg("segment")
        .write_stdin("Hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("load config"));
}
