use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp home
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".medichat").join("config.json")
}

const BINARY_NAME: &str = "medichat";

fn medichat(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
/// Help command should list the subcommands.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("start"))
        .stdout(contains("snapshot"))
        .stdout(contains("init-config"));
}

#[test]
/// Snapshot prints the attendant navigation and nothing manager-only.
fn snapshot_shows_attendant_navigation() {
    let home = temp_home();
    medichat(&home)
        .args(["snapshot", "--role", "attendant"])
        .assert()
        .success()
        .stdout(contains("My Dashboard"))
        .stdout(contains("Schedule"))
        .stdout(contains("Patients"))
        .stdout(contains("PATIENT QUEUE"))
        .stdout(contains("Performance").not());
}

#[test]
/// Manager snapshot on a placeholder tab.
fn snapshot_manager_team_tab() {
    let home = temp_home();
    medichat(&home)
        .args(["snapshot", "--role", "manager", "--tab", "team"])
        .assert()
        .success()
        .stdout(contains("Performance"))
        .stdout(contains("This section has no content yet"));
}

#[test]
/// Opening a chat renders the thread and the send control.
fn snapshot_with_open_chat() {
    let home = temp_home();
    medichat(&home)
        .args(["snapshot", "--open-chat", "2"])
        .assert()
        .success()
        .stdout(contains("Pedro Santos"))
        .stdout(contains("[Send]"));
}

#[test]
fn snapshot_rejects_unknown_patient() {
    let home = temp_home();
    medichat(&home)
        .args(["snapshot", "--open-chat", "99"])
        .assert()
        .failure()
        .stderr(contains("No patient with id '99'"));
}

#[test]
fn snapshot_rejects_tab_outside_role() {
    let home = temp_home();
    medichat(&home)
        .args(["snapshot", "--role", "attendant", "--tab", "team"])
        .assert()
        .failure()
        .stderr(contains("not available"));
}

#[test]
/// init-config writes the file, and later commands pick the role up from it.
fn init_config_creates_config_file() {
    let home = temp_home();
    let config_path = config_file_path(&home);
    assert!(!config_path.exists());

    medichat(&home)
        .args(["init-config", "--role", "attendant", "--user-name", "Bia Souza"])
        .assert()
        .success()
        .stdout(contains("Config written"));

    assert!(config_path.exists());
    let written = fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("\"attendant\""));
    assert!(written.contains("Bia Souza"));

    medichat(&home)
        .arg("snapshot")
        .assert()
        .success()
        .stdout(contains("Bia Souza"))
        .stdout(contains("My Dashboard"));
}

#[test]
/// A corrupt config file falls back to the defaults and says so on stderr.
fn snapshot_ignores_invalid_config() {
    let home = temp_home();
    let config_path = config_file_path(&home);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{ not json").unwrap();

    medichat(&home)
        .arg("snapshot")
        .assert()
        .success()
        .stdout(contains("Management Dashboard"))
        .stderr(contains("Ignoring invalid config"))
        .stderr(contains("config.json"));
}

#[test]
/// A valid config produces no fallback warning.
fn snapshot_with_valid_config_is_quiet() {
    let home = temp_home();
    medichat(&home)
        .args(["init-config", "--role", "manager"])
        .assert()
        .success();

    medichat(&home)
        .arg("snapshot")
        .assert()
        .success()
        .stderr(contains("Ignoring invalid config").not());
}
