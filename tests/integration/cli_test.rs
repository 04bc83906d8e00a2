//! Integration tests for the rawline binary with piped (non-tty) stdin

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary with an isolated config directory.
fn rawline(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rawline").expect("binary should be built");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("RAWLINE_LOG");
    cmd
}

#[test]
fn help_lists_editing_flags() {
    let home = TempDir::new().unwrap();
    rawline(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--multiline"))
        .stdout(predicate::str::contains("--mask"))
        .stdout(predicate::str::contains("--history-max-len"))
        .stdout(predicate::str::contains("--keycodes"));
}

#[test]
fn long_version_includes_build_info() {
    let home = TempDir::new().unwrap();
    rawline(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "rawline {} (",
            env!("CARGO_PKG_VERSION")
        )))
        .stdout(predicate::str::contains(")"));
}

#[test]
fn piped_lines_are_echoed_without_prompt() {
    let home = TempDir::new().unwrap();
    rawline(&home)
        .write_stdin("hello\nworld\r\n")
        .assert()
        .success()
        .stdout("echo: 'hello'\necho: 'world'\n");
}

#[test]
fn last_line_without_newline_is_still_read() {
    let home = TempDir::new().unwrap();
    rawline(&home)
        .write_stdin("tail")
        .assert()
        .success()
        .stdout(predicate::str::contains("echo: 'tail'"));
}

#[test]
fn empty_stdin_exits_cleanly() {
    let home = TempDir::new().unwrap();
    rawline(&home).write_stdin("").assert().success().stdout("");
}

#[test]
fn slash_commands_are_not_echoed() {
    let home = TempDir::new().unwrap();
    rawline(&home)
        .write_stdin("/mask\n/unmask\n/historylen 5\n/bogus\nplain\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unrecognized command: /bogus"))
        .stdout(predicate::str::contains("echo: 'plain'"))
        .stdout(predicate::str::contains("echo: '/mask'").not());
}

#[test]
fn invalid_config_file_fails_with_path() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.toml");
    std::fs::write(&path, "[editor\nmask = ").unwrap();

    rawline(&home)
        .arg("--config")
        .arg(&path)
        .write_stdin("x\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"))
        .stderr(predicate::str::contains("broken.toml"));
}

#[test]
fn missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    rawline(&home)
        .arg("--config")
        .arg(home.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[cfg(target_os = "linux")]
#[test]
fn default_config_location_is_honored() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("rawline");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[editor\n").unwrap();

    rawline(&home)
        .write_stdin("x\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn log_file_records_input_path() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("rawline.log");

    rawline(&home)
        .arg("--log-file")
        .arg(&log)
        .write_stdin("x\n")
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("rawline starting"));
    assert!(contents.contains("stdin is not a tty"));
}
