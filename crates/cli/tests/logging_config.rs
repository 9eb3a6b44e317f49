use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

#[test]
fn logging_to_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let log_file = root.join("pvars.log");
    let template = root.join("prompt.md");
    fs::write(&template, "Hello [[name]]").unwrap();

    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1

[logging]
level = "error"
file_level = "debug"
file = "{}"
"#,
        log_file.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    Command::new(assert_cmd::cargo::cargo_bin!("pvars"))
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config_path)
        .arg("detect")
        .arg(&template)
        .assert()
        .success();

    assert!(log_file.exists(), "log file should be created");
    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("scanned template"), "unexpected log: {log}");
}

#[test]
fn unwritable_log_file_fails() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let log_file = dir.path().join("missing-dir/pvars.log");
    fs::write(
        &config_path,
        format!("version = 1\n[logging]\nfile = \"{}\"\n", log_file.display()),
    )
    .unwrap();

    Command::new(assert_cmd::cargo::cargo_bin!("pvars"))
        .arg("--config")
        .arg(&config_path)
        .arg("patterns")
        .assert()
        .failure()
        .stdout(predicates::str::contains("failed to create log file"));
}

#[test]
fn failing_check_still_flushes_log_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let log_file = root.join("pvars.log");
    let template = root.join("a.md");
    fs::write(&template, "[[ab]]").unwrap();

    let config_path = root.join("config.toml");
    fs::write(
        &config_path,
        format!(
            "version = 1\n[logging]\nlevel = \"error\"\nfile_level = \"debug\"\nfile = \"{}\"\n",
            log_file.display()
        ),
    )
    .unwrap();

    Command::new(assert_cmd::cargo::cargo_bin!("pvars"))
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config_path)
        .args(["convert", "--check"])
        .arg(&template)
        .assert()
        .code(1);

    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("placeholder detection finished"), "unexpected log: {log}");
}
