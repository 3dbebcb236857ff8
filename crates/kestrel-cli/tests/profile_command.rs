use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_kestrel_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("kestrel")
}

#[test]
fn test_profile_help() {
    let mut cmd = Command::new(get_kestrel_bin());
    cmd.arg("profile").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Extract a single profile URL and print the result",
        ))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--temp-profile"));
}

#[test]
fn test_profile_requires_url() {
    let mut cmd = Command::new(get_kestrel_bin());
    cmd.arg("profile");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("URL"));
}

#[test]
fn test_profile_fails_without_chrome() {
    let mut cmd = Command::new(get_kestrel_bin());
    cmd.arg("profile")
        .arg("https://www.linkedin.com/in/jane-doe")
        .arg("--chrome-path")
        .arg("/nonexistent/chrome");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Chrome not found"));
}

#[test]
fn test_profile_flags_parse() {
    // --format and --temp-profile must parse together; failure still
    // comes from the bogus Chrome path.
    let mut cmd = Command::new(get_kestrel_bin());
    cmd.arg("profile")
        .arg("https://www.linkedin.com/in/jane-doe")
        .arg("--format")
        .arg("json")
        .arg("--temp-profile")
        .arg("--port")
        .arg("9333")
        .arg("--chrome-path")
        .arg("/nonexistent/chrome");

    cmd.assert().failure();
}
