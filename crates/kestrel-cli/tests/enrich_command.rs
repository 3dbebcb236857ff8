use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_kestrel_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("kestrel")
}

#[test]
fn test_enrich_help() {
    let mut cmd = Command::new(get_kestrel_bin());
    cmd.arg("enrich").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Enrich a CSV roster with public profile data",
        ))
        .stdout(predicate::str::contains("--input"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--workers"))
        .stdout(predicate::str::contains("--delay-ms"))
        .stdout(predicate::str::contains("--skip-login-check"));
}

#[test]
fn test_enrich_requires_input() {
    let mut cmd = Command::new(get_kestrel_bin());
    cmd.arg("enrich");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--input"));
}

#[test]
fn test_enrich_fails_on_missing_roster() {
    let mut cmd = Command::new(get_kestrel_bin());
    cmd.arg("enrich").arg("--input").arg("/nonexistent/roster.csv");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("roster"));
}

#[test]
fn test_enrich_fails_on_empty_roster() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first_name,last_name,company,location,Email").unwrap();
    file.flush().unwrap();

    let mut cmd = Command::new(get_kestrel_bin());
    cmd.arg("enrich").arg("--input").arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No records found"));
}

#[test]
fn test_enrich_fails_before_work_without_chrome() {
    // A real roster but a bogus Chrome path: the command must fail at
    // browser discovery, before any worker starts.
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first_name,last_name,company,location,Email").unwrap();
    writeln!(file, "Jane,Doe,Acme Corp,Austin TX,jane@example.edu").unwrap();
    file.flush().unwrap();

    let mut cmd = Command::new(get_kestrel_bin());
    cmd.arg("enrich")
        .arg("--input")
        .arg(file.path())
        .arg("--chrome-path")
        .arg("/nonexistent/chrome");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Chrome not found"));
}

#[test]
fn test_enrich_flags_parse() {
    // All tuning flags must parse; failure still comes from the bogus
    // Chrome path.
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first_name,last_name").unwrap();
    writeln!(file, "Jane,Doe").unwrap();
    file.flush().unwrap();

    let mut cmd = Command::new(get_kestrel_bin());
    cmd.arg("enrich")
        .arg("--input")
        .arg(file.path())
        .arg("--workers")
        .arg("4")
        .arg("--batch-size")
        .arg("50")
        .arg("--limit")
        .arg("10")
        .arg("--delay-ms")
        .arg("500")
        .arg("--port-base")
        .arg("9300")
        .arg("--skip-login-check")
        .arg("--chrome-path")
        .arg("/nonexistent/chrome");

    cmd.assert().failure();
}
