use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn ghfetch() -> Command {
    let mut cmd = cargo_bin_cmd!("ghfetch");
    cmd.env_remove("GITHUB_TOKEN").env_remove("GITHUB_API_URL");
    cmd
}

#[test]
fn missing_name_is_a_usage_error() {
    ghfetch()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_prints_usage_and_fails() {
    ghfetch()
        .arg("-h")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("-t, --token"));
}

#[test]
fn unknown_flag_is_rejected() {
    ghfetch()
        .args(["-x", "acme"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn org_and_user_flags_are_exclusive() {
    ghfetch()
        .args(["-o", "-u", "acme"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn unreachable_api_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    ghfetch()
        .env("HOME", dir.path())
        .args(["-u", "--api-url", "http://127.0.0.1:1", "-d"])
        .arg(dir.path())
        .arg("alice")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("request to http://127.0.0.1:1/users/alice/repos"));
    assert!(!dir.path().join("alice").exists());
}

#[test]
fn version_flag_succeeds() {
    ghfetch()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains("ghfetch"));
}
