use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn postwright_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_postwright"));
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("ENDPOINT")
        .env_remove("ACCESS_TOKEN")
        .env_remove("TOKEN");
    cmd
}

fn fixture(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .display()
        .to_string()
}

#[test]
fn generates_into_default_output_dir() {
    let dir = tempfile::TempDir::new().unwrap();

    postwright_cmd()
        .current_dir(dir.path())
        .arg(fixture("workshop.postman_collection.json"))
        .arg(fixture("env.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated"))
        .stdout(predicate::str::contains("Workshop Regresion"))
        .stdout(predicate::str::contains("collection/v2.1.0/collection.json"));

    let health = dir.path().join("tests").join("health_check.spec.js");
    let contents = fs::read_to_string(health).unwrap();
    assert!(contents.contains("https://api.example.test/workshop/v1/health"));
}

#[test]
fn environment_supplies_default_variables() {
    let dir = tempfile::TempDir::new().unwrap();

    postwright_cmd()
        .current_dir(dir.path())
        .env("ENDPOINT", "http://env-host")
        .env("TOKEN", "from-env")
        .arg(fixture("workshop.postman_collection.json"))
        .arg("--output")
        .arg("generated")
        .assert()
        .success();

    let health = dir.path().join("generated").join("health_check.spec.js");
    let contents = fs::read_to_string(health).unwrap();
    assert!(contents.contains("const requestUrl = 'http://env-host/health';"));
    assert!(contents.contains("\"Authorization\": \"Bearer from-env\""));
}

#[test]
fn missing_collection_exits_non_zero() {
    let dir = tempfile::TempDir::new().unwrap();

    postwright_cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load collection"));

    assert!(!dir.path().join("tests").exists());
}

#[test]
fn malformed_collection_exits_non_zero() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"item\": [").unwrap();

    postwright_cmd()
        .current_dir(dir.path())
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Test files").not());
}

#[test]
fn list_prints_tree() {
    postwright_cmd()
        .arg("list")
        .arg(fixture("workshop.postman_collection.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Insurance Policy Regresion"))
        .stdout(predicate::str::contains("Group policy by policy number"))
        .stdout(predicate::str::contains("2 folders, 4 requests"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::TempDir::new().unwrap();

    postwright_cmd()
        .current_dir(dir.path())
        .arg(fixture("workshop.postman_collection.json"))
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Planned"));

    assert!(!dir.path().join("tests").exists());
}
