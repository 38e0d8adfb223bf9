//! Command-line behavior that does not depend on installed fonts.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn codeshot() -> Command {
    Command::cargo_bin("codeshot").unwrap()
}

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("main.rs"), "fn main() {\n\tprintln!(\"hi\");\n}\n").unwrap();
    dir
}

#[test]
fn test_lists_themes() {
    codeshot()
        .arg("--list-themes")
        .assert()
        .success()
        .stdout(predicate::str::contains("base16-ocean.dark"))
        .stdout(predicate::str::contains("InspiredGitHub"));
}

#[test]
fn test_lists_languages() {
    codeshot()
        .arg("--list-languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust"));
}

#[test]
fn test_requires_input_file() {
    codeshot().assert().failure();
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.png");
    codeshot()
        .arg(dir.path().join("nope.rs"))
        .arg("--output")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
    assert!(!out.exists());
}

#[test]
fn test_invalid_font_size_is_rejected() {
    let dir = workspace();
    codeshot()
        .arg(dir.path().join("main.rs"))
        .args(["--font-size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("font_size must be > 0"));
}

#[test]
fn test_missing_font_is_fatal() {
    let dir = workspace();
    let out = dir.path().join("out.png");
    codeshot()
        .arg(dir.path().join("main.rs"))
        .arg("--font")
        .arg(dir.path().join("missing.ttf"))
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.ttf"));
    assert!(!out.exists());
}

#[test]
fn test_bad_config_file_is_fatal() {
    let dir = workspace();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "font_size = \"huge\"\n").unwrap();
    codeshot()
        .arg(dir.path().join("main.rs"))
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid TOML config"));
}
