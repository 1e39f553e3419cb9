use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn bare_invocation_prints_usage() {
    Command::cargo_bin("inklayer")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn demo_writes_a_png_drawing() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("inklayer")
        .unwrap()
        .args(["--demo", "--width", "160", "--height", "120", "-o"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved demo drawing to"));

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].extension().unwrap(), "png");

    let bytes = std::fs::read(&entries[0]).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
