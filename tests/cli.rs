use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn help_mentions_directory_argument() {
    Command::cargo_bin("dirbrowse")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("DIR"));
}

#[test]
fn missing_start_directory_fails_before_raw_mode() {
    let temp = assert_fs::TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");
    Command::cargo_bin("dirbrowse")
        .unwrap()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn file_as_start_directory_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("plain.txt");
    file.write_str("x").unwrap();
    Command::cargo_bin("dirbrowse")
        .unwrap()
        .arg(file.path())
        .env("DIRBROWSE_LOG", "off")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}
