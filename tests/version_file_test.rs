// tests/version_file_test.rs
use std::fs;

use git_release::version_file::VersionRecord;
use git_release::ReleaseError;
use tempfile::TempDir;

fn sample() -> VersionRecord {
    VersionRecord {
        revision: 100,
        major: 22,
        minor: 3,
        patch: 5,
        githash: "0123456789abcdef0123456789abcdef01234567".to_string(),
        describe: "v22.3.5.4-prestable".to_string(),
        version_string: "22.3.5.4".to_string(),
    }
}

#[test]
fn test_save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("versions.txt");

    sample().save(&path).unwrap();
    let loaded = VersionRecord::load(&path).unwrap();
    assert_eq!(loaded, sample());
}

#[test]
fn test_save_load_save_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("versions.txt");
    let second = dir.path().join("versions2.txt");

    sample().save(&first).unwrap();
    let loaded = VersionRecord::load(&first).unwrap();
    loaded.save(&second).unwrap();

    let first_bytes = fs::read(&first).unwrap();
    let second_bytes = fs::read(&second).unwrap();
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_save_leaves_no_temporary_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("versions.txt");
    sample().save(&path).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec!["versions.txt"]);
}

#[test]
fn test_load_ignores_non_assignment_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("versions.txt");
    fs::write(
        &path,
        "# a comment\n\
         \n\
         SET(VERSION_REVISION 100)\n\
         SET(VERSION_MAJOR 22)\n\
         SET(VERSION_MINOR 3)\n\
         SET(VERSION_PATCH 5)\n\
         SET(VERSION_GITHASH 0123456789abcdef0123456789abcdef01234567)\n\
         SET(VERSION_DESCRIBE v22.3.5.4-prestable)\n\
         SET(VERSION_STRING 22.3.5.4)\n\
         # trailing note\n",
    )
    .unwrap();

    let loaded = VersionRecord::load(&path).unwrap();
    assert_eq!(loaded, sample());
}

#[test]
fn test_load_fails_on_missing_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("versions.txt");
    fs::write(
        &path,
        "SET(VERSION_REVISION 100)\n\
         SET(VERSION_MAJOR 22)\n\
         SET(VERSION_MINOR 3)\n\
         SET(VERSION_PATCH 5)\n\
         SET(VERSION_GITHASH abc)\n\
         SET(VERSION_DESCRIBE v22.3.5.4-prestable)\n",
    )
    .unwrap();

    let err = VersionRecord::load(&path).unwrap_err();
    assert!(
        matches!(err, ReleaseError::VersionFile(ref msg) if msg.contains("VERSION_STRING")),
        "unexpected error: {}",
        err
    );
}

#[test]
fn test_load_fails_on_unknown_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("versions.txt");
    fs::write(&path, "SET(VERSION_FLAVOR vanilla)\n").unwrap();

    let err = VersionRecord::load(&path).unwrap_err();
    assert!(matches!(err, ReleaseError::VersionFile(ref msg) if msg.contains("VERSION_FLAVOR")));
}

#[test]
fn test_load_fails_on_non_integer_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("versions.txt");
    fs::write(
        &path,
        "SET(VERSION_REVISION onehundred)\n\
         SET(VERSION_MAJOR 22)\n\
         SET(VERSION_MINOR 3)\n\
         SET(VERSION_PATCH 5)\n\
         SET(VERSION_GITHASH abc)\n\
         SET(VERSION_DESCRIBE v22.3.5.4-prestable)\n\
         SET(VERSION_STRING 22.3.5.4)\n",
    )
    .unwrap();

    assert!(VersionRecord::load(&path).is_err());
}

#[test]
fn test_load_fails_on_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = VersionRecord::load(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, ReleaseError::Io(_)));
}
