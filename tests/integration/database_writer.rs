//! Integration tests for the SQLite writer

use assert_matches::assert_matches;
use fileplay::storage::write_database;
use fileplay::{District, DistrictStore, PipelineError};
use rusqlite::Connection;
use std::path::Path;

const SCHEMA: &str = "CREATE TABLE DISTRICTS (ID TEXT PRIMARY KEY, NAME TEXT NOT NULL);";

fn create_table(path: &Path) {
    Connection::open(path).unwrap().execute_batch(SCHEMA).unwrap();
}

#[test]
fn test_rows_land_in_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gemeinden.sqlite");
    create_table(&path);

    let districts = vec![District::new("10101", "Eisenstadt"), District::new("10102", "Rust")];
    assert_eq!(write_database(&path, &districts).unwrap(), 2);

    let store = DistrictStore::open(&path).unwrap();
    assert_eq!(store.load_all().unwrap(), districts);
}

#[test]
fn test_failing_insert_commits_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gemeinden.sqlite");
    create_table(&path);

    let districts = vec![
        District::new("10101", "Eisenstadt"),
        District::new("10102", "Rust"),
        District::new("10103", "Purbach"),
        District::new("10102", "Rust (duplicate)"),
        District::new("10104", "Neusiedl"),
    ];

    assert_matches!(
        write_database(&path, &districts),
        Err(PipelineError::Database { .. })
    );
    assert_eq!(DistrictStore::open(&path).unwrap().count().unwrap(), 0);
}

#[test]
fn test_failed_batch_keeps_prior_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gemeinden.sqlite");
    create_table(&path);

    write_database(&path, &[District::new("10101", "Eisenstadt")]).unwrap();
    let err = write_database(
        &path,
        &[District::new("10102", "Rust"), District::new("10101", "Eisenstadt")],
    )
    .unwrap_err();

    assert!(err.user_message().contains("no rows were committed"));
    let store = DistrictStore::open(&path).unwrap();
    assert_eq!(store.load_all().unwrap(), vec![District::new("10101", "Eisenstadt")]);
}

#[test]
fn test_names_are_bound_not_interpolated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gemeinden.sqlite");
    create_table(&path);

    let hostile = District::new("10101", "x'); DROP TABLE DISTRICTS; --");
    write_database(&path, &[hostile.clone()]).unwrap();

    assert_eq!(DistrictStore::open(&path).unwrap().load_all().unwrap(), vec![hostile]);
}

#[test]
fn test_missing_table_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.sqlite");

    assert_matches!(
        write_database(&path, &[District::new("10101", "Eisenstadt")]),
        Err(PipelineError::Database { .. })
    );
}
