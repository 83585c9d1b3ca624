//! Unit tests for the CSV writer and reader

use fileplay::formatter::{write_csv, write_csv_file};
use fileplay::parser::read_csv_file;
use fileplay::{csv_round_trip, District};
use pretty_assertions::assert_eq;
use std::fs;

fn sample() -> Vec<District> {
    vec![
        District::new("70101", "Innsbruck"),
        District::new("10101", "Eisenstadt"),
        District::new("50101", "Salzburg"),
        District::new("30101", "St. Pölten"),
        District::new("20101", "Klagenfurt am Wörthersee"),
    ]
}

#[test]
fn test_round_trip_equals_sorted_input() {
    let mut expected = sample();
    expected.sort_by(|a, b| a.id().cmp(b.id()));

    assert_eq!(csv_round_trip(&sample()).unwrap(), expected);
}

#[test]
fn test_written_file_is_sorted_by_id() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gemeinden.csv");
    write_csv_file(&path, &sample()).unwrap();

    let districts = read_csv_file(&path).unwrap();
    assert!(districts.windows(2).all(|w| w[0].id() <= w[1].id()));
}

#[test]
fn test_file_bytes_are_exact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("one.csv");
    let bytes = write_csv_file(&path, &[District::new("00001", "Alpha")]).unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"00001;Alpha;\r\n");
    assert_eq!(bytes, 14);
}

#[test]
fn test_existing_file_is_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gemeinden.csv");
    fs::write(&path, "stale content that is much longer than the new one\r\n").unwrap();

    write_csv_file(&path, &[District::new("00001", "Alpha")]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "00001;Alpha;\r\n");
}

#[test]
fn test_semicolon_in_name_truncates_on_reread() {
    let districts = vec![District::new("00001", "Alpha;Beta")];
    let mut buffer = Vec::new();
    write_csv(&mut buffer, &districts).unwrap();
    assert_eq!(buffer, b"00001;Alpha;Beta;\r\n");

    let reread = csv_round_trip(&districts).unwrap();
    assert_eq!(reread, vec![District::new("00001", "Alpha")]);
}
