use super::{read_city_rows, translate_file};
use crate::constants::DEFAULT_DELIMITER;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_input(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("cities.csv");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_read_translates_latin_names() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "a-1;London\na-2;Shanghai\n");

    let rows = read_city_rows(&input, DEFAULT_DELIMITER).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].translated, "Лондон");
    assert!(rows[1].translated.starts_with('Ш'));
}

#[test]
fn test_read_keeps_cyrillic_and_id_only_rows() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "b-1;Скопје\nb-2\n");

    let rows = read_city_rows(&input, DEFAULT_DELIMITER).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].translated, "Скопје");
    assert_eq!(rows[1].id, "b-2");
    assert_eq!(rows[1].original, "");
    assert_eq!(rows[1].translated, "");
}

#[test]
fn test_translate_file_writes_three_columns() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "c-1;Unknown\n");
    let output = dir.path().join("out.csv");

    let rows = translate_file(&input, &output, DEFAULT_DELIMITER).unwrap();
    assert_eq!(rows.len(), 1);

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written.trim(), "c-1;Unknown;Непознато");
}

#[test]
fn test_translate_file_in_place() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "d-1;Paris\nd-2;Москва\n");

    translate_file(&input, &input, DEFAULT_DELIMITER).unwrap();

    let written = std::fs::read_to_string(&input).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "d-1;Paris;Париз");
    assert_eq!(lines[1], "d-2;Москва;Москва");
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.csv");
    assert!(read_city_rows(&missing, DEFAULT_DELIMITER).is_err());
}
