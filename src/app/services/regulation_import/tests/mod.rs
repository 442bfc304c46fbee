use super::import_file;
use crate::constants::DEFAULT_DELIMITER;
use chrono::NaiveDate;
use std::path::PathBuf;
use tempfile::TempDir;

const HEADER: &str = "Celex;Gazette;DescriptionEN;DescriptionMK;LegalBasis;Tariff\n";

fn write_export(dir: &TempDir, rows: &str) -> PathBuf {
    let path = dir.path().join("regulations.csv");
    std::fs::write(&path, format!("{HEADER}{rows}")).unwrap();
    path
}

#[test]
fn test_imports_regulation_with_effective_date() {
    let dir = TempDir::new().unwrap();
    let path = write_export(
        &dir,
        "32020R1577;\"222/2020\n17.09.2020\";Commission Regulation;Регулатива на Комисијата;Член 57;8471 30 00 00\n",
    );

    let (records, stats) = import_file(&path, DEFAULT_DELIMITER).unwrap();
    assert_eq!(stats.imported, 1);

    let record = &records[0];
    assert_eq!(record.celex_number, "32020R1577");
    assert_eq!(record.official_gazette_ref.as_deref(), Some("222/2020\n17.09.2020"));
    assert_eq!(record.tariff_number.as_deref(), Some("8471300000"));
    assert_eq!(record.description_mk.as_deref(), Some("Регулатива на Комисијата"));
    assert_eq!(
        record.effective_date,
        NaiveDate::from_ymd_opt(2020, 9, 17).unwrap().and_hms_opt(0, 0, 0)
    );
    assert!(record.is_active);
}

#[test]
fn test_skips_rows_without_celex() {
    let dir = TempDir::new().unwrap();
    let path = write_export(
        &dir,
        ";101/2019;Orphan row;;;\n32019R0321;101/2019;Second;Втора;;\n",
    );

    let (records, stats) = import_file(&path, DEFAULT_DELIMITER).unwrap();
    assert_eq!(stats.imported, 1);
    assert_eq!(stats.skipped, 1);
    assert_eq!(records[0].celex_number, "32019R0321");
}

#[test]
fn test_single_line_gazette_ref_has_no_date() {
    let dir = TempDir::new().unwrap();
    let path = write_export(&dir, "32018R0123;55/2018;Desc;Опис;;\n");

    let (records, _) = import_file(&path, DEFAULT_DELIMITER).unwrap();
    assert_eq!(records[0].effective_date, None);
    assert_eq!(records[0].official_gazette_ref.as_deref(), Some("55/2018"));
}

#[test]
fn test_unparsable_date_is_tolerated() {
    let dir = TempDir::new().unwrap();
    let path = write_export(&dir, "32018R0456;\"55/2018\nнепознат датум\";;;Член 3;\n");

    let (records, stats) = import_file(&path, DEFAULT_DELIMITER).unwrap();
    assert_eq!(stats.imported, 1);
    assert_eq!(records[0].effective_date, None);
    assert_eq!(records[0].legal_basis.as_deref(), Some("Член 3"));
}

#[test]
fn test_empty_optional_fields_become_none() {
    let dir = TempDir::new().unwrap();
    let path = write_export(&dir, "32017R0789;;;;;\n");

    let (records, _) = import_file(&path, DEFAULT_DELIMITER).unwrap();
    let record = &records[0];
    assert_eq!(record.official_gazette_ref, None);
    assert_eq!(record.tariff_number, None);
    assert_eq!(record.description_en, None);
    assert_eq!(record.description_mk, None);
    assert_eq!(record.legal_basis, None);
    assert_eq!(record.effective_date, None);
}
