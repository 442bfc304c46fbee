use super::import_file;
use crate::constants::DEFAULT_DELIMITER;
use std::path::PathBuf;
use tempfile::TempDir;

const HEADER: &str = "TariffNumber;Tarbr;Taroz1;Taroz2;Taroz3;Description;CustomsRate;UnitMeasure;FI;FU;PV;C11;C12;C13;C14;C15;C16;C17;VatRate;EX\n";

fn write_export(dir: &TempDir, rows: &str) -> PathBuf {
    let path = dir.path().join("taric.csv");
    std::fs::write(&path, format!("{HEADER}{rows}")).unwrap();
    path
}

#[test]
fn test_imports_full_tariff_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_export(
        &dir,
        "8471300000;8471;30;00;00;Преносни машини за автоматска обработка на податоци;5.0;бр;F1;F2;P1;;;;;;;;18.0;EX1\n",
    );

    let (records, stats) = import_file(&path, DEFAULT_DELIMITER).unwrap();
    assert_eq!(stats.imported, 1);
    assert_eq!(stats.skipped, 0);

    let record = &records[0];
    assert_eq!(record.tariff_number, "8471300000");
    assert_eq!(record.tarbr, "8471");
    assert_eq!(record.customs_rate, Some(5.0));
    assert_eq!(record.vat_rate, Some(18.0));
    assert_eq!(record.unit_measure.as_deref(), Some("бр"));
    assert_eq!(record.ex.as_deref(), Some("EX1"));
    assert!(record.is_active);
}

#[test]
fn test_skips_partial_tariff_numbers() {
    let dir = TempDir::new().unwrap();
    let path = write_export(
        &dir,
        "8471;8471;;;;Наслов на глава;;;;;;;;;;;;;;\n8471300000;8471;30;00;00;Опис;;;;;;;;;;;;;;\n",
    );

    let (records, stats) = import_file(&path, DEFAULT_DELIMITER).unwrap();
    assert_eq!(stats.imported, 1);
    assert_eq!(stats.skipped, 1);
    assert_eq!(records[0].tariff_number, "8471300000");
}

#[test]
fn test_empty_rates_become_none() {
    let dir = TempDir::new().unwrap();
    let path = write_export(&dir, "0101210000;0101;21;00;00;Живи коњи;;;;;;;;;;;;;;\n");

    let (records, _) = import_file(&path, DEFAULT_DELIMITER).unwrap();
    assert_eq!(records[0].customs_rate, None);
    assert_eq!(records[0].vat_rate, None);
    assert_eq!(records[0].unit_measure, None);
}

#[test]
fn test_malformed_rate_skips_row() {
    let dir = TempDir::new().unwrap();
    let path = write_export(
        &dir,
        "0101210000;0101;21;00;00;Живи коњи;abc;;;;;;;;;;;;;\n0101290000;0101;29;00;00;Други;2.5;;;;;;;;;;;;;\n",
    );

    let (records, stats) = import_file(&path, DEFAULT_DELIMITER).unwrap();
    assert_eq!(stats.imported, 1);
    assert_eq!(stats.skipped, 1);
    assert_eq!(records[0].tariff_number, "0101290000");
}

#[test]
fn test_short_rows_tolerated() {
    // Export rows sometimes end early; trailing columns default to empty
    let dir = TempDir::new().unwrap();
    let path = write_export(&dir, "0101210000;0101;21;00;00;Живи коњи;2.5\n");

    let (records, stats) = import_file(&path, DEFAULT_DELIMITER).unwrap();
    assert_eq!(stats.imported, 1);
    assert_eq!(records[0].customs_rate, Some(2.5));
    assert_eq!(records[0].vat_rate, None);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(import_file(&dir.path().join("absent.csv"), DEFAULT_DELIMITER).is_err());
}
