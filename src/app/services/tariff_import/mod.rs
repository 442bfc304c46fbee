//! TARIC tariff import
//!
//! Imports tariff records from the delimited TARIC export. Rows without a
//! full 10-character tariff number are skipped; malformed rows are logged
//! and skipped without aborting the import.

use crate::app::models::TariffRecord;
use crate::constants::{is_full_tariff_number, TARIFF_PROGRESS_INTERVAL};
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, warn};

#[cfg(test)]
mod tests;

/// Column indices of the TARIC export
const COL_TARIFF_NUMBER: usize = 0;
const COL_TARBR: usize = 1;
const COL_TAROZ1: usize = 2;
const COL_TAROZ2: usize = 3;
const COL_TAROZ3: usize = 4;
const COL_DESCRIPTION: usize = 5;
const COL_CUSTOMS_RATE: usize = 6;
const COL_UNIT_MEASURE: usize = 7;
const COL_FI: usize = 8;
const COL_FU: usize = 9;
const COL_PV: usize = 10;
const COL_VAT_RATE: usize = 18;
const COL_EX: usize = 19;

/// Counters reported after an import run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub imported: usize,
    pub skipped: usize,
}

/// Import all tariff records from a delimited TARIC export
pub fn import_file(path: &Path, delimiter: u8) -> Result<(Vec<TariffRecord>, ImportStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "Failed to open TARIC export",
                Some(e),
            )
        })?;

    let mut records = Vec::new();
    let mut stats = ImportStats::default();

    for (i, record) in reader.records().enumerate() {
        let row_number = i + 2;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("Row {}: unreadable, skipping: {}", row_number, e);
                stats.skipped += 1;
                continue;
            }
        };

        match parse_row(&record) {
            Ok(Some(tariff)) => {
                records.push(tariff);
                stats.imported += 1;
            }
            Ok(None) => stats.skipped += 1,
            Err(message) => {
                warn!("Row {}: {}, skipping", row_number, message);
                stats.skipped += 1;
            }
        }

        if row_number % TARIFF_PROGRESS_INTERVAL == 0 {
            debug!("Processed {} rows", row_number);
        }
    }

    debug!(
        "TARIC import finished: {} imported, {} skipped",
        stats.imported, stats.skipped
    );
    Ok((records, stats))
}

/// Parse a single export row
///
/// `Ok(None)` means the row carries no full tariff number and is silently
/// skipped; `Err` reports a malformed numeric cell.
fn parse_row(record: &csv::StringRecord) -> std::result::Result<Option<TariffRecord>, String> {
    let tariff_number = cell(record, COL_TARIFF_NUMBER);
    if !is_full_tariff_number(tariff_number) {
        return Ok(None);
    }

    Ok(Some(TariffRecord {
        tariff_number: tariff_number.to_string(),
        tarbr: cell(record, COL_TARBR).to_string(),
        taroz1: cell(record, COL_TAROZ1).to_string(),
        taroz2: cell(record, COL_TAROZ2).to_string(),
        taroz3: cell(record, COL_TAROZ3).to_string(),
        description: cell(record, COL_DESCRIPTION).to_string(),
        customs_rate: parse_rate(cell(record, COL_CUSTOMS_RATE), "customs rate")?,
        unit_measure: opt_cell(record, COL_UNIT_MEASURE),
        fi: opt_cell(record, COL_FI),
        fu: opt_cell(record, COL_FU),
        pv: opt_cell(record, COL_PV),
        vat_rate: parse_rate(cell(record, COL_VAT_RATE), "VAT rate")?,
        ex: opt_cell(record, COL_EX),
        is_active: true,
    }))
}

fn cell<'a>(record: &'a csv::StringRecord, index: usize) -> &'a str {
    record.get(index).map(str::trim).unwrap_or("")
}

fn opt_cell(record: &csv::StringRecord, index: usize) -> Option<String> {
    let value = cell(record, index);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_rate(value: &str, label: &str) -> std::result::Result<Option<f64>, String> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("invalid {label} '{value}'"))
}
