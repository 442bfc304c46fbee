//! Regulation import
//!
//! Imports EU regulation records from the delimited regulations export.
//! Rows without a CELEX number are skipped. The effective date is parsed
//! from the official-gazette reference, which carries the form
//! `number/year` on the first line and `dd.mm.yyyy` on the second.

use crate::app::models::RegulationRecord;
use crate::constants::{GAZETTE_DATE_FORMAT, REGULATION_PROGRESS_INTERVAL};
use crate::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;
use tracing::{debug, warn};

#[cfg(test)]
mod tests;

const COL_CELEX: usize = 0;
const COL_GAZETTE_REF: usize = 1;
const COL_DESCRIPTION_EN: usize = 2;
const COL_DESCRIPTION_MK: usize = 3;
const COL_LEGAL_BASIS: usize = 4;
const COL_TARIFF: usize = 5;

/// Counters reported after an import run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub imported: usize,
    pub skipped: usize,
}

/// Import all regulation records from a delimited export
pub fn import_file(path: &Path, delimiter: u8) -> Result<(Vec<RegulationRecord>, ImportStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "Failed to open regulations export",
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
            Some(regulation) => {
                records.push(regulation);
                stats.imported += 1;
            }
            None => stats.skipped += 1,
        }

        if row_number % REGULATION_PROGRESS_INTERVAL == 0 {
            debug!("Processed {} rows", row_number);
        }
    }

    debug!(
        "Regulation import finished: {} imported, {} skipped",
        stats.imported, stats.skipped
    );
    Ok((records, stats))
}

/// Parse one export row; rows without a CELEX number return `None`
fn parse_row(record: &csv::StringRecord) -> Option<RegulationRecord> {
    let celex = cell(record, COL_CELEX);
    if celex.is_empty() {
        return None;
    }

    let gazette_ref = cell(record, COL_GAZETTE_REF);

    Some(RegulationRecord {
        celex_number: celex.to_string(),
        official_gazette_ref: non_empty(gazette_ref),
        tariff_number: clean_tariff(cell(record, COL_TARIFF)),
        description_en: non_empty(cell(record, COL_DESCRIPTION_EN)),
        description_mk: non_empty(cell(record, COL_DESCRIPTION_MK)),
        legal_basis: non_empty(cell(record, COL_LEGAL_BASIS)),
        effective_date: parse_effective_date(gazette_ref),
        is_active: true,
    })
}

/// Strip spaces out of a tariff number (`"8471 30 00 00"` form)
fn clean_tariff(value: &str) -> Option<String> {
    let cleaned: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Parse the effective date from a gazette reference
///
/// References carry the publication date on their second line; a missing
/// or unparsable date is not an error, the record simply has none.
fn parse_effective_date(gazette_ref: &str) -> Option<NaiveDateTime> {
    let date_part = gazette_ref.lines().nth(1)?.trim();
    NaiveDate::parse_from_str(date_part, GAZETTE_DATE_FORMAT)
        .ok()
        .map(|date| date.and_hms_opt(0, 0, 0))?
}

fn cell<'a>(record: &'a csv::StringRecord, index: usize) -> &'a str {
    record.get(index).map(str::trim).unwrap_or("")
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
