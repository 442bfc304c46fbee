//! City translation pipeline
//!
//! Reads a delimited city file (`id;name[;...]`), transliterates every
//! name into Macedonian Cyrillic and writes the rows back with the
//! translation as a third column. The file carries no header row and may
//! be rewritten in place.

use crate::app::models::CityRow;
use crate::app::services::transliterator::transliterate;
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, warn};

#[cfg(test)]
mod tests;

/// Translate every row of a city file and write the result
///
/// Rows with at least two fields become `id;original;translated`. Rows
/// carrying only an id are kept with empty name columns so record counts
/// stay aligned with the source registry. Returns the translated rows
/// for reporting.
pub fn translate_file(input: &Path, output: &Path, delimiter: u8) -> Result<Vec<CityRow>> {
    let rows = read_city_rows(input, delimiter)?;
    write_city_rows(output, delimiter, &rows)?;
    Ok(rows)
}

/// Read and translate city rows from a delimited file
pub fn read_city_rows(input: &Path, delimiter: u8) -> Result<Vec<CityRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_path(input)
        .map_err(|e| {
            Error::csv_parsing(
                input.display().to_string(),
                "Failed to open city file",
                Some(e),
            )
        })?;

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping unreadable row {}: {}", line + 1, e);
                continue;
            }
        };

        match (record.get(0), record.get(1)) {
            (Some(id), Some(name)) => {
                let translated = transliterate(name);
                rows.push(CityRow {
                    id: id.to_string(),
                    original: name.to_string(),
                    translated,
                });
            }
            (Some(id), None) => {
                // Registry rows that carry only an identifier
                rows.push(CityRow {
                    id: id.to_string(),
                    original: String::new(),
                    translated: String::new(),
                });
            }
            _ => {
                warn!("Skipping empty row {}", line + 1);
            }
        }
    }

    debug!("Translated {} city rows from {}", rows.len(), input.display());
    Ok(rows)
}

fn write_city_rows(output: &Path, delimiter: u8, rows: &[CityRow]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(output)
        .map_err(|e| {
            Error::csv_parsing(
                output.display().to_string(),
                "Failed to open output file",
                Some(e),
            )
        })?;

    for row in rows {
        writer
            .write_record([&row.id, &row.original, &row.translated])
            .map_err(|e| {
                Error::csv_parsing(
                    output.display().to_string(),
                    "Failed to write row",
                    Some(e),
                )
            })?;
    }

    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush {}", output.display()), e))?;
    Ok(())
}
