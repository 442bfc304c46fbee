//! Filesystem adapter for artifact output and text input
//!
//! All JSON artifacts are written pretty-printed so they can be reviewed
//! in diffs before being committed to the knowledge base.

use crate::{Error, Result};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Serialize a value as pretty JSON and write it to `path`
///
/// Returns the number of bytes written.
pub fn write_json_artifact<T: Serialize>(path: &Path, value: &T) -> Result<u64> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::serialization(format!("Failed to serialize {}", path.display()), e))?;

    std::fs::write(path, &json)
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

    let bytes = json.len() as u64;
    info!("Wrote {} ({} bytes)", path.display(), bytes);
    Ok(bytes)
}

/// Read a text input file into memory
pub fn read_text_input(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }
    std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_json_artifact_pretty_prints() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");

        let value = serde_json::json!({"code": "MK", "descriptionMK": "Македонија"});
        let bytes = write_json_artifact(&path, &value).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.len() as u64, bytes);
        assert!(written.contains('\n'));
        assert!(written.contains("Македонија"));
    }

    #[test]
    fn test_read_text_input_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.txt");
        assert!(read_text_input(&missing).is_err());
    }
}
