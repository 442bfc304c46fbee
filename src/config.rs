//! Configuration management and validation.
//!
//! Provides the small set of settings shared by the reference-data jobs:
//! where artifacts are written and whether existing artifacts may be
//! overwritten. Settings default from constants and are overridden by CLI
//! arguments.

use crate::constants::DEFAULT_OUTPUT_DIR;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Job configuration for reference-data generation and import
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory where JSON artifacts are written
    pub output_dir: PathBuf,

    /// Overwrite existing artifacts instead of refusing
    pub force_overwrite: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            force_overwrite: false,
        }
    }
}

impl Config {
    /// Build a config from optional CLI overrides
    pub fn from_args(output_dir: Option<PathBuf>, force_overwrite: bool) -> Self {
        let mut config = Config::default();
        if let Some(dir) = output_dir {
            config.output_dir = dir;
        }
        config.force_overwrite = force_overwrite;
        debug!("Resolved configuration: {:?}", config);
        config
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::configuration(
                "Output directory must not be empty".to_string(),
            ));
        }

        if self.output_dir.exists() && !self.output_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Output path is not a directory: {}",
                self.output_dir.display()
            )));
        }

        Ok(())
    }

    /// Create the output directory if it does not exist yet
    pub fn ensure_output_directory(&self) -> Result<()> {
        if !self.output_dir.exists() {
            std::fs::create_dir_all(&self.output_dir).map_err(|e| {
                Error::io(
                    format!(
                        "Failed to create output directory: {}",
                        self.output_dir.display()
                    ),
                    e,
                )
            })?;
            debug!("Created output directory: {}", self.output_dir.display());
        }
        Ok(())
    }

    /// Resolve the full path of an artifact within the output directory
    ///
    /// Fails when the artifact already exists and overwriting is disabled.
    pub fn artifact_path(&self, filename: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(filename);
        if path.exists() && !self.force_overwrite {
            return Err(Error::configuration(format!(
                "Artifact already exists (use --force to overwrite): {}",
                path.display()
            )));
        }
        Ok(path)
    }
}

/// Check that an input file exists and is a regular file
pub fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }
    if !path.is_file() {
        return Err(Error::configuration(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert!(!config.force_overwrite);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_args_overrides() {
        let config = Config::from_args(Some(PathBuf::from("/tmp/artifacts")), true);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/artifacts"));
        assert!(config.force_overwrite);
    }

    #[test]
    fn test_artifact_path_overwrite_guard() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::from_args(Some(temp_dir.path().to_path_buf()), false);

        // No artifact yet - path resolves
        let path = config.artifact_path("test.json").unwrap();
        std::fs::write(&path, "{}").unwrap();

        // Existing artifact without --force is refused
        assert!(config.artifact_path("test.json").is_err());

        // With --force the path resolves again
        config.force_overwrite = true;
        assert!(config.artifact_path("test.json").is_ok());
    }

    #[test]
    fn test_ensure_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::from_args(Some(temp_dir.path().join("nested/processed")), false);

        assert!(!config.output_dir.exists());
        config.ensure_output_directory().unwrap();
        assert!(config.output_dir.is_dir());
    }

    #[test]
    fn test_validate_input_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("input.csv");

        assert!(validate_input_file(&file).is_err());

        std::fs::write(&file, "a;b\n").unwrap();
        assert!(validate_input_file(&file).is_ok());

        assert!(validate_input_file(temp_dir.path()).is_err());
    }
}
