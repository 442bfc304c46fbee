//! Customs KB Library
//!
//! A Rust library for generating and importing static reference data used
//! by a customs-declaration support system.
//!
//! This library provides tools for:
//! - Generating LON and declaration code lists keyed by SAD box number
//! - Generating ISO 4217 currency and ISO 3166-1 country reference lists
//! - Generating declaration validation rules
//! - Importing TARIC tariff and regulation records from delimited exports
//! - Extracting country and customs-office registries from rulebook text
//! - Transliterating Latin place names into Macedonian Cyrillic

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod city_translate;
        pub mod codelists;
        pub mod regulation_import;
        pub mod registry_extract;
        pub mod tariff_import;
        pub mod transliterator;
        pub mod validation_rules;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CodeEntry, CodeList, RegulationRecord, TariffRecord, ValidationRule};
pub use app::services::transliterator::transliterate;
pub use config::Config;

/// Result type alias for customs KB operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for reference-data generation and import
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Registry extraction error
    #[error("Registry extraction error: {message}")]
    Extraction { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Unknown artifact name
    #[error("Unknown artifact: {artifact_name}")]
    UnknownArtifact { artifact_name: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a JSON serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a registry extraction error
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an unknown artifact error
    pub fn unknown_artifact(artifact_name: impl Into<String>) -> Self {
        Self::UnknownArtifact {
            artifact_name: artifact_name.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
