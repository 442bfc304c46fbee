//! Command-line argument definitions for the customs KB tool
//!
//! Defines the complete CLI interface using the clap derive API. Each
//! reference-data job is a subcommand with its own arguments and
//! validation.

use crate::constants::ARTIFACT_NAMES;
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the customs KB tool
///
/// Generates and imports the static reference data consumed by the
/// customs-declaration support system: code lists, validation rules,
/// TARIC tariffs, regulations, registries and city translations.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "customs_kb",
    version,
    about = "Generate and import customs reference data (code lists, TARIC tariffs, regulations, registries)",
    long_about = "A tool for building the knowledge base of a customs-declaration support system. \
                  Generates code lists keyed by SAD box number, declaration validation rules and ISO \
                  reference lists, imports TARIC tariff and regulation exports, extracts country and \
                  customs-office registries from rulebook text, and transliterates Latin place names \
                  into Macedonian Cyrillic."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Generate static artifacts (code lists, ISO lists, validation rules)
    Generate(GenerateArgs),
    /// Import TARIC tariff records from a delimited export
    Tariffs(TariffsArgs),
    /// Import regulation records from a delimited export
    Regulations(RegulationsArgs),
    /// Extract country and customs-office registries from rulebook text
    Extract(ExtractArgs),
    /// Translate city names to Macedonian Cyrillic in a delimited file
    Cities(CitiesArgs),
}

/// Arguments for the generate command
#[derive(Debug, Clone, Parser)]
pub struct GenerateArgs {
    /// Specific artifacts to generate (comma-separated list)
    ///
    /// Available artifacts: codelists, complete, iso, rules.
    /// If not specified, all artifacts are generated.
    #[arg(
        short = 'a',
        long = "artifacts",
        value_name = "LIST",
        help = "Comma-separated list of artifacts to generate",
        long_help = "Specific artifacts to generate as a comma-separated list.\n\
                     Available artifacts:\n  \
                     codelists - LON code lists\n  \
                     complete  - complete declaration code lists with metadata\n  \
                     iso       - ISO currency and country lists\n  \
                     rules     - declaration validation rules\n\n\
                     If not specified, all artifacts are generated"
    )]
    pub artifacts: Option<ArtifactList>,

    /// Output directory for generated artifacts
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for generated JSON artifacts"
    )]
    pub output_dir: Option<PathBuf>,

    /// Force overwrite of existing artifacts
    #[arg(long = "force", help = "Force overwrite of existing artifacts")]
    pub force_overwrite: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the tariffs command
#[derive(Debug, Clone, Parser)]
pub struct TariffsArgs {
    /// Input path to the delimited TARIC export
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input path to the delimited TARIC export"
    )]
    pub input: PathBuf,

    /// Output directory for the tariff artifact
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for the tariff artifact"
    )]
    pub output_dir: Option<PathBuf>,

    /// Field delimiter of the export
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value = ";",
        help = "Field delimiter of the export"
    )]
    pub delimiter: char,

    /// Force overwrite of an existing artifact
    #[arg(long = "force", help = "Force overwrite of an existing artifact")]
    pub force_overwrite: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the regulations command
#[derive(Debug, Clone, Parser)]
pub struct RegulationsArgs {
    /// Input path to the delimited regulations export
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input path to the delimited regulations export"
    )]
    pub input: PathBuf,

    /// Output directory for the regulation artifact
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for the regulation artifact"
    )]
    pub output_dir: Option<PathBuf>,

    /// Field delimiter of the export
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value = ";",
        help = "Field delimiter of the export"
    )]
    pub delimiter: char,

    /// Force overwrite of an existing artifact
    #[arg(long = "force", help = "Force overwrite of an existing artifact")]
    pub force_overwrite: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the extract command
#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    /// Text file with the country table from the rulebook
    ///
    /// If neither text file is given, the curated registries are written.
    #[arg(
        long = "countries-text",
        value_name = "FILE",
        help = "Text file with the country table from the rulebook"
    )]
    pub countries_text: Option<PathBuf>,

    /// Text file with the customs-office table from the rulebook
    #[arg(
        long = "offices-text",
        value_name = "FILE",
        help = "Text file with the customs-office table from the rulebook"
    )]
    pub offices_text: Option<PathBuf>,

    /// Output directory for the registry artifacts
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for the registry artifacts"
    )]
    pub output_dir: Option<PathBuf>,

    /// Force overwrite of existing artifacts
    #[arg(long = "force", help = "Force overwrite of existing artifacts")]
    pub force_overwrite: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the cities command
#[derive(Debug, Clone, Parser)]
pub struct CitiesArgs {
    /// Input path to the delimited city file (id;name per row)
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input path to the delimited city file"
    )]
    pub input: PathBuf,

    /// Output path for the translated file
    ///
    /// If not specified, the input file is rewritten in place.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output path for the translated file (defaults to in-place)"
    )]
    pub output: Option<PathBuf>,

    /// Field delimiter of the city file
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value = ";",
        help = "Field delimiter of the city file"
    )]
    pub delimiter: char,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Wrapper for parsing comma-separated artifact lists
#[derive(Debug, Clone)]
pub struct ArtifactList {
    pub artifacts: Vec<String>,
}

impl FromStr for ArtifactList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let artifacts: Vec<String> = s
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if artifacts.is_empty() {
            return Err(Error::data_validation(
                "Artifact list cannot be empty".to_string(),
            ));
        }

        for artifact in &artifacts {
            if !ARTIFACT_NAMES.contains(&artifact.as_str()) {
                return Err(Error::unknown_artifact(format!(
                    "{}. Available artifacts: {}",
                    artifact,
                    ARTIFACT_NAMES.join(", ")
                )));
            }
        }

        Ok(ArtifactList { artifacts })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(Error::configuration(format!(
            "Delimiter must be a single ASCII character, got '{delimiter}'"
        )))
    }
}

fn log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl GenerateArgs {
    /// Validate the generate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Artifact names were already checked by the FromStr parser
        Ok(())
    }

    /// Get the list of artifacts to generate
    pub fn get_artifacts(&self) -> Vec<String> {
        match &self.artifacts {
            Some(list) => list.artifacts.clone(),
            None => ARTIFACT_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}

impl TariffsArgs {
    /// Validate the tariffs command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        crate::config::validate_input_file(&self.input)?;
        self.delimiter_byte()?;
        Ok(())
    }

    /// Get the delimiter as a byte for the CSV reader
    pub fn delimiter_byte(&self) -> Result<u8> {
        delimiter_byte(self.delimiter)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}

impl RegulationsArgs {
    /// Validate the regulations command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        crate::config::validate_input_file(&self.input)?;
        self.delimiter_byte()?;
        Ok(())
    }

    /// Get the delimiter as a byte for the CSV reader
    pub fn delimiter_byte(&self) -> Result<u8> {
        delimiter_byte(self.delimiter)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}

impl ExtractArgs {
    /// Validate the extract command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.countries_text {
            crate::config::validate_input_file(path)?;
        }
        if let Some(path) = &self.offices_text {
            crate::config::validate_input_file(path)?;
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}

impl CitiesArgs {
    /// Validate the cities command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        crate::config::validate_input_file(&self.input)?;
        self.delimiter_byte()?;

        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Get the delimiter as a byte for the CSV reader
    pub fn delimiter_byte(&self) -> Result<u8> {
        delimiter_byte(self.delimiter)
    }

    /// Resolve the output path, defaulting to in-place rewrite
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| self.input.clone())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}
