//! Extract command implementation
//!
//! Builds the country (Box 15а) and customs-office (Box 29) registry
//! artifacts. When rulebook text files are supplied, entries are
//! extracted from them; otherwise the curated registries are written.

use super::shared::{setup_logging, JobStats};
use crate::app::adapters::filesystem::{read_text_input, write_json_artifact};
use crate::app::models::CodeList;
use crate::app::services::{codelists, registry_extract};
use crate::cli::args::ExtractArgs;
use crate::config::Config;
use crate::constants::{COUNTRIES_REGISTRY_FILENAME, OFFICES_REGISTRY_FILENAME};
use crate::{Error, Result};
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Extract command runner
pub fn run_extract(args: ExtractArgs) -> Result<JobStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;
    info!("Starting registry extraction");
    debug!("Extract arguments: {:?}", args);

    args.validate()?;
    let config = Config::from_args(args.output_dir.clone(), args.force_overwrite);
    config.validate()?;
    config.ensure_output_directory()?;

    let countries = build_country_registry(&args)?;
    let offices = build_office_registry(&args)?;

    let mut stats = JobStats::default();

    let path = config.artifact_path(COUNTRIES_REGISTRY_FILENAME)?;
    let bytes = write_json_artifact(&path, &countries)?;
    stats.records_written += countries.total_codes;
    stats
        .artifacts
        .push((COUNTRIES_REGISTRY_FILENAME.to_string(), bytes));

    let path = config.artifact_path(OFFICES_REGISTRY_FILENAME)?;
    let bytes = write_json_artifact(&path, &offices)?;
    stats.records_written += offices.total_codes;
    stats
        .artifacts
        .push((OFFICES_REGISTRY_FILENAME.to_string(), bytes));

    stats.duration = start_time.elapsed();
    info!(
        "Registry extraction complete: {} countries, {} offices",
        countries.total_codes, offices.total_codes
    );
    if !args.quiet {
        println!("{}", "Registry extraction complete".green().bold());
        println!("  countries: {}", countries.total_codes);
        println!("  customs offices: {}", offices.total_codes);
    }
    Ok(stats)
}

fn build_country_registry(args: &ExtractArgs) -> Result<CodeList> {
    match &args.countries_text {
        Some(path) => {
            let text = read_text_input(path)?;
            let entries = registry_extract::extract_countries(&text);
            if entries.is_empty() {
                return Err(Error::extraction(format!(
                    "No country rows recognized in {}",
                    path.display()
                )));
            }
            info!("Extracted {} countries from {}", entries.len(), path.display());
            Ok(registry_extract::extracted_country_list(entries))
        }
        None => {
            info!("No country text supplied, using curated registry");
            Ok(codelists::country_registry())
        }
    }
}

fn build_office_registry(args: &ExtractArgs) -> Result<CodeList> {
    match &args.offices_text {
        Some(path) => {
            let text = read_text_input(path)?;
            let entries = registry_extract::extract_offices(&text);
            if entries.is_empty() {
                return Err(Error::extraction(format!(
                    "No customs-office rows recognized in {}",
                    path.display()
                )));
            }
            info!(
                "Extracted {} customs offices from {}",
                entries.len(),
                path.display()
            );
            Ok(registry_extract::extracted_office_list(entries))
        }
        None => {
            info!("No office text supplied, using curated registry");
            Ok(codelists::office_registry())
        }
    }
}
