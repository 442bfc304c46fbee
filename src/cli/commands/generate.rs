//! Generate command implementation
//!
//! Builds the static JSON artifacts: LON code lists, the complete
//! declaration code lists, ISO currency and country lists, and the
//! declaration validation rules.

use super::shared::{setup_logging, JobStats};
use crate::app::adapters::filesystem::write_json_artifact;
use crate::app::services::{codelists, validation_rules};
use crate::cli::args::GenerateArgs;
use crate::config::Config;
use crate::constants::{
    COMPLETE_CODELISTS_FILENAME, COUNTRIES_ISO_FILENAME, CURRENCIES_FILENAME,
    LON_CODELISTS_FILENAME, VALIDATION_RULES_FILENAME,
};
use crate::{Error, Result};
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Generate command runner
pub fn run_generate(args: GenerateArgs) -> Result<JobStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;
    info!("Starting artifact generation");
    debug!("Generate arguments: {:?}", args);

    args.validate()?;
    let config = Config::from_args(args.output_dir.clone(), args.force_overwrite);
    config.validate()?;
    config.ensure_output_directory()?;

    let mut stats = JobStats::default();

    for artifact in args.get_artifacts() {
        match artifact.as_str() {
            "codelists" => generate_lon_codelists(&config, &mut stats)?,
            "complete" => generate_complete_codelists(&config, &mut stats)?,
            "iso" => generate_iso_lists(&config, &mut stats)?,
            "rules" => generate_validation_rules(&config, &mut stats)?,
            other => return Err(Error::unknown_artifact(other)),
        }
    }

    stats.duration = start_time.elapsed();
    report(&args, &stats);
    Ok(stats)
}

fn generate_lon_codelists(config: &Config, stats: &mut JobStats) -> Result<()> {
    let lists = codelists::lon_lists();
    let records: usize = lists.iter().map(|l| l.total_codes).sum();

    let path = config.artifact_path(LON_CODELISTS_FILENAME)?;
    let bytes = write_json_artifact(&path, &lists)?;

    stats.records_written += records;
    stats
        .artifacts
        .push((LON_CODELISTS_FILENAME.to_string(), bytes));
    info!("Generated {} LON lists with {} codes", lists.len(), records);
    Ok(())
}

fn generate_complete_codelists(config: &Config, stats: &mut JobStats) -> Result<()> {
    let document = codelists::complete_document();

    let path = config.artifact_path(COMPLETE_CODELISTS_FILENAME)?;
    let bytes = write_json_artifact(&path, &document)?;

    stats.records_written += document.metadata.total_codes;
    stats
        .artifacts
        .push((COMPLETE_CODELISTS_FILENAME.to_string(), bytes));
    info!(
        "Generated {} declaration lists with {} codes",
        document.metadata.total_codelists, document.metadata.total_codes
    );
    Ok(())
}

fn generate_iso_lists(config: &Config, stats: &mut JobStats) -> Result<()> {
    let currencies = codelists::currency_list();
    let path = config.artifact_path(CURRENCIES_FILENAME)?;
    let bytes = write_json_artifact(&path, &currencies)?;
    stats.records_written += currencies.total_codes;
    stats.artifacts.push((CURRENCIES_FILENAME.to_string(), bytes));

    let countries = codelists::country_iso_list();
    let path = config.artifact_path(COUNTRIES_ISO_FILENAME)?;
    let bytes = write_json_artifact(&path, &countries)?;
    stats.records_written += countries.total_codes;
    stats
        .artifacts
        .push((COUNTRIES_ISO_FILENAME.to_string(), bytes));

    info!(
        "Generated ISO lists: {} currencies, {} countries",
        currencies.total_codes, countries.total_codes
    );
    Ok(())
}

fn generate_validation_rules(config: &Config, stats: &mut JobStats) -> Result<()> {
    let rules = validation_rules::build_rules();

    let path = config.artifact_path(VALIDATION_RULES_FILENAME)?;
    let bytes = write_json_artifact(&path, &rules)?;

    stats.records_written += rules.len();
    stats
        .artifacts
        .push((VALIDATION_RULES_FILENAME.to_string(), bytes));
    info!("Generated {} validation rules", rules.len());
    Ok(())
}

fn report(args: &GenerateArgs, stats: &JobStats) {
    if args.quiet {
        return;
    }

    println!("{}", "Artifact generation complete".green().bold());
    for (name, bytes) in &stats.artifacts {
        println!("  {} ({})", name, JobStats::format_size(*bytes));
    }
    println!(
        "  {} records in {} artifacts, {:.2}s",
        stats.records_written,
        stats.artifacts.len(),
        stats.duration.as_secs_f64()
    );
}
