//! Tariffs command implementation
//!
//! Imports the delimited TARIC export into the tariff artifact.

use super::shared::{create_spinner, setup_logging, JobStats};
use crate::app::adapters::filesystem::write_json_artifact;
use crate::app::services::tariff_import;
use crate::cli::args::TariffsArgs;
use crate::config::Config;
use crate::constants::TARIFF_DATA_FILENAME;
use crate::Result;
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Tariffs command runner
pub fn run_tariffs(args: TariffsArgs) -> Result<JobStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;
    info!("Starting TARIC import from {}", args.input.display());
    debug!("Tariffs arguments: {:?}", args);

    args.validate()?;
    let config = Config::from_args(args.output_dir.clone(), args.force_overwrite);
    config.validate()?;
    config.ensure_output_directory()?;

    let spinner = create_spinner("Importing TARIC records...");
    let (records, import_stats) = tariff_import::import_file(&args.input, args.delimiter_byte()?)?;
    spinner.finish_and_clear();

    let path = config.artifact_path(TARIFF_DATA_FILENAME)?;
    let bytes = write_json_artifact(&path, &records)?;

    let stats = JobStats {
        records_written: import_stats.imported,
        records_skipped: import_stats.skipped,
        artifacts: vec![(TARIFF_DATA_FILENAME.to_string(), bytes)],
        duration: start_time.elapsed(),
    };

    info!(
        "TARIC import complete: {} imported, {} skipped",
        stats.records_written, stats.records_skipped
    );
    if !args.quiet {
        println!("{}", "TARIC import complete".green().bold());
        println!(
            "  {} records imported, {} skipped ({})",
            stats.records_written,
            stats.records_skipped,
            JobStats::format_size(bytes)
        );
        if let Some(record) = records.first() {
            println!("  first: {} {}", record.tariff_number, record.description);
        }
    }
    Ok(stats)
}
