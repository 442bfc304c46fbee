//! Regulations command implementation
//!
//! Imports the delimited regulations export into the regulation artifact.

use super::shared::{create_spinner, setup_logging, JobStats};
use crate::app::adapters::filesystem::write_json_artifact;
use crate::app::services::regulation_import;
use crate::cli::args::RegulationsArgs;
use crate::config::Config;
use crate::constants::REGULATION_DATA_FILENAME;
use crate::Result;
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Regulations command runner
pub fn run_regulations(args: RegulationsArgs) -> Result<JobStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;
    info!("Starting regulation import from {}", args.input.display());
    debug!("Regulations arguments: {:?}", args);

    args.validate()?;
    let config = Config::from_args(args.output_dir.clone(), args.force_overwrite);
    config.validate()?;
    config.ensure_output_directory()?;

    let spinner = create_spinner("Importing regulation records...");
    let (records, import_stats) =
        regulation_import::import_file(&args.input, args.delimiter_byte()?)?;
    spinner.finish_and_clear();

    let path = config.artifact_path(REGULATION_DATA_FILENAME)?;
    let bytes = write_json_artifact(&path, &records)?;

    let stats = JobStats {
        records_written: import_stats.imported,
        records_skipped: import_stats.skipped,
        artifacts: vec![(REGULATION_DATA_FILENAME.to_string(), bytes)],
        duration: start_time.elapsed(),
    };

    info!(
        "Regulation import complete: {} imported, {} skipped",
        stats.records_written, stats.records_skipped
    );
    if !args.quiet {
        println!("{}", "Regulation import complete".green().bold());
        println!(
            "  {} records imported, {} skipped ({})",
            stats.records_written,
            stats.records_skipped,
            JobStats::format_size(bytes)
        );
    }
    Ok(stats)
}
