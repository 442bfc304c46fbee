//! Cities command implementation
//!
//! Translates Latin city names in a delimited file into Macedonian
//! Cyrillic, rewriting the file in place unless an output path is given.

use super::shared::{setup_logging, JobStats};
use crate::app::services::city_translate;
use crate::cli::args::CitiesArgs;
use crate::Result;
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Number of sample translations printed in the summary
const SAMPLE_LIMIT: usize = 20;

/// Cities command runner
pub fn run_cities(args: CitiesArgs) -> Result<JobStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;
    info!("Starting city translation from {}", args.input.display());
    debug!("Cities arguments: {:?}", args);

    args.validate()?;
    let output = args.output_path();

    let rows = city_translate::translate_file(&args.input, &output, args.delimiter_byte()?)?;
    let translated = rows.iter().filter(|r| !r.translated.is_empty()).count();

    let stats = JobStats {
        records_written: rows.len(),
        records_skipped: 0,
        artifacts: vec![],
        duration: start_time.elapsed(),
    };

    info!(
        "City translation complete: {} rows ({} with names) written to {}",
        rows.len(),
        translated,
        output.display()
    );
    if !args.quiet {
        println!("{}", "City translation complete".green().bold());
        println!(
            "  {} rows written to {} ({:.2}s)",
            rows.len(),
            output.display(),
            stats.duration.as_secs_f64()
        );
        for row in rows
            .iter()
            .filter(|r| !r.translated.is_empty())
            .take(SAMPLE_LIMIT)
        {
            println!("  {} -> {}", row.original, row.translated);
        }
    }
    Ok(stats)
}
