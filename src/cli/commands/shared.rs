//! Shared components for CLI commands
//!
//! Common types and utilities used across the command implementations:
//! job statistics, logging setup and progress reporting.

use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Job statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct JobStats {
    /// Number of records written into artifacts
    pub records_written: usize,
    /// Number of input rows skipped
    pub records_skipped: usize,
    /// Artifact names and sizes in bytes
    pub artifacts: Vec<(String, u64)>,
    /// Total job time
    pub duration: std::time::Duration,
}

impl JobStats {
    /// Calculate total artifact size in bytes
    pub fn total_artifact_size(&self) -> u64 {
        self.artifacts.iter().map(|(_, size)| size).sum()
    }

    /// Format a byte count in human-readable form
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging to stderr at the requested level
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("customs_kb={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a spinner for jobs without a known row count
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner
}
