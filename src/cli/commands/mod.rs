//! Command implementations for the customs KB CLI
//!
//! Each reference-data job is implemented in its own module; this module
//! dispatches to the appropriate handler based on the parsed arguments.

pub mod cities;
pub mod extract;
pub mod generate;
pub mod regulations;
pub mod shared;
pub mod tariffs;

pub use shared::JobStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
pub fn run(args: Args) -> Result<JobStats> {
    match args.get_command() {
        Commands::Generate(generate_args) => generate::run_generate(generate_args),
        Commands::Tariffs(tariffs_args) => tariffs::run_tariffs(tariffs_args),
        Commands::Regulations(regulations_args) => regulations::run_regulations(regulations_args),
        Commands::Extract(extract_args) => extract::run_extract(extract_args),
        Commands::Cities(cities_args) => cities::run_cities(cities_args),
    }
}
