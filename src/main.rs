use clap::Parser;
use customs_kb::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Customs KB - Customs Declaration Reference Data Builder");
    println!("=======================================================");
    println!();
    println!("Generate and import the static reference data consumed by the");
    println!("customs-declaration support system: code lists keyed by SAD box");
    println!("number, validation rules, TARIC tariffs, regulations, registries");
    println!("and Macedonian Cyrillic city translations.");
    println!();
    println!("USAGE:");
    println!("    customs_kb <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    generate       Generate static artifacts (code lists, ISO lists, validation rules)");
    println!("    tariffs        Import TARIC tariff records from a delimited export");
    println!("    regulations    Import regulation records from a delimited export");
    println!("    extract        Extract country and customs-office registries from rulebook text");
    println!("    cities         Translate city names to Macedonian Cyrillic in a delimited file");
    println!("    help           Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Generate all static artifacts into the default output directory:");
    println!("    customs_kb generate");
    println!();
    println!("    # Generate only the ISO lists and validation rules:");
    println!("    customs_kb generate --artifacts iso,rules --output kb/processed");
    println!();
    println!("    # Import a semicolon-delimited TARIC export:");
    println!("    customs_kb tariffs --input taric_export.csv --force");
    println!();
    println!("    # Translate city names in place:");
    println!("    customs_kb cities --input cities.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    customs_kb <COMMAND> --help");
}
