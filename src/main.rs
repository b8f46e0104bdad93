use clap::Parser;
use roster_importer::cli::{args::Args, commands};
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Create cancellation token for coordinating graceful shutdown
        let cancellation_token = CancellationToken::new();

        // Set up graceful shutdown handling
        let shutdown_signal = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");

            // Cancel all operations when Ctrl+C is received
            cancellation_token.cancel();
        };

        // Run the main command with cancellation support
        tokio::select! {
            result = commands::run(args, cancellation_token.clone()) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(roster_importer::Error::interrupted(
                    "import interrupted by user",
                ))
            }
        }
    });

    match result {
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
    println!("Roster Importer - Malformed CSV Repair and Import");
    println!("=================================================");
    println!();
    println!("Import person roster data from nominally-CSV text files whose quoting");
    println!("may be malformed, repairing each line before parsing it into records.");
    println!();
    println!("USAGE:");
    println!("    roster-importer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Import a roster file and write the parsed records (main command)");
    println!("    validate    Parse a roster file and report per-line problems");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Import a roster to clean CSV:");
    println!("    roster-importer process --input people.csv --output clean.csv");
    println!();
    println!("    # Import to JSON lines on stdout, upper-casing names:");
    println!("    roster-importer process --input people.csv --format jsonl --transform uppercase");
    println!();
    println!("    # Check a file for problem lines without importing:");
    println!("    roster-importer validate --input people.csv --max-samples 50");
    println!();
    println!("For detailed help on any command, use:");
    println!("    roster-importer <COMMAND> --help");
}
