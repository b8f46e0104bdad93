//! Command implementations for the roster importer CLI

pub mod process;
pub mod record_stream;
pub mod shared;
pub mod validate;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};
use shared::ProcessingStats;
use tokio_util::sync::CancellationToken;

/// Dispatch the parsed CLI arguments to the selected command
pub async fn run(args: Args, cancellation_token: CancellationToken) -> Result<ProcessingStats> {
    match args.command {
        Some(Commands::Process(process_args)) => {
            process::run_process(process_args, cancellation_token).await
        }
        Some(Commands::Validate(validate_args)) => {
            validate::run_validate(validate_args, cancellation_token).await
        }
        None => Err(Error::configuration("no command specified")),
    }
}
