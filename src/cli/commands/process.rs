//! Process command implementation for the roster importer CLI
//!
//! This module contains the complete import workflow: reading the roster
//! file, repairing and parsing lines in parallel, optional resequencing,
//! and writing records to the configured sink.

use super::record_stream::{ParallelRecordStream, Resequencer, SequencedOutcome};
use super::shared::{ProcessingStats, create_progress_bar, print_summary, setup_logging};
use crate::app::services::line_source::LineSource;
use crate::app::services::sink::RecordSink;
use crate::cli::args::ProcessArgs;
use crate::config::ErrorPolicy;
use crate::Result;
use indicatif::ProgressBar;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Process command runner for the roster importer
///
/// Orchestrates the import workflow:
/// 1. Set up logging and configuration
/// 2. Read the roster file and consume its header
/// 3. Repair, parse, and transform lines with the parallel worker pool
/// 4. Write records to the sink, resequencing when ordered output is on
/// 5. Report summary statistics
pub async fn run_process(
    args: ProcessArgs,
    cancellation_token: tokio_util::sync::CancellationToken,
) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;

    info!("Starting roster import");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = args.to_config();
    config.validate()?;

    // Read all record lines; the header never reaches the parser
    let loaded = LineSource::new(config.has_header).load(&config.input_path)?;
    let expected_records = loaded.expected_records();
    let first_record_line = loaded.first_record_line;

    if args.dry_run {
        return run_dry_run(&args, expected_records, start_time);
    }

    let progress_bar = if args.show_progress() && !loaded.lines.is_empty() {
        Some(create_progress_bar(
            loaded.lines.len() as u64,
            "Importing records...",
        ))
    } else {
        None
    };

    let mut stream = ParallelRecordStream::new(loaded.lines, &config, cancellation_token);
    let mut sink = RecordSink::create(args.format.to_sink_format(), config.output_path.as_deref())?;

    // With ordered output every outcome passes through the resequencer so
    // skipped lines still advance the expected ordinal
    let mut resequencer = config
        .ordered_output
        .then(|| Resequencer::new(first_record_line));

    while let Some(sequenced) = stream.next_outcome().await {
        // Non-line-scoped failures (cancellation, I/O) abort regardless of
        // the error policy
        let sequenced = match sequenced {
            SequencedOutcome {
                outcome: Err(error),
                ..
            } if !error.is_line_scoped() => return Err(error),
            other => other,
        };

        match &mut resequencer {
            Some(resequencer) => {
                for ready in resequencer.push(sequenced) {
                    handle_outcome(ready, &mut sink, config.error_policy, progress_bar.as_ref())?;
                }
            }
            None => {
                handle_outcome(sequenced, &mut sink, config.error_policy, progress_bar.as_ref())?;
            }
        }
    }

    stream.finish().await?;

    if let Some(resequencer) = &resequencer {
        debug_assert_eq!(resequencer.pending(), 0, "resequencer drained at end of input");
    }

    let writing_stats = sink.finalize()?;
    let stream_stats = stream.stats().await;

    if let Some(pb) = &progress_bar {
        pb.finish_with_message(format!(
            "Imported {} records",
            writing_stats.records_written
        ));
    }

    let stats = ProcessingStats {
        lines_read: stream_stats.lines_processed,
        records_written: writing_stats.records_written,
        lines_failed: stream_stats.lines_failed(),
        expected_records,
        processing_time: start_time.elapsed(),
    };

    info!(
        "Import complete: {} lines read, {} records written, {} failed in {:.2}s",
        stats.lines_read,
        stats.records_written,
        stats.lines_failed,
        stats.processing_time.as_secs_f64()
    );

    // The console sink already owns stdout; a summary would interleave
    if args.show_progress() && args.output_path.is_some() {
        print_summary(&stats, &stream_stats);
    }

    Ok(stats)
}

/// Write a record or apply the error policy to a failed line
fn handle_outcome(
    sequenced: SequencedOutcome,
    sink: &mut RecordSink,
    error_policy: ErrorPolicy,
    progress_bar: Option<&ProgressBar>,
) -> Result<()> {
    match sequenced.outcome {
        Ok(person) => {
            sink.write(&person)?;
        }
        Err(error) => match error_policy {
            ErrorPolicy::SkipAndLog => {
                warn!("Skipping line: {}", error);
            }
            ErrorPolicy::AbortOnFirst => {
                return Err(error);
            }
        },
    }

    if let Some(pb) = progress_bar {
        pb.inc(1);
    }
    Ok(())
}

/// Report what would be processed without importing anything
fn run_dry_run(
    args: &ProcessArgs,
    expected_records: usize,
    start_time: Instant,
) -> Result<ProcessingStats> {
    info!("Performing dry run - no output will be written");

    match &args.output_path {
        Some(path) => info!("Would write to: {}", path.display()),
        None => info!("Would write to stdout"),
    }

    println!(
        "Dry run: {} record lines would be imported from {}",
        expected_records,
        args.input_path.display()
    );

    Ok(ProcessingStats {
        expected_records,
        processing_time: start_time.elapsed(),
        ..Default::default()
    })
}
