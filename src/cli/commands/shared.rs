//! Shared components for CLI commands
//!
//! Common statistics, logging setup, and progress reporting used by the
//! process and validate commands.

use crate::Result;
use crate::cli::commands::record_stream::StreamStats;
use crate::constants::{PROGRESS_TEMPLATE, SUCCESS_RATE_THRESHOLD};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of record lines read from the input
    pub lines_read: usize,
    /// Number of records written to the sink
    pub records_written: usize,
    /// Number of lines that failed to parse
    pub lines_failed: usize,
    /// Expected record count from the line source (informational)
    pub expected_records: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl ProcessingStats {
    /// Parse success rate as a percentage of lines read
    pub fn success_rate(&self) -> f64 {
        if self.lines_read == 0 {
            100.0
        } else {
            ((self.lines_read - self.lines_failed) as f64 / self.lines_read as f64) * 100.0
        }
    }

    /// Whether the run met the configured success threshold
    pub fn is_successful(&self) -> bool {
        self.lines_failed == 0 || self.success_rate() > SUCCESS_RATE_THRESHOLD
    }
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roster_importer={}", log_level)));

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

/// Create a progress bar with the shared template
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print the end-of-run summary to the console
pub fn print_summary(stats: &ProcessingStats, stream_stats: &StreamStats) {
    println!("\n{}", "Import Summary".bright_green().bold());
    println!("{}", "=".repeat(40));
    println!(
        "  Lines read:       {}",
        stats.lines_read.to_string().bright_white().bold()
    );
    println!(
        "  Records written:  {}",
        stats.records_written.to_string().bright_white().bold()
    );

    if stats.lines_failed > 0 {
        println!(
            "  Lines failed:     {}",
            stats.lines_failed.to_string().bright_red().bold()
        );
        println!(
            "    empty: {}, malformed: {}, tokenizer faults: {}",
            stream_stats.empty_lines,
            stream_stats.malformed_records,
            stream_stats.tokenizer_faults
        );
    } else {
        println!("  Lines failed:     {}", "0".bright_white());
    }

    if stats.expected_records != stats.lines_read {
        println!(
            "  Expected records: {} (source reported a different count)",
            stats.expected_records.to_string().yellow()
        );
    }

    println!(
        "  Success rate:     {:.1}%",
        stats.success_rate()
    );
    println!(
        "  Duration:         {:.2}s",
        stats.processing_time.as_secs_f64()
    );
}
