//! Command-line argument definitions for the roster importer
//!
//! This module defines the complete CLI interface using the clap derive API
//! and the mapping from CLI flags onto the run configuration.

use crate::app::services::sink::SinkFormat;
use crate::config::{Config, ErrorPolicy, Transform, detect_workers};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the roster importer
///
/// Imports person roster data from delimited text files whose quoting may be
/// malformed, repairing each line before parsing it into structured records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "roster-importer",
    version,
    about = "Import person roster CSV files, repairing malformed quoting line by line",
    long_about = "Imports person roster data from nominally-CSV text files that may contain \
                  stray or unbalanced quote characters. Each physical line is repaired and \
                  parsed independently - lines are never merged based on quote balance - and \
                  results are written as clean CSV, JSON lines, or a console listing."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the roster importer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Import a roster file and write the parsed records (main command)
    Process(ProcessArgs),
    /// Parse a roster file without writing output and report per-line issues
    Validate(ValidateArgs),
}

/// Arguments for the process command (main import)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input roster file
    ///
    /// A text file whose first line is a header (unless --no-header) and
    /// whose remaining lines hold one person record each: id, first name,
    /// last name, address.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input roster file to import"
    )]
    pub input_path: PathBuf,

    /// Output destination
    ///
    /// Created or truncated as needed. If not specified, records are written
    /// to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for imported records (stdout if omitted)"
    )]
    pub output_path: Option<PathBuf>,

    /// Output format for imported records
    #[arg(
        long = "format",
        value_enum,
        default_value = "csv",
        help = "Output format for imported records"
    )]
    pub format: OutputFormat,

    /// Number of parallel workers
    ///
    /// Controls how many lines are processed concurrently. Repair and
    /// parsing are CPU-bound and line-local, so this scales with cores.
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        default_value_t = detect_workers(),
        help = "Number of parallel workers for line processing"
    )]
    pub workers: usize,

    /// What to do when a line fails to parse
    ///
    /// By default failed lines are logged, counted, and skipped; the rest of
    /// the file is still imported. Use `abort` to stop on the first failure.
    #[arg(
        long = "on-error",
        value_enum,
        default_value = "skip",
        help = "Policy for lines that fail to parse"
    )]
    pub on_error: ErrorMode,

    /// Transform applied to each record after parsing
    #[arg(
        long = "transform",
        value_enum,
        default_value = "none",
        help = "Per-record transform applied after parsing"
    )]
    pub transform: TransformMode,

    /// Emit records in completion order instead of source order
    ///
    /// Skips the resequencing stage. Useful when output order is irrelevant
    /// and lowest latency matters.
    #[arg(long = "unordered", help = "Do not resequence output by source line")]
    pub unordered: bool,

    /// Treat the first line as data rather than a header
    #[arg(long = "no-header", help = "Input file has no header line")]
    pub no_header: bool,

    /// Show what would be processed without writing output
    #[arg(
        long = "dry-run",
        help = "Report the expected record count without importing"
    )]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the validate command (parse-only diagnostics)
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Input roster file to validate
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input roster file to validate"
    )]
    pub input_path: PathBuf,

    /// Treat the first line as data rather than a header
    #[arg(long = "no-header", help = "Input file has no header line")]
    pub no_header: bool,

    /// Maximum number of per-line problems to print in the report
    #[arg(
        long = "max-samples",
        value_name = "COUNT",
        default_value_t = 20,
        help = "Maximum per-line problems shown in the report"
    )]
    pub max_samples: usize,

    /// Output format for the validation report
    #[arg(
        long = "report-format",
        value_enum,
        default_value = "human",
        help = "Output format for the validation report"
    )]
    pub report_format: ReportFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format choices for imported records
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Clean, canonically quoted CSV with a header row
    Csv,
    /// One JSON object per line
    Jsonl,
    /// Human-readable console listing
    Console,
}

impl OutputFormat {
    /// Map the CLI choice onto the sink's format type
    pub fn to_sink_format(self) -> SinkFormat {
        match self {
            OutputFormat::Csv => SinkFormat::Csv,
            OutputFormat::Jsonl => SinkFormat::JsonLines,
            OutputFormat::Console => SinkFormat::Console,
        }
    }
}

/// Error policy choices for failed lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ErrorMode {
    /// Log, count, and continue
    Skip,
    /// Stop the run on the first failed line
    Abort,
}

impl ErrorMode {
    pub fn to_policy(self) -> ErrorPolicy {
        match self {
            ErrorMode::Skip => ErrorPolicy::SkipAndLog,
            ErrorMode::Abort => ErrorPolicy::AbortOnFirst,
        }
    }
}

/// Per-record transform choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransformMode {
    /// Pass records through unchanged
    None,
    /// Upper-case first and last names
    Uppercase,
}

impl TransformMode {
    pub fn to_transform(self) -> Transform {
        match self {
            TransformMode::None => Transform::None,
            TransformMode::Uppercase => Transform::UppercaseNames,
        }
    }
}

/// Output format choices for the validation report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable report
    Human,
    /// Machine-readable JSON report
    Json,
}

impl ProcessArgs {
    /// Validate argument combinations beyond what clap enforces
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::configuration("--workers must be at least 1"));
        }
        Ok(())
    }

    /// Build the run configuration from these arguments
    pub fn to_config(&self) -> Config {
        Config::new(self.input_path.clone())
            .with_output_path(self.output_path.clone())
            .with_workers(self.workers)
            .with_error_policy(self.on_error.to_policy())
            .with_transform(self.transform.to_transform())
            .with_ordered_output(!self.unordered)
            .with_header(!self.no_header)
    }

    /// Log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Whether progress bars should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ValidateArgs {
    /// Log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Whether progress bars should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
