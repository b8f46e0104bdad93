//! Validate command implementation for the roster importer CLI
//!
//! This module contains the parse-only diagnostics run: every line goes
//! through the same repair-parse chain as a real import, but nothing is
//! written. Each failing line is reported with its ordinal, raw text, and
//! cause, so a broken export can be fixed without re-running the import
//! under added instrumentation.

use super::shared::{ProcessingStats, create_progress_bar, setup_logging};
use crate::app::services::line_source::LineSource;
use crate::app::services::record_parser::RecordParser;
use crate::cli::args::{ReportFormat, ValidateArgs};
use crate::{Error, Result};
use colored::Colorize;
use serde::Serialize;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// One failing line in the validation report
#[derive(Debug, Clone, Serialize)]
struct LineIssue {
    /// 1-based line number in the source file
    line: usize,
    /// Verbatim text of the offending line
    text: String,
    /// Human-readable cause
    cause: String,
}

/// Summary of a validation run, serializable for the JSON report
#[derive(Debug, Serialize)]
struct ValidationReport {
    input: String,
    lines_checked: usize,
    valid_records: usize,
    empty_lines: usize,
    malformed_records: usize,
    tokenizer_faults: usize,
    success_rate: f64,
    issues: Vec<LineIssue>,
    issues_truncated: bool,
}

impl ValidationReport {
    fn lines_failed(&self) -> usize {
        self.empty_lines + self.malformed_records + self.tokenizer_faults
    }
}

/// Validate command runner for the roster importer
///
/// Runs the repair-parse chain over every record line of the input and
/// reports per-line problems and summary statistics without writing output.
pub async fn run_validate(
    args: ValidateArgs,
    cancellation_token: CancellationToken,
) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;

    info!("Starting roster validation");
    debug!("Validation arguments: {:?}", args);

    // Read all record lines; the header never reaches the parser
    let loaded = LineSource::new(!args.no_header).load(&args.input_path)?;
    let expected_records = loaded.expected_records();

    // The JSON report owns stdout; a progress bar would interleave
    let progress_bar = (args.show_progress()
        && args.report_format == ReportFormat::Human
        && !loaded.lines.is_empty())
    .then(|| create_progress_bar(loaded.lines.len() as u64, "Validating records..."));

    let parser = RecordParser::new();
    let mut report = ValidationReport {
        input: args.input_path.display().to_string(),
        lines_checked: 0,
        valid_records: 0,
        empty_lines: 0,
        malformed_records: 0,
        tokenizer_faults: 0,
        success_rate: 100.0,
        issues: Vec::new(),
        issues_truncated: false,
    };

    for line in &loaded.lines {
        if cancellation_token.is_cancelled() {
            return Err(Error::interrupted("validation cancelled by user"));
        }

        report.lines_checked += 1;
        match parser.parse_line(line) {
            Ok(_) => report.valid_records += 1,
            Err(error) => {
                match &error {
                    Error::EmptyLine { .. } => report.empty_lines += 1,
                    Error::MalformedRecord { .. } => report.malformed_records += 1,
                    Error::TokenizerFault { .. } => report.tokenizer_faults += 1,
                    _ => {}
                }

                if report.issues.len() < args.max_samples {
                    report.issues.push(LineIssue {
                        line: line.number,
                        text: line.text.clone(),
                        cause: error.to_string(),
                    });
                } else {
                    report.issues_truncated = true;
                }
            }
        }

        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    if report.lines_checked > 0 {
        report.success_rate =
            (report.valid_records as f64 / report.lines_checked as f64) * 100.0;
    }

    if let Some(pb) = &progress_bar {
        pb.finish_with_message(format!(
            "Checked {} lines, {} problems",
            report.lines_checked,
            report.lines_failed()
        ));
    }

    match args.report_format {
        ReportFormat::Human => print_human_report(&report, args.max_samples),
        ReportFormat::Json => print_json_report(&report)?,
    }

    let stats = ProcessingStats {
        lines_read: report.lines_checked,
        records_written: 0,
        lines_failed: report.lines_failed(),
        expected_records,
        processing_time: start_time.elapsed(),
    };

    info!(
        "Validation complete: {} lines checked, {} problems found in {:.2}s",
        stats.lines_read,
        stats.lines_failed,
        stats.processing_time.as_secs_f64()
    );

    Ok(stats)
}

/// Print the human-readable validation report to the console
fn print_human_report(report: &ValidationReport, max_samples: usize) {
    println!("\n{}", "Validation Report".bright_green().bold());
    println!("{}", "=".repeat(40));
    println!("  Input:            {}", report.input);
    println!(
        "  Lines checked:    {}",
        report.lines_checked.to_string().bright_white().bold()
    );
    println!(
        "  Valid records:    {}",
        report.valid_records.to_string().bright_white().bold()
    );

    if report.lines_failed() > 0 {
        println!(
            "  Problem lines:    {}",
            report.lines_failed().to_string().bright_red().bold()
        );
        println!(
            "    empty: {}, malformed: {}, tokenizer faults: {}",
            report.empty_lines, report.malformed_records, report.tokenizer_faults
        );
    } else {
        println!("  Problem lines:    {}", "0".bright_white());
    }

    println!("  Success rate:     {:.1}%", report.success_rate);

    if !report.issues.is_empty() {
        println!("\n{}", "Problem Lines".bright_red().bold());
        println!("{}", "-".repeat(40));
        for issue in &report.issues {
            println!("  line {}: {}", issue.line.to_string().yellow(), issue.cause);
            println!("    {}", issue.text.dimmed());
        }
        if report.issues_truncated {
            println!(
                "  ... further problems omitted (shown {}, raise --max-samples for more)",
                max_samples
            );
        }
    }

    println!();
}

/// Print the machine-readable JSON validation report to stdout
fn print_json_report(report: &ValidationReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| Error::configuration(format!("failed to serialize validation report: {e}")))?;
    println!("{json}");
    Ok(())
}
