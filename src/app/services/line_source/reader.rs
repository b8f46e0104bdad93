//! Roster file reading with stable line ordinals

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

use crate::app::models::RawLine;
use crate::{Error, Result};

/// Reader producing physical lines with their 1-based file positions
///
/// Splitting happens on line terminators only. A record whose quoting is
/// unbalanced still ends at its own line terminator; repairing the quoting
/// is the sanitizer's job downstream.
#[derive(Debug, Clone)]
pub struct LineSource {
    has_header: bool,
}

/// The lines of one roster file, header separated out
#[derive(Debug, Clone)]
pub struct LoadedLines {
    /// Header line consumed from the top of the file, when configured
    pub header: Option<String>,

    /// Record lines in file order, ordinals counting the header
    pub lines: Vec<RawLine>,

    /// Ordinal of the first record line (2 when a header was consumed)
    pub first_record_line: usize,
}

impl LoadedLines {
    /// Expected record count for progress reporting
    ///
    /// Total physical lines minus the header. Informational only; the
    /// pipeline's own statistics are authoritative.
    pub fn expected_records(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource {
    /// Create a line source; `has_header` consumes the first line
    pub fn new(has_header: bool) -> Self {
        Self { has_header }
    }

    /// Read all lines of a roster file
    pub fn load(&self, path: &Path) -> Result<LoadedLines> {
        info!("Reading roster file: {}", path.display());

        let file = File::open(path)
            .map_err(|e| Error::io(format!("failed to open roster file {}", path.display()), e))?;
        let reader = BufReader::new(file);

        let mut header = None;
        let mut lines = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let number = idx + 1;
            let mut text = line.map_err(|e| {
                Error::io(
                    format!("failed to read line {} of {}", number, path.display()),
                    e,
                )
            })?;

            // Tolerate CRLF input
            if text.ends_with('\r') {
                text.pop();
            }

            if number == 1 && self.has_header {
                debug!("Consumed header line: {}", text);
                header = Some(text);
                continue;
            }

            lines.push(RawLine::new(number, text));
        }

        info!(
            "Read {} record lines from {}",
            lines.len(),
            path.display()
        );

        Ok(LoadedLines {
            header,
            lines,
            first_record_line: if self.has_header { 2 } else { 1 },
        })
    }
}
