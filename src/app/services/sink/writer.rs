//! Record serialization into the configured output format

use colored::Colorize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

use super::stats::WritingStats;
use crate::app::models::Person;
use crate::{Error, Result};

/// Output format for imported records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkFormat {
    /// Canonically quoted CSV with a header row
    Csv,
    /// One JSON object per line
    JsonLines,
    /// Human-readable console listing
    Console,
}

/// Sink writing person records to a file or stdout
pub struct RecordSink {
    inner: SinkInner,
    stats: WritingStats,
}

enum SinkInner {
    Csv(csv::Writer<Box<dyn Write + Send>>),
    JsonLines(Box<dyn Write + Send>),
    Console(Box<dyn Write + Send>),
}

impl RecordSink {
    /// Create a sink for the given format and destination
    ///
    /// `output_path` of `None` writes to stdout.
    pub fn create(format: SinkFormat, output_path: Option<&Path>) -> Result<Self> {
        let destination: Box<dyn Write + Send> = match output_path {
            Some(path) => {
                let file = File::create(path).map_err(|e| {
                    Error::io(format!("failed to create output file {}", path.display()), e)
                })?;
                info!("Writing records to {}", path.display());
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let inner = match format {
            SinkFormat::Csv => SinkInner::Csv(
                csv::WriterBuilder::new()
                    .has_headers(true)
                    .from_writer(destination),
            ),
            SinkFormat::JsonLines => SinkInner::JsonLines(destination),
            SinkFormat::Console => SinkInner::Console(destination),
        };

        Ok(Self {
            inner,
            stats: WritingStats::new(),
        })
    }

    /// Write one record
    pub fn write(&mut self, person: &Person) -> Result<()> {
        match &mut self.inner {
            SinkInner::Csv(writer) => {
                writer.serialize(person)?;
            }
            SinkInner::JsonLines(writer) => {
                serde_json::to_writer(&mut *writer, person)?;
                writeln!(writer)
                    .map_err(|e| Error::sink_write("failed to write JSON record", Box::new(e)))?;
            }
            SinkInner::Console(writer) => {
                writeln!(
                    writer,
                    "{:>8}  {} {}  {}",
                    person.id.cyan(),
                    person.first_name.bold(),
                    person.last_name.bold(),
                    person.address.dimmed()
                )
                .map_err(|e| Error::sink_write("failed to write console record", Box::new(e)))?;
            }
        }

        self.stats.records_written += 1;
        Ok(())
    }

    /// Flush the destination and return the writing statistics
    pub fn finalize(self) -> Result<WritingStats> {
        match self.inner {
            SinkInner::Csv(mut writer) => {
                writer
                    .flush()
                    .map_err(|e| Error::io("failed to flush CSV output", e))?;
            }
            SinkInner::JsonLines(mut writer) | SinkInner::Console(mut writer) => {
                writer
                    .flush()
                    .map_err(|e| Error::io("failed to flush output", e))?;
            }
        }

        info!("Sink finalized: {} records written", self.stats.records_written);
        Ok(self.stats)
    }

    /// Records written so far
    pub fn records_written(&self) -> usize {
        self.stats.records_written
    }
}
