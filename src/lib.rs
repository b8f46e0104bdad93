//! Roster Importer Library
//!
//! A Rust library for importing person roster data from delimited text files
//! whose quoting may be malformed, repairing each line before parsing.
//!
//! This library provides tools for:
//! - Neutralizing stray quote characters that would corrupt CSV tokenization
//! - Tokenizing repaired lines with an explicit quote-state machine
//! - Mapping positional fields into immutable `Person` records
//! - Optional per-record transforms (e.g. name upper-casing)
//! - Writing results as CSV, JSON lines, or console output
//! - Line-scoped error reporting with ordinal and raw text context

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod line_sanitizer;
        pub mod line_source;
        pub mod record_parser;
        pub mod record_processor;
        pub mod sink;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Person, RawLine};
pub use app::services::record_parser::TokenizeError;
pub use config::Config;

/// Result type alias for the roster importer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for roster import operations
///
/// The three line-scoped variants (`EmptyLine`, `MalformedRecord`,
/// `TokenizerFault`) are non-fatal by default: the pipeline reports them per
/// line and the caller decides whether to skip or abort. Every line-scoped
/// error carries the offending raw text and its 1-based line number.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Line contained no data after quote repair
    #[error("empty line {line}: no fields to parse")]
    EmptyLine { line: usize, text: String },

    /// Line tokenized but produced too few fields for a person record
    #[error("malformed record at line {line}: expected at least {expected} fields, found {found}")]
    MalformedRecord {
        line: usize,
        text: String,
        expected: usize,
        found: usize,
    },

    /// Tokenizer rejected the line despite sanitization
    #[error("parsing error at line {line}: {source}")]
    TokenizerFault {
        line: usize,
        text: String,
        #[source]
        source: TokenizeError,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Output sink failed to accept a record
    #[error("output writing error: {message}")]
    SinkWrite {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Processing interrupted
    #[error("processing interrupted: {reason}")]
    Interrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an empty-line error for the given raw line
    pub fn empty_line(line: usize, text: impl Into<String>) -> Self {
        Self::EmptyLine {
            line,
            text: text.into(),
        }
    }

    /// Create a malformed-record error for a line with too few fields
    pub fn malformed_record(
        line: usize,
        text: impl Into<String>,
        expected: usize,
        found: usize,
    ) -> Self {
        Self::MalformedRecord {
            line,
            text: text.into(),
            expected,
            found,
        }
    }

    /// Create a tokenizer-fault error wrapping the low-level cause
    pub fn tokenizer_fault(line: usize, text: impl Into<String>, source: TokenizeError) -> Self {
        Self::TokenizerFault {
            line,
            text: text.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a sink writing error
    pub fn sink_write(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::SinkWrite {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }

    /// Whether this error is scoped to a single input line
    ///
    /// Line-scoped errors never corrupt state for subsequent lines; the
    /// pipeline may skip the line and continue when the error policy allows.
    pub fn is_line_scoped(&self) -> bool {
        matches!(
            self,
            Self::EmptyLine { .. } | Self::MalformedRecord { .. } | Self::TokenizerFault { .. }
        )
    }

    /// The 1-based source line number, for line-scoped errors
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::EmptyLine { line, .. }
            | Self::MalformedRecord { line, .. }
            | Self::TokenizerFault { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// The raw text of the offending line, for line-scoped errors
    pub fn line_text(&self) -> Option<&str> {
        match self {
            Self::EmptyLine { text, .. }
            | Self::MalformedRecord { text, .. }
            | Self::TokenizerFault { text, .. } => Some(text),
            _ => None,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::SinkWrite {
            message: "CSV output writing failed".to_string(),
            source: Box::new(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::SinkWrite {
            message: "JSON output writing failed".to_string(),
            source: Box::new(error),
        }
    }
}
