//! Record parsing for repaired roster lines
//!
//! This module turns one cleaned line into one `Person` record, or a
//! line-scoped error that pinpoints the failure. The design assumes the
//! record-boundary policy upheld by the line source: every physical line is
//! exactly one logical record, so the parser is called exactly once per line
//! and never looks across line boundaries.
//!
//! ## Architecture
//!
//! - [`tokenizer`] - Explicit quote-state scan splitting a line into fields
//! - [`parser`] - Field-count validation and positional mapping into `Person`
//!
//! ## Usage
//!
//! ```rust
//! use roster_importer::app::models::RawLine;
//! use roster_importer::app::services::record_parser::RecordParser;
//!
//! let parser = RecordParser::new();
//! let line = RawLine::new(2, "1,John,Doe,123 Main St".to_string());
//! let person = parser.parse_line(&line)?;
//! assert_eq!(person.first_name, "John");
//! # Ok::<(), roster_importer::Error>(())
//! ```

pub mod parser;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::RecordParser;
pub use tokenizer::{TokenizeError, tokenize};
