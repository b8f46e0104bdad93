//! Positional field mapping from a tokenized line into a person record
//!
//! The parser validates the field count and maps the first four fields into
//! a `Person`. The operation is all-or-nothing per line: on any failure the
//! caller gets a line-scoped error carrying the original raw text and
//! ordinal, never a partially filled record.

use tracing::debug;

use crate::app::models::{Person, RawLine};
use crate::app::services::line_sanitizer;
use crate::constants::PERSON_FIELD_COUNT;
use crate::{Error, Result};

use super::tokenizer::tokenize;

/// Parser mapping repaired roster lines into `Person` records
///
/// Stateless and line-local; one instance can be shared freely across
/// worker tasks.
#[derive(Debug, Default, Clone)]
pub struct RecordParser;

impl RecordParser {
    /// Create a new record parser
    pub fn new() -> Self {
        Self
    }

    /// Repair and parse one raw line
    ///
    /// Convenience entry point composing the sanitizer with [`Self::parse`];
    /// this is what the pipeline workers call per line.
    pub fn parse_line(&self, line: &RawLine) -> Result<Person> {
        let cleaned = line_sanitizer::clean(&line.text);
        self.parse(&cleaned, line)
    }

    /// Parse a cleaned line into a person record
    ///
    /// `cleaned` must be the sanitizer's output for `origin`; the origin
    /// supplies the raw text and 1-based ordinal used in diagnostics.
    pub fn parse(&self, cleaned: &str, origin: &RawLine) -> Result<Person> {
        if cleaned.trim().is_empty() {
            return Err(Error::empty_line(origin.number, &origin.text));
        }

        let fields = tokenize(cleaned)
            .map_err(|e| Error::tokenizer_fault(origin.number, &origin.text, e))?;

        if fields.len() < PERSON_FIELD_COUNT {
            return Err(Error::malformed_record(
                origin.number,
                &origin.text,
                PERSON_FIELD_COUNT,
                fields.len(),
            ));
        }

        if fields.len() > PERSON_FIELD_COUNT {
            // Extra trailing columns are tolerated for forward compatibility
            debug!(
                "Line {}: ignoring {} extra trailing fields",
                origin.number,
                fields.len() - PERSON_FIELD_COUNT
            );
        }

        let mut fields = fields.into_iter();
        Ok(Person {
            id: fields.next().unwrap_or_default(),
            first_name: fields.next().unwrap_or_default(),
            last_name: fields.next().unwrap_or_default(),
            address: fields.next().unwrap_or_default(),
        })
    }
}
