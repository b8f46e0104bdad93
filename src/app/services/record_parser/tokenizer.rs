//! Quote-state tokenizer for a single roster line
//!
//! Splits a line on field separators while honouring double-quote quoting:
//! a separator inside a quoted field is literal data, and a doubled quote
//! collapses to one literal quote in either state. Each assembled field is
//! trimmed of leading and trailing whitespace. The scan is an explicit
//! two-state machine rather than a regular expression so that every
//! transition is auditable and testable in isolation.

use crate::constants::{FIELD_SEPARATOR, QUOTE};
use thiserror::Error;

/// Structural faults the tokenizer can hit
///
/// After sanitization the only reachable fault is a quoted field opened in a
/// delimiter-legal position and never closed before the end of the line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("unterminated quoted field opened at column {column}")]
    UnterminatedQuote { column: usize },
}

/// Tokenizer state: outside or inside a quoted field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Unquoted,
    Quoted,
}

/// Split one line into trimmed fields
///
/// State transitions:
/// - quote while `Unquoted` with an empty (or whitespace-only) field so far
///   opens a quoted field; accumulated whitespace is dropped
/// - `""` collapses to a literal quote in either state
/// - a lone quote in the middle of an unquoted field is kept as literal data
/// - separator while `Unquoted` ends the current field
/// - end of line closes the current field; a bare line yields one empty field
///
/// Errors only when the line ends while a quoted field is still open.
pub fn tokenize(line: &str) -> std::result::Result<Vec<String>, TokenizeError> {
    let mut fields = Vec::new();
    let mut buffer = String::new();
    let mut state = QuoteState::Unquoted;
    let mut open_column = 0;
    let mut column = 0;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        column += 1;
        match state {
            QuoteState::Unquoted => {
                if c == QUOTE {
                    if buffer.trim().is_empty() {
                        // Opening quote; drop any leading whitespace
                        buffer.clear();
                        state = QuoteState::Quoted;
                        open_column = column;
                    } else if chars.peek() == Some(&QUOTE) {
                        chars.next();
                        column += 1;
                        buffer.push(QUOTE);
                    } else {
                        // Lone mid-field quote, kept verbatim
                        buffer.push(QUOTE);
                    }
                } else if c == FIELD_SEPARATOR {
                    fields.push(buffer.trim().to_string());
                    buffer.clear();
                } else {
                    buffer.push(c);
                }
            }
            QuoteState::Quoted => {
                if c == QUOTE {
                    if chars.peek() == Some(&QUOTE) {
                        chars.next();
                        column += 1;
                        buffer.push(QUOTE);
                    } else {
                        state = QuoteState::Unquoted;
                    }
                } else {
                    buffer.push(c);
                }
            }
        }
    }

    if state == QuoteState::Quoted {
        return Err(TokenizeError::UnterminatedQuote {
            column: open_column,
        });
    }

    fields.push(buffer.trim().to_string());
    Ok(fields)
}
