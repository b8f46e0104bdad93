//! Stray-quote repair for malformed roster lines
//!
//! Roster exports in the wild contain quote characters in positions where
//! they cannot legally open, close, or escape a CSV field. Fed to a naive
//! quote-tracking reader, such a quote flips the reader's quote state and
//! makes it swallow the rest of the line (or, worse, following lines) into
//! one corrupted record. This module neutralizes those quotes line by line,
//! before tokenization, so that every physical line stays exactly one
//! logical record.
//!
//! ## Architecture
//!
//! - [`sanitizer`] - The quote classification scan and escaping pass
//!
//! Sanitization is a pure function of a single line; there is no cross-line
//! state, so lines can be repaired concurrently without coordination.

pub mod sanitizer;

#[cfg(test)]
pub mod tests;

// Re-export main entry point for easy access
pub use sanitizer::clean;
