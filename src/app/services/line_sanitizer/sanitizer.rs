//! Quote classification and escaping for a single roster line
//!
//! A quote survives untouched only in a delimiter-legal position: as half of
//! an escape pair, immediately after a field separator or line start, or
//! immediately before a field separator or the end of the line (trailing
//! whitespace allowed). Every other quote is stray and gets doubled into an
//! escaped quote so the tokenizer reads it as literal data.

use crate::constants::{FIELD_SEPARATOR, QUOTE};
use std::borrow::Cow;

const QUOTE_BYTE: u8 = QUOTE as u8;
const SEPARATOR_BYTE: u8 = FIELD_SEPARATOR as u8;

/// Repair stray quotes in one line, returning the input unchanged when clean
///
/// The scan classifies every quote against the ORIGINAL line's neighbours,
/// left to right; escaping decisions never influence one another. This makes
/// the function idempotent: quotes inserted by a previous pass sit adjacent
/// to the quote they escape and are therefore legal on a second pass.
pub fn clean(line: &str) -> Cow<'_, str> {
    if !line.contains(QUOTE) {
        return Cow::Borrowed(line);
    }

    let stray_count = line
        .char_indices()
        .filter(|&(i, c)| c == QUOTE && !is_delimiter_legal(line, i))
        .count();
    if stray_count == 0 {
        return Cow::Borrowed(line);
    }

    let mut repaired = String::with_capacity(line.len() + stray_count);
    for (i, c) in line.char_indices() {
        repaired.push(c);
        if c == QUOTE && !is_delimiter_legal(line, i) {
            repaired.push(QUOTE);
        }
    }
    Cow::Owned(repaired)
}

/// Whether the quote at byte index `idx` sits in a delimiter-legal position
///
/// Byte comparisons are safe here: quote and separator are ASCII, and no
/// UTF-8 continuation byte can collide with them.
fn is_delimiter_legal(line: &str, idx: usize) -> bool {
    let bytes = line.as_bytes();

    // Half of an escape pair
    if idx > 0 && bytes[idx - 1] == QUOTE_BYTE {
        return true;
    }
    if idx + 1 < bytes.len() && bytes[idx + 1] == QUOTE_BYTE {
        return true;
    }

    // Opening position: line start or immediately after a separator
    if idx == 0 || bytes[idx - 1] == SEPARATOR_BYTE {
        return true;
    }

    // Closing position: immediately before a separator, or nothing but
    // trailing whitespace up to the end of the line
    match bytes.get(idx + 1) {
        None => true,
        Some(&SEPARATOR_BYTE) => true,
        Some(_) => line[idx + 1..].chars().all(char::is_whitespace),
    }
}
