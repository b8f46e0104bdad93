//! Data models for roster import processing
//!
//! This module contains the core data structures for representing raw input
//! lines and the structured person records parsed from them.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Raw Input Line
// =============================================================================

/// One physical line of input together with its position in the source file
///
/// The line number is 1-based and counts physical lines as they appear in the
/// file, including the header line when one is present. Each `RawLine` is one
/// logical record by policy: the line source never merges physical lines
/// based on quote balance, so a `RawLine` is consumed exactly once and its
/// ordinal is stable for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// 1-based position of this line in the source file
    pub number: usize,

    /// Verbatim line text, without the trailing line terminator
    pub text: String,
}

impl RawLine {
    /// Create a raw line from its ordinal and text
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

// =============================================================================
// Person Record
// =============================================================================

/// A structured roster record with four positional fields
///
/// Created by the record parser from exactly one repaired line; immutable
/// once constructed. All four fields are always present: the parser rejects
/// lines that cannot fill them rather than letting one field silently absorb
/// another's content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Person {
    /// Record identifier, kept verbatim as text
    pub id: String,

    /// First (given) name
    pub first_name: String,

    /// Last (family) name
    pub last_name: String,

    /// Postal address, commas preserved when quoted in the source
    pub address: String,
}

impl Person {
    /// Create a new person record
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.id, self.first_name, self.last_name, self.address
        )
    }
}
