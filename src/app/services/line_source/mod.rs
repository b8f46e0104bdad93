//! Physical line acquisition for roster files
//!
//! The line source owns the record-boundary policy that makes the repair
//! pipeline correct: lines are split on physical line terminators only,
//! never merged based on quote balance, and each line carries its 1-based
//! position in the file. The header line, when present, is consumed here so
//! that only record lines reach the parser.
//!
//! ## Architecture
//!
//! - [`reader`] - File reading, header handling, and ordinal assignment

pub mod reader;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use reader::{LineSource, LoadedLines};
