//! Output sinks for imported person records
//!
//! A sink accepts a finite stream of `Person` values and writes them to a
//! file or stdout in one of three formats: CSV (clean, canonically quoted),
//! JSON lines, or a human-readable console listing. The core pipeline
//! imposes no ordering contract on the sink; ordering, when requested, is
//! restored upstream by the resequencer.
//!
//! ## Architecture
//!
//! - [`writer`] - Format dispatch and record serialization
//! - [`stats`] - Writing statistics

pub mod stats;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use stats::WritingStats;
pub use writer::{RecordSink, SinkFormat};
