//! Application constants for the roster importer
//!
//! This module contains the wire-format characters, record shape, and
//! default tuning values used throughout the importer.

// =============================================================================
// Record Format
// =============================================================================

/// Field separator for roster files
pub const FIELD_SEPARATOR: char = ',';

/// Quote character used for field quoting and escaping
pub const QUOTE: char = '"';

/// Number of positional fields a person record requires (id, first name,
/// last name, address); extra trailing fields are tolerated
pub const PERSON_FIELD_COUNT: usize = 4;

// =============================================================================
// Pipeline Defaults
// =============================================================================

/// Upper bound on the auto-detected parallel worker count
///
/// Repair and parsing are cheap per line; past this point extra workers
/// only add queue contention.
pub const MAX_AUTO_WORKERS: usize = 8;

/// Bounded channel capacity between workers and the output stage
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

/// Maximum number of per-line error messages retained in statistics
pub const DEFAULT_MAX_ERROR_SAMPLES: usize = 100;

// =============================================================================
// Reporting
// =============================================================================

/// Progress bar template shared by all commands
pub const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}";

/// Success-rate threshold below which a run is reported as degraded
pub const SUCCESS_RATE_THRESHOLD: f64 = 90.0;
