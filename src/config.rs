//! Configuration management for roster import runs
//!
//! Provides the run configuration shared by the CLI commands and the
//! processing pipeline: input/output locations, worker counts, the per-line
//! error policy, and the optional record transform.

use crate::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_MAX_ERROR_SAMPLES, MAX_AUTO_WORKERS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Worker count suited to this machine
///
/// One worker per logical CPU, capped at [`MAX_AUTO_WORKERS`].
pub fn detect_workers() -> usize {
    num_cpus::get().clamp(1, MAX_AUTO_WORKERS)
}

/// Policy applied when a line fails to parse
///
/// Parse faults are line-scoped: one bad line never corrupts the processing
/// of its neighbours. Whether a bad line ends the run is a job-level decision
/// captured here, not a concern of the sanitizer or parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Log the failure, record it in statistics, and continue
    SkipAndLog,
    /// Abort the whole run on the first failed line
    AbortOnFirst,
}

/// Optional per-record transform applied after parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transform {
    /// Pass records through unchanged
    None,
    /// Upper-case first and last names
    UppercaseNames,
}

/// Global configuration for a roster import run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Input roster file path
    pub input_path: PathBuf,

    /// Output path; `None` writes to stdout
    pub output_path: Option<PathBuf>,

    /// Number of parallel line-processing workers
    pub workers: usize,

    /// Bounded channel capacity between workers and the output stage
    pub channel_capacity: usize,

    /// What to do when a line fails to parse
    pub error_policy: ErrorPolicy,

    /// Per-record transform applied after parsing
    pub transform: Transform,

    /// Emit records in source-line order
    pub ordered_output: bool,

    /// Treat the first line of the input as a header and skip it
    pub has_header: bool,

    /// Maximum per-line error messages retained in statistics
    pub max_error_samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            output_path: None,
            workers: detect_workers(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            error_policy: ErrorPolicy::SkipAndLog,
            transform: Transform::None,
            ordered_output: true,
            has_header: true,
            max_error_samples: DEFAULT_MAX_ERROR_SAMPLES,
        }
    }
}

impl Config {
    /// Create a configuration for the given input file
    pub fn new(input_path: PathBuf) -> Self {
        Self {
            input_path,
            ..Default::default()
        }
    }

    /// Set the output path (`None` writes to stdout)
    pub fn with_output_path(mut self, output_path: Option<PathBuf>) -> Self {
        self.output_path = output_path;
        self
    }

    /// Set the worker count, clamped to at least one
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Set the channel capacity between workers and the output stage
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    /// Set the per-line error policy
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Set the per-record transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Enable or disable output resequencing by source line order
    pub fn with_ordered_output(mut self, ordered: bool) -> Self {
        self.ordered_output = ordered;
        self
    }

    /// Declare whether the input starts with a header line
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Validate the configuration before a run
    pub fn validate(&self) -> crate::Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(crate::Error::configuration("input path is required"));
        }
        if self.workers == 0 {
            return Err(crate::Error::configuration(
                "worker count must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!((1..=MAX_AUTO_WORKERS).contains(&config.workers));
        assert_eq!(config.error_policy, ErrorPolicy::SkipAndLog);
        assert_eq!(config.transform, Transform::None);
        assert!(config.ordered_output);
        assert!(config.has_header);
    }

    #[test]
    fn test_builder_methods() {
        let config = Config::new(PathBuf::from("people.csv"))
            .with_workers(8)
            .with_error_policy(ErrorPolicy::AbortOnFirst)
            .with_transform(Transform::UppercaseNames)
            .with_ordered_output(false)
            .with_header(false);

        assert_eq!(config.input_path, PathBuf::from("people.csv"));
        assert_eq!(config.workers, 8);
        assert_eq!(config.error_policy, ErrorPolicy::AbortOnFirst);
        assert_eq!(config.transform, Transform::UppercaseNames);
        assert!(!config.ordered_output);
        assert!(!config.has_header);
    }

    #[test]
    fn test_workers_clamped_to_one() {
        let config = Config::default().with_workers(0);
        assert_eq!(config.workers, 1);
    }

    #[test]
    fn test_validate_rejects_empty_input() {
        let config = Config::default();
        assert!(config.validate().is_err());
    }
}
