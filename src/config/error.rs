//! Configuration error types.

use thiserror::Error;

/// A single reason a configuration cannot build a device.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Device label must not be empty")]
    EmptyLabel,

    #[error("Device label is {len} characters, maximum is {max}")]
    LabelTooLong { len: usize, max: usize },

    #[error("History limit must be at least 1")]
    ZeroHistoryLimit,

    #[error("History limit set while history recording is disabled")]
    LimitWithoutHistory,
}

/// Errors that can occur when loading or applying a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration text could not be parsed
    #[error("Configuration parse failed: {0}")]
    Parse(String),

    /// Configuration parsed but failed validation; carries every violation
    #[error("Configuration invalid: {}", summarize(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn summarize(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
