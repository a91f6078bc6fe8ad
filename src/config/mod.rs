//! Device configuration with accumulating validation.
//!
//! Validation uses Stillwater's `Validation` type so that every problem in
//! a configuration is reported at once instead of one per attempt.
//!
//! # Example
//!
//! ```rust
//! use gumball::config::DeviceConfig;
//! use gumball::Device;
//!
//! let config = DeviceConfig::from_json(r#"{ "label": "lobby", "inventory": 12 }"#).unwrap();
//! assert!(config.validate().is_success());
//!
//! let device = Device::from_config(config).unwrap();
//! assert_eq!(device.label(), "lobby");
//! assert_eq!(device.inventory_count(), 12);
//! ```

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{ConfigError, ConfigViolation};

/// Settings for constructing a [`Device`](crate::Device).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceConfig {
    /// Name attached to log events
    pub label: String,

    /// Items loaded at construction
    pub inventory: u32,

    /// Whether transitions are recorded
    pub record_history: bool,

    /// Maximum retained history records; `DEFAULT_HISTORY_LIMIT` when `None`
    pub history_limit: Option<usize>,
}

impl DeviceConfig {
    pub const DEFAULT_LABEL: &'static str = "gumball";
    pub const MAX_LABEL_LEN: usize = 64;
    pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

    /// The retention limit a device built from this configuration uses.
    pub fn effective_history_limit(&self) -> usize {
        self.history_limit.unwrap_or(Self::DEFAULT_HISTORY_LIMIT)
    }

    /// Parse a JSON configuration. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate the configuration, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        let label = self.label.trim();
        checks.push(if label.is_empty() {
            Validation::fail(ConfigViolation::EmptyLabel)
        } else {
            Validation::success(())
        });

        let len = self.label.chars().count();
        checks.push(if len > Self::MAX_LABEL_LEN {
            Validation::fail(ConfigViolation::LabelTooLong {
                len,
                max: Self::MAX_LABEL_LEN,
            })
        } else {
            Validation::success(())
        });

        if let Some(limit) = self.history_limit {
            if limit == 0 {
                checks.push(Validation::fail(ConfigViolation::ZeroHistoryLimit));
            }
            if !self.record_history {
                checks.push(Validation::fail(ConfigViolation::LimitWithoutHistory));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            label: Self::DEFAULT_LABEL.to_string(),
            inventory: 0,
            record_history: true,
            history_limit: None,
        }
    }
}
