//! Gumball: a pure functional controller for a coin-operated dispensing device
//!
//! The controller follows a "pure core, imperative shell" layout. The
//! transition table is a set of pure functions keyed by a state enum; the
//! [`Device`] owns that enum plus the inventory count and applies each
//! outcome.
//!
//! # Core Concepts
//!
//! - **State**: one of `NoCoin`, `HasCoin`, `Dispensing`, `SoldOut`
//! - **Actions**: `insert_payment`, `eject_payment`, `activate`; the dispense
//!   step is internal and only runs as part of `activate`
//! - **Notices**: typed feedback returned from every action, never an error
//! - **History**: immutable record of transitions over time
//!
//! # Example
//!
//! ```rust
//! use gumball::core::{DeviceState, Notice, RejectReason};
//! use gumball::Device;
//!
//! let mut device = Device::new(5);
//!
//! // Cranking without paying does nothing
//! assert_eq!(
//!     device.activate(),
//!     vec![Notice::Rejected(RejectReason::PaymentRequired)]
//! );
//!
//! device.insert_payment();
//! device.activate();
//! assert_eq!(device.inventory_count(), 4);
//! assert_eq!(device.state(), DeviceState::NoCoin);
//! ```

pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use config::{ConfigError, DeviceConfig};
pub use self::core::{Action, DeviceState, Notice, RejectReason, StateHistory};
pub use machine::Device;
