//! Core device types.
//!
//! This module contains the pure vocabulary of the controller:
//! - The `DeviceState` enum
//! - Public `Action`s and history-only `Trigger`s
//! - Typed `Notice` feedback
//! - Immutable transition history
//!
//! Nothing here mutates a device; the `machine` module applies these values.

mod action;
mod history;
mod notice;
mod state;

pub use action::{Action, Trigger};
pub use history::{StateHistory, TransitionRecord};
pub use notice::{Notice, RejectReason};
pub use state::DeviceState;
