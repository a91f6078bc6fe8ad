//! The imperative shell around the pure core.
//!
//! `Device` owns the active state and inventory and routes each action
//! through the transition table. The table itself stays crate-private so
//! the dispense step cannot be reached except through `Device::activate`.

mod device;
mod table;

pub use device::Device;
