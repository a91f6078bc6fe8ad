//! Operational states of the dispensing device.
//!
//! Exactly one state is active at any time. States are plain values with
//! no back-reference to the device that owns them, so every method here is
//! pure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The mutually exclusive operating modes of the device.
///
/// # Example
///
/// ```rust
/// use gumball::core::DeviceState;
///
/// let state = DeviceState::HasCoin;
/// assert_eq!(state.name(), "HasCoin");
/// assert!(state.holds_payment());
/// assert!(!state.is_terminal());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum DeviceState {
    /// Waiting for payment.
    NoCoin,
    /// Payment received, waiting for the crank.
    HasCoin,
    /// Crank turned, an item is on its way out.
    Dispensing,
    /// Inventory exhausted.
    SoldOut,
}

impl DeviceState {
    /// Every state, in declaration order.
    pub const ALL: [DeviceState; 4] = [
        DeviceState::NoCoin,
        DeviceState::HasCoin,
        DeviceState::Dispensing,
        DeviceState::SoldOut,
    ];

    /// The state a device starts in for the given inventory.
    ///
    /// ```rust
    /// use gumball::core::DeviceState;
    ///
    /// assert_eq!(DeviceState::initial(0), DeviceState::SoldOut);
    /// assert_eq!(DeviceState::initial(3), DeviceState::NoCoin);
    /// ```
    pub fn initial(inventory: u32) -> Self {
        if inventory == 0 {
            Self::SoldOut
        } else {
            Self::NoCoin
        }
    }

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoCoin => "NoCoin",
            Self::HasCoin => "HasCoin",
            Self::Dispensing => "Dispensing",
            Self::SoldOut => "SoldOut",
        }
    }

    /// Whether no further transitions can leave this state.
    ///
    /// Refilling is not modeled, so `SoldOut` is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::SoldOut)
    }

    /// Whether the device is holding the caller's payment.
    pub fn holds_payment(&self) -> bool {
        matches!(self, Self::HasCoin | Self::Dispensing)
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
