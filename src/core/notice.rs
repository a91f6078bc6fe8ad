//! Typed feedback returned from every action.
//!
//! Vending hardware has no exception mechanism, only a display. A rejected
//! action is therefore a normal outcome carrying a reason, not an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Observable result of a single action or dispense step.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Notice {
    /// Coin accepted, crank is now live.
    PaymentAccepted,
    /// Held coin returned on request.
    PaymentRefunded,
    /// Coin returned immediately because the device is sold out.
    PaymentReturned,
    /// Crank turned with payment held.
    CrankTurned,
    /// One item left the chute.
    Dispensed { remaining: u32 },
    /// The dispense step found no inventory.
    NothingDispensed,
    /// The action had no effect.
    Rejected(RejectReason),
}

impl Notice {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaymentAccepted => f.write_str("You inserted a coin"),
            Self::PaymentRefunded => f.write_str("Coin returned"),
            Self::PaymentReturned => f.write_str("Machine is sold out, coin returned"),
            Self::CrankTurned => f.write_str("You turned the crank"),
            Self::Dispensed { remaining } => {
                write!(f, "An item comes rolling out ({remaining} left)")
            }
            Self::NothingDispensed => f.write_str("Nothing to dispense"),
            Self::Rejected(reason) => fmt::Display::fmt(reason, f),
        }
    }
}

/// Why an action had no effect.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum RejectReason {
    /// A second coin while one is already held.
    PaymentAlreadyHeld,
    /// Eject with no coin in the machine.
    NoPaymentHeld,
    /// Crank turned before paying.
    PaymentRequired,
    /// Payment action while an item is being dispensed.
    DispenseInProgress,
    /// Crank turned again mid-dispense.
    AlreadyTurning,
    /// Crank turned on an empty machine.
    SoldOut,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::PaymentAlreadyHeld => "You can't insert another coin",
            Self::NoPaymentHeld => "You haven't inserted a coin",
            Self::PaymentRequired => "You turned, but there's no coin",
            Self::DispenseInProgress => "Please wait, we're already giving you an item",
            Self::AlreadyTurning => "Turning twice doesn't get you another item",
            Self::SoldOut => "You turned, but there are no items",
        };
        f.write_str(msg)
    }
}
