//! Actions that drive the device.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An externally callable operation on the device.
///
/// The internal dispense step is deliberately absent: it can only happen as
/// a consequence of [`Action::Activate`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Action {
    /// Put a coin in the slot.
    InsertPayment,
    /// Ask for the held coin back.
    EjectPayment,
    /// Turn the crank.
    Activate,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::InsertPayment, Action::EjectPayment, Action::Activate];

    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertPayment => "insert_payment",
            Self::EjectPayment => "eject_payment",
            Self::Activate => "activate",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// What caused a recorded transition.
///
/// Triggers only appear in [`StateHistory`](crate::core::StateHistory)
/// records. The device accepts [`Action`]s, never triggers, so recording a
/// `Dispense` does not make the dispense step callable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Trigger {
    Action(Action),
    Dispense,
}

impl From<Action> for Trigger {
    fn from(action: Action) -> Self {
        Trigger::Action(action)
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action(action) => fmt::Display::fmt(action, f),
            Self::Dispense => f.write_str("dispense"),
        }
    }
}
