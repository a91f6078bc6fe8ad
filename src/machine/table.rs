//! The transition table as pure functions keyed by state.
//!
//! `on_action` covers the three public actions. `on_dispense` is the
//! internal step run after every crank; it is crate-private and its only
//! caller is `Device::activate`.

use crate::core::{Action, DeviceState, Notice, RejectReason};

/// Outcome of applying one action or dispense step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Step {
    pub next: DeviceState,
    pub inventory: u32,
    pub notice: Notice,
}

impl Step {
    fn go(next: DeviceState, inventory: u32, notice: Notice) -> Self {
        Self {
            next,
            inventory,
            notice,
        }
    }

    fn stay(state: DeviceState, inventory: u32, reason: RejectReason) -> Self {
        Self::go(state, inventory, Notice::Rejected(reason))
    }
}

/// Apply a public action. Total over every state/action pair.
pub(crate) fn on_action(state: DeviceState, action: Action, inventory: u32) -> Step {
    use Action::*;
    use DeviceState::*;

    match (state, action) {
        (NoCoin, InsertPayment) => Step::go(HasCoin, inventory, Notice::PaymentAccepted),
        (NoCoin, EjectPayment) => Step::stay(state, inventory, RejectReason::NoPaymentHeld),
        (NoCoin, Activate) => Step::stay(state, inventory, RejectReason::PaymentRequired),

        (HasCoin, InsertPayment) => {
            Step::stay(state, inventory, RejectReason::PaymentAlreadyHeld)
        }
        (HasCoin, EjectPayment) => Step::go(NoCoin, inventory, Notice::PaymentRefunded),
        (HasCoin, Activate) => Step::go(Dispensing, inventory, Notice::CrankTurned),

        // Transient within a single activate(); kept total regardless.
        (Dispensing, InsertPayment | EjectPayment) => {
            Step::stay(state, inventory, RejectReason::DispenseInProgress)
        }
        (Dispensing, Activate) => Step::stay(state, inventory, RejectReason::AlreadyTurning),

        (SoldOut, InsertPayment) => Step::go(SoldOut, inventory, Notice::PaymentReturned),
        (SoldOut, EjectPayment) => Step::stay(state, inventory, RejectReason::NoPaymentHeld),
        (SoldOut, Activate) => Step::stay(state, inventory, RejectReason::SoldOut),
    }
}

/// The internal dispense step. Returns `None` outside `Dispensing`.
pub(crate) fn on_dispense(state: DeviceState, inventory: u32) -> Option<Step> {
    if state != DeviceState::Dispensing {
        return None;
    }

    let step = match inventory.checked_sub(1) {
        Some(remaining) => Step::go(
            DeviceState::initial(remaining),
            remaining,
            Notice::Dispensed { remaining },
        ),
        None => Step::go(DeviceState::SoldOut, 0, Notice::NothingDispensed),
    };
    Some(step)
}
