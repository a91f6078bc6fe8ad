//! Property-based tests for the device controller.
//!
//! These tests use proptest to drive devices through many randomly
//! generated action sequences and check the invariants after every step.

use gumball::core::{Action, DeviceState, Notice, RejectReason};
use gumball::Device;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_action()(variant in 0..3u8) -> Action {
        match variant {
            0 => Action::InsertPayment,
            1 => Action::EjectPayment,
            _ => Action::Activate,
        }
    }
}

fn arbitrary_script() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(arbitrary_action(), 0..200)
}

proptest! {
    #[test]
    fn inventory_never_increases(initial in 0..20u32, script in arbitrary_script()) {
        let mut device = Device::new(initial);
        let mut previous = device.inventory_count();

        for action in script {
            device.apply(action);
            let current = device.inventory_count();
            prop_assert!(current <= previous);
            prop_assert!(previous - current <= 1);
            previous = current;
        }
    }

    #[test]
    fn inventory_plus_dispensed_is_conserved(
        initial in 0..20u32,
        script in arbitrary_script()
    ) {
        let mut device = Device::new(initial);
        let mut dispensed = 0u32;

        for action in script {
            for notice in device.apply(action) {
                if matches!(notice, Notice::Dispensed { .. }) {
                    dispensed += 1;
                }
            }
            prop_assert_eq!(device.inventory_count() + dispensed, initial);
        }

        prop_assert_eq!(device.dispensed_count(), dispensed);
    }

    #[test]
    fn sold_out_exactly_when_empty(initial in 0..10u32, script in arbitrary_script()) {
        let mut device = Device::new(initial);
        prop_assert_eq!(device.state() == DeviceState::SoldOut, initial == 0);

        for action in script {
            device.apply(action);
            prop_assert_eq!(
                device.state() == DeviceState::SoldOut,
                device.inventory_count() == 0
            );
        }
    }

    #[test]
    fn dispensing_is_never_observable(initial in 0..10u32, script in arbitrary_script()) {
        let mut device = Device::new(initial);

        for action in script {
            device.apply(action);
            prop_assert_ne!(device.state(), DeviceState::Dispensing);
        }
    }

    #[test]
    fn only_activate_dispenses(initial in 1..10u32, script in arbitrary_script()) {
        let mut device = Device::new(initial);

        for action in script {
            let before = device.state();
            let notices = device.apply(action);
            let dispensed = notices
                .iter()
                .any(|n| matches!(n, Notice::Dispensed { .. }));

            if dispensed {
                prop_assert_eq!(action, Action::Activate);
                prop_assert_eq!(before, DeviceState::HasCoin);
            }
        }
    }

    #[test]
    fn eject_is_idempotent_without_payment(initial in 1..10u32, repeats in 1..5usize) {
        let mut device = Device::new(initial);

        for _ in 0..repeats {
            prop_assert_eq!(
                device.eject_payment(),
                Notice::Rejected(RejectReason::NoPaymentHeld)
            );
            prop_assert_eq!(device.state(), DeviceState::NoCoin);
            prop_assert_eq!(device.inventory_count(), initial);
        }
    }

    #[test]
    fn history_path_ends_at_current_state(initial in 0..10u32, script in arbitrary_script()) {
        let mut device = Device::new(initial);

        for action in script {
            device.apply(action);
        }

        let history = device.history().unwrap();
        if let Some(last) = history.path().last() {
            prop_assert_eq!(*last, device.state());
        }
    }
}
