//! The dispensing device: authoritative state, inventory, and dispatcher.

use crate::config::{ConfigError, DeviceConfig};
use crate::core::{Action, DeviceState, Notice, StateHistory, TransitionRecord, Trigger};
use crate::machine::table::{self, Step};
use chrono::Utc;
use tracing::{debug, info, warn};

/// A coin-operated dispensing device.
///
/// Every action is total: it always returns a [`Notice`] describing what
/// happened, and rejected actions leave state and inventory untouched.
///
/// # Example
///
/// ```rust
/// use gumball::core::{DeviceState, Notice};
/// use gumball::Device;
///
/// let mut device = Device::new(2);
/// assert_eq!(device.insert_payment(), Notice::PaymentAccepted);
///
/// let notices = device.activate();
/// assert_eq!(notices, vec![Notice::CrankTurned, Notice::Dispensed { remaining: 1 }]);
/// assert_eq!(device.state(), DeviceState::NoCoin);
/// assert_eq!(device.inventory_count(), 1);
/// ```
///
/// The dispense step exists only inside [`Device::activate`]:
///
/// ```compile_fail
/// let mut device = gumball::Device::new(1);
/// device.dispense_internal();
/// ```
#[derive(Clone, Debug)]
pub struct Device {
    label: String,
    state: DeviceState,
    inventory: u32,
    dispensed: u32,
    history: Option<StateHistory>,
}

impl Device {
    /// Create a device holding `inventory` items.
    ///
    /// Starts in `SoldOut` when empty, otherwise in `NoCoin`. History keeps
    /// the latest [`DeviceConfig::DEFAULT_HISTORY_LIMIT`] records.
    pub fn new(inventory: u32) -> Self {
        Self {
            label: DeviceConfig::DEFAULT_LABEL.to_string(),
            state: DeviceState::initial(inventory),
            inventory,
            dispensed: 0,
            history: Some(StateHistory::with_limit(
                DeviceConfig::DEFAULT_HISTORY_LIMIT,
            )),
        }
    }

    /// Create a device from a validated configuration.
    ///
    /// All configuration violations are reported together.
    pub fn from_config(config: DeviceConfig) -> Result<Self, ConfigError> {
        config.check()?;

        let history = config
            .record_history
            .then(|| StateHistory::with_limit(config.effective_history_limit()));

        Ok(Self {
            label: config.label,
            state: DeviceState::initial(config.inventory),
            inventory: config.inventory,
            dispensed: 0,
            history,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get current state (pure)
    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Items remaining. No side effect.
    pub fn inventory_count(&self) -> u32 {
        self.inventory
    }

    /// Recorded transitions, if history is enabled.
    pub fn history(&self) -> Option<&StateHistory> {
        self.history.as_ref()
    }

    /// Items released over the device's lifetime, independent of history.
    pub fn dispensed_count(&self) -> u32 {
        self.dispensed
    }

    pub fn insert_payment(&mut self) -> Notice {
        self.perform(Action::InsertPayment)
    }

    pub fn eject_payment(&mut self) -> Notice {
        self.perform(Action::EjectPayment)
    }

    /// Turn the crank, then run the dispense step on whatever state is now
    /// active.
    ///
    /// Returns the crank notice, followed by the dispense notice when the
    /// dispense step acted.
    pub fn activate(&mut self) -> Vec<Notice> {
        let mut notices = vec![self.perform(Action::Activate)];
        notices.extend(self.dispense_internal());
        notices
    }

    /// Dispatch a public action by value.
    pub fn apply(&mut self, action: Action) -> Vec<Notice> {
        match action {
            Action::InsertPayment => vec![self.insert_payment()],
            Action::EjectPayment => vec![self.eject_payment()],
            Action::Activate => self.activate(),
        }
    }

    fn perform(&mut self, action: Action) -> Notice {
        let step = table::on_action(self.state, action, self.inventory);
        if let Some(reason) = step.notice.reason() {
            debug!(
                device = %self.label,
                state = %self.state,
                %action,
                %reason,
                "action rejected"
            );
        }
        self.commit(Trigger::Action(action), step);
        step.notice
    }

    fn dispense_internal(&mut self) -> Option<Notice> {
        let step = table::on_dispense(self.state, self.inventory)?;
        match step.notice {
            Notice::Dispensed { remaining } => {
                self.dispensed += 1;
                info!(device = %self.label, remaining, "item dispensed");
            }
            Notice::NothingDispensed => {
                warn!(device = %self.label, "dispense step found no inventory");
            }
            _ => {}
        }
        self.commit(Trigger::Dispense, step);
        Some(step.notice)
    }

    fn commit(&mut self, trigger: Trigger, step: Step) {
        let from = self.state;
        if step.next == from && step.inventory == self.inventory {
            return;
        }

        debug!(
            device = %self.label,
            %from,
            to = %step.next,
            %trigger,
            remaining = step.inventory,
            "transition"
        );

        self.inventory = step.inventory;
        self.set_state(step.next);

        if let Some(history) = self.history.as_mut() {
            history.push(TransitionRecord {
                from,
                to: step.next,
                trigger,
                notice: step.notice,
                inventory: step.inventory,
                timestamp: Utc::now(),
            });
        }
    }

    fn set_state(&mut self, next: DeviceState) {
        if next == DeviceState::SoldOut && self.state != DeviceState::SoldOut {
            info!(device = %self.label, "sold out");
        }
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RejectReason;

    #[test]
    fn new_device_starts_by_inventory() {
        assert_eq!(Device::new(0).state(), DeviceState::SoldOut);
        assert_eq!(Device::new(4).state(), DeviceState::NoCoin);
        assert_eq!(Device::new(4).inventory_count(), 4);
        assert_eq!(Device::new(4).label(), DeviceConfig::DEFAULT_LABEL);
    }

    #[test]
    fn single_item_sale_sells_out() {
        let mut device = Device::new(1);
        device.insert_payment();
        let notices = device.activate();

        assert_eq!(
            notices,
            vec![Notice::CrankTurned, Notice::Dispensed { remaining: 0 }]
        );
        assert_eq!(device.state(), DeviceState::SoldOut);
        assert_eq!(device.inventory_count(), 0);
        assert_eq!(device.dispensed_count(), 1);
    }

    #[test]
    fn crank_without_payment_runs_no_dispense() {
        let mut device = Device::new(3);
        let notices = device.activate();

        assert_eq!(
            notices,
            vec![Notice::Rejected(RejectReason::PaymentRequired)]
        );
        assert_eq!(device.state(), DeviceState::NoCoin);
        assert_eq!(device.inventory_count(), 3);
    }

    #[test]
    fn rejected_actions_are_not_recorded() {
        let mut device = Device::new(3);
        device.eject_payment();
        device.activate();

        assert_eq!(device.history().map(StateHistory::len), Some(0));
    }

    #[test]
    fn sale_records_full_path() {
        let mut device = Device::new(3);
        device.insert_payment();
        device.activate();

        let history = device.history().unwrap();
        assert_eq!(
            history.path(),
            vec![
                DeviceState::NoCoin,
                DeviceState::HasCoin,
                DeviceState::Dispensing,
                DeviceState::NoCoin,
            ]
        );
        let triggers: Vec<_> = history.records().map(|r| r.trigger).collect();
        assert_eq!(
            triggers,
            vec![
                Trigger::Action(Action::InsertPayment),
                Trigger::Action(Action::Activate),
                Trigger::Dispense,
            ]
        );
    }

    #[test]
    fn empty_dispense_forces_sold_out() {
        let mut device = Device {
            label: "test".to_string(),
            state: DeviceState::Dispensing,
            inventory: 0,
            dispensed: 0,
            history: Some(StateHistory::new()),
        };

        assert_eq!(device.dispense_internal(), Some(Notice::NothingDispensed));
        assert_eq!(device.state(), DeviceState::SoldOut);
        assert_eq!(device.inventory_count(), 0);
        assert_eq!(device.dispensed_count(), 0);
    }

    #[test]
    fn dispense_step_is_inert_outside_dispensing() {
        let mut device = Device::new(2);
        assert_eq!(device.dispense_internal(), None);
        assert_eq!(device.inventory_count(), 2);
    }

    #[test]
    fn apply_dispatches_each_action() {
        let mut device = Device::new(2);
        assert_eq!(
            device.apply(Action::InsertPayment),
            vec![Notice::PaymentAccepted]
        );
        assert_eq!(device.apply(Action::Activate).len(), 2);
        assert_eq!(
            device.apply(Action::EjectPayment),
            vec![Notice::Rejected(RejectReason::NoPaymentHeld)]
        );
    }

    #[test]
    fn from_config_respects_history_settings() {
        let config = DeviceConfig {
            label: "lobby".to_string(),
            inventory: 2,
            record_history: false,
            history_limit: None,
        };
        let mut device = Device::from_config(config).unwrap();
        device.insert_payment();

        assert_eq!(device.label(), "lobby");
        assert!(device.history().is_none());
        assert_eq!(device.dispensed_count(), 0);

        let config = DeviceConfig {
            inventory: 5,
            history_limit: Some(2),
            ..DeviceConfig::default()
        };
        let mut device = Device::from_config(config).unwrap();
        device.insert_payment();
        device.activate();

        assert_eq!(device.history().map(StateHistory::len), Some(2));
    }

    #[test]
    fn from_config_rejects_invalid_config() {
        let config = DeviceConfig {
            label: String::new(),
            ..DeviceConfig::default()
        };
        assert!(matches!(
            Device::from_config(config),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn default_history_stays_bounded() {
        let mut device = Device::new(1);
        let cycles = DeviceConfig::DEFAULT_HISTORY_LIMIT * 5;

        for _ in 0..cycles {
            device.insert_payment();
            device.eject_payment();
        }

        let history = device.history().unwrap();
        assert_eq!(history.len(), DeviceConfig::DEFAULT_HISTORY_LIMIT);
        assert_eq!(history.last().map(|r| r.to), Some(DeviceState::NoCoin));
        assert_eq!(device.inventory_count(), 1);
    }

    #[test]
    fn dispensed_count_outlives_history_limit() {
        let config = DeviceConfig {
            inventory: 3,
            history_limit: Some(2),
            ..DeviceConfig::default()
        };
        let mut device = Device::from_config(config).unwrap();

        for _ in 0..3 {
            device.insert_payment();
            device.activate();
        }

        assert_eq!(device.dispensed_count(), 3);
        assert_eq!(device.history().map(StateHistory::dispense_count), Some(1));
        assert_eq!(device.state(), DeviceState::SoldOut);
    }
}
