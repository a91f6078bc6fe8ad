//! Gumball Session
//!
//! This example walks a small device through a scripted session and prints
//! the notice for every action.
//!
//! Key concepts:
//! - Rejected actions are notices, not errors
//! - Turning the crank dispenses in the same call
//! - The device sells out exactly when inventory reaches zero
//!
//! Run with: RUST_LOG=gumball=debug cargo run --example gumball_session

use gumball::core::Action;
use gumball::{ConfigError, Device, DeviceConfig};

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Gumball Session ===\n");

    let config = DeviceConfig::from_json(r#"{ "label": "demo", "inventory": 2 }"#)?;
    let mut device = Device::from_config(config)?;
    println!(
        "Device '{}' loaded with {} items ({})\n",
        device.label(),
        device.inventory_count(),
        device.state()
    );

    let script = [
        Action::Activate,
        Action::InsertPayment,
        Action::InsertPayment,
        Action::EjectPayment,
        Action::EjectPayment,
        Action::InsertPayment,
        Action::Activate,
        Action::InsertPayment,
        Action::Activate,
        Action::InsertPayment,
        Action::Activate,
    ];

    for action in script {
        for notice in device.apply(action) {
            println!("{action:>15}: {notice}");
        }
        println!("{:>15}  state={} items={}", "", device.state(), device.inventory_count());
    }

    if let Some(history) = device.history() {
        println!("\nPath:");
        for state in history.path() {
            println!("  {state}");
        }
        println!("Items dispensed: {}", history.dispense_count());
    }

    println!("\n=== Session Complete ===");
    Ok(())
}
