//! Traffic Light State Machine
//!
//! A simple cyclic machine driven by a single "advance" event.
//!
//! Key concepts:
//! - Cyclic event transitions (the sequence repeats)
//! - Direct state changes for out-of-band overrides
//! - Walking back through history with undo
//!
//! Run with: cargo run --example traffic_light

use gearshift::{machine_config, StateMachine};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let config = machine_config! {
        initial: "red",
        states: {
            "red":    { "advance" => "green" },
            "green":  { "advance" => "yellow" },
            "yellow": { "advance" => "red" },
        }
    }
    .expect("literal config is complete");

    let mut light = StateMachine::new(config);
    println!("States: {:?}", light.states(None));
    println!("Initial state: {}\n", light.current_state());

    println!("Advancing through a full cycle:");
    for _ in 0..3 {
        light.trigger("advance").unwrap();
        println!("  -> {}", light.current_state());
    }

    println!("\nEmergency override (direct change to red):");
    light.trigger("advance").unwrap();
    light.change_state("red").unwrap();
    println!("  -> {}", light.current_state());

    println!("\nWalking back through history:");
    while light.undo() {
        println!("  <- {}", light.current_state());
    }

    println!("\nRedo is available after undo:");
    light.redo();
    println!("  -> {}", light.current_state());

    println!("\n=== Example Complete ===");
}
