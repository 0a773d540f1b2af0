//! Document Workflow State Machine
//!
//! An editorial workflow loaded from its JSON configuration.
//!
//! Key concepts:
//! - Loading the nested JSON configuration shape
//! - Event-driven transitions with rejection paths
//! - Undo/redo as review navigation, reset back to draft
//! - Inspecting the transition log
//!
//! Run with: cargo run --example document_workflow

use gearshift::StateMachine;

const WORKFLOW: &str = r#"{
    "initial": "draft",
    "states": {
        "draft":     { "transitions": { "submit": "review" } },
        "review":    { "transitions": { "approve": "published", "reject": "draft" } },
        "published": { "transitions": { "retract": "draft" } }
    },
    "history_limit": 10
}"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Document Workflow ===\n");

    let mut doc = StateMachine::from_json(WORKFLOW).expect("workflow config parses");

    println!("States: {:?}", doc.states(None));
    println!("States that can 'reject': {:?}", doc.states(Some("reject")));
    println!("Starting in: {}\n", doc.current_state());

    println!("Submitting for review, then approving:");
    doc.trigger("submit").unwrap();
    println!("  -> {}", doc.current_state());
    doc.trigger("approve").unwrap();
    println!("  -> {}", doc.current_state());

    println!("\nSecond thoughts - undo the approval:");
    doc.undo();
    println!("  <- {}", doc.current_state());

    println!("Rejecting instead invalidates the redo path:");
    doc.trigger("reject").unwrap();
    println!("  -> {} (redo available: {})", doc.current_state(), doc.can_redo());

    println!("\nAn event undefined for the current state is refused:");
    match doc.trigger("approve") {
        Ok(()) => unreachable!(),
        Err(err) => println!("  {err}"),
    }

    println!("\nTransition log:");
    for record in doc.transition_log() {
        match &record.event {
            Some(event) => println!("  {} -> {} (on '{}')", record.from, record.to, event),
            None => println!("  {} -> {} (direct)", record.from, record.to),
        }
    }

    println!("\nReset returns to draft but keeps history:");
    doc.reset();
    println!("  state: {}, undo available: {}", doc.current_state(), doc.can_undo());

    doc.clear_history();
    println!("After clear_history, undo available: {}", doc.can_undo());

    println!("\n=== Example Complete ===");
}
