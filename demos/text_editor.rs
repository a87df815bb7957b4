//! Document Editor Modes
//!
//! This demo walks an editor's mode machine forward and back through its
//! history, loaded from a JSON document.
//!
//! Key concepts:
//! - Loading configuration with `from_json`
//! - Direct jumps with `change_state`
//! - Undo/redo, including the case where redo does not create a new undo
//!   entry
//! - `reset` keeping history, `clear_history` dropping it
//!
//! Run with: RUST_LOG=retrace=debug cargo run --example text_editor

use retrace::{HistoryMove, StateMachine};
use tracing_subscriber::EnvFilter;

const MODES: &str = r#"{
    "initial": "normal",
    "states": {
        "normal": { "transitions": { "i": "insert", "v": "visual", ":": "command" } },
        "insert": { "transitions": { "esc": "normal" } },
        "visual": { "transitions": { "esc": "normal", "d": "normal" } },
        "command": { "transitions": { "esc": "normal", "enter": "normal" } }
    }
}"#;

fn report(label: &str, machine: &StateMachine<String, String>) {
    println!(
        "  {:<24} mode={:<8} undo={:?} redo={:?}",
        label,
        machine.state(),
        machine.history().undo_stack(),
        machine.history().redo_stack()
    );
}

fn describe(step: HistoryMove<String>) -> String {
    match step {
        HistoryMove::Moved { from, to } => format!("{} -> {}", from, to),
        HistoryMove::NoHistory => "nothing to do".to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Editor Mode History ===\n");

    let mut machine: StateMachine<String, String> = StateMachine::from_json(MODES)?;
    report("start", &machine);

    machine.trigger("i")?;
    report("trigger(i)", &machine);
    machine.trigger("esc")?;
    report("trigger(esc)", &machine);
    machine.trigger("v")?;
    report("trigger(v)", &machine);

    println!("\nWalking back:");
    println!("  undo: {}", describe(machine.undo()));
    report("after undo", &machine);
    println!("  redo: {}", describe(machine.redo()));
    report("after redo", &machine);
    println!("  undo: {}", describe(machine.undo()));
    report("after second undo", &machine);

    println!("\nJumping straight to command mode drops the redo path:");
    machine.change_state("command")?;
    report("change_state(command)", &machine);
    println!("  redo: {}", describe(machine.redo()));

    println!("\nUnknown input is rejected without side effects:");
    if let Err(e) = machine.trigger("x") {
        println!("  {}", e);
    }
    report("after rejected trigger", &machine);

    println!("\nReset keeps history, clear drops it:");
    machine.reset();
    report("reset()", &machine);
    machine.clear_history();
    report("clear_history()", &machine);

    println!("\nModes reachable by 'esc':");
    for mode in machine.states(Some(&"esc".to_string())) {
        println!("  {}", mode);
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
