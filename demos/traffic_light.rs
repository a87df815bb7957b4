//! Traffic Light State Machine
//!
//! This demo shows a cyclic machine built from typed identifiers.
//!
//! Key concepts:
//! - `state_enum!` / `event_enum!` for typed states and events
//! - Event-driven transitions with `trigger`
//! - Listing the states an event applies to
//!
//! Run with: cargo run --example traffic_light

use retrace::builder::StateMachineBuilder;
use retrace::core::State;
use retrace::{event_enum, state_enum, StateDefinition};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Light {
        Red,
        Green,
        Yellow,
        Flashing,
    }
}

event_enum! {
    enum Signal {
        Timer,
        Fault,
        Repair,
    }
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("retrace=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Traffic Light State Machine ===\n");

    let mut machine = StateMachineBuilder::<Light, Signal>::new()
        .initial(Light::Red)
        .state(
            Light::Red,
            StateDefinition::new()
                .on(Signal::Timer, Light::Green)
                .on(Signal::Fault, Light::Flashing),
        )
        .state(
            Light::Green,
            StateDefinition::new()
                .on(Signal::Timer, Light::Yellow)
                .on(Signal::Fault, Light::Flashing),
        )
        .state(
            Light::Yellow,
            StateDefinition::new()
                .on(Signal::Timer, Light::Red)
                .on(Signal::Fault, Light::Flashing),
        )
        .state(
            Light::Flashing,
            StateDefinition::new().on(Signal::Repair, Light::Red),
        )
        .build()
        .expect("traffic light configuration is valid");

    println!("Initial state: {}\n", machine.state().name());

    println!("Cycling:");
    for _ in 0..4 {
        let from = *machine.state();
        let to = machine.trigger(Signal::Timer).expect("every light has a timer");
        println!("  {} -> {}", from.name(), to.name());
    }

    println!("\nA fault can happen from:");
    for light in machine.states(Some(&Signal::Fault)) {
        println!("  {}", light.name());
    }

    machine.trigger(Signal::Fault).expect("fault is valid from green");
    println!("\nAfter fault: {}", machine.state().name());

    match machine.trigger(Signal::Timer) {
        Ok(_) => println!("Timer advanced a flashing light?"),
        Err(e) => println!("Timer ignored: {}", e),
    }

    machine.trigger(Signal::Repair).expect("repair is valid while flashing");
    println!("After repair: {}", machine.state().name());

    println!("\n=== Demo Complete ===");
}
