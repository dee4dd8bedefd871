//! Keyboard Recogniser
//!
//! This example recognises the words "hin" and "han" typed one key at a time.
//!
//! Key concepts:
//! - A group state shares its transitions with every child
//! - '!' resets through the group, which lands back on its entry child
//! - Unrecognised keys are caught by the group and reported
//! - A fault event without destination routes the machine to its error state
//! - Checkpoints let a machine resume on the same topology
//!
//! Run with: RUST_LOG=statem=debug cargo run --example keyboard

use statem::builder::{StateBuilder, TopologyBuilder};
use statem::checkpoint::Checkpoint;
use statem::core::{Event, Outcome, Transition};
use statem::engine::{Machine, MachineConfig};
use statem::event_kinds;
use statem::validation::ValidationBuilder;
use tracing_subscriber::EnvFilter;

event_kinds! {
    enum Input {
        Keyboard,
        Fault,
    }
}

fn is_char(expected: &char, event: &Event<char>) -> bool {
    *expected == event.payload
}

fn announce(data: &&'static str, _: &Event<char>) {
    println!("  -> entered {}", data);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("=== Keyboard Recogniser ===\n");

    let mut builder = TopologyBuilder::<&'static str, char, char>::new();
    let group = builder.declare("group");
    let idle = builder.declare("idle");
    let h = builder.declare("h");
    let i = builder.declare("i");
    let a = builder.declare("a");
    let error = builder.add_state("error", StateBuilder::new("error").on_enter(announce));

    builder
        .define(
            group,
            StateBuilder::new("group")
                .entry(idle)
                .transition(
                    Transition::on(Input::Keyboard)
                        .when('!', is_char)
                        .action(|_: &&'static str, _: &Event<char>, _: &&'static str| {
                            println!("  reset")
                        })
                        .to(group),
                )
                .transition(
                    Transition::on(Input::Keyboard)
                        .action(|_: &&'static str, e: &Event<char>, _: &&'static str| {
                            println!("  unrecognised key {:?}", e.payload)
                        })
                        .to(idle),
                )
                .transition(Transition::on(Input::Fault)),
        )?
        .define(
            idle,
            StateBuilder::new("idle")
                .parent(group)
                .on_enter(announce)
                .transition(Transition::on(Input::Keyboard).when('h', is_char).to(h)),
        )?
        .define(
            h,
            StateBuilder::new("h")
                .parent(group)
                .on_enter(announce)
                .transition(Transition::on(Input::Keyboard).when('a', is_char).to(a))
                .transition(Transition::on(Input::Keyboard).when('i', is_char).to(i)),
        )?
        .define(
            i,
            StateBuilder::new("i")
                .parent(group)
                .on_enter(announce)
                .transition(
                    Transition::on(Input::Keyboard)
                        .when('n', is_char)
                        .action(|_: &&'static str, _: &Event<char>, _: &&'static str| {
                            println!("  Hi!")
                        })
                        .to(idle),
                ),
        )?
        .define(
            a,
            StateBuilder::new("a")
                .parent(group)
                .on_enter(announce)
                .transition(
                    Transition::on(Input::Keyboard)
                        .when('n', is_char)
                        .action(|_: &&'static str, _: &Event<char>, _: &&'static str| {
                            println!("  Ha-ha")
                        })
                        .to(idle),
                ),
        )?;

    let rules = ValidationBuilder::new()
        .acyclic_parents()
        .acyclic_entries()
        .terminal_error_state(error)
        .build();
    let topology = builder.build_checked(&rules)?;
    println!("Topology: {} states, validated\n", topology.len());

    let mut machine = Machine::with_config(&topology, idle, error, &MachineConfig::with_history());

    for key in "hin".chars().chain("hxan!".chars()) {
        let outcome = machine.handle_event(&Event::new(Input::Keyboard, key));
        print_step(&machine, &format!("{:?}", key), outcome);
    }

    println!("\n--- Checkpoint ---");
    let json = machine.checkpoint().to_json()?;
    let mut resumed = Machine::restore(&topology, Checkpoint::from_json(&json)?)?;
    println!("  resumed in {}", state_name(&resumed));

    println!("\n--- Fault ---");
    let outcome = resumed.handle_event(&Event::new(Input::Fault, '\0'));
    print_step(&resumed, "fault", outcome);
    println!("  stopped: {}", resumed.is_stopped());

    if let Some(history) = resumed.history() {
        let path: Vec<_> = history
            .get_path()
            .into_iter()
            .map(|id| topology[id].name().to_string())
            .collect();
        println!("\nPath: {}", path.join(" -> "));
    }

    Ok(())
}

fn print_step(machine: &Machine<'_, &'static str, char, char>, input: &str, outcome: Outcome) {
    println!("{:>7} | {:<18} | now in {}", input, outcome.to_string(), state_name(machine));
}

fn state_name(machine: &Machine<'_, &'static str, char, char>) -> String {
    machine
        .current_node()
        .map(|node| node.name().to_string())
        .unwrap_or_else(|| "<none>".to_string())
}
