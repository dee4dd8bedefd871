//! End-to-end scenarios over small hand-built topologies.

use statem::builder::{StateBuilder, TopologyBuilder};
use statem::core::{Event, Outcome, StateId, Topology, Transition};
use statem::engine::{Machine, MachineConfig};
use statem::event_kinds;
use statem::validation::ValidationBuilder;
use std::sync::{Arc, Mutex};

event_kinds! {
    enum Input {
        Keyboard,
        Fault,
    }
}

type Log = Arc<Mutex<Vec<String>>>;

fn take(log: &Log) -> Vec<String> {
    std::mem::take(&mut *log.lock().unwrap())
}

fn key(c: char) -> Event<char> {
    Event::new(Input::Keyboard, c)
}

fn is_char(expected: &char, event: &Event<char>) -> bool {
    *expected == event.payload
}

fn logged(log: &Log, name: &'static str) -> StateBuilder<&'static str, char, char> {
    let enter = Arc::clone(log);
    let exit = Arc::clone(log);
    StateBuilder::new(name)
        .on_enter(move |data: &&str, _: &Event<char>| {
            enter.lock().unwrap().push(format!("enter {data}"));
        })
        .on_exit(move |data: &&str, _: &Event<char>| {
            exit.lock().unwrap().push(format!("exit {data}"));
        })
}

fn say(log: &Log, text: &'static str) -> impl Fn(&&'static str, &Event<char>, &&'static str) + Send + Sync {
    let log = Arc::clone(log);
    move |from: &&'static str, _: &Event<char>, to: &&'static str| {
        log.lock().unwrap().push(format!("{text} ({from} -> {to})"));
    }
}

struct Keyboard {
    topology: Topology<&'static str, char, char>,
    log: Log,
    idle: StateId,
    h: StateId,
    i: StateId,
    a: StateId,
    error: StateId,
}

/// Recognises "hin" and "han"; '!' resets through the group, any other key
/// is reported and also returns to idle.
fn keyboard() -> Keyboard {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let mut builder = TopologyBuilder::new();
    let group = builder.declare("group");
    let idle = builder.declare("idle");
    let h = builder.declare("h");
    let i = builder.declare("i");
    let a = builder.declare("a");
    let error = builder.add_state("error", logged(&log, "error"));

    builder
        .define(
            group,
            logged(&log, "group")
                .entry(idle)
                .transition(
                    Transition::on(Input::Keyboard)
                        .when('!', is_char)
                        .action(say(&log, "reset"))
                        .to(group),
                )
                .transition(
                    Transition::on(Input::Keyboard)
                        .action(say(&log, "unrecognised"))
                        .to(idle),
                )
                .transition(Transition::on(Input::Fault)),
        )
        .unwrap()
        .define(
            idle,
            logged(&log, "idle")
                .parent(group)
                .transition(Transition::on(Input::Keyboard).when('h', is_char).to(h)),
        )
        .unwrap()
        .define(
            h,
            logged(&log, "h")
                .parent(group)
                .transition(Transition::on(Input::Keyboard).when('a', is_char).to(a))
                .transition(Transition::on(Input::Keyboard).when('i', is_char).to(i)),
        )
        .unwrap()
        .define(
            i,
            logged(&log, "i").parent(group).transition(
                Transition::on(Input::Keyboard)
                    .when('n', is_char)
                    .action(say(&log, "hi"))
                    .to(idle),
            ),
        )
        .unwrap()
        .define(
            a,
            logged(&log, "a").parent(group).transition(
                Transition::on(Input::Keyboard)
                    .when('n', is_char)
                    .action(say(&log, "ha-ha"))
                    .to(idle),
            ),
        )
        .unwrap();

    Keyboard {
        topology: builder.build().unwrap(),
        log,
        idle,
        h,
        i,
        a,
        error,
    }
}

#[test]
fn keyboard_topology_is_well_formed() {
    let k = keyboard();
    let rules = ValidationBuilder::new()
        .acyclic_parents()
        .acyclic_entries()
        .terminal_error_state(k.error)
        .build();

    assert!(rules.check(&k.topology).is_success());
}

#[test]
fn han_sequence_returns_to_idle() {
    let k = keyboard();
    let mut machine = Machine::new(&k.topology, k.idle, k.error);

    let outcomes: Vec<_> = "han".chars().map(|c| machine.handle_event(&key(c))).collect();

    assert_eq!(
        outcomes,
        vec![Outcome::StateChanged, Outcome::StateChanged, Outcome::StateChanged]
    );
    assert_eq!(machine.current_state(), Some(k.idle));
    assert_eq!(machine.previous_state(), Some(k.a));
    assert_eq!(
        take(&k.log),
        vec![
            "exit idle",
            "enter h",
            "exit h",
            "enter a",
            "exit a",
            "ha-ha (a -> idle)",
            "enter idle",
        ]
    );
}

#[test]
fn hin_sequence_greets() {
    let k = keyboard();
    let mut machine = Machine::new(&k.topology, k.idle, k.error);

    for c in "hi".chars() {
        machine.handle_event(&key(c));
    }
    assert_eq!(machine.current_state(), Some(k.i));
    take(&k.log);

    assert_eq!(machine.handle_event(&key('n')), Outcome::StateChanged);
    assert_eq!(take(&k.log), vec!["exit i", "hi (i -> idle)", "enter idle"]);
}

#[test]
fn unrecognised_key_in_idle_loops_to_itself() {
    let k = keyboard();
    let mut machine = Machine::new(&k.topology, k.idle, k.error);

    assert_eq!(machine.handle_event(&key('x')), Outcome::StateLoopSelf);
    assert_eq!(machine.current_state(), Some(k.idle));
    assert_eq!(machine.previous_state(), Some(k.idle));
    assert_eq!(take(&k.log), vec!["unrecognised (idle -> idle)"]);
}

#[test]
fn unrecognised_key_mid_word_returns_to_idle() {
    let k = keyboard();
    let mut machine = Machine::new(&k.topology, k.h, k.error);

    assert_eq!(machine.handle_event(&key('z')), Outcome::StateChanged);
    assert_eq!(machine.current_state(), Some(k.idle));
    assert_eq!(
        take(&k.log),
        vec!["exit h", "unrecognised (h -> idle)", "enter idle"]
    );
}

#[test]
fn reset_into_group_lands_on_entry_child() {
    let k = keyboard();
    let mut machine = Machine::new(&k.topology, k.a, k.error);

    assert_eq!(machine.handle_event(&key('!')), Outcome::StateChanged);
    assert_eq!(machine.current_state(), Some(k.idle));

    let log = take(&k.log);
    assert_eq!(log, vec!["exit a", "reset (a -> idle)", "enter idle"]);
    assert!(!log.iter().any(|line| line == "enter group"));
}

#[test]
fn earlier_transitions_win() {
    let k = keyboard();
    let mut machine = Machine::new(&k.topology, k.h, k.error);

    // 'a' and 'i' are both valid in `h`; each picks its own destination.
    assert_eq!(machine.handle_event(&key('a')), Outcome::StateChanged);
    assert_eq!(machine.current_state(), Some(k.a));

    machine.init(k.h, k.error);
    assert_eq!(machine.handle_event(&key('i')), Outcome::StateChanged);
    assert_eq!(machine.current_state(), Some(k.i));
}

#[test]
fn fault_without_destination_enters_error_state_from_anywhere() {
    let k = keyboard();

    for start in [k.idle, k.h, k.i, k.a] {
        let mut machine = Machine::new(&k.topology, start, k.error);

        assert_eq!(
            machine.handle_event(&Event::new(Input::Fault, '\0')),
            Outcome::ErrorStateReached
        );
        assert_eq!(machine.current_state(), Some(k.error));
        assert_eq!(machine.previous_state(), Some(start));
        assert_eq!(take(&k.log), vec!["enter error"]);

        assert_eq!(machine.handle_event(&key('h')), Outcome::NoChange);
        assert!(machine.is_stopped());
    }
}

#[test]
fn reinit_after_error_behaves_like_fresh_machine() {
    let k = keyboard();
    let mut machine = Machine::new(&k.topology, k.h, k.error);
    machine.handle_event(&Event::new(Input::Fault, '\0'));
    take(&k.log);

    machine.init(k.idle, k.error);
    assert_eq!(machine.current_state(), Some(k.idle));
    assert_eq!(machine.previous_state(), None);
    assert!(take(&k.log).is_empty());

    let mut fresh = Machine::new(&k.topology, k.idle, k.error);
    for c in "hax".chars() {
        assert_eq!(machine.handle_event(&key(c)), fresh.handle_event(&key(c)));
        assert_eq!(machine.current_state(), fresh.current_state());
    }
}

#[test]
fn machines_share_one_topology() {
    let k = keyboard();
    let mut first = Machine::new(&k.topology, k.idle, k.error);
    let mut second = Machine::new(&k.topology, k.idle, k.error);

    first.handle_event(&key('h'));

    assert_eq!(first.current_state(), Some(k.h));
    assert_eq!(second.current_state(), Some(k.idle));
    assert_eq!(second.handle_event(&key('!')), Outcome::StateLoopSelf);
}

#[test]
fn history_follows_the_word() {
    let k = keyboard();
    let config = MachineConfig {
        record_history: true,
        history_limit: Some(2),
    };
    let mut machine = Machine::with_config(&k.topology, k.idle, k.error, &config);

    for c in "hin".chars() {
        machine.handle_event(&key(c));
    }

    let history = machine.history().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history.get_path(), vec![k.h, k.i, k.idle]);
}

#[test]
fn final_state_reached_through_normal_transition() {
    const STOP: i32 = 7;

    let mut builder = TopologyBuilder::<(), ()>::new();
    let done = builder.add_state("done", StateBuilder::new(()));
    let error = builder.add_state("error", StateBuilder::new(()));
    let running = builder.add_state(
        "running",
        StateBuilder::new(()).transition(Transition::on(STOP).to(done)),
    );
    let topology = builder.build().unwrap();

    let mut machine = Machine::new(&topology, running, error);
    assert!(!machine.is_stopped());
    assert_eq!(machine.handle_event(&Event::signal(STOP)), Outcome::FinalStateReached);
    assert!(machine.is_stopped());
    assert_eq!(machine.handle_event(&Event::signal(STOP)), Outcome::NoChange);
}
