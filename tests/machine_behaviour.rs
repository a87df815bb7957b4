//! End-to-end behaviour of the state machine through its public API.

use retrace::{ConfigError, ConfigProblem, HistoryMove, StateMachine, TransitionError};

type Machine = StateMachine<String, String>;

fn s(name: &str) -> String {
    name.to_string()
}

fn go_machine() -> Machine {
    StateMachine::from_json(
        r#"{
            "initial": "A",
            "states": {
                "A": { "transitions": { "go": "B" } },
                "B": { "transitions": {} }
            }
        }"#,
    )
    .unwrap()
}

fn chain_machine() -> Machine {
    StateMachine::from_json(
        r#"{
            "initial": "A",
            "states": {
                "A": { "transitions": { "e1": "B" } },
                "B": { "transitions": { "e2": "C" } },
                "C": { "transitions": {} }
            }
        }"#,
    )
    .unwrap()
}

#[test]
fn state_after_construction_is_initial() {
    let machine = go_machine();
    assert_eq!(machine.state(), "A");
}

#[test]
fn missing_config_fails() {
    assert!(matches!(Machine::new(None), Err(ConfigError::Missing)));
    assert!(matches!(Machine::from_json("null"), Err(ConfigError::Missing)));
    assert!(matches!(Machine::from_json(""), Err(ConfigError::Missing)));
}

#[test]
fn change_state_rejects_unknown_state() {
    let mut machine = go_machine();

    let result = machine.change_state("nope");

    assert_eq!(result, Err(TransitionError::UnknownState { state: s("nope") }));
    assert_eq!(machine.state(), "A");
    assert!(!machine.can_undo());
}

#[test]
fn trigger_resolves_event() {
    let mut machine = go_machine();

    machine.trigger("go").unwrap();

    assert_eq!(machine.state(), "B");
}

#[test]
fn undo_redo_round_trip() {
    let mut machine = go_machine();
    machine.trigger("go").unwrap();

    assert!(machine.undo().moved());
    assert_eq!(machine.state(), "A");

    assert!(machine.redo().moved());
    assert_eq!(machine.state(), "B");
}

#[test]
fn direct_jump_invalidates_redo() {
    let mut machine = go_machine();
    machine.trigger("go").unwrap();
    assert!(machine.undo().moved());
    assert_eq!(machine.state(), "A");

    machine.change_state("B").unwrap();

    assert!(!machine.redo().moved());
}

#[test]
fn fresh_machine_has_no_history() {
    let mut machine = go_machine();

    assert_eq!(machine.undo(), HistoryMove::NoHistory);
    assert_eq!(machine.state(), "A");
    assert_eq!(machine.redo(), HistoryMove::NoHistory);
    assert_eq!(machine.state(), "A");
}

#[test]
fn states_filtered_by_event() {
    let machine: Machine = StateMachine::from_json(
        r#"{
            "initial": "A",
            "states": {
                "A": { "transitions": { "x": "B" } },
                "B": { "transitions": { "y": "A" } },
                "C": { "transitions": {} }
            }
        }"#,
    )
    .unwrap();

    assert_eq!(machine.states(Some(&s("x"))), vec![&s("A")]);

    let mut all: Vec<&String> = machine.states(None);
    all.sort();
    assert_eq!(all, vec![&s("A"), &s("B"), &s("C")]);
}

#[test]
fn reset_returns_to_initial_and_keeps_history() {
    let mut machine = chain_machine();
    machine.trigger("e1").unwrap();
    machine.trigger("e2").unwrap();
    assert!(machine.undo().moved());

    machine.reset();

    assert_eq!(machine.state(), "A");
    assert_eq!(machine.history().undo_stack(), [s("A")]);
    assert_eq!(machine.history().redo_stack(), [s("C")]);

    // The kept entries are still usable after the reset
    assert_eq!(
        machine.redo(),
        HistoryMove::Moved {
            from: s("A"),
            to: s("C"),
        }
    );
}

#[test]
fn redo_does_not_refill_undo() {
    // A -e1-> B -e2-> C
    //   undo: [A, B], redo: [],  current C
    // undo(): undo: [A], redo: [C], current B
    // redo(): undo: [A], redo: [],  current C   (B is not pushed back)
    // undo(): undo: [],  redo: [C], current A
    let mut machine = chain_machine();
    machine.trigger("e1").unwrap();
    machine.trigger("e2").unwrap();

    assert!(machine.undo().moved());
    assert!(machine.redo().moved());
    assert!(machine.undo().moved());

    assert_eq!(machine.state(), "A");
    assert!(!machine.can_undo());
    assert_eq!(machine.history().redo_stack(), [s("C")]);
}

#[test]
fn clear_history_drops_both_stacks() {
    let mut machine = chain_machine();
    machine.trigger("e1").unwrap();
    machine.trigger("e2").unwrap();
    assert!(machine.undo().moved());

    machine.clear_history();

    assert_eq!(machine.state(), "B");
    assert_eq!(machine.undo(), HistoryMove::NoHistory);
    assert_eq!(machine.redo(), HistoryMove::NoHistory);
}

#[test]
fn failed_operations_leave_everything_untouched() {
    let mut machine = chain_machine();
    machine.trigger("e1").unwrap();
    machine.trigger("e2").unwrap();
    assert!(machine.undo().moved());
    let before = machine.history().clone();

    assert!(machine.trigger("e1").is_err());
    assert!(machine.change_state("Z").is_err());

    assert_eq!(machine.state(), "B");
    assert_eq!(machine.history(), &before);
}

#[test]
fn undo_after_direct_jumps_walks_back_in_order() {
    let mut machine = chain_machine();
    machine.change_state("C").unwrap();
    machine.change_state("A").unwrap();
    machine.change_state("B").unwrap();

    let mut visited = Vec::new();
    while let HistoryMove::Moved { to, .. } = machine.undo() {
        visited.push(to);
    }

    assert_eq!(visited, vec![s("A"), s("C"), s("A")]);
}

#[test]
fn invalid_config_reports_all_problems() {
    let result = Machine::from_json(
        r#"{
            "initial": "start",
            "states": {
                "A": { "transitions": { "go": "B" } }
            }
        }"#,
    );

    let err = result.unwrap_err();
    assert_eq!(
        err.problems(),
        [
            ConfigProblem::UnknownInitialState { state: s("start") },
            ConfigProblem::UnknownTarget {
                state: s("A"),
                event: s("go"),
                target: s("B"),
            },
        ]
    );
}

#[test]
fn declaration_order_is_preserved() {
    let machine: Machine = StateMachine::from_json(
        r#"{
            "initial": "zulu",
            "states": {
                "zulu": { "transitions": { "next": "alpha" } },
                "alpha": { "transitions": { "next": "mike" } },
                "mike": { "transitions": { "next": "zulu" } }
            }
        }"#,
    )
    .unwrap();

    assert_eq!(
        machine.all_states(),
        vec![&s("zulu"), &s("alpha"), &s("mike")]
    );
    assert_eq!(
        machine.states_with(&s("next")),
        vec![&s("zulu"), &s("alpha"), &s("mike")]
    );
}

#[test]
fn machine_owns_its_table() {
    let json = r#"{
        "initial": "A",
        "states": {
            "A": { "transitions": { "go": "B" } },
            "B": {}
        }
    }"#;
    let mut config = retrace::MachineConfig::<String, String>::from_json(json).unwrap();
    let mut machine = StateMachine::from_config(config.clone()).unwrap();

    // Editing the caller's copy has no effect on the machine
    config.states.clear();

    assert_eq!(machine.all_states().len(), 2);
    assert_eq!(machine.trigger("go").unwrap(), "B");
}

#[test]
fn redeclared_state_is_rejected_before_construction() {
    let result = Machine::from_json(
        r#"{
            "initial": "A",
            "states": {
                "A": { "transitions": {} },
                "B": { "transitions": {} },
                "A": { "transitions": { "go": "B" } }
            }
        }"#,
    );

    assert_eq!(
        result.unwrap_err().problems(),
        [ConfigProblem::DuplicateState { state: s("A") }]
    );
}
