//! Coverage for the per-group reducer builder.

use actions::{build_reducer, Action, ActionDef, ActionGroup, LogSink, RecordingSink};
use serde_json::{json, Value};

fn incrementing(def_name: &str, kind: &str, step: i64) -> ActionDef {
    ActionDef::new(def_name, kind)
        .reduce(move |state: Value, _: &Action| json!(state.as_i64().unwrap_or(0) + step))
        .creates_own_kind()
}

/// An undefined slice state resolves to the declared initial value, even
/// when no definition matches the action.
#[test]
fn missing_state_resolves_to_init() {
    let group = ActionGroup::new("counter").init(json!(41));
    let reducer = build_reducer(&group, &LogSink);

    assert_eq!(reducer(None, &Action::new("X")), json!(41));
}

/// With two definitions sharing a kind, the one declared first wins.
#[test]
fn first_matching_definition_wins() {
    let group = ActionGroup::new("counter")
        .init(json!(0))
        .action(incrementing("bump_small", "BUMP", 1))
        .action(incrementing("bump_large", "BUMP", 100));
    let reducer = build_reducer(&group, &LogSink);

    assert_eq!(reducer(Some(json!(0)), &Action::new("BUMP")), json!(1));
}

/// An unmatched action returns the incoming state unchanged.
#[test]
fn unmatched_action_is_identity() {
    let group = ActionGroup::new("counter")
        .init(json!(0))
        .action(incrementing("bump", "BUMP", 1));
    let reducer = build_reducer(&group, &LogSink);

    let state = json!({ "nested": [1, 2, 3] });
    assert_eq!(
        reducer(Some(state.clone()), &Action::new("UNKNOWN")),
        state
    );
}

/// Incomplete definitions never become handlers: dispatching their kind
/// falls through to identity, and the anomaly is reported as advisory.
#[test]
fn incomplete_definitions_are_skipped() {
    let sink = RecordingSink::new();
    let group = ActionGroup::new("counter")
        .init(json!(0))
        .action(ActionDef::new("broken", "BUMP").creates_own_kind())
        .action(ActionDef::new("orphan", "SET").reduce(|_, action| action.payload.clone()));
    let reducer = build_reducer(&group, &sink);

    assert_eq!(reducer(Some(json!(5)), &Action::new("BUMP")), json!(5));
    assert_eq!(reducer(Some(json!(5)), &Action::new("SET")), json!(5));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|event| matches!(
        event,
        actions::Diagnostic::IncompleteAction { state_name, .. } if state_name == "counter"
    )));
}

/// Reduce functions receive the dispatched action, payload included.
#[test]
fn reduce_sees_action_payload() {
    let group = ActionGroup::new("profile")
        .init(json!({ "name": "" }))
        .action(
            ActionDef::new("rename", "RENAME")
                .reduce(|_, action: &Action| action.payload.clone())
                .creates_own_kind(),
        );
    let reducer = build_reducer(&group, &LogSink);

    let next = reducer(
        None,
        &Action::with_payload("RENAME", json!({ "name": "ada" })),
    );
    assert_eq!(next, json!({ "name": "ada" }));
}
