//! Builds one slice reducer from an action-group declaration.

use crate::def::ReduceFn;
use crate::diag::{Diagnostic, DiagnosticSink};
use crate::group::ActionGroup;
use serde_json::Value;
use smallvec::SmallVec;
use std::sync::Arc;
use store::{Action, ActionKind, Reducer};

type Handler = (ActionKind, ReduceFn);

/// Builds the pure reducer for one declared slice.
///
/// Complete definitions become handlers in declaration order; incomplete
/// ones are reported through `diag` and skipped. The returned reducer
/// resolves an absent state to the group's initial value, applies the
/// first handler whose kind equals the action's, and otherwise returns the
/// incoming state untouched (moved through, not copied).
pub fn build_reducer(group: &ActionGroup, diag: &dyn DiagnosticSink) -> Reducer<Value> {
    let mut handlers: SmallVec<[Handler; 8]> = SmallVec::new();
    for def in group.actions() {
        match (def.reduce_fn(), def.creator_fn()) {
            (Some(reduce), Some(_)) => handlers.push((def.kind().clone(), Arc::clone(reduce))),
            (reduce, creator) => diag.report(Diagnostic::IncompleteAction {
                state_name: group.state_name().to_owned(),
                definition: def.clone(),
                missing: match (reduce, creator) {
                    (None, None) => "its reduce function and creator",
                    (None, Some(_)) => "its reduce function",
                    _ => "its creator",
                },
            }),
        }
    }

    let init = group.init_state().clone();
    Box::new(move |state: Option<Value>, action: &Action| {
        let state = state.unwrap_or_else(|| init.clone());
        for (kind, reduce) in &handlers {
            if *kind == action.kind {
                return reduce(state, action);
            }
        }
        state
    })
}
