//! Assembles declared groups into a single store.

use crate::diag::{Diagnostic, DiagnosticSink, LogSink};
use crate::group::ActionGroup;
use crate::reduce::build_reducer;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use store::{combine_reducers, Middleware, Reducer, SliceMap, Store};
use thiserror::Error;

/// Error produced by the strict assembly entry points.
#[derive(Debug, Error)]
pub enum AssembleError {
    /// Two groups declare the same slice name.
    #[error("duplicate state name: {0}")]
    DuplicateSlice(String),

    /// A definition is missing its reduce function or creator.
    #[error("incomplete action definition: {state_name}.{action}")]
    IncompleteAction {
        /// Slice the definition belongs to.
        state_name: String,
        /// Diagnostic name of the offending definition.
        action: String,
    },
}

/// Builds the name-keyed reducer mapping from groups in list order.
///
/// A name collision reports [`Diagnostic::DuplicateSlice`] and then
/// overwrites the earlier reducer; the later declaration wins.
pub fn assemble_reducers(
    groups: &[ActionGroup],
    diag: &dyn DiagnosticSink,
) -> BTreeMap<String, Reducer<Value>> {
    let mut reducers = BTreeMap::new();
    for group in groups {
        if reducers.contains_key(group.state_name()) {
            diag.report(Diagnostic::DuplicateSlice {
                group: group.clone(),
            });
        }
        reducers.insert(group.state_name().to_owned(), build_reducer(group, diag));
    }
    reducers
}

/// Assembles groups into a store, warning through the default `log` sink.
///
/// This is the sole behavior the crate adds around the store facility:
/// build one reducer per group, combine by slice name, construct the store
/// with `(root_reducer, preloaded, middleware)`. The returned store is the
/// container's own object, unchanged.
pub fn create_store_from_actions(
    groups: &[ActionGroup],
    preloaded: Option<SliceMap>,
    middleware: Vec<Box<dyn Middleware<SliceMap>>>,
) -> Store<SliceMap> {
    create_store_with_diagnostics(groups, preloaded, middleware, &LogSink)
}

/// As [`create_store_from_actions`], with an injectable diagnostic sink.
pub fn create_store_with_diagnostics(
    groups: &[ActionGroup],
    preloaded: Option<SliceMap>,
    middleware: Vec<Box<dyn Middleware<SliceMap>>>,
    diag: &dyn DiagnosticSink,
) -> Store<SliceMap> {
    let reducers = assemble_reducers(groups, diag);
    Store::with_middleware(combine_reducers(reducers), preloaded, middleware)
}

/// Strict assembly: rejects the first anomaly instead of warning past it.
pub fn try_create_store_from_actions(
    groups: &[ActionGroup],
    preloaded: Option<SliceMap>,
    middleware: Vec<Box<dyn Middleware<SliceMap>>>,
) -> Result<Store<SliceMap>, AssembleError> {
    let mut seen = BTreeSet::new();
    for group in groups {
        if !seen.insert(group.state_name().to_owned()) {
            return Err(AssembleError::DuplicateSlice(group.state_name().to_owned()));
        }
        for def in group.actions() {
            if !def.is_complete() {
                return Err(AssembleError::IncompleteAction {
                    state_name: group.state_name().to_owned(),
                    action: def.name().to_owned(),
                });
            }
        }
    }
    Ok(create_store_with_diagnostics(
        groups, preloaded, middleware, &LogSink,
    ))
}
