//! Name-keyed reducer combination.

use crate::action::Action;
use serde_json::Value;
use std::collections::BTreeMap;

/// Pure state-transition function.
///
/// `None` state means "first invocation": the reducer must resolve it to
/// its own initial value before applying the action.
pub type Reducer<S> = Box<dyn Fn(Option<S>, &Action) -> S + Send + Sync>;

/// Root state produced by [`combine_reducers`]: one JSON value per slice.
pub type SliceMap = BTreeMap<String, Value>;

/// Combines child reducers into a root reducer over a [`SliceMap`].
///
/// The root state shape mirrors the mapping's keys. Every dispatch forwards
/// the same action to every child with that child's current slice; a slice
/// absent from the incoming state is passed as `None`, so the child's own
/// initial value applies. Keys in the incoming state that have no reducer
/// are dropped.
pub fn combine_reducers(reducers: BTreeMap<String, Reducer<Value>>) -> Reducer<SliceMap> {
    Box::new(move |state: Option<SliceMap>, action: &Action| {
        let mut prev = state.unwrap_or_default();
        let mut next = SliceMap::new();
        for (name, reducer) in &reducers {
            let slice = prev.remove(name);
            next.insert(name.clone(), reducer(slice, action));
        }
        next
    })
}
