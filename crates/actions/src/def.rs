//! Typed action definitions: the unit the reducer builder recognizes.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use store::{Action, ActionKind};

/// Pure slice transition applied when a definition's kind matches.
pub type ReduceFn = Arc<dyn Fn(Value, &Action) -> Value + Send + Sync>;

/// Builds the action a definition dispatches, from caller-supplied args.
pub type CreatorFn = Arc<dyn Fn(Value) -> Action + Send + Sync>;

/// One named state transition inside an
/// [`ActionGroup`](crate::group::ActionGroup).
///
/// A definition is dispatchable only when **complete**: it carries both its
/// reduce function and its creator. Incomplete definitions stay in the
/// declaration so diagnostics can name them, but they never handle actions.
#[derive(Clone)]
pub struct ActionDef {
    name: String,
    kind: ActionKind,
    reduce: Option<ReduceFn>,
    creator: Option<CreatorFn>,
}

impl ActionDef {
    /// Starts a definition with its diagnostic name and action kind.
    pub fn new(name: impl Into<String>, kind: impl Into<ActionKind>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            reduce: None,
            creator: None,
        }
    }

    /// Sets the reduce function.
    pub fn reduce(mut self, f: impl Fn(Value, &Action) -> Value + Send + Sync + 'static) -> Self {
        self.reduce = Some(Arc::new(f));
        self
    }

    /// Sets the action creator.
    pub fn creator(mut self, f: impl Fn(Value) -> Action + Send + Sync + 'static) -> Self {
        self.creator = Some(Arc::new(f));
        self
    }

    /// Installs the common creator: wrap this definition's own kind around
    /// the caller's payload.
    pub fn creates_own_kind(self) -> Self {
        let kind = self.kind.clone();
        self.creator(move |payload| Action::with_payload(kind.clone(), payload))
    }

    /// The definition's diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The action kind this definition matches on.
    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// The reduce function, when set.
    pub fn reduce_fn(&self) -> Option<&ReduceFn> {
        self.reduce.as_ref()
    }

    /// The creator, when set.
    pub fn creator_fn(&self) -> Option<&CreatorFn> {
        self.creator.as_ref()
    }

    /// Whether the definition can be wired into a reducer.
    pub fn is_complete(&self) -> bool {
        self.reduce.is_some() && self.creator.is_some()
    }

    /// Builds this definition's action, if a creator is present.
    pub fn create(&self, payload: Value) -> Option<Action> {
        self.creator.as_ref().map(|creator| creator(payload))
    }
}

impl fmt::Debug for ActionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDef")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("reduce", &self.reduce.is_some())
            .field("creator", &self.creator.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn completeness_requires_reduce_and_creator() {
        let bare = ActionDef::new("set", "SET");
        assert!(!bare.is_complete());
        assert!(!bare.clone().reduce(|state, _| state).is_complete());
        assert!(bare
            .reduce(|state, _| state)
            .creates_own_kind()
            .is_complete());
    }

    #[test]
    fn own_kind_creator_wraps_payload() {
        let def = ActionDef::new("set", "SET")
            .reduce(|_, action| action.payload.clone())
            .creates_own_kind();

        let action = def.create(json!({ "value": 3 })).unwrap();
        assert_eq!(action.kind, ActionKind::from("SET"));
        assert_eq!(action.payload, json!({ "value": 3 }));
    }
}
