//! Slice declarations: a named slice, its initial value, its actions.

use crate::def::ActionDef;
use serde_json::Value;

/// Declares one state slice: its name, initial value, and ordered actions.
///
/// The name keys the slice in the assembled root state; it is required by
/// construction. Declaration order of actions is preserved and becomes the
/// reducer's dispatch scan order.
#[derive(Clone, Debug)]
pub struct ActionGroup {
    state_name: String,
    init_state: Value,
    actions: Vec<ActionDef>,
}

impl ActionGroup {
    /// Starts a declaration for the named slice with a null initial value.
    pub fn new(state_name: impl Into<String>) -> Self {
        Self {
            state_name: state_name.into(),
            init_state: Value::Null,
            actions: Vec::new(),
        }
    }

    /// Sets the slice's initial value.
    pub fn init(mut self, value: Value) -> Self {
        self.init_state = value;
        self
    }

    /// Appends an action definition.
    pub fn action(mut self, def: ActionDef) -> Self {
        self.actions.push(def);
        self
    }

    /// The slice name this group installs under.
    pub fn state_name(&self) -> &str {
        &self.state_name
    }

    /// The declared initial value.
    pub fn init_state(&self) -> &Value {
        &self.init_state
    }

    /// The definitions in declaration order.
    pub fn actions(&self) -> &[ActionDef] {
        &self.actions
    }

    /// Looks up a definition by its diagnostic name, for callers that
    /// dispatch through a definition's creator.
    pub fn get(&self, name: &str) -> Option<&ActionDef> {
        self.actions.iter().find(|def| def.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn declaration_order_is_preserved() {
        let group = ActionGroup::new("counter")
            .init(json!(0))
            .action(ActionDef::new("first", "A"))
            .action(ActionDef::new("second", "B"));

        let names: Vec<_> = group.actions().iter().map(|d| d.name()).collect();
        assert_eq!(names, ["first", "second"]);
        assert_eq!(group.get("second").unwrap().kind().as_str(), "B");
        assert!(group.get("missing").is_none());
    }
}
