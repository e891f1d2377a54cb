//! Action message types dispatched through the store.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier for an action type, compared by equality during dispatch.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionKind(String);

impl ActionKind {
    /// Creates a kind from any string-like identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ActionKind {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ActionKind {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Message dispatched through a [`Store`](crate::Store).
///
/// The payload is an open JSON value so callers can attach whatever a
/// reduce function needs without widening the message type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// The action type identifier reducers match on.
    pub kind: ActionKind,
    /// Free-form payload interpreted by reduce functions.
    #[serde(default)]
    pub payload: Value,
}

impl Action {
    /// Creates an action with a null payload.
    pub fn new(kind: impl Into<ActionKind>) -> Self {
        Self {
            kind: kind.into(),
            payload: Value::Null,
        }
    }

    /// Creates an action carrying a payload.
    pub fn with_payload(kind: impl Into<ActionKind>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kinds_compare_by_identifier() {
        assert_eq!(ActionKind::from("INC"), ActionKind::new("INC".to_owned()));
        assert_ne!(ActionKind::from("INC"), ActionKind::from("DEC"));
    }

    #[test]
    fn action_round_trips_through_serde() {
        let action = Action::with_payload("SET", json!({ "value": 7 }));
        let encoded = serde_json::to_string(&action).unwrap();
        let decoded: Action = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, action);
    }
}
