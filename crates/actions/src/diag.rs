//! Advisory diagnostics for declaration anomalies.
//!
//! Nothing here is fatal. Every anomaly maps to a structured event routed
//! through an injectable sink, and the caller continues with defined
//! behavior: an incomplete definition never dispatches, a duplicate slice
//! name is overwritten by the later declaration.

use crate::def::ActionDef;
use crate::group::ActionGroup;
use parking_lot::Mutex;
use std::fmt;

/// Structured advisory event emitted while building reducers and
/// assembling the store.
#[derive(Clone, Debug)]
pub enum Diagnostic {
    /// A definition is missing its reduce function or creator and will
    /// never dispatch.
    IncompleteAction {
        /// Slice the definition belongs to.
        state_name: String,
        /// The offending definition.
        definition: ActionDef,
        /// Which required parts are absent.
        missing: &'static str,
    },
    /// A later group re-declares an existing slice name; its reducer
    /// overwrites the earlier one.
    DuplicateSlice {
        /// The colliding declaration.
        group: ActionGroup,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::IncompleteAction {
                state_name,
                definition,
                missing,
            } => write!(
                f,
                "{state_name}.{name} is missing {missing} and will never dispatch: {definition:?}",
                name = definition.name(),
            ),
            Diagnostic::DuplicateSlice { group } => write!(
                f,
                "state name {name} already exists, its reducer will be overwritten: {group:?}",
                name = group.state_name(),
            ),
        }
    }
}

/// Receives advisory diagnostics.
///
/// Implementations observe; they must not alter assembly behavior.
pub trait DiagnosticSink {
    /// Reports one event.
    fn report(&self, diagnostic: Diagnostic);
}

/// Default sink: routes events to the `log` facade at warn level.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
    }
}

/// Sink that records events so tests can assert on them.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the events recorded so far.
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events.lock().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.events.lock().push(diagnostic);
    }
}
