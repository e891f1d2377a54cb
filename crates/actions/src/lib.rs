//! Declarative action groups wired into a combined store.
//!
//! Callers describe each slice of application state as an [`ActionGroup`]:
//! a slice name, an initial value, and an ordered set of [`ActionDef`]s
//! (action kind, reduce function, action creator). The assembler turns a
//! list of groups into a single [`Store`] — one pure reducer per group,
//! combined by slice name.
//!
//! ```
//! use actions::{create_store_from_actions, Action, ActionDef, ActionGroup};
//! use serde_json::json;
//!
//! let groups = vec![ActionGroup::new("counter")
//!     .init(json!(0))
//!     .action(
//!         ActionDef::new("increment", "INC")
//!             .reduce(|state, _| json!(state.as_i64().unwrap_or(0) + 1))
//!             .creator(|_| Action::new("INC")),
//!     )];
//!
//! let store = create_store_from_actions(&groups, None, Vec::new());
//! store.dispatch(Action::new("INC"));
//! assert_eq!(store.state().get("counter"), Some(&json!(1)));
//! ```
//!
//! Declaration anomalies (an incomplete definition, a duplicate slice name)
//! are never fatal on the default path: they surface as advisory
//! [`Diagnostic`]s and assembly continues with defined behavior. The
//! `try_` entry points reject the same anomalies instead.

/// Store assembly from declared groups.
pub mod assemble;
/// Typed action definitions.
pub mod def;
/// Advisory diagnostics for declaration anomalies.
pub mod diag;
/// Slice declarations.
pub mod group;
/// The per-group reducer builder.
pub mod reduce;

pub use crate::assemble::{
    assemble_reducers, create_store_from_actions, create_store_with_diagnostics,
    try_create_store_from_actions, AssembleError,
};
pub use crate::def::{ActionDef, CreatorFn, ReduceFn};
pub use crate::diag::{Diagnostic, DiagnosticSink, LogSink, RecordingSink};
pub use crate::group::ActionGroup;
pub use crate::reduce::build_reducer;

// Re-export the store-facing types callers need alongside declarations.
pub use store::{Action, ActionKind, Middleware, Reducer, SliceMap, Store};
