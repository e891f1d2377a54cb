//! Dispatch observation hooks.

use crate::action::Action;

/// Observes dispatches without altering reducer behavior.
///
/// Hooks run under the store's dispatch discipline: [`before`] with the
/// state as it was when the action arrived, [`after`] once the store holds
/// the reduced state.
///
/// [`before`]: Middleware::before
/// [`after`]: Middleware::after
pub trait Middleware<S>: Send + Sync {
    /// Called before the action reaches the root reducer.
    fn before(&self, _action: &Action, _state: &S) {}

    /// Called after the store's state has been replaced.
    fn after(&self, _action: &Action, _state: &S) {}
}

/// Middleware that traces every dispatch through the `log` facade.
pub struct LoggingMiddleware;

impl<S> Middleware<S> for LoggingMiddleware {
    fn before(&self, action: &Action, _state: &S) {
        log::debug!("dispatching {}", action.kind);
    }
}
