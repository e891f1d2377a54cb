//! State container and subscriptions.

use crate::action::Action;
use crate::combine::Reducer;
use crate::middleware::Middleware;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

// Kind of the internal dispatch that materializes initial state. User
// handlers must not match on it.
const BOOTSTRAP_KIND: &str = "@@store/bootstrap";

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Box<dyn Fn(&S) + Send + Sync>;

/// State container driving all updates through a single root reducer.
///
/// Construction performs one bootstrap dispatch so the reducer can resolve
/// its initial state (a preloaded state, when given, is what that dispatch
/// starts from). Afterwards the only way state changes is [`dispatch`]:
/// one dispatch in flight at a time, reducer first, then subscribers in
/// subscription order.
///
/// [`dispatch`]: Store::dispatch
pub struct Store<S> {
    state: RwLock<S>,
    reducer: Reducer<S>,
    middleware: Vec<Box<dyn Middleware<S>>>,
    listeners: RwLock<Vec<(SubscriptionId, Listener<S>)>>,
    next_subscription: AtomicU64,
}

impl<S: Clone> Store<S> {
    /// Creates a store around the given root reducer.
    pub fn new(reducer: Reducer<S>, preloaded: Option<S>) -> Self {
        Self::with_middleware(reducer, preloaded, Vec::new())
    }

    /// Creates a store with a middleware chain observing every dispatch.
    pub fn with_middleware(
        reducer: Reducer<S>,
        preloaded: Option<S>,
        middleware: Vec<Box<dyn Middleware<S>>>,
    ) -> Self {
        let state = reducer(preloaded, &Action::new(BOOTSTRAP_KIND));
        Self {
            state: RwLock::new(state),
            reducer,
            middleware,
            listeners: RwLock::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        }
    }

    /// Returns a clone of the current state.
    pub fn state(&self) -> S {
        self.state.read().clone()
    }

    /// Reads the current state in place, without cloning.
    pub fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&*self.state.read())
    }

    /// Dispatches an action: reduces under the write lock, then notifies
    /// middleware and subscribers with the post-reduce state.
    pub fn dispatch(&self, action: Action) {
        {
            let mut state = self.state.write();
            for mw in &self.middleware {
                mw.before(&action, &*state);
            }
            *state = (self.reducer)(Some((*state).clone()), &action);
        }

        let state = self.state.read();
        for mw in &self.middleware {
            mw.after(&action, &*state);
        }
        for (_, listener) in self.listeners.read().iter() {
            listener(&*state);
        }
    }

    /// Registers a listener called after every dispatch.
    pub fn subscribe(&self, listener: impl Fn(&S) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners.write().push((id, Box::new(listener)));
        id
    }

    /// Removes a listener; returns whether it was still registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        listeners.len() != before
    }
}

impl<S> std::fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("listeners", &self.listeners.read().len())
            .finish_non_exhaustive()
    }
}
