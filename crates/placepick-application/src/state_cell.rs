use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared, owned screen state.
///
/// Transitions run under the write lock and never await while holding it,
/// so a network response and a local edit cannot interleave mid-transition.
pub(crate) struct StateCell<S> {
    state: Arc<RwLock<S>>,
}

impl<S: Clone + Default> StateCell<S> {
    pub(crate) fn new(state: S) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns a copy of the current state.
    pub(crate) async fn snapshot(&self) -> S {
        self.state.read().await.clone()
    }

    /// Reads from the current state without copying it.
    pub(crate) async fn inspect<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let guard = self.state.read().await;
        f(&*guard)
    }

    /// Replaces the state with `f(state)` and returns the new state.
    pub(crate) async fn update(&self, f: impl FnOnce(S) -> S) -> S {
        self.transition(|state| {
            let next = f(state);
            (next.clone(), next)
        })
        .await
    }

    /// Replaces the state with the first half of `f(state)` and returns the
    /// second half.
    pub(crate) async fn transition<R>(&self, f: impl FnOnce(S) -> (S, R)) -> R {
        let mut guard = self.state.write().await;
        let (next, result) = f(std::mem::take(&mut *guard));
        *guard = next;
        result
    }
}

impl<S> Clone for StateCell<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}
