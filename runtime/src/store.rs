//! Store - the lock-guarded owner of shared state.

use crate::metrics::StoreMetrics;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Shared, synchronized state.
///
/// The Store owns a value of `S` behind a `tokio` `RwLock` and only hands out
/// access through closures, so a guard can never be held across an `.await`
/// or leak out of the call. Cloning a Store is cheap and every clone points at
/// the same state.
///
/// # Example
///
/// ```
/// use todo_runtime::Store;
///
/// # async fn example() {
/// let store = Store::new(Vec::<u32>::new());
/// store.update(|v| v.push(7)).await;
/// assert_eq!(store.state(|v| v.len()).await, 1);
/// # }
/// ```
pub struct Store<S> {
    state: Arc<RwLock<S>>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<S> Default for Store<S>
where
    S: Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> std::fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

impl<S> Store<S>
where
    S: Send + Sync + 'static,
{
    /// Create a new store owning `initial_state`
    #[must_use]
    pub fn new(initial_state: S) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
        }
    }

    /// Read current state via a closure
    ///
    /// Access state through a closure to ensure the lock is released promptly:
    ///
    /// ```ignore
    /// let count = store.state(|todos| todos.len()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let started = Instant::now();
        let state = self.state.read().await;
        StoreMetrics::record_read(started.elapsed());
        f(&*state)
    }

    /// Mutate state via a closure under the exclusive lock
    ///
    /// Writers are serialized: no reader observes a half-applied closure.
    pub async fn update<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut S) -> T,
    {
        let started = Instant::now();
        let mut state = self.state.write().await;
        StoreMetrics::record_write(started.elapsed());
        f(&mut *state)
    }
}
