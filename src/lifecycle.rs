//! View Lifecycle
//!
//! Shared plumbing for the fetch-on-activate pattern every view follows:
//!
//! - [`Remote`]: fetched data plus its `idle → loading → loaded | failed` status
//! - [`Scope`]: liveness flag handed out when a view is activated
//! - [`Store`]: where a view keeps its local state (a lock natively, a reactive
//!   signal in the browser)
//!
//! Requests are never cancelled. When a response arrives the view checks its
//! scope and drops the result if it has been navigated away from. Overlapping
//! fetches are not sequenced: each applies its result when it resolves, so the
//! last one to resolve wins.

use parking_lot::{RwLock, RwLockReadGuard};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::api::ApiResult;

// ============================================
// Fetch status
// ============================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Data fetched from the backend together with the state of its last fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Remote<T> {
    pub data: T,
    pub status: FetchStatus,
    /// Message of the last failure, cleared by the next success
    pub error: Option<String>,
    /// Whether any fetch has succeeded yet
    pub fetched: bool,
}

impl<T> Remote<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            status: FetchStatus::Idle,
            error: None,
            fetched: false,
        }
    }

    pub fn begin(&mut self) {
        self.status = FetchStatus::Loading;
    }

    /// Apply a completed fetch. Success replaces the data wholesale; failure
    /// keeps whatever was displayed before.
    pub fn finish(&mut self, result: ApiResult<T>) {
        match result {
            Ok(data) => {
                self.data = data;
                self.status = FetchStatus::Loaded;
                self.error = None;
                self.fetched = true;
            }
            Err(e) => {
                self.status = FetchStatus::Failed;
                self.error = Some(e.message().to_string());
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }
}

// ============================================
// Scope
// ============================================

/// Liveness of one view activation
#[derive(Debug, Clone)]
pub struct Scope {
    active: Arc<AtomicBool>,
}

impl Scope {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Mark the view as gone; later completions are dropped
    pub fn deactivate(&self) {
        self.active.store(false, Ordering::Release);
    }

    /// Run `f` against the store only while the view is still active.
    ///
    /// Returns whether the update was applied.
    pub fn apply<T, S: Store<T>>(&self, store: &S, f: impl FnOnce(&mut T)) -> bool {
        if self.is_active() {
            store.update(f);
            true
        } else {
            tracing::debug!("View no longer active, dropping completion");
            false
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================
// Store
// ============================================

/// Holder of a view's local state
pub trait Store<T>: Clone {
    fn update(&self, f: impl FnOnce(&mut T));

    fn get(&self) -> T
    where
        T: Clone;
}

/// Lock-backed store for native hosts and tests
#[derive(Debug)]
pub struct Shared<T>(Arc<RwLock<T>>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(RwLock::new(value)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.0.read()
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Store<T> for Shared<T> {
    fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.0.write());
    }

    fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.read().clone()
    }
}

// ============================================
// Fetch driver
// ============================================

/// Drive one fetch into the `Remote` selected out of a view's state.
///
/// Marks it loading, awaits the request, logs a failure, and applies the
/// result if the scope is still active.
pub async fn fetch_into<V, T, S>(
    scope: &Scope,
    store: &S,
    what: &'static str,
    select: fn(&mut V) -> &mut Remote<T>,
    request: impl Future<Output = ApiResult<T>>,
) where
    S: Store<V>,
{
    scope.apply(store, |state| select(state).begin());

    let result = request.await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "Error fetching {}", what);
    }

    scope.apply(store, |state| select(state).finish(result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    #[test]
    fn test_remote_transitions() {
        let mut remote = Remote::new(vec![1, 2]);
        assert_eq!(remote.status, FetchStatus::Idle);

        remote.begin();
        assert!(remote.is_loading());

        remote.finish(Ok(vec![3]));
        assert_eq!(remote.status, FetchStatus::Loaded);
        assert_eq!(remote.data, vec![3]);
        assert!(remote.fetched);
    }

    #[test]
    fn test_failure_keeps_prior_data() {
        let mut remote = Remote::new(vec![1, 2]);
        remote.begin();
        remote.finish(Err(ApiError::request_failed("connection refused")));

        assert_eq!(remote.status, FetchStatus::Failed);
        assert_eq!(remote.data, vec![1, 2]);
        assert_eq!(remote.error.as_deref(), Some("connection refused"));
        assert!(!remote.fetched);
    }

    #[test]
    fn test_inactive_scope_drops_updates() {
        let store = Shared::new(0);
        let scope = Scope::new();

        assert!(scope.apply(&store, |v| *v = 1));
        scope.deactivate();
        assert!(!scope.apply(&store, |v| *v = 2));

        assert_eq!(store.get(), 1);
    }

    #[test]
    fn test_scope_clones_share_liveness() {
        let scope = Scope::new();
        let clone = scope.clone();
        clone.deactivate();
        assert!(!scope.is_active());
    }
}
