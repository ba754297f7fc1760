//! Global Application State
//!
//! Reactive state shared by every page: the backend client, the navigation
//! shell, the notice awaiting acknowledgement and the backend health.

use brandcast::{ApiClient, Notice, Route, Shell};
use leptos::*;

use crate::api;

/// Notice shown in the modal, with an optional page to open once it is
/// acknowledged
#[derive(Debug, Clone, PartialEq)]
pub struct PendingNotice {
    pub notice: Notice,
    pub then: Option<Route>,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    pub api: ApiClient,
    pub shell: Shell,
    pub notice: RwSignal<Option<PendingNotice>>,
    /// Last health check: backend message, or the failure
    pub health: RwSignal<Option<Result<String, String>>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        api: api::client(),
        shell: Shell::new(),
        notice: create_rw_signal(None),
        health: create_rw_signal(None),
    };

    provide_context(state);
}

pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Show a notice in the modal
    pub fn notify(&self, notice: Notice) {
        self.notify_then(notice, None);
    }

    /// Show a notice and open `then` once it is acknowledged
    pub fn notify_then(&self, notice: Notice, then: Option<Route>) {
        if notice.is_error() {
            tracing::warn!(message = %notice.message, "Showing error notice");
        }
        self.notice.set(Some(PendingNotice { notice, then }));
    }
}
