//! Navigation Shell
//!
//! The six routes of the app, the header links derived from them, and the
//! activation bookkeeping that tells a view whether it is still on screen.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::lifecycle::Scope;

/// Top-level pages, in header order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Dashboard,
    Profile,
    Generate,
    Posts,
    Analytics,
    Trends,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Dashboard,
        Route::Profile,
        Route::Generate,
        Route::Posts,
        Route::Analytics,
        Route::Trends,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Profile => "/profile",
            Route::Generate => "/generate",
            Route::Posts => "/posts",
            Route::Analytics => "/analytics",
            Route::Trends => "/trends",
        }
    }

    /// Header link text
    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Profile => "Profile",
            Route::Generate => "Generate",
            Route::Posts => "Posts",
            Route::Analytics => "Analytics",
            Route::Trends => "Trends",
        }
    }

    /// Resolve a location path. A trailing slash is tolerated; anything else
    /// unknown has no route.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        Route::ALL.into_iter().find(|r| r.path() == normalized)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug)]
struct Activation {
    route: Route,
    scope: Scope,
}

/// Tracks the one live view. Cheap to clone; clones share state.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    current: Arc<Mutex<Option<Activation>>>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate the view for `route`, retiring whichever view was live.
    ///
    /// The returned scope stays active until the next activation or until the
    /// view deactivates it on unmount.
    pub fn activate(&self, route: Route) -> Scope {
        let scope = Scope::new();
        let previous = self.current.lock().replace(Activation {
            route,
            scope: scope.clone(),
        });

        if let Some(previous) = previous {
            previous.scope.deactivate();
            tracing::debug!(from = %previous.route, to = %route, "View switched");
        } else {
            tracing::debug!(to = %route, "View activated");
        }

        scope
    }
}
