//! Pages
//!
//! Top-level page components for each route. Every page activates its route
//! in the shell when mounted and retires it on unmount, so responses that
//! arrive after navigating away are dropped.

pub mod analytics;
pub mod dashboard;
pub mod generate;
pub mod posts;
pub mod profile;
pub mod trends;

pub use analytics::Analytics;
pub use dashboard::Dashboard;
pub use generate::Generate;
pub use posts::Posts;
pub use profile::Profile;
pub use trends::Trends;

use brandcast::{Route, Scope};
use leptos::on_cleanup;

use crate::state::use_global_state;

/// Activate `route` for as long as the calling page stays mounted
fn activate(route: Route) -> Scope {
    let scope = use_global_state().shell.activate(route);

    let on_unmount = scope.clone();
    on_cleanup(move || on_unmount.deactivate());

    scope
}
