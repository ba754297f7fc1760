//! Navigation Component
//!
//! Header bar with the app title and one link per route.

use brandcast::Route;
use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-blue-700 text-white shadow">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href=Route::Dashboard.path() class="text-xl font-bold">
                        "LinkedIn AI Agent"
                    </A>

                    <div class="flex items-center space-x-1">
                        {Route::ALL
                            .into_iter()
                            .map(|route| view! { <NavLink route=route /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link, highlighted while its route is showing.
/// The router intercepts plain anchors, so this stays client-side.
#[component]
fn NavLink(route: Route) -> impl IntoView {
    let pathname = use_location().pathname;
    let current = move || Route::from_path(&pathname.get()) == Some(route);

    view! {
        <a
            href=route.path()
            class=move || {
                if current() {
                    "px-4 py-2 rounded-lg bg-blue-800 transition-colors"
                } else {
                    "px-4 py-2 rounded-lg hover:bg-blue-600 transition-colors"
                }
            }
            aria-current=move || current().then_some("page")
        >
            {route.label()}
        </a>
    }
}
