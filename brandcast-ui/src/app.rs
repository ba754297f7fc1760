//! App Root Component
//!
//! Main application component with routing and global providers.

use brandcast::{ContentApi, Route as Page};
use gloo_timers::callback::Interval;
use leptos::*;
use leptos_router::*;

use crate::components::{Nav, NoticeDialog};
use crate::pages::{Analytics, Dashboard, Generate, Posts, Profile, Trends};
use crate::state::{provide_global_state, use_global_state, GlobalState};

/// How often the footer re-checks the backend
const HEALTH_POLL_MS: u32 = 30_000;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_global_state();
    check_health(state.clone());
    Interval::new(HEALTH_POLL_MS, move || check_health(state.clone())).forget();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-900 flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path=Page::Dashboard.path() view=Dashboard />
                        <Route path=Page::Profile.path() view=Profile />
                        <Route path=Page::Generate.path() view=Generate />
                        <Route path=Page::Posts.path() view=Posts />
                        <Route path=Page::Analytics.path() view=Analytics />
                        <Route path=Page::Trends.path() view=Trends />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                <NoticeDialog />
            </div>
        </Router>
    }
}

fn check_health(state: GlobalState) {
    spawn_local(async move {
        let result = state.api.health().await.map_err(|e| {
            tracing::warn!(error = %e, "Backend health check failed");
            e.to_string()
        });
        state.health.set(Some(result));
    });
}

/// Footer showing backend reachability
#[component]
fn Footer() -> impl IntoView {
    let state = use_global_state();
    let base_url = state.api.base_url().to_string();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-white border-t border-gray-200 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="flex items-center space-x-2">
                    {move || match state.health.get() {
                        Some(Ok(message)) => view! {
                            <span class="flex items-center space-x-1 text-green-600">
                                <span class="w-2 h-2 bg-green-500 rounded-full" />
                                <span>{message}</span>
                            </span>
                        }.into_view(),
                        Some(Err(_)) => view! {
                            <span class="flex items-center space-x-1 text-red-600">
                                <span class="w-2 h-2 bg-red-500 rounded-full" />
                                <span>"Backend unreachable"</span>
                            </span>
                        }.into_view(),
                        None => view! {
                            <span class="text-gray-400">"Checking backend..."</span>
                        }.into_view(),
                    }}
                </div>

                <div class="text-gray-400">{base_url}</div>
            </div>
        </footer>
    }
}

/// 404 Not Found page. A known path the router did not match exactly (say
/// with a trailing slash) is sent on to its page instead.
#[component]
fn NotFound() -> impl IntoView {
    let path = use_location().pathname.get_untracked();

    if let Some(route) = Page::from_path(&path) {
        tracing::debug!(path = %path, to = %route, "Redirecting to known route");
        return view! { <Redirect path=route.path() /> }.into_view();
    }

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">{format!("Nothing lives at {}.", path)}</p>
            <A
                href=Page::Dashboard.path()
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
    .into_view()
}
