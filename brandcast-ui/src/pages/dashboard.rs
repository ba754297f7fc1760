//! Dashboard Page
//!
//! Post counts at a glance plus shortcuts into the generator and trends.

use brandcast::views::{self, DashboardState, QUICK_ACTIONS};
use brandcast::Route;
use leptos::*;
use leptos_router::*;

use crate::components::StatCard;
use crate::state::{use_global_state, SignalStore};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_global_state();
    let store = SignalStore::new(DashboardState::default());
    let dashboard = views::Dashboard::new(
        state.api.clone(),
        store,
        super::activate(Route::Dashboard),
    );

    // Fetch counts on mount
    spawn_local(async move { dashboard.load().await });

    let stats = store.signal();
    let count = move |pick: fn(&views::PostStats) -> usize| {
        Signal::derive(move || stats.with(|s| pick(&s.data).to_string()))
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-500 mt-1">"Your LinkedIn content at a glance"</p>
            </div>

            <section class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard label="Total Posts" value=count(|s| s.total) />
                <StatCard label="Scheduled" value=count(|s| s.scheduled) accent="text-yellow-600" />
                <StatCard label="Published" value=count(|s| s.published) accent="text-green-600" />
            </section>

            <section class="bg-white rounded-lg shadow p-6">
                <h2 class="text-xl font-semibold mb-4">"Quick Actions"</h2>
                <div class="flex space-x-4">
                    {QUICK_ACTIONS
                        .into_iter()
                        .map(|(route, label)| view! {
                            <A
                                href=route.path()
                                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium"
                            >
                                {label}
                            </A>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
