//! Trends Page
//!
//! Industry trends in the order the backend ranks them, and ready-made
//! prompts that open the generator.

use brandcast::{Route, TrendsState, TrendsView};
use leptos::ev::{Event, MouseEvent};
use leptos::*;
use leptos_router::*;
use std::rc::Rc;

use crate::components::Loading;
use crate::state::{use_global_state, SignalStore};

/// Generator link with `prompt` filled in
fn generate_href(prompt: &str) -> String {
    let encoded: String = js_sys::encode_uri_component(prompt).into();
    format!("{}?prompt={}", Route::Generate.path(), encoded)
}

/// Trends page component
#[component]
pub fn Trends() -> impl IntoView {
    let state = use_global_state();
    let store = SignalStore::new(TrendsState::default());
    let view_model = Rc::new(TrendsView::new(
        state.api.clone(),
        store,
        super::activate(Route::Trends),
    ));
    let trends = store.signal();

    let refresh = {
        let view_model = Rc::clone(&view_model);
        move || {
            let view_model = Rc::clone(&view_model);
            spawn_local(async move { view_model.refresh().await });
        }
    };
    refresh();

    let on_industry = move |ev: Event| view_model.set_industry(event_target_value(&ev));

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Industry Trends"</h1>
                <p class="text-gray-500 mt-1">"What people in your field are talking about"</p>
            </div>

            <div class="flex space-x-2">
                <input
                    type="text"
                    placeholder="Industry (optional)"
                    prop:value=move || trends.with(|t| t.industry.clone())
                    on:input=on_industry
                    class="flex-1 border border-gray-300 rounded-lg px-4 py-2"
                />
                <button
                    on:click=move |_: MouseEvent| refresh()
                    class="px-4 py-2 bg-gray-200 hover:bg-gray-300 rounded-lg font-medium"
                >
                    "Refresh"
                </button>
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-white rounded-lg shadow p-6">
                    <h2 class="text-xl font-semibold mb-4">"Trending Topics"</h2>
                    {move || if trends.with(|t| t.trends.is_loading()) {
                        view! {
                            <div>
                                <p class="text-gray-500">"Loading trends..."</p>
                                <Loading />
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <ol class="list-decimal list-inside space-y-2">
                                {trends.with(|t| t.trends.data.clone())
                                    .into_iter()
                                    .map(|topic| view! { <li class="text-gray-800">{topic}</li> })
                                    .collect_view()}
                            </ol>
                        }
                        .into_view()
                    }}
                </section>

                <section class="bg-white rounded-lg shadow p-6">
                    <h2 class="text-xl font-semibold mb-4">"Post Ideas"</h2>
                    <ul class="space-y-2">
                        {move || trends.with(|t| t.suggestions.is_loading()).then(|| view! {
                            <li class="text-gray-500">"Loading suggestions..."</li>
                        })}
                        {move || trends.with(|t| t.suggestions.data.clone())
                            .into_iter()
                            .map(|prompt| {
                                let href = generate_href(&prompt);
                                view! {
                                    <li>
                                        <A href=href class="text-blue-600 hover:underline">
                                            {prompt}
                                        </A>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </div>
        </div>
    }
}
