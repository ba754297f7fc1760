//! Generate Page
//!
//! Prompt in, preview out. A preview can be kept as a draft, which opens the
//! post library once the confirmation is dismissed.

use brandcast::{ContentGenerator, GeneratorState, Route};
use leptos::ev::{Event, MouseEvent, SubmitEvent};
use leptos::*;
use leptos_router::*;
use std::rc::Rc;

use crate::state::{use_global_state, SignalStore};

/// Generate page component
#[component]
pub fn Generate() -> impl IntoView {
    let state = use_global_state();

    // Trend suggestions link here with the prompt filled in
    let prefill = use_query_map()
        .with_untracked(|query| query.get("prompt").cloned())
        .unwrap_or_default();

    let store = SignalStore::new(GeneratorState::with_prompt(prefill));
    let generator = Rc::new(ContentGenerator::new(
        state.api.clone(),
        store,
        super::activate(Route::Generate),
    ));
    let draft = store.signal();

    let on_input = {
        let generator = Rc::clone(&generator);
        move |ev: Event| generator.set_prompt(event_target_value(&ev))
    };

    let on_submit = {
        let generator = Rc::clone(&generator);
        let state = state.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let generator = Rc::clone(&generator);
            let state = state.clone();
            spawn_local(async move {
                if let Some(notice) = generator.generate().await.notice() {
                    state.notify(notice);
                }
            });
        }
    };

    let on_save = move |_: MouseEvent| {
        let generator = Rc::clone(&generator);
        let state = state.clone();
        spawn_local(async move {
            let outcome = generator.save_draft().await;
            if let Some(notice) = outcome.notice() {
                state.notify_then(notice, outcome.navigate_to());
            }
        });
    };

    view! {
        <div class="max-w-3xl space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Generate Content"</h1>
                <p class="text-gray-500 mt-1">"Describe the post you want to write"</p>
            </div>

            <form on:submit=on_submit class="bg-white rounded-lg shadow p-6 space-y-4">
                <textarea
                    rows=4
                    placeholder="e.g. Lessons learned from migrating our backend to Rust"
                    prop:value=move || draft.with(|d| d.prompt.clone())
                    on:input=on_input
                    class="w-full border border-gray-300 rounded-lg px-4 py-2"
                />
                <button
                    type="submit"
                    disabled=move || draft.with(|d| d.generating || d.prompt.trim().is_empty())
                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                           text-white rounded-lg font-medium"
                >
                    {move || if draft.with(|d| d.generating) { "Generating..." } else { "Generate" }}
                </button>
            </form>

            {move || draft.with(|d| d.preview.clone()).map(|preview| view! {
                <section class="bg-white rounded-lg shadow p-6 space-y-4">
                    <h2 class="text-xl font-semibold">"Preview"</h2>
                    <p class="whitespace-pre-wrap text-gray-800">{preview.content}</p>
                    <p class="text-blue-600">{preview.hashtags}</p>
                    <button
                        on:click=on_save.clone()
                        disabled=move || draft.with(|d| d.saving_draft)
                        class="px-6 py-3 bg-green-600 hover:bg-green-700 disabled:bg-gray-400
                               text-white rounded-lg font-medium"
                    >
                        "Save as Draft"
                    </button>
                </section>
            })}
        </div>
    }
}
