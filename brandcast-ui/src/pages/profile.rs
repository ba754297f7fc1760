//! Profile Page
//!
//! Edit the name, headline and about text used to tailor generated posts.

use brandcast::{FetchStatus, ProfileField, ProfileState, ProfileView, Route};
use leptos::ev::{Event, SubmitEvent};
use leptos::*;
use std::rc::Rc;

use crate::state::{use_global_state, SignalStore};

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let state = use_global_state();
    let store = SignalStore::new(ProfileState::default());
    let editor = Rc::new(ProfileView::new(
        state.api.clone(),
        store,
        super::activate(Route::Profile),
    ));

    // Fill the form on mount
    spawn_local({
        let editor = Rc::clone(&editor);
        async move { editor.load().await }
    });

    let profile = store.signal();

    let edit = {
        let editor = Rc::clone(&editor);
        move |field: ProfileField| {
            let editor = Rc::clone(&editor);
            move |ev: Event| editor.set_field(field, event_target_value(&ev))
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let editor = Rc::clone(&editor);
        let state = state.clone();
        spawn_local(async move {
            if let Some(notice) = editor.save().await.notice() {
                state.notify(notice);
            }
        });
    };

    view! {
        <div class="max-w-2xl space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Profile"</h1>
                <p class="text-gray-500 mt-1">"Tell the agent who you are"</p>
            </div>

            {move || profile.with(|p| p.status == FetchStatus::Loading).then(|| view! {
                <p class="text-sm text-gray-400">"Loading profile..."</p>
            })}

            <form on:submit=on_submit class="bg-white rounded-lg shadow p-6 space-y-4">
                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Name"</label>
                    <input
                        type="text"
                        required=true
                        prop:value=move || profile.with(|p| p.form.name.clone())
                        on:input=edit(ProfileField::Name)
                        class="w-full border border-gray-300 rounded-lg px-4 py-2"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Headline"</label>
                    <input
                        type="text"
                        prop:value=move || profile.with(|p| p.form.headline.clone())
                        on:input=edit(ProfileField::Headline)
                        class="w-full border border-gray-300 rounded-lg px-4 py-2"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-600 mb-2">"About"</label>
                    <textarea
                        rows=5
                        prop:value=move || profile.with(|p| p.form.about.clone())
                        on:input=edit(ProfileField::About)
                        class="w-full border border-gray-300 rounded-lg px-4 py-2"
                    />
                </div>
                <button
                    type="submit"
                    disabled=move || profile.with(|p| p.saving)
                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                           text-white rounded-lg font-medium"
                >
                    {move || if profile.with(|p| p.saving) { "Saving..." } else { "Save Profile" }}
                </button>
            </form>
        </div>
    }
}
