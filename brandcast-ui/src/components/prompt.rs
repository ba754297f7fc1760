//! Prompt Dialog
//!
//! Modal single-line text input. Hands back what was typed, or that the
//! dialog was cancelled; validating the answer is up to the caller.

use brandcast::PromptResult;
use leptos::*;

#[component]
pub fn PromptDialog<F>(
    #[prop(into)] message: String,
    on_close: F,
) -> impl IntoView
where
    F: Fn(PromptResult) + Clone + 'static,
{
    let (input, set_input) = create_signal(String::new());

    let submit = {
        let on_close = on_close.clone();
        move |_| on_close(PromptResult::Submitted(input.get_untracked()))
    };
    let cancel = move |_| on_close(PromptResult::Cancelled);

    view! {
        <div class="fixed inset-0 z-40 bg-black/40 flex items-center justify-center">
            <div class="bg-white rounded-lg shadow-xl p-6 w-full max-w-sm">
                <p class="text-gray-700 mb-4">{message}</p>
                <input
                    type="text"
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    class="w-full border border-gray-300 rounded-lg px-3 py-2 mb-6
                           focus:border-blue-500 focus:outline-none"
                />
                <div class="flex justify-end space-x-2">
                    <button
                        on:click=cancel
                        class="px-4 py-2 bg-gray-200 hover:bg-gray-300 rounded-lg"
                    >
                        "Cancel"
                    </button>
                    <button
                        on:click=submit
                        class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg"
                    >
                        "OK"
                    </button>
                </div>
            </div>
        </div>
    }
}
