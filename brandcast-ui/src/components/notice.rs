//! Notice Dialog
//!
//! Modal acknowledgement for success and error messages. Nothing else on the
//! page reacts until it is dismissed; a notice can carry a page to open
//! afterwards.

use brandcast::NoticeKind;
use leptos::*;
use leptos_router::*;

use crate::state::use_global_state;

#[component]
pub fn NoticeDialog() -> impl IntoView {
    let notice = use_global_state().notice;
    let navigate = use_navigate();

    let acknowledge = move || {
        let then = notice.get_untracked().and_then(|pending| pending.then);
        notice.set(None);

        if let Some(route) = then {
            navigate(route.path(), Default::default());
        }
    };

    view! {
        {move || {
            notice.get().map(|pending| {
                let (title, accent) = match pending.notice.kind {
                    NoticeKind::Success => ("Success", "text-green-700"),
                    NoticeKind::Error => ("Error", "text-red-700"),
                };
                let acknowledge = acknowledge.clone();

                view! {
                    <div class="fixed inset-0 z-50 bg-black/40 flex items-center justify-center">
                        <div class="bg-white rounded-lg shadow-xl p-6 w-full max-w-sm">
                            <h2 class=format!("text-lg font-semibold mb-2 {}", accent)>{title}</h2>
                            <p class="text-gray-700 mb-6">{pending.notice.message}</p>
                            <div class="flex justify-end">
                                <button
                                    on:click=move |_| acknowledge()
                                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg"
                                >
                                    "OK"
                                </button>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
