//! Posts Page
//!
//! Every post the backend knows about, newest first. Drafts can be scheduled
//! a number of minutes from now or at a date and time; published posts can
//! open their engagement metrics.

use brandcast::{LibraryState, MetricsPanel, Post, PostLibrary, PostStatus, PromptResult, Route};
use leptos::ev::MouseEvent;
use leptos::*;
use leptos_router::*;
use std::rc::Rc;

use crate::components::{Loading, PromptDialog};
use crate::state::{use_global_state, SignalStore};

/// Posts page component
#[component]
pub fn Posts() -> impl IntoView {
    let state = use_global_state();
    let store = SignalStore::new(LibraryState::default());
    let library = Rc::new(PostLibrary::new(
        state.api.clone(),
        store,
        super::activate(Route::Posts),
    ));
    let posts = store.signal();

    // Post whose schedule dialog is open
    let scheduling = create_rw_signal(None::<i64>);

    let refresh = {
        let library = Rc::clone(&library);
        move || {
            let library = Rc::clone(&library);
            spawn_local(async move { library.refresh().await });
        }
    };
    refresh();

    let show_metrics = {
        let library = Rc::clone(&library);
        Callback::new(move |post_id: i64| {
            let library = Rc::clone(&library);
            spawn_local(async move { library.show_metrics(post_id).await });
        })
    };

    let hide_metrics = {
        let library = Rc::clone(&library);
        Callback::new(move |()| library.hide_metrics())
    };

    let close_dialog = move |answer: PromptResult| {
        let Some(post_id) = scheduling.get_untracked() else {
            return;
        };
        scheduling.set(None);

        let library = Rc::clone(&library);
        let state = state.clone();
        spawn_local(async move {
            if let Some(notice) = library.schedule(post_id, answer).await.notice() {
                state.notify(notice);
            }
        });
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Posts"</h1>
                    <p class="text-gray-500 mt-1">"Drafts, scheduled and published posts"</p>
                </div>
                <button
                    on:click=move |_: MouseEvent| refresh()
                    class="px-4 py-2 bg-gray-200 hover:bg-gray-300 rounded-lg font-medium"
                >
                    "Refresh"
                </button>
            </div>

            {move || posts.with(|s| s.metrics.post_id.is_some()).then(|| {
                view! {
                    <MetricsCard panel=Signal::derive(move || posts.with(|s| s.metrics.clone())) on_close=hide_metrics />
                }
            })}

            {move || {
                let (list, loading) = posts.with(|s| (s.posts.data.clone(), s.posts.is_loading()));

                if loading {
                    view! { <Loading /> }.into_view()
                } else if !list.is_empty() {
                    view! {
                        <div class="space-y-4">
                            {list
                                .into_iter()
                                .map(|post| view! {
                                    <PostCard post=post scheduling=scheduling on_metrics=show_metrics />
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="bg-white rounded-lg shadow p-8 text-center text-gray-500">
                            <p class="mb-4">"No posts yet."</p>
                            <A href=Route::Generate.path() class="text-blue-600 hover:underline">
                                "Generate your first post"
                            </A>
                        </div>
                    }
                    .into_view()
                }
            }}

            {move || scheduling.get().map(|_| view! {
                <PromptDialog
                    message="Minutes from now, or a date and time in UTC (2025-08-09T15:30):"
                    on_close=close_dialog.clone()
                />
            })}
        </div>
    }
}

#[component]
fn PostCard(
    post: Post,
    scheduling: RwSignal<Option<i64>>,
    on_metrics: Callback<i64>,
) -> impl IntoView {
    let badge = match post.status {
        PostStatus::Draft => "bg-gray-100 text-gray-700",
        PostStatus::Scheduled => "bg-yellow-100 text-yellow-800",
        PostStatus::Posted => "bg-green-100 text-green-800",
        PostStatus::Unknown => "bg-red-100 text-red-700",
    };
    let timing = match (post.scheduled_time, post.posted_at) {
        (_, Some(at)) => Some(format!("Posted {}", at.format("%Y-%m-%d %H:%M"))),
        (Some(at), None) => Some(format!("Scheduled for {}", at.format("%Y-%m-%d %H:%M"))),
        (None, None) => None,
    };
    let post_id = post.id;

    view! {
        <article class="bg-white rounded-lg shadow p-6 space-y-3">
            <div class="flex items-center justify-between">
                <span class=format!("px-2 py-1 rounded text-xs font-medium uppercase {}", badge)>
                    {post.status.as_str()}
                </span>
                {timing.map(|t| view! { <span class="text-sm text-gray-400">{t}</span> })}
            </div>
            <p class="whitespace-pre-wrap text-gray-800">{post.content.clone()}</p>
            <p class="text-blue-600 text-sm">{post.hashtags.clone()}</p>
            {post.can_schedule().then(|| view! {
                <button
                    on:click=move |_: MouseEvent| scheduling.set(Some(post_id))
                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg text-sm"
                >
                    "Schedule"
                </button>
            })}
            {(post.status == PostStatus::Posted).then(|| view! {
                <button
                    on:click=move |_: MouseEvent| on_metrics.call(post_id)
                    class="px-4 py-2 bg-gray-100 hover:bg-gray-200 text-gray-800 rounded-lg text-sm"
                >
                    "Metrics"
                </button>
            })}
        </article>
    }
}

/// Engagement of the post picked with its Metrics button
#[component]
fn MetricsCard(panel: Signal<MetricsPanel>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <section class="bg-white rounded-lg shadow p-6 space-y-3">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">
                    {move || panel.with(|p| format!("Post #{}", p.post_id.unwrap_or_default()))}
                </h2>
                <button
                    on:click=move |_: MouseEvent| on_close.call(())
                    class="text-gray-500 hover:text-gray-800"
                >
                    "Close"
                </button>
            </div>
            {move || panel.with(|p| {
                let details = &p.details;
                if details.is_loading() {
                    return view! { <p class="text-gray-500">"Loading metrics..."</p> }.into_view();
                }
                match &details.data {
                    Some(found) => match found.analytics {
                        Some(m) => view! {
                            <p class="text-gray-700">{found.post_content.clone()}</p>
                            <p class="text-sm text-gray-500">
                                {format!(
                                    "{} likes · {} comments · {} shares · {} impressions",
                                    m.likes, m.comments, m.shares, m.impressions,
                                )}
                            </p>
                        }
                        .into_view(),
                        None => view! {
                            <p class="text-gray-500">"No analytics for this post yet."</p>
                        }
                        .into_view(),
                    },
                    None if details.error.is_some() => view! {
                        <p class="text-red-600">"Could not load metrics."</p>
                    }
                    .into_view(),
                    None => ().into_view(),
                }
            })}
        </section>
    }
}
