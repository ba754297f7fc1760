//! Analytics Page
//!
//! Engagement totals with per-post averages, the best performing posts, and
//! every post's own metrics.

use brandcast::{AnalyticsState, AnalyticsSummary, AnalyticsView, Route};
use leptos::ev::MouseEvent;
use leptos::*;
use std::rc::Rc;

use crate::components::{Loading, StatCard};
use crate::state::{use_global_state, SignalStore};

/// Analytics page component
#[component]
pub fn Analytics() -> impl IntoView {
    let state = use_global_state();
    let store = SignalStore::new(AnalyticsState::default());
    let view_model = Rc::new(AnalyticsView::new(
        state.api.clone(),
        store,
        super::activate(Route::Analytics),
    ));
    let analytics = store.signal();

    let refresh = move || {
        let view_model = Rc::clone(&view_model);
        spawn_local(async move { view_model.refresh().await });
    };
    refresh();

    let total = move |pick: fn(&AnalyticsSummary) -> u64| {
        Signal::derive(move || analytics.with(|a| pick(&a.summary.data).to_string()))
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Analytics"</h1>
                    <p class="text-gray-500 mt-1">"How your posts are performing"</p>
                </div>
                <button
                    on:click=move |_: MouseEvent| refresh()
                    class="px-4 py-2 bg-gray-200 hover:bg-gray-300 rounded-lg font-medium"
                >
                    "Refresh"
                </button>
            </div>

            {move || if analytics.with(|a| a.summary.is_loading()) {
                view! {
                    <div>
                        <p class="text-gray-500 text-center">"Loading analytics..."</p>
                        <Loading />
                    </div>
                }
                .into_view()
            } else {
                view! {
                    <section class="grid grid-cols-2 md:grid-cols-5 gap-4">
                        <StatCard label="Total Posts" value=total(|s| s.total_posts) />
                        <StatCard label="Likes" value=total(|s| s.total_likes) accent="text-pink-600" />
                        <StatCard label="Comments" value=total(|s| s.total_comments) accent="text-purple-600" />
                        <StatCard label="Shares" value=total(|s| s.total_shares) accent="text-green-600" />
                        <StatCard label="Impressions" value=total(|s| s.total_impressions) accent="text-gray-700" />
                    </section>
                    <p class="text-sm text-gray-500">
                        {move || analytics.with(|a| {
                            let avg = a.summary.data.average_engagement;
                            format!(
                                "Per post on average: {:.1} likes · {:.1} comments · {:.1} shares",
                                avg.likes, avg.comments, avg.shares,
                            )
                        })}
                    </p>
                }
                .into_view()
            }}

            <section class="bg-white rounded-lg shadow p-6">
                <h2 class="text-xl font-semibold mb-4">"Top Performing Posts"</h2>
                {move || {
                    let (top, loading) = analytics.with(|a| (a.top_posts.data.clone(), a.top_posts.is_loading()));
                    if loading {
                        view! { <Loading /> }.into_view()
                    } else if top.is_empty() {
                        view! { <p class="text-gray-500">"No engagement data yet."</p> }.into_view()
                    } else {
                        view! {
                            <ol class="space-y-3">
                                {top.into_iter().map(|entry| view! {
                                    <li class="flex items-center justify-between border-b border-gray-100 pb-3">
                                        <span class="text-gray-800">{entry.post_preview}</span>
                                        <span class="text-sm text-gray-500 whitespace-nowrap ml-4">
                                            {format!(
                                                "{} likes · {} comments · {} shares",
                                                entry.analytics.likes,
                                                entry.analytics.comments,
                                                entry.analytics.shares,
                                            )}
                                        </span>
                                    </li>
                                }).collect_view()}
                            </ol>
                        }
                        .into_view()
                    }
                }}
            </section>

            <section class="bg-white rounded-lg shadow p-6">
                <h2 class="text-xl font-semibold mb-4">"All Posts"</h2>
                {move || {
                    let (rows, loading) = analytics.with(|a| (a.per_post.data.clone(), a.per_post.is_loading()));
                    if loading {
                        view! { <Loading /> }.into_view()
                    } else if rows.is_empty() {
                        view! { <p class="text-gray-500">"No posts yet."</p> }.into_view()
                    } else {
                        view! {
                            <table class="w-full text-sm">
                                <thead>
                                    <tr class="text-left text-gray-500 border-b border-gray-200">
                                        <th class="py-2">"Post"</th>
                                        <th class="py-2">"Status"</th>
                                        <th class="py-2 text-right">"Likes"</th>
                                        <th class="py-2 text-right">"Comments"</th>
                                        <th class="py-2 text-right">"Shares"</th>
                                        <th class="py-2 text-right">"Impressions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows.into_iter().map(|row| view! {
                                        <tr class="border-b border-gray-100">
                                            <td class="py-2 pr-4 text-gray-800">{row.content_preview}</td>
                                            <td class="py-2 uppercase text-xs">{row.status.as_str()}</td>
                                            <td class="py-2 text-right">{row.analytics.likes}</td>
                                            <td class="py-2 text-right">{row.analytics.comments}</td>
                                            <td class="py-2 text-right">{row.analytics.shares}</td>
                                            <td class="py-2 text-right">{row.analytics.impressions}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_view()
                    }
                }}
            </section>
        </div>
    }
}
