//! Analytics
//!
//! Aggregate engagement snapshot, the best performing posts, and the
//! engagement of every post. The three fetches are independent; any can fail
//! without touching the others.

use futures_util::future::join3;

use crate::api::{AnalyticsSummary, ContentApi, PostEngagement, TopPost};
use crate::lifecycle::{fetch_into, Remote, Scope, Store};

/// How many top posts to request
pub const TOP_POSTS_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsState {
    pub summary: Remote<AnalyticsSummary>,
    pub top_posts: Remote<Vec<TopPost>>,
    pub per_post: Remote<Vec<PostEngagement>>,
}

pub struct AnalyticsView<A, S> {
    api: A,
    state: S,
    scope: Scope,
}

impl<A, S> AnalyticsView<A, S>
where
    A: ContentApi,
    S: Store<AnalyticsState>,
{
    pub fn new(api: A, state: S, scope: Scope) -> Self {
        Self { api, state, scope }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub async fn refresh(&self) {
        let summary = fetch_into(
            &self.scope,
            &self.state,
            "analytics",
            |s: &mut AnalyticsState| &mut s.summary,
            self.api.analytics_summary(),
        );
        let top_posts = fetch_into(
            &self.scope,
            &self.state,
            "top posts",
            |s: &mut AnalyticsState| &mut s.top_posts,
            self.api.top_posts(TOP_POSTS_LIMIT),
        );

        let per_post = fetch_into(
            &self.scope,
            &self.state,
            "post engagement",
            |s: &mut AnalyticsState| &mut s.per_post,
            self.api.content_analytics(),
        );

        join3(summary, top_posts, per_post).await;
    }
}
