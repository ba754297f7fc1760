//! Dashboard
//!
//! Post counts derived client-side from the full post list.

use crate::api::{ContentApi, Post, PostStatus};
use crate::lifecycle::{fetch_into, Remote, Scope, Store};
use crate::shell::Route;

/// Shortcuts rendered under the stat cards
pub const QUICK_ACTIONS: [(Route, &str); 2] = [
    (Route::Generate, "Generate New Post"),
    (Route::Trends, "View Trends"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostStats {
    pub total: usize,
    pub scheduled: usize,
    pub published: usize,
}

impl PostStats {
    pub fn from_posts(posts: &[Post]) -> Self {
        posts.iter().fold(
            PostStats {
                total: posts.len(),
                ..Default::default()
            },
            |mut stats, post| {
                match post.status {
                    PostStatus::Scheduled => stats.scheduled += 1,
                    PostStatus::Posted => stats.published += 1,
                    PostStatus::Draft | PostStatus::Unknown => {}
                }
                stats
            },
        )
    }
}

pub type DashboardState = Remote<PostStats>;

pub struct Dashboard<A, S> {
    api: A,
    state: S,
    scope: Scope,
}

impl<A, S> Dashboard<A, S>
where
    A: ContentApi,
    S: Store<DashboardState>,
{
    pub fn new(api: A, state: S, scope: Scope) -> Self {
        Self { api, state, scope }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Fetch the post list and recount. On failure the counts keep their
    /// previous (initially zero) values.
    pub async fn load(&self) {
        let request = async {
            self.api
                .list_posts()
                .await
                .map(|posts| PostStats::from_posts(&posts))
        };

        fetch_into(
            &self.scope,
            &self.state,
            "stats",
            |s: &mut DashboardState| s,
            request,
        )
        .await;
    }
}
