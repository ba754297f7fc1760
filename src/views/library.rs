//! Post Library
//!
//! Full post list with a per-draft schedule action and a metrics panel for
//! one post at a time. Scheduling is a backend call; the new status only
//! shows up after the list is fetched again.

use chrono::Utc;

use crate::api::{ContentApi, DelayError, Post, PostAnalytics, ScheduleAt};
use crate::dialog::{Notice, PromptResult};
use crate::lifecycle::{fetch_into, Remote, Scope, Store};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LibraryState {
    pub posts: Remote<Vec<Post>>,
    pub metrics: MetricsPanel,
}

/// Engagement of the post whose metrics are open. `details.data` is `None`
/// until loaded; its `analytics` is `None` for a post nobody has seen yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsPanel {
    pub post_id: Option<i64>,
    pub details: Remote<Option<PostAnalytics>>,
}

/// Result of a schedule action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// Dialog cancelled or left blank; nothing was sent
    Aborted,
    /// Delay or time did not validate; nothing was sent
    Rejected(DelayError),
    Scheduled(ScheduleAt),
    Failed,
}

impl ScheduleOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            ScheduleOutcome::Aborted => None,
            ScheduleOutcome::Rejected(e) => Some(Notice::error(e.to_string())),
            ScheduleOutcome::Scheduled(_) => Some(Notice::success("Post scheduled successfully!")),
            ScheduleOutcome::Failed => Some(Notice::error("Error scheduling post")),
        }
    }
}

pub struct PostLibrary<A, S> {
    api: A,
    state: S,
    scope: Scope,
}

impl<A, S> PostLibrary<A, S>
where
    A: ContentApi,
    S: Store<LibraryState>,
{
    pub fn new(api: A, state: S, scope: Scope) -> Self {
        Self { api, state, scope }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Fetch the full list and replace the displayed one. Not guarded against
    /// overlap: concurrent refreshes each apply on arrival.
    pub async fn refresh(&self) {
        fetch_into(
            &self.scope,
            &self.state,
            "posts",
            |s: &mut LibraryState| &mut s.posts,
            self.api.list_posts(),
        )
        .await;
    }

    /// Schedule `post_id` for what the user typed into the dialog: minutes
    /// from now, or a date and time (UTC).
    ///
    /// On success the list is fetched again; on failure the stale list stays.
    pub async fn schedule(&self, post_id: i64, answer: PromptResult) -> ScheduleOutcome {
        let Some(input) = answer.value() else {
            return ScheduleOutcome::Aborted;
        };

        let when = match ScheduleAt::parse(input, Utc::now().naive_utc()) {
            Ok(when) => when,
            Err(e) => return ScheduleOutcome::Rejected(e),
        };

        match self.api.schedule_post(post_id, when).await {
            Ok(()) => {
                tracing::info!(post_id, %when, "Post scheduled");
                self.refresh().await;
                ScheduleOutcome::Scheduled(when)
            }
            Err(e) => {
                tracing::error!(post_id, error = %e, "Error scheduling post");
                ScheduleOutcome::Failed
            }
        }
    }

    /// Open the metrics panel on `post_id` and load its engagement.
    ///
    /// A reply for a post that is no longer the open one is dropped.
    pub async fn show_metrics(&self, post_id: i64) {
        self.scope.apply(&self.state, |s: &mut LibraryState| {
            if s.metrics.post_id != Some(post_id) {
                s.metrics = MetricsPanel {
                    post_id: Some(post_id),
                    details: Remote::default(),
                };
            }
            s.metrics.details.begin();
        });

        let result = self.api.post_analytics(post_id).await;
        if let Err(e) = &result {
            tracing::error!(post_id, error = %e, "Error fetching post metrics");
        }

        self.scope.apply(&self.state, |s: &mut LibraryState| {
            if s.metrics.post_id == Some(post_id) {
                s.metrics.details.finish(result.map(Some));
            } else {
                tracing::debug!(post_id, "Metrics panel moved on, dropping reply");
            }
        });
    }

    pub fn hide_metrics(&self) {
        self.state
            .update(|s: &mut LibraryState| s.metrics = MetricsPanel::default());
    }
}
