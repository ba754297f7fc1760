//! Backend API
//!
//! Client side of the content backend's REST API.
//!
//! # Endpoints
//!
//! ## Content
//! - `GET /content/list` - All posts, newest first
//! - `POST /content/generate` - Generate a post from a prompt
//! - `POST /content/draft` - Persist generated content as a draft
//! - `POST /content/schedule` - Schedule a draft `delay_minutes` from now or
//!   at an absolute `scheduled_time`
//! - `GET /content/analytics` - Every post with its engagement metrics
//!
//! ## Profile
//! - `GET /profile/` - Current profile (or a "no profile" message)
//! - `POST /profile/` - Save name, headline and about
//!
//! ## Analytics
//! - `GET /analytics/` - Aggregate snapshot
//! - `GET /analytics/top-performing` - Posts ranked by engagement
//! - `GET /analytics/post/{post_id}` - Metrics of one post
//!
//! ## Trends
//! - `GET /trends/` - Industry trends, optionally for one industry
//! - `GET /trends/suggestions` - Prompt suggestions derived from trends
//!
//! ## Health
//! - `GET /` - Liveness message

pub mod client;
pub mod dto;
pub mod error;

pub use client::ApiClient;
pub use dto::{
    AnalyticsSummary, AverageEngagement, DelayError, DelayMinutes, DraftRequest,
    GeneratedContent, Post, PostAnalytics, PostEngagement, PostMetrics, PostStatus, Profile,
    ScheduleAt, TopPost, MAX_DELAY_MINUTES,
};
pub use error::{ApiError, ApiResult};

use async_trait::async_trait;

/// Operations the views need from the backend.
///
/// Futures are not required to be `Send`: in the browser every call runs on
/// the single UI thread.
#[async_trait(?Send)]
pub trait ContentApi {
    async fn list_posts(&self) -> ApiResult<Vec<Post>>;

    async fn get_profile(&self) -> ApiResult<Profile>;

    async fn save_profile(&self, profile: &Profile) -> ApiResult<()>;

    async fn generate(&self, prompt: &str) -> ApiResult<GeneratedContent>;

    async fn create_draft(&self, draft: &DraftRequest) -> ApiResult<()>;

    async fn schedule_post(&self, post_id: i64, when: ScheduleAt) -> ApiResult<()>;

    async fn analytics_summary(&self) -> ApiResult<AnalyticsSummary>;

    async fn top_posts(&self, limit: usize) -> ApiResult<Vec<TopPost>>;

    async fn post_analytics(&self, post_id: i64) -> ApiResult<PostAnalytics>;

    async fn content_analytics(&self) -> ApiResult<Vec<PostEngagement>>;

    async fn trends(&self, industry: Option<&str>) -> ApiResult<Vec<String>>;

    async fn suggestions(&self) -> ApiResult<Vec<String>>;

    async fn health(&self) -> ApiResult<String>;
}
