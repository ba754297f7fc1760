//! Data Transfer Objects
//!
//! Wire shapes exchanged with the content backend. The backend is loose about
//! nulls (nullable columns come back as `null`), so most string fields decode
//! `null` and absence to their default instead of failing the whole response.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

// ============================================
// Posts
// ============================================

/// Lifecycle state of a post, advanced only by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Scheduled,
    Posted,
    /// Any status string this client does not know about
    #[serde(other)]
    Unknown,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Scheduled => "scheduled",
            PostStatus::Posted => "posted",
            PostStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A post as listed by `/content/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: PostStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hashtags: String,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub scheduled_time: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub posted_at: Option<NaiveDateTime>,
}

impl Post {
    pub fn new(id: i64, status: PostStatus, content: impl Into<String>) -> Self {
        Self {
            id,
            status,
            content: content.into(),
            hashtags: String::new(),
            prompt: None,
            scheduled_time: None,
            posted_at: None,
        }
    }

    pub fn hashtags(mut self, hashtags: impl Into<String>) -> Self {
        self.hashtags = hashtags.into();
        self
    }

    /// Only drafts can be handed to the scheduler
    pub fn can_schedule(&self) -> bool {
        self.status == PostStatus::Draft
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<Post>,
    #[serde(default)]
    pub total: Option<usize>,
}

// ============================================
// Profile
// ============================================

/// Profile fields as edited in the profile form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub about: String,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        headline: impl Into<String>,
        about: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            headline: headline.into(),
            about: about.into(),
        }
    }
}

// ============================================
// Content generation
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// Preview returned by the generator endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hashtags: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub post: GeneratedContent,
}

/// Body of the create-draft call. `id` is the row the generator already
/// persisted, so the backend can update it instead of inserting a duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub prompt: String,
    pub content: String,
    pub hashtags: String,
}

// ============================================
// Scheduling
// ============================================

/// Upper bound on how far ahead a post can be scheduled: one year
pub const MAX_DELAY_MINUTES: u32 = 365 * 24 * 60;

/// Wire format of an absolute schedule time (naive, UTC)
const SCHEDULE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Validated schedule delay, in whole minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DelayMinutes(u32);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DelayError {
    #[error("Enter a delay in minutes or a date and time")]
    Empty,

    #[error("'{0}' is not a whole number of minutes")]
    NotANumber(String),

    #[error("'{0}' is neither a number of minutes nor a date and time (YYYY-MM-DDTHH:MM)")]
    Unrecognized(String),

    #[error("Delay must be at least one minute")]
    NotPositive,

    #[error("Scheduled time must be in the future")]
    InPast,

    #[error("Delay cannot exceed {} minutes", MAX_DELAY_MINUTES)]
    TooLarge,
}

impl DelayMinutes {
    pub fn new(minutes: u32) -> Result<Self, DelayError> {
        match minutes {
            0 => Err(DelayError::NotPositive),
            m if m > MAX_DELAY_MINUTES => Err(DelayError::TooLarge),
            m => Ok(Self(m)),
        }
    }

    pub fn parse(input: &str) -> Result<Self, DelayError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(DelayError::Empty);
        }

        let minutes: i64 = input
            .parse()
            .map_err(|_| DelayError::NotANumber(input.to_string()))?;

        if minutes <= 0 {
            return Err(DelayError::NotPositive);
        }
        let minutes = u32::try_from(minutes).map_err(|_| DelayError::TooLarge)?;
        Self::new(minutes)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

/// When a scheduled post should go out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleAt {
    /// Relative to the moment the backend receives the call
    After(DelayMinutes),
    /// Absolute UTC time
    At(NaiveDateTime),
}

impl ScheduleAt {
    /// Parse what the user typed: a number is a delay in minutes, anything
    /// else must be a date and time later than `now` and within the same
    /// one-year bound as a delay.
    pub fn parse(input: &str, now: NaiveDateTime) -> Result<Self, DelayError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(DelayError::Empty);
        }

        if input.parse::<f64>().is_ok() {
            return DelayMinutes::parse(input).map(ScheduleAt::After);
        }

        let at = parse_timestamp(input)
            .or_else(|| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M").ok())
            .or_else(|| NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M").ok())
            .ok_or_else(|| DelayError::Unrecognized(input.to_string()))?;

        if at <= now {
            return Err(DelayError::InPast);
        }
        if (at - now).num_minutes() > i64::from(MAX_DELAY_MINUTES) {
            return Err(DelayError::TooLarge);
        }
        Ok(ScheduleAt::At(at))
    }
}

impl std::fmt::Display for ScheduleAt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleAt::After(delay) => write!(f, "in {} minutes", delay.get()),
            ScheduleAt::At(at) => write!(f, "at {} UTC", at.format("%Y-%m-%d %H:%M")),
        }
    }
}

/// Query parameters of the schedule call; exactly one of the two is sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleQuery {
    pub post_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
}

impl ScheduleQuery {
    pub fn new(post_id: i64, when: ScheduleAt) -> Self {
        let (delay_minutes, scheduled_time) = match when {
            ScheduleAt::After(delay) => (Some(delay.get()), None),
            ScheduleAt::At(at) => (None, Some(at.format(SCHEDULE_TIME_FORMAT).to_string())),
        };
        Self {
            post_id,
            delay_minutes,
            scheduled_time,
        }
    }
}

// ============================================
// Analytics
// ============================================

/// Aggregate snapshot; every absent counter reads as zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub total_posts: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_likes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_comments: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_shares: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_impressions: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub average_engagement: AverageEngagement,
}

/// Per-post means over every post with analytics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AverageEngagement {
    #[serde(deserialize_with = "null_as_default")]
    pub likes: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub comments: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub shares: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostMetrics {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub impressions: u64,
}

/// Entry of `/analytics/top-performing`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopPost {
    pub post_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub post_preview: String,
    #[serde(default)]
    pub analytics: PostMetrics,
    #[serde(default)]
    pub engagement_score: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopPostsResponse {
    #[serde(default)]
    pub top_posts: Vec<TopPost>,
}

/// Reply of `/analytics/post/{id}`. `analytics` is `None` when the post has
/// not been published yet and the backend answers with a message instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAnalytics {
    pub post_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub post_content: String,
    #[serde(default)]
    pub analytics: Option<PostMetrics>,
}

/// Row of `/content/analytics`: every post, with zero metrics until published
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEngagement {
    pub post_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: PostStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content_preview: String,
    #[serde(default)]
    pub analytics: PostMetrics,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentAnalyticsResponse {
    #[serde(default)]
    pub total_posts: usize,
    #[serde(default)]
    pub rows: Vec<PostEngagement>,
}

// ============================================
// Trends & health
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendsResponse {
    pub trends: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub message: String,
}

// ============================================
// Lenient decoding helpers
// ============================================

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts naive ISO date-times (what the backend emits) as well as RFC 3339
/// strings with an offset, which are converted to UTC. Anything else is
/// logged and read as absent so one bad row cannot sink the whole list.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let parsed = parse_timestamp(&raw);
    if parsed.is_none() {
        tracing::warn!(value = %raw, "Unparsable timestamp, ignoring");
    }
    Ok(parsed)
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_decodes_backend_shape() {
        let json = r#"{
            "id": 7,
            "prompt": "AI trends",
            "content": "Hello",
            "hashtags": null,
            "status": "scheduled",
            "scheduled_time": "2025-08-09T15:30:00.123456",
            "posted_at": null
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.status, PostStatus::Scheduled);
        assert_eq!(post.hashtags, "");
        assert_eq!(
            post.scheduled_time.unwrap().format("%Y-%m-%d %H:%M").to_string(),
            "2025-08-09 15:30"
        );
        assert!(post.posted_at.is_none());
    }

    #[test]
    fn test_unknown_status_does_not_fail() {
        let post: Post = serde_json::from_str(r#"{"id": 1, "status": "archived"}"#).unwrap();
        assert_eq!(post.status, PostStatus::Unknown);
        assert!(!post.can_schedule());
    }

    #[test]
    fn test_offset_timestamp_is_normalized_to_utc() {
        let post: Post =
            serde_json::from_str(r#"{"id": 1, "posted_at": "2025-01-01T10:00:00+02:00"}"#)
                .unwrap();
        assert_eq!(
            post.posted_at.unwrap().format("%H:%M").to_string(),
            "08:00"
        );
    }

    #[test]
    fn test_unparsable_timestamp_keeps_the_list() {
        let json = r#"{"posts": [
            {"id": 1, "status": "posted", "posted_at": "2025-08-09T15:30:00"},
            {"id": 2, "status": "posted", "posted_at": "Aug 9 2025"}
        ]}"#;

        let list: PostListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(list.posts.len(), 2);
        assert!(list.posts[0].posted_at.is_some());
        assert!(list.posts[1].posted_at.is_none());
        assert_eq!(list.posts[1].status, PostStatus::Posted);
    }

    #[test]
    fn test_profile_without_profile() {
        let profile: Profile = serde_json::from_str(r#"{"message": "No profile found"}"#).unwrap();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_analytics_missing_fields_are_zero() {
        let summary: AnalyticsSummary =
            serde_json::from_str(r#"{"message": "No analytics data available", "total_posts": 0}"#)
                .unwrap();
        assert_eq!(summary, AnalyticsSummary::default());

        let summary: AnalyticsSummary =
            serde_json::from_str(r#"{"total_posts": 3, "total_likes": null, "total_shares": 4}"#)
                .unwrap();
        assert_eq!(summary.total_posts, 3);
        assert_eq!(summary.total_likes, 0);
        assert_eq!(summary.total_comments, 0);
        assert_eq!(summary.total_shares, 4);
        assert_eq!(summary.average_engagement, AverageEngagement::default());
    }

    #[test]
    fn test_average_engagement_decodes() {
        let summary: AnalyticsSummary = serde_json::from_str(
            r#"{"total_posts": 2, "total_likes": 5,
                "average_engagement": {"likes": 2.5, "comments": 1, "shares": null}}"#,
        )
        .unwrap();
        assert_eq!(summary.average_engagement.likes, 2.5);
        assert_eq!(summary.average_engagement.comments, 1.0);
        assert_eq!(summary.average_engagement.shares, 0.0);
    }

    #[test]
    fn test_post_analytics_without_metrics() {
        let reply: PostAnalytics = serde_json::from_str(
            r#"{"message": "No analytics found for this post", "post_id": 4}"#,
        )
        .unwrap();
        assert_eq!(reply.post_id, 4);
        assert!(reply.analytics.is_none());
    }

    #[test]
    fn test_content_analytics_rows() {
        let reply: ContentAnalyticsResponse = serde_json::from_str(
            r#"{"total_posts": 2, "rows": [
                {"post_id": 2, "status": "posted", "content_preview": "b",
                 "analytics": {"likes": 3, "comments": 1, "shares": 0, "impressions": 40}},
                {"post_id": 1, "status": "draft", "content_preview": null,
                 "analytics": {"likes": 0, "comments": 0, "shares": 0, "impressions": 0}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(reply.total_posts, 2);
        assert_eq!(reply.rows[0].analytics.impressions, 40);
        assert_eq!(reply.rows[1].status, PostStatus::Draft);
        assert_eq!(reply.rows[1].content_preview, "");
    }

    #[test]
    fn test_draft_request_omits_missing_id() {
        let draft = DraftRequest {
            id: None,
            prompt: "p".into(),
            content: "c".into(),
            hashtags: "#h".into(),
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            serde_json::json!({"prompt": "p", "content": "c", "hashtags": "#h"})
        );

        let draft = DraftRequest { id: Some(9), ..draft };
        assert_eq!(serde_json::to_value(&draft).unwrap()["id"], 9);
    }

    // Scheduling

    fn now() -> NaiveDateTime {
        "2025-08-09T12:00:00".parse().unwrap()
    }

    #[test]
    fn test_parse_valid_delays() {
        assert_eq!(DelayMinutes::parse("5").unwrap().get(), 5);
        assert_eq!(DelayMinutes::parse(" 90 ").unwrap().get(), 90);
        assert_eq!(
            DelayMinutes::parse(&MAX_DELAY_MINUTES.to_string()).unwrap().get(),
            MAX_DELAY_MINUTES
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(DelayMinutes::parse(""), Err(DelayError::Empty));
        assert_eq!(
            DelayMinutes::parse("soon"),
            Err(DelayError::NotANumber("soon".into()))
        );
        assert_eq!(
            DelayMinutes::parse("2.5"),
            Err(DelayError::NotANumber("2.5".into()))
        );
        assert_eq!(DelayMinutes::parse("0"), Err(DelayError::NotPositive));
        assert_eq!(DelayMinutes::parse("-10"), Err(DelayError::NotPositive));
        assert_eq!(DelayMinutes::parse("600000"), Err(DelayError::TooLarge));
        assert_eq!(
            DelayMinutes::parse("99999999999999"),
            Err(DelayError::TooLarge)
        );
    }

    #[test]
    fn test_schedule_at_numbers_are_delays() {
        assert_eq!(
            ScheduleAt::parse("15", now()),
            Ok(ScheduleAt::After(DelayMinutes::new(15).unwrap()))
        );
        assert_eq!(
            ScheduleAt::parse("2.5", now()),
            Err(DelayError::NotANumber("2.5".into()))
        );
        assert_eq!(ScheduleAt::parse("-3", now()), Err(DelayError::NotPositive));
        assert_eq!(ScheduleAt::parse("  ", now()), Err(DelayError::Empty));
    }

    #[test]
    fn test_schedule_at_absolute_times() {
        let expected: NaiveDateTime = "2025-08-09T15:30:00".parse().unwrap();
        assert_eq!(
            ScheduleAt::parse("2025-08-09T15:30", now()),
            Ok(ScheduleAt::At(expected))
        );
        assert_eq!(
            ScheduleAt::parse("2025-08-09 15:30", now()),
            Ok(ScheduleAt::At(expected))
        );
        assert_eq!(
            ScheduleAt::parse("2025-08-09T17:30:00+02:00", now()),
            Ok(ScheduleAt::At(expected))
        );
    }

    #[test]
    fn test_schedule_at_rejects_bad_times() {
        assert_eq!(
            ScheduleAt::parse("2025-08-09T11:59", now()),
            Err(DelayError::InPast)
        );
        assert_eq!(
            ScheduleAt::parse("2025-08-09T12:00", now()),
            Err(DelayError::InPast)
        );
        assert_eq!(
            ScheduleAt::parse("2027-01-01T00:00", now()),
            Err(DelayError::TooLarge)
        );
        assert_eq!(
            ScheduleAt::parse("tomorrow", now()),
            Err(DelayError::Unrecognized("tomorrow".into()))
        );
    }

    #[test]
    fn test_schedule_query_sends_one_field() {
        let query = ScheduleQuery::new(3, ScheduleAt::After(DelayMinutes::new(10).unwrap()));
        assert_eq!(query.delay_minutes, Some(10));
        assert_eq!(query.scheduled_time, None);

        let at = "2025-08-09T15:30:00".parse().unwrap();
        let query = ScheduleQuery::new(3, ScheduleAt::At(at));
        assert_eq!(query.delay_minutes, None);
        assert_eq!(query.scheduled_time.as_deref(), Some("2025-08-09T15:30:00"));
    }
}
