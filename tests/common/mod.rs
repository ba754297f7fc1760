#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;

use brandcast::{
    AnalyticsSummary, ApiError, ApiResult, Config, ContentApi, DraftRequest, GeneratedContent,
    Post, PostAnalytics, PostEngagement, PostStatus, Profile, ScheduleAt, TopPost,
};

/// Install a test subscriber once. `RUST_LOG` wins over the configured level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Config::from_env().logging.level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn post(id: i64, status: PostStatus) -> Post {
    Post::new(id, status, format!("post {}", id))
}

pub fn failure() -> ApiError {
    ApiError::request_failed("backend unavailable")
}

/// Calls received by [`MockApi`], in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListPosts,
    GetProfile,
    SaveProfile(Profile),
    Generate(String),
    CreateDraft(DraftRequest),
    Schedule { post_id: i64, when: ScheduleAt },
    AnalyticsSummary,
    TopPosts(usize),
    PostAnalytics(i64),
    ContentAnalytics,
    Trends(Option<String>),
    Suggestions,
    Health,
}

type Replies<T> = VecDeque<oneshot::Receiver<ApiResult<T>>>;

#[derive(Default)]
struct Script {
    calls: Vec<Call>,
    list_posts: Replies<Vec<Post>>,
    get_profile: Replies<Profile>,
    save_profile: Replies<()>,
    generate: Replies<GeneratedContent>,
    create_draft: Replies<()>,
    schedule: Replies<()>,
    analytics: Replies<AnalyticsSummary>,
    top_posts: Replies<Vec<TopPost>>,
    post_analytics: Replies<PostAnalytics>,
    content_analytics: Replies<Vec<PostEngagement>>,
    trends: Replies<Vec<String>>,
    suggestions: Replies<Vec<String>>,
    health: Replies<String>,
}

/// Scripted backend. Each endpoint answers from its own queue; a reply is
/// either ready up front or held back until the test sends it.
#[derive(Clone, Default)]
pub struct MockApi {
    script: Arc<Mutex<Script>>,
}

fn ready<T>(result: ApiResult<T>) -> oneshot::Receiver<ApiResult<T>> {
    let (tx, rx) = oneshot::channel();
    let _ = tx.send(result);
    rx
}

async fn answer<T>(reply: Option<oneshot::Receiver<ApiResult<T>>>, what: &str) -> ApiResult<T> {
    match reply {
        Some(rx) => rx
            .await
            .unwrap_or_else(|_| Err(ApiError::request_failed(format!("{} reply dropped", what)))),
        None => Err(ApiError::request_failed(format!("no reply scripted for {}", what))),
    }
}

macro_rules! scripted {
    ($field:ident, $on:ident, $defer:ident, $ty:ty) => {
        pub fn $on(&self, result: ApiResult<$ty>) -> &Self {
            self.script.lock().$field.push_back(ready(result));
            self
        }

        pub fn $defer(&self) -> oneshot::Sender<ApiResult<$ty>> {
            let (tx, rx) = oneshot::channel();
            self.script.lock().$field.push_back(rx);
            tx
        }
    };
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.lock().calls.clone()
    }

    pub fn call_count(&self, call: &Call) -> usize {
        self.script.lock().calls.iter().filter(|c| *c == call).count()
    }

    scripted!(list_posts, on_list_posts, defer_list_posts, Vec<Post>);
    scripted!(get_profile, on_get_profile, defer_get_profile, Profile);
    scripted!(save_profile, on_save_profile, defer_save_profile, ());
    scripted!(generate, on_generate, defer_generate, GeneratedContent);
    scripted!(create_draft, on_create_draft, defer_create_draft, ());
    scripted!(schedule, on_schedule, defer_schedule, ());
    scripted!(analytics, on_analytics, defer_analytics, AnalyticsSummary);
    scripted!(top_posts, on_top_posts, defer_top_posts, Vec<TopPost>);
    scripted!(post_analytics, on_post_analytics, defer_post_analytics, PostAnalytics);
    scripted!(
        content_analytics,
        on_content_analytics,
        defer_content_analytics,
        Vec<PostEngagement>
    );
    scripted!(trends, on_trends, defer_trends, Vec<String>);
    scripted!(suggestions, on_suggestions, defer_suggestions, Vec<String>);
    scripted!(health, on_health, defer_health, String);

    fn record(&self, call: Call) {
        self.script.lock().calls.push(call);
    }
}

#[async_trait(?Send)]
impl ContentApi for MockApi {
    async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        self.record(Call::ListPosts);
        let reply = self.script.lock().list_posts.pop_front();
        answer(reply, "list_posts").await
    }

    async fn get_profile(&self) -> ApiResult<Profile> {
        self.record(Call::GetProfile);
        let reply = self.script.lock().get_profile.pop_front();
        answer(reply, "get_profile").await
    }

    async fn save_profile(&self, profile: &Profile) -> ApiResult<()> {
        self.record(Call::SaveProfile(profile.clone()));
        let reply = self.script.lock().save_profile.pop_front();
        answer(reply, "save_profile").await
    }

    async fn generate(&self, prompt: &str) -> ApiResult<GeneratedContent> {
        self.record(Call::Generate(prompt.to_string()));
        let reply = self.script.lock().generate.pop_front();
        answer(reply, "generate").await
    }

    async fn create_draft(&self, draft: &DraftRequest) -> ApiResult<()> {
        self.record(Call::CreateDraft(draft.clone()));
        let reply = self.script.lock().create_draft.pop_front();
        answer(reply, "create_draft").await
    }

    async fn schedule_post(&self, post_id: i64, when: ScheduleAt) -> ApiResult<()> {
        self.record(Call::Schedule { post_id, when });
        let reply = self.script.lock().schedule.pop_front();
        answer(reply, "schedule_post").await
    }

    async fn analytics_summary(&self) -> ApiResult<AnalyticsSummary> {
        self.record(Call::AnalyticsSummary);
        let reply = self.script.lock().analytics.pop_front();
        answer(reply, "analytics_summary").await
    }

    async fn top_posts(&self, limit: usize) -> ApiResult<Vec<TopPost>> {
        self.record(Call::TopPosts(limit));
        let reply = self.script.lock().top_posts.pop_front();
        answer(reply, "top_posts").await
    }

    async fn post_analytics(&self, post_id: i64) -> ApiResult<PostAnalytics> {
        self.record(Call::PostAnalytics(post_id));
        let reply = self.script.lock().post_analytics.pop_front();
        answer(reply, "post_analytics").await
    }

    async fn content_analytics(&self) -> ApiResult<Vec<PostEngagement>> {
        self.record(Call::ContentAnalytics);
        let reply = self.script.lock().content_analytics.pop_front();
        answer(reply, "content_analytics").await
    }

    async fn trends(&self, industry: Option<&str>) -> ApiResult<Vec<String>> {
        self.record(Call::Trends(industry.map(str::to_string)));
        let reply = self.script.lock().trends.pop_front();
        answer(reply, "trends").await
    }

    async fn suggestions(&self) -> ApiResult<Vec<String>> {
        self.record(Call::Suggestions);
        let reply = self.script.lock().suggestions.pop_front();
        answer(reply, "suggestions").await
    }

    async fn health(&self) -> ApiResult<String> {
        self.record(Call::Health);
        let reply = self.script.lock().health.pop_front();
        answer(reply, "health").await
    }
}
