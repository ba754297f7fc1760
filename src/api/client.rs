//! Content Backend REST Client
//!
//! HTTP client for the content assistant backend. One instance is built at
//! startup and shared by every view; it carries no auth, no retry and no
//! timeout, so a hung backend call stays pending until the caller gives up.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::dto::{
    AnalyticsSummary, ContentAnalyticsResponse, DraftRequest, GenerateRequest, GenerateResponse,
    GeneratedContent, HealthResponse, Post, PostAnalytics, PostEngagement, PostListResponse,
    Profile, ScheduleAt, ScheduleQuery, SuggestionsResponse, TopPost, TopPostsResponse,
    TrendsResponse,
};
use super::error::{ApiError, ApiResult};
use super::ContentApi;
use crate::config::ApiConfig;

/// Backend REST client bound to one base endpoint
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. "http://localhost:8000")
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base(base_url.as_ref()),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url)
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and turn transport errors and non-success statuses into
    /// the single failure kind.
    async fn send(&self, request: RequestBuilder, path: &str) -> ApiResult<Response> {
        tracing::debug!(path, "Sending request");

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::request_failed(format!(
                "{} returned {}: {}",
                path, status, body
            )))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(self.client.get(self.url(path)), path).await?;
        Ok(response.json().await?)
    }
}

#[async_trait(?Send)]
impl ContentApi for ApiClient {
    async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        let list: PostListResponse = self.get_json("/content/list").await?;
        Ok(list.posts)
    }

    async fn get_profile(&self) -> ApiResult<Profile> {
        self.get_json("/profile/").await
    }

    async fn save_profile(&self, profile: &Profile) -> ApiResult<()> {
        let path = "/profile/";
        let request = self.client.post(self.url(path)).query(&[
            ("name", profile.name.as_str()),
            ("headline", profile.headline.as_str()),
            ("about", profile.about.as_str()),
        ]);
        self.send(request, path).await?;
        Ok(())
    }

    async fn generate(&self, prompt: &str) -> ApiResult<GeneratedContent> {
        let path = "/content/generate";
        let request = self.client.post(self.url(path)).json(&GenerateRequest {
            prompt: prompt.to_string(),
        });
        let response: GenerateResponse = self.send(request, path).await?.json().await?;
        Ok(response.post)
    }

    async fn create_draft(&self, draft: &DraftRequest) -> ApiResult<()> {
        let path = "/content/draft";
        let request = self.client.post(self.url(path)).json(draft);
        self.send(request, path).await?;
        Ok(())
    }

    async fn schedule_post(&self, post_id: i64, when: ScheduleAt) -> ApiResult<()> {
        let path = "/content/schedule";
        let request = self
            .client
            .post(self.url(path))
            .query(&ScheduleQuery::new(post_id, when));
        self.send(request, path).await?;
        Ok(())
    }

    async fn analytics_summary(&self) -> ApiResult<AnalyticsSummary> {
        self.get_json("/analytics/").await
    }

    async fn top_posts(&self, limit: usize) -> ApiResult<Vec<TopPost>> {
        let path = "/analytics/top-performing";
        let request = self
            .client
            .get(self.url(path))
            .query(&[("limit", limit)]);
        let response: TopPostsResponse = self.send(request, path).await?.json().await?;
        Ok(response.top_posts)
    }

    async fn post_analytics(&self, post_id: i64) -> ApiResult<PostAnalytics> {
        self.get_json(&format!("/analytics/post/{}", post_id)).await
    }

    async fn content_analytics(&self) -> ApiResult<Vec<PostEngagement>> {
        let response: ContentAnalyticsResponse = self.get_json("/content/analytics").await?;
        Ok(response.rows)
    }

    async fn trends(&self, industry: Option<&str>) -> ApiResult<Vec<String>> {
        let path = "/trends/";
        let mut request = self.client.get(self.url(path));
        if let Some(industry) = industry {
            request = request.query(&[("industry", industry)]);
        }
        let response: TrendsResponse = self.send(request, path).await?.json().await?;
        Ok(response.trends)
    }

    async fn suggestions(&self) -> ApiResult<Vec<String>> {
        let response: SuggestionsResponse = self.get_json("/trends/suggestions").await?;
        Ok(response.suggestions)
    }

    async fn health(&self) -> ApiResult<String> {
        let response: HealthResponse = self.get_json("/").await?;
        Ok(response.message)
    }
}

/// Normalize: trim whitespace and remove trailing slashes
fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/profile/"), "http://localhost:8000/profile/");
    }

    #[test]
    fn test_from_config() {
        let config = ApiConfig::default();
        let client = ApiClient::from_config(&config);
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
