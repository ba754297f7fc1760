//! # Brandcast
//!
//! Client core for a LinkedIn personal-branding content assistant. The
//! browser frontend (`brandcast-ui`) renders six pages on top of this crate;
//! everything here also builds natively so it can be driven from tests.
//!
//! ## Modules
//!
//! - [`api`]: REST client for the content backend and its wire types
//! - [`shell`]: routes, header links and view activation
//! - [`lifecycle`]: fetch status, activation scopes and state stores
//! - [`views`]: one view model per page
//! - [`dialog`]: notices and prompt answers exchanged with modal dialogs
//! - [`config`]: TOML/environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use brandcast::{ApiClient, Config, LibraryState, PostLibrary, Route, Shared, Shell};
//!
//! async fn show_posts() {
//!     let config = Config::load_default();
//!     let api = ApiClient::from_config(&config.api);
//!     let shell = Shell::new();
//!
//!     let scope = shell.activate(Route::Posts);
//!     let library = PostLibrary::new(api, Shared::new(LibraryState::default()), scope);
//!     library.refresh().await;
//!
//!     for post in &library.state().read().posts.data {
//!         println!("#{} [{}] {}", post.id, post.status, post.content);
//!     }
//! }
//! ```

pub mod api;
pub mod config;
pub mod dialog;
pub mod lifecycle;
pub mod shell;
pub mod views;

pub use api::{
    AnalyticsSummary, ApiClient, ApiError, ApiResult, AverageEngagement, ContentApi, DelayError,
    DelayMinutes, DraftRequest, GeneratedContent, Post, PostAnalytics, PostEngagement,
    PostMetrics, PostStatus, Profile, ScheduleAt, TopPost,
};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};

pub use dialog::{Notice, NoticeKind, PromptResult};

pub use lifecycle::{FetchStatus, Remote, Scope, Shared, Store};

pub use shell::{Route, Shell};

pub use views::{
    AnalyticsState, AnalyticsView, ContentGenerator, Dashboard, DashboardState, DraftOutcome,
    GenerateOutcome, GeneratorState, LibraryState, MetricsPanel, PostLibrary, PostStats,
    ProfileError, ProfileField, ProfileState, ProfileView, SaveOutcome, ScheduleOutcome,
    TrendsState, TrendsView,
};
