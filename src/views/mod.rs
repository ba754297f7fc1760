//! View Models
//!
//! One model per page. Each owns its local state in a [`Store`], talks to the
//! backend through [`ContentApi`], and applies results only while its
//! [`Scope`] is active. Nothing is shared or cached between views; every
//! activation starts from a fresh read.
//!
//! [`Store`]: crate::lifecycle::Store
//! [`ContentApi`]: crate::api::ContentApi
//! [`Scope`]: crate::lifecycle::Scope

pub mod analytics;
pub mod dashboard;
pub mod generator;
pub mod library;
pub mod profile;
pub mod trends;

pub use analytics::{AnalyticsState, AnalyticsView, TOP_POSTS_LIMIT};
pub use dashboard::{Dashboard, DashboardState, PostStats, QUICK_ACTIONS};
pub use generator::{ContentGenerator, DraftOutcome, GenerateOutcome, GeneratorState};
pub use library::{LibraryState, MetricsPanel, PostLibrary, ScheduleOutcome};
pub use profile::{ProfileError, ProfileField, ProfileState, ProfileView, SaveOutcome};
pub use trends::{TrendsState, TrendsView};

pub use crate::api::{DelayError, DelayMinutes, ScheduleAt};
