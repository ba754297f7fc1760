//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod loading;
pub mod nav;
pub mod notice;
pub mod prompt;
pub mod stat_card;

pub use loading::Loading;
pub use nav::Nav;
pub use notice::NoticeDialog;
pub use prompt::PromptDialog;
pub use stat_card::StatCard;
