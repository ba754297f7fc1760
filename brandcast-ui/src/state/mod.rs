//! State Management
//!
//! App-wide context and the signal-backed store view models write into.

pub mod global;
pub mod store;

pub use global::{provide_global_state, use_global_state, GlobalState};
pub use store::SignalStore;
