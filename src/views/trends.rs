//! Trends
//!
//! Industry trends in the order the backend returns them, alongside prompt
//! suggestions that can be carried over to the generator.

use futures_util::future::join;

use crate::api::ContentApi;
use crate::lifecycle::{fetch_into, Remote, Scope, Store};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendsState {
    /// Optional industry filter; blank means the backend's defaults
    pub industry: String,
    pub trends: Remote<Vec<String>>,
    pub suggestions: Remote<Vec<String>>,
}

impl TrendsState {
    fn industry_filter(&self) -> Option<String> {
        let industry = self.industry.trim();
        (!industry.is_empty()).then(|| industry.to_string())
    }
}

pub struct TrendsView<A, S> {
    api: A,
    state: S,
    scope: Scope,
}

impl<A, S> TrendsView<A, S>
where
    A: ContentApi,
    S: Store<TrendsState>,
{
    pub fn new(api: A, state: S, scope: Scope) -> Self {
        Self { api, state, scope }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn set_industry(&self, industry: impl Into<String>) {
        let industry = industry.into();
        self.state.update(|s| s.industry = industry);
    }

    pub async fn refresh(&self) {
        let industry = self.state.get().industry_filter();

        let trends = fetch_into(
            &self.scope,
            &self.state,
            "trends",
            |s: &mut TrendsState| &mut s.trends,
            self.api.trends(industry.as_deref()),
        );
        let suggestions = fetch_into(
            &self.scope,
            &self.state,
            "suggestions",
            |s: &mut TrendsState| &mut s.suggestions,
            self.api.suggestions(),
        );

        join(trends, suggestions).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_industry_is_no_filter() {
        let mut state = TrendsState::default();
        assert_eq!(state.industry_filter(), None);

        state.industry = "   ".into();
        assert_eq!(state.industry_filter(), None);

        state.industry = " fintech ".into();
        assert_eq!(state.industry_filter().as_deref(), Some("fintech"));
    }
}
