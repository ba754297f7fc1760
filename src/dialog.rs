//! Dialog results
//!
//! Values exchanged with modal dialogs in place of blocking browser prompts
//! and alerts: a view returns a [`Notice`] for the shell to show, and the
//! schedule dialog hands back a [`PromptResult`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Message to acknowledge in a modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Answer from a text prompt dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    Submitted(String),
    Cancelled,
}

impl PromptResult {
    /// Submitted text, or `None` when cancelled or left blank
    pub fn value(&self) -> Option<&str> {
        match self {
            PromptResult::Submitted(text) if !text.trim().is_empty() => Some(text.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_prompt_has_no_value() {
        assert_eq!(PromptResult::Cancelled.value(), None);
        assert_eq!(PromptResult::Submitted(String::new()).value(), None);
        assert_eq!(PromptResult::Submitted("  ".into()).value(), None);
        assert_eq!(PromptResult::Submitted("5".into()).value(), Some("5"));
    }
}
