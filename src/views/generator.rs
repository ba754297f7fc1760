//! Content Generator
//!
//! Prompt in, preview out. The preview is replaced wholesale by every
//! generation and only persisted when the user saves it as a draft.

use crate::api::{ContentApi, DraftRequest, GeneratedContent};
use crate::dialog::Notice;
use crate::lifecycle::{Scope, Store};
use crate::shell::Route;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorState {
    pub prompt: String,
    pub preview: Option<GeneratedContent>,
    /// Prompt the current preview was generated from
    pub preview_prompt: String,
    pub generating: bool,
    pub saving_draft: bool,
}

impl GeneratorState {
    /// Start with a prompt already filled in
    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Generated,
    Failed,
    /// Prompt was blank; nothing was sent
    EmptyPrompt,
    /// A generation is already in flight; nothing was sent
    Busy,
}

impl GenerateOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            GenerateOutcome::Failed => Some(Notice::error("Error generating content")),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftOutcome {
    Saved,
    Failed,
    /// No preview to save; nothing was sent
    NothingToSave,
    /// A save is already in flight; nothing was sent
    Busy,
}

impl DraftOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            DraftOutcome::Saved => Some(Notice::success("Content saved as draft!")),
            DraftOutcome::Failed => Some(Notice::error("Error saving draft")),
            DraftOutcome::NothingToSave | DraftOutcome::Busy => None,
        }
    }

    /// Where to go once the notice is acknowledged
    pub fn navigate_to(&self) -> Option<Route> {
        match self {
            DraftOutcome::Saved => Some(Route::Posts),
            _ => None,
        }
    }
}

pub struct ContentGenerator<A, S> {
    api: A,
    state: S,
    scope: Scope,
}

impl<A, S> ContentGenerator<A, S>
where
    A: ContentApi,
    S: Store<GeneratorState>,
{
    pub fn new(api: A, state: S, scope: Scope) -> Self {
        Self { api, state, scope }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn set_prompt(&self, prompt: impl Into<String>) {
        let prompt = prompt.into();
        self.state.update(|s| s.prompt = prompt);
    }

    /// Generate from the current prompt, replacing any previous preview
    pub async fn generate(&self) -> GenerateOutcome {
        let GeneratorState {
            prompt, generating, ..
        } = self.state.get();

        if prompt.trim().is_empty() {
            return GenerateOutcome::EmptyPrompt;
        }
        if generating {
            return GenerateOutcome::Busy;
        }

        self.state.update(|s| s.generating = true);
        let result = self.api.generate(&prompt).await;

        let outcome = match &result {
            Ok(_) => GenerateOutcome::Generated,
            Err(e) => {
                tracing::error!(error = %e, "Error generating content");
                GenerateOutcome::Failed
            }
        };

        self.scope.apply(&self.state, |s| {
            s.generating = false;
            if let Ok(content) = result {
                s.preview = Some(content);
                s.preview_prompt = prompt;
            }
        });

        outcome
    }

    /// Persist the current preview as a draft post
    pub async fn save_draft(&self) -> DraftOutcome {
        let GeneratorState {
            preview,
            preview_prompt,
            saving_draft,
            ..
        } = self.state.get();

        let Some(preview) = preview else {
            return DraftOutcome::NothingToSave;
        };
        if saving_draft {
            return DraftOutcome::Busy;
        }

        let draft = DraftRequest {
            id: preview.id,
            prompt: preview_prompt,
            content: preview.content,
            hashtags: preview.hashtags,
        };

        self.state.update(|s| s.saving_draft = true);

        let outcome = match self.api.create_draft(&draft).await {
            Ok(()) => {
                tracing::info!("Generated content saved as draft");
                DraftOutcome::Saved
            }
            Err(e) => {
                tracing::error!(error = %e, "Error saving draft");
                DraftOutcome::Failed
            }
        };

        self.scope.apply(&self.state, |s| s.saving_draft = false);
        outcome
    }
}
