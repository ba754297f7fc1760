//! Profile
//!
//! Form over the user's name, headline and about text. The form is filled
//! from the backend on activation and submitted wholesale on save; after a
//! save the form is left as typed, not reconciled with the server.

use thiserror::Error;

use crate::api::{ContentApi, Profile};
use crate::dialog::Notice;
use crate::lifecycle::{FetchStatus, Scope, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Headline,
    About,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    pub form: Profile,
    pub status: FetchStatus,
    /// True while a save is in flight; the submit control is disabled
    pub saving: bool,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Name is required")]
    NameRequired,
}

/// Result of a save attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed,
    /// Form did not pass validation; nothing was sent
    Rejected(ProfileError),
    /// A save is already in flight; nothing was sent
    Busy,
}

impl SaveOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SaveOutcome::Saved => Some(Notice::success("Profile saved successfully!")),
            SaveOutcome::Failed => Some(Notice::error("Error saving profile")),
            SaveOutcome::Rejected(e) => Some(Notice::error(e.to_string())),
            SaveOutcome::Busy => None,
        }
    }
}

pub struct ProfileView<A, S> {
    api: A,
    state: S,
    scope: Scope,
}

impl<A, S> ProfileView<A, S>
where
    A: ContentApi,
    S: Store<ProfileState>,
{
    pub fn new(api: A, state: S, scope: Scope) -> Self {
        Self { api, state, scope }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Read the current profile. A response without a name means there is no
    /// profile yet and the form stays empty.
    pub async fn load(&self) {
        self.scope
            .apply(&self.state, |s| s.status = FetchStatus::Loading);

        let result = self.api.get_profile().await;

        self.scope.apply(&self.state, |s| match result {
            Ok(profile) => {
                if !profile.name.is_empty() {
                    s.form = profile;
                }
                s.status = FetchStatus::Loaded;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching profile");
                s.status = FetchStatus::Failed;
            }
        });
    }

    pub fn set_field(&self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        self.state.update(|s| match field {
            ProfileField::Name => s.form.name = value,
            ProfileField::Headline => s.form.headline = value,
            ProfileField::About => s.form.about = value,
        });
    }

    /// Submit all three fields in one call
    pub async fn save(&self) -> SaveOutcome {
        let ProfileState { form, saving, .. } = self.state.get();

        if saving {
            return SaveOutcome::Busy;
        }
        if form.name.is_empty() {
            return SaveOutcome::Rejected(ProfileError::NameRequired);
        }

        self.state.update(|s| s.saving = true);

        let outcome = match self.api.save_profile(&form).await {
            Ok(()) => {
                tracing::info!(name = %form.name, "Profile saved");
                SaveOutcome::Saved
            }
            Err(e) => {
                tracing::error!(error = %e, "Error saving profile");
                SaveOutcome::Failed
            }
        };

        self.scope.apply(&self.state, |s| s.saving = false);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_notices() {
        assert_eq!(
            SaveOutcome::Saved.notice(),
            Some(Notice::success("Profile saved successfully!"))
        );
        assert!(SaveOutcome::Failed.notice().unwrap().is_error());
        assert_eq!(
            SaveOutcome::Rejected(ProfileError::NameRequired)
                .notice()
                .unwrap()
                .message,
            "Name is required"
        );
        assert_eq!(SaveOutcome::Busy.notice(), None);
    }
}
