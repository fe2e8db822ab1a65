//! Profile and preference editing use case.

use crate::state_cell::StateCell;
use placepick_core::api::UserAccountClient;
use placepick_core::catalog::{CatalogConfig, ToggleOutcome};
use placepick_core::preference::{LoadState, ModalAction, ProfilePreferences, SaveRejection};
use placepick_core::{Notice, NoticeSink};
use std::sync::Arc;

/// Result of a profile fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// The fetch failed; the screen shows a retry affordance.
    Failed,
    /// A newer fetch was started meanwhile; nothing was applied.
    Stale,
    /// `retry_load` was called while the profile was not in a failed state.
    Skipped,
}

/// Result of a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Rejected locally; no request was made.
    Rejected(SaveRejection),
    /// The request failed. Local edits are kept.
    Failed,
}

/// Profile edit screen controller.
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct ProfileEditor {
    client: UserAccountClient,
    notices: Arc<dyn NoticeSink>,
    catalogs: Arc<CatalogConfig>,
    state: StateCell<ProfilePreferences>,
}

impl ProfileEditor {
    pub fn new(
        client: UserAccountClient,
        notices: Arc<dyn NoticeSink>,
        catalogs: CatalogConfig,
    ) -> Self {
        Self {
            client,
            notices,
            catalogs: Arc::new(catalogs),
            state: StateCell::new(ProfilePreferences::new()),
        }
    }

    pub fn catalogs(&self) -> &CatalogConfig {
        &self.catalogs
    }

    pub async fn state(&self) -> ProfilePreferences {
        self.state.snapshot().await
    }

    /// Fetches the profile and hydrates the state.
    pub async fn load(&self) -> LoadOutcome {
        let ticket = self.state.transition(ProfilePreferences::begin_load).await;
        tracing::debug!(target: "placepick::profile", "Fetching profile");

        match self.client.fetch_profile().await {
            Ok(record) => {
                let freshness = self
                    .state
                    .transition(|state| state.apply_loaded(ticket, record))
                    .await;
                if freshness.is_stale() {
                    tracing::debug!(
                        target: "placepick::profile",
                        "Ignoring superseded profile response"
                    );
                    return LoadOutcome::Stale;
                }
                tracing::debug!(target: "placepick::profile", "Profile loaded");
                LoadOutcome::Loaded
            }
            Err(e) => {
                let freshness = self
                    .state
                    .transition(|state| state.apply_load_failed(ticket))
                    .await;
                if freshness.is_stale() {
                    tracing::debug!(
                        target: "placepick::profile",
                        error = %e,
                        "Ignoring superseded profile failure"
                    );
                    return LoadOutcome::Stale;
                }
                tracing::warn!(target: "placepick::profile", error = %e, "Profile fetch failed");
                self.notices.notify(Notice::profile_load_failed());
                LoadOutcome::Failed
            }
        }
    }

    /// Re-fetches after a failed load. Does nothing otherwise.
    pub async fn retry_load(&self) -> LoadOutcome {
        let failed = self
            .state
            .inspect(|state| state.load_state() == LoadState::Failed)
            .await;
        if !failed {
            return LoadOutcome::Skipped;
        }
        self.load().await
    }

    /// Ignored until the profile has loaded; the returned state then still
    /// reports `is_loaded() == false`.
    pub async fn edit_nickname(&self, text: &str) -> ProfilePreferences {
        let state = self.state.update(|state| state.edit_nickname(text)).await;
        if !state.is_loaded() {
            tracing::debug!(target: "placepick::profile", "Nickname edit ignored before load");
        }
        state
    }

    /// Ignored until the profile has loaded.
    pub async fn edit_email(&self, text: &str) -> ProfilePreferences {
        let state = self.state.update(|state| state.edit_email(text)).await;
        if !state.is_loaded() {
            tracing::debug!(target: "placepick::profile", "Email edit ignored before load");
        }
        state
    }

    pub async fn toggle_place(&self, name: &str) -> ToggleOutcome {
        let outcome = self
            .state
            .transition(|state| state.toggle_place(name, &self.catalogs.places))
            .await;
        tracing::debug!(target: "placepick::profile", place = %name, ?outcome, "Toggled place");
        outcome
    }

    pub async fn toggle_mood(&self, name: &str) -> ToggleOutcome {
        let outcome = self
            .state
            .transition(|state| state.toggle_mood(name, &self.catalogs.moods))
            .await;
        tracing::debug!(target: "placepick::profile", mood = %name, ?outcome, "Toggled mood");
        outcome
    }

    pub async fn place_modal(&self, action: ModalAction) -> ProfilePreferences {
        self.state
            .update(|state| state.place_modal_action(action))
            .await
    }

    pub async fn mood_modal(&self, action: ModalAction) -> ProfilePreferences {
        self.state
            .update(|state| state.mood_modal_action(action))
            .await
    }

    /// Posts nickname, email, places and moods in one request.
    ///
    /// An empty place selection is rejected before anything is sent. Local
    /// rejections are inline feedback only and publish no notice.
    pub async fn save(&self) -> SaveOutcome {
        let prepared = self
            .state
            .transition(|state| match state.prepare_save() {
                Ok(update) => (state.mark_saving(), Ok(update)),
                Err(rejection) => (state, Err(rejection)),
            })
            .await;
        let update = match prepared {
            Ok(update) => update,
            Err(rejection) => {
                tracing::debug!(target: "placepick::profile", %rejection, "Save rejected locally");
                return SaveOutcome::Rejected(rejection);
            }
        };

        match self.client.update_profile(&update).await {
            Ok(()) => {
                self.state.update(|state| state.finish_save(true)).await;
                tracing::info!(
                    target: "placepick::profile",
                    places = ?update.places,
                    moods = ?update.moods,
                    "Profile saved"
                );
                self.notices.notify(Notice::profile_saved());
                SaveOutcome::Saved
            }
            Err(e) => {
                self.state.update(|state| state.finish_save(false)).await;
                tracing::warn!(target: "placepick::profile", error = %e, "Profile save failed");
                self.notices.notify(Notice::profile_save_failed());
                SaveOutcome::Failed
            }
        }
    }
}

impl std::fmt::Debug for ProfileEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileEditor")
            .field("catalogs", &self.catalogs)
            .finish_non_exhaustive()
    }
}
