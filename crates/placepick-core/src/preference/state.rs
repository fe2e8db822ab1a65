//! Profile preference state.
//!
//! Holds the server snapshot once it arrives and every local edit made on
//! top of it, until a single save posts the whole record back.

use super::modal::{ModalAction, ModalVisibility};
use crate::api::{ProfileUpdate, UserRecord};
use crate::catalog::{BoundedSelection, Catalog, ToggleOutcome};
use crate::freshness::Freshness;

/// Initial fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    /// The fetch failed; the caller may retry.
    Failed,
}

/// Save lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveState {
    #[default]
    Idle,
    InFlight,
    Saved,
    Failed,
}

/// Why a save never left the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveRejection {
    /// At least one place must be selected.
    NoPlaceSelected,
    /// Nothing has been loaded yet, so there is nothing to save.
    NotLoaded,
    /// A previous save has not completed.
    InFlight,
}

impl SaveRejection {
    /// Inline hint for the rejection.
    pub fn message(self) -> &'static str {
        match self {
            Self::NoPlaceSelected => "장소를 최소 1개 선택해야 합니다.",
            Self::NotLoaded => "사용자 정보를 불러오는 중입니다.",
            Self::InFlight => "저장 중입니다.",
        }
    }
}

impl std::fmt::Display for SaveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Request context for one profile fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// Profile and preference selections for the edit screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfilePreferences {
    nickname: String,
    email: String,
    places: BoundedSelection,
    moods: BoundedSelection,
    load: LoadState,
    save: SaveState,
    load_generation: u64,
    place_modal: ModalVisibility,
    mood_modal: ModalVisibility,
}

impl ProfilePreferences {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================================
    // Load
    // ============================================================================

    /// Starts a fetch. Any fetch still in flight is superseded.
    pub fn begin_load(self) -> (Self, LoadTicket) {
        let generation = self.load_generation + 1;
        let next = Self {
            load: LoadState::Loading,
            load_generation: generation,
            ..self
        };
        (next, LoadTicket { generation })
    }

    /// Hydrates the state from the server record.
    pub fn apply_loaded(self, ticket: LoadTicket, record: UserRecord) -> (Self, Freshness) {
        if ticket.generation != self.load_generation {
            return (self, Freshness::Stale);
        }
        let next = Self {
            places: BoundedSelection::from_names(record.place_names()),
            moods: BoundedSelection::from_names(record.mood_names()),
            nickname: record.nickname,
            email: record.google_email,
            load: LoadState::Loaded,
            save: SaveState::Idle,
            ..self
        };
        (next, Freshness::Current)
    }

    pub fn apply_load_failed(self, ticket: LoadTicket) -> (Self, Freshness) {
        if ticket.generation != self.load_generation {
            return (self, Freshness::Stale);
        }
        let next = Self {
            load: LoadState::Failed,
            ..self
        };
        (next, Freshness::Current)
    }

    // ============================================================================
    // Local edits
    // ============================================================================
    //
    // Field edits are ignored until the profile has loaded: the incoming
    // record would overwrite them.

    /// Overwrites the nickname. No validation happens on this screen.
    pub fn edit_nickname(self, text: impl Into<String>) -> Self {
        if !self.is_loaded() {
            return self;
        }
        Self {
            nickname: text.into(),
            ..self
        }
    }

    /// Overwrites the email. No validation happens on this screen.
    pub fn edit_email(self, text: impl Into<String>) -> Self {
        if !self.is_loaded() {
            return self;
        }
        Self {
            email: text.into(),
            ..self
        }
    }

    pub fn toggle_place(mut self, name: &str, catalog: &Catalog) -> (Self, ToggleOutcome) {
        if !self.is_loaded() {
            return (self, ToggleOutcome::NotLoaded);
        }
        let outcome = self.places.toggle(name, catalog);
        (self, outcome)
    }

    pub fn toggle_mood(mut self, name: &str, catalog: &Catalog) -> (Self, ToggleOutcome) {
        if !self.is_loaded() {
            return (self, ToggleOutcome::NotLoaded);
        }
        let outcome = self.moods.toggle(name, catalog);
        (self, outcome)
    }

    pub fn place_modal_action(self, action: ModalAction) -> Self {
        Self {
            place_modal: self.place_modal.apply(action),
            ..self
        }
    }

    pub fn mood_modal_action(self, action: ModalAction) -> Self {
        Self {
            mood_modal: self.mood_modal.apply(action),
            ..self
        }
    }

    // ============================================================================
    // Save
    // ============================================================================

    /// Builds the save request, or the reason it must not be sent.
    ///
    /// Does not change the state; pair with [`mark_saving`](Self::mark_saving).
    pub fn prepare_save(&self) -> Result<ProfileUpdate, SaveRejection> {
        if self.load != LoadState::Loaded {
            return Err(SaveRejection::NotLoaded);
        }
        if self.save == SaveState::InFlight {
            return Err(SaveRejection::InFlight);
        }
        if self.places.is_empty() {
            return Err(SaveRejection::NoPlaceSelected);
        }
        Ok(self.to_update())
    }

    pub fn mark_saving(self) -> Self {
        Self {
            save: SaveState::InFlight,
            ..self
        }
    }

    /// Records the save result. Local edits are kept either way.
    pub fn finish_save(self, succeeded: bool) -> Self {
        Self {
            save: if succeeded {
                SaveState::Saved
            } else {
                SaveState::Failed
            },
            ..self
        }
    }

    /// The full record as it would be posted.
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            nickname: self.nickname.clone(),
            email: self.email.clone(),
            places: self.places.to_vec(),
            moods: self.moods.to_vec(),
        }
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn selected_places(&self) -> &BoundedSelection {
        &self.places
    }

    pub fn selected_moods(&self) -> &BoundedSelection {
        &self.moods
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    /// Editable fields must not be shown before this is true.
    pub fn is_loaded(&self) -> bool {
        self.load == LoadState::Loaded
    }

    pub fn save_state(&self) -> SaveState {
        self.save
    }

    pub fn place_modal(&self) -> ModalVisibility {
        self.place_modal
    }

    pub fn mood_modal(&self) -> ModalVisibility {
        self.mood_modal
    }
}
