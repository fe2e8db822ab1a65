//! Preference catalogs and bounded multi-select.

use crate::error::{PlacepickError, Result};
use serde::{Deserialize, Serialize};

/// Maximum number of items a user may pick per category.
pub const SELECTION_CAPACITY: usize = 2;

const DEFAULT_PLACES: [&str; 9] = [
    "강남",
    "명동",
    "북촌 한옥마을",
    "성수",
    "송리단길",
    "영등포",
    "이태원",
    "종로",
    "혜화",
];

const DEFAULT_MOODS: [&str; 6] = ["코지", "럭셔리", "모던", "아기자기한", "빈티지", "테마별"];

/// An ordered list of selectable names.
///
/// Always non-empty and free of duplicates; both are checked on construction
/// and when deserializing from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Catalog {
    items: Vec<String>,
}

impl Catalog {
    pub fn new<I, S>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            return Err(PlacepickError::validation("catalog must list at least one item"));
        }
        for (index, item) in items.iter().enumerate() {
            if item.trim().is_empty() {
                return Err(PlacepickError::validation("catalog items must not be blank"));
            }
            if items[..index].contains(item) {
                return Err(PlacepickError::validation(format!(
                    "catalog lists '{}' more than once",
                    item
                )));
            }
        }
        Ok(Self { items })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn from_static(items: &[&str]) -> Self {
        Self {
            items: items.iter().map(|item| item.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for Catalog {
    type Error = PlacepickError;

    fn try_from(items: Vec<String>) -> Result<Self> {
        Self::new(items)
    }
}

impl From<Catalog> for Vec<String> {
    fn from(catalog: Catalog) -> Self {
        catalog.items
    }
}

/// Both preference catalogs, injected into the profile editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub places: Catalog,
    pub moods: Catalog,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            places: Catalog::from_static(&DEFAULT_PLACES),
            moods: Catalog::from_static(&DEFAULT_MOODS),
        }
    }
}

/// What a toggle did to a [`BoundedSelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The set was full; nothing changed.
    AtCapacity,
    /// The name is not offered by the catalog; nothing changed.
    NotInCatalog,
    /// The profile has not finished loading; nothing changed.
    NotLoaded,
}

/// Insertion-ordered set capped at a fixed size.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundedSelection {
    items: Vec<String>,
}

impl BoundedSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from server data.
    ///
    /// Repeated names are dropped and anything past [`SELECTION_CAPACITY`] is
    /// cut off. Names outside the catalog are kept: the server is the source
    /// of truth for what the user already has.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items: Vec<String> = Vec::with_capacity(SELECTION_CAPACITY);
        for name in names.into_iter().map(Into::into) {
            if items.contains(&name) {
                continue;
            }
            if items.len() == SELECTION_CAPACITY {
                tracing::warn!(dropped = %name, "Selection exceeds capacity, truncating");
                continue;
            }
            items.push(name);
        }
        Self { items }
    }

    /// Adds `name` if absent and there is room, removes it if present.
    ///
    /// Removal is always allowed, even for names the catalog no longer offers.
    pub fn toggle(&mut self, name: &str, catalog: &Catalog) -> ToggleOutcome {
        if let Some(position) = self.items.iter().position(|item| item == name) {
            self.items.remove(position);
            return ToggleOutcome::Removed;
        }
        if !catalog.contains(name) {
            return ToggleOutcome::NotInCatalog;
        }
        if self.items.len() >= SELECTION_CAPACITY {
            return ToggleOutcome::AtCapacity;
        }
        self.items.push(name.to_string());
        ToggleOutcome::Added
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= SELECTION_CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn places() -> Catalog {
        CatalogConfig::default().places
    }

    fn arb_place() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => prop::sample::select(DEFAULT_PLACES.to_vec()).prop_map(String::from),
            1 => Just("부산".to_string()),
        ]
    }

    fn assert_bounded(selection: &BoundedSelection) -> std::result::Result<(), TestCaseError> {
        prop_assert!(selection.len() <= SELECTION_CAPACITY);
        for (index, item) in selection.items().iter().enumerate() {
            prop_assert!(!selection.items()[..index].contains(item));
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_toggle_sequences_stay_bounded(
            names in prop::collection::vec(arb_place(), 0..40),
        ) {
            let catalog = places();
            let mut selection = BoundedSelection::new();
            for name in &names {
                let before = selection.clone();
                match selection.toggle(name, &catalog) {
                    ToggleOutcome::Added => {
                        prop_assert_eq!(selection.len(), before.len() + 1);
                        prop_assert!(selection.contains(name));
                    }
                    ToggleOutcome::Removed => {
                        prop_assert_eq!(selection.len() + 1, before.len());
                        prop_assert!(!selection.contains(name));
                    }
                    _ => prop_assert_eq!(&selection, &before),
                }
                assert_bounded(&selection)?;
            }
        }

        #[test]
        fn prop_loaded_names_are_bounded(
            names in prop::collection::vec("[가-힣]{1,2}", 0..10),
        ) {
            let selection = BoundedSelection::from_names(names.clone());
            assert_bounded(&selection)?;
            for item in selection.items() {
                prop_assert!(names.contains(item));
            }
        }
    }

    #[test]
    fn test_default_catalogs() {
        let config = CatalogConfig::default();
        assert_eq!(config.places.len(), 9);
        assert_eq!(config.moods.len(), 6);
        assert!(config.places.contains("북촌 한옥마을"));
        assert!(config.moods.contains("아기자기한"));
    }

    #[test]
    fn test_toggle_at_capacity_is_noop() {
        let mut selection = BoundedSelection::from_names(["강남", "명동"]);

        assert_eq!(selection.toggle("성수", &places()), ToggleOutcome::AtCapacity);
        assert_eq!(selection.items(), ["강남", "명동"]);
    }

    #[test]
    fn test_toggle_selected_item_removes_it() {
        let mut selection = BoundedSelection::from_names(["강남", "명동"]);

        assert_eq!(selection.toggle("강남", &places()), ToggleOutcome::Removed);
        assert_eq!(selection.items(), ["명동"]);
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut selection = BoundedSelection::from_names(["명동"]);
        let before = selection.clone();

        assert_eq!(selection.toggle("혜화", &places()), ToggleOutcome::Added);
        assert_eq!(selection.toggle("혜화", &places()), ToggleOutcome::Removed);
        assert_eq!(selection, before);
    }

    #[test]
    fn test_toggle_unknown_name() {
        let mut selection = BoundedSelection::new();

        assert_eq!(selection.toggle("부산", &places()), ToggleOutcome::NotInCatalog);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_loaded_name_outside_catalog_can_be_removed() {
        let mut selection = BoundedSelection::from_names(["을지로"]);

        assert_eq!(selection.toggle("을지로", &places()), ToggleOutcome::Removed);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_from_names_dedupes_and_truncates() {
        let selection = BoundedSelection::from_names(["강남", "강남", "명동", "성수"]);
        assert_eq!(selection.items(), ["강남", "명동"]);
        assert!(selection.is_full());
    }

    #[test]
    fn test_catalog_rejects_duplicates_and_empty() {
        assert!(Catalog::new(["강남", "강남"]).unwrap_err().is_validation());
        assert!(Catalog::new(Vec::<String>::new()).unwrap_err().is_validation());
        assert!(Catalog::new(["강남", " "]).unwrap_err().is_validation());
    }

    #[test]
    fn test_catalog_config_from_toml() {
        let config: CatalogConfig = toml::from_str(
            r#"
            places = ["홍대", "합정"]
            "#,
        )
        .unwrap();

        assert_eq!(config.places.items(), ["홍대", "합정"]);
        // Unspecified catalogs keep their defaults.
        assert_eq!(config.moods, CatalogConfig::default().moods);
    }

    #[test]
    fn test_catalog_config_from_toml_rejects_duplicates() {
        let result: std::result::Result<CatalogConfig, _> =
            toml::from_str(r#"moods = ["코지", "코지"]"#);
        assert!(result.is_err());
    }
}
