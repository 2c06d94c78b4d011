use crate::error::{MakerError, Result};
use crate::storage::KeyValueStorage;
use crate::types::{Material, Project, ReviewBook, UserProfile, WeeklySchedule};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// Slot
// ---------------------------------------------------------------------------

/// One independently persisted top-level collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Profile,
    Inventory,
    SavedProjects,
    Schedule,
    Reviews,
}

impl Slot {
    /// Storage key, unchanged from the keys the browser build wrote.
    pub fn key(self) -> &'static str {
        match self {
            Slot::Profile => "maker_user",
            Slot::Inventory => "maker_inventory",
            Slot::SavedProjects => "maker_saved_projects",
            Slot::Schedule => "maker_schedule",
            Slot::Reviews => "maker_reviews",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no value stored")]
    Missing,

    #[error("stored value is malformed or has the wrong shape: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("storage read failed: {0}")]
    Unreadable(#[from] MakerError),
}

// ---------------------------------------------------------------------------
// PersistedSlots
// ---------------------------------------------------------------------------

/// The five slots as read at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedSlots {
    pub profile: Option<UserProfile>,
    pub inventory: Vec<Material>,
    pub saved_projects: Vec<Project>,
    pub schedule: WeeklySchedule,
    pub reviews: ReviewBook,
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Typed JSON slots over a [`KeyValueStorage`] backend.
///
/// Reads never fail: a missing key, malformed JSON or a value of the wrong
/// shape falls back to the caller's default. Writes propagate errors.
pub struct Store {
    storage: Box<dyn KeyValueStorage>,
}

impl Store {
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Store {
            storage: Box::new(storage),
        }
    }

    /// Strict read: distinguishes "never written" from "written but unusable".
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> std::result::Result<T, LoadError> {
        let raw = self.storage.get(key)?.ok_or(LoadError::Missing)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Lenient read: any [`LoadError`] yields `default`.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(value) => value,
            Err(LoadError::Missing) => {
                debug!(key, "slot empty, using default");
                default
            }
            Err(e) => {
                warn!(key, error = %e, "discarding unreadable slot, using default");
                default
            }
        }
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let data = serde_json::to_string(value)?;
        self.storage.set(key, &data)?;
        debug!(key, bytes = data.len(), "slot written");
        Ok(())
    }

    pub fn load_slots(&self) -> PersistedSlots {
        PersistedSlots {
            profile: self.load(Slot::Profile.key(), None),
            inventory: self.load(Slot::Inventory.key(), Vec::new()),
            saved_projects: self.load(Slot::SavedProjects.key(), Vec::new()),
            schedule: self.load(Slot::Schedule.key(), WeeklySchedule::new()),
            reviews: self.load(Slot::Reviews.key(), ReviewBook::new()),
        }
    }

    /// Write one slot from `slots`. An absent profile is left untouched
    /// rather than written as `null`.
    pub fn save_slot(&self, slot: Slot, slots: &PersistedSlots) -> Result<()> {
        match slot {
            Slot::Profile => match &slots.profile {
                Some(profile) => self.save(slot.key(), profile),
                None => Ok(()),
            },
            Slot::Inventory => self.save(slot.key(), &slots.inventory),
            Slot::SavedProjects => self.save(slot.key(), &slots.saved_projects),
            Slot::Schedule => self.save(slot.key(), &slots.schedule),
            Slot::Reviews => self.save(slot.key(), &slots.reviews),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use crate::types::ProjectCategory;
    use tempfile::TempDir;

    fn material(id: &str) -> Material {
        Material {
            id: id.to_string(),
            name: "Yarn".to_string(),
            quantity: "2 skeins".to_string(),
            category: "General".to_string(),
        }
    }

    struct FullStorage;

    impl KeyValueStorage for FullStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }
        fn set(&self, key: &str, _value: &str) -> Result<()> {
            Err(MakerError::Storage {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }
        fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn load_missing_key_returns_default() {
        let store = Store::new(MemoryStorage::new());
        let inv: Vec<Material> = store.load(Slot::Inventory.key(), Vec::new());
        assert!(inv.is_empty());
    }

    #[test]
    fn load_corrupted_inventory_returns_empty_list() {
        let storage = MemoryStorage::new();
        storage.set("maker_inventory", "{not json").unwrap();
        let store = Store::new(storage);
        let inv: Vec<Material> = store.load("maker_inventory", Vec::new());
        assert!(inv.is_empty());
    }

    #[test]
    fn load_wrong_shape_returns_default() {
        let storage = MemoryStorage::new();
        storage.set("maker_inventory", r#"{"id": "1"}"#).unwrap();
        let store = Store::new(storage);
        assert!(matches!(
            store.try_load::<Vec<Material>>("maker_inventory"),
            Err(LoadError::Malformed(_))
        ));
        let inv: Vec<Material> = store.load("maker_inventory", Vec::new());
        assert!(inv.is_empty());
    }

    #[test]
    fn try_load_reports_missing() {
        let store = Store::new(MemoryStorage::new());
        assert!(matches!(
            store.try_load::<Vec<Material>>("maker_inventory"),
            Err(LoadError::Missing)
        ));
    }

    #[test]
    fn save_then_load_through_files() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(FileStorage::new(dir.path()));
        store
            .save(Slot::Inventory.key(), &vec![material("1"), material("2")])
            .unwrap();

        let reopened = Store::new(FileStorage::new(dir.path()));
        let inv: Vec<Material> = reopened.load(Slot::Inventory.key(), Vec::new());
        assert_eq!(inv.len(), 2);
        assert_eq!(inv[1].id, "2");
    }

    #[test]
    fn save_failure_propagates() {
        let store = Store::new(FullStorage);
        let err = store.save("maker_inventory", &vec![material("1")]).unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn absent_profile_is_not_written() {
        let storage = MemoryStorage::new();
        let store = Store::new(storage);
        store
            .save_slot(Slot::Profile, &PersistedSlots::default())
            .unwrap();
        assert!(matches!(
            store.try_load::<UserProfile>(Slot::Profile.key()),
            Err(LoadError::Missing)
        ));
    }

    const SAVED_WITH_UNKNOWN_CATEGORY: &str = r#"[
        {"id": "p1", "title": "Rope Basket", "category": "Crafts", "matchScore": 80},
        {"id": "p2", "title": "Fresh Pasta", "category": "Cooking", "matchScore": 70},
        {"id": "p3", "title": "Loom Weaving", "category": "Fiber Arts", "matchScore": 60}
    ]"#;

    #[test]
    fn saved_projects_load_with_unrecognized_category() {
        let storage = MemoryStorage::new();
        storage
            .set(Slot::SavedProjects.key(), SAVED_WITH_UNKNOWN_CATEGORY)
            .unwrap();
        let store = Store::new(storage);
        let slots = store.load_slots();
        let categories: Vec<ProjectCategory> =
            slots.saved_projects.iter().map(|p| p.category).collect();
        assert_eq!(
            categories,
            vec![
                ProjectCategory::Crafts,
                ProjectCategory::Cooking,
                ProjectCategory::Crafts
            ]
        );
    }

    #[test]
    fn load_slots_tolerates_one_bad_slot() {
        let storage = MemoryStorage::new();
        storage.set("maker_schedule", "[1, 2, 3]").unwrap();
        storage
            .set("maker_inventory", &serde_json::to_string(&vec![material("9")]).unwrap())
            .unwrap();
        let store = Store::new(storage);
        let slots = store.load_slots();
        assert!(slots.schedule.is_empty());
        assert_eq!(slots.inventory.len(), 1);
        assert!(slots.profile.is_none());
    }
}
