//! Typed access to to-do entries on top of a `KeyValueStore`.
//!
//! # Responsibility
//! - Encode the item collection as a JSON array under `todos`.
//! - Encode each settings field and display preference under its own key.
//!
//! # Invariants
//! - `load_*` never fails; malformed or unreadable values become defaults and
//!   are reported through `warn` logs only.
//! - The collection is stored in insertion order; ranking happens on read.

use super::{keys, KeyValueStore, StoreResult};
use crate::model::appearance::{BackgroundColor, Theme};
use crate::model::item::Item;
use crate::model::settings::{PageSize, Setting, Settings, SortMode};
use log::warn;
use std::str::FromStr;

/// Typed to-do store over any key-value substrate.
pub struct TodoStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> TodoStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Returns the persisted collection, or an empty one when absent or
    /// unparsable.
    pub fn load_items(&self) -> Vec<Item> {
        let Some(raw) = self.read_raw(keys::TODOS) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<Item>>(&raw) {
            Ok(items) => items,
            Err(err) => {
                warn!(
                    "event=store_read module=store status=fallback key={} reason=malformed error={}",
                    keys::TODOS,
                    err
                );
                Vec::new()
            }
        }
    }

    /// Overwrites the persisted collection.
    pub fn save_items(&self, items: &[Item]) -> StoreResult<()> {
        let encoded = serde_json::to_string(items)?;
        self.kv.set(keys::TODOS, &encoded)
    }

    /// Loads settings field by field, falling back per field.
    pub fn load_settings(&self) -> Settings {
        Settings {
            items_per_page: self.read_parsed::<PageSize>(keys::ITEMS_PER_PAGE),
            sort_mode: self.read_parsed::<SortMode>(keys::CURRENT_SORT),
        }
    }

    /// Writes one settings field.
    pub fn save_setting(&self, setting: Setting) -> StoreResult<()> {
        match setting {
            Setting::ItemsPerPage(size) => self.kv.set(keys::ITEMS_PER_PAGE, &size.to_string()),
            Setting::Sort(mode) => self.kv.set(keys::CURRENT_SORT, mode.as_str()),
        }
    }

    pub fn load_theme(&self) -> Theme {
        self.read_parsed::<Theme>(keys::THEME)
    }

    pub fn save_theme(&self, theme: Theme) -> StoreResult<()> {
        self.kv.set(keys::THEME, theme.as_str())
    }

    /// Returns the saved background color; unparsable values count as absent.
    pub fn load_background(&self) -> Option<BackgroundColor> {
        let raw = self.read_raw(keys::BG_COLOR)?;
        let parsed = BackgroundColor::parse(&raw);
        if parsed.is_none() {
            warn!(
                "event=store_read module=store status=fallback key={} reason=malformed",
                keys::BG_COLOR
            );
        }
        parsed
    }

    pub fn save_background(&self, color: BackgroundColor) -> StoreResult<()> {
        self.kv.set(keys::BG_COLOR, &color.to_string())
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.kv.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "event=store_read module=store status=fallback key={} reason=read_failed error={}",
                    key, err
                );
                None
            }
        }
    }

    fn read_parsed<T: FromStr + Default>(&self, key: &str) -> T {
        let Some(raw) = self.read_raw(key) else {
            return T::default();
        };
        match raw.parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "event=store_read module=store status=fallback key={} reason=invalid_value",
                    key
                );
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TodoStore;
    use crate::model::appearance::Theme;
    use crate::model::item::Item;
    use crate::model::settings::{PageSize, Setting, SortMode};
    use crate::store::{keys, KeyValueStore, MemoryKvStore};

    fn item(id: i64, text: &str, checked: bool) -> Item {
        Item {
            id,
            text: text.to_string(),
            checked,
        }
    }

    #[test]
    fn items_round_trip_in_insertion_order() {
        let store = TodoStore::new(MemoryKvStore::new());
        let items = vec![item(3, "c", true), item(1, "a", false)];
        store.save_items(&items).unwrap();
        assert_eq!(store.load_items(), items);
    }

    #[test]
    fn corrupt_collection_loads_as_empty() {
        let kv = MemoryKvStore::new();
        kv.set(keys::TODOS, "{not json").unwrap();
        assert!(TodoStore::new(&kv).load_items().is_empty());

        kv.set(keys::TODOS, "null").unwrap();
        assert!(TodoStore::new(&kv).load_items().is_empty());
    }

    #[test]
    fn invalid_settings_fall_back_per_field() {
        let kv = MemoryKvStore::new();
        kv.set(keys::ITEMS_PER_PAGE, "7").unwrap();
        kv.set(keys::CURRENT_SORT, "abc").unwrap();

        let settings = TodoStore::new(&kv).load_settings();
        assert_eq!(settings.items_per_page, PageSize::DEFAULT);
        assert_eq!(settings.sort_mode, SortMode::Abc);

        kv.set(keys::CURRENT_SORT, "random").unwrap();
        assert_eq!(TodoStore::new(&kv).load_settings().sort_mode, SortMode::Time);
    }

    #[test]
    fn save_setting_writes_only_its_key() {
        let kv = MemoryKvStore::new();
        let store = TodoStore::new(&kv);
        store
            .save_setting(Setting::ItemsPerPage(PageSize::new(50).unwrap()))
            .unwrap();

        assert_eq!(kv.get(keys::ITEMS_PER_PAGE).unwrap().as_deref(), Some("50"));
        assert_eq!(kv.get(keys::CURRENT_SORT).unwrap(), None);
    }

    #[test]
    fn theme_and_background_defaults() {
        let kv = MemoryKvStore::new();
        let store = TodoStore::new(&kv);
        assert_eq!(store.load_theme(), Theme::Light);
        assert_eq!(store.load_background(), None);

        kv.set(keys::BG_COLOR, "chartreuse").unwrap();
        assert_eq!(store.load_background(), None);
    }
}
