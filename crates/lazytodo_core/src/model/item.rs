//! To-do item model.
//!
//! # Responsibility
//! - Define the persisted `Item` record and its JSON shape.
//! - Validate user-entered text before an item is created.
//!
//! # Invariants
//! - `id` never changes after creation.
//! - `text` is never blank (whitespace-only counts as blank).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Item identifier; epoch milliseconds at creation, strictly increasing per
/// session (see `engine::ids`).
pub type ItemId = i64;

/// A single to-do entry.
///
/// Serialized as `{"id": .., "text": .., "checked": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub checked: bool,
}

/// Validation failures for item input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyText,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "item text cannot be empty"),
        }
    }
}

impl Error for ItemValidationError {}

impl Item {
    /// Creates an unchecked item after validating `text`.
    ///
    /// The text is stored as entered; only blankness is checked.
    pub fn new(id: ItemId, text: impl Into<String>) -> Result<Self, ItemValidationError> {
        let item = Self {
            id,
            text: text.into(),
            checked: false,
        };
        item.validate()?;
        Ok(item)
    }

    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.text.trim().is_empty() {
            return Err(ItemValidationError::EmptyText);
        }
        Ok(())
    }

    /// Flips completion state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }
}

#[cfg(test)]
mod tests {
    use super::{Item, ItemValidationError};

    #[test]
    fn new_rejects_whitespace_only_text() {
        let err = Item::new(1, "  \t ").unwrap_err();
        assert_eq!(err, ItemValidationError::EmptyText);
    }

    #[test]
    fn new_keeps_text_as_entered() {
        let item = Item::new(7, " buy milk ").unwrap();
        assert_eq!(item.text, " buy milk ");
        assert!(!item.checked);
    }

    #[test]
    fn json_shape_matches_persisted_entries() {
        let item = Item {
            id: 1700000000000,
            text: "write \"report\"".to_string(),
            checked: true,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"id":1700000000000,"text":"write \"report\"","checked":true}"#
        );
    }
}
