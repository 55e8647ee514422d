//! Domain model for the to-do list.
//!
//! # Responsibility
//! - Define the canonical item record and the user-facing settings.
//! - Own the string encodings used by the persisted key-value entries.
//!
//! # Invariants
//! - Every item is identified by an immutable `ItemId`.
//! - Settings always hold an enumerated value; parsing falls back to defaults.

pub mod appearance;
pub mod item;
pub mod settings;
