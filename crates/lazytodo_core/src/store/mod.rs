//! Persistence layer: a string key-value substrate and the typed to-do store
//! built on top of it.
//!
//! # Responsibility
//! - Define the `KeyValueStore` contract (one namespace, string values).
//! - Provide SQLite-backed and in-memory substrates.
//! - Map items, settings and display preferences onto well-known keys.
//!
//! # Invariants
//! - Reads through `TodoStore` fail open: corrupt or missing entries yield
//!   documented defaults, never errors.
//! - Writes overwrite the whole value of one key.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod kv;
pub mod todo_store;

pub use kv::{MemoryKvStore, SqliteKvStore};
pub use todo_store::TodoStore;

/// Persisted key names.
pub mod keys {
    pub const TODOS: &str = "todos";
    pub const ITEMS_PER_PAGE: &str = "itemsPerPage";
    pub const CURRENT_SORT: &str = "currentSort";
    pub const THEME: &str = "theme";
    pub const BG_COLOR: &str = "bgColor";
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode stored value: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// String key-value substrate, the local-storage equivalent.
///
/// Calls are synchronous; implementations need no interior locking because
/// the engine is single-threaded.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}
