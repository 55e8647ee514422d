//! SQLite file behind the to-do key-value store.
//!
//! `open_db*` hands out a connection only after the `kv_entries` schema is
//! current; `PRAGMA user_version` records which migrations ran.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Connection setup step that failed before the store became usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStep {
    Connect,
    BusyTimeout,
    ReadSchemaVersion,
}

impl BootstrapStep {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::BusyTimeout => "busy_timeout",
            Self::ReadSchemaVersion => "read_schema_version",
        }
    }
}

#[derive(Debug)]
pub enum DbError {
    /// Statement on a ready connection.
    Sqlite(rusqlite::Error),
    Bootstrap {
        step: BootstrapStep,
        source: rusqlite::Error,
    },
    /// Migration `version` failed and the whole batch was rolled back.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
    /// The file was written by a newer `lazytodo`; it is left untouched.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl DbError {
    pub(crate) fn bootstrap(step: BootstrapStep) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| Self::Bootstrap { step, source }
    }

    /// Stable `error_code` value for `db_open` log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "db_statement_failed",
            Self::Bootstrap { .. } => "db_bootstrap_failed",
            Self::Migration { .. } => "db_migration_failed",
            Self::UnsupportedSchemaVersion { .. } => "db_schema_too_new",
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Bootstrap { step, source } => {
                write!(f, "could not prepare to-do database ({}): {source}", step.as_str())
            }
            Self::Migration { version, source } => {
                write!(f, "to-do schema migration {version} failed: {source}")
            }
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "to-do database uses schema {db_version}, this build reads up to {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err)
            | Self::Bootstrap { source: err, .. }
            | Self::Migration { source: err, .. } => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
