//! User settings model.
//!
//! # Responsibility
//! - Define page size and sort mode with their persisted string forms.
//! - Apply documented defaults when stored values are missing or invalid.
//!
//! # Invariants
//! - `PageSize` only holds one of `PageSize::ALLOWED`.
//! - `SortMode` strings are `time`, `timeDesc` and `abc`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Parse failure for a persisted or user-supplied setting value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingParseError {
    UnknownSortMode(String),
    InvalidPageSize(String),
}

impl Display for SettingParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSortMode(value) => {
                write!(f, "unknown sort mode `{value}`; expected time|timeDesc|abc")
            }
            Self::InvalidPageSize(value) => write!(
                f,
                "invalid page size `{value}`; expected one of 5|10|20|30|50|100|500"
            ),
        }
    }
}

impl Error for SettingParseError {}

/// Secondary ordering key applied within completion groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Oldest first.
    #[default]
    Time,
    /// Newest first.
    TimeDesc,
    /// Alphabetical by text.
    Abc,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Time, SortMode::TimeDesc, SortMode::Abc];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::TimeDesc => "timeDesc",
            Self::Abc => "abc",
        }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = SettingParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "time" => Ok(Self::Time),
            "timeDesc" => Ok(Self::TimeDesc),
            "abc" => Ok(Self::Abc),
            other => Err(SettingParseError::UnknownSortMode(other.to_string())),
        }
    }
}

/// Number of items shown per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageSize(u32);

impl PageSize {
    /// Page sizes offered by the settings selector.
    pub const ALLOWED: [u32; 7] = [5, 10, 20, 30, 50, 100, 500];
    pub const DEFAULT: PageSize = PageSize(10);

    pub fn new(value: u32) -> Result<Self, SettingParseError> {
        if Self::ALLOWED.contains(&value) {
            Ok(Self(value))
        } else {
            Err(SettingParseError::InvalidPageSize(value.to_string()))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// All selectable sizes, in ascending order.
    pub fn options() -> impl Iterator<Item = PageSize> {
        Self::ALLOWED.into_iter().map(PageSize)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageSize {
    type Err = SettingParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let parsed = trimmed
            .parse::<u32>()
            .map_err(|_| SettingParseError::InvalidPageSize(trimmed.to_string()))?;
        Self::new(parsed)
    }
}

/// Persisted user settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub items_per_page: PageSize,
    pub sort_mode: SortMode,
}

/// One settings field, written independently of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    ItemsPerPage(PageSize),
    Sort(SortMode),
}

impl Settings {
    pub fn apply(&mut self, setting: Setting) {
        match setting {
            Setting::ItemsPerPage(size) => self.items_per_page = size,
            Setting::Sort(mode) => self.sort_mode = mode,
        }
    }
}
