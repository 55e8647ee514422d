//! Core list engine for LazyTodo.
//! This crate is the single source of truth for to-do list invariants.

pub mod db;
pub mod engine;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use engine::completion::{is_all_done, BannerChange, BannerState};
pub use engine::ids::{Clock, IdGenerator, SystemClock};
pub use engine::pagination::{clamp_page, page_numbers, paginate, total_pages, Page};
pub use engine::rank::{collate, rank};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::appearance::{BackgroundColor, Theme, ThemeParseError};
pub use model::item::{Item, ItemId, ItemValidationError};
pub use model::settings::{PageSize, Setting, SettingParseError, Settings, SortMode};
pub use service::reducer::{reduce, Action, Outcome, SessionState, TodoEvent, Transition};
pub use service::todo_service::{NullRenderer, RenderView, Renderer, TodoService};
pub use store::{KeyValueStore, MemoryKvStore, SqliteKvStore, StoreError, StoreResult, TodoStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
