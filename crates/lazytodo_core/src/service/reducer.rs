//! Pure state transitions for to-do actions.
//!
//! `reduce` takes the session state and the loaded collection by value and
//! returns the next state, the next collection and what must be persisted.
//! It never touches storage or the renderer.

use crate::engine::ids::IdGenerator;
use crate::engine::pagination::{clamp_page, total_pages};
use crate::model::appearance::Theme;
use crate::model::item::{Item, ItemId};
use crate::model::settings::{PageSize, Setting, Settings, SortMode};

/// Transient per-session state. Only `settings` and `theme` are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub current_page: u32,
    pub settings: Settings,
    pub theme: Theme,
}

impl SessionState {
    pub fn new(settings: Settings, theme: Theme) -> Self {
        Self {
            current_page: 1,
            settings,
            theme,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Settings::default(), Theme::default())
    }
}

/// User actions accepted by the mutation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Toggle(ItemId),
    Delete(ItemId),
    ChangePage(u32),
    ChangeSort(SortMode),
    ChangePageSize(PageSize),
    ToggleTheme,
}

impl Action {
    /// Stable name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Toggle(_) => "toggle",
            Self::Delete(_) => "delete",
            Self::ChangePage(_) => "change_page",
            Self::ChangeSort(_) => "change_sort",
            Self::ChangePageSize(_) => "change_page_size",
            Self::ToggleTheme => "toggle_theme",
        }
    }
}

/// Side-effect requests emitted by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoEvent {
    /// An item became checked while the light theme is active.
    ItemCompleted(Item),
}

/// Whether the action changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(&'static str),
}

/// Keys that must be written after a transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Writes {
    pub items: bool,
    pub setting: Option<Setting>,
    pub theme: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub items: Vec<Item>,
    pub events: Vec<TodoEvent>,
    pub writes: Writes,
    pub outcome: Outcome,
}

impl Transition {
    fn unchanged(state: SessionState, items: Vec<Item>, reason: &'static str) -> Self {
        Self {
            state,
            items,
            events: Vec::new(),
            writes: Writes::default(),
            outcome: Outcome::Ignored(reason),
        }
    }

    fn applied(state: SessionState, items: Vec<Item>, writes: Writes) -> Self {
        Self {
            state,
            items,
            events: Vec::new(),
            writes,
            outcome: Outcome::Applied,
        }
    }
}

/// Applies `action` to `(state, items)`.
///
/// `now_ms` feeds id generation for `Action::Add`; other actions ignore it.
pub fn reduce(
    mut state: SessionState,
    mut items: Vec<Item>,
    action: Action,
    ids: &mut IdGenerator,
    now_ms: i64,
) -> Transition {
    let page_size = state.settings.items_per_page;

    match action {
        Action::Add(text) => {
            ids.observe(&items);
            let Ok(item) = Item::new(ids.next_id(now_ms), text) else {
                return Transition::unchanged(state, items, "empty_text");
            };
            items.push(item);
            state.current_page = 1;
            Transition::applied(
                state,
                items,
                Writes {
                    items: true,
                    ..Writes::default()
                },
            )
        }
        Action::Toggle(id) => {
            let Some(item) = items.iter_mut().find(|item| item.id == id) else {
                return Transition::unchanged(state, items, "not_found");
            };
            let completed = item.toggle();
            let event = (completed && !state.theme.is_dark())
                .then(|| TodoEvent::ItemCompleted(item.clone()));

            let mut transition = Transition::applied(
                state,
                items,
                Writes {
                    items: true,
                    ..Writes::default()
                },
            );
            transition.events.extend(event);
            transition
        }
        Action::Delete(id) => {
            let before = items.len();
            items.retain(|item| item.id != id);
            let last_page = total_pages(items.len(), page_size);
            state.current_page = clamp_page(state.current_page, last_page);
            if items.len() == before {
                return Transition::unchanged(state, items, "not_found");
            }
            Transition::applied(
                state,
                items,
                Writes {
                    items: true,
                    ..Writes::default()
                },
            )
        }
        Action::ChangePage(page) => {
            state.current_page = clamp_page(page, total_pages(items.len(), page_size));
            Transition::applied(state, items, Writes::default())
        }
        Action::ChangeSort(mode) => {
            let setting = Setting::Sort(mode);
            state.settings.apply(setting);
            Transition::applied(
                state,
                items,
                Writes {
                    setting: Some(setting),
                    ..Writes::default()
                },
            )
        }
        Action::ChangePageSize(size) => {
            let setting = Setting::ItemsPerPage(size);
            state.settings.apply(setting);
            state.current_page = 1;
            Transition::applied(
                state,
                items,
                Writes {
                    setting: Some(setting),
                    ..Writes::default()
                },
            )
        }
        Action::ToggleTheme => {
            state.theme = state.theme.toggled();
            Transition::applied(
                state,
                items,
                Writes {
                    theme: true,
                    ..Writes::default()
                },
            )
        }
    }
}
