//! To-do mutation engine.
//!
//! # Responsibility
//! - Load the collection, apply one action through `reducer::reduce`, persist
//!   what changed and hand a fresh view to the renderer.
//! - Deliver completion events to the renderer without inlining cosmetic
//!   effects into list logic.
//!
//! # Invariants
//! - Storage failures never abort an action; they are logged and the view is
//!   still rendered.
//! - The persisted collection stays in insertion order; views are ranked on
//!   read with the current sort mode.

use crate::engine::completion::is_all_done;
use crate::engine::ids::{Clock, IdGenerator, SystemClock};
use crate::engine::pagination::paginate;
use crate::engine::rank::rank;
use crate::model::appearance::{BackgroundColor, Theme};
use crate::model::item::{Item, ItemId};
use crate::model::settings::{PageSize, SortMode};
use crate::service::reducer::{reduce, Action, Outcome, SessionState, TodoEvent, Transition};
use crate::store::{KeyValueStore, StoreResult, TodoStore};
use log::{debug, error, info};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderView {
    /// Ranked items of the current page.
    pub items: Vec<Item>,
    pub total_pages: u32,
    pub current_page: u32,
    pub all_done: bool,
    pub sort_mode: SortMode,
    pub page_size: PageSize,
    pub theme: Theme,
    /// Saved reward background; always `None` in the dark theme.
    pub background: Option<BackgroundColor>,
}

impl RenderView {
    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }
}

/// Display collaborator driven by `TodoService`.
pub trait Renderer {
    /// Draws `view`. Must tolerate repeated calls with identical views.
    fn render(&mut self, view: &RenderView);

    /// Called when an item was just checked in the light theme, before
    /// `render`. Returning a color stores it as the new page background.
    fn on_item_completed(&mut self, _item: &Item) -> Option<BackgroundColor> {
        None
    }
}

/// Renderer that draws nothing; useful for headless callers and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _view: &RenderView) {}
}

/// Session-scoped mutation engine over a `TodoStore`.
pub struct TodoService<S: KeyValueStore> {
    store: TodoStore<S>,
    state: SessionState,
    ids: IdGenerator,
    clock: Box<dyn Clock>,
}

impl<S: KeyValueStore> TodoService<S> {
    /// Starts a session on page 1 with persisted settings and theme.
    pub fn new(store: TodoStore<S>) -> Self {
        let state = SessionState::new(store.load_settings(), store.load_theme());
        let ids = IdGenerator::seeded_from(&store.load_items());
        info!(
            "event=session_start module=service status=ok page_size={} sort={} theme={}",
            state.settings.items_per_page, state.settings.sort_mode, state.theme
        );
        Self {
            store,
            state,
            ids,
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the id clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &TodoStore<S> {
        &self.store
    }

    pub fn add(&mut self, text: impl Into<String>, renderer: &mut dyn Renderer) -> RenderView {
        self.dispatch(Action::Add(text.into()), renderer)
    }

    pub fn toggle(&mut self, id: ItemId, renderer: &mut dyn Renderer) -> RenderView {
        self.dispatch(Action::Toggle(id), renderer)
    }

    pub fn delete(&mut self, id: ItemId, renderer: &mut dyn Renderer) -> RenderView {
        self.dispatch(Action::Delete(id), renderer)
    }

    pub fn change_page(&mut self, page: u32, renderer: &mut dyn Renderer) -> RenderView {
        self.dispatch(Action::ChangePage(page), renderer)
    }

    pub fn change_sort(&mut self, mode: SortMode, renderer: &mut dyn Renderer) -> RenderView {
        self.dispatch(Action::ChangeSort(mode), renderer)
    }

    pub fn change_page_size(&mut self, size: PageSize, renderer: &mut dyn Renderer) -> RenderView {
        self.dispatch(Action::ChangePageSize(size), renderer)
    }

    pub fn toggle_theme(&mut self, renderer: &mut dyn Renderer) -> RenderView {
        self.dispatch(Action::ToggleTheme, renderer)
    }

    /// Renders the current state without changing anything.
    pub fn refresh(&mut self, renderer: &mut dyn Renderer) -> RenderView {
        let view = self.view();
        renderer.render(&view);
        view
    }

    /// Builds the view for the current state.
    pub fn view(&self) -> RenderView {
        self.view_of(&self.store.load_items())
    }

    /// Runs one action through the full commit sequence.
    pub fn dispatch(&mut self, action: Action, renderer: &mut dyn Renderer) -> RenderView {
        let action_name = action.name();
        let items = self.store.load_items();
        let now_ms = self.clock.now_millis();
        let Transition {
            state,
            items,
            events,
            writes,
            outcome,
        } = reduce(self.state, items, action, &mut self.ids, now_ms);

        match outcome {
            Outcome::Applied => debug!(
                "event=todo_action module=service status=ok action={} items={} page={}",
                action_name,
                items.len(),
                state.current_page
            ),
            Outcome::Ignored(reason) => debug!(
                "event=todo_action module=service status=ignored action={} reason={}",
                action_name, reason
            ),
        }

        self.state = state;
        if writes.items {
            self.persist(action_name, "todos", self.store.save_items(&items));
        }
        if let Some(setting) = writes.setting {
            self.persist(action_name, "setting", self.store.save_setting(setting));
        }
        if writes.theme {
            self.persist(action_name, "theme", self.store.save_theme(self.state.theme));
        }

        for event in events {
            match event {
                TodoEvent::ItemCompleted(item) => {
                    if let Some(color) = renderer.on_item_completed(&item) {
                        self.persist(action_name, "bgColor", self.store.save_background(color));
                    }
                }
            }
        }

        let view = self.view_of(&items);
        renderer.render(&view);
        view
    }

    fn view_of(&self, items: &[Item]) -> RenderView {
        let settings = self.state.settings;
        let ranked = rank(items, settings.sort_mode);
        let page = paginate(&ranked, self.state.current_page, settings.items_per_page);
        let background = if self.state.theme.is_dark() {
            None
        } else {
            self.store.load_background()
        };

        RenderView {
            items: page.items,
            total_pages: page.total_pages,
            current_page: self.state.current_page,
            all_done: is_all_done(items),
            sort_mode: settings.sort_mode,
            page_size: settings.items_per_page,
            theme: self.state.theme,
            background,
        }
    }

    fn persist(&self, action: &str, target: &str, result: StoreResult<()>) {
        if let Err(err) = result {
            error!(
                "event=store_write module=service status=error action={} target={} error={}",
                action, target, err
            );
        }
    }
}
