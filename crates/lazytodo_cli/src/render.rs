//! Plain-text renderer.

use lazytodo_core::{page_numbers, BackgroundColor, Item, RenderView, Renderer};
use log::warn;
use std::io::{self, Write};

const ALL_DONE_BANNER: &str = "*** All tasks completed! ***";

/// Writes each frame to `out`. Every frame is a full redraw, so the banner
/// appears at most once per frame.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints a free-form line between frames.
    pub fn note(&mut self, message: &str) {
        if let Err(err) = writeln!(self.out, "{message}") {
            warn!("event=render module=cli status=error error={err}");
        }
    }

    fn write_frame(&mut self, view: &RenderView) -> io::Result<()> {
        let background = view
            .background
            .map_or_else(|| "none".to_string(), |color| color.to_string());
        writeln!(
            self.out,
            "== lazytodo == theme={} sort={} per_page={} background={}",
            view.theme, view.sort_mode, view.page_size, background
        )?;
        if view.all_done {
            writeln!(self.out, "{ALL_DONE_BANNER}")?;
        }
        if view.items.is_empty() {
            writeln!(self.out, "(nothing here)")?;
        }
        for item in &view.items {
            let mark = if item.checked { 'x' } else { ' ' };
            writeln!(self.out, "[{mark}] {:>13}  {}", item.id, item.text)?;
        }
        if view.has_multiple_pages() {
            let pager: Vec<String> = page_numbers(view.total_pages)
                .map(|page| {
                    if page == view.current_page {
                        format!("[{page}]")
                    } else {
                        page.to_string()
                    }
                })
                .collect();
            writeln!(self.out, "pages: {}", pager.join(" "))?;
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &RenderView) {
        if let Err(err) = self.write_frame(view) {
            warn!("event=render module=cli status=error error={err}");
        }
    }

    fn on_item_completed(&mut self, _item: &Item) -> Option<BackgroundColor> {
        Some(BackgroundColor::reward())
    }
}
