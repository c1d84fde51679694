//! Search box widget with tui-textarea integration
//!
//! A single-line editor for the keyword filter. Typing only updates the
//! keyword; the listing is fetched when the search is submitted.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};
use tui_textarea::TextArea;

use crate::app::reducer::is_global_key;
use crate::app::{AppState, Focus};

const PLACEHOLDER: &str = "Search for jobs by keyword... (Enter to search)";

/// Stateful search box
pub struct SearchBox<'a> {
    textarea: TextArea<'a>,
}

impl Default for SearchBox<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> SearchBox<'a> {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_cursor_line_style(Style::default());
        Self { textarea }
    }

    /// Current keyword, trimmed
    pub fn content(&self) -> String {
        self.textarea.lines().join(" ").trim().to_string()
    }

    /// Feed a key to the editor
    ///
    /// Returns the new keyword when the key changed the text. Global keys and
    /// keys arriving while another panel or an overlay has focus are left for
    /// the reducer.
    pub fn input(&mut self, key: KeyEvent, state: &AppState) -> Option<String> {
        if state.focus != Focus::Search || state.has_overlay() || is_global_key(&key, state.focus) {
            return None;
        }
        self.textarea.input(key).then(|| self.content())
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::Search && !state.has_overlay();
        let border = match (focused, state.config.colors_enabled) {
            (true, true) => Style::default().fg(Color::Cyan),
            _ => Style::default(),
        };
        self.textarea.set_block(
            Block::default()
                .title(" Search ")
                .borders(Borders::ALL)
                .border_style(border),
        );
        frame.render_widget(&self.textarea, area);
    }
}
