// app/state.rs

//! UI state: the active theme, scroll position and panel visibility.
//!
//! The page itself is stateless; everything here belongs to the viewer
//! chrome around it.

use enum_iterator::all;

use super::actions::{Action, Actions};
use crate::theme::Theme;

pub struct AppState {
    pub actions: Actions,
    pub theme: Theme,

    // UI
    pub show_logs: bool,
    pub show_help: bool,
    scroll: usize,
    page_height: usize,
    viewport_height: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            actions: all::<Action>().collect::<Vec<_>>().into(),
            theme: Theme::active(),
            show_logs: false,
            show_help: false,
            scroll: 0,
            page_height: 0,
            viewport_height: 0,
        }
    }
}

impl AppState {
    /// Scroll offset for the page paragraph, clamped to the page end.
    pub fn scroll(&self) -> u16 {
        self.scroll.min(self.max_scroll()) as u16
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.saturating_sub(1).max(1));
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.saturating_sub(1).max(1));
    }

    pub fn go_top(&mut self) {
        self.scroll = 0;
    }

    pub fn go_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Recorded by the renderer each frame; keeps the clamp honest when the
    /// terminal is resized or a panel is toggled.
    pub fn set_page_height(&mut self, height: usize) {
        self.page_height = height;
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
    }

    fn max_scroll(&self) -> usize {
        self.page_height.saturating_sub(self.viewport_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn state(page_height: usize, viewport_height: usize) -> AppState {
        let mut state = AppState::default();
        state.set_page_height(page_height);
        state.set_viewport_height(viewport_height);
        state
    }

    #[test]
    fn scroll_is_clamped_to_page_end() {
        let mut state = state(100, 20);
        state.scroll_down(500);
        assert_eq!(state.scroll(), 80);
        state.scroll_up(500);
        assert_eq!(state.scroll(), 0);
    }

    #[rstest]
    #[case::page_shorter_than_viewport(10, 20, 0)]
    #[case::page_fills_viewport(20, 20, 0)]
    #[case::page_overflows(30, 20, 10)]
    fn bottom_depends_on_viewport(
        #[case] page_height: usize,
        #[case] viewport_height: usize,
        #[case] expected: u16,
    ) {
        let mut state = state(page_height, viewport_height);
        state.go_bottom();
        assert_eq!(state.scroll(), expected);
    }

    #[test]
    fn page_down_steps_by_viewport() {
        let mut state = state(100, 20);
        state.page_down();
        assert_eq!(state.scroll(), 19);
        state.page_up();
        assert_eq!(state.scroll(), 0);
    }
}
