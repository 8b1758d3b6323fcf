// app/mod.rs

//! Controller mapping key presses to scroll and panel actions.

pub mod actions;
pub mod state;

use log::*;

use self::actions::Action;
use self::state::AppState;
use crate::config::UserConfig;
use crate::inputs::key::Key;

/// Return status indicating whether the app should exit or not.
#[derive(Debug, PartialEq, Eq)]
pub enum AppReturn {
    Exit,
    Continue,
}

/// `App` owns the UI state of the page viewer.
pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(config: &UserConfig) -> Self {
        let mut state = AppState::default();
        state.show_logs = config.show_logs;
        Self { state }
    }

    /// Handle a user key press.
    pub fn process_key(&mut self, key: Key) -> AppReturn {
        if let Some(action) = self.state.actions.find(key) {
            debug!("Run action [{:?}]", action);
            match action {
                Action::GoBottom => self.state.go_bottom(),
                Action::GoTop => self.state.go_top(),
                Action::PageDown => self.state.page_down(),
                Action::PageUp => self.state.page_up(),
                Action::Quit => return AppReturn::Exit,
                Action::ScrollDown => self.state.scroll_down(1),
                Action::ScrollUp => self.state.scroll_up(1),
                Action::ToggleHelp => {
                    self.state.show_help = !self.state.show_help;
                }
                Action::ToggleLogs => {
                    self.state.show_logs = !self.state.show_logs;
                }
            }
        } else {
            warn!("No action associated with {} in this mode", key);
        }
        AppReturn::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&UserConfig::default())
    }

    #[test]
    fn quit_key_exits() {
        assert_eq!(app().process_key(Key::Char('q')), AppReturn::Exit);
        assert_eq!(app().process_key(Key::Ctrl('c')), AppReturn::Exit);
    }

    #[test]
    fn unknown_key_continues() {
        assert_eq!(app().process_key(Key::Char('z')), AppReturn::Continue);
    }

    #[test]
    fn toggles_flip_panel_state() {
        let mut app = app();
        assert!(!app.state.show_help);
        app.process_key(Key::Char('h'));
        assert!(app.state.show_help);
        app.process_key(Key::Char('l'));
        assert!(app.state.show_logs);
    }
}
