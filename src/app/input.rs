//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, View};
use crate::keys;
use crate::ui::views::StatusInputMode;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        // Dialogs take every key while open
        if let Some(dialog) = self.active_dialog.as_mut() {
            if let Some(result) = dialog.handle_key(key) {
                self.handle_dialog_result(result);
            }
            return;
        }

        // Clear error message on any other key press
        self.error_message = None;

        if self.current_view == View::Help {
            self.handle_help_key(key);
            return;
        }

        // Text input swallows global keys
        if self.status_view.input_mode != StatusInputMode::Normal {
            let action = self.status_view.handle_key(key);
            self.handle_status_action(action);
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        let action = self
            .status_view
            .handle_key_with_height(key, self.visible_count());
        self.handle_status_action(action);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        if keys::is_refresh_key(&key) {
            self.refresh();
            return true;
        }
        match key.code {
            keys::QUIT => {
                self.quit();
                true
            }
            keys::HELP => {
                self.go_to_view(View::Help);
                true
            }
            _ => false,
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            keys::QUIT | keys::ESC | keys::HELP => self.go_to_view(View::Status),
            code if keys::is_move_down(code) => {
                self.help_scroll = self.help_scroll.saturating_add(1);
            }
            code if keys::is_move_up(code) => {
                self.help_scroll = self.help_scroll.saturating_sub(1);
            }
            keys::GO_TOP => self.help_scroll = 0,
            _ => {}
        }
    }
}
