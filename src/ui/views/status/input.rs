//! Status View key handling

use crossterm::event::{KeyCode, KeyEvent};

use super::{StatusAction, StatusInputMode, StatusView};
use crate::keys;

impl StatusView {
    /// Handle key event
    pub fn handle_key(&mut self, key: KeyEvent) -> StatusAction {
        self.handle_key_with_height(key, Self::DEFAULT_VISIBLE_COUNT)
    }

    /// Handle key event with explicit visible height
    pub fn handle_key_with_height(&mut self, key: KeyEvent, visible_count: usize) -> StatusAction {
        match self.input_mode {
            StatusInputMode::Normal => self.handle_normal_key(key, visible_count),
            StatusInputMode::CommitInput => self.handle_commit_input_key(key),
            StatusInputMode::PropsetInput => self.handle_propset_input_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent, visible_count: usize) -> StatusAction {
        match key.code {
            code if keys::is_move_down(code) => self.move_down(visible_count),
            code if keys::is_move_up(code) => self.move_up(visible_count),
            keys::GO_TOP => self.jump_to_top(),
            keys::GO_BOTTOM => self.jump_to_bottom(visible_count),
            keys::PAGE_DOWN => self.page_down(visible_count),
            keys::PAGE_UP => self.page_up(visible_count),
            keys::COMMIT => {
                if !self.listing.is_empty() {
                    self.start_commit_input();
                }
            }
            keys::PROPSET => {
                if !self.listing.is_empty() {
                    self.start_propset_input();
                }
            }
            code => return Self::command_for(code),
        }
        StatusAction::None
    }

    fn command_for(code: KeyCode) -> StatusAction {
        match code {
            keys::MARK => StatusAction::Mark(true),
            keys::UNMARK => StatusAction::Mark(false),
            keys::UNMARK_ALL => StatusAction::UnmarkAll,
            keys::ELIDE => StatusAction::ToggleElide { subtree: false },
            keys::ELIDE_SUBTREE => StatusAction::ToggleElide { subtree: true },
            keys::HIDE_UNKNOWN => StatusAction::ToggleHideUnknown,
            keys::HIDE_UNMODIFIED => StatusAction::ToggleHideUnmodified,
            keys::TOGGLE_SORT => StatusAction::ToggleSort,
            keys::TOGGLE_FULL_PATHS => StatusAction::ToggleFullPaths,
            keys::REFRESH => StatusAction::Refresh,
            keys::UPDATE => StatusAction::Update,
            keys::ADD => StatusAction::Add,
            keys::REMOVE => StatusAction::Remove,
            keys::DELETE_UNVERSIONED => StatusAction::DeleteUnversioned,
            keys::REVERT => StatusAction::Revert,
            keys::RESOLVED => StatusAction::Resolved,
            keys::LOCK => StatusAction::Lock,
            keys::UNLOCK => StatusAction::Unlock,
            keys::INFO => StatusAction::Info,
            keys::CLEANUP => StatusAction::Cleanup,
            keys::KILL => StatusAction::Kill,
            // QUIT, HELP, ESC are handled by the global key handler
            _ => StatusAction::None,
        }
    }

    fn handle_commit_input_key(&mut self, key: KeyEvent) -> StatusAction {
        if keys::is_submit_key(&key) {
            let message = self
                .textarea
                .take()
                .map(|t| t.lines().join("\n"))
                .unwrap_or_default();
            self.input_mode = StatusInputMode::Normal;
            if message.trim().is_empty() {
                // Empty message = cancel
                return StatusAction::None;
            }
            return StatusAction::Commit { message };
        }

        if key.code == keys::ESC {
            self.cancel_input();
            return StatusAction::None;
        }

        // Everything else edits the message (Enter = newline)
        if let Some(ref mut textarea) = self.textarea {
            textarea.input(key);
        }
        StatusAction::None
    }

    fn handle_propset_input_key(&mut self, key: KeyEvent) -> StatusAction {
        match key.code {
            KeyCode::Esc => {
                self.cancel_input();
                StatusAction::None
            }
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.input_buffer);
                self.input_mode = StatusInputMode::Normal;
                match input.trim().split_once(char::is_whitespace) {
                    Some((name, value)) if !value.trim().is_empty() => StatusAction::Propset {
                        name: name.to_string(),
                        value: value.trim().to_string(),
                    },
                    _ => StatusAction::None,
                }
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                StatusAction::None
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                StatusAction::None
            }
            _ => StatusAction::None,
        }
    }
}
