//! Status View
//!
//! Draws the working-copy listing and owns the cursor. The listing itself is
//! recomputed from the model on every [`StatusView::redraw`]; the cursor is carried
//! across by path.

mod input;
mod render;

use tui_textarea::TextArea;

use crate::model::{EntryModel, Filters};
use crate::ui::listing::{self, Cursor, CursorSnapshot, Listing, RenderOptions, Row};
use crate::ui::navigation;

/// Input mode for Status View
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusInputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Multi-line commit message
    CommitInput,
    /// `NAME VALUE` for svn propset
    PropsetInput,
}

/// Action returned from StatusView key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusAction {
    None,
    /// Set or clear the mark on the entry at the cursor
    Mark(bool),
    UnmarkAll,
    /// Toggle eliding of the entry (false) or of its contents (true)
    ToggleElide { subtree: bool },
    ToggleHideUnknown,
    ToggleHideUnmodified,
    ToggleSort,
    ToggleFullPaths,
    Refresh,
    Update,
    Commit { message: String },
    Add,
    Remove,
    DeleteUnversioned,
    Revert,
    Resolved,
    Lock,
    Unlock,
    Propset { name: String, value: String },
    Info,
    Cleanup,
    Kill,
}

/// Status View state
#[derive(Debug)]
pub struct StatusView {
    /// Rows from the last redraw
    pub(super) listing: Listing,

    pub(super) cursor: Cursor,

    /// Scroll offset for display
    pub(super) scroll_offset: usize,

    pub(super) options: RenderOptions,

    /// Shown in the title bar
    pub(super) title: String,

    /// Current input mode
    pub input_mode: StatusInputMode,

    /// Single-line input (propset)
    pub input_buffer: String,

    /// Commit message editor
    pub(crate) textarea: Option<TextArea<'static>>,
}

impl Default for StatusView {
    fn default() -> Self {
        Self::new("")
    }
}

impl StatusView {
    /// Default visible count for scroll calculations
    pub(super) const DEFAULT_VISIBLE_COUNT: usize = 20;

    /// Create a new StatusView titled with the working-copy label
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            listing: Listing::default(),
            cursor: Cursor::default(),
            scroll_offset: 0,
            options: RenderOptions::default(),
            title: title.into(),
            input_mode: StatusInputMode::Normal,
            input_buffer: String::new(),
            textarea: None,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Re-render from the model, keeping the cursor on the same path
    pub fn redraw(&mut self, model: &EntryModel, filters: &Filters) {
        let snapshot = CursorSnapshot::capture(&self.listing, self.cursor);
        self.listing = listing::render(model, filters, self.options);
        self.cursor = CursorSnapshot::restore(snapshot.as_ref(), &self.listing);
        self.scroll_offset = navigation::adjust_scroll(
            self.cursor.row,
            self.scroll_offset.min(self.listing.len().saturating_sub(1)),
            Self::DEFAULT_VISIBLE_COUNT,
        );
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.listing.row(self.cursor.row)
    }

    /// Path of the entry under the cursor
    pub fn selected_path(&self) -> Option<&str> {
        self.selected_row().map(|r| r.path.as_str())
    }

    pub fn full_paths(&self) -> bool {
        self.options.full_paths
    }

    /// Takes effect on the next redraw
    pub fn set_full_paths(&mut self, full_paths: bool) {
        self.options.full_paths = full_paths;
    }

    /// Start commit input mode
    pub fn start_commit_input(&mut self) {
        self.input_mode = StatusInputMode::CommitInput;
        self.textarea = Some(TextArea::default());
    }

    /// Start propset input mode
    pub fn start_propset_input(&mut self) {
        self.input_mode = StatusInputMode::PropsetInput;
        self.input_buffer.clear();
    }

    /// Cancel input mode
    pub fn cancel_input(&mut self) {
        self.input_mode = StatusInputMode::Normal;
        self.input_buffer.clear();
        self.textarea = None;
    }

    fn place_cursor(&mut self, row: usize, visible_count: usize) {
        self.cursor = Cursor {
            row,
            column: self.listing.row(row).map_or(0, |r| r.name_column),
        };
        self.scroll_offset = navigation::adjust_scroll(row, self.scroll_offset, visible_count);
    }

    fn max_row(&self) -> usize {
        self.listing.len().saturating_sub(1)
    }

    /// Move selection down
    pub(crate) fn move_down(&mut self, visible_count: usize) {
        let row = navigation::select_next(self.cursor.row, self.max_row());
        self.place_cursor(row, visible_count);
    }

    /// Move selection up
    fn move_up(&mut self, visible_count: usize) {
        let row = navigation::select_prev(self.cursor.row);
        self.place_cursor(row, visible_count);
    }

    fn page_down(&mut self, visible_count: usize) {
        let row = navigation::page_down(self.cursor.row, self.max_row(), visible_count);
        self.place_cursor(row, visible_count);
    }

    fn page_up(&mut self, visible_count: usize) {
        let row = navigation::page_up(self.cursor.row, visible_count);
        self.place_cursor(row, visible_count);
    }

    /// Jump to top
    fn jump_to_top(&mut self) {
        self.place_cursor(0, 0);
        self.scroll_offset = 0;
    }

    /// Jump to bottom
    fn jump_to_bottom(&mut self, visible_count: usize) {
        self.place_cursor(self.max_row(), visible_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Elide, EntryStatus, StatusListing, StatusRecord};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn record(path: &str, file_status: char) -> StatusRecord {
        StatusRecord {
            path: path.to_string(),
            status: EntryStatus {
                file_status,
                local_revision: 3,
                last_changed_revision: 3,
                author: "dev".to_string(),
                ..EntryStatus::default()
            },
        }
    }

    fn sample_model() -> EntryModel {
        let mut model = EntryModel::new();
        model.replace_all(StatusListing {
            records: vec![
                record("src/main.c", 'M'),
                record("src/new.c", 'A'),
                record("old.c", 'D'),
            ],
            head_revision: None,
            verbose: false,
        });
        model
    }

    fn view_of(model: &EntryModel) -> StatusView {
        let mut view = StatusView::new("trunk");
        view.redraw(model, &Filters::default());
        view
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_new_status_view() {
        let view = StatusView::new("trunk");
        assert!(view.listing().is_empty());
        assert_eq!(view.cursor(), Cursor::default());
        assert_eq!(view.selected_path(), None);
    }

    #[test]
    fn test_redraw_places_cursor_on_first_name() {
        let view = view_of(&sample_model());
        // old.c, src/, src/main.c, src/new.c
        assert_eq!(view.listing().len(), 4);
        assert_eq!(view.selected_path(), Some("old.c"));
        assert_eq!(view.cursor().column, view.listing().rows()[0].name_column);
    }

    #[test]
    fn test_move_down_and_up() {
        let mut view = view_of(&sample_model());
        view.handle_key(key(KeyCode::Char('j')));
        assert_eq!(view.selected_path(), Some("src"));
        view.handle_key(key(KeyCode::Down));
        assert_eq!(view.selected_path(), Some("src/main.c"));
        view.handle_key(key(KeyCode::Char('k')));
        assert_eq!(view.selected_path(), Some("src"));
    }

    #[test]
    fn test_jump_to_top_bottom() {
        let mut view = view_of(&sample_model());
        view.handle_key(key(KeyCode::Char('G')));
        assert_eq!(view.selected_path(), Some("src/new.c"));
        view.handle_key(key(KeyCode::Down));
        assert_eq!(view.selected_path(), Some("src/new.c"));
        view.handle_key(key(KeyCode::Char('g')));
        assert_eq!(view.selected_path(), Some("old.c"));
    }

    #[test]
    fn test_cursor_stays_on_path_when_rows_above_vanish() {
        let mut model = sample_model();
        let mut view = view_of(&model);
        view.handle_key(key(KeyCode::Char('G')));
        assert_eq!(view.cursor().row, 3);

        model.set_elide("old.c", Elide::SelfOnly);
        view.redraw(&model, &Filters::default());
        assert_eq!(view.selected_path(), Some("src/new.c"));
        assert_eq!(view.cursor().row, 2);
    }

    #[test]
    fn test_full_paths_moves_name_column() {
        let model = sample_model();
        let mut view = view_of(&model);
        view.handle_key(key(KeyCode::Char('G')));
        let indented = view.cursor().column;

        view.set_full_paths(true);
        view.redraw(&model, &Filters::default());
        let row = view.selected_row().unwrap();
        assert!(row.text.contains("src/new.c"));
        // The remembered column survives, clamped to the row
        assert_eq!(view.cursor().column, indented.min(row.text.chars().count() - 1));
    }

    #[test]
    fn test_mark_key_returns_action() {
        let mut view = view_of(&sample_model());
        assert_eq!(
            view.handle_key(key(KeyCode::Char('m'))),
            StatusAction::Mark(true)
        );
        assert_eq!(
            view.handle_key(key(KeyCode::Char('u'))),
            StatusAction::Mark(false)
        );
    }

    #[test]
    fn test_commit_input_submits_on_ctrl_s() {
        let mut view = view_of(&sample_model());
        assert_eq!(view.handle_key(key(KeyCode::Char('C'))), StatusAction::None);
        assert_eq!(view.input_mode, StatusInputMode::CommitInput);

        for c in "Fix".chars() {
            view.handle_key(key(KeyCode::Char(c)));
        }
        view.handle_key(key(KeyCode::Enter));
        for c in "body".chars() {
            view.handle_key(key(KeyCode::Char(c)));
        }

        let action = view.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(
            action,
            StatusAction::Commit {
                message: "Fix\nbody".to_string()
            }
        );
        assert_eq!(view.input_mode, StatusInputMode::Normal);
        assert!(view.textarea.is_none());
    }

    #[test]
    fn test_empty_commit_message_cancels() {
        let mut view = view_of(&sample_model());
        view.start_commit_input();
        let action = view.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(action, StatusAction::None);
        assert_eq!(view.input_mode, StatusInputMode::Normal);
    }

    #[test]
    fn test_commit_not_offered_on_empty_listing() {
        let mut view = StatusView::new("trunk");
        view.handle_key(key(KeyCode::Char('C')));
        assert_eq!(view.input_mode, StatusInputMode::Normal);
    }

    #[test]
    fn test_propset_input() {
        let mut view = view_of(&sample_model());
        view.handle_key(key(KeyCode::Char('P')));
        assert_eq!(view.input_mode, StatusInputMode::PropsetInput);
        for c in "svn:eol-style native".chars() {
            view.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(
            view.handle_key(key(KeyCode::Enter)),
            StatusAction::Propset {
                name: "svn:eol-style".to_string(),
                value: "native".to_string()
            }
        );
    }

    #[test]
    fn test_propset_without_value_is_ignored() {
        let mut view = view_of(&sample_model());
        view.start_propset_input();
        for c in "svn:keywords".chars() {
            view.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(view.handle_key(key(KeyCode::Enter)), StatusAction::None);
        assert_eq!(view.input_mode, StatusInputMode::Normal);
    }

    #[test]
    fn test_escape_cancels_input() {
        let mut view = view_of(&sample_model());
        view.start_propset_input();
        view.handle_key(key(KeyCode::Char('x')));
        assert_eq!(view.handle_key(key(KeyCode::Esc)), StatusAction::None);
        assert_eq!(view.input_mode, StatusInputMode::Normal);
        assert!(view.input_buffer.is_empty());
    }
}
