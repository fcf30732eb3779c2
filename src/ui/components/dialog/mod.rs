//! Modal dialogs
//!
//! - Confirm dialog: Yes/No before destructive commands
//! - Prompt dialog: free-text answer to a question asked by a running svn process

mod confirm;
mod prompt;

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use tui_textarea::TextArea;

/// What to do once the dialog closes with a positive answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogCallback {
    /// `svn revert` on the paths
    Revert { paths: Vec<String> },
    /// `svn remove` on the paths
    Remove { paths: Vec<String> },
    /// Delete unversioned files from disk
    DeleteUnversioned { paths: Vec<String> },
    /// Forward the answer to the running svn process
    AnswerPrompt,
}

/// Dialog kind and content
#[derive(Debug, Clone)]
pub enum DialogKind {
    /// Simple Yes/No confirmation
    Confirm {
        title: String,
        message: String,
        /// Optional detail text (warning, etc.)
        detail: Option<String>,
    },
    /// Single-line text answer
    Prompt {
        title: String,
        message: String,
        input: TextArea<'static>,
    },
}

/// Dialog result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult {
    Confirmed,
    /// Text typed into a prompt
    Answered(String),
    Cancelled,
}

/// Dialog state
#[derive(Debug, Clone)]
pub struct Dialog {
    pub kind: DialogKind,
    pub callback_id: DialogCallback,
}

impl Dialog {
    /// Create a new Confirm dialog
    pub fn confirm(
        title: impl Into<String>,
        message: impl Into<String>,
        detail: Option<String>,
        callback_id: DialogCallback,
    ) -> Self {
        Self {
            kind: DialogKind::Confirm {
                title: title.into(),
                message: message.into(),
                detail,
            },
            callback_id,
        }
    }

    /// Create a new Prompt dialog; `secret` masks what is typed
    pub fn prompt(
        title: impl Into<String>,
        message: impl Into<String>,
        secret: bool,
        callback_id: DialogCallback,
    ) -> Self {
        Self {
            kind: DialogKind::Prompt {
                title: title.into(),
                message: message.into(),
                input: prompt::input_area(secret),
            },
            callback_id,
        }
    }

    /// Handle key input, returns Some(result) when dialog should close
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DialogResult> {
        match &mut self.kind {
            DialogKind::Confirm { .. } => confirm::handle_key(key),
            DialogKind::Prompt { input, .. } => prompt::handle_key(input, key),
        }
    }

    /// Render the dialog centered on screen
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match &self.kind {
            DialogKind::Confirm {
                title,
                message,
                detail,
            } => confirm::render(frame, area, title, message, detail.as_deref()),
            DialogKind::Prompt {
                title,
                message,
                input,
            } => prompt::render(frame, area, title, message, input),
        }
    }
}

/// Calculate a centered rectangle within the given area
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical_margin = area.height.saturating_sub(height) / 2;
    let horizontal_margin = area.width.saturating_sub(width) / 2;

    let vertical_layout = Layout::vertical([
        Constraint::Length(vertical_margin),
        Constraint::Length(height),
        Constraint::Length(vertical_margin),
    ])
    .split(area);

    let horizontal_layout = Layout::horizontal([
        Constraint::Length(horizontal_margin),
        Constraint::Length(width),
        Constraint::Length(horizontal_margin),
    ])
    .split(vertical_layout[1]);

    horizontal_layout[1]
}
