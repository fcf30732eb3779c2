//! Rendering logic for the application

use ratatui::{Frame, prelude::*};

use super::state::{App, View};
use crate::keys::{self, DialogHintKind, HintContext};
use crate::ui::components::DialogKind;
use crate::ui::widgets::{render_error_banner, render_help_panel, render_status_bar};

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        self.last_frame_height.set(area.height);

        // Last row belongs to the status bar
        let main_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };

        match self.current_view {
            View::Status => {
                let notification = self.notification.as_ref().filter(|n| !n.is_expired());
                let running = self.running_command();
                self.status_view
                    .render(frame, main_area, notification, running.as_deref());
            }
            View::Help => render_help_panel(frame, main_area, self.help_scroll),
        }

        // Errors are always shown, above the status bar
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error);
        }

        let hints = keys::current_hints(self.status_view.input_mode, &self.build_hint_context());
        render_status_bar(frame, self.status_bar_prefix(), &hints);

        // Render dialog on top of everything
        if let Some(ref dialog) = self.active_dialog {
            dialog.render(frame, area);
        }
    }

    /// Build HintContext from current App state
    fn build_hint_context(&self) -> HintContext {
        HintContext {
            dialog: self.dialog_hint_kind(),
            busy: self.session.is_busy(),
            has_conflict: self
                .status_view
                .selected_row()
                .is_some_and(|row| row.conflicted),
        }
    }

    /// Convert active dialog to DialogHintKind
    fn dialog_hint_kind(&self) -> Option<DialogHintKind> {
        self.active_dialog.as_ref().map(|d| match &d.kind {
            DialogKind::Confirm { .. } => DialogHintKind::Confirm,
            DialogKind::Prompt { .. } => DialogHintKind::Prompt,
        })
    }

    /// Head revision and mark count ahead of the key hints
    fn status_bar_prefix(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        if let Some(revision) = self.model.head_revision() {
            spans.push(Span::styled(
                format!("r{revision}"),
                Style::default().fg(Color::Cyan),
            ));
        }
        let marked = self.model.marked().count();
        if marked > 0 {
            if !spans.is_empty() {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!("{marked} marked"),
                Style::default().fg(Color::LightRed),
            ));
        }
        spans
    }
}
