//! Prompt dialog: one line of text typed into a `tui-textarea`

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tui_textarea::TextArea;

use super::{DialogResult, centered_rect};
use crate::ui::{symbols, theme};

pub(super) fn input_area(secret: bool) -> TextArea<'static> {
    let mut input = TextArea::default();
    input.set_cursor_line_style(Style::default());
    input.set_block(Block::default().borders(Borders::ALL));
    if secret {
        input.set_mask_char(symbols::input::MASK);
    }
    input
}

/// Text typed so far
pub(super) fn answer(input: &TextArea<'_>) -> String {
    input.lines().concat()
}

pub(super) fn handle_key(input: &mut TextArea<'static>, key: KeyEvent) -> Option<DialogResult> {
    match key.code {
        KeyCode::Enter => Some(DialogResult::Answered(answer(input))),
        KeyCode::Esc => Some(DialogResult::Cancelled),
        _ => {
            input.input(key);
            None
        }
    }
}

pub(super) fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    input: &TextArea<'static>,
) {
    let width = 60.min(area.width.saturating_sub(4));
    let height = 8.min(area.height.saturating_sub(2));
    let dialog_area = centered_rect(width, height, area);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::dialog::BORDER));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let [question, field, hint] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        question,
    );
    frame.render_widget(input, field);
    frame.render_widget(
        Paragraph::new(Line::from("[Enter] Answer  [Esc] Cancel")).centered(),
        hint,
    );
}
