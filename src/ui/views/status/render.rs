//! Status View rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{StatusInputMode, StatusView};
use crate::model::Notification;
use crate::ui::listing::Row;
use crate::ui::{components, navigation, symbols, theme};

/// Header line plus a separator
const HEADER_LINES: usize = 2;

/// Height of the commit message editor
const COMMIT_EDITOR_HEIGHT: u16 = 8;

impl StatusView {
    /// Render the view with optional notification and running command in the title bar
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        notification: Option<&Notification>,
        running: Option<&str>,
    ) {
        let (list_area, input_area) = match self.input_mode {
            StatusInputMode::Normal => (area, None),
            StatusInputMode::CommitInput => {
                let chunks = Layout::vertical([
                    Constraint::Min(1),
                    Constraint::Length(COMMIT_EDITOR_HEIGHT),
                ])
                .split(area);
                (chunks[0], Some(chunks[1]))
            }
            StatusInputMode::PropsetInput => {
                let chunks =
                    Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(area);
                (chunks[0], Some(chunks[1]))
            }
        };

        let title = Line::from(format!(" tis - {} ", self.title))
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(theme::status_view::TITLE),
            )
            .centered();

        let available = (area.width as usize).saturating_sub(title.width() + 4);
        let title_extra = match running {
            Some(command) => Some(components::build_running_line(command)),
            None => notification
                .filter(|n| !n.is_expired())
                .map(|n| components::build_notification_title(n, available))
                .filter(|line| !line.spans.is_empty()),
        };
        let block = components::bordered_block_with_notification(title, title_extra);

        if self.listing.is_empty() {
            let content =
                components::nothing_shown_state(self.listing.hidden().total()).block(block);
            frame.render_widget(content, list_area);
        } else {
            let inner = block.inner(list_area);
            frame.render_widget(block, list_area);
            self.render_rows(frame, inner);
        }

        if let Some(input_area) = input_area {
            match self.input_mode {
                StatusInputMode::CommitInput => self.render_commit_editor(frame, input_area),
                StatusInputMode::PropsetInput => self.render_input_bar(frame, input_area),
                StatusInputMode::Normal => {}
            }
        }
    }

    /// Visible rows for a given inner height
    pub fn visible_count(height: u16) -> usize {
        (height as usize).saturating_sub(HEADER_LINES)
    }

    fn render_rows(&self, frame: &mut Frame, area: Rect) {
        let visible = Self::visible_count(area.height);
        let scroll = navigation::adjust_scroll(self.cursor.row, self.scroll_offset, visible);

        let mut lines = vec![
            Line::from(Span::styled(
                self.listing.header(),
                Style::default().fg(theme::status_view::HEADER),
            )),
            Line::from(""),
        ];
        lines.extend(
            self.listing
                .rows()
                .iter()
                .enumerate()
                .skip(scroll)
                .take(visible)
                .map(|(idx, row)| build_row_line(row, idx == self.cursor.row)),
        );
        frame.render_widget(Paragraph::new(lines), area);

        if self.input_mode == StatusInputMode::Normal
            && visible > 0
            && self.cursor.row >= scroll
            && self.cursor.row < scroll + visible
        {
            let column = (self.cursor.column as u16).min(area.width.saturating_sub(1));
            let row = (HEADER_LINES + self.cursor.row - scroll) as u16;
            frame.set_cursor_position((area.x + column, area.y + row));
        }
    }

    /// Render the commit message editor
    fn render_commit_editor(&self, frame: &mut Frame, area: Rect) {
        let Some(textarea) = &self.textarea else {
            return;
        };
        let title = Line::from(vec![
            Span::raw(" Commit message  "),
            Span::styled("[Ctrl+S]", Style::default().fg(theme::status_view::ADDED)),
            Span::raw(" Commit  "),
            Span::styled("[Esc]", Style::default().fg(theme::status_view::DELETED)),
            Span::raw(" Cancel "),
        ]);
        let block = components::bordered_block(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(textarea, inner);
    }

    /// Render the propset input bar
    fn render_input_bar(&self, frame: &mut Frame, area: Rect) {
        let prompt = "Property (name value): ";
        let input_text = format!("{}{}", prompt, self.input_buffer);

        let available_width = area.width.saturating_sub(2) as usize;
        if available_width == 0 {
            return;
        }

        // Show the end of long input
        let char_count = input_text.chars().count();
        let display_text = if char_count > available_width {
            let skip = char_count.saturating_sub(available_width.saturating_sub(1));
            format!(
                "{}{}",
                symbols::input::ELLIPSIS,
                input_text.chars().skip(skip).collect::<String>()
            )
        } else {
            input_text
        };

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled("[Enter]", Style::default().fg(theme::status_view::ADDED)),
            Span::raw(" Set  "),
            Span::styled("[Esc]", Style::default().fg(theme::status_view::DELETED)),
            Span::raw(" Cancel "),
        ]);

        let paragraph = Paragraph::new(display_text).block(components::bordered_block(title));
        frame.render_widget(paragraph, area);

        let cursor_pos = char_count.min(available_width);
        frame.set_cursor_position((area.x + cursor_pos as u16 + 1, area.y + 1));
    }
}

/// Styled line for one listing row
///
/// The mark column, the status columns and the name each get their own span so
/// the row text stays byte-identical to `Row::text`.
fn build_row_line(row: &Row, is_selected: bool) -> Line<'static> {
    let color = theme::status_color(row.file_status, row.prop_status, row.conflicted);
    let mut chars = row.text.chars();
    let mark: String = chars.by_ref().take(1).collect();
    let columns: String = chars.by_ref().take(row.name_column.saturating_sub(1)).collect();
    let name: String = chars.collect();

    let mark_style = if row.marked {
        Style::default()
            .fg(theme::status_view::MARKED)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let mut name_style = Style::default().fg(color);
    if row.is_dir {
        name_style = name_style.add_modifier(Modifier::BOLD);
    }
    if row.extra_action.is_some() {
        name_style = name_style.add_modifier(Modifier::ITALIC);
    }

    let mut columns_style = Style::default().fg(color);
    if row.remote_update {
        columns_style = columns_style.fg(theme::status_view::REMOTE_UPDATE);
    }

    let mut line = Line::from(vec![
        Span::styled(mark, mark_style),
        Span::styled(columns, columns_style),
        Span::styled(name, name_style),
    ]);

    if is_selected {
        line = line.style(
            Style::default()
                .fg(theme::selection::FG)
                .bg(theme::selection::BG),
        );
    }

    line
}
