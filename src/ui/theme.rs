//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the status listing
pub mod status_view {
    use super::*;

    /// Title bar color
    pub const TITLE: Color = Color::Cyan;
    /// Header line (head revision, hidden counts)
    pub const HEADER: Color = Color::Blue;
    /// Added / replaced
    pub const ADDED: Color = Color::Green;
    /// Modified (text or properties)
    pub const MODIFIED: Color = Color::Yellow;
    /// Deleted / missing
    pub const DELETED: Color = Color::Red;
    /// Conflicted on any axis
    pub const CONFLICTED: Color = Color::Magenta;
    /// Unversioned / ignored
    pub const UNKNOWN: Color = Color::DarkGray;
    /// Externals and obstructions
    pub const EXTERNAL: Color = Color::Cyan;
    /// Selection mark
    pub const MARKED: Color = Color::LightRed;
    /// Out-of-date marker
    pub const REMOTE_UPDATE: Color = Color::LightBlue;
}

/// Cursor row highlight
pub mod selection {
    use super::*;

    pub const FG: Color = Color::White;
    pub const BG: Color = Color::DarkGray;
}

/// Dialog borders
pub mod dialog {
    use super::*;

    pub const BORDER: Color = Color::Cyan;
    pub const WARNING: Color = Color::Yellow;
}

/// Color for a row, picked from its two status axes
pub fn status_color(file_status: char, prop_status: char, conflicted: bool) -> Color {
    if conflicted {
        return status_view::CONFLICTED;
    }
    match file_status {
        'A' | 'R' => status_view::ADDED,
        'M' => status_view::MODIFIED,
        'D' | '!' => status_view::DELETED,
        '?' | 'I' => status_view::UNKNOWN,
        'X' | '~' => status_view::EXTERNAL,
        _ if prop_status == 'M' => status_view::MODIFIED,
        _ => Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color_by_axis() {
        assert_eq!(status_color('M', ' ', false), status_view::MODIFIED);
        assert_eq!(status_color(' ', 'M', false), status_view::MODIFIED);
        assert_eq!(status_color('?', ' ', false), status_view::UNKNOWN);
        assert_eq!(status_color(' ', ' ', false), Color::Reset);
    }

    #[test]
    fn test_conflict_wins() {
        assert_eq!(status_color('A', ' ', true), status_view::CONFLICTED);
    }
}
