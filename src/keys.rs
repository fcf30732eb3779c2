//! Keybinding definitions for tis
//!
//! All keybindings are defined here; the help panel and the status bar read the
//! tables at the bottom.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::ui::views::StatusInputMode;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (refresh)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+C (quit from anywhere)
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+S (submit multi-line input)
pub fn is_submit_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application or close help
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Close help / cancel
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

pub const MOVE_UP: KeyCode = KeyCode::Char('k');
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;
pub const GO_TOP: KeyCode = KeyCode::Char('g');
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');
pub const PAGE_DOWN: KeyCode = KeyCode::PageDown;
pub const PAGE_UP: KeyCode = KeyCode::PageUp;

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Marks and filters
// =============================================================================

/// Mark entry at cursor and move down
pub const MARK: KeyCode = KeyCode::Char('m');

/// Unmark entry at cursor and move down
pub const UNMARK: KeyCode = KeyCode::Char('u');

/// Unmark everything
pub const UNMARK_ALL: KeyCode = KeyCode::Char('M');

/// Hide / show the entry at cursor
pub const ELIDE: KeyCode = KeyCode::Char('e');

/// Hide / show the contents of the directory at cursor
pub const ELIDE_SUBTREE: KeyCode = KeyCode::Char('E');

/// Toggle hiding of unversioned files
pub const HIDE_UNKNOWN: KeyCode = KeyCode::Char('_');

/// Toggle hiding of unmodified files
pub const HIDE_UNMODIFIED: KeyCode = KeyCode::Char('.');

/// Toggle sorting of the listing
pub const TOGGLE_SORT: KeyCode = KeyCode::Char('S');

/// Toggle full paths / indented names
pub const TOGGLE_FULL_PATHS: KeyCode = KeyCode::Char('f');

// =============================================================================
// svn commands
// =============================================================================

pub const REFRESH: KeyCode = KeyCode::Char('r');
pub const UPDATE: KeyCode = KeyCode::Char('U');
pub const COMMIT: KeyCode = KeyCode::Char('C');
pub const ADD: KeyCode = KeyCode::Char('a');
pub const REMOVE: KeyCode = KeyCode::Char('d');
pub const DELETE_UNVERSIONED: KeyCode = KeyCode::Char('X');
pub const REVERT: KeyCode = KeyCode::Char('R');
pub const RESOLVED: KeyCode = KeyCode::Char('v');
pub const LOCK: KeyCode = KeyCode::Char('L');
pub const UNLOCK: KeyCode = KeyCode::Char('N');
pub const INFO: KeyCode = KeyCode::Char('I');
pub const PROPSET: KeyCode = KeyCode::Char('P');
pub const CLEANUP: KeyCode = KeyCode::Char('c');

/// Kill the running svn process
pub const KILL: KeyCode = KeyCode::Char('K');

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

const fn entry(key: &'static str, description: &'static str) -> KeyBindEntry {
    KeyBindEntry { key, description }
}

pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    entry("q", "Quit / close help"),
    entry("?", "Help"),
    entry("Ctrl+l", "Refresh"),
    entry("Ctrl+c", "Quit immediately"),
];

pub const NAV_KEYS: &[KeyBindEntry] = &[
    entry("j/k", "Move down/up"),
    entry("g/G", "Go to top/bottom"),
    entry("PgDn/PgUp", "Page down/up"),
];

pub const MARK_KEYS: &[KeyBindEntry] = &[
    entry("m", "Mark and move down"),
    entry("u", "Unmark and move down"),
    entry("M", "Unmark all"),
    entry("e", "Elide entry"),
    entry("E", "Elide directory contents"),
    entry("_", "Hide unversioned files"),
    entry(".", "Hide unmodified files"),
    entry("S", "Toggle sorting"),
    entry("f", "Toggle full paths"),
];

pub const COMMAND_KEYS: &[KeyBindEntry] = &[
    entry("r", "svn status"),
    entry("U", "svn update"),
    entry("C", "svn commit (marked or cursor)"),
    entry("a", "svn add"),
    entry("d", "svn remove"),
    entry("X", "Delete unversioned files"),
    entry("R", "svn revert"),
    entry("v", "svn resolved"),
    entry("L", "svn lock"),
    entry("N", "svn unlock"),
    entry("P", "svn propset NAME VALUE"),
    entry("I", "svn info"),
    entry("c", "svn cleanup"),
    entry("K", "Kill running svn"),
];

pub const INPUT_KEYS: &[KeyBindEntry] = &[
    entry("Ctrl+s", "Submit commit message"),
    entry("Enter", "Submit single-line input"),
    entry("Esc", "Cancel input"),
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

const fn hint(key: &'static str, label: &'static str, color: Color) -> KeyHint {
    KeyHint { key, label, color }
}

pub const HINT_HELP: KeyHint = hint("?", "Help", Color::Cyan);
pub const HINT_MARK: KeyHint = hint("m/u", "Mark", Color::LightRed);
pub const HINT_REFRESH: KeyHint = hint("r", "Status", Color::Blue);
pub const HINT_UPDATE: KeyHint = hint("U", "Update", Color::Blue);
pub const HINT_COMMIT: KeyHint = hint("C", "Commit", Color::Yellow);
pub const HINT_ADD: KeyHint = hint("a", "Add", Color::Green);
pub const HINT_REVERT: KeyHint = hint("R", "Revert", Color::Red);
pub const HINT_RESOLVED: KeyHint = hint("v", "Resolved", Color::Magenta);
pub const HINT_ELIDE: KeyHint = hint("e/E", "Elide", Color::Cyan);
pub const HINT_QUIT: KeyHint = hint("q", "Quit", Color::Red);
pub const HINT_KILL: KeyHint = hint("K", "Kill", Color::Red);
pub const HINT_SAVE: KeyHint = hint("^S", "Commit", Color::Green);
pub const HINT_SUBMIT: KeyHint = hint("Enter", "Confirm", Color::Green);
pub const HINT_CANCEL: KeyHint = hint("Esc", "Cancel", Color::Red);
pub const HINT_YES: KeyHint = hint("y/Enter", "Yes", Color::Green);
pub const HINT_NO: KeyHint = hint("n/Esc", "No", Color::Red);
pub const HINT_ANSWER: KeyHint = hint("Enter", "Answer", Color::Green);

/// Dialog kind for hint selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogHintKind {
    /// y/n confirmation
    Confirm,
    /// Text answer for svn
    Prompt,
}

/// Context for dynamic hint selection
#[derive(Default)]
pub struct HintContext {
    /// Active dialog kind (overrides view hints)
    pub dialog: Option<DialogHintKind>,
    /// An svn process is running
    pub busy: bool,
    /// Entry at cursor is conflicted
    pub has_conflict: bool,
}

/// Get the appropriate hints for the current context.
///
/// Priority: dialog > input mode > busy > normal.
pub fn current_hints(input_mode: StatusInputMode, ctx: &HintContext) -> Vec<KeyHint> {
    if let Some(kind) = ctx.dialog {
        return match kind {
            DialogHintKind::Confirm => vec![HINT_YES, HINT_NO],
            DialogHintKind::Prompt => vec![HINT_ANSWER, HINT_CANCEL],
        };
    }
    match input_mode {
        StatusInputMode::CommitInput => return vec![HINT_SAVE, HINT_CANCEL],
        StatusInputMode::PropsetInput => return vec![HINT_SUBMIT, HINT_CANCEL],
        StatusInputMode::Normal => {}
    }
    if ctx.busy {
        return vec![HINT_KILL, HINT_HELP, HINT_QUIT];
    }

    let mut h = vec![
        HINT_HELP,
        HINT_MARK,
        HINT_REFRESH,
        HINT_UPDATE,
        HINT_COMMIT,
        HINT_ADD,
        HINT_REVERT,
    ];
    if ctx.has_conflict {
        h.push(HINT_RESOLVED);
    }
    h.extend([HINT_ELIDE, HINT_QUIT]);
    h
}
