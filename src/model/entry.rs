//! Working-copy entry model

use serde::{Deserialize, Serialize};

use super::status::{EntryStatus, StatusRecord};

/// Path separator used in svn output
pub const SEPARATOR: char = '/';

/// Collapse state of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Elide {
    #[default]
    None,
    /// Hide this row only
    SelfOnly,
    /// Hide every descendant
    Subtree,
}

/// User-owned annotation, independent of anything svn reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub marked: bool,
    pub elide: Elide,
}

impl UiState {
    /// Nothing worth remembering
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Transient tag describing what the last narrow command did to an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraAction {
    Committed,
    Updated,
    Merged,
    Conflicted,
    Added,
    Removed,
    PropertyChanged,
    Reverted,
    Resolved,
    Locked,
    Unlocked,
}

impl ExtraAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Committed => "committed",
            Self::Updated => "updated",
            Self::Merged => "merged",
            Self::Conflicted => "conflicted",
            Self::Added => "added",
            Self::Removed => "removed",
            Self::PropertyChanged => "property changed",
            Self::Reverted => "reverted",
            Self::Resolved => "resolved",
            Self::Locked => "locked",
            Self::Unlocked => "unlocked",
        }
    }
}

/// One modeled row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Relative to the working-copy root, `/`-separated
    pub path: String,
    pub status: EntryStatus,
    /// Directory (known ancestor of another entry, or synthesized)
    pub is_dir: bool,
    pub extra_action: Option<ExtraAction>,
    pub ui_state: UiState,
}

impl Entry {
    pub fn new(path: impl Into<String>, status: EntryStatus) -> Self {
        Self {
            path: path.into(),
            status,
            is_dir: false,
            extra_action: None,
            ui_state: UiState::default(),
        }
    }

    /// Directory row standing in for an ancestor svn did not list
    pub fn placeholder_dir(path: impl Into<String>) -> Self {
        Self {
            is_dir: true,
            ..Self::new(path, EntryStatus::default())
        }
    }

    /// Last path component
    pub fn name(&self) -> &str {
        self.path
            .rsplit_once(SEPARATOR)
            .map_or(self.path.as_str(), |(_, name)| name)
    }

    /// Number of ancestors between the root and this entry
    pub fn depth(&self) -> usize {
        if self.path == "." {
            return 0;
        }
        self.path.matches(SEPARATOR).count()
    }
}

impl From<StatusRecord> for Entry {
    fn from(record: StatusRecord) -> Self {
        Self::new(record.path, record.status)
    }
}

/// Proper ancestors of a path, nearest first
///
/// `"a/b/c"` yields `"a/b"` then `"a"`.
pub fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    let mut rest = path;
    std::iter::from_fn(move || {
        let (parent, _) = rest.rsplit_once(SEPARATOR)?;
        rest = parent;
        Some(parent)
    })
    .filter(|p| !p.is_empty())
}

/// Canonical ordering: lexicographic with a trailing separator appended
///
/// Keeps a directory next to its own content: `a.txt` < `a` < `a/b`.
pub fn compare_paths(a: &str, b: &str) -> std::cmp::Ordering {
    a.chars()
        .chain(std::iter::once(SEPARATOR))
        .cmp(b.chars().chain(std::iter::once(SEPARATOR)))
}
