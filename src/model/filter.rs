//! Row visibility rules

use std::collections::HashSet;
use std::fmt;

use super::entry::{Elide, Entry, ancestors};

/// Why a row is not drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HideReason {
    Unknown,
    Unmodified,
    Predicate,
    Elided,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden(HideReason),
}

impl Visibility {
    pub fn is_shown(&self) -> bool {
        *self == Self::Shown
    }
}

type Predicate = Box<dyn Fn(&Entry) -> bool>;

/// User-selected hide rules
#[derive(Default)]
pub struct Filters {
    pub hide_unknown: bool,
    pub hide_unmodified: bool,
    /// Returns true for entries to hide
    predicate: Option<Predicate>,
}

impl fmt::Debug for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filters")
            .field("hide_unknown", &self.hide_unknown)
            .field("hide_unmodified", &self.hide_unmodified)
            .field("predicate", &self.predicate.is_some())
            .finish()
    }
}

impl Filters {
    pub fn new(hide_unknown: bool, hide_unmodified: bool) -> Self {
        Self {
            hide_unknown,
            hide_unmodified,
            predicate: None,
        }
    }

    pub fn set_predicate(&mut self, predicate: impl Fn(&Entry) -> bool + 'static) {
        self.predicate = Some(Box::new(predicate));
    }

    pub fn clear_predicate(&mut self) {
        self.predicate = None;
    }

    pub fn has_predicate(&self) -> bool {
        self.predicate.is_some()
    }

    /// Decide whether `entry` is drawn
    ///
    /// A pending remote update or a fresh command result always shows the row.
    pub fn visibility(&self, entry: &Entry, elided: &ElidedDirs) -> Visibility {
        if entry.status.remote_update || entry.extra_action.is_some() {
            return Visibility::Shown;
        }
        if self.hide_unknown && entry.status.is_unknown() {
            return Visibility::Hidden(HideReason::Unknown);
        }
        if self.hide_unmodified && entry.status.is_unmodified() {
            return Visibility::Hidden(HideReason::Unmodified);
        }
        if let Some(predicate) = &self.predicate
            && predicate(entry)
        {
            return Visibility::Hidden(HideReason::Predicate);
        }
        if entry.ui_state.elide == Elide::SelfOnly || elided.covers(&entry.path) {
            return Visibility::Hidden(HideReason::Elided);
        }
        Visibility::Shown
    }
}

/// Directories whose descendants are elided
#[derive(Debug, Clone, Default)]
pub struct ElidedDirs(HashSet<String>);

impl ElidedDirs {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Self {
        Self(
            entries
                .into_iter()
                .filter(|e| e.ui_state.elide == Elide::Subtree)
                .map(|e| e.path.clone())
                .collect(),
        )
    }

    /// Is `path` strictly inside an elided directory?
    pub fn covers(&self, path: &str) -> bool {
        !self.0.is_empty() && ancestors(path).any(|a| self.0.contains(a))
    }
}
