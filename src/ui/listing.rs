//! Status listing projection
//!
//! [`render`] turns the entry model into display rows. It is a pure function of the
//! model and the filters; redraws are full, and the cursor survives them through a
//! [`CursorSnapshot`] taken before and resolved after.

use std::collections::HashMap;

use crate::model::{
    Elide, ElidedDirs, Entry, EntryModel, ExtraAction, Filters, HideReason, Visibility,
    entry::SEPARATOR,
};
use crate::ui::symbols::markers;

/// Presentation switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Show the whole relative path instead of an indented name
    pub full_paths: bool,
}

/// One visible row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub path: String,
    pub text: String,
    /// Character offset of the name within `text`
    pub name_column: usize,
    pub file_status: char,
    pub prop_status: char,
    pub marked: bool,
    pub conflicted: bool,
    pub remote_update: bool,
    pub extra_action: Option<ExtraAction>,
    pub is_dir: bool,
}

/// Entries left out of the listing, by reason
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HiddenCounts {
    pub unknown: usize,
    pub unmodified: usize,
    pub predicate: usize,
    pub elided: usize,
}

impl HiddenCounts {
    pub fn total(&self) -> usize {
        self.unknown + self.unmodified + self.predicate + self.elided
    }

    fn count(&mut self, reason: HideReason) {
        match reason {
            HideReason::Unknown => self.unknown += 1,
            HideReason::Unmodified => self.unmodified += 1,
            HideReason::Predicate => self.predicate += 1,
            HideReason::Elided => self.elided += 1,
        }
    }
}

/// Rendered rows plus a path index
#[derive(Debug, Clone, Default)]
pub struct Listing {
    rows: Vec<Row>,
    index: HashMap<String, usize>,
    hidden: HiddenCounts,
    head_revision: Option<i64>,
}

impl Listing {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row index of a visible path
    pub fn position(&self, path: &str) -> Option<usize> {
        self.index.get(path).copied()
    }

    pub fn hidden(&self) -> HiddenCounts {
        self.hidden
    }

    /// Summary line, e.g. `Head revision 981 | hidden: 2 unknown, 10 unmodified`
    pub fn header(&self) -> String {
        let mut header = match self.head_revision {
            Some(rev) => format!("Head revision {rev}"),
            None => "Head revision unknown".to_string(),
        };

        let parts: Vec<String> = [
            (self.hidden.unknown, "unknown"),
            (self.hidden.unmodified, "unmodified"),
            (self.hidden.predicate, "filtered"),
            (self.hidden.elided, "elided"),
        ]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, label)| format!("{n} {label}"))
        .collect();

        if !parts.is_empty() {
            header.push_str(" | hidden: ");
            header.push_str(&parts.join(", "));
        }
        header
    }
}

/// Project the model onto visible rows
pub fn render(model: &EntryModel, filters: &Filters, options: RenderOptions) -> Listing {
    let elided = ElidedDirs::from_entries(model.entries());
    let mut listing = Listing {
        head_revision: model.head_revision(),
        ..Listing::default()
    };

    for entry in model.entries() {
        match filters.visibility(entry, &elided) {
            Visibility::Hidden(reason) => listing.hidden.count(reason),
            Visibility::Shown => {
                let row = format_row(entry, model, options);
                listing.index.insert(entry.path.clone(), listing.rows.len());
                listing.rows.push(row);
            }
        }
    }

    listing
}

fn format_row(entry: &Entry, model: &EntryModel, options: RenderOptions) -> Row {
    let status = &entry.status;
    let widths = model.widths();
    let flag = |on: bool, code: char| if on { code } else { ' ' };

    let mut text = String::new();
    text.push(flag(entry.ui_state.marked, markers::MARKED));
    text.push(' ');
    text.push(status.file_status);
    text.push(status.prop_status);
    text.push(flag(status.wc_locked, 'L'));
    text.push(flag(status.with_history, '+'));
    text.push(flag(status.switched, 'S'));
    text.push(status.repo_lock.map_or(' ', |l| l.code()));
    text.push(flag(status.tree_conflict, 'C'));
    text.push(' ');
    text.push(flag(status.remote_update, markers::REMOTE_UPDATE));
    text.push(' ');

    for (revision, width) in [
        (status.local_revision, widths.local_revision),
        (status.last_changed_revision, widths.last_changed_revision),
    ] {
        if width > 0 {
            let shown = if revision < 0 {
                String::new()
            } else {
                revision.to_string()
            };
            text.push_str(&format!("{shown:>width$} "));
        }
    }
    if widths.author > 0 {
        text.push_str(&format!("{:<width$} ", status.author, width = widths.author));
    }

    if !options.full_paths {
        text.push_str(&"  ".repeat(entry.depth()));
    }
    let name_column = text.chars().count();
    text.push_str(if options.full_paths {
        entry.path.as_str()
    } else {
        entry.name()
    });
    if entry.is_dir && entry.path != "." {
        text.push(SEPARATOR);
    }

    if let Some(extra) = entry.extra_action {
        text.push_str(&format!(" <{}>", extra.label()));
    }
    if let Some(lock) = status.repo_lock {
        text.push_str(&format!(" [{}]", lock.label()));
    }
    if status.switched {
        text.push_str(" [switched]");
    }
    if status.wc_locked {
        text.push_str(" [wc locked]");
    }
    if let Some(changelist) = &status.changelist {
        text.push_str(&format!(" ({changelist})"));
    }
    if entry.ui_state.elide == Elide::Subtree {
        text.push_str(" (elided)");
    }

    Row {
        path: entry.path.clone(),
        text,
        name_column,
        file_status: status.file_status,
        prop_status: status.prop_status,
        marked: entry.ui_state.marked,
        conflicted: status.is_conflicted(),
        remote_update: status.remote_update,
        extra_action: entry.extra_action,
        is_dir: entry.is_dir,
    }
}

/// Logical cursor position, independent of row numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub path: String,
    /// Character offset within the row
    pub column: usize,
}

/// Resolved cursor after a redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
}

impl CursorSnapshot {
    /// Remember the path under the cursor
    pub fn capture(listing: &Listing, cursor: Cursor) -> Option<Self> {
        listing.row(cursor.row).map(|row| Self {
            path: row.path.clone(),
            column: cursor.column,
        })
    }

    /// Same path in the new listing, or the first row if it is gone
    pub fn restore(snapshot: Option<&Self>, listing: &Listing) -> Cursor {
        if let Some(snapshot) = snapshot
            && let Some(row) = listing.position(&snapshot.path)
        {
            let width = listing.rows[row].text.chars().count();
            return Cursor {
                row,
                column: snapshot.column.min(width.saturating_sub(1)),
            };
        }
        Cursor {
            row: 0,
            column: listing.row(0).map_or(0, |r| r.name_column),
        }
    }
}
