//! Authoritative entry list and its reconciliation with parsed svn output

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use super::action::{ActionList, PatchAction};
use super::entry::{Elide, Entry, ExtraAction, UiState, ancestors, compare_paths};
use super::status::{RepoLock, StatusListing, codes};

/// Display widths derived from the current entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnWidths {
    /// 0 when no entry has a local revision
    pub local_revision: usize,
    /// 0 when no entry has a last-changed revision
    pub last_changed_revision: usize,
    pub author: usize,
}

/// Outcome of [`EntryModel::apply_actions`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatchReport {
    /// Actions that found their entry
    pub applied: usize,
    /// Paths with no matching entry
    pub missed: Vec<String>,
}

/// Working-copy entries keyed by path
#[derive(Debug, Clone)]
pub struct EntryModel {
    entries: Vec<Entry>,
    positions: HashMap<String, usize>,
    widths: ColumnWidths,
    head_revision: Option<i64>,
    sort_enabled: bool,
    /// UI state for paths that have not been listed yet
    pending_ui_state: HashMap<String, UiState>,
}

impl Default for EntryModel {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryModel {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
            widths: ColumnWidths::default(),
            head_revision: None,
            sort_enabled: true,
            pending_ui_state: HashMap::new(),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&Entry> {
        self.positions.get(path).map(|&i| &self.entries[i])
    }

    /// Marked entries in model order
    pub fn marked(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.ui_state.marked)
    }

    pub fn widths(&self) -> ColumnWidths {
        self.widths
    }

    /// Latest repository revision seen (`Status against revision`, commit, update)
    pub fn head_revision(&self) -> Option<i64> {
        self.head_revision
    }

    pub fn sort_enabled(&self) -> bool {
        self.sort_enabled
    }

    /// Sorting large listings can be switched off; takes effect on the next listing
    pub fn set_sort_enabled(&mut self, enabled: bool) {
        self.sort_enabled = enabled;
    }

    /// UI state to attach when these paths first appear (restored elide list)
    pub fn seed_ui_state(&mut self, states: impl IntoIterator<Item = (String, UiState)>) {
        self.pending_ui_state.extend(states);
    }

    /// Rebuild from a full status listing
    ///
    /// UI state is carried over by path. Listings without revision columns omit
    /// unmodified directories, so missing ancestors are synthesized.
    pub fn replace_all(&mut self, listing: StatusListing) {
        let mut saved: HashMap<String, UiState> = std::mem::take(&mut self.pending_ui_state);
        saved.extend(
            self.entries
                .iter()
                .filter(|e| !e.ui_state.is_default())
                .map(|e| (e.path.clone(), e.ui_state)),
        );

        let mut entries: Vec<Entry> = listing.records.into_iter().map(Entry::from).collect();
        let present: HashSet<String> = entries.iter().map(|e| e.path.clone()).collect();
        let parents: HashSet<String> = entries
            .iter()
            .flat_map(|e| ancestors(&e.path).map(str::to_string))
            .collect();

        if !listing.verbose {
            let mut missing: Vec<&String> = parents.difference(&present).collect();
            missing.sort();
            log::debug!("synthesizing {} directory entries", missing.len());
            entries.extend(missing.into_iter().map(|p| Entry::placeholder_dir(p.as_str())));
        }

        for entry in &mut entries {
            if parents.contains(&entry.path) {
                entry.is_dir = true;
            }
            if let Some(ui_state) = saved.remove(&entry.path) {
                entry.ui_state = ui_state;
            }
        }

        if self.sort_enabled {
            entries.sort_by(|a, b| compare_paths(&a.path, &b.path));
        }

        // Seeded state for paths still unlisted waits for a later listing
        self.pending_ui_state = saved
            .into_iter()
            .filter(|(path, _)| !present.contains(path) && self.positions.get(path).is_none())
            .collect();

        self.entries = entries;
        if listing.head_revision.is_some() {
            self.head_revision = listing.head_revision;
        }
        self.reindex();
    }

    /// Patch entries in place after a narrow command
    ///
    /// Tags from the previous batch are cleared first. An action whose path is
    /// not modeled is logged and skipped.
    pub fn apply_actions(&mut self, list: &ActionList) -> PatchReport {
        for entry in &mut self.entries {
            entry.extra_action = None;
        }

        let mut report = PatchReport::default();
        for (path, action) in &list.actions {
            let Some(&index) = self.positions.get(path.as_str()) else {
                log::debug!("no entry for {} ({})", path, action.label());
                report.missed.push(path.clone());
                continue;
            };
            Self::patch(&mut self.entries[index], *action, list.new_revision);
            report.applied += 1;
        }

        if let Some(revision) = list.new_revision {
            self.head_revision = Some(self.head_revision.map_or(revision, |h| h.max(revision)));
        }
        self.recompute_widths();
        report
    }

    fn patch(entry: &mut Entry, action: PatchAction, revision: Option<i64>) {
        let status = &mut entry.status;
        let stamp = |rev: &mut i64| {
            if let Some(r) = revision {
                *rev = r;
            }
        };

        let extra = match action {
            PatchAction::Committed => {
                status.file_status = codes::UNMODIFIED;
                status.prop_status = codes::UNMODIFIED;
                status.with_history = false;
                if status.repo_lock == Some(RepoLock::HeldHere) {
                    status.repo_lock = None;
                }
                stamp(&mut status.local_revision);
                stamp(&mut status.last_changed_revision);
                ExtraAction::Committed
            }
            PatchAction::CommittedDeletion => {
                status.file_status = codes::DELETED;
                ExtraAction::Committed
            }
            PatchAction::Updated => {
                if !matches!(status.file_status, codes::MODIFIED | codes::CONFLICTED) {
                    status.file_status = codes::UNMODIFIED;
                }
                status.remote_update = false;
                stamp(&mut status.local_revision);
                ExtraAction::Updated
            }
            PatchAction::Merged => {
                status.file_status = codes::MODIFIED;
                status.remote_update = false;
                stamp(&mut status.local_revision);
                ExtraAction::Merged
            }
            PatchAction::PropertyUpdated => {
                status.remote_update = false;
                stamp(&mut status.local_revision);
                ExtraAction::Updated
            }
            PatchAction::Conflicted => {
                status.file_status = codes::CONFLICTED;
                status.remote_update = false;
                stamp(&mut status.local_revision);
                ExtraAction::Conflicted
            }
            PatchAction::PropertyConflicted => {
                status.prop_status = codes::CONFLICTED;
                status.remote_update = false;
                ExtraAction::Conflicted
            }
            PatchAction::AddedWc => {
                status.file_status = codes::ADDED;
                status.local_revision = 0;
                status.last_changed_revision = -1;
                status.author.clear();
                ExtraAction::Added
            }
            PatchAction::RemovedWc => {
                status.file_status = codes::DELETED;
                ExtraAction::Removed
            }
            PatchAction::PropertyChanged => {
                if status.file_status != codes::ADDED {
                    status.prop_status = codes::MODIFIED;
                }
                ExtraAction::PropertyChanged
            }
            PatchAction::Reverted => {
                if status.file_status == codes::ADDED {
                    status.file_status = codes::UNKNOWN;
                    status.local_revision = -1;
                } else {
                    status.file_status = codes::UNMODIFIED;
                }
                status.prop_status = codes::UNMODIFIED;
                status.with_history = false;
                status.tree_conflict = false;
                ExtraAction::Reverted
            }
            PatchAction::Resolved => {
                if status.file_status == codes::CONFLICTED {
                    status.file_status = codes::MODIFIED;
                }
                if status.prop_status == codes::CONFLICTED {
                    status.prop_status = codes::MODIFIED;
                }
                status.tree_conflict = false;
                ExtraAction::Resolved
            }
            PatchAction::Locked => {
                status.repo_lock = Some(RepoLock::HeldHere);
                ExtraAction::Locked
            }
            PatchAction::Unlocked => {
                status.repo_lock = None;
                ExtraAction::Unlocked
            }
        };
        entry.extra_action = Some(extra);
    }

    /// Drop an entry and everything below it (forced delete of an unversioned path)
    pub fn remove(&mut self, path: &str) -> Option<Entry> {
        let index = *self.positions.get(path)?;
        let removed = self.entries.remove(index);
        let prefix = format!("{path}/");
        self.entries.retain(|e| !e.path.starts_with(&prefix));
        self.reindex();
        Some(removed)
    }

    /// Returns false when the path is not modeled
    pub fn set_marked(&mut self, path: &str, marked: bool) -> bool {
        self.with_entry(path, |e| e.ui_state.marked = marked)
    }

    pub fn toggle_marked(&mut self, path: &str) -> bool {
        self.with_entry(path, |e| e.ui_state.marked = !e.ui_state.marked)
    }

    /// Returns the number of entries that were marked
    pub fn unmark_all(&mut self) -> usize {
        let mut count = 0;
        for entry in self.entries.iter_mut().filter(|e| e.ui_state.marked) {
            entry.ui_state.marked = false;
            count += 1;
        }
        count
    }

    pub fn set_elide(&mut self, path: &str, elide: Elide) -> bool {
        self.with_entry(path, |e| e.ui_state.elide = elide)
    }

    /// Elided paths, for persisting
    pub fn elide_list(&self) -> Vec<(String, Elide)> {
        let listed = self
            .entries
            .iter()
            .filter(|e| e.ui_state.elide != Elide::None)
            .map(|e| (e.path.clone(), e.ui_state.elide));
        let pending = self
            .pending_ui_state
            .iter()
            .filter(|(_, s)| s.elide != Elide::None)
            .map(|(p, s)| (p.clone(), s.elide));
        let mut list: Vec<_> = listed.chain(pending).collect();
        list.sort_by(|a, b| compare_paths(&a.0, &b.0));
        list
    }

    /// Absolute location of an entry under the working-copy root
    pub fn full_path(root: &Path, entry: &Entry) -> PathBuf {
        if entry.path == "." {
            root.to_path_buf()
        } else {
            root.join(&entry.path)
        }
    }

    fn with_entry(&mut self, path: &str, f: impl FnOnce(&mut Entry)) -> bool {
        match self.positions.get(path) {
            Some(&index) => {
                f(&mut self.entries[index]);
                true
            }
            None => false,
        }
    }

    fn reindex(&mut self) {
        self.positions = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.path.clone(), i))
            .collect();
        self.recompute_widths();
    }

    fn recompute_widths(&mut self) {
        fn digits(rev: i64) -> usize {
            if rev < 0 { 0 } else { rev.to_string().len() }
        }

        self.widths = self
            .entries
            .iter()
            .fold(ColumnWidths::default(), |w, e| ColumnWidths {
                local_revision: w.local_revision.max(digits(e.status.local_revision)),
                last_changed_revision: w
                    .last_changed_revision
                    .max(digits(e.status.last_changed_revision)),
                author: w.author.max(e.status.author.chars().count()),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::status::{EntryStatus, StatusRecord};

    fn record(path: &str, file_status: char, rev: i64, author: &str) -> StatusRecord {
        StatusRecord {
            path: path.to_string(),
            status: EntryStatus {
                file_status,
                local_revision: rev,
                last_changed_revision: rev,
                author: author.to_string(),
                ..EntryStatus::default()
            },
        }
    }

    fn listing(records: Vec<StatusRecord>, verbose: bool) -> StatusListing {
        StatusListing {
            records,
            head_revision: None,
            verbose,
        }
    }

    fn model_with(records: Vec<StatusRecord>) -> EntryModel {
        let mut model = EntryModel::new();
        model.replace_all(listing(records, true));
        model
    }

    fn paths(model: &EntryModel) -> Vec<&str> {
        model.entries().iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn test_replace_all_sorts_directories_next_to_content() {
        let model = model_with(vec![
            record("src/ui.rs", ' ', 5, "bob"),
            record("src.txt", ' ', 5, "bob"),
            record("src", ' ', 5, "bob"),
            record("README", 'M', 5, "alice"),
        ]);
        assert_eq!(paths(&model), vec!["README", "src.txt", "src", "src/ui.rs"]);
        assert!(model.get("src").unwrap().is_dir);
        assert!(!model.get("src.txt").unwrap().is_dir);
    }

    #[test]
    fn test_replace_all_without_sort_keeps_listing_order() {
        let mut model = EntryModel::new();
        model.set_sort_enabled(false);
        model.replace_all(listing(
            vec![record("b", ' ', 1, ""), record("a", ' ', 1, "")],
            true,
        ));
        assert_eq!(paths(&model), vec!["b", "a"]);
    }

    #[test]
    fn test_non_verbose_listing_synthesizes_ancestors() {
        let mut model = EntryModel::new();
        model.replace_all(listing(
            vec![record("src/ui/view.rs", 'M', -1, ""), record("doc/a.md", '?', -1, "")],
            false,
        ));
        assert_eq!(
            paths(&model),
            vec!["doc", "doc/a.md", "src", "src/ui", "src/ui/view.rs"]
        );
        let ui = model.get("src/ui").unwrap();
        assert!(ui.is_dir);
        assert!(ui.status.is_unmodified());
    }

    #[test]
    fn test_marked_survives_refresh_and_vanishes_with_path() {
        let mut model = model_with(vec![record("a.c", 'M', 3, "x"), record("b.c", 'M', 3, "x")]);
        assert!(model.set_marked("a.c", true));
        assert!(model.set_elide("b.c", Elide::SelfOnly));

        model.replace_all(listing(
            vec![record("a.c", ' ', 4, "y"), record("b.c", ' ', 4, "y")],
            true,
        ));
        assert!(model.get("a.c").unwrap().ui_state.marked);
        assert_eq!(model.get("b.c").unwrap().ui_state.elide, Elide::SelfOnly);
        assert_eq!(model.get("a.c").unwrap().status.local_revision, 4);

        model.replace_all(listing(vec![record("b.c", ' ', 4, "y")], true));
        assert!(model.get("a.c").is_none());
        assert_eq!(model.marked().count(), 0);

        // The path coming back does not resurrect the old mark
        model.replace_all(listing(
            vec![record("a.c", ' ', 4, "y"), record("b.c", ' ', 4, "y")],
            true,
        ));
        assert!(!model.get("a.c").unwrap().ui_state.marked);
    }

    #[test]
    fn test_synthesized_directory_inherits_ui_state() {
        let mut model = EntryModel::new();
        model.replace_all(listing(vec![record("src/a.c", 'M', -1, "")], false));
        model.set_elide("src", Elide::Subtree);

        model.replace_all(listing(vec![record("src/b.c", 'M', -1, "")], false));
        assert_eq!(model.get("src").unwrap().ui_state.elide, Elide::Subtree);
    }

    #[test]
    fn test_seeded_ui_state_waits_for_path() {
        let mut model = EntryModel::new();
        model.seed_ui_state([(
            "lib".to_string(),
            UiState {
                marked: false,
                elide: Elide::Subtree,
            },
        )]);

        model.replace_all(listing(vec![record("a.c", ' ', 1, "")], true));
        assert_eq!(model.elide_list(), vec![("lib".to_string(), Elide::Subtree)]);

        model.replace_all(listing(
            vec![record("a.c", ' ', 1, ""), record("lib", ' ', 1, "")],
            true,
        ));
        assert_eq!(model.get("lib").unwrap().ui_state.elide, Elide::Subtree);
    }

    #[test]
    fn test_apply_conflict_sets_conflict_code() {
        let mut model = model_with(vec![record("src/bar.c", ' ', 10, "bob")]);
        let mut list = ActionList::default();
        list.push("src/bar.c", PatchAction::Conflicted);

        let report = model.apply_actions(&list);
        assert_eq!(report.applied, 1);
        let entry = model.get("src/bar.c").unwrap();
        assert_eq!(entry.status.file_status, codes::CONFLICTED);
        assert_eq!(entry.extra_action, Some(ExtraAction::Conflicted));
    }

    #[test]
    fn test_apply_commit_stamps_revision_and_keeps_paths() {
        let mut model = model_with(vec![
            record("a.c", 'M', 10, "bob"),
            record("b.c", 'A', 0, ""),
            record("c.c", ' ', 10, "bob"),
        ]);
        let mut list = ActionList {
            new_revision: Some(101),
            ..ActionList::default()
        };
        list.push("a.c", PatchAction::Committed);
        list.push("b.c", PatchAction::Committed);

        model.apply_actions(&list);
        assert_eq!(model.len(), 3);
        for path in ["a.c", "b.c"] {
            let entry = model.get(path).unwrap();
            assert!(entry.status.is_unmodified());
            assert_eq!(entry.status.local_revision, 101);
            assert_eq!(entry.extra_action, Some(ExtraAction::Committed));
        }
        assert_eq!(model.get("c.c").unwrap().extra_action, None);
        assert_eq!(model.head_revision(), Some(101));
        assert_eq!(model.widths().local_revision, 3);
    }

    #[test]
    fn test_apply_miss_is_reported_not_fatal() {
        let mut model = model_with(vec![record("a.c", 'M', 1, "")]);
        let mut list = ActionList::default();
        list.push("ghost.c", PatchAction::Updated);
        list.push("a.c", PatchAction::Reverted);

        let report = model.apply_actions(&list);
        assert_eq!(report.applied, 1);
        assert_eq!(report.missed, vec!["ghost.c".to_string()]);
        assert!(model.get("a.c").unwrap().status.is_unmodified());
    }

    #[test]
    fn test_next_patch_clears_previous_tags() {
        let mut model = model_with(vec![record("a.c", ' ', 1, ""), record("b.c", ' ', 1, "")]);
        let mut first = ActionList::default();
        first.push("a.c", PatchAction::Locked);
        model.apply_actions(&first);

        let mut second = ActionList::default();
        second.push("b.c", PatchAction::PropertyChanged);
        model.apply_actions(&second);

        assert_eq!(model.get("a.c").unwrap().extra_action, None);
        assert_eq!(
            model.get("a.c").unwrap().status.repo_lock,
            Some(RepoLock::HeldHere)
        );
        assert_eq!(model.get("b.c").unwrap().status.prop_status, codes::MODIFIED);
    }

    #[test]
    fn test_added_then_reverted_becomes_unknown() {
        let mut model = model_with(vec![record("new.c", '?', -1, "")]);
        let mut add = ActionList::default();
        add.push("new.c", PatchAction::AddedWc);
        model.apply_actions(&add);
        assert_eq!(model.get("new.c").unwrap().status.file_status, codes::ADDED);
        assert_eq!(model.get("new.c").unwrap().status.local_revision, 0);

        let mut revert = ActionList::default();
        revert.push("new.c", PatchAction::Reverted);
        model.apply_actions(&revert);
        assert!(model.get("new.c").unwrap().status.is_unknown());
    }

    #[test]
    fn test_remove_drops_subtree() {
        let mut model = model_with(vec![
            record("junk", '?', -1, ""),
            record("junk/a", '?', -1, ""),
            record("junk.txt", '?', -1, ""),
        ]);
        let removed = model.remove("junk").unwrap();
        assert_eq!(removed.path, "junk");
        assert_eq!(paths(&model), vec!["junk.txt"]);
        assert!(model.remove("junk").is_none());
    }

    #[test]
    fn test_widths_ignore_unknown_revisions() {
        let model = model_with(vec![
            record("a", '?', -1, ""),
            record("b", ' ', 12345, "carol"),
        ]);
        assert_eq!(
            model.widths(),
            ColumnWidths {
                local_revision: 5,
                last_changed_revision: 5,
                author: 5,
            }
        );
        let empty = model_with(vec![record("a", '?', -1, "")]);
        assert_eq!(empty.widths(), ColumnWidths::default());
    }

    #[test]
    fn test_unmark_all_and_full_path() {
        let mut model = model_with(vec![record("a", ' ', 1, ""), record(".", ' ', 1, "")]);
        model.toggle_marked("a");
        model.toggle_marked(".");
        assert_eq!(model.unmark_all(), 2);
        assert_eq!(model.marked().count(), 0);

        let root = Path::new("/wc");
        assert_eq!(
            EntryModel::full_path(root, model.get(".").unwrap()),
            PathBuf::from("/wc")
        );
        assert_eq!(
            EntryModel::full_path(root, model.get("a").unwrap()),
            PathBuf::from("/wc/a")
        );
    }
}
