//! Per-path results of narrow svn commands

/// What a command did to one path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchAction {
    /// Modification committed (`Sending`, `Adding`, `Replacing`)
    Committed,
    /// Deletion committed (`Deleting`)
    CommittedDeletion,
    /// Content or existence changed by update (`U`, `A`, `E`, `R`)
    Updated,
    /// Remote changes merged into local modifications (`G`)
    Merged,
    /// Properties changed by update (` U`, ` G`)
    PropertyUpdated,
    /// Text or tree conflict (`C`)
    Conflicted,
    /// Property conflict (` C`)
    PropertyConflicted,
    /// Scheduled for addition (`svn add`)
    AddedWc,
    /// Scheduled for deletion (`svn remove`)
    RemovedWc,
    /// Property set or deleted locally (`svn propset`)
    PropertyChanged,
    Reverted,
    Resolved,
    Locked,
    Unlocked,
}

impl PatchAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Committed => "committed",
            Self::CommittedDeletion => "deleted",
            Self::Updated => "updated",
            Self::Merged => "merged",
            Self::PropertyUpdated => "property updated",
            Self::Conflicted => "conflicted",
            Self::PropertyConflicted => "property conflicted",
            Self::AddedWc => "added-wc",
            Self::RemovedWc => "removed-wc",
            Self::PropertyChanged => "property changed",
            Self::Reverted => "reverted",
            Self::Resolved => "resolved",
            Self::Locked => "locked",
            Self::Unlocked => "unlocked",
        }
    }
}

/// Parsed output of a narrow command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionList {
    /// In output order; a path may appear more than once
    pub actions: Vec<(String, PatchAction)>,
    /// `Committed revision N.` / `Updated to revision N.`
    ///
    /// `None` for `At revision N.`, which means nothing changed.
    pub new_revision: Option<i64>,
}

impl ActionList {
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn push(&mut self, path: impl Into<String>, action: PatchAction) {
        self.actions.push((path.into(), action));
    }
}
