//! Tool-reported status of a working-copy path

/// Single-character status codes as printed by `svn status`
pub mod codes {
    pub const UNMODIFIED: char = ' ';
    pub const ADDED: char = 'A';
    pub const CONFLICTED: char = 'C';
    pub const DELETED: char = 'D';
    pub const IGNORED: char = 'I';
    pub const MODIFIED: char = 'M';
    pub const REPLACED: char = 'R';
    pub const EXTERNAL: char = 'X';
    pub const UNKNOWN: char = '?';
    pub const MISSING: char = '!';
    pub const OBSTRUCTED: char = '~';

    /// Valid codes of the file-status column
    pub const FILE: &[char] = &[
        UNMODIFIED, ADDED, CONFLICTED, DELETED, IGNORED, MODIFIED, REPLACED, EXTERNAL, UNKNOWN,
        MISSING, OBSTRUCTED,
    ];
    /// Valid codes of the property-status column
    pub const PROP: &[char] = &[UNMODIFIED, CONFLICTED, MODIFIED];

    pub const WC_LOCKED: char = 'L';
    pub const WITH_HISTORY: char = '+';
    pub const SWITCHED: char = 'S';
    /// File external, shares the switched column
    pub const FILE_EXTERNAL: char = 'X';
    pub const TREE_CONFLICT: char = 'C';
    pub const REMOTE_UPDATE: char = '*';
}

/// Repository lock state (sixth status column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoLock {
    /// `K`: lock token held by this working copy
    HeldHere,
    /// `O`: locked by someone else
    HeldByOther,
    /// `T`: our lock was stolen
    Stolen,
    /// `B`: our lock was broken
    Broken,
}

impl RepoLock {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'K' => Some(Self::HeldHere),
            'O' => Some(Self::HeldByOther),
            'T' => Some(Self::Stolen),
            'B' => Some(Self::Broken),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Self::HeldHere => 'K',
            Self::HeldByOther => 'O',
            Self::Stolen => 'T',
            Self::Broken => 'B',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HeldHere => "locked",
            Self::HeldByOther => "locked by other",
            Self::Stolen => "lock stolen",
            Self::Broken => "lock broken",
        }
    }
}

/// Everything svn reports about one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStatus {
    pub file_status: char,
    pub prop_status: char,
    /// -1 when unknown
    pub local_revision: i64,
    /// -1 when unknown
    pub last_changed_revision: i64,
    /// Empty when unknown
    pub author: String,
    pub wc_locked: bool,
    /// Scheduled for addition with history
    pub with_history: bool,
    pub switched: bool,
    pub repo_lock: Option<RepoLock>,
    pub tree_conflict: bool,
    /// Newer version available in the repository
    pub remote_update: bool,
    pub changelist: Option<String>,
}

impl Default for EntryStatus {
    fn default() -> Self {
        Self {
            file_status: codes::UNMODIFIED,
            prop_status: codes::UNMODIFIED,
            local_revision: -1,
            last_changed_revision: -1,
            author: String::new(),
            wc_locked: false,
            with_history: false,
            switched: false,
            repo_lock: None,
            tree_conflict: false,
            remote_update: false,
            changelist: None,
        }
    }
}

impl EntryStatus {
    /// Both status axes are unmodified
    pub fn is_unmodified(&self) -> bool {
        self.file_status == codes::UNMODIFIED && self.prop_status == codes::UNMODIFIED
    }

    /// Not under version control
    pub fn is_unknown(&self) -> bool {
        self.file_status == codes::UNKNOWN
    }

    pub fn is_conflicted(&self) -> bool {
        self.file_status == codes::CONFLICTED
            || self.prop_status == codes::CONFLICTED
            || self.tree_conflict
    }
}

/// One data line of `svn status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    pub path: String,
    pub status: EntryStatus,
}

/// Parsed `svn status` output
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusListing {
    pub records: Vec<StatusRecord>,
    /// From `Status against revision: N`
    pub head_revision: Option<i64>,
    /// Output came from a verbose listing (every versioned path present)
    pub verbose: bool,
}
