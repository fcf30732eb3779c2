//! Status output parser (svn status)

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use super::super::SvnError;
use super::super::command::CommandKind;
use super::Parser;
use crate::model::{EntryStatus, RepoLock, StatusListing, StatusRecord, status::codes};

/// `<local> <last-changed> <author> <path>` after the status columns (`-v`)
///
/// Example: `42    37  alice       src/foo.c`
static VERBOSE_COLUMNS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([-?]|\d+)\s+([-?]|\d+)\s+(\S+)\s+(.+)$").expect("Invalid verbose status regex")
});

/// `<local> <path>` after the status columns (`-u` without `-v`)
static WORKING_REVISION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([-?]|\d+)\s+(.+)$").expect("Invalid working revision regex")
});

static STATUS_AGAINST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Status against revision:\s+(\d+)\s*$").expect("Invalid status against regex")
});

static EXTERNAL_ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Performing status on external item at '(.+)':?\s*$")
        .expect("Invalid external item regex")
});

static CHANGELIST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^--- Changelist '(.+)':\s*$").expect("Invalid changelist regex")
});

/// `      >   local file edit, incoming file delete upon update`
static TREE_CONFLICT_DETAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+>\s").expect("Invalid tree conflict detail regex"));

/// Number of fixed status columns before the remote-update marker
const STATUS_COLUMNS: usize = 7;

/// Two-state handling of the external item header
///
/// svn announces an external with `Performing status on external item at 'X'` and
/// then lists `X` a second time; that record describes the same entry.
#[derive(Debug, Clone, PartialEq, Eq)]
enum MergeState {
    Normal,
    AwaitingMerge { target: String },
}

impl Parser {
    /// Parse `svn status` output
    pub fn parse_status(
        output: &str,
        verbose: bool,
        show_updates: bool,
    ) -> Result<StatusListing, SvnError> {
        let kind = CommandKind::Status {
            verbose,
            show_updates,
        };
        let mut listing = StatusListing {
            verbose,
            ..StatusListing::default()
        };
        let mut state = MergeState::Normal;
        let mut changelist: Option<String> = None;
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (index, raw) in output.lines().enumerate() {
            let line = raw.trim_end_matches('\r');

            if Self::is_noise(line)
                || Self::is_conflict_summary(line)
                || TREE_CONFLICT_DETAIL_REGEX.is_match(line)
            {
                continue;
            }
            if let Some(caps) = STATUS_AGAINST_REGEX.captures(line) {
                listing.head_revision = caps[1].parse().ok();
                continue;
            }
            if let Some(caps) = EXTERNAL_ITEM_REGEX.captures(line) {
                state = MergeState::AwaitingMerge {
                    target: caps[1].to_string(),
                };
                continue;
            }
            if let Some(caps) = CHANGELIST_REGEX.captures(line) {
                changelist = Some(caps[1].to_string());
                continue;
            }

            let mut record = Self::parse_status_record(line, verbose, show_updates)
                .ok_or_else(|| Self::drift(kind, index, line))?;
            record.status.changelist = changelist.clone();

            match std::mem::replace(&mut state, MergeState::Normal) {
                MergeState::AwaitingMerge { target } if target == record.path => {
                    Self::merge_external(&mut listing.records, &mut positions, record);
                }
                _ => Self::insert_record(&mut listing.records, &mut positions, record),
            }
        }

        Ok(listing)
    }

    /// Parse one data line
    ///
    /// Status columns are consumed one character at a time, up to seven, stopping
    /// early at a digit (short prefixes) or at the remote-update marker.
    pub(super) fn parse_status_record(
        line: &str,
        verbose: bool,
        show_updates: bool,
    ) -> Option<StatusRecord> {
        let mut columns = [codes::UNMODIFIED; STATUS_COLUMNS];
        let mut rest = line;

        for (index, column) in columns.iter_mut().enumerate() {
            let Some(c) = rest.chars().next() else {
                break;
            };
            if index > 0 && (c.is_ascii_digit() || (show_updates && c == codes::REMOTE_UPDATE)) {
                break;
            }
            if !Self::is_valid_code(index, c) {
                return None;
            }
            *column = c;
            rest = &rest[c.len_utf8()..];
        }

        let file_status = columns[0];
        let mut status = EntryStatus {
            file_status,
            prop_status: columns[1],
            wc_locked: columns[2] == codes::WC_LOCKED,
            with_history: columns[3] == codes::WITH_HISTORY,
            switched: columns[4] == codes::SWITCHED,
            repo_lock: RepoLock::from_code(columns[5]),
            tree_conflict: columns[6] == codes::TREE_CONFLICT,
            ..EntryStatus::default()
        };

        let mut rest = rest.trim_start();
        if show_updates
            && let Some(after) = rest.strip_prefix(codes::REMOTE_UPDATE)
            && (after.is_empty() || after.starts_with(char::is_whitespace))
        {
            status.remote_update = true;
            rest = after.trim_start();
        }

        // Unversioned, ignored and external entries carry no revision columns, and
        // neither does an item that only exists in the repository
        let path_only = matches!(file_status, codes::UNKNOWN | codes::IGNORED | codes::EXTERNAL)
            || (status.remote_update && !Self::starts_with_revision(rest));

        let path = if path_only {
            rest
        } else if verbose {
            let caps = VERBOSE_COLUMNS_REGEX.captures(rest)?;
            status.local_revision = Self::parse_revision(caps.get(1)?.as_str())?;
            status.last_changed_revision = Self::parse_revision(caps.get(2)?.as_str())?;
            let author = caps.get(3)?.as_str();
            status.author = if author == "?" {
                String::new()
            } else {
                author.to_string()
            };
            caps.get(4)?.as_str()
        } else if show_updates {
            let caps = WORKING_REVISION_REGEX.captures(rest)?;
            status.local_revision = Self::parse_revision(caps.get(1)?.as_str())?;
            caps.get(2)?.as_str()
        } else {
            rest
        };

        let path = path.trim_end();
        if path.is_empty() {
            return None;
        }

        Some(StatusRecord {
            path: path.to_string(),
            status,
        })
    }

    /// Whether `rest` opens with a revision token followed by more columns
    fn starts_with_revision(rest: &str) -> bool {
        let Some((token, tail)) = rest.split_once(char::is_whitespace) else {
            return false;
        };
        let is_revision =
            matches!(token, "-" | "?") || (!token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()));
        is_revision && !tail.trim().is_empty()
    }

    fn is_valid_code(column: usize, c: char) -> bool {
        match column {
            0 => codes::FILE.contains(&c),
            1 => codes::PROP.contains(&c),
            2 => matches!(c, codes::UNMODIFIED | codes::WC_LOCKED),
            3 => matches!(c, codes::UNMODIFIED | codes::WITH_HISTORY),
            4 => matches!(c, codes::UNMODIFIED | codes::SWITCHED | codes::FILE_EXTERNAL),
            5 => c == codes::UNMODIFIED || RepoLock::from_code(c).is_some(),
            6 => matches!(c, codes::UNMODIFIED | codes::TREE_CONFLICT),
            _ => false,
        }
    }

    /// Add a record, replacing an earlier one for the same path
    fn insert_record(
        records: &mut Vec<StatusRecord>,
        positions: &mut HashMap<String, usize>,
        record: StatusRecord,
    ) {
        match positions.get(&record.path) {
            Some(&pos) => records[pos] = record,
            None => {
                positions.insert(record.path.clone(), records.len());
                records.push(record);
            }
        }
    }

    /// Fold the second listing of an external into its first record
    ///
    /// The `X` code of the first record wins over an unmodified code in the second.
    fn merge_external(
        records: &mut Vec<StatusRecord>,
        positions: &mut HashMap<String, usize>,
        record: StatusRecord,
    ) {
        let Some(&pos) = positions.get(&record.path) else {
            Self::insert_record(records, positions, record);
            return;
        };
        let existing = &mut records[pos];
        let file_status = if record.status.file_status == codes::UNMODIFIED {
            existing.status.file_status
        } else {
            record.status.file_status
        };
        existing.status = EntryStatus {
            file_status,
            ..record.status
        };
    }
}
