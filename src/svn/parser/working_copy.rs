//! Parsers for narrow working-copy commands
//!
//! add, remove, revert, resolved, lock and unlock each print one line per path.

use regex::Regex;
use std::sync::LazyLock;

use super::super::SvnError;
use super::super::command::CommandKind;
use super::Parser;
use crate::model::{ActionList, PatchAction};

/// `A         src/new.c`, `A  (bin)  logo.png`
static ADD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^A \s*(.+)$").expect("Invalid add regex"));

/// `D         src/old.c`
static REMOVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^D \s*(.+)$").expect("Invalid remove regex"));

static REVERTED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Reverted '(.+)'\s*$").expect("Invalid reverted regex"));

static RESOLVED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Resolved conflicted state of '(.+)'\s*$").expect("Invalid resolved regex")
});

/// `'src/foo.c' locked by user 'alice'.`
static LOCKED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^'(.+)' locked by user '.*'\.\s*$").expect("Invalid locked regex")
});

static UNLOCKED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^'(.+)' unlocked\.\s*$").expect("Invalid unlocked regex"));

impl Parser {
    /// Parse `svn add` output
    pub fn parse_add(output: &str) -> Result<ActionList, SvnError> {
        Self::parse_path_lines(output, CommandKind::Add, &ADD_REGEX, PatchAction::AddedWc)
    }

    /// Parse `svn remove` output
    pub fn parse_remove(output: &str) -> Result<ActionList, SvnError> {
        Self::parse_path_lines(output, CommandKind::Remove, &REMOVE_REGEX, PatchAction::RemovedWc)
    }

    /// Parse `svn revert` output
    pub fn parse_revert(output: &str) -> Result<ActionList, SvnError> {
        Self::parse_path_lines(output, CommandKind::Revert, &REVERTED_REGEX, PatchAction::Reverted)
    }

    /// Parse `svn resolved` output
    pub fn parse_resolved(output: &str) -> Result<ActionList, SvnError> {
        Self::parse_path_lines(
            output,
            CommandKind::Resolved,
            &RESOLVED_REGEX,
            PatchAction::Resolved,
        )
    }

    /// Parse `svn lock` output
    pub fn parse_lock(output: &str) -> Result<ActionList, SvnError> {
        Self::parse_path_lines(output, CommandKind::Lock, &LOCKED_REGEX, PatchAction::Locked)
    }

    /// Parse `svn unlock` output
    pub fn parse_unlock(output: &str) -> Result<ActionList, SvnError> {
        Self::parse_path_lines(output, CommandKind::Unlock, &UNLOCKED_REGEX, PatchAction::Unlocked)
    }

    /// Every non-noise line must match `regex`; group 1 is the path
    fn parse_path_lines(
        output: &str,
        kind: CommandKind,
        regex: &Regex,
        action: PatchAction,
    ) -> Result<ActionList, SvnError> {
        let mut list = ActionList::default();

        for (index, raw) in output.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if Self::is_noise(line) {
                continue;
            }
            let caps = regex
                .captures(line)
                .ok_or_else(|| Self::drift(kind, index, line))?;
            let path = Self::strip_binary_marker(caps[1].trim_end());
            if path.is_empty() {
                return Err(Self::drift(kind, index, line));
            }
            list.push(path, action);
        }

        Ok(list)
    }
}
