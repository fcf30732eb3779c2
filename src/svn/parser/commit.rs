//! Commit output parser (svn commit)

use regex::Regex;
use std::sync::LazyLock;

use super::super::SvnError;
use super::super::command::CommandKind;
use super::Parser;
use crate::model::{ActionList, PatchAction};

/// `Sending        src/foo.c`, `Adding  (bin)  logo.png`
static COMMIT_ACTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Sending|Adding|Deleting|Replacing)\s+(.+)$").expect("Invalid commit action regex")
});

static COMMITTED_REVISION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Committed revision (\d+)\.\s*$").expect("Invalid committed revision regex")
});

/// Progress lines carrying no per-path information
static COMMIT_NOISE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Transmitting file data\b.*|Committing transaction\.\.\.|\.+)\s*$")
        .expect("Invalid commit noise regex")
});

impl Parser {
    /// Parse `svn commit` output
    pub fn parse_commit(output: &str) -> Result<ActionList, SvnError> {
        let mut list = ActionList::default();

        for (index, raw) in output.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if Self::is_noise(line) || COMMIT_NOISE_REGEX.is_match(line) {
                continue;
            }
            if let Some(caps) = COMMITTED_REVISION_REGEX.captures(line) {
                list.new_revision = caps[1].parse().ok();
                continue;
            }

            let caps = COMMIT_ACTION_REGEX
                .captures(line)
                .ok_or_else(|| Self::drift(CommandKind::Commit, index, line))?;
            let action = if &caps[1] == "Deleting" {
                PatchAction::CommittedDeletion
            } else {
                PatchAction::Committed
            };
            let path = Self::strip_binary_marker(caps[2].trim_end());
            list.push(path, action);
        }

        Ok(list)
    }
}
