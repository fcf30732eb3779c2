//! Update output parser (svn update)

use regex::Regex;
use std::sync::LazyLock;

use super::super::SvnError;
use super::super::command::CommandKind;
use super::Parser;
use crate::model::{ActionList, PatchAction};

/// Text, property, lock and tree-conflict columns, then the path
///
/// Examples: `U    src/foo.c`, ` U   src/bar.c`, `C    src/baz.c`, `   C src/gone.c`
static UPDATE_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([UGACDER ])([UGC ])?([B ])?([C ])?\s+(\S.*)$").expect("Invalid update line regex")
});

static UPDATED_TO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Updated to revision (\d+)\.\s*$").expect("Invalid updated to regex")
});

static AT_REVISION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^At revision (\d+)\.\s*$").expect("Invalid at revision regex"));

/// Progress and external-definition lines
static UPDATE_NOISE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(Updating '.*':",
        r"|Fetching external item into '.*':",
        r"|External at revision \d+\.",
        r"|Updated external to revision \d+\.",
        r"|Checked out external at revision \d+\.",
        r"|Restored '.*'",
        r"|Skipped( missing target)?:? '.*'.*",
        r")\s*$"
    ))
    .expect("Invalid update noise regex")
});

impl Parser {
    /// Parse `svn update` output
    ///
    /// Deleted paths (`D`) are dropped: they leave the status listing anyway.
    pub fn parse_update(output: &str) -> Result<ActionList, SvnError> {
        let mut list = ActionList::default();

        for (index, raw) in output.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if Self::is_noise(line)
                || Self::is_conflict_summary(line)
                || UPDATE_NOISE_REGEX.is_match(line)
            {
                continue;
            }
            if let Some(caps) = UPDATED_TO_REGEX.captures(line) {
                list.new_revision = caps[1].parse().ok();
                continue;
            }
            if AT_REVISION_REGEX.is_match(line) {
                continue;
            }

            let caps = UPDATE_LINE_REGEX
                .captures(line)
                .ok_or_else(|| Self::drift(CommandKind::Update, index, line))?;
            let column = |i: usize| {
                caps.get(i)
                    .and_then(|m| m.as_str().chars().next())
                    .unwrap_or(' ')
            };
            let (text, prop, lock, tree) = (column(1), column(2), column(3), column(4));
            if text == ' ' && prop == ' ' && lock == ' ' && tree == ' ' {
                return Err(Self::drift(CommandKind::Update, index, line));
            }

            let path = caps[5].trim_end();
            for action in Self::update_actions(text, prop, tree) {
                list.push(path, action);
            }
        }

        Ok(list)
    }

    /// Actions for one update line; empty for deletions and lock-only changes
    fn update_actions(text: char, prop: char, tree: char) -> Vec<PatchAction> {
        let mut actions = Vec::new();

        match (text, tree) {
            ('C', _) | (_, 'C') => actions.push(PatchAction::Conflicted),
            ('D', _) => return actions,
            ('U' | 'A' | 'E' | 'R', _) => actions.push(PatchAction::Updated),
            ('G', _) => actions.push(PatchAction::Merged),
            _ => {}
        }

        match prop {
            'C' => actions.push(PatchAction::PropertyConflicted),
            'U' | 'G' if actions.is_empty() => actions.push(PatchAction::PropertyUpdated),
            _ => {}
        }

        actions
    }
}
