//! svn output parser
//!
//! Turns the captured output of one svn command into structured data. Parsing is
//! pure; a line matching none of the shapes expected for its command is reported as
//! [`SvnError::ParseError`] instead of being skipped.

mod commit;
mod info;
mod propset;
mod status;
mod update;
mod working_copy;

#[cfg(test)]
mod tests;

use regex::Regex;
use std::sync::LazyLock;

use super::SvnError;
use super::command::CommandKind;
use super::constants::markers;
use crate::model::{ActionList, RepoInfo, StatusListing};

/// Conflict summary printed after status and update (svn 1.7+)
///
/// ```text
/// Summary of conflicts:
///   Text conflicts: 1
///   Tree conflicts: 2
/// ```
static CONFLICT_SUMMARY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Summary of conflicts:|\s+(Text|Property|Tree) conflicts: \d+|\s+Skipped paths: \d+)\s*$")
        .expect("Invalid conflict summary regex")
});

/// Structured result of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutput {
    /// Full listing from `svn status`
    Listing(StatusListing),
    /// Per-path actions from a narrow command
    Actions(ActionList),
    /// Metadata from `svn info`
    Info(RepoInfo),
    /// Command produces nothing to reconcile
    Nothing,
}

/// Parser for svn command output
pub struct Parser;

/// Parse the output of `kind`
pub fn parse(output: &str, kind: &CommandKind) -> Result<ParseOutput, SvnError> {
    let parsed = match *kind {
        CommandKind::Status {
            verbose,
            show_updates,
        } => ParseOutput::Listing(Parser::parse_status(output, verbose, show_updates)?),
        CommandKind::Info => ParseOutput::Info(Parser::parse_info(output)?),
        CommandKind::Commit => ParseOutput::Actions(Parser::parse_commit(output)?),
        CommandKind::Update => ParseOutput::Actions(Parser::parse_update(output)?),
        CommandKind::Add => ParseOutput::Actions(Parser::parse_add(output)?),
        CommandKind::Remove => ParseOutput::Actions(Parser::parse_remove(output)?),
        CommandKind::Propset => ParseOutput::Actions(Parser::parse_propset(output)?),
        CommandKind::Revert => ParseOutput::Actions(Parser::parse_revert(output)?),
        CommandKind::Resolved => ParseOutput::Actions(Parser::parse_resolved(output)?),
        CommandKind::Lock => ParseOutput::Actions(Parser::parse_lock(output)?),
        CommandKind::Unlock => ParseOutput::Actions(Parser::parse_unlock(output)?),
        CommandKind::Cleanup => ParseOutput::Nothing,
    };
    Ok(parsed)
}

impl Parser {
    /// Error for line `index` (0-based) of the output of `kind`
    pub(super) fn drift(kind: CommandKind, index: usize, line: &str) -> SvnError {
        log::warn!("svn {} output line {}: {:?}", kind, index + 1, line);
        SvnError::ParseError {
            kind,
            line_number: index + 1,
            line: line.to_string(),
        }
    }

    /// Lines every parser skips: blank lines and svn warnings
    pub(super) fn is_noise(line: &str) -> bool {
        line.trim().is_empty() || line.starts_with(markers::WARNING_PREFIX)
    }

    pub(super) fn is_conflict_summary(line: &str) -> bool {
        CONFLICT_SUMMARY_REGEX.is_match(line)
    }

    /// `-` and `?` mean no revision
    pub(super) fn parse_revision(text: &str) -> Option<i64> {
        match text {
            "-" | "?" => Some(-1),
            _ => text.parse().ok(),
        }
    }

    /// Drop the `(bin)` marker svn prints before binary paths
    pub(super) fn strip_binary_marker(path: &str) -> &str {
        path.strip_prefix(markers::BINARY)
            .map_or(path, |rest| rest.trim_start())
    }
}
