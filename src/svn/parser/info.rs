//! Info output parser (svn info)

use regex::Regex;
use std::sync::LazyLock;

use super::super::SvnError;
use super::super::command::CommandKind;
use super::Parser;
use crate::model::RepoInfo;

/// `Key: Value`; keys are words and spaces, values may be empty
static INFO_FIELD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z][A-Za-z0-9 ()-]*?):(?: (.*))?$").expect("Invalid info field regex")
});

/// `Lock Comment (2 lines):` is followed by that many free-text lines
static LOCK_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Lock Comment \((\d+) lines?\):\s*$").expect("Invalid lock comment regex")
});

impl Parser {
    /// Parse the first block of `svn info` output
    pub fn parse_info(output: &str) -> Result<RepoInfo, SvnError> {
        let mut info = RepoInfo::default();
        let mut seen_field = false;
        let mut comment_lines = 0usize;

        for (index, raw) in output.lines().enumerate() {
            let line = raw.trim_end_matches('\r');

            if comment_lines > 0 {
                comment_lines -= 1;
                continue;
            }
            if line.trim().is_empty() {
                if seen_field {
                    break;
                }
                continue;
            }
            if Self::is_noise(line) {
                continue;
            }
            if let Some(caps) = LOCK_COMMENT_REGEX.captures(line) {
                comment_lines = caps[1].parse().unwrap_or(0);
                continue;
            }

            let caps = INFO_FIELD_REGEX
                .captures(line)
                .ok_or_else(|| Self::drift(CommandKind::Info, index, line))?;
            seen_field = true;
            let value = caps.get(2).map_or("", |m| m.as_str()).trim();

            match &caps[1] {
                "Path" => info.path = value.to_string(),
                "Working Copy Root Path" => info.working_copy_root = Some(value.to_string()),
                "URL" => info.url = value.to_string(),
                "Relative URL" => info.relative_url = Some(value.to_string()),
                "Repository Root" => info.repository_root = value.to_string(),
                "Repository UUID" => info.repository_uuid = value.to_string(),
                "Revision" => {
                    info.revision = Self::parse_revision(value)
                        .ok_or_else(|| Self::drift(CommandKind::Info, index, line))?;
                }
                "Node Kind" => info.node_kind = value.to_string(),
                "Last Changed Author" => info.last_changed_author = Some(value.to_string()),
                "Last Changed Rev" => {
                    info.last_changed_revision = Self::parse_revision(value)
                        .ok_or_else(|| Self::drift(CommandKind::Info, index, line))?;
                }
                _ => {}
            }
        }

        Ok(info)
    }
}
