//! Propset output parser (svn propset / propdel)

use regex::Regex;
use std::sync::LazyLock;

use super::super::SvnError;
use super::super::command::CommandKind;
use super::Parser;
use crate::model::{ActionList, PatchAction};

/// Groups:
/// 1. property name
/// 2. path
///
/// Matches `property 'svn:eol-style' set on 'src/foo.c'`, the recursive variant and
/// `property 'x' deleted from 'src/foo.c'.`
static PROPSET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^property '([^']+)' (?:set(?: \(recursively\))? on|deleted(?: \(recursively\))? from) '(.+)'\.?\s*$",
    )
    .expect("Invalid propset regex")
});

impl Parser {
    /// Parse `svn propset` output
    pub fn parse_propset(output: &str) -> Result<ActionList, SvnError> {
        let mut list = ActionList::default();

        for (index, raw) in output.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if Self::is_noise(line) {
                continue;
            }
            let caps = PROPSET_REGEX
                .captures(line)
                .ok_or_else(|| Self::drift(CommandKind::Propset, index, line))?;
            log::debug!("property {} changed on {}", &caps[1], &caps[2]);
            list.push(&caps[2], PatchAction::PropertyChanged);
        }

        Ok(list)
    }
}
