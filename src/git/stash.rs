// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stash entries and their descriptions.
//!
//! ```text
//! git stash list --format=%gs
//!   "On main: feat:::NL::::NL::body"     stash@{0}
//!   "WIP on main: 1a2b3c4 subject"       stash@{1}
//!    '----------'
//!    header stripped by StashEntry::message()
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::backend::GitRunner;
use crate::error::ScriptResult;
use crate::utility::marker;

/// `On <branch>: ` or `WIP on <branch>: `. Branch names cannot contain `:`.
static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^(?:On|WIP on) [^:]*: ").expect("header pattern is valid"));

/// One stash entry. Index 0 is the most recent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StashEntry {
    pub index: usize,
    pub description: String,
}

impl StashEntry {
    /// `stash@{N}`.
    #[must_use]
    pub fn reference(&self) -> String {
        format!("stash@{{{}}}", self.index)
    }

    /// Description with git's header removed.
    #[must_use]
    pub fn encoded_message(&self) -> &str {
        strip_header(&self.description)
    }

    /// The original commit message.
    #[must_use]
    pub fn message(&self) -> Cow<'_, str> {
        marker::decode(self.encoded_message())
    }
}

/// Remove the `On <branch>: ` prefix git adds to stash descriptions.
#[must_use]
pub fn strip_header(description: &str) -> &str {
    HEADER
        .find(description)
        .map_or(description, |m| &description[m.end()..])
}

/// Every stash entry, most recent first.
///
/// # Errors
///
/// Returns a `GitError` if the stash list cannot be read.
pub fn list(git: &dyn GitRunner) -> ScriptResult<Vec<StashEntry>> {
    let output = git.run(&["stash", "list", "--format=%gs"])?;
    Ok(parse_list(&output))
}

pub(crate) fn parse_list(output: &str) -> Vec<StashEntry> {
    if output.is_empty() {
        return Vec::new();
    }
    output
        .split('\n')
        .enumerate()
        .map(|(index, line)| StashEntry {
            index,
            description: line.trim_end_matches('\r').to_string(),
        })
        .collect()
}

/// Stash everything, untracked files included, under `message`.
///
/// # Errors
///
/// Returns a `GitError` if git refuses.
pub fn push(git: &dyn GitRunner, message: &str) -> ScriptResult<()> {
    let encoded = marker::encode(message);
    git.run(&["stash", "push", "--include-untracked", "-m", &encoded])?;
    Ok(())
}
