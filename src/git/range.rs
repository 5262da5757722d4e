// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit selection between a boundary and HEAD.
//!
//! ```text
//!   boundary        range (oldest-first)
//!      o ---- A ---- B ---- C ---- D   <- HEAD
//!   HEAD~4    |<------- len 4 ------>|
//! ```
//!
//! The boundary itself is never part of the range. Merge commits are left
//! out, matching what `git rebase -i` would list.

use super::backend::GitRunner;
use super::query;
use crate::error::{GitError, HistoryError, ScriptResult, usage};

const FIELD_SEP: char = '\u{1f}';
const RECORD_SEP: char = '\u{1e}';

/// A commit and its full message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRef {
    pub hash: String,
    /// Raw message without the trailing newline git stores.
    pub message: String,
}

impl CommitRef {
    /// Abbreviated hash for display.
    #[must_use]
    pub fn short_hash(&self) -> &str {
        self.hash.get(..7).unwrap_or(&self.hash)
    }

    /// First line of the message.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

/// Commits strictly after `boundary` up to HEAD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRange {
    boundary: String,
    commits: Vec<CommitRef>,
}

impl CommitRange {
    /// Range from already-known parts; `commits` must be oldest-first.
    #[must_use]
    pub fn new(boundary: impl Into<String>, commits: Vec<CommitRef>) -> Self {
        Self {
            boundary: boundary.into(),
            commits,
        }
    }

    /// The last `n` commits, bounded by `HEAD~n`.
    ///
    /// # Errors
    ///
    /// - `ScriptError::Usage` if `n` is zero.
    /// - `HistoryError::InsufficientHistory` if HEAD has fewer than `n + 1`
    ///   commits.
    pub fn last(git: &dyn GitRunner, n: usize) -> ScriptResult<Self> {
        if n == 0 {
            return Err(usage("N must be a positive integer"));
        }
        let available = query::commit_count(git)?;
        if available < n + 1 {
            return Err(HistoryError::InsufficientHistory {
                requested: n,
                available,
            }
            .into());
        }
        let boundary = query::resolve_commit(git, &format!("HEAD~{n}")).ok_or_else(|| {
            HistoryError::InsufficientHistory {
                requested: n,
                available,
            }
        })?;
        Self::since(git, &boundary)
    }

    /// Every commit after `boundary` (exclusive).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `boundary` does not name a commit or the log
    /// cannot be read.
    pub fn since(git: &dyn GitRunner, boundary: &str) -> ScriptResult<Self> {
        let boundary_hash =
            query::resolve_commit(git, boundary).ok_or_else(|| GitError::CommandFailed {
                command: format!("git rev-parse --verify {boundary}"),
                message: format!("'{boundary}' does not name a commit"),
            })?;
        let revisions = format!("{boundary_hash}..HEAD");
        let format = "--format=%H%x1f%B%x1e";
        let log = git.run(&[
            "log",
            "--no-merges",
            "--topo-order",
            "--reverse",
            format,
            &revisions,
        ])?;
        Ok(Self {
            boundary: boundary_hash,
            commits: parse_log(&log),
        })
    }

    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Commits oldest-first.
    #[must_use]
    pub fn commits(&self) -> &[CommitRef] {
        &self.commits
    }

    /// Commits newest-first.
    pub fn newest_first(&self) -> impl Iterator<Item = &CommitRef> {
        self.commits.iter().rev()
    }

    /// The commit `back` steps behind the newest one (0 = newest).
    #[must_use]
    pub fn nth_back(&self, back: usize) -> Option<&CommitRef> {
        self.newest_first().nth(back)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// Parse `%H%x1f%B%x1e` records.
pub(crate) fn parse_log(log: &str) -> Vec<CommitRef> {
    log.split(RECORD_SEP)
        .map(|record| record.trim_start_matches(['\r', '\n']))
        .filter_map(|record| record.split_once(FIELD_SEP))
        .map(|(hash, message)| CommitRef {
            hash: hash.trim().to_string(),
            message: message.trim_end_matches('\n').to_string(),
        })
        .collect()
}
