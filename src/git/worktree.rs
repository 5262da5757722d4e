// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Worktree enumeration and removal.
//!
//! ```text
//! git worktree list --porcelain
//!   worktree /repo            <- first record: primary
//!   HEAD 1a2b...
//!   branch refs/heads/main
//!
//!   worktree /repo-feature
//!   HEAD 3c4d...
//!   detached
//!   locked reason
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use bitflags::bitflags;

use super::backend::GitRunner;
use crate::error::ScriptResult;

bitflags! {
    /// Options for `remove-worktrees`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RemoveOptions: u8 {
        /// Pass `--force` to `git worktree remove`.
        const FORCE = 1 << 0;
        /// Include the primary worktree.
        const INCLUDE_MAIN = 1 << 1;
        /// Skip the confirmation prompt.
        const ASSUME_YES = 1 << 2;
    }
}

/// One `git worktree list --porcelain` record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorktreeRecord {
    pub path: PathBuf,
    pub head: Option<String>,
    /// Short branch name, `None` when detached or bare.
    pub branch: Option<String>,
    pub is_main: bool,
    pub bare: bool,
    pub locked: bool,
    pub prunable: bool,
}

impl fmt::Display for WorktreeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let branch = self.branch.as_deref().unwrap_or("detached");
        write!(f, "{} ({branch})", self.path.display())?;
        if self.is_main {
            write!(f, " [MAIN]")?;
        }
        if self.locked {
            write!(f, " [locked]")?;
        }
        Ok(())
    }
}

/// Parse porcelain output. The first record is marked primary.
#[must_use]
pub fn parse_porcelain(output: &str) -> Vec<WorktreeRecord> {
    let mut records = Vec::new();
    let mut current: Option<WorktreeRecord> = None;

    for line in output.lines().map(|l| l.trim_end_matches('\r')) {
        if let Some(path) = line.strip_prefix("worktree ") {
            records.extend(current.take());
            current = Some(WorktreeRecord {
                path: PathBuf::from(path),
                ..WorktreeRecord::default()
            });
            continue;
        }
        let Some(record) = current.as_mut() else {
            continue;
        };
        match line.split_once(' ').unwrap_or((line, "")) {
            ("HEAD", hash) => record.head = Some(hash.to_string()),
            ("branch", name) => {
                let short = name.strip_prefix("refs/heads/").unwrap_or(name);
                record.branch = Some(short.to_string());
            }
            ("bare", _) => record.bare = true,
            ("locked", _) => record.locked = true,
            ("prunable", _) => record.prunable = true,
            _ => {}
        }
    }
    records.extend(current);

    if let Some(first) = records.first_mut() {
        first.is_main = true;
    }
    records
}

/// All worktrees, primary first.
///
/// # Errors
///
/// Returns a `GitError` if the list cannot be read.
pub fn list(git: &dyn GitRunner) -> ScriptResult<Vec<WorktreeRecord>> {
    let output = git.run(&["worktree", "list", "--porcelain"])?;
    Ok(parse_porcelain(&output))
}

/// Worktrees to offer for removal.
#[must_use]
pub fn candidates(records: Vec<WorktreeRecord>, options: RemoveOptions) -> Vec<WorktreeRecord> {
    records
        .into_iter()
        .filter(|r| options.contains(RemoveOptions::INCLUDE_MAIN) || !r.is_main)
        .collect()
}

/// Remove one worktree.
///
/// # Errors
///
/// Returns a `GitError` carrying git's reason (dirty tree, locked, ...).
pub fn remove(git: &dyn GitRunner, path: &Path, force: bool) -> ScriptResult<()> {
    let path = path.to_string_lossy();
    let mut args = vec!["worktree", "remove"];
    if force {
        args.push("--force");
    }
    args.push(&path);
    git.run(&args)?;
    Ok(())
}
