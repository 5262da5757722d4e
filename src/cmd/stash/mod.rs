// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stash round-trip commands.
//!
//! ```text
//! stash-commits [-a]                       unstash-commits [-a]
//!   upstream = @{u} | <remote>/<branch>      stash list empty -> info, exit 0
//!   commits = upstream..HEAD                 per entry, always stash@{0}:
//!   per commit, newest -> oldest:              decode description
//!     HEAD == commit? tree clean?              git stash pop
//!     git reset HEAD~1 (not if empty)          git add -A
//!     git stash push -u -m encode(msg)         git commit (message verbatim)
//! ```
//!
//! Stashing newest first leaves the oldest commit on top of the stack, so
//! unstashing from the top restores the original order.

use anyhow::bail;
use tracing::{debug, warn};

use crate::cli::stash::StashArgs;
use crate::config::Config;
use crate::error::{GitError, HistoryError, Result, ScriptResult};
use crate::git::backend::GitRunner;
use crate::git::range::{CommitRange, CommitRef};
use crate::git::squash::commit_verbatim;
use crate::git::{query, stash};

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub done: usize,
    pub failed: usize,
}

/// Turn local commits into stash entries.
///
/// # Errors
///
/// Returns an error if HEAD is detached, no upstream exists, or any commit
/// could not be stashed.
pub fn run_stash_commits_command(
    args: StashArgs,
    git: &dyn GitRunner,
    config: &Config,
) -> Result<()> {
    let branch = query::current_branch(git)?;
    let upstream = query::upstream(git, &branch, &config.git.remote)?;
    let range = CommitRange::since(git, &upstream)?;

    if range.is_empty() {
        println!("No local commits ahead of {upstream}");
        return Ok(());
    }

    let targets: Vec<&CommitRef> = if args.all {
        range.newest_first().collect()
    } else {
        range.newest_first().take(1).collect()
    };

    let summary = stash_commits(git, &targets);
    report("stashed", targets.len(), summary)
}

/// Stash each commit in turn; `targets` must be newest-first.
pub fn stash_commits(git: &dyn GitRunner, targets: &[&CommitRef]) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for commit in targets {
        match stash_one(git, commit) {
            Ok(()) => {
                println!("Stashed {} {}", commit.short_hash(), commit.subject());
                summary.done += 1;
            }
            Err(e) => {
                eprintln!("Failed to stash {}: {e}", commit.short_hash());
                summary.failed += 1;
            }
        }
    }
    summary
}

fn stash_one(git: &dyn GitRunner, commit: &CommitRef) -> ScriptResult<()> {
    let head = query::head(git)?;
    if head != commit.hash {
        return Err(GitError::UnexpectedOutput {
            command: "git rev-parse HEAD".to_string(),
            output: format!("HEAD is {head}, expected {}", commit.hash),
        }
        .into());
    }
    // Anything already in the tree would be folded into this commit's stash.
    let status = git.run(&["status", "--porcelain", "--untracked-files=all"])?;
    if !status.is_empty() {
        return Err(GitError::CommandFailed {
            command: "git status --porcelain".to_string(),
            message: "working tree has uncommitted changes".to_string(),
        }
        .into());
    }

    // `git stash push` saves nothing for an empty commit, which would drop it.
    if let (Some(tree), Some(parent)) =
        (query::tree_of(git, "HEAD"), query::tree_of(git, "HEAD~1"))
        && tree == parent
    {
        return Err(HistoryError::EmptyCommit {
            hash: commit.short_hash().to_string(),
        }
        .into());
    }

    git.run(&["reset", "--quiet", "HEAD~1"])?;
    debug!(commit = %commit.hash, "reset");
    stash::push(git, &commit.message)
}

/// Turn stash entries back into commits.
///
/// # Errors
///
/// Returns an error if the stash list cannot be read or any entry could not
/// be restored.
pub fn run_unstash_commits_command(args: StashArgs, git: &dyn GitRunner) -> Result<()> {
    let entries = stash::list(git)?;
    if entries.is_empty() {
        println!("No stash items available");
        return Ok(());
    }

    let total = if args.all { entries.len() } else { 1 };
    let summary = unstash_top(git, total);
    report("restored", total, summary)
}

/// Restore `count` entries, always from `stash@{0}`.
pub fn unstash_top(git: &dyn GitRunner, count: usize) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for _ in 0..count {
        match unstash_one(git) {
            Ok(subject) => {
                println!("Restored commit: {subject}");
                summary.done += 1;
            }
            Err(e) => {
                eprintln!("Failed to restore stash@{{0}}: {e}");
                summary.failed += 1;
            }
        }
    }
    summary
}

fn unstash_one(git: &dyn GitRunner) -> ScriptResult<String> {
    let Some(top) = stash::list(git)?.into_iter().next() else {
        return Err(GitError::UnexpectedOutput {
            command: "git stash list".to_string(),
            output: "stash is empty".to_string(),
        }
        .into());
    };
    let message = top.message().into_owned();

    git.run(&["stash", "pop", "--quiet"])?;
    git.run(&["add", "-A"])?;
    commit_verbatim(git, &message)?;
    Ok(message.lines().next().unwrap_or_default().to_string())
}

fn report(verb: &str, total: usize, summary: BatchSummary) -> Result<()> {
    if total > 1 {
        println!("{} of {total} commit(s) {verb}", summary.done);
    }
    if summary.failed > 0 {
        warn!(failed = summary.failed, total, "batch incomplete");
        bail!("{} of {total} commit(s) could not be {verb}", summary.failed);
    }
    Ok(())
}

#[cfg(test)]
mod tests;
