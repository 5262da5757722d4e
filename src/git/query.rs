// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only repository queries.
//!
//! Nothing here is cached; every call asks git again.

use std::path::Path;

use super::backend::GitRunner;
use crate::error::{GitError, HistoryError, ScriptResult};

/// Short name of the checked-out branch.
///
/// # Errors
///
/// Returns `GitError::NotOnBranch` when HEAD is detached.
pub fn current_branch(git: &dyn GitRunner) -> ScriptResult<String> {
    git.try_run(&["symbolic-ref", "--quiet", "--short", "HEAD"])
        .filter(|name| !name.is_empty())
        .ok_or_else(|| GitError::NotOnBranch.into())
}

/// Full hash of HEAD.
///
/// # Errors
///
/// Returns `HistoryError::NoCommits` when HEAD is unborn.
pub fn head(git: &dyn GitRunner) -> ScriptResult<String> {
    resolve_commit(git, "HEAD").ok_or_else(|| HistoryError::NoCommits.into())
}

/// Resolve `rev` to a commit hash, `None` if it does not name a commit.
#[must_use]
pub fn resolve_commit(git: &dyn GitRunner, rev: &str) -> Option<String> {
    let spec = format!("{rev}^{{commit}}");
    git.try_run(&["rev-parse", "--verify", "--quiet", &spec])
        .filter(|hash| !hash.is_empty())
}

/// Number of commits reachable from HEAD, zero on an unborn branch.
///
/// # Errors
///
/// Returns `GitError::UnexpectedOutput` if git prints something other than a
/// number.
pub fn commit_count(git: &dyn GitRunner) -> ScriptResult<usize> {
    if resolve_commit(git, "HEAD").is_none() {
        return Ok(0);
    }
    let output = git.run(&["rev-list", "--count", "HEAD"])?;
    output
        .trim()
        .parse()
        .map_err(|_| {
            GitError::UnexpectedOutput {
                command: "git rev-list --count HEAD".to_string(),
                output,
            }
            .into()
        })
}

/// Upstream ref of `branch`: the configured `@{u}`, else `<remote>/<branch>`
/// when that remote-tracking branch exists.
///
/// # Errors
///
/// Returns `GitError::NoUpstream` when neither exists.
pub fn upstream(git: &dyn GitRunner, branch: &str, remote: &str) -> ScriptResult<String> {
    let configured = format!("{branch}@{{upstream}}");
    if let Some(name) = git
        .try_run(&["rev-parse", "--abbrev-ref", "--symbolic-full-name", &configured])
        .filter(|name| !name.is_empty())
    {
        return Ok(name);
    }

    let tracking = format!("refs/remotes/{remote}/{branch}");
    if git
        .try_run(&["show-ref", "--verify", "--quiet", &tracking])
        .is_some()
    {
        return Ok(format!("{remote}/{branch}"));
    }

    Err(GitError::NoUpstream {
        branch: branch.to_string(),
        remote: remote.to_string(),
    }
    .into())
}

/// Tree object of `rev`, if it names a commit.
#[must_use]
pub fn tree_of(git: &dyn GitRunner, rev: &str) -> Option<String> {
    let spec = format!("{rev}^{{tree}}");
    git.try_run(&["rev-parse", "--verify", "--quiet", &spec])
        .filter(|hash| !hash.is_empty())
}

/// Whether a rebase (merge or apply backend) is stopped in this worktree.
///
/// # Errors
///
/// Returns a `GitError` if the git directory cannot be located.
pub fn rebase_in_progress(git: &dyn GitRunner) -> ScriptResult<bool> {
    let git_dir = git.run(&["rev-parse", "--absolute-git-dir"])?;
    let git_dir = Path::new(&git_dir);
    Ok(["rebase-merge", "rebase-apply"]
        .iter()
        .any(|state| git_dir.join(state).exists()))
}

/// Best common ancestor of two commits.
#[must_use]
pub fn merge_base(git: &dyn GitRunner, a: &str, b: &str) -> Option<String> {
    git.try_run(&["merge-base", a, b])
        .filter(|hash| !hash.is_empty())
}

/// Root commit of HEAD's history. With several roots the oldest one wins.
///
/// # Errors
///
/// Returns `HistoryError::NoCommits` when HEAD is unborn.
pub fn root_commit(git: &dyn GitRunner) -> ScriptResult<String> {
    git.try_run(&["rev-list", "--max-parents=0", "HEAD"])
        .and_then(|roots| roots.lines().last().map(str::to_string))
        .filter(|hash| !hash.is_empty())
        .ok_or_else(|| HistoryError::NoCommits.into())
}

/// Configured remote names, in git's order.
#[must_use]
pub fn remotes(git: &dyn GitRunner) -> Vec<String> {
    git.try_run(&["remote"])
        .map(|out| out.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect())
        .unwrap_or_default()
}
