// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Best-effort search for the commit a branch grew from.
//!
//! ```text
//! 1. @{upstream}            merge-base(HEAD, upstream)   != HEAD ?
//! 2. <remote>/<priority>    tip                          != HEAD ?
//!    (preferred remote first)
//! 3. <priority> (local,     merge-base(HEAD, branch)     != HEAD ?
//!    not the current one)
//! 4. none                   caller falls back to the root commit
//! ```

use tracing::debug;

use super::backend::GitRunner;
use super::query;
use crate::error::ScriptResult;

/// Where the search looks.
#[derive(Debug, Clone, Copy)]
pub struct BaseSearch<'a> {
    /// Remote consulted first.
    pub remote: &'a str,
    /// Integration branch names, most preferred first.
    pub priority: &'a [String],
}

/// A base commit and the branch it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseCommit {
    pub branch: String,
    pub commit: String,
}

/// Run the heuristic. `Ok(None)` when nothing qualifies.
///
/// # Errors
///
/// Returns `HistoryError::NoCommits` when HEAD is unborn.
pub fn find_base(git: &dyn GitRunner, search: BaseSearch<'_>) -> ScriptResult<Option<BaseCommit>> {
    let head = query::head(git)?;

    if let Some(upstream) = git
        .try_run(&["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{upstream}"])
        .filter(|name| !name.is_empty())
        && let Some(commit) = query::merge_base(git, "HEAD", &upstream)
        && commit != head
    {
        debug!(branch = %upstream, commit = %commit, "base from upstream");
        return Ok(Some(BaseCommit {
            branch: upstream,
            commit,
        }));
    }

    let mut remotes = query::remotes(git);
    if let Some(pos) = remotes.iter().position(|r| r == search.remote) {
        let preferred = remotes.remove(pos);
        remotes.insert(0, preferred);
    }

    for name in search.priority {
        for remote in &remotes {
            let branch = format!("{remote}/{name}");
            if let Some(tip) = query::resolve_commit(git, &format!("refs/remotes/{branch}"))
                && tip != head
            {
                debug!(branch = %branch, commit = %tip, "base from remote branch");
                return Ok(Some(BaseCommit {
                    branch,
                    commit: tip,
                }));
            }
        }
    }

    let current = query::current_branch(git).ok();
    for name in search.priority {
        if current.as_deref() == Some(name.as_str()) {
            continue;
        }
        let local = format!("refs/heads/{name}");
        if query::resolve_commit(git, &local).is_some()
            && let Some(commit) = query::merge_base(git, "HEAD", &local)
            && commit != head
        {
            debug!(branch = %name, commit = %commit, "base from local branch");
            return Ok(Some(BaseCommit {
                branch: name.clone(),
                commit,
            }));
        }
    }

    debug!("no base branch found");
    Ok(None)
}

/// The base commit, or the root commit when the heuristic finds nothing.
///
/// # Errors
///
/// Returns `HistoryError::NoCommits` when HEAD is unborn.
pub fn base_or_root(git: &dyn GitRunner, search: BaseSearch<'_>) -> ScriptResult<String> {
    match find_base(git, search)? {
        Some(base) => Ok(base.commit),
        None => query::root_commit(git),
    }
}
