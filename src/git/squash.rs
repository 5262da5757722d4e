// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Collapse a commit range into a single commit.
//!
//! ```text
//! CommitRange --> SquashPlan          pick   A
//!                 (oldest pick,  -->  fixup  B   --> plan tempfile
//!                  rest fixup)        fixup  C
//!
//! rebase already in progress? --> refuse, nothing touched
//!        |
//! git rebase -i <boundary>
//!   GIT_SEQUENCE_EDITOR = cp '<plan>'   (replaces git's todo list)
//!   GIT_EDITOR          = true          (no editor)
//!        |
//!        +-- failure --> git rebase --abort (only if it stopped), error surfaced
//!        v
//! git commit --amend --cleanup=verbatim -F <message tempfile>
//! ```

use std::borrow::Cow;
use std::fmt;
use std::io::Write;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::backend::GitRunner;
use super::query;
use super::range::CommitRange;
use crate::error::{GitError, HistoryError, ScriptResult, usage};

/// Smallest range worth squashing.
pub const MIN_SQUASH_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    Pick,
    Fixup,
}

impl fmt::Display for PlanAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pick => write!(f, "pick"),
            Self::Fixup => write!(f, "fixup"),
        }
    }
}

/// Rebase todo list that folds a range into its oldest commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquashPlan {
    steps: Vec<(PlanAction, String)>,
}

impl SquashPlan {
    /// # Errors
    ///
    /// Returns `HistoryError::InvalidRange` for ranges shorter than
    /// [`MIN_SQUASH_LEN`].
    pub fn for_range(range: &CommitRange) -> ScriptResult<Self> {
        if range.len() < MIN_SQUASH_LEN {
            return Err(HistoryError::InvalidRange {
                len: range.len(),
                minimum: MIN_SQUASH_LEN,
            }
            .into());
        }
        let steps = range
            .commits()
            .iter()
            .enumerate()
            .map(|(i, commit)| {
                let action = if i == 0 {
                    PlanAction::Pick
                } else {
                    PlanAction::Fixup
                };
                (action, commit.hash.clone())
            })
            .collect();
        Ok(Self { steps })
    }

    #[must_use]
    pub fn steps(&self) -> &[(PlanAction, String)] {
        &self.steps
    }

    /// Contents of git's `git-rebase-todo`.
    #[must_use]
    pub fn to_todo(&self) -> String {
        self.steps
            .iter()
            .map(|(action, hash)| format!("{action} {hash}\n"))
            .collect()
    }
}

/// Where the squashed commit's message comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    /// Given on the command line.
    Explicit(String),
    /// The newest commit in the range.
    Latest,
    /// The commit `n - 1` steps behind the newest, i.e. `HEAD~(n-1)`.
    NthBack(usize),
}

impl MessageSource {
    /// Pick the message out of `range`.
    ///
    /// # Errors
    ///
    /// Returns a usage error if the requested commit is outside the range.
    pub fn resolve<'a>(&'a self, range: &'a CommitRange) -> ScriptResult<Cow<'a, str>> {
        let commit = match self {
            Self::Explicit(message) => return Ok(Cow::Borrowed(message)),
            Self::Latest => range.nth_back(0),
            Self::NthBack(n) => n.checked_sub(1).and_then(|back| range.nth_back(back)),
        };
        commit
            .map(|c| Cow::Borrowed(c.message.as_str()))
            .ok_or_else(|| usage("message source commit is outside the squashed range"))
    }
}

/// Squash `range` into one commit carrying `message`.
///
/// # Errors
///
/// - `HistoryError::InvalidRange` for ranges shorter than two commits.
/// - `GitError::RebaseInProgress` if another rebase is stopped in this
///   worktree. It is left untouched.
/// - `GitError::CommandFailed` if the rebase or the amend fails. A rebase
///   that stopped part way is aborted first.
pub fn squash(git: &dyn GitRunner, range: &CommitRange, message: &str) -> ScriptResult<()> {
    let plan = SquashPlan::for_range(range)?;
    if query::rebase_in_progress(git)? {
        return Err(GitError::RebaseInProgress.into());
    }
    debug!(boundary = range.boundary(), todo = %plan.to_todo(), "squash plan");

    let plan_file = write_temp(&plan.to_todo())?;
    let path = plan_file.path().to_string_lossy();
    let editor = format!("cp {}", shell_escape::unix::escape(path));

    let rebase = git.run_with_env(
        &["rebase", "--interactive", range.boundary()],
        &[("GIT_SEQUENCE_EDITOR", &editor), ("GIT_EDITOR", "true")],
    );
    if let Err(err) = rebase {
        // Any rebase stopped now is the one started above.
        if query::rebase_in_progress(git).unwrap_or(true)
            && git.try_run(&["rebase", "--abort"]).is_none()
        {
            warn!("git rebase --abort failed; repository may still be mid-rebase");
        }
        return Err(err);
    }

    amend_message(git, message)
}

/// Replace HEAD's message, byte for byte.
///
/// # Errors
///
/// Returns a `GitError` if the amend fails.
pub fn amend_message(git: &dyn GitRunner, message: &str) -> ScriptResult<()> {
    let message_file = write_temp(&with_trailing_newline(message))?;
    let path = message_file.path().to_string_lossy();
    git.run(&[
        "commit",
        "--amend",
        "--cleanup=verbatim",
        "-F",
        &path,
    ])?;
    Ok(())
}

/// Commit the index with `message`, byte for byte.
///
/// # Errors
///
/// Returns a `GitError` if the commit fails.
pub fn commit_verbatim(git: &dyn GitRunner, message: &str) -> ScriptResult<()> {
    let message_file = write_temp(&with_trailing_newline(message))?;
    let path = message_file.path().to_string_lossy();
    git.run(&["commit", "--cleanup=verbatim", "-F", &path])?;
    Ok(())
}

fn with_trailing_newline(message: &str) -> Cow<'_, str> {
    if message.ends_with('\n') {
        Cow::Borrowed(message)
    } else {
        Cow::Owned(format!("{message}\n"))
    }
}

fn write_temp(contents: &str) -> ScriptResult<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("git-scripts-")
        .tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}
