// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! History-rewriting commands.
//!
//! ```text
//! rebase-to-base        base_or_root --> git rebase -i <base>
//! rebase-to-base -m M   base_or_root --> CommitRange::since --> squash(M)
//! rebase-n N            CommitRange::last --> git rebase -i HEAD~N
//! rebase-n -h|-t|-m N   CommitRange::last --> MessageSource --> squash
//! ```

use tracing::info;

use crate::cli::history::{RebaseNArgs, RebaseSelection, RebaseToBaseArgs};
use crate::config::Config;
use crate::error::Result;
use crate::git::backend::GitRunner;
use crate::git::base::{BaseSearch, base_or_root};
use crate::git::range::CommitRange;
use crate::git::squash::{MessageSource, squash};

/// Squash or interactively rebase everything since the branch base.
///
/// # Errors
///
/// Returns an error if the base cannot be determined, fewer than two commits
/// follow it (when squashing), or the rebase fails.
pub fn run_rebase_to_base_command(
    args: &RebaseToBaseArgs,
    git: &dyn GitRunner,
    config: &Config,
) -> Result<()> {
    let search = BaseSearch {
        remote: &config.git.remote,
        priority: &config.base.priority,
    };
    let base = base_or_root(git, search)?;
    info!(base = %base, "rebasing onto base");

    match &args.message {
        Some(message) => {
            let range = CommitRange::since(git, &base)?;
            squash_range(git, &range, &MessageSource::Explicit(message.clone()))
        }
        None => {
            git.relay(&["rebase", "--interactive", &base])?;
            Ok(())
        }
    }
}

/// Squash or interactively rebase the last N commits.
///
/// # Errors
///
/// Returns an error for invalid arguments, insufficient history, or a failed
/// rebase.
pub fn run_rebase_n_command(args: &RebaseNArgs, git: &dyn GitRunner) -> Result<()> {
    match args.selection()? {
        RebaseSelection::Interactive(count) => {
            let range = CommitRange::last(git, count)?;
            git.relay(&["rebase", "--interactive", range.boundary()])?;
            Ok(())
        }
        RebaseSelection::Squash { count, source } => {
            let range = CommitRange::last(git, count)?;
            squash_range(git, &range, &source)
        }
    }
}

fn squash_range(git: &dyn GitRunner, range: &CommitRange, source: &MessageSource) -> Result<()> {
    let message = source.resolve(range)?;
    squash(git, range, &message)?;
    let subject = message.lines().next().unwrap_or_default();
    println!("Squashed {} commits into: {subject}", range.len());
    Ok(())
}
