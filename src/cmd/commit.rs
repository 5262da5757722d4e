// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stage-and-commit commands.
//!
//! ```text
//! add-commit   git add -A --> git commit -m MSG [--no-verify]
//! push         add-commit --> git push
//! force-push   add-commit --> git push --force | --force-with-lease
//! ```

use tracing::info;

use crate::cli::commit::CommitArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::backend::GitRunner;

/// Stage everything and commit.
///
/// # Errors
///
/// Returns an error if staging or committing fails (including an empty commit).
pub fn run_add_commit_command(args: &CommitArgs, git: &dyn GitRunner) -> Result<()> {
    let message = args.message();
    git.relay(&["add", "-A"])?;

    let mut commit = vec!["commit", "-m", message.as_str()];
    if args.no_verify {
        commit.push("--no-verify");
    }
    git.relay(&commit)?;
    info!(message = %message, "committed");
    Ok(())
}

/// Stage, commit and push to the configured upstream.
///
/// # Errors
///
/// Returns an error if any of the three steps fails.
pub fn run_push_command(args: &CommitArgs, git: &dyn GitRunner) -> Result<()> {
    run_add_commit_command(args, git)?;
    git.relay(&["push"])?;
    Ok(())
}

/// Stage, commit and force-push.
///
/// # Errors
///
/// Returns an error if any of the three steps fails.
pub fn run_force_push_command(
    args: &CommitArgs,
    git: &dyn GitRunner,
    config: &Config,
) -> Result<()> {
    run_add_commit_command(args, git)?;
    let force = if config.push.force_with_lease {
        "--force-with-lease"
    } else {
        "--force"
    };
    git.relay(&["push", force])?;
    Ok(())
}

/// Remove untracked files and directories.
///
/// # Errors
///
/// Returns an error if `git clean` fails.
pub fn run_clean_command(git: &dyn GitRunner, config: &Config) -> Result<()> {
    let flags = if config.clean.include_ignored {
        "-fdx"
    } else {
        "-fd"
    };
    git.relay(&["clean", flags])?;
    Ok(())
}
