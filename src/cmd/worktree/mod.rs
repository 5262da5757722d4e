// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `remove-worktrees`: list, confirm, remove, summarize.
//!
//! ```text
//! git worktree list --porcelain
//!        |  candidates (primary only with -a)
//!        v
//! print list --> [y/N] (skipped with -y) --> git worktree remove [--force]
//!                                               | per item, failures counted
//!                                               v
//!                                        Removed / Failed summary
//! ```

use std::io::{self, Write};

use anyhow::bail;
use tracing::info;

use crate::cli::worktree::WorktreeArgs;
use crate::error::Result;
use crate::git::backend::GitRunner;
use crate::git::worktree::{self, RemoveOptions, WorktreeRecord};

/// Outcome of a removal run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalSummary {
    pub removed: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Remove secondary worktrees, asking on the terminal first.
///
/// # Errors
///
/// Returns an error if the worktree list cannot be read, the prompt cannot
/// be answered, or any removal failed.
pub fn run_remove_worktrees_command(args: WorktreeArgs, git: &dyn GitRunner) -> Result<()> {
    let summary = remove_worktrees(git, args.options(), &mut confirm_on_terminal)?;
    if summary.failed > 0 {
        bail!("failed to remove {} worktree(s)", summary.failed);
    }
    Ok(())
}

/// Ask `[y/N]` on stderr and read the answer from stdin.
///
/// # Errors
///
/// Returns an I/O error if the terminal cannot be read.
pub fn confirm_on_terminal(question: &str) -> io::Result<bool> {
    eprint!("{question} (y/N) ");
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

/// Core of `remove-worktrees` with the confirmation step injected.
///
/// # Errors
///
/// Returns an error if the worktree list cannot be read or `confirm` fails.
pub fn remove_worktrees(
    git: &dyn GitRunner,
    options: RemoveOptions,
    confirm: &mut dyn FnMut(&str) -> io::Result<bool>,
) -> Result<RemovalSummary> {
    let records = worktree::list(git)?;
    let primary: Vec<WorktreeRecord> = if options.contains(RemoveOptions::INCLUDE_MAIN) {
        Vec::new()
    } else {
        records.iter().filter(|r| r.is_main).cloned().collect()
    };
    let candidates = worktree::candidates(records, options);

    if candidates.is_empty() {
        println!("No worktrees to remove.");
        return Ok(RemovalSummary::default());
    }

    println!("Worktrees to be removed:");
    for record in &candidates {
        println!("  - {record}");
    }
    println!();

    if !options.contains(RemoveOptions::ASSUME_YES)
        && !confirm("Are you sure you want to remove these worktrees?")?
    {
        println!("Operation cancelled.");
        return Ok(RemovalSummary::default());
    }

    for record in &primary {
        println!("Skipping main worktree: {}", record.path.display());
    }
    let summary = RemovalSummary {
        skipped: primary.len(),
        ..remove_all(git, &candidates, options)
    };

    println!();
    println!("--- Summary ---");
    println!("Removed: {} worktree(s)", summary.removed);
    if summary.failed > 0 {
        println!("Failed: {} worktree(s)", summary.failed);
    }
    Ok(summary)
}

fn remove_all(
    git: &dyn GitRunner,
    candidates: &[WorktreeRecord],
    options: RemoveOptions,
) -> RemovalSummary {
    let force = options.contains(RemoveOptions::FORCE);
    let mut summary = RemovalSummary::default();

    for record in candidates {
        println!("Removing worktree: {}", record.path.display());
        match worktree::remove(git, &record.path, force) {
            Ok(()) => {
                info!(path = %record.path.display(), "worktree removed");
                summary.removed += 1;
            }
            Err(e) => {
                eprintln!("Failed to remove worktree {}: {e}", record.path.display());
                summary.failed += 1;
            }
        }
    }
    summary
}
