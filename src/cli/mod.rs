// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! git-scripts [global options] <command>
//! add-commit       gac   <message>... [-n]
//! clean            gcr
//! stash-commits    gcs   [-a]
//! unstash-commits  gsc   [-a]
//! force-push       gpf   <message>...
//! push             gph   <message>...
//! rebase-to-base   grh   [-m MSG]
//! rebase-n         grn   N | -h N | -t N | -m MSG N
//! merge            gme   REF [--no-ff] [-e]
//! remove-worktrees gcw   [-f] [-a] [-y]
//! ```

pub mod commit;
pub mod global;
pub mod history;
pub mod stash;
pub mod worktree;


use crate::cli::commit::CommitArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::history::{MergeArgs, RebaseNArgs, RebaseToBaseArgs};
use crate::cli::stash::StashArgs;
use crate::cli::worktree::WorktreeArgs;
use clap::{Parser, Subcommand};

/// Name the parser reports in usage lines.
pub const BIN_NAME: &str = "git-scripts";

/// Git shortcut commands.
#[derive(Debug, Parser)]
#[command(
    name = "git-scripts",
    author,
    version,
    propagate_version = true,
    about = "Git shortcut commands",
    long_about = "git-scripts Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Short compositions of everyday git operations. Every command\n\
                  is also installed as a shortcut binary (gac, gcs, grn, ...)\n\
                  that behaves exactly like the subcommand.",
    after_help = "CONFIGURATION:\n\n\
                  Settings are read from <config dir>/git-scripts/config.toml,\n\
                  then .git-scripts.toml at the repository root, then every\n\
                  --config file, then GIT_SCRIPTS_<SECTION>__<KEY> environment\n\
                  variables. Later sources override earlier ones."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Stages all changes and commits them.
    #[command(visible_alias = "gac")]
    AddCommit(CommitArgs),

    /// Removes untracked files and directories.
    #[command(visible_alias = "gcr")]
    Clean,

    /// Turns local commits into stash entries, newest first.
    #[command(visible_alias = "gcs")]
    StashCommits(StashArgs),

    /// Turns stash entries back into commits.
    #[command(visible_alias = "gsc")]
    UnstashCommits(StashArgs),

    /// Stages, commits and force-pushes.
    #[command(visible_alias = "gpf")]
    ForcePush(CommitArgs),

    /// Stages, commits and pushes.
    #[command(visible_alias = "gph")]
    Push(CommitArgs),

    /// Squashes (or interactively rebases) everything since the branch base.
    #[command(visible_alias = "grh")]
    RebaseToBase(RebaseToBaseArgs),

    /// Squashes (or interactively rebases) the last N commits.
    #[command(visible_alias = "grn", disable_help_flag = true)]
    RebaseN(RebaseNArgs),

    /// Merges a branch, tag or commit.
    #[command(visible_alias = "gme")]
    Merge(MergeArgs),

    /// Removes secondary worktrees after confirmation.
    #[command(visible_alias = "gcw")]
    RemoveWorktrees(WorktreeArgs),
}

impl Command {
    /// Subcommand name, as used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddCommit(_) => "add-commit",
            Self::Clean => "clean",
            Self::StashCommits(_) => "stash-commits",
            Self::UnstashCommits(_) => "unstash-commits",
            Self::ForcePush(_) => "force-push",
            Self::Push(_) => "push",
            Self::RebaseToBase(_) => "rebase-to-base",
            Self::RebaseN(_) => "rebase-n",
            Self::Merge(_) => "merge",
            Self::RemoveWorktrees(_) => "remove-worktrees",
        }
    }
}

/// Tries to parse command-line arguments from an iterator.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
