// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Args;

use crate::git::worktree::RemoveOptions;

/// Arguments for `remove-worktrees`.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct WorktreeArgs {
    /// Remove worktrees even with uncommitted changes.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Include the main worktree (removes the main directory).
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl WorktreeArgs {
    #[must_use]
    pub fn options(&self) -> RemoveOptions {
        let mut options = RemoveOptions::empty();
        options.set(RemoveOptions::FORCE, self.force);
        options.set(RemoveOptions::INCLUDE_MAIN, self.all);
        options.set(RemoveOptions::ASSUME_YES, self.yes);
        options
    }
}
