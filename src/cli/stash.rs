// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Args;

/// Arguments for `stash-commits` and `unstash-commits`.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct StashArgs {
    /// Process every entry instead of only the latest one.
    #[arg(short = 'a', long)]
    pub all: bool,
}
