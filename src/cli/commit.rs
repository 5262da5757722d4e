// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the stage-and-commit family.
//!
//! ```text
//! add-commit  (gac)  <message>... [-n]   add -A, commit
//! push        (gph)  <message>...        add -A, commit, push
//! force-push  (gpf)  <message>...        add -A, commit, push --force
//! ```

use clap::Args;

/// Commit message words, joined with single spaces.
#[derive(Debug, Clone, Args)]
pub struct CommitArgs {
    /// Commit message. Multiple words are joined with spaces.
    #[arg(value_name = "MESSAGE", required = true, num_args = 1..)]
    pub message: Vec<String>,

    /// Skip pre-commit and commit-msg hooks.
    #[arg(short = 'n', long = "no-verify")]
    pub no_verify: bool,
}

impl CommitArgs {
    #[must_use]
    pub fn message(&self) -> String {
        self.message.join(" ")
    }
}
