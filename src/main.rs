// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::try_parse_from() --> Config --> Logging --> Command Dispatch
//!   add-commit | clean | stash-commits | unstash-commits | force-push
//!   push | rebase-to-base | rebase-n | merge | remove-worktrees
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    git_scripts::app::run()
}
