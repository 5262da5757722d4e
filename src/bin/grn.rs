// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `grn`: shortcut for `git-scripts rebase-n`.

use std::process::ExitCode;

fn main() -> ExitCode {
    git_scripts::app::run_as("rebase-n")
}
