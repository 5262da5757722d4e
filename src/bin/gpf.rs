// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `gpf`: shortcut for `git-scripts force-push`.

use std::process::ExitCode;

fn main() -> ExitCode {
    git_scripts::app::run_as("force-push")
}
