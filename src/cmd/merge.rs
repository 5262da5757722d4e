// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::history::MergeArgs;
use crate::error::Result;
use crate::git::backend::GitRunner;

/// `git merge [--no-ff] --edit|--no-edit <ref>`, output relayed.
///
/// # Errors
///
/// Returns an error if the merge fails or stops on conflicts.
pub fn run_merge_command(args: &MergeArgs, git: &dyn GitRunner) -> Result<()> {
    let mut merge = vec!["merge"];
    if args.no_ff {
        merge.push("--no-ff");
    }
    merge.push(if args.edit { "--edit" } else { "--no-edit" });
    merge.push(&args.reference);
    git.relay(&merge)?;
    Ok(())
}
