// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> git::*
//!   commit   add-commit, push, force-push, clean
//!   stash    stash-commits, unstash-commits
//!   rebase   rebase-to-base, rebase-n
//!   merge    merge
//!   worktree remove-worktrees
//! ```

pub mod commit;
pub mod merge;
pub mod rebase;
pub mod stash;
pub mod worktree;
