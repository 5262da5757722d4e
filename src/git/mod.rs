// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!   query   range   squash   base   stash   worktree
//!     \       \       |       |      /       /
//!      v       v      v       v     v       v
//!      ,------------------------------------,
//!      |        backend::GitRunner          |
//!      '---------------+--------------------'
//!                      |
//!                      v
//!                ShellBackend
//!               git CLI, one cwd
//! ```
//!
//! **`range`**: commits between a boundary and HEAD.
//! **`squash`**: scripted `rebase -i` that folds a range into one commit.
//! **`base`**: where the current branch started.

pub mod backend;
pub mod base;
pub mod query;
pub mod range;
pub mod squash;
pub mod stash;
pub mod worktree;

#[cfg(test)]
pub(crate) mod testing;
