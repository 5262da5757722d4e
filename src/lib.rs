// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!        main.rs          bin/gac.rs ... bin/gcw.rs
//!           |                       |
//!           +----------+------------+
//!                      v
//!                     app
//!                      |
//!           +----------+----------+
//!           v                     v
//!        cli (clap)          cmd (handlers)
//!                      commit / stash / rebase
//!                        merge / worktree
//!           +----------+----------+
//!                      v
//!              ,---------------,
//!              |    config     |
//!              | TOML, layered |
//!              '-------+-------'
//!                      v
//!       git: query, range, squash, base, stash, worktree
//!                      |
//!               backend::GitRunner
//!                      |
//!                 ShellBackend --> git
//!
//!   +-----------------------------------------------+
//!   |  foundation   error, logging, utility::marker |
//!   +-----------------------------------------------+
//! ```

pub mod app;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod utility;
