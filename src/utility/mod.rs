// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! marker
//!   encode()  multi-line message --> single-line stash description
//!   decode()  stash description  --> original message
//! ```

pub mod marker;
