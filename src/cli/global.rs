// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! -C DIR            ← Working directory for git and config lookup
//! -c, --config FILE ← Additional config files (can repeat)
//! -l, --log-level N ← Console verbosity (0-5), overrides [log] level
//! --log-file FILE   ← Log file, overrides [log] file
//!
//! Precedence: CLI flags > env > --config > repo file > user file > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options, accepted before or after the subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Run as if started in DIR.
    #[arg(short = 'C', value_name = "DIR", global = true)]
    pub directory: Option<PathBuf>,

    /// Additional TOML configuration file(s), applied after the default ones.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        action = clap::ArgAction::Append,
        global = true
    )]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u8).range(0..=5),
        global = true
    )]
    pub log_level: Option<u8>,

    /// Append diagnostics to FILE.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}
