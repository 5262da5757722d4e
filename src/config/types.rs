// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! Config: GitConfig, BaseConfig, CleanConfig, PushConfig, LogSettings
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Git executable and remote selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Executable name or path, resolved through `PATH`.
    pub program: String,
    /// Remote consulted first for upstream and base detection.
    pub remote: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            remote: "origin".to_string(),
        }
    }
}

/// Integration branch names tried by the base heuristic, most preferred first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BaseConfig {
    pub priority: Vec<String>,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            priority: ["main", "master", "develop", "dev", "trunk"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// `git clean` behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleanConfig {
    /// Also remove ignored files (`-x`).
    pub include_ignored: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            include_ignored: true,
        }
    }
}

/// Push behavior for `force-push`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PushConfig {
    /// Use `--force-with-lease` instead of `--force`.
    pub force_with_lease: bool,
}

/// Logging defaults, overridden by `--log-level` and `--log-file`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    pub level: LogLevel,
    /// Empty disables the file layer.
    pub file: PathBuf,
}

impl LogSettings {
    /// The log file, if one is configured.
    #[must_use]
    pub fn file(&self) -> Option<&std::path::Path> {
        (!self.file.as_os_str().is_empty()).then_some(self.file.as_path())
    }
}
