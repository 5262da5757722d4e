// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <config_dir>/git-scripts/config.toml
//! 3. <repository>/.git-scripts.toml
//! 4. --config (repeatable)
//! 5. GIT_SCRIPTS_* env vars
//! 6. CLI overrides (--log-level, --log-file)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GIT_SCRIPTS_GIT__REMOTE=upstream     → git.remote = "upstream"
//! GIT_SCRIPTS_BASE__PRIORITY=main,dev  → base.priority = ["main", "dev"]
//! GIT_SCRIPTS_LOG__LEVEL=4             → log.level = 4
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{BaseConfig, CleanConfig, GitConfig, LogSettings, PushConfig};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GIT_SCRIPTS";

/// Name of the repository-local configuration file.
pub const REPO_CONFIG_FILE: &str = ".git-scripts.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub git: GitConfig,
    pub base: BaseConfig,
    pub clean: CleanConfig,
    pub push: PushConfig,
    pub log: LogSettings,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use git_scripts::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional(".git-scripts.toml")
    ///     .with_env_prefix("GIT_SCRIPTS")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Path of the per-user configuration file, if the platform has one.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("git-scripts").join("config.toml"))
    }

    /// Loader with the standard layering for a working directory.
    ///
    /// `extra` files are required and applied after the user and
    /// repository files.
    #[must_use]
    pub fn standard_loader(cwd: &Path, extra: &[PathBuf]) -> ConfigLoader {
        let mut loader = Self::builder();
        if let Some(user) = Self::user_config_path() {
            loader = loader.add_toml_file_optional(user);
        }
        if let Some(root) = find_repository_root(cwd) {
            loader = loader.add_toml_file_optional(root.join(REPO_CONFIG_FILE));
        }
        for path in extra {
            loader = loader.add_toml_file(path);
        }
        loader.with_env_prefix(ENV_PREFIX)
    }

    /// Check values that deserialize but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending key.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let invalid = |section: &str, key: &str, message: &str| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message: message.to_string(),
        };

        if self.git.program.trim().is_empty() {
            return Err(invalid("git", "program", "must not be empty"));
        }
        if self.git.remote.trim().is_empty() {
            return Err(invalid("git", "remote", "must not be empty"));
        }
        if let Some(bad) = self.base.priority.iter().find(|b| b.trim().is_empty()) {
            return Err(invalid(
                "base",
                "priority",
                &format!("branch names must not be empty, got {bad:?}"),
            ));
        }
        Ok(())
    }
}

/// Nearest ancestor of `start` (inclusive) containing a `.git` entry.
///
/// Filesystem only; worktrees and submodules have a `.git` file, which counts.
#[must_use]
pub fn find_repository_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}
