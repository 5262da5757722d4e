// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            ScriptError (~24 bytes)
//!                   |
//!   +-------+-------+-------+-------+
//!   |       |       |       |       |
//!   v       v       v       v       v
//! Usage    Git   History  Config   Io
//! Box<str> Box    Box      Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Git      CommandFailed, ExecutableNotFound, NotOnBranch, NoUpstream,
//!            RebaseInProgress
//!   History  InsufficientHistory, InvalidRange, NoCommits, EmptyCommit
//!   Config   ParseError, InvalidValue, NotFound
//!
//! All variants boxed => ScriptError fits in 24 bytes.
//! ```
//!
//! Every error is terminal for the current invocation and maps to exit
//! status 1.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ScriptError`].
pub type ScriptResult<T> = std::result::Result<T, ScriptError>;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Bad or missing arguments.
    #[error("usage error: {0}")]
    Usage(Box<str>),

    /// Git invocation or repository state error.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Commit history does not allow the requested rewrite.
    #[error("history error: {0}")]
    History(#[from] Box<HistoryError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a [`ScriptError::Usage`] naming the violated constraint.
pub fn usage(message: impl Into<String>) -> ScriptError {
    ScriptError::Usage(message.into().into_boxed_str())
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ScriptError {
                fn from(err: $error) -> Self {
                    ScriptError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    HistoryError => History,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Git Errors ---

/// Git invocation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git returned a non-zero exit status. `message` is git's own diagnostic.
    #[error("git command failed: {command}\n{message}")]
    CommandFailed { command: String, message: String },

    /// Git executable could not be located.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Git could not be started.
    #[error("failed to spawn '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// HEAD is detached.
    #[error("not currently on a branch")]
    NotOnBranch,

    /// Neither an upstream nor a same-named remote branch exists.
    #[error("no upstream configured for '{branch}' and remote branch '{remote}/{branch}' does not exist")]
    NoUpstream { branch: String, remote: String },

    /// A rebase started outside this invocation is still in progress.
    #[error("a rebase is already in progress; finish it with 'git rebase --continue' or 'git rebase --abort' first")]
    RebaseInProgress,

    /// Git printed something we could not interpret.
    #[error("unexpected output from '{command}': {output}")]
    UnexpectedOutput { command: String, output: String },
}

// --- History Errors ---

/// Commit-range errors.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Not enough commits exist for the requested range plus its base.
    #[error("not enough history: {requested} commit(s) requested but HEAD has only {available} (a base commit is required)")]
    InsufficientHistory { requested: usize, available: usize },

    /// Squash range below the minimum size.
    #[error("squashing requires at least {minimum} commits, got {len}")]
    InvalidRange { len: usize, minimum: usize },

    /// The current branch has no commits.
    #[error("no commits found on current branch")]
    NoCommits,

    /// A commit without changes has nothing to put in the stash.
    #[error("commit {hash} has no changes and cannot be stored in the stash")]
    EmptyCommit { hash: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse or merge configuration sources.
    #[error("failed to load configuration: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Explicitly requested configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}
