// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git runner abstraction.
//!
//! ```text
//! query / range / squash / base / worktree / cmd
//!                    |
//!                    v
//!            GitRunner (trait)
//!          run  run_with_env  relay
//!              |             |
//!              v             v
//!        ShellBackend    fake runner (tests)
//!        git CLI, cwd
//! ```
//!
//! Captured calls set `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
//! Relayed calls inherit stdio so that editors and pagers keep working.

use crate::error::{GitError, ScriptResult};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, trace};

/// Synchronous access to git.
///
/// Every other component talks to git through this trait only.
pub trait GitRunner {
    /// Run git with extra environment variables and capture stdout.
    ///
    /// Trailing line endings are removed from the output.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` carrying git's stderr when git exits
    /// non-zero, or `GitError::SpawnFailed` when it cannot be started.
    fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> ScriptResult<String>;

    /// Run git with inherited stdio.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` when git exits non-zero.
    fn relay_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> ScriptResult<()>;

    /// Run git and capture stdout.
    ///
    /// # Errors
    ///
    /// See [`GitRunner::run_with_env`].
    fn run(&self, args: &[&str]) -> ScriptResult<String> {
        self.run_with_env(args, &[])
    }

    /// Run git with inherited stdio.
    ///
    /// # Errors
    ///
    /// See [`GitRunner::relay_with_env`].
    fn relay(&self, args: &[&str]) -> ScriptResult<()> {
        self.relay_with_env(args, &[])
    }

    /// Run git, mapping any failure to `None`.
    fn try_run(&self, args: &[&str]) -> Option<String> {
        self.run(args).ok()
    }
}

/// Printable command line, quoted the way a shell would need it.
#[must_use]
pub fn command_line(args: &[&str]) -> String {
    std::iter::once("git")
        .chain(args.iter().copied())
        .map(|arg| shell_escape::unix::escape(Cow::Borrowed(arg)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Git CLI backend bound to one working directory.
#[derive(Debug, Clone)]
pub struct ShellBackend {
    program: PathBuf,
    cwd: PathBuf,
}

impl ShellBackend {
    /// Resolve `program` through `PATH` and bind it to `cwd`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::ExecutableNotFound` if `program` cannot be resolved.
    pub fn new(program: &str, cwd: impl Into<PathBuf>) -> ScriptResult<Self> {
        let program = which::which(program).map_err(|_| GitError::ExecutableNotFound {
            name: program.to_string(),
        })?;
        Ok(Self {
            program,
            cwd: cwd.into(),
        })
    }

    /// Resolved executable path.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Working directory every command runs in.
    #[must_use]
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    fn command(&self, args: &[&str], env: &[(&str, &str)]) -> Command {
        let cmd_line = command_line(args);
        debug!(cwd = %self.cwd.display(), "cd");
        debug!(cmd = %cmd_line, "exec");

        let mut command = Command::new(&self.program);
        command.args(args).current_dir(&self.cwd);
        for (key, value) in env {
            trace!(key, value, "env");
            command.env(key, value);
        }
        command
    }
}

impl GitRunner for ShellBackend {
    fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> ScriptResult<String> {
        let output = self
            .command(args, env)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .output()
            .map_err(|source| GitError::SpawnFailed {
                command: command_line(args),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        trace!(status = ?output.status.code(), stdout = %stdout, "completed");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // Some porcelain commands report conflicts on stdout.
            let message = if stderr.trim().is_empty() {
                stdout.trim()
            } else {
                stderr.trim()
            };
            return Err(GitError::CommandFailed {
                command: command_line(args),
                message: message.to_string(),
            }
            .into());
        }
        Ok(stdout.trim_end_matches(['\r', '\n']).to_string())
    }

    fn relay_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> ScriptResult<()> {
        let status = self
            .command(args, env)
            .status()
            .map_err(|source| GitError::SpawnFailed {
                command: command_line(args),
                source,
            })?;

        trace!(status = ?status.code(), "completed");
        if !status.success() {
            return Err(GitError::CommandFailed {
                command: command_line(args),
                message: status.code().map_or_else(
                    || "terminated by signal".to_string(),
                    |code| format!("exited with status {code}"),
                ),
            }
            .into());
        }
        Ok(())
    }
}
