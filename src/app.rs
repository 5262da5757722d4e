// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process entry shared by `git-scripts` and the shortcut binaries.
//!
//! ```text
//! argv --> cli::try_parse_from --> -C / config --> logging --> ShellBackend
//!                |                                                |
//!          help/version: 0                                    dispatch
//!          usage error:  1                                 Ok: 0, Err: 1
//! ```

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use tracing::debug;

use crate::cli::global::GlobalOptions;
use crate::cli::{self, BIN_NAME, Cli, Command};
use crate::cmd::commit::{
    run_add_commit_command, run_clean_command, run_force_push_command, run_push_command,
};
use crate::cmd::merge::run_merge_command;
use crate::cmd::rebase::{run_rebase_n_command, run_rebase_to_base_command};
use crate::cmd::stash::{run_stash_commits_command, run_unstash_commits_command};
use crate::cmd::worktree::run_remove_worktrees_command;
use crate::config::Config;
use crate::error::Result;
use crate::git::backend::{GitRunner, ShellBackend};
use crate::logging::{LogConfig, LogLevel, init_logging};

/// Run with the process arguments.
#[must_use]
pub fn run() -> ExitCode {
    run_from(std::env::args_os())
}

/// Run as a shortcut binary bound to `subcommand`.
///
/// `gcs -a` behaves exactly like `git-scripts stash-commits -a`.
#[must_use]
pub fn run_as(subcommand: &str) -> ExitCode {
    let rest = std::env::args_os().skip(1);
    let args = [OsString::from(BIN_NAME), OsString::from(subcommand)]
        .into_iter()
        .chain(rest);
    run_from(args)
}

/// Run with explicit arguments (`args[0]` is the program name).
pub fn run_from<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and are not failures.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let (cwd, config, sources) = match prepare(&cli.global) {
        Ok(prepared) => prepared,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&cli.global, &config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    debug!(command = cli.command.name(), cwd = %cwd.display(), "start");
    for source in &sources {
        debug!("config source {source}");
    }

    match dispatch_command(&cli, cwd, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn prepare(global: &GlobalOptions) -> Result<(PathBuf, Config, Vec<String>)> {
    let cwd = resolve_cwd(global)?;
    let loader = Config::standard_loader(&cwd, &global.configs);
    let sources = loader.format_loaded_files();
    let config = loader.build().context("failed to load configuration")?;
    Ok((cwd, config, sources))
}

fn resolve_cwd(global: &GlobalOptions) -> Result<PathBuf> {
    let current = std::env::current_dir().context("failed to read current directory")?;
    let Some(dir) = &global.directory else {
        return Ok(current);
    };
    let dir = current.join(dir);
    if !dir.is_dir() {
        anyhow::bail!("cannot change to '{}': not a directory", dir.display());
    }
    Ok(dir)
}

fn build_log_config(global: &GlobalOptions, config: &Config) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.log.level);

    let log_file = global
        .log_file
        .as_deref()
        .or_else(|| config.log.file())
        .map(|p| p.display().to_string());

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(console_level.max(LogLevel::DEBUG))
        .maybe_with_log_file(log_file)
        .build()
}

fn dispatch_command(cli: &Cli, cwd: PathBuf, config: &Config) -> Result<()> {
    let backend = ShellBackend::new(&config.git.program, cwd)?;
    debug!(program = %backend.program().display(), "git resolved");
    let git: &dyn GitRunner = &backend;

    match &cli.command {
        Command::AddCommit(args) => run_add_commit_command(args, git),
        Command::Clean => run_clean_command(git, config),
        Command::StashCommits(args) => run_stash_commits_command(*args, git, config),
        Command::UnstashCommits(args) => run_unstash_commits_command(*args, git),
        Command::ForcePush(args) => run_force_push_command(args, git, config),
        Command::Push(args) => run_push_command(args, git),
        Command::RebaseToBase(args) => run_rebase_to_base_command(args, git, config),
        Command::RebaseN(args) => run_rebase_n_command(args, git),
        Command::Merge(args) => run_merge_command(args, git),
        Command::RemoveWorktrees(args) => run_remove_worktrees_command(*args, git),
    }
}
