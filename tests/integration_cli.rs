// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the built binaries.
//!
//! Exercises exit codes, help output, and the shortcut executables.

mod common;

use std::path::Path;
use std::process::{Command, Output};

use common::TestRepo;

/// Run a binary with host configuration isolated from the test.
fn run(exe: &str, cwd: &Path, args: &[&str]) -> Output {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = Command::new(exe);
    for (key, _) in std::env::vars() {
        if key.starts_with("GIT_SCRIPTS_") {
            cmd.env_remove(key);
        }
    }
    cmd.args(args)
        .current_dir(cwd)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .expect("failed to run binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

const MAIN: &str = env!("CARGO_BIN_EXE_git-scripts");

// =============================================================================
// Exit codes
// =============================================================================

#[test]
fn cli_help_exits_zero() {
    let repo = TestRepo::new();
    let output = run(MAIN, repo.path(), &["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("rebase-n"));
}

#[test]
fn cli_version_exits_zero() {
    let repo = TestRepo::new();
    let output = run(MAIN, repo.path(), &["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_subcommand_help_exits_zero() {
    let repo = TestRepo::new();
    let output = run(MAIN, repo.path(), &["rebase-n", "--help"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("--keep-newest"));
}

#[test]
fn cli_unknown_subcommand_exits_one() {
    let repo = TestRepo::new();
    let output = run(MAIN, repo.path(), &["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn cli_missing_count_is_usage_error() {
    let repo = TestRepo::with_commits(&["A", "B"]);
    let output = run(MAIN, repo.path(), &["rebase-n"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("requires a commit count N"));
}

#[test]
fn cli_non_positive_count_is_usage_error() {
    let repo = TestRepo::with_commits(&["A", "B"]);
    for count in ["0", "-3"] {
        let output = run(MAIN, repo.path(), &["rebase-n", "-m", "X", count]);
        assert_eq!(output.status.code(), Some(1), "count {count}");
        assert!(stderr(&output).contains("N must be a positive integer"));
    }
    assert_eq!(repo.subjects(), ["B", "A"]);
}

#[test]
fn cli_git_failure_exits_one() {
    let repo = TestRepo::with_commits(&["A"]);
    let output = run(MAIN, repo.path(), &["merge", "no-such-branch"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error:"));
}

#[test]
fn cli_directory_option_must_exist() {
    let repo = TestRepo::new();
    let output = run(MAIN, repo.path(), &["-C", "missing", "clean"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("not a directory"));
}

#[test]
fn cli_invalid_config_exits_one() {
    let repo = TestRepo::with_commits(&["A"]);
    repo.write(".git-scripts.toml", "[git]\nremote = \"\"\n");
    let output = run(MAIN, repo.path(), &["unstash-commits"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("remote"));
}

// =============================================================================
// Shortcut binaries
// =============================================================================

#[test]
fn shortcut_gac_stages_and_commits_joined_words() {
    let repo = TestRepo::with_commits(&["A"]);
    repo.write("new.txt", "new");

    let output = run(env!("CARGO_BIN_EXE_gac"), repo.path(), &["add", "new", "file"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(repo.subjects(), ["add new file", "A"]);
    assert!(repo.status().is_empty());
}

#[test]
fn shortcut_grn_keep_newest() {
    let repo = TestRepo::with_commits(&["A", "B", "C"]);

    let output = run(env!("CARGO_BIN_EXE_grn"), repo.path(), &["-h", "2"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(repo.subjects(), ["C", "A"]);
    assert!(stdout(&output).contains("Squashed 2 commits into: C"));
}

#[test]
fn shortcut_gsc_with_empty_stash() {
    let repo = TestRepo::with_commits(&["A"]);

    let output = run(env!("CARGO_BIN_EXE_gsc"), repo.path(), &[]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("No stash items available"));
}

#[test]
fn shortcut_accepts_global_options() {
    let repo = TestRepo::with_commits(&["A"]);
    let elsewhere = tempfile::tempdir().unwrap();
    let dir = repo.path().to_string_lossy().into_owned();
    repo.write("scratch.txt", "untracked");

    let output = run(env!("CARGO_BIN_EXE_gcr"), elsewhere.path(), &["-C", &dir]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(!repo.path().join("scratch.txt").exists());
}
