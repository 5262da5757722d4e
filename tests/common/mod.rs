// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared fixtures for integration tests.
//!
//! Every repository lives in its own temporary directory with a local
//! identity, so tests never depend on the host's git configuration.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use git_scripts::git::backend::ShellBackend;
use tempfile::TempDir;

/// A scratch repository on `main`.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Empty repository with no commits.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let repo = Self { dir };
        repo.git(&["init", "-q", "-b", "main"]);
        repo.git(&["config", "user.email", "test@test.com"]);
        repo.git(&["config", "user.name", "Test"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo
    }

    /// Repository with one commit per subject, oldest first.
    pub fn with_commits(subjects: &[&str]) -> Self {
        let repo = Self::new();
        for subject in subjects {
            repo.commit_file(&file_name(subject), subject, subject);
        }
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn backend(&self) -> ShellBackend {
        ShellBackend::new("git", self.path()).expect("git must be installed")
    }

    /// Run git and return trimmed stdout, panicking on failure.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .expect("failed to run git");
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim_end().to_string()
    }

    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.path().join(name), content).expect("failed to write file");
    }

    /// Write `name` and commit it with `message`.
    pub fn commit_file(&self, name: &str, content: &str, message: &str) {
        self.write(name, content);
        self.git(&["add", "-A"]);
        self.git(&["commit", "-q", "--cleanup=verbatim", "-m", message]);
    }

    /// Subjects from HEAD back to the root.
    pub fn subjects(&self) -> Vec<String> {
        self.git(&["log", "--format=%s"])
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// HEAD's full message with git's trailing newline removed.
    pub fn head_message(&self) -> String {
        self.git(&["log", "-1", "--format=%B"])
    }

    pub fn stash_count(&self) -> usize {
        let list = self.git(&["stash", "list"]);
        list.lines().count()
    }

    pub fn status(&self) -> String {
        self.git(&["status", "--porcelain", "--untracked-files=all"])
    }

    /// Add a linked worktree on a new branch next to the repository.
    pub fn add_worktree(&self, parent: &TempDir, branch: &str) -> PathBuf {
        let path = parent.path().join(branch);
        let path_str = path.to_string_lossy();
        self.git(&["worktree", "add", "-q", "-b", branch, &path_str]);
        path
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

fn file_name(subject: &str) -> String {
    let stem: String = subject
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{stem}.txt")
}
