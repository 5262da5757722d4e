// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{BatchSummary, run_unstash_commits_command, stash_commits, unstash_top};
use crate::cli::stash::StashArgs;
use crate::git::range::CommitRef;
use crate::git::testing::ScriptedRunner;

const HEAD_QUERY: &str = "rev-parse --verify --quiet HEAD^{commit}";
const STATUS: &str = "status --porcelain --untracked-files=all";

fn commit(hash: &str, message: &str) -> CommitRef {
    CommitRef {
        hash: hash.to_string(),
        message: message.to_string(),
    }
}

#[test]
fn test_stash_commits_newest_first_with_encoded_messages() {
    let newest = commit("cccc", "feat:\n\nbody");
    let older = commit("bbbb", "fix ::NL:: handling");
    let git = ScriptedRunner::new()
        .ok(HEAD_QUERY, "cccc")
        .ok(HEAD_QUERY, "bbbb")
        .ok(STATUS, "")
        .ok("reset --quiet HEAD~1", "")
        .ok_prefix("stash push --include-untracked -m ", "");

    let summary = stash_commits(&git, &[&newest, &older]);
    assert_eq!(summary, BatchSummary { done: 2, failed: 0 });
    assert_eq!(
        git.calls_starting_with("stash push"),
        [
            "stash push --include-untracked -m feat:::NL::::NL::body",
            "stash push --include-untracked -m fix ::::NL:::: handling",
        ]
    );
}

#[test]
fn test_stash_commits_refuses_moved_head() {
    let target = commit("cccc", "subject");
    let git = ScriptedRunner::new().ok(HEAD_QUERY, "ffff");

    let summary = stash_commits(&git, &[&target]);
    assert_eq!(summary, BatchSummary { done: 0, failed: 1 });
    assert!(git.calls_starting_with("reset").is_empty());
}

#[test]
fn test_stash_commits_refuses_dirty_tree() {
    let target = commit("cccc", "subject");
    let git = ScriptedRunner::new()
        .ok(HEAD_QUERY, "cccc")
        .ok(STATUS, " M src/lib.rs");

    let summary = stash_commits(&git, &[&target]);
    assert_eq!(summary.failed, 1);
    assert!(git.calls_starting_with("reset").is_empty());
}

#[test]
fn test_stash_commits_refuses_empty_commit() {
    let target = commit("cccc", "chore: empty marker");
    let git = ScriptedRunner::new()
        .ok(HEAD_QUERY, "cccc")
        .ok(STATUS, "")
        .ok("rev-parse --verify --quiet HEAD^{tree}", "tree1111")
        .ok("rev-parse --verify --quiet HEAD~1^{tree}", "tree1111");

    let summary = stash_commits(&git, &[&target]);
    assert_eq!(summary, BatchSummary { done: 0, failed: 1 });
    assert!(git.calls_starting_with("reset").is_empty());
    assert!(git.calls_starting_with("stash push").is_empty());
}

#[test]
fn test_stash_commits_continues_after_failure() {
    let first = commit("cccc", "newest");
    let second = commit("bbbb", "older");
    let git = ScriptedRunner::new()
        .ok(HEAD_QUERY, "zzzz")
        .ok(HEAD_QUERY, "bbbb")
        .ok(STATUS, "")
        .ok("reset --quiet HEAD~1", "")
        .ok("stash push --include-untracked -m older", "");

    let summary = stash_commits(&git, &[&first, &second]);
    assert_eq!(summary, BatchSummary { done: 1, failed: 1 });
}

#[test]
fn test_unstash_without_entries_is_informational() {
    let git = ScriptedRunner::new().ok("stash list --format=%gs", "");
    run_unstash_commits_command(StashArgs { all: true }, &git).unwrap();
    assert_eq!(git.calls(), ["stash list --format=%gs"]);
}

#[test]
fn test_unstash_restores_decoded_messages_from_top() {
    let git = ScriptedRunner::new()
        .ok(
            "stash list --format=%gs",
            "On main: feat:::NL::::NL::body\nOn main: fix",
        )
        .ok("stash list --format=%gs", "On main: fix")
        .ok("stash pop --quiet", "")
        .ok("add -A", "")
        .ok_prefix("commit --cleanup=verbatim -F ", "");

    let summary = unstash_top(&git, 2);
    assert_eq!(summary, BatchSummary { done: 2, failed: 0 });
    assert_eq!(git.message_files(), ["feat:\n\nbody\n", "fix\n"]);
    assert_eq!(git.calls_starting_with("stash pop").len(), 2);
}

#[test]
fn test_unstash_pop_failure_is_counted() {
    let git = ScriptedRunner::new()
        .ok("stash list --format=%gs", "On main: msg")
        .fail("stash pop --quiet", "CONFLICT (content): Merge conflict in a.txt");

    let summary = unstash_top(&git, 1);
    assert_eq!(summary, BatchSummary { done: 0, failed: 1 });
    assert!(git.calls_starting_with("commit").is_empty());
    assert!(git.message_files().is_empty());
}
