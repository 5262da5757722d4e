// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for history rewriting.
//!
//! Runs `rebase-n` and `rebase-to-base` against real temporary repositories.

mod common;

use common::TestRepo;
use git_scripts::cli::history::{RebaseNArgs, RebaseToBaseArgs};
use git_scripts::cmd::rebase::{run_rebase_n_command, run_rebase_to_base_command};
use git_scripts::config::Config;
use git_scripts::git::range::CommitRange;

fn squash_with_message(count: i64, message: &str) -> RebaseNArgs {
    RebaseNArgs {
        count: Some(count),
        message: Some(message.to_string()),
        ..RebaseNArgs::default()
    }
}

// =============================================================================
// rebase-n
// =============================================================================

#[test]
fn rebase_n_squashes_last_two_with_explicit_message() {
    let repo = TestRepo::with_commits(&["A", "B", "C", "D"]);
    let git = repo.backend();

    run_rebase_n_command(&squash_with_message(2, "X"), &git).unwrap();

    assert_eq!(repo.subjects(), ["X", "B", "A"]);
    // Content of the squashed commits is kept.
    assert!(repo.path().join("C.txt").exists());
    assert!(repo.path().join("D.txt").exists());
    assert!(repo.status().is_empty());
}

#[test]
fn rebase_n_keep_newest_uses_head_message() {
    let repo = TestRepo::with_commits(&["A", "B", "C", "D"]);
    let args = RebaseNArgs {
        keep_newest: Some(3),
        ..RebaseNArgs::default()
    };

    run_rebase_n_command(&args, &repo.backend()).unwrap();

    assert_eq!(repo.subjects(), ["D", "A"]);
}

#[test]
fn rebase_n_keep_oldest_uses_oldest_message_in_range() {
    let repo = TestRepo::with_commits(&["A", "B", "C", "D"]);
    let args = RebaseNArgs {
        keep_oldest: Some(3),
        ..RebaseNArgs::default()
    };

    run_rebase_n_command(&args, &repo.backend()).unwrap();

    assert_eq!(repo.subjects(), ["B", "A"]);
}

#[test]
fn rebase_n_preserves_multi_line_message() {
    let repo = TestRepo::with_commits(&["A", "B", "C"]);
    let message = "feat: combine\n\n- first \"quoted\"\n- second\twith tab";

    run_rebase_n_command(&squash_with_message(2, message), &repo.backend()).unwrap();

    assert_eq!(repo.head_message(), message);
}

#[test]
fn rebase_n_rejects_single_commit_squash() {
    let repo = TestRepo::with_commits(&["A", "B", "C"]);
    let before = repo.git(&["rev-parse", "HEAD"]);

    let err = run_rebase_n_command(&squash_with_message(1, "X"), &repo.backend()).unwrap_err();

    assert!(err.to_string().contains("at least 2 commits"), "{err:#}");
    assert_eq!(repo.git(&["rev-parse", "HEAD"]), before);
}

#[test]
fn rebase_n_rejects_range_reaching_root() {
    let repo = TestRepo::with_commits(&["A", "B", "C", "D"]);

    let err = run_rebase_n_command(&squash_with_message(4, "X"), &repo.backend()).unwrap_err();

    assert!(err.to_string().contains("not enough history"), "{err:#}");
    assert_eq!(repo.subjects(), ["D", "C", "B", "A"]);
}

#[test]
fn rebase_n_leaves_an_existing_rebase_alone() {
    let repo = TestRepo::with_commits(&["A", "B", "C", "D"]);
    // Stop on the first commit of the rebase as if the user were editing it.
    repo.git(&[
        "-c",
        "sequence.editor=sed -i -e 1s/^pick/edit/",
        "rebase",
        "-q",
        "-i",
        "HEAD~2",
    ]);
    repo.write("C.txt", "hand-resolved");
    repo.git(&["add", "C.txt"]);

    let err = run_rebase_n_command(&squash_with_message(2, "X"), &repo.backend()).unwrap_err();

    assert!(format!("{err:#}").contains("already in progress"), "{err:#}");
    let git_dir = repo.git(&["rev-parse", "--absolute-git-dir"]);
    assert!(std::path::Path::new(&git_dir).join("rebase-merge").exists());
    assert_eq!(
        std::fs::read_to_string(repo.path().join("C.txt")).unwrap(),
        "hand-resolved"
    );
    assert_eq!(repo.git(&["diff", "--cached", "--name-only"]), "C.txt");
}

#[test]
fn rebase_n_requires_count() {
    let repo = TestRepo::with_commits(&["A", "B"]);

    let err = run_rebase_n_command(&RebaseNArgs::default(), &repo.backend()).unwrap_err();

    assert!(err.to_string().contains("requires a commit count N"));
}

#[test]
fn commit_range_last_lists_oldest_first() {
    let repo = TestRepo::with_commits(&["A", "B", "C", "D"]);

    let range = CommitRange::last(&repo.backend(), 3).unwrap();
    let subjects: Vec<&str> = range.commits().iter().map(|c| c.subject()).collect();

    assert_eq!(subjects, ["B", "C", "D"]);
    assert_eq!(range.boundary(), repo.git(&["rev-parse", "HEAD~3"]));
}

// =============================================================================
// rebase-to-base
// =============================================================================

#[test]
fn rebase_to_base_squashes_onto_local_main() {
    let repo = TestRepo::with_commits(&["A", "B"]);
    repo.git(&["checkout", "-q", "-b", "feature"]);
    repo.commit_file("c.txt", "c", "C");
    repo.commit_file("d.txt", "d", "D");

    let args = RebaseToBaseArgs {
        message: Some("feature work".to_string()),
    };
    run_rebase_to_base_command(&args, &repo.backend(), &Config::default()).unwrap();

    assert_eq!(repo.subjects(), ["feature work", "B", "A"]);
}

#[test]
fn rebase_to_base_falls_back_to_root_commit() {
    let repo = TestRepo::with_commits(&["root", "two", "three"]);
    repo.git(&["branch", "-m", "topic"]);

    let args = RebaseToBaseArgs {
        message: Some("squashed".to_string()),
    };
    run_rebase_to_base_command(&args, &repo.backend(), &Config::default()).unwrap();

    assert_eq!(repo.subjects(), ["squashed", "root"]);
}

#[test]
fn rebase_to_base_rejects_single_commit_branch() {
    let repo = TestRepo::with_commits(&["A"]);
    repo.git(&["checkout", "-q", "-b", "feature"]);
    repo.commit_file("only.txt", "only", "only");

    let args = RebaseToBaseArgs {
        message: Some("nope".to_string()),
    };
    let err =
        run_rebase_to_base_command(&args, &repo.backend(), &Config::default()).unwrap_err();

    assert!(err.to_string().contains("at least 2 commits"), "{err:#}");
    assert_eq!(repo.subjects(), ["only", "A"]);
}
