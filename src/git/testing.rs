// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripted runner for unit tests.
//!
//! Responses are keyed by the joined argument list. A key may hold several
//! responses, consumed in order; the last one repeats. Commands whose
//! arguments are not known up front (temporary file paths) can be answered
//! by prefix. Files passed with `-F` are read and kept for inspection.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use super::backend::GitRunner;
use crate::error::{GitError, ScriptResult};

#[derive(Debug, Clone)]
enum Reply {
    Ok(String),
    Fail(String),
}

#[derive(Debug, Default)]
pub(crate) struct ScriptedRunner {
    replies: RefCell<HashMap<String, VecDeque<Reply>>>,
    prefixes: RefCell<Vec<(String, Reply)>>,
    calls: RefCell<Vec<String>>,
    message_files: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply for `command` (space-joined args).
    pub(crate) fn ok(self, command: &str, stdout: &str) -> Self {
        self.push(command, Reply::Ok(stdout.to_string()));
        self
    }

    /// Queue a failing reply for `command`.
    pub(crate) fn fail(self, command: &str, stderr: &str) -> Self {
        self.push(command, Reply::Fail(stderr.to_string()));
        self
    }

    /// Answer every command starting with `prefix` that has no exact reply.
    pub(crate) fn ok_prefix(self, prefix: &str, stdout: &str) -> Self {
        self.prefixes
            .borrow_mut()
            .push((prefix.to_string(), Reply::Ok(stdout.to_string())));
        self
    }

    fn push(&self, command: &str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry(command.to_string())
            .or_default()
            .push_back(reply);
    }

    /// Every command issued so far, in order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Issued commands starting with `prefix`.
    pub(crate) fn calls_starting_with(&self, prefix: &str) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .cloned()
            .collect()
    }

    /// Contents of every `-F <file>` seen, in order.
    pub(crate) fn message_files(&self) -> Vec<String> {
        self.message_files.borrow().clone()
    }

    fn answer(&self, args: &[&str]) -> ScriptResult<String> {
        let key = args.join(" ");
        self.calls.borrow_mut().push(key.clone());

        if let Some(pos) = args.iter().position(|a| *a == "-F")
            && let Some(path) = args.get(pos + 1)
        {
            let contents = std::fs::read_to_string(path).unwrap_or_default();
            self.message_files.borrow_mut().push(contents);
        }

        let reply = {
            let mut replies = self.replies.borrow_mut();
            let queue = replies.get_mut(&key);
            match queue {
                Some(q) if q.len() > 1 => q.pop_front(),
                Some(q) => q.front().cloned(),
                None => None,
            }
        };
        let reply = reply.or_else(|| {
            self.prefixes
                .borrow()
                .iter()
                .find(|(prefix, _)| key.starts_with(prefix.as_str()))
                .map(|(_, reply)| reply.clone())
        });

        match reply {
            Some(Reply::Ok(stdout)) => Ok(stdout),
            Some(Reply::Fail(stderr)) => Err(GitError::CommandFailed {
                command: format!("git {key}"),
                message: stderr,
            }
            .into()),
            None => Err(GitError::CommandFailed {
                command: format!("git {key}"),
                message: "no scripted reply".to_string(),
            }
            .into()),
        }
    }
}

impl GitRunner for ScriptedRunner {
    fn run_with_env(&self, args: &[&str], _env: &[(&str, &str)]) -> ScriptResult<String> {
        self.answer(args)
    }

    fn relay_with_env(&self, args: &[&str], _env: &[(&str, &str)]) -> ScriptResult<()> {
        self.answer(args).map(|_| ())
    }
}
