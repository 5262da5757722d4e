// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for history-rewriting commands.
//!
//! ```text
//! rebase-to-base (grh)  [-m MSG]        squash since base / rebase -i base
//! rebase-n       (grn)  N               rebase -i HEAD~N
//!                       -h N            squash N, newest message
//!                       -t N            squash N, message of HEAD~(N-1)
//!                       -m MSG N        squash N, MSG
//! merge          (gme)  REF [--no-ff] [-e]
//! ```
//!
//! `rebase-n` takes `-h` as a value flag, so only `--help` prints help there.

use clap::Args;

use crate::error::{ScriptResult, usage};
use crate::git::squash::MessageSource;

/// Arguments for `rebase-to-base`.
#[derive(Debug, Clone, Default, Args)]
pub struct RebaseToBaseArgs {
    /// Squash everything since the base into one commit with this message.
    #[arg(short = 'm', long, value_name = "MSG")]
    pub message: Option<String>,
}

/// Arguments for `rebase-n`.
#[derive(Debug, Clone, Default, Args)]
pub struct RebaseNArgs {
    /// Number of commits.
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Squash the last N commits, keeping the newest commit's message.
    #[arg(short = 'h', long = "keep-newest", value_name = "N", allow_negative_numbers = true)]
    pub keep_newest: Option<i64>,

    /// Squash the last N commits, keeping the oldest commit's message.
    #[arg(short = 't', long = "keep-oldest", value_name = "N", allow_negative_numbers = true)]
    pub keep_oldest: Option<i64>,

    /// Squash the last N commits with this message.
    #[arg(short = 'm', long, value_name = "MSG")]
    pub message: Option<String>,

    /// Print help.
    #[arg(long, action = clap::ArgAction::Help)]
    pub help: Option<bool>,
}

/// What `rebase-n` should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RebaseSelection {
    /// Open git's interactive rebase on the last N commits.
    Interactive(usize),
    /// Squash the last N commits without an editor.
    Squash {
        count: usize,
        source: MessageSource,
    },
}

impl RebaseNArgs {
    /// Validate the flag combination.
    ///
    /// # Errors
    ///
    /// Returns a usage error for a missing or non-positive N, or when more
    /// than one message source is given.
    pub fn selection(&self) -> ScriptResult<RebaseSelection> {
        let sources = [
            self.keep_newest.is_some(),
            self.keep_oldest.is_some(),
            self.message.is_some(),
        ];
        if sources.iter().filter(|given| **given).count() > 1 {
            return Err(usage("-h, -t and -m are mutually exclusive"));
        }

        if let Some(n) = self.keep_newest {
            self.reject_positional("-h")?;
            return Ok(RebaseSelection::Squash {
                count: positive(n)?,
                source: MessageSource::Latest,
            });
        }
        if let Some(n) = self.keep_oldest {
            self.reject_positional("-t")?;
            let count = positive(n)?;
            return Ok(RebaseSelection::Squash {
                count,
                source: MessageSource::NthBack(count),
            });
        }

        let count = self
            .count
            .ok_or_else(|| usage("requires a commit count N"))
            .and_then(positive)?;
        Ok(match &self.message {
            Some(message) => RebaseSelection::Squash {
                count,
                source: MessageSource::Explicit(message.clone()),
            },
            None => RebaseSelection::Interactive(count),
        })
    }

    fn reject_positional(&self, flag: &str) -> ScriptResult<()> {
        if self.count.is_some() {
            return Err(usage(format!("{flag} already takes N; remove the extra count")));
        }
        Ok(())
    }
}

fn positive(n: i64) -> ScriptResult<usize> {
    usize::try_from(n)
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| usage("N must be a positive integer"))
}

/// Arguments for `merge`.
#[derive(Debug, Clone, Default, Args)]
pub struct MergeArgs {
    /// Branch, tag or commit to merge.
    #[arg(value_name = "REF")]
    pub reference: String,

    /// Always create a merge commit.
    #[arg(long = "no-ff")]
    pub no_ff: bool,

    /// Open the editor on the merge message.
    #[arg(short = 'e', long)]
    pub edit: bool,
}
