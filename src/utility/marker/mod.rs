// git-scripts: Git Shortcut Commands
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Marker codec for single-line stash descriptions.
//!
//! ```text
//! commit message            stash description
//! "feat:\n\nbody"  --(encode)-->  "feat:::NL::::NL::body"
//!                  <--(decode)--
//!
//! marker-shaped text   ::NL::  -->  ::::NL::::   (doubled delimiters)
//! control characters   \n \r \t "  -->  ::NL:: ::CR:: ::TAB:: ::DQ::
//! fused colon          :  -->  ::CL::            (only where needed)
//! collapsible space         -->  ::SP::            (only where needed)
//! ```
//!
//! Git stores stash descriptions on one line, so newlines, carriage returns
//! and tabs would otherwise be lost. Escaping runs before token substitution
//! so marker text already present in a message survives decoding.
//!
//! A literal colon is emitted as `::CL::` only when, followed by the rest of
//! the encoded text, it would read as a token or an escaped marker (for
//! example the message `"::\n::"`, whose naive encoding equals the escape of
//! the literal text `"::NL::"`). Messages whose colons never touch a token
//! encode exactly as the two passes above.
//!
//! Git also normalizes the description: runs of whitespace collapse to one
//! space and trailing whitespace is dropped. A space is emitted as `::SP::`
//! when it would be lost that way: at the start of the message (it follows
//! the `On <branch>: ` header), at the end, or right after another literal
//! space.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Version of the token table below. Bump when a token is added or renamed.
pub const TOKEN_TABLE_VERSION: u32 = 3;

/// A literal character and the marker name that replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub literal: char,
    pub name: &'static str,
}

impl Token {
    /// The encoded form, e.g. `::NL::`.
    #[must_use]
    pub fn marker(&self) -> String {
        format!("::{}::", self.name)
    }
}

/// Characters that are always tokenized, in substitution order.
pub const TOKENS: [Token; 4] = [
    Token {
        literal: '\n',
        name: "NL",
    },
    Token {
        literal: '\r',
        name: "CR",
    },
    Token {
        literal: '\t',
        name: "TAB",
    },
    Token {
        literal: '"',
        name: "DQ",
    },
];

/// Colon token, used only for disambiguation.
pub const COLON: Token = Token {
    literal: ':',
    name: "CL",
};

/// Space token, used only where git would collapse or trim the space.
pub const SPACE: Token = Token {
    literal: ' ',
    name: "SP",
};

/// `::LETTERS::` anywhere in raw text.
static MARKER_SHAPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("::[A-Za-z]+::").expect("marker pattern is valid"));

/// Escaped markers first, then tokens. Leftmost match wins.
static DECODER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("::::([A-Za-z]+)::::|::(NL|CR|TAB|DQ|CL|SP)::").expect("decoder pattern is valid")
});

fn token_for(c: char) -> Option<&'static Token> {
    TOKENS.iter().find(|t| t.literal == c)
}

fn token_named(name: &str) -> Option<&'static Token> {
    TOKENS
        .iter()
        .chain([&COLON, &SPACE])
        .find(|t| t.name == name)
}

/// Whether a literal colon in front of `head` would be decoded as part of a
/// marker, i.e. `head` starts with `:::LETTERS::::` or `:NAME::`.
fn fuses_with_colon(mut head: impl Iterator<Item = char>) -> bool {
    if head.next() != Some(':') {
        return false;
    }
    let mut head = head.peekable();
    let escaped = head.next_if_eq(&':').is_some();
    if escaped && head.next() != Some(':') {
        return false;
    }

    let mut name = String::new();
    while let Some(c) = head.next_if(char::is_ascii_alphabetic) {
        name.push(c);
    }
    if name.is_empty() {
        return false;
    }

    let closing = if escaped { 4 } else { 2 };
    if !head.by_ref().take(closing).eq(std::iter::repeat_n(':', closing)) {
        return false;
    }
    escaped || token_named(&name).is_some()
}

/// One unit of encoder output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit<'a> {
    Char(char),
    Escaped(&'a str),
    Token(&'static Token),
}

fn push_plain(text: &str, out: &mut Vec<Unit<'_>>) {
    for c in text.chars() {
        out.push(token_for(c).map_or(Unit::Char(c), Unit::Token));
    }
}

fn units(message: &str) -> Vec<Unit<'_>> {
    let mut out = Vec::with_capacity(message.len());
    let mut last = 0;
    for m in MARKER_SHAPED.find_iter(message) {
        push_plain(&message[last..m.start()], &mut out);
        let word = &message[m.start() + 2..m.end() - 2];
        out.push(Unit::Escaped(word));
        last = m.end();
    }
    push_plain(&message[last..], &mut out);
    protect_spaces(&mut out);
    out
}

/// Tokenize spaces git would collapse or trim. The description header ends
/// with a space, so a leading space counts as following one.
fn protect_spaces(units: &mut [Unit<'_>]) {
    let last = units.len().saturating_sub(1);
    let mut after_space = true;
    for (i, unit) in units.iter_mut().enumerate() {
        if *unit != Unit::Char(' ') {
            after_space = false;
        } else if after_space || i == last {
            *unit = Unit::Token(&SPACE);
            after_space = false;
        } else {
            after_space = true;
        }
    }
}

fn has_collapsible_space(message: &str) -> bool {
    message.starts_with(' ') || message.ends_with(' ') || message.contains("  ")
}

fn push_reversed(out: &mut String, piece: &str) {
    out.extend(piece.chars().rev());
}

/// Encode a message into a single-line marker form.
///
/// Returns the input unchanged (borrowed) when it contains no control
/// characters, no marker-shaped substrings and no spaces git would collapse.
#[must_use]
pub fn encode(message: &str) -> Cow<'_, str> {
    if !message.chars().any(|c| token_for(c).is_some())
        && !MARKER_SHAPED.is_match(message)
        && !has_collapsible_space(message)
    {
        return Cow::Borrowed(message);
    }

    // Built back to front, and reversed: whether a colon can stay literal
    // depends on everything that follows it.
    let mut reversed = String::with_capacity(message.len() * 2);
    for unit in units(message).into_iter().rev() {
        match unit {
            Unit::Char(':') if fuses_with_colon(reversed.chars().rev()) => {
                push_reversed(&mut reversed, &COLON.marker());
            }
            Unit::Char(c) => reversed.push(c),
            Unit::Escaped(word) => push_reversed(&mut reversed, &format!("::::{word}::::")),
            Unit::Token(token) => push_reversed(&mut reversed, &token.marker()),
        }
    }
    Cow::Owned(reversed.chars().rev().collect())
}

/// Decode a marker form back into the original message.
#[must_use]
pub fn decode(text: &str) -> Cow<'_, str> {
    DECODER.replace_all(text, |caps: &Captures<'_>| {
        if let Some(word) = caps.get(1) {
            return format!("::{}::", word.as_str());
        }
        caps.get(2)
            .and_then(|name| token_named(name.as_str()))
            .map_or_else(|| caps[0].to_string(), |token| token.literal.to_string())
    })
}
