//! Non-fatal notices raised while normalizing a document.
//!
//! Stages never fail on a single odd glyph or word. They drop what they
//! cannot handle and record a [`Diagnostic`] instead, which the caller may
//! log or ignore.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single recoverable condition encountered by a stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The emoji is in the table but has no category; the token was dropped.
    UnmappedEmoji { glyph: String },

    /// An emoticon candidate could not be mapped; the token was dropped.
    UnresolvedEmoticon { token: String, matched: String },

    /// An emoticon pattern matched only part of a token and the partial-match
    /// policy dropped the token.
    PartialEmoticonMatch { token: String, matched: String },

    /// A contraction key without an apostrophe fired and may have rewritten
    /// an unrelated word. The expansion was still applied.
    AmbiguousContraction { matched: String, expansion: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnmappedEmoji { glyph } => {
                write!(f, "no category set for emoji {glyph}, dropped")
            }
            Diagnostic::UnresolvedEmoticon { token, matched } => {
                write!(f, "could not replace emoticon {matched} of the word {token}")
            }
            Diagnostic::PartialEmoticonMatch { token, matched } => {
                write!(f, "emoticon {matched} only partially matches {token}, dropped")
            }
            Diagnostic::AmbiguousContraction { matched, expansion } => {
                write!(f, "expanded {matched:?} to {expansion:?} without an apostrophe")
            }
        }
    }
}

/// Collector for the diagnostics of one normalization call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collector.
    pub fn new() -> Self {
        Diagnostics::default()
    }

    /// Record a diagnostic and log it.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::info!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
