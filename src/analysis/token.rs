//! Token types and utilities for text normalization.
//!
//! This module defines the data structures that flow through the token-level
//! stages of the pipeline.
//!
//! # Core Types
//!
//! - [`Token`] - A single token with text, position, offsets and kind
//! - [`TokenKind`] - What the tokenizer recognised the token as
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! # Examples
//!
//! ```
//! use socialnorm::analysis::token::{Token, TokenKind};
//!
//! let token = Token::with_offsets(":-)", 3, 10, 13).with_kind(TokenKind::Emoticon);
//! assert_eq!(token.text, ":-)");
//! assert_eq!(token.position, 3);
//! assert!(token.is_glyph());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// Positions are assigned once by the tokenizer and never renumbered, so a
/// token keeps pointing at the slot it came from even when neighbours are
/// dropped. Offsets are byte offsets into the raw input text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the tokenizer output (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the raw text
    pub start_offset: usize,

    /// The byte offset where this token ends in the raw text
    pub end_offset: usize,

    /// What kind of unit the token is
    pub kind: TokenKind,
}

/// Classification of a token's content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Letters/digits, possibly with inner apostrophes or hyphens
    Word,
    /// Digits, possibly with inner separators ("3", "10:30")
    Number,
    /// Punctuation marks and ellipses
    Punctuation,
    /// A single emoji grapheme cluster
    Emoji,
    /// An emoticon character run such as ":-)"
    Emoticon,
    /// A user mention ("@handle")
    Mention,
    /// A hashtag ("#topic")
    Hashtag,
    /// A URL
    Url,
    /// An emotion-category label produced by emoji/emoticon substitution
    Category,
    /// Anything else
    #[default]
    Other,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            kind: TokenKind::Other,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            kind: TokenKind::Other,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the kind of this token.
    pub fn with_kind(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }

    /// Replace the text, keeping position, offsets and kind.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// Derive a sibling token occupying the same slot with different text.
    pub fn derive<S: Into<String>>(&self, text: S, kind: TokenKind) -> Self {
        Token {
            text: text.into(),
            position: self.position,
            start_offset: self.start_offset,
            end_offset: self.end_offset,
            kind,
        }
    }

    /// Whether the token is an emoji or emoticon glyph.
    pub fn is_glyph(&self) -> bool {
        matches!(self.kind, TokenKind::Emoji | TokenKind::Emoticon)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
