//! # socialnorm
//!
//! A configurable normalization pipeline for social-media post text.
//!
//! ## Features
//!
//! - URL, mention and hashtag substitution with placeholder constants
//! - Domain-term canonicalization and repetition collapsing
//! - Tokenization that keeps emoji sequences and emoticons atomic
//! - Emoji/emoticon to emotion-category substitution with per-category caps
//! - Case folding that protects constant tokens, ASCII folding, numeral spelling
//! - Stopword removal, part-of-speech aware lemmatization and Snowball stemming
//! - Parallel batch processing
//!
//! ## Example
//!
//! ```
//! use socialnorm::prelude::*;
//!
//! let config = PipelineConfig::default()
//!     .disable(StageKind::Stopwords)
//!     .disable(StageKind::Lemmatize)
//!     .disable(StageKind::Stem);
//! let normalizer = Normalizer::english(config).unwrap();
//!
//! let tokens = normalizer.normalize("Sooo happy 😂😂 @friend").unwrap();
//! assert_eq!(tokens, vec!["soo", "happy", "EMOT_JOY", "EMOT_JOY", "USER"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod normalizer;
pub mod source;

pub mod prelude {
    pub use crate::analysis::diagnostic::{Diagnostic, Diagnostics};
    pub use crate::analysis::token::{Token, TokenKind};
    pub use crate::config::{
        EmoticonPartialMatch, HashtagMode, Language, MentionMode, NumeralMode, PipelineConfig,
        StageKind, StopwordMode, UrlMode,
    };
    pub use crate::error::{NormalizeError, Result};
    pub use crate::lexicon::Lexicon;
    pub use crate::normalizer::{Normalized, Normalizer};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
