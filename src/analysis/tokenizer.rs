//! Tokenizer implementations for text analysis.
//!
//! A tokenizer turns the (already char-filtered) post text into an ordered
//! token stream. Whitespace only separates tokens; it never becomes one.
//!
//! # Available Tokenizers
//!
//! - [`social::SocialTokenizer`] - Keeps URLs, mentions, hashtags, emoticons
//!   and emoji sequences atomic
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use socialnorm::analysis::token::TokenKind;
//! use socialnorm::analysis::tokenizer::Tokenizer;
//! use socialnorm::analysis::tokenizer::social::SocialTokenizer;
//! use socialnorm::lexicon::Lexicon;
//!
//! let lexicon = Arc::new(Lexicon::english().unwrap());
//! let tokenizer = SocialTokenizer::new(lexicon).unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("so happy :-) 👍🏽").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[2].text, ":-)");
//! assert_eq!(tokens[2].kind, TokenKind::Emoticon);
//! assert_eq!(tokens[3].text, "👍🏽");
//! assert_eq!(tokens[3].kind, TokenKind::Emoji);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod social;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
/// Implementations must be restartable: tokenizing the same text twice
/// yields the same tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
