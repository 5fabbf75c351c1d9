//! Token filter implementations for token transformation.
//!
//! This module provides the token-level stages of the normalization pipeline.
//! Filters receive a stream of tokens and produce a new stream; they may
//! rewrite, drop or split tokens but never reorder them.
//!
//! # Available Filters
//!
//! - [`punctuation::PunctuationFilter`] - Drops punctuation and whitespace artifacts
//! - [`emoji::EmojiFilter`] - Replaces emoji with emotion categories, optionally capped
//! - [`emoticon::EmoticonFilter`] - Replaces emoticons with emotion categories
//! - [`lowercase::LowercaseFilter`] - Lowercases everything but constant tokens
//! - [`ascii_folding::AsciiFoldingFilter`] - Folds to ASCII and drops emptied tokens
//! - [`numeral::NumeralFilter`] - Spells out or drops digit-only tokens
//! - [`stop::StopFilter`] - Removes stop words
//! - [`lemma::LemmaFilter`] - Part-of-speech aware lemmatization
//! - [`stem::StemFilter`] - Reduces words to their stem form
//!
//! # Examples
//!
//! ```
//! use socialnorm::analysis::diagnostic::Diagnostics;
//! use socialnorm::analysis::token::Token;
//! use socialnorm::analysis::token_filter::Filter;
//! use socialnorm::analysis::token_filter::ascii_folding::AsciiFoldingFilter;
//!
//! let filter = AsciiFoldingFilter::new();
//! let tokens = vec![Token::new("café", 0), Token::new("日本", 1)];
//! let filtered: Vec<_> = filter
//!     .filter(Box::new(tokens.into_iter()), &mut Diagnostics::new())
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text, "cafe");
//! ```

use crate::analysis::diagnostic::Diagnostics;
use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod ascii_folding;
pub mod emoji;
pub mod emoticon;
pub mod lemma;
pub mod lowercase;
pub mod numeral;
pub mod punctuation;
pub mod stem;
pub mod stop;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
/// State that must not outlive one document (such as per-category emoji
/// counters) lives inside a single `filter` call.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use socialnorm::analysis::diagnostic::Diagnostics;
/// use socialnorm::analysis::token::{Token, TokenStream};
/// use socialnorm::analysis::token_filter::Filter;
/// use socialnorm::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream, _: &mut Diagnostics) -> Result<TokenStream> {
///         let reversed: Vec<Token> = tokens
///             .map(|mut t| {
///                 t.text = t.text.chars().rev().collect();
///                 t
///             })
///             .collect();
///         Ok(Box::new(reversed.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream, reporting recoverable oddities
    /// to `diagnostics`.
    fn filter(&self, tokens: TokenStream, diagnostics: &mut Diagnostics) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}
