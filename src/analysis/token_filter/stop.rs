//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words).
//! A keep list takes precedence over the stop list, which is how negations
//! such as "not" survive when they are requested.
//!
//! # Examples
//!
//! ```
//! use socialnorm::analysis::diagnostic::Diagnostics;
//! use socialnorm::analysis::token::Token;
//! use socialnorm::analysis::token_filter::Filter;
//! use socialnorm::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::from_words(vec!["the", "not"]).with_keep_words(vec!["not"]);
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("cake", 1),
//!     Token::new("is", 2),
//!     Token::new("not", 3),
//! ];
//!
//! let result: Vec<_> = filter
//!     .filter(Box::new(tokens.into_iter()), &mut Diagnostics::new())
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 3);
//! assert_eq!(result[0].text, "cake");
//! assert_eq!(result[2].text, "not");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::diagnostic::Diagnostics;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::config::{Language, StopwordMode};
use crate::error::Result;
use crate::lexicon::{Lexicon, StopwordList};

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
    /// Words that are never removed, even when listed as stop words
    keep_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            keep_words: Arc::new(HashSet::new()),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Protect words from removal.
    pub fn with_keep_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep_words = Arc::new(words.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Build the stop filter for a language and stopword mode.
    ///
    /// - A non-empty manual list is used as is; nothing else applies.
    /// - English uses the standard or no-personal list plus the custom
    ///   list, with the negations protected when `include_negations` is set.
    /// - French uses the French list.
    ///
    /// Returns `None` when nothing should be filtered (other languages).
    pub fn select(
        lexicon: &Lexicon,
        language: Language,
        mode: &StopwordMode,
        include_negations: bool,
    ) -> Option<Self> {
        if let StopwordMode::Manual(words) = mode {
            if !words.is_empty() {
                return Some(Self::from_words(words.iter().cloned()));
            }
        }

        let list = |name: StopwordList| lexicon.stopwords(name).into_iter().flatten().cloned();

        match language {
            Language::English => {
                let base = match mode {
                    StopwordMode::NoPersonal => StopwordList::EnglishNoPersonal,
                    StopwordMode::Standard | StopwordMode::Manual(_) => StopwordList::English,
                };
                let filter = Self::from_words(list(base).chain(list(StopwordList::Custom)));
                Some(if include_negations {
                    filter.with_keep_words(lexicon.negations().iter().cloned())
                } else {
                    filter
                })
            }
            Language::French => Some(Self::from_words(list(StopwordList::French))),
            Language::Other => None,
        }
    }

    /// Check if a word would be removed.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word) && !self.keep_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream, _diagnostics: &mut Diagnostics) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
