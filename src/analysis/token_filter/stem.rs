//! Stemming token filter and stemmer implementations.

use std::fmt;
use std::sync::Arc;

use crate::analysis::diagnostic::Diagnostics;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::lexicon::Lexicon;

pub mod snowball;

pub use snowball::{SnowballStemmer, StemmerAlgorithm};

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Filter that applies stemming to tokens, leaving constant tokens alone.
#[derive(Clone)]
pub struct StemFilter {
    lexicon: Arc<Lexicon>,
    stemmer: Arc<dyn Stemmer>,
}

impl fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(lexicon: Arc<Lexicon>, stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { lexicon, stemmer }
    }

    /// Create a stem filter with a Snowball stemmer.
    pub fn snowball(lexicon: Arc<Lexicon>, algorithm: StemmerAlgorithm) -> Self {
        Self::with_stemmer(lexicon, Arc::new(SnowballStemmer::new(algorithm)))
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream, _diagnostics: &mut Diagnostics) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if self.lexicon.is_constant(&token.text) {
                    token
                } else {
                    let stemmed = self.stemmer.stem(&token.text);
                    token.with_text(stemmed)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}
