//! Part-of-speech aware lemmatization.
//!
//! The filter tags the whole token sequence with a [`PosTagger`], reduces
//! each Penn Treebank tag to a noun or verb sense (everything that is not a
//! verb is treated as a noun) and asks a [`Lemmatizer`] for the lemma.
//! Constant tokens are neither tagged nor rewritten.
//!
//! The default capabilities are [`LexicalTagger`] and [`RuleLemmatizer`];
//! callers can plug in their own through [`LemmaFilter::with_capabilities`].

use std::fmt;
use std::sync::Arc;

use crate::analysis::diagnostic::Diagnostics;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::lexicon::Lexicon;

pub mod lemmatizer;
pub mod tagger;

pub use lemmatizer::RuleLemmatizer;
pub use tagger::LexicalTagger;

/// The sense a word is lemmatized in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LemmaPos {
    Noun,
    Verb,
}

impl LemmaPos {
    /// Map a Penn Treebank tag to a lemma sense: `N*` is a noun, `V*` a
    /// verb, anything else falls back to noun.
    pub fn from_tag(tag: &str) -> Self {
        match tag.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('v') => LemmaPos::Verb,
            _ => LemmaPos::Noun,
        }
    }
}

/// Assigns a part-of-speech tag to every word of a sentence.
pub trait PosTagger: Send + Sync {
    /// Tag `words`; the result has exactly one tag per word.
    fn tag(&self, words: &[&str]) -> Vec<String>;

    fn name(&self) -> &'static str;
}

/// Reduces an inflected word to its dictionary form.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str, pos: LemmaPos) -> String;

    fn name(&self) -> &'static str;
}

/// Token filter replacing every word with its lemma.
#[derive(Clone)]
pub struct LemmaFilter {
    lexicon: Arc<Lexicon>,
    tagger: Arc<dyn PosTagger>,
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl LemmaFilter {
    /// Create a filter with the built-in English tagger and lemmatizer.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self::with_capabilities(
            lexicon,
            Arc::new(LexicalTagger::new()),
            Arc::new(RuleLemmatizer::new()),
        )
    }

    pub fn with_capabilities(
        lexicon: Arc<Lexicon>,
        tagger: Arc<dyn PosTagger>,
        lemmatizer: Arc<dyn Lemmatizer>,
    ) -> Self {
        LemmaFilter {
            lexicon,
            tagger,
            lemmatizer,
        }
    }
}

impl fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("tagger", &self.tagger.name())
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream, _diagnostics: &mut Diagnostics) -> Result<TokenStream> {
        let tokens: Vec<_> = tokens.collect();
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        let tags = self.tagger.tag(&words);

        let lemmas: Vec<Option<String>> = tokens
            .iter()
            .zip(tags.iter().map(String::as_str).chain(std::iter::repeat("NN")))
            .map(|(token, tag)| {
                (!self.lexicon.is_constant(&token.text))
                    .then(|| self.lemmatizer.lemmatize(&token.text, LemmaPos::from_tag(tag)))
            })
            .collect();

        let filtered_tokens = tokens
            .into_iter()
            .zip(lemmas)
            .map(|(token, lemma)| match lemma {
                Some(lemma) => token.with_text(lemma),
                None => token,
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}
