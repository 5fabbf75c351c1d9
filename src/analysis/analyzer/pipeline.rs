//! Pipeline analyzer that combines char filters, a tokenizer and filters.
//!
//! The PipelineAnalyzer applies processing in this order:
//! 1. Char Filters: rewrite the raw text, in the order they were added
//! 2. Tokenizer: splits text into tokens
//! 3. Token Filters: applied sequentially in the order they were added
//!
//! Token offsets always refer to the raw input text: after the filters ran,
//! offsets are mapped back through every char filter's transformations.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use socialnorm::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use socialnorm::analysis::diagnostic::Diagnostics;
//! use socialnorm::analysis::token_filter::lowercase::LowercaseFilter;
//! use socialnorm::analysis::token_filter::stop::StopFilter;
//! use socialnorm::analysis::tokenizer::social::SocialTokenizer;
//! use socialnorm::lexicon::Lexicon;
//!
//! let lexicon = Arc::new(Lexicon::builder().build().unwrap());
//! let analyzer = PipelineAnalyzer::new(Arc::new(SocialTokenizer::new(lexicon.clone()).unwrap()))
//!     .add_filter(Arc::new(LowercaseFilter::new(lexicon)))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and"])))
//!     .with_name("custom");
//!
//! let mut diagnostics = Diagnostics::new();
//! let tokens: Vec<_> = analyzer
//!     .analyze("Hello THE world AND test", &mut diagnostics)
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(tokens, vec!["hello", "world", "test"]);
//! ```

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::char_filter::{CharFilter, Transformation};
use crate::analysis::diagnostic::Diagnostics;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with chains of char
/// filters and token filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Names of all stages in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.char_filters
            .iter()
            .map(|f| f.name())
            .chain(std::iter::once(self.tokenizer.name()))
            .chain(self.filters.iter().map(|f| f.name()))
            .collect()
    }

    /// Run only the char filters, returning the text the tokenizer sees.
    pub fn filter_text(&self, text: &str, diagnostics: &mut Diagnostics) -> Result<String> {
        let mut filtered_text = text.to_string();
        for char_filter in &self.char_filters {
            filtered_text = char_filter.filter(&filtered_text, diagnostics)?.0;
        }
        Ok(filtered_text)
    }

    /// Maps an offset in the filtered text back to the text before the
    /// filter ran.
    fn correct_offset(offset: usize, transformations: &[Transformation]) -> usize {
        let mut corrected = offset as isize;
        // Transformations are ordered by position
        for t in transformations {
            let original_len = (t.original_end - t.original_start) as isize;
            let new_len = (t.new_end - t.new_start) as isize;

            if offset >= t.new_end {
                corrected += original_len - new_len;
            } else if offset >= t.new_start {
                // Inside a rewritten span: interpolate linearly.
                let offset_in_new = (offset - t.new_start) as isize;
                return (t.original_start as isize + offset_in_new * original_len / new_len)
                    as usize;
            } else {
                break;
            }
        }
        corrected.max(0) as usize
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str, diagnostics: &mut Diagnostics) -> Result<TokenStream> {
        let mut filtered_text = text.to_string();
        let mut filter_transformations = Vec::with_capacity(self.char_filters.len());

        for char_filter in &self.char_filters {
            let (new_text, transformations) = char_filter.filter(&filtered_text, diagnostics)?;
            debug!(
                "{}: {} edit(s), {} -> {} bytes",
                char_filter.name(),
                transformations.len(),
                filtered_text.len(),
                new_text.len()
            );
            filtered_text = new_text;
            filter_transformations.push(transformations);
        }

        let mut tokens = self.tokenizer.tokenize(&filtered_text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens, diagnostics)?;
            debug!("{}: applied", filter.name());
        }

        if filter_transformations.iter().all(Vec::is_empty) {
            return Ok(tokens);
        }

        // Map from Final -> Filter N -> ... -> Filter 1 -> Original
        let collected: Vec<_> = tokens
            .map(|mut token| {
                for transformations in filter_transformations.iter().rev() {
                    token.start_offset = Self::correct_offset(token.start_offset, transformations);
                    token.end_offset = Self::correct_offset(token.end_offset, transformations);
                }
                token
            })
            .collect();
        debug!("{}: {} token(s)", self.name, collected.len());

        Ok(Box::new(collected.into_iter()))
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::pattern_replace::{PatternReplaceCharFilter, Replacement};
    use crate::analysis::char_filter::repetition::RepetitionCharFilter;
    use crate::analysis::diagnostic::Diagnostic;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::emoji::EmojiFilter;
    use crate::analysis::token_filter::lowercase::LowercaseFilter;
    use crate::analysis::token_filter::stop::StopFilter;
    use crate::analysis::tokenizer::social::SocialTokenizer;
    use crate::lexicon::Lexicon;

    fn lexicon() -> Arc<Lexicon> {
        Arc::new(
            Lexicon::builder()
                .emoji("😂", "EMOT_JOY")
                .emoji("🍕", "")
                .build()
                .unwrap(),
        )
    }

    fn analyzer() -> PipelineAnalyzer {
        PipelineAnalyzer::new(Arc::new(SocialTokenizer::new(lexicon()).unwrap()))
    }

    fn analyze(analyzer: &PipelineAnalyzer, text: &str) -> Vec<Token> {
        analyzer
            .analyze(text, &mut Diagnostics::new())
            .unwrap()
            .collect()
    }

    #[test]
    fn test_pipeline_analyzer() {
        let analyzer = analyzer()
            .add_filter(Arc::new(LowercaseFilter::new(lexicon())))
            .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and"])));

        let tokens = analyze(&analyzer, "Hello THE world AND test");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
    }

    #[test]
    fn test_offset_correction_pattern_replace() {
        let analyzer = analyzer().add_char_filter(Arc::new(
            PatternReplaceCharFilter::new(r"http\S+", Replacement::Fixed("URL".to_string()))
                .unwrap(),
        ));

        // "http://x.co" (4..15) -> "URL" (4..7)
        let tokens = analyze(&analyzer, "see http://x.co now");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text, "URL");
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (4, 15));
        assert_eq!(tokens[2].text, "now");
        assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (16, 19));
    }

    #[test]
    fn test_offset_correction_repetition() {
        let analyzer =
            analyzer().add_char_filter(Arc::new(RepetitionCharFilter::characters().unwrap()));

        let tokens = analyze(&analyzer, "so coooooool");
        assert_eq!(tokens[1].text, "cool");
        assert_eq!(tokens[1].start_offset, 3);
        assert_eq!(tokens[1].end_offset, 12);
    }

    #[test]
    fn test_diagnostics_are_collected() {
        let analyzer = analyzer().add_filter(Arc::new(EmojiFilter::new(lexicon())));

        let mut diagnostics = Diagnostics::new();
        let tokens: Vec<String> = analyzer
            .analyze("pizza 🍕 😂", &mut diagnostics)
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(tokens, vec!["pizza", "EMOT_JOY"]);
        assert_eq!(
            diagnostics.into_vec(),
            vec![Diagnostic::UnmappedEmoji {
                glyph: "🍕".to_string()
            }]
        );
    }

    #[test]
    fn test_stage_names_and_debug() {
        let analyzer = analyzer()
            .add_char_filter(Arc::new(RepetitionCharFilter::words().unwrap()))
            .add_filter(Arc::new(LowercaseFilter::new(lexicon())));

        assert_eq!(
            analyzer.stage_names(),
            vec!["repeated_words", "social", "lowercase"]
        );
        let debug = format!("{analyzer:?}");
        assert!(debug.contains("pipeline_social"));
    }

    #[test]
    fn test_filter_text() {
        let analyzer = analyzer()
            .add_char_filter(Arc::new(RepetitionCharFilter::characters().unwrap()))
            .add_char_filter(Arc::new(RepetitionCharFilter::words().unwrap()));

        let text = analyzer
            .filter_text("need need need sooooo much", &mut Diagnostics::new())
            .unwrap();
        assert_eq!(text, "need soo much");
    }
}
