//! The normalization pipeline.
//!
//! A [`Normalizer`] turns a [`PipelineConfig`] and a shared [`Lexicon`] into
//! a [`PipelineAnalyzer`] whose stages always run in this order:
//!
//! | # | stage | works on | runs for |
//! |---|-------|----------|----------|
//! | 1 | contraction expansion | text | English |
//! | 2 | URL, mention, hashtag substitution | text | all |
//! | 3 | domain-term canonicalization | text | all |
//! | 4 | repeated characters, then repeated words | text | all |
//! | 5 | tokenization | text → tokens | all |
//! | 6 | punctuation filter | tokens | all |
//! | 7 | emoji, then emoticon substitution | tokens | English |
//! | 8 | lowercase | tokens | all |
//! | 9 | ASCII folding | tokens | all |
//! | 10 | numerals | tokens | all |
//! | 11 | stopwords | tokens | English, French, or a manual list |
//! | 12 | lemmatization | tokens | English |
//! | 13 | stemming | tokens | English, French, or an explicit stemmer |
//!
//! Any stage can be disabled through [`PipelineConfig::disable`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use socialnorm::config::PipelineConfig;
//! use socialnorm::lexicon::Lexicon;
//! use socialnorm::normalizer::Normalizer;
//!
//! let lexicon = Arc::new(Lexicon::english().unwrap());
//! let normalizer = Normalizer::new(lexicon, PipelineConfig::default()).unwrap();
//!
//! let tokens = normalizer.normalize("@Obama loves these #puppies 😍 http://t.co/x").unwrap();
//! assert_eq!(tokens, vec!["USER", "love", "puppi", "EMOT_LOVE", "URL"]);
//! ```

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::contraction::ContractionCharFilter;
use crate::analysis::char_filter::domain_term::DomainTermCharFilter;
use crate::analysis::char_filter::pattern_replace::{PatternReplaceCharFilter, Replacement};
use crate::analysis::char_filter::repetition::RepetitionCharFilter;
use crate::analysis::diagnostic::{Diagnostic, Diagnostics};
use crate::analysis::token::Token;
use crate::analysis::token_filter::ascii_folding::AsciiFoldingFilter;
use crate::analysis::token_filter::emoji::EmojiFilter;
use crate::analysis::token_filter::emoticon::EmoticonFilter;
use crate::analysis::token_filter::lemma::LemmaFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::numeral::NumeralFilter;
use crate::analysis::token_filter::punctuation::PunctuationFilter;
use crate::analysis::token_filter::stem::{
    SnowballStemmer, StemFilter, Stemmer, StemmerAlgorithm,
};
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::social::SocialTokenizer;
use crate::config::{HashtagMode, Language, MentionMode, PipelineConfig, StageKind, UrlMode};
use crate::error::Result;
use crate::lexicon::Lexicon;

/// Output of one normalization call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalized {
    pub tokens: Vec<String>,
    pub diagnostics: Diagnostics,
}

impl Normalized {
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

/// The configured pipeline orchestrator.
///
/// A normalizer is immutable and `Sync`; one instance can serve many threads.
/// Per-document state (emoji counters, diagnostics) lives inside a single
/// call.
#[derive(Clone, Debug)]
pub struct Normalizer {
    lexicon: Arc<Lexicon>,
    config: PipelineConfig,
    analyzer: PipelineAnalyzer,
}

impl Normalizer {
    /// Assemble the pipeline for `config`.
    pub fn new(lexicon: Arc<Lexicon>, config: PipelineConfig) -> Result<Self> {
        let analyzer = build_analyzer(&lexicon, &config, None)?;
        Ok(Normalizer {
            lexicon,
            config,
            analyzer,
        })
    }

    /// A pipeline over the built-in tables.
    pub fn english(config: PipelineConfig) -> Result<Self> {
        Self::new(Arc::new(Lexicon::english()?), config)
    }

    /// Rebuild the pipeline with a caller-supplied stemmer, which takes
    /// precedence over the configured and the language default stemmer.
    pub fn with_stemmer(self, stemmer: Arc<dyn Stemmer>) -> Result<Self> {
        let analyzer = build_analyzer(&self.lexicon, &self.config, Some(stemmer))?;
        Ok(Normalizer { analyzer, ..self })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    pub fn analyzer(&self) -> &PipelineAnalyzer {
        &self.analyzer
    }

    /// Names of the active stages in execution order.
    pub fn stages(&self) -> Vec<&'static str> {
        self.analyzer.stage_names()
    }

    /// Normalize one document into its token texts.
    pub fn normalize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.normalize_with_diagnostics(text)?.tokens)
    }

    /// Normalize one document, keeping the diagnostics it raised.
    pub fn normalize_with_diagnostics(&self, text: &str) -> Result<Normalized> {
        let mut diagnostics = Diagnostics::new();
        let tokens = self
            .analyze(text, &mut diagnostics)?
            .into_iter()
            .map(|token| token.text)
            .collect();

        Ok(Normalized {
            tokens,
            diagnostics,
        })
    }

    /// Normalize one document into full tokens (positions, raw-text offsets
    /// and kinds).
    pub fn analyze(&self, text: &str, diagnostics: &mut Diagnostics) -> Result<Vec<Token>> {
        Ok(self.analyzer.analyze(text, diagnostics)?.collect())
    }

    /// Normalize independent documents in parallel. Results are in input
    /// order; one failing document does not affect the others.
    pub fn normalize_batch<S>(&self, texts: &[S]) -> Vec<Result<Normalized>>
    where
        S: AsRef<str> + Sync,
    {
        debug!("normalizing a batch of {} document(s)", texts.len());
        texts
            .par_iter()
            .map(|text| self.normalize_with_diagnostics(text.as_ref()))
            .collect()
    }
}

fn build_analyzer(
    lexicon: &Arc<Lexicon>,
    config: &PipelineConfig,
    stemmer: Option<Arc<dyn Stemmer>>,
) -> Result<PipelineAnalyzer> {
    let enabled = |stage: StageKind| config.is_enabled(stage);
    let english = config.language == Language::English;

    let tokenizer = SocialTokenizer::new(lexicon.clone())?;
    let mut analyzer = PipelineAnalyzer::new(Arc::new(tokenizer))
        .with_name(format!("socialnorm_{}", config.language));

    if enabled(StageKind::Contractions) && english {
        analyzer = analyzer.add_char_filter(Arc::new(ContractionCharFilter::new(lexicon.clone())));
    }

    if enabled(StageKind::Patterns) {
        for filter in pattern_filters(lexicon, config) {
            analyzer = analyzer.add_char_filter(Arc::new(filter));
        }
    }

    if enabled(StageKind::DomainTerms) {
        for group in lexicon.domain_terms() {
            analyzer = analyzer.add_char_filter(Arc::new(DomainTermCharFilter::new(group.clone())));
        }
    }

    if enabled(StageKind::Repetitions) {
        analyzer = analyzer
            .add_char_filter(Arc::new(RepetitionCharFilter::characters()?))
            .add_char_filter(Arc::new(RepetitionCharFilter::words()?));
    }

    if enabled(StageKind::Punctuation) {
        analyzer = analyzer.add_filter(Arc::new(PunctuationFilter::new()));
    }

    if enabled(StageKind::Emoji) && english {
        analyzer = analyzer
            .add_filter(Arc::new(EmojiFilter::new(lexicon.clone()).with_cap(config.emoji_cap)));
    }

    if enabled(StageKind::Emoticons) && english {
        analyzer = analyzer.add_filter(Arc::new(
            EmoticonFilter::new(lexicon.clone()).with_partial_match(config.emoticon_partial_match),
        ));
    }

    if enabled(StageKind::Lowercase) {
        analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new(lexicon.clone())));
    }

    if enabled(StageKind::AsciiFolding) {
        analyzer = analyzer.add_filter(Arc::new(AsciiFoldingFilter::new()));
    }

    if enabled(StageKind::Numerals) {
        analyzer = analyzer.add_filter(Arc::new(NumeralFilter::new(config.numerals)));
    }

    if enabled(StageKind::Stopwords) {
        if let Some(filter) = StopFilter::select(
            lexicon,
            config.language,
            &config.stopwords,
            config.include_negations,
        ) {
            analyzer = analyzer.add_filter(Arc::new(filter));
        }
    }

    if enabled(StageKind::Lemmatize) && english {
        analyzer = analyzer.add_filter(Arc::new(LemmaFilter::new(lexicon.clone())));
    }

    if enabled(StageKind::Stem) {
        if let Some(stemmer) = stemmer.or_else(|| default_stemmer(config)) {
            analyzer = analyzer.add_filter(Arc::new(StemFilter::with_stemmer(
                lexicon.clone(),
                stemmer,
            )));
        }
    }

    debug!("pipeline stages: {:?}", analyzer.stage_names());
    Ok(analyzer)
}

/// URL, mention and hashtag substitution, in that order. `Keep` adds nothing.
fn pattern_filters(lexicon: &Lexicon, config: &PipelineConfig) -> Vec<PatternReplaceCharFilter> {
    let placeholders = lexicon.placeholders();
    let mut filters = Vec::with_capacity(3);

    let url = match config.url_mode {
        UrlMode::Keep => None,
        UrlMode::Replace => Some(Replacement::Fixed(placeholders.url.clone())),
        UrlMode::Delete => Some(Replacement::Delete),
    };
    if let Some(replacement) = url {
        filters.push(
            PatternReplaceCharFilter::with_regex(lexicon.url_pattern().clone(), replacement)
                .with_name("url"),
        );
    }

    let mention = match config.mention_mode {
        MentionMode::Keep => None,
        MentionMode::Replace => Some(Replacement::Fixed(placeholders.user.clone())),
        MentionMode::Delete => Some(Replacement::Delete),
        MentionMode::ScreenName => Some(Replacement::Bare('@')),
    };
    if let Some(replacement) = mention {
        filters.push(
            PatternReplaceCharFilter::with_regex(lexicon.mention_pattern().clone(), replacement)
                .with_name("mention"),
        );
    }

    let hashtag = match config.hashtag_mode {
        HashtagMode::Keep => None,
        HashtagMode::Replace => Some(Replacement::Bare('#')),
        HashtagMode::Delete => Some(Replacement::Delete),
    };
    if let Some(replacement) = hashtag {
        filters.push(
            PatternReplaceCharFilter::with_regex(lexicon.hashtag_pattern().clone(), replacement)
                .with_name("hashtag"),
        );
    }

    filters
}

fn default_stemmer(config: &PipelineConfig) -> Option<Arc<dyn Stemmer>> {
    let algorithm = config.stemmer.or(match config.language {
        Language::English => Some(StemmerAlgorithm::English),
        Language::French => Some(StemmerAlgorithm::French),
        Language::Other => None,
    })?;
    Some(Arc::new(SnowballStemmer::new(algorithm)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StopwordMode;

    fn lexicon() -> Arc<Lexicon> {
        Arc::new(Lexicon::english().unwrap())
    }

    fn only(stages: &[StageKind]) -> PipelineConfig {
        StageKind::ALL
            .into_iter()
            .filter(|stage| !stages.contains(stage))
            .fold(PipelineConfig::default(), PipelineConfig::disable)
    }

    #[test]
    fn test_stage_order() {
        let normalizer = Normalizer::new(lexicon(), PipelineConfig::default()).unwrap();
        let stages = normalizer.stages();

        let position = |name: &str| stages.iter().position(|s| *s == name).unwrap();
        assert!(position("contraction") < position("url"));
        assert!(position("url") < position("mention"));
        assert!(position("mention") < position("hashtag"));
        assert!(position("hashtag") < position("domain_term"));
        assert!(position("domain_term") < position("repeated_characters"));
        assert!(position("repeated_characters") < position("repeated_words"));
        assert!(position("repeated_words") < position("social"));
        assert!(position("social") < position("punctuation"));
        assert!(position("punctuation") < position("emoji"));
        assert!(position("emoji") < position("emoticon"));
        assert!(position("emoticon") < position("lowercase"));
        assert!(position("lowercase") < position("ascii_folding"));
        assert!(position("ascii_folding") < position("numeral"));
        assert!(position("numeral") < position("stop"));
        assert!(position("stop") < position("lemma"));
        assert!(position("lemma") < position("stem"));
    }

    #[test]
    fn test_disabled_stages_are_absent() {
        let config = PipelineConfig::default()
            .disable(StageKind::Stem)
            .disable(StageKind::Emoji);
        let stages = Normalizer::new(lexicon(), config).unwrap().stages();

        assert!(!stages.contains(&"stem"));
        assert!(!stages.contains(&"emoji"));
        assert!(stages.contains(&"emoticon"));
    }

    #[test]
    fn test_language_gating() {
        let french = Normalizer::new(
            lexicon(),
            PipelineConfig::default().language(Language::French),
        )
        .unwrap()
        .stages();
        for stage in ["contraction", "emoji", "emoticon", "lemma"] {
            assert!(!french.contains(&stage), "{stage} should not run for French");
        }
        assert!(french.contains(&"stop"));
        assert!(french.contains(&"stem"));

        let other = Normalizer::new(
            lexicon(),
            PipelineConfig::default().language(Language::Other),
        )
        .unwrap()
        .stages();
        assert!(!other.contains(&"stop"));
        assert!(!other.contains(&"stem"));
    }

    #[test]
    fn test_keep_modes_add_no_filter() {
        let config = PipelineConfig::default()
            .url_mode(UrlMode::Keep)
            .mention_mode(MentionMode::Keep)
            .hashtag_mode(HashtagMode::Keep);
        let stages = Normalizer::new(lexicon(), config).unwrap().stages();

        assert!(!stages.contains(&"url"));
        assert!(!stages.contains(&"mention"));
        assert!(!stages.contains(&"hashtag"));
    }

    #[test]
    fn test_explicit_stemmer_for_other_language() {
        let config = PipelineConfig::default()
            .language(Language::Other)
            .stemmer(StemmerAlgorithm::English);
        let normalizer = Normalizer::new(lexicon(), config).unwrap();

        assert_eq!(normalizer.normalize("running").unwrap(), vec!["run"]);
    }

    #[test]
    fn test_manual_stopwords_apply_to_any_language() {
        let config = only(&[StageKind::Stopwords])
            .language(Language::Other)
            .stopwords(StopwordMode::Manual(vec!["rt".to_string()]));
        let normalizer = Normalizer::new(lexicon(), config).unwrap();

        assert_eq!(
            normalizer.normalize("rt the news").unwrap(),
            vec!["the", "news"]
        );
    }

    #[test]
    fn test_with_stemmer_takes_precedence() {
        struct Upper;
        impl Stemmer for Upper {
            fn stem(&self, word: &str) -> String {
                word.to_uppercase()
            }
            fn name(&self) -> &'static str {
                "upper"
            }
        }

        let normalizer = Normalizer::new(lexicon(), only(&[StageKind::Stem]))
            .unwrap()
            .with_stemmer(Arc::new(Upper))
            .unwrap();
        assert_eq!(normalizer.normalize("cats sing").unwrap(), vec!["CATS", "SING"]);
    }

    #[test]
    fn test_offsets_point_into_raw_text() {
        let normalizer = Normalizer::new(lexicon(), only(&[StageKind::Patterns])).unwrap();
        let text = "hi @someone look";
        let tokens = normalizer.analyze(text, &mut Diagnostics::new()).unwrap();

        assert_eq!(tokens[1].text, "USER");
        assert_eq!(&text[tokens[1].start_offset..tokens[1].end_offset], "@someone");
        assert_eq!(&text[tokens[2].start_offset..tokens[2].end_offset], "look");
    }
}
