//! Pipeline configuration.
//!
//! Every mode axis is a closed enum. Parsing a mode from a string (CLI
//! flags, JSON) is the only place an undefined value can appear, and it is
//! rejected there with [`NormalizeError::InvalidConfig`].
//!
//! # Examples
//!
//! ```
//! use socialnorm::config::{HashtagMode, MentionMode, PipelineConfig, StageKind};
//!
//! let config = PipelineConfig::default()
//!     .mention_mode("screen_name".parse::<MentionMode>().unwrap())
//!     .hashtag_mode(HashtagMode::Delete)
//!     .emoji_cap(2)
//!     .disable(StageKind::Stem);
//!
//! assert_eq!(config.emoji_cap.map(|cap| cap.get()), Some(2));
//! assert!(!config.is_enabled(StageKind::Stem));
//! assert!(config.is_enabled(StageKind::Lemmatize));
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stem::StemmerAlgorithm;
use crate::error::{NormalizeError, Result};

/// Implements `as_str`, `Display` and case-insensitive `FromStr` for a
/// fieldless enum.
macro_rules! named_enum {
    ($ty:ident, $setting:literal, { $($variant:ident => $name:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = NormalizeError;

            fn from_str(s: &str) -> Result<Self> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name $(| $alias)* => Ok($ty::$variant),)+
                    _ => Err(NormalizeError::invalid_config($setting, s)),
                }
            }
        }
    };
}

/// Language of the posts. Several stages only run for some languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    French,
    Other,
}

named_enum!(Language, "language", {
    English => "english" | "en",
    French => "french" | "fr",
    Other => "other",
});

/// What happens to URLs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlMode {
    Keep,
    /// Substitute the URL placeholder.
    #[default]
    Replace,
    Delete,
}

named_enum!(UrlMode, "url_mode", {
    Keep => "keep",
    Replace => "replace",
    Delete => "delete",
});

/// What happens to user mentions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentionMode {
    Keep,
    /// Substitute the user placeholder.
    #[default]
    Replace,
    Delete,
    /// Strip the `@` and keep the handle.
    ScreenName,
}

named_enum!(MentionMode, "mention_mode", {
    Keep => "keep",
    Replace => "replace",
    Delete => "delete",
    ScreenName => "screen_name" | "screenname",
});

/// What happens to hashtags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashtagMode {
    Keep,
    /// Strip the `#` and keep the tag as a word.
    #[default]
    Replace,
    /// Remove the whole hashtag.
    Delete,
}

named_enum!(HashtagMode, "hashtag_mode", {
    Keep => "keep",
    Replace => "replace",
    Delete => "delete",
});

/// What happens to digit-only tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumeralMode {
    /// Spell the number out ("3" → "three").
    #[default]
    Replace,
    Delete,
}

named_enum!(NumeralMode, "numeral_mode", {
    Replace => "replace",
    Delete => "delete",
});

/// What to do with a token that an emoticon pattern matches only partly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmoticonPartialMatch {
    Keep,
    #[default]
    Drop,
}

named_enum!(EmoticonPartialMatch, "emoticon_partial_match", {
    Keep => "keep",
    Drop => "drop",
});

/// Which stopwords are removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordMode {
    /// The language's standard list.
    #[default]
    Standard,
    /// The standard English list without first/second-person pronouns.
    NoPersonal,
    /// Exactly these words, regardless of language.
    Manual(Vec<String>),
}

impl fmt::Display for StopwordMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopwordMode::Standard => f.write_str("standard"),
            StopwordMode::NoPersonal => f.write_str("no_personal"),
            StopwordMode::Manual(words) => write!(f, "manual:{}", words.join(",")),
        }
    }
}

impl FromStr for StopwordMode {
    type Err = NormalizeError;

    /// `standard`, `no_personal`, or `manual:word,word,...`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Some((head, words)) = trimmed.split_once(':') {
            if head.eq_ignore_ascii_case("manual") {
                let words = words
                    .split(',')
                    .map(str::trim)
                    .filter(|w| !w.is_empty())
                    .map(str::to_string)
                    .collect();
                return Ok(StopwordMode::Manual(words));
            }
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "standard" => Ok(StopwordMode::Standard),
            "no_personal" | "nopersonal" => Ok(StopwordMode::NoPersonal),
            _ => Err(NormalizeError::invalid_config("stopword_mode", s)),
        }
    }
}

/// The stages of the pipeline, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Contractions,
    Patterns,
    DomainTerms,
    Repetitions,
    Punctuation,
    Emoji,
    Emoticons,
    Lowercase,
    AsciiFolding,
    Numerals,
    Stopwords,
    Lemmatize,
    Stem,
}

named_enum!(StageKind, "stage", {
    Contractions => "contractions",
    Patterns => "patterns",
    DomainTerms => "domain_terms",
    Repetitions => "repetitions",
    Punctuation => "punctuation",
    Emoji => "emoji",
    Emoticons => "emoticons",
    Lowercase => "lowercase",
    AsciiFolding => "ascii_folding",
    Numerals => "numerals",
    Stopwords => "stopwords",
    Lemmatize => "lemmatize",
    Stem => "stem",
});

impl StageKind {
    pub const ALL: [StageKind; 13] = [
        StageKind::Contractions,
        StageKind::Patterns,
        StageKind::DomainTerms,
        StageKind::Repetitions,
        StageKind::Punctuation,
        StageKind::Emoji,
        StageKind::Emoticons,
        StageKind::Lowercase,
        StageKind::AsciiFolding,
        StageKind::Numerals,
        StageKind::Stopwords,
        StageKind::Lemmatize,
        StageKind::Stem,
    ];
}

/// All choices governing one pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub language: Language,
    pub url_mode: UrlMode,
    pub mention_mode: MentionMode,
    pub hashtag_mode: HashtagMode,
    /// Per-category limit of emoji labels in one document; `None` is unbounded.
    pub emoji_cap: Option<NonZeroUsize>,
    pub stopwords: StopwordMode,
    /// Keep negations even when they are stopwords.
    pub include_negations: bool,
    pub numerals: NumeralMode,
    /// Explicit stemmer; overrides the language default.
    pub stemmer: Option<StemmerAlgorithm>,
    pub emoticon_partial_match: EmoticonPartialMatch,
    pub disabled_stages: BTreeSet<StageKind>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            language: Language::English,
            url_mode: UrlMode::Replace,
            mention_mode: MentionMode::Replace,
            hashtag_mode: HashtagMode::Replace,
            emoji_cap: None,
            stopwords: StopwordMode::Standard,
            include_negations: false,
            numerals: NumeralMode::Replace,
            stemmer: None,
            emoticon_partial_match: EmoticonPartialMatch::Drop,
            disabled_stages: BTreeSet::new(),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            if e.is_data() {
                NormalizeError::invalid_config("pipeline_config", e.to_string())
            } else {
                NormalizeError::Json(e)
            }
        })
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn url_mode(mut self, mode: UrlMode) -> Self {
        self.url_mode = mode;
        self
    }

    pub fn mention_mode(mut self, mode: MentionMode) -> Self {
        self.mention_mode = mode;
        self
    }

    pub fn hashtag_mode(mut self, mode: HashtagMode) -> Self {
        self.hashtag_mode = mode;
        self
    }

    /// Limit emoji labels per category and document; 0 means unbounded.
    pub fn emoji_cap(mut self, cap: usize) -> Self {
        self.emoji_cap = NonZeroUsize::new(cap);
        self
    }

    pub fn stopwords(mut self, mode: StopwordMode) -> Self {
        self.stopwords = mode;
        self
    }

    /// Keep first/second-person pronouns ("I", "me", "my", ...).
    pub fn include_personal_words(self, include: bool) -> Self {
        self.stopwords(if include {
            StopwordMode::NoPersonal
        } else {
            StopwordMode::Standard
        })
    }

    pub fn include_negations(mut self, include: bool) -> Self {
        self.include_negations = include;
        self
    }

    pub fn numerals(mut self, mode: NumeralMode) -> Self {
        self.numerals = mode;
        self
    }

    pub fn stemmer(mut self, algorithm: StemmerAlgorithm) -> Self {
        self.stemmer = Some(algorithm);
        self
    }

    pub fn emoticon_partial_match(mut self, policy: EmoticonPartialMatch) -> Self {
        self.emoticon_partial_match = policy;
        self
    }

    /// Turn a stage into a passthrough.
    pub fn disable(mut self, stage: StageKind) -> Self {
        self.disabled_stages.insert(stage);
        self
    }

    pub fn enable(mut self, stage: StageKind) -> Self {
        self.disabled_stages.remove(&stage);
        self
    }

    pub fn is_enabled(&self, stage: StageKind) -> bool {
        !self.disabled_stages.contains(&stage)
    }
}
