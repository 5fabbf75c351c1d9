//! Loading lookup tables from JSON.
//!
//! ```json
//! {
//!   "extend_defaults": true,
//!   "emoji": { "🥳": "EMOT_JOY" },
//!   "stopwords": { "custom": ["rt", "amp"] },
//!   "domain_terms": [ { "canonical": "mecfs", "variants": ["me/cfs", "me cfs"] } ]
//! }
//! ```
//!
//! With `extend_defaults` (the default) the entries are laid over the
//! built-in tables: map entries are added or replaced, a listed stopword
//! list replaces the built-in list of the same name and domain-term groups
//! are appended after the built-in ones.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Lexicon, LexiconBuilder, Placeholders, StopwordList, defaults};
use crate::error::Result;

/// A domain-term group as written in a lexicon file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainTermSource {
    pub canonical: String,
    pub variants: Vec<String>,
}

/// Pattern overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSource {
    pub url: Option<String>,
    pub mention: Option<String>,
    pub hashtag: Option<String>,
}

/// Serializable description of a [`Lexicon`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconSource {
    /// Start from the built-in tables instead of empty ones.
    pub extend_defaults: bool,
    pub contractions: BTreeMap<String, String>,
    pub emoji: BTreeMap<String, String>,
    pub emoticons: BTreeMap<String, String>,
    pub stopwords: BTreeMap<StopwordList, Vec<String>>,
    pub negations: Option<Vec<String>>,
    pub domain_terms: Vec<DomainTermSource>,
    pub categories: BTreeSet<String>,
    pub patterns: PatternSource,
    pub placeholders: Option<Placeholders>,
}

impl Default for LexiconSource {
    fn default() -> Self {
        LexiconSource {
            extend_defaults: true,
            contractions: BTreeMap::new(),
            emoji: BTreeMap::new(),
            emoticons: BTreeMap::new(),
            stopwords: BTreeMap::new(),
            negations: None,
            domain_terms: Vec::new(),
            categories: BTreeSet::new(),
            patterns: PatternSource::default(),
            placeholders: None,
        }
    }
}

impl LexiconSource {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Turn the description into a builder.
    pub fn into_builder(self) -> LexiconBuilder {
        let mut builder = if self.extend_defaults {
            defaults::builder()
        } else {
            LexiconBuilder::new()
        };

        builder = builder.contractions(self.contractions);
        for (glyph, labels) in self.emoji {
            builder = builder.emoji(glyph, labels);
        }
        for (glyph, labels) in self.emoticons {
            builder = builder.emoticon(glyph, labels);
        }
        for (list, words) in self.stopwords {
            builder = builder.stopwords(list, words);
        }
        if let Some(negations) = self.negations {
            builder = builder.negations(negations);
        }
        for group in self.domain_terms {
            builder = builder.domain_term(group.canonical, group.variants);
        }
        for label in self.categories {
            builder = builder.category(label);
        }
        if let Some(url) = self.patterns.url {
            builder = builder.url_pattern(url);
        }
        if let Some(mention) = self.patterns.mention {
            builder = builder.mention_pattern(mention);
        }
        if let Some(hashtag) = self.patterns.hashtag {
            builder = builder.hashtag_pattern(hashtag);
        }
        if let Some(placeholders) = self.placeholders {
            builder = builder.placeholders(placeholders);
        }

        builder
    }

    pub fn build(self) -> Result<Lexicon> {
        self.into_builder().build()
    }
}

impl Lexicon {
    /// Parse a lexicon description from JSON and build it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        LexiconSource::from_json_str(json)?.build()
    }

    /// Read a lexicon description from a JSON file and build it.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        LexiconSource::from_json_file(path)?.build()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::NormalizeError;

    #[test]
    fn test_extend_defaults() {
        let lexicon = Lexicon::from_json_str(
            r#"{
                "emoji": { "🥳": "EMOT_JOY" },
                "stopwords": { "custom": ["rt"] }
            }"#,
        )
        .unwrap();

        assert_eq!(lexicon.resolve("🥳"), vec!["EMOT_JOY"]);
        assert_eq!(lexicon.resolve("😂"), vec!["EMOT_JOY"]);
        assert_eq!(lexicon.stopwords(StopwordList::Custom).unwrap().len(), 1);
        assert!(lexicon.stopwords(StopwordList::English).unwrap().contains("the"));
    }

    #[test]
    fn test_standalone_tables() {
        let lexicon = Lexicon::from_json_str(
            r#"{
                "extend_defaults": false,
                "emoticons": { ":)": "HAPPY" },
                "placeholders": { "url": "<url>", "user": "<user>" },
                "domain_terms": [ { "canonical": "mecfs", "variants": ["me/cfs"] } ]
            }"#,
        )
        .unwrap();

        assert!(lexicon.resolve("😂").is_empty());
        assert_eq!(lexicon.resolve(":)"), vec!["HAPPY"]);
        assert!(lexicon.is_constant("HAPPY"));
        assert!(lexicon.is_constant("<url>"));
        assert_eq!(lexicon.domain_terms().len(), 1);
        assert!(lexicon.stopwords(StopwordList::English).is_none());
    }

    #[test]
    fn test_invalid_pattern() {
        let result = Lexicon::from_json_str(r#"{ "patterns": { "url": "(" } }"#);
        assert!(matches!(result, Err(NormalizeError::Regex(_))));
    }

    #[test]
    fn test_unknown_stopword_list() {
        let result = Lexicon::from_json_str(r#"{ "stopwords": { "klingon": [] } }"#);
        assert!(matches!(result, Err(NormalizeError::Json(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "contractions": {{ "y'all": "you all" }} }}"#).unwrap();

        let lexicon = Lexicon::from_json_file(file.path()).unwrap();
        assert_eq!(lexicon.contraction("y'all"), Some("you all"));
        assert_eq!(lexicon.contraction("can't"), Some("cannot"));
    }
}
