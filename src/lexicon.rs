//! Read-only lookup tables consumed by the normalization stages.
//!
//! A [`Lexicon`] bundles every static table the pipeline needs: the
//! contraction map, the URL/mention/hashtag patterns, the domain-term
//! groups, the emoji and emoticon category tables, the stopword lists and the
//! closed set of constant tokens. It is built once through a
//! [`LexiconBuilder`], never mutated afterwards, and shared between
//! pipelines and threads behind an `Arc`.
//!
//! # Examples
//!
//! ```
//! use socialnorm::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::builder()
//!     .emoji("😂", "EMOT_JOY")
//!     .emoticon(":-)", "EMOT_JOY")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(lexicon.resolve("😂"), vec!["EMOT_JOY"]);
//! assert!(lexicon.is_constant("EMOT_JOY"));
//! assert!(lexicon.is_constant("URL"));
//! ```

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{NormalizeError, Result};

pub mod defaults;
pub mod resolver;
pub mod source;

pub use resolver::{CategoryResolver, GlyphTable, Resolution};
pub use source::LexiconSource;

/// Default pattern for URLs.
pub const DEFAULT_URL_PATTERN: &str = r"http\S+";
/// Default pattern for user mentions.
pub const DEFAULT_MENTION_PATTERN: &str = r"@[\w_]+";
/// Default pattern for hashtags. Group 1 is the tag without `#`.
pub const DEFAULT_HASHTAG_PATTERN: &str = r"#(\w+)";

/// Named stopword lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordList {
    /// Standard English list
    English,
    /// English list without first/second-person pronouns
    EnglishNoPersonal,
    /// Social-media additions applied on top of either English list
    Custom,
    /// French list
    French,
}

/// Placeholder constant tokens inserted by the pattern substitution stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    pub url: String,
    pub user: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Placeholders {
            url: "URL".to_string(),
            user: "USER".to_string(),
        }
    }
}

/// A synonym group folded to one canonical surface form.
#[derive(Clone, Debug)]
pub struct DomainTermGroup {
    canonical: String,
    variants: Vec<String>,
    pattern: Regex,
}

impl DomainTermGroup {
    /// Build a group matching any of `variants`, case-insensitively.
    pub fn new<C, I, S>(canonical: C, variants: I) -> Result<Self>
    where
        C: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let canonical = canonical.into();
        if canonical.is_empty() {
            return Err(NormalizeError::lexicon("domain term canonical form is empty"));
        }

        let variants: Vec<String> = variants
            .into_iter()
            .map(Into::into)
            .filter(|v: &String| !v.is_empty())
            .collect();
        if variants.is_empty() {
            return Err(NormalizeError::lexicon(format!(
                "domain term {canonical:?} has no variants"
            )));
        }

        let pattern = Regex::new(&format!("(?i){}", alternation(&variants)))?;
        Ok(DomainTermGroup {
            canonical,
            variants,
            pattern,
        })
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

/// The immutable table bundle shared by every stage.
#[derive(Clone)]
pub struct Lexicon {
    contractions: HashMap<String, String>,
    contraction_pattern: Option<fancy_regex::Regex>,
    url_pattern: Regex,
    mention_pattern: Regex,
    hashtag_pattern: Regex,
    domain_terms: Vec<DomainTermGroup>,
    emoji: HashMap<String, String>,
    emoticons: HashMap<String, String>,
    emoticons_folded: HashMap<String, String>,
    emoticon_pattern: Option<Regex>,
    stopwords: HashMap<StopwordList, HashSet<String>>,
    negations: HashSet<String>,
    placeholders: Placeholders,
    categories: BTreeSet<String>,
    constants: HashSet<String>,
}

impl Lexicon {
    /// Start building a lexicon from empty tables.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::new()
    }

    /// The built-in English/French tables.
    pub fn english() -> Result<Self> {
        defaults::builder().build()
    }

    /// Expanded form of a contraction, looked up case-insensitively.
    pub fn contraction(&self, key: &str) -> Option<&str> {
        self.contractions
            .get(&normalize_apostrophes(&key.to_lowercase()))
            .map(String::as_str)
    }

    pub fn contraction_pattern(&self) -> Option<&fancy_regex::Regex> {
        self.contraction_pattern.as_ref()
    }

    pub fn url_pattern(&self) -> &Regex {
        &self.url_pattern
    }

    pub fn mention_pattern(&self) -> &Regex {
        &self.mention_pattern
    }

    pub fn hashtag_pattern(&self) -> &Regex {
        &self.hashtag_pattern
    }

    pub fn domain_terms(&self) -> &[DomainTermGroup] {
        &self.domain_terms
    }

    /// Raw (space-separated) label string for an emoji glyph.
    pub fn emoji_labels(&self, glyph: &str) -> Option<&str> {
        self.emoji.get(glyph).map(String::as_str)
    }

    /// Raw label string for an emoticon, trying an exact then a
    /// case-insensitive match.
    pub fn emoticon_labels(&self, glyph: &str) -> Option<&str> {
        self.emoticons
            .get(glyph)
            .or_else(|| self.emoticons_folded.get(&glyph.to_lowercase()))
            .map(String::as_str)
    }

    pub fn is_emoji(&self, glyph: &str) -> bool {
        self.emoji.contains_key(glyph)
    }

    /// Case-insensitive pattern matching any known emoticon.
    pub fn emoticon_pattern(&self) -> Option<&Regex> {
        self.emoticon_pattern.as_ref()
    }

    /// Known emoticon glyphs.
    pub fn emoticons(&self) -> impl Iterator<Item = &str> {
        self.emoticons.keys().map(String::as_str)
    }

    pub fn stopwords(&self, list: StopwordList) -> Option<&HashSet<String>> {
        self.stopwords.get(&list)
    }

    pub fn negations(&self) -> &HashSet<String> {
        &self.negations
    }

    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    /// All known emotion-category labels.
    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// Whether `token` is a constant token that stages must leave untouched.
    pub fn is_constant(&self, token: &str) -> bool {
        self.constants.contains(token)
    }

    pub fn constants(&self) -> &HashSet<String> {
        &self.constants
    }

    /// Resolver over the emoji and emoticon tables.
    pub fn resolver(&self) -> CategoryResolver<'_> {
        CategoryResolver::new(self)
    }

    /// Category labels of a glyph; empty when unmapped.
    pub fn resolve(&self, glyph: &str) -> Vec<&str> {
        self.resolver().resolve(glyph)
    }
}

impl fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexicon")
            .field("contractions", &self.contractions.len())
            .field("domain_terms", &self.domain_terms.len())
            .field("emoji", &self.emoji.len())
            .field("emoticons", &self.emoticons.len())
            .field(
                "stopwords",
                &self
                    .stopwords
                    .iter()
                    .map(|(list, words)| (*list, words.len()))
                    .collect::<std::collections::BTreeMap<_, _>>(),
            )
            .field("categories", &self.categories)
            .field("placeholders", &self.placeholders)
            .finish()
    }
}

/// Builder for [`Lexicon`].
///
/// Patterns are compiled and the constant-token set is derived in
/// [`build`](LexiconBuilder::build).
#[derive(Clone, Debug)]
pub struct LexiconBuilder {
    contractions: HashMap<String, String>,
    url_pattern: String,
    mention_pattern: String,
    hashtag_pattern: String,
    domain_terms: Vec<(String, Vec<String>)>,
    emoji: HashMap<String, String>,
    emoticons: HashMap<String, String>,
    stopwords: HashMap<StopwordList, HashSet<String>>,
    negations: HashSet<String>,
    placeholders: Placeholders,
    categories: BTreeSet<String>,
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconBuilder {
    /// Empty tables with the default URL/mention/hashtag patterns.
    pub fn new() -> Self {
        LexiconBuilder {
            contractions: HashMap::new(),
            url_pattern: DEFAULT_URL_PATTERN.to_string(),
            mention_pattern: DEFAULT_MENTION_PATTERN.to_string(),
            hashtag_pattern: DEFAULT_HASHTAG_PATTERN.to_string(),
            domain_terms: Vec::new(),
            emoji: HashMap::new(),
            emoticons: HashMap::new(),
            stopwords: HashMap::new(),
            negations: HashSet::new(),
            placeholders: Placeholders::default(),
            categories: BTreeSet::new(),
        }
    }

    pub fn contraction<K: Into<String>, V: Into<String>>(mut self, key: K, expansion: V) -> Self {
        let key = normalize_apostrophes(&key.into().to_lowercase());
        self.contractions.insert(key, expansion.into());
        self
    }

    pub fn contractions<I, K, V>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        entries
            .into_iter()
            .fold(self, |builder, (k, v)| builder.contraction(k, v))
    }

    pub fn url_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.url_pattern = pattern.into();
        self
    }

    pub fn mention_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.mention_pattern = pattern.into();
        self
    }

    /// Hashtag pattern; capture group 1, when present, is the bare tag.
    pub fn hashtag_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.hashtag_pattern = pattern.into();
        self
    }

    /// Add a domain-term group. Groups apply in the order they are added.
    pub fn domain_term<C, I, S>(mut self, canonical: C, variants: I) -> Self
    where
        C: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domain_terms.push((
            canonical.into(),
            variants.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Map an emoji glyph to space-separated category labels (may be empty).
    pub fn emoji<G: Into<String>, L: Into<String>>(mut self, glyph: G, labels: L) -> Self {
        self.emoji.insert(glyph.into(), labels.into());
        self
    }

    /// Map an emoticon glyph to space-separated category labels (may be empty).
    pub fn emoticon<G: Into<String>, L: Into<String>>(mut self, glyph: G, labels: L) -> Self {
        self.emoticons.insert(glyph.into(), labels.into());
        self
    }

    /// Replace the contents of one stopword list.
    pub fn stopwords<I, S>(mut self, list: StopwordList, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords
            .insert(list, words.into_iter().map(Into::into).collect());
        self
    }

    pub fn negations<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.negations = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn placeholders(mut self, placeholders: Placeholders) -> Self {
        self.placeholders = placeholders;
        self
    }

    /// Declare an emotion category even if no glyph maps to it yet.
    pub fn category<S: Into<String>>(mut self, label: S) -> Self {
        self.categories.insert(label.into());
        self
    }

    /// Compile patterns and freeze the tables.
    pub fn build(self) -> Result<Lexicon> {
        let contraction_pattern = if self.contractions.is_empty() {
            None
        } else {
            let keys: Vec<String> = self.contractions.keys().cloned().collect();
            let body = sorted_longest_first(&keys)
                .iter()
                .map(|key| regex::escape(key).replace('\'', "['’]"))
                .collect::<Vec<_>>()
                .join("|");
            Some(fancy_regex::Regex::new(&format!(
                r"(?i)(?<![\w'’])(?:{body})(?![\w'’])"
            ))?)
        };

        let domain_terms = self
            .domain_terms
            .into_iter()
            .map(|(canonical, variants)| DomainTermGroup::new(canonical, variants))
            .collect::<Result<Vec<_>>>()?;

        let emoticon_pattern = if self.emoticons.is_empty() {
            None
        } else {
            let keys: Vec<String> = self.emoticons.keys().cloned().collect();
            Some(Regex::new(&format!("(?i){}", emoticon_alternation(&keys)))?)
        };

        let emoticons_folded = self
            .emoticons
            .iter()
            .map(|(glyph, labels)| (glyph.to_lowercase(), labels.clone()))
            .collect();

        let mut categories = self.categories;
        for labels in self.emoji.values().chain(self.emoticons.values()) {
            categories.extend(labels.split_whitespace().map(str::to_string));
        }

        let mut constants: HashSet<String> = categories.iter().cloned().collect();
        constants.insert(self.placeholders.url.clone());
        constants.insert(self.placeholders.user.clone());

        Ok(Lexicon {
            contractions: self.contractions,
            contraction_pattern,
            url_pattern: Regex::new(&self.url_pattern)?,
            mention_pattern: Regex::new(&self.mention_pattern)?,
            hashtag_pattern: Regex::new(&self.hashtag_pattern)?,
            domain_terms,
            emoji: self.emoji,
            emoticons: self.emoticons,
            emoticons_folded,
            emoticon_pattern,
            stopwords: self.stopwords,
            negations: self.negations,
            placeholders: self.placeholders,
            categories,
            constants,
        })
    }
}

/// Map typographic apostrophes to ASCII ones.
pub(crate) fn normalize_apostrophes(text: &str) -> String {
    text.replace('’', "'")
}

fn sorted_longest_first(items: &[String]) -> Vec<&String> {
    let mut sorted: Vec<&String> = items.iter().collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    sorted
}

/// Escaped alternation of literals, longest first so that prefixes never win.
fn alternation(items: &[String]) -> String {
    let body = sorted_longest_first(items)
        .iter()
        .map(|item| regex::escape(item))
        .collect::<Vec<_>>()
        .join("|");
    format!("(?:{body})")
}

/// Like [`alternation`], but emoticons that begin or end with a word
/// character must sit on a word boundary there, so `xD` never matches
/// inside `xDrive`.
pub(crate) fn emoticon_alternation<S: AsRef<str>>(items: &[S]) -> String {
    let owned: Vec<String> = items.iter().map(|s| s.as_ref().to_string()).collect();
    let body = sorted_longest_first(&owned)
        .iter()
        .map(|item| {
            let is_word = |c: char| c.is_alphanumeric() || c == '_';
            let mut part = String::new();
            if item.chars().next().is_some_and(is_word) {
                part.push_str(r"\b");
            }
            part.push_str(&regex::escape(item));
            if item.chars().last().is_some_and(is_word) {
                part.push_str(r"\b");
            }
            part
        })
        .collect::<Vec<_>>()
        .join("|");
    format!("(?:{body})")
}
