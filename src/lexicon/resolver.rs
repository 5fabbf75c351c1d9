//! Emoji/emoticon category resolution.
//!
//! A glyph is looked up in the emoji table first and in the emoticon table
//! second. Table values hold zero or more space-separated labels, so a single
//! glyph such as 😱 can resolve to both `EMOT_SURPRISE` and `EMOT_FEAR`.
//!
//! # Examples
//!
//! ```
//! use socialnorm::lexicon::{GlyphTable, Lexicon};
//!
//! let lexicon = Lexicon::builder()
//!     .emoji("😱", "EMOT_SURPRISE EMOT_FEAR")
//!     .build()
//!     .unwrap();
//! let resolver = lexicon.resolver();
//!
//! let resolution = resolver.lookup("😱").unwrap();
//! assert_eq!(resolution.table, GlyphTable::Emoji);
//! assert_eq!(resolution.labels, vec!["EMOT_SURPRISE", "EMOT_FEAR"]);
//! assert!(resolver.resolve("🙃").is_empty());
//! ```

use serde::{Deserialize, Serialize};

use super::Lexicon;

/// Which table a glyph was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphTable {
    Emoji,
    Emoticon,
}

/// The outcome of looking up a known glyph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution<'a> {
    pub table: GlyphTable,
    /// Labels in table order, without duplicates. Empty when the glyph is
    /// known but carries no category.
    pub labels: Vec<&'a str>,
}

impl Resolution<'_> {
    pub fn is_unmapped(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Resolves glyphs against a [`Lexicon`]. Stateless and cheap to create.
#[derive(Clone, Copy, Debug)]
pub struct CategoryResolver<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> CategoryResolver<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        CategoryResolver { lexicon }
    }

    /// Look a glyph up, reporting which table knew it.
    ///
    /// Returns `None` when neither table contains the glyph.
    pub fn lookup(&self, glyph: &str) -> Option<Resolution<'a>> {
        if let Some(raw) = self.lexicon.emoji_labels(glyph) {
            return Some(Resolution {
                table: GlyphTable::Emoji,
                labels: split_labels(raw),
            });
        }

        self.lexicon
            .emoticon_labels(glyph)
            .map(|raw| Resolution {
                table: GlyphTable::Emoticon,
                labels: split_labels(raw),
            })
    }

    /// Category labels of `glyph`; empty when unknown or unmapped.
    pub fn resolve(&self, glyph: &str) -> Vec<&'a str> {
        self.lookup(glyph)
            .map(|resolution| resolution.labels)
            .unwrap_or_default()
    }
}

fn split_labels(raw: &str) -> Vec<&str> {
    let mut labels: Vec<&str> = Vec::new();
    for label in raw.split_whitespace() {
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}
