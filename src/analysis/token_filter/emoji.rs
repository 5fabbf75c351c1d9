//! Emoji to emotion-category substitution.
//!
//! Every token found in the lexicon's emoji table is replaced by its
//! category labels, one token per label, all occupying the emoji's slot.
//! Skin-tone modifiers and the emoji presentation selector are ignored when
//! the exact glyph is not in the table, so 👍🏽 reads as 👍. A token the
//! tokenizer recognised as an emoji that still resolves to no category is
//! dropped and reported as [`Diagnostic::UnmappedEmoji`]. Other tokens pass
//! through unchanged.
//!
//! # Capping
//!
//! With a cap of `n`, each category is emitted at most `n` times per
//! document; later occurrences are dropped. The counters belong to a single
//! [`Filter::filter`] call and start at zero for every document.
//!
//! ```
//! use std::num::NonZeroUsize;
//! use std::sync::Arc;
//!
//! use socialnorm::analysis::diagnostic::Diagnostics;
//! use socialnorm::analysis::token::{Token, TokenKind};
//! use socialnorm::analysis::token_filter::Filter;
//! use socialnorm::analysis::token_filter::emoji::EmojiFilter;
//! use socialnorm::lexicon::Lexicon;
//!
//! let lexicon = Arc::new(Lexicon::builder().emoji("😂", "EMOT_JOY").build().unwrap());
//! let filter = EmojiFilter::new(lexicon).with_cap(NonZeroUsize::new(2));
//!
//! let tokens: Vec<Token> = (0..5)
//!     .map(|i| Token::new("😂", i).with_kind(TokenKind::Emoji))
//!     .collect();
//! let labels: Vec<_> = filter
//!     .filter(Box::new(tokens.into_iter()), &mut Diagnostics::new())
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(labels.len(), 2);
//! assert_eq!(labels[1].position, 1);
//! ```

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::analysis::diagnostic::{Diagnostic, Diagnostics};
use crate::analysis::token::{TokenKind, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::lexicon::resolver::{CategoryResolver, Resolution};
use crate::lexicon::{GlyphTable, Lexicon};

/// Replaces emoji with their emotion-category labels.
#[derive(Clone, Debug)]
pub struct EmojiFilter {
    lexicon: Arc<Lexicon>,
    cap: Option<NonZeroUsize>,
}

impl EmojiFilter {
    /// Create an uncapped emoji filter.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        EmojiFilter { lexicon, cap: None }
    }

    /// Limit how often each category may appear per document.
    pub fn with_cap(mut self, cap: Option<NonZeroUsize>) -> Self {
        self.cap = cap;
        self
    }

    pub fn cap(&self) -> Option<NonZeroUsize> {
        self.cap
    }

    /// The glyph with skin-tone modifiers and U+FE0F removed.
    pub fn strip_modifiers(glyph: &str) -> String {
        glyph
            .chars()
            .filter(|c| !matches!(c, '\u{1F3FB}'..='\u{1F3FF}' | '\u{FE0F}'))
            .collect()
    }

    fn lookup<'a>(resolver: &CategoryResolver<'a>, glyph: &str) -> Option<Resolution<'a>> {
        let emoji_only = |resolution: Resolution<'a>| {
            (resolution.table == GlyphTable::Emoji).then_some(resolution)
        };

        if let Some(resolution) = resolver.lookup(glyph).and_then(emoji_only) {
            return Some(resolution);
        }
        let bare = Self::strip_modifiers(glyph);
        if bare.is_empty() || bare == glyph {
            return None;
        }
        resolver.lookup(&bare).and_then(emoji_only)
    }
}

impl Filter for EmojiFilter {
    fn filter(&self, tokens: TokenStream, diagnostics: &mut Diagnostics) -> Result<TokenStream> {
        let resolver = self.lexicon.resolver();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut filtered_tokens = Vec::new();

        for token in tokens {
            let resolution = match Self::lookup(&resolver, &token.text) {
                Some(resolution) => resolution,
                // Emoticon-table glyphs are left to the emoticon stage.
                None if token.kind == TokenKind::Emoji && resolver.lookup(&token.text).is_none() => {
                    diagnostics.push(Diagnostic::UnmappedEmoji {
                        glyph: token.text.clone(),
                    });
                    continue;
                }
                None => {
                    filtered_tokens.push(token);
                    continue;
                }
            };

            if resolution.is_unmapped() {
                diagnostics.push(Diagnostic::UnmappedEmoji {
                    glyph: token.text.clone(),
                });
                continue;
            }

            for label in resolution.labels {
                let count = counts.entry(label).or_insert(0);
                *count += 1;
                if self.cap.is_none_or(|cap| *count <= cap.get()) {
                    filtered_tokens.push(token.derive(label, TokenKind::Category));
                }
            }
        }

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "emoji"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn lexicon() -> Arc<Lexicon> {
        Arc::new(
            Lexicon::builder()
                .emoji("😂", "EMOT_JOY")
                .emoji("😱", "EMOT_SURPRISE EMOT_FEAR")
                .emoji("🙀", "EMOT_SURPRISE EMOT_FEAR")
                .emoji("🍕", "")
                .emoticon(":)", "EMOT_JOY")
                .build()
                .unwrap(),
        )
    }

    fn emoji(text: &str, position: usize) -> Token {
        Token::new(text, position).with_kind(TokenKind::Emoji)
    }

    fn run(filter: &EmojiFilter, tokens: Vec<Token>) -> (Vec<Token>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let result = filter
            .filter(Box::new(tokens.into_iter()), &mut diagnostics)
            .unwrap()
            .collect();
        (result, diagnostics)
    }

    #[test]
    fn test_replace_emoji() {
        let filter = EmojiFilter::new(lexicon());
        let (result, diagnostics) = run(
            &filter,
            vec![Token::new("so", 0), emoji("😂", 1), Token::new(":)", 2)],
        );

        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["so", "EMOT_JOY", ":)"]);
        assert_eq!(result[1].kind, TokenKind::Category);
        assert_eq!(result[1].position, 1);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_multi_label_emoji() {
        let filter = EmojiFilter::new(lexicon());
        let (result, _) = run(&filter, vec![emoji("😱", 0)]);

        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["EMOT_SURPRISE", "EMOT_FEAR"]);
        assert!(result.iter().all(|t| t.position == 0));
    }

    #[test]
    fn test_unmapped_emoji_is_dropped_and_reported() {
        let filter = EmojiFilter::new(lexicon());
        let (result, diagnostics) = run(&filter, vec![emoji("🍕", 0), Token::new("yum", 1)]);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "yum");
        assert_eq!(
            diagnostics.into_vec(),
            vec![Diagnostic::UnmappedEmoji {
                glyph: "🍕".to_string()
            }]
        );
    }

    #[test]
    fn test_unknown_emoji_is_dropped_and_reported() {
        let filter = EmojiFilter::new(lexicon());
        let (result, diagnostics) = run(
            &filter,
            vec![Token::new("great", 0), emoji("🔥", 1), emoji("🦄", 2)],
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "great");
        assert_eq!(
            diagnostics.into_vec(),
            vec![
                Diagnostic::UnmappedEmoji {
                    glyph: "🔥".to_string()
                },
                Diagnostic::UnmappedEmoji {
                    glyph: "🦄".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_unknown_word_token_passes_through() {
        let filter = EmojiFilter::new(lexicon());
        let (result, diagnostics) = run(&filter, vec![Token::new("🦄", 0)]);
        assert_eq!(result[0].text, "🦄");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_skin_tone_falls_back_to_base_glyph() {
        let lexicon = Arc::new(
            Lexicon::builder()
                .emoji("👍", "EMOT_JOY")
                .emoji("❤", "EMOT_LOVE")
                .build()
                .unwrap(),
        );
        let filter = EmojiFilter::new(lexicon);
        let (result, diagnostics) = run(
            &filter,
            vec![emoji("👍🏽", 0), emoji("❤\u{fe0f}", 1), emoji("👍🏿", 2)],
        );

        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["EMOT_JOY", "EMOT_LOVE", "EMOT_JOY"]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_strip_modifiers() {
        assert_eq!(EmojiFilter::strip_modifiers("👍🏽"), "👍");
        assert_eq!(EmojiFilter::strip_modifiers("❤\u{fe0f}"), "❤");
        assert_eq!(EmojiFilter::strip_modifiers("😂"), "😂");
    }

    #[test]
    fn test_cap_keeps_first_occurrences() {
        let filter = EmojiFilter::new(lexicon()).with_cap(NonZeroUsize::new(2));
        let tokens = vec![
            emoji("😂", 0),
            Token::new("a", 1),
            emoji("😂", 2),
            emoji("😂", 3),
            Token::new("b", 4),
            emoji("😂", 5),
            emoji("😂", 6),
        ];
        let (result, _) = run(&filter, tokens);

        let joy: Vec<usize> = result
            .iter()
            .filter(|t| t.text == "EMOT_JOY")
            .map(|t| t.position)
            .collect();
        assert_eq!(joy, vec![0, 2]);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_cap_counts_each_category() {
        let filter = EmojiFilter::new(lexicon()).with_cap(NonZeroUsize::new(1));
        let (result, _) = run(&filter, vec![emoji("😱", 0), emoji("🙀", 1), emoji("😂", 2)]);

        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["EMOT_SURPRISE", "EMOT_FEAR", "EMOT_JOY"]);
    }

    #[test]
    fn test_counters_reset_per_call() {
        let filter = EmojiFilter::new(lexicon()).with_cap(NonZeroUsize::new(1));
        for _ in 0..3 {
            let (result, _) = run(&filter, vec![emoji("😂", 0), emoji("😂", 1)]);
            assert_eq!(result.len(), 1);
        }
    }
}
