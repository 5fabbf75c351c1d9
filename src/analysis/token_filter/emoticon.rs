//! Emoticon to emotion-category substitution.
//!
//! Each token is searched for the lexicon's emoticon pattern:
//!
//! - no match: the token is kept, unless the tokenizer already flagged it as
//!   an emoticon, in which case it is an unknown emoticon and is dropped;
//! - the match covers the whole token: the token is replaced by its category
//!   labels, or dropped with a diagnostic when it has none;
//! - the match covers only part of the token: a token the tokenizer flagged
//!   as an emoticon is an unknown emoticon and is dropped; for any other
//!   token the [`EmoticonPartialMatch`] policy decides (dropped by default).

use std::sync::Arc;

use crate::analysis::diagnostic::{Diagnostic, Diagnostics};
use crate::analysis::token::{Token, TokenKind, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::config::EmoticonPartialMatch;
use crate::error::Result;
use crate::lexicon::Lexicon;

/// Replaces emoticons with their emotion-category labels.
#[derive(Clone, Debug)]
pub struct EmoticonFilter {
    lexicon: Arc<Lexicon>,
    partial_match: EmoticonPartialMatch,
}

impl EmoticonFilter {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        EmoticonFilter {
            lexicon,
            partial_match: EmoticonPartialMatch::default(),
        }
    }

    pub fn with_partial_match(mut self, policy: EmoticonPartialMatch) -> Self {
        self.partial_match = policy;
        self
    }

    fn is_exempt(&self, token: &Token) -> bool {
        matches!(token.kind, TokenKind::Category | TokenKind::Url)
            || self.lexicon.is_constant(&token.text)
    }

    fn unresolved(token: Token, matched: &str, diagnostics: &mut Diagnostics) {
        diagnostics.push(Diagnostic::UnresolvedEmoticon {
            token: token.text,
            matched: matched.to_string(),
        });
    }
}

impl Filter for EmoticonFilter {
    fn filter(&self, tokens: TokenStream, diagnostics: &mut Diagnostics) -> Result<TokenStream> {
        let Some(pattern) = self.lexicon.emoticon_pattern() else {
            return Ok(tokens);
        };
        let resolver = self.lexicon.resolver();
        let mut filtered_tokens = Vec::new();

        for token in tokens {
            if self.is_exempt(&token) {
                filtered_tokens.push(token);
                continue;
            }

            let Some(found) = pattern.find(&token.text) else {
                if token.kind == TokenKind::Emoticon {
                    let text = token.text.clone();
                    Self::unresolved(token, &text, diagnostics);
                } else {
                    filtered_tokens.push(token);
                }
                continue;
            };
            let matched = found.as_str();

            if found.len() != token.text.len() {
                if token.kind == TokenKind::Emoticon {
                    let matched = matched.to_string();
                    Self::unresolved(token, &matched, diagnostics);
                    continue;
                }
                match self.partial_match {
                    EmoticonPartialMatch::Keep => filtered_tokens.push(token),
                    EmoticonPartialMatch::Drop => diagnostics.push(Diagnostic::PartialEmoticonMatch {
                        token: token.text.clone(),
                        matched: matched.to_string(),
                    }),
                }
                continue;
            }

            let labels = resolver.resolve(matched);
            if labels.is_empty() {
                let matched = matched.to_string();
                Self::unresolved(token, &matched, diagnostics);
                continue;
            }

            filtered_tokens.extend(
                labels
                    .into_iter()
                    .map(|label| token.derive(label, TokenKind::Category)),
            );
        }

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "emoticon"
    }
}
