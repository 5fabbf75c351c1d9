//! Punctuation filter implementation.

use crate::analysis::diagnostic::Diagnostics;
use crate::analysis::token::{Token, TokenKind, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Ellipses and whitespace leftovers that are dropped like punctuation.
const ARTIFACTS: &[&str] = &["...", "…", "..", "\n", "\t", " ", ""];

/// A filter that drops punctuation tokens.
///
/// A token is dropped when the tokenizer classified it as punctuation, when
/// it consists only of ASCII punctuation, or when it is one of the ellipsis
/// and whitespace artifacts. Emoji and emoticons are always kept, even
/// though emoticons are made of punctuation characters.
#[derive(Clone, Debug, Default)]
pub struct PunctuationFilter;

impl PunctuationFilter {
    pub fn new() -> Self {
        PunctuationFilter
    }

    /// Whether the token would be dropped.
    pub fn is_punctuation(token: &Token) -> bool {
        if token.is_glyph() {
            return false;
        }

        token.kind == TokenKind::Punctuation
            || ARTIFACTS.contains(&token.text.as_str())
            || token.text.chars().all(|c| c.is_ascii_punctuation())
    }
}

impl Filter for PunctuationFilter {
    fn filter(&self, tokens: TokenStream, _diagnostics: &mut Diagnostics) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .filter(|token| !Self::is_punctuation(token))
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tokens: Vec<Token>) -> Vec<String> {
        PunctuationFilter::new()
            .filter(Box::new(tokens.into_iter()), &mut Diagnostics::new())
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_drop_punctuation() {
        let tokens = vec![
            Token::new("helpful", 0).with_kind(TokenKind::Word),
            Token::new("!", 1).with_kind(TokenKind::Punctuation),
            Token::new(",", 2),
            Token::new("…", 3),
            Token::new("«", 4).with_kind(TokenKind::Punctuation),
            Token::new("URL", 5),
        ];

        assert_eq!(run(tokens), vec!["helpful", "URL"]);
    }

    #[test]
    fn test_keep_glyphs() {
        let tokens = vec![
            Token::new(":-)", 0).with_kind(TokenKind::Emoticon),
            Token::new(":-)", 1),
            Token::new("😂", 2).with_kind(TokenKind::Emoji),
        ];

        assert_eq!(run(tokens), vec![":-)", "😂"]);
    }
}
