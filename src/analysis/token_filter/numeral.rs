//! Numeral filter implementation.

use log::warn;

use crate::analysis::diagnostic::Diagnostics;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::config::NumeralMode;
use crate::error::Result;

/// Spells out or removes tokens made only of ASCII digits.
///
/// In [`NumeralMode::Replace`] "42" becomes "forty-two"; numbers too large
/// to spell out are kept as digits. In [`NumeralMode::Delete`] digit-only
/// tokens are dropped. Tokens with separators ("3.5", "10:30") or letters
/// ("3rd") are never touched.
#[derive(Clone, Debug, Default)]
pub struct NumeralFilter {
    mode: NumeralMode,
}

impl NumeralFilter {
    pub fn new(mode: NumeralMode) -> Self {
        NumeralFilter { mode }
    }

    pub fn mode(&self) -> NumeralMode {
        self.mode
    }

    fn is_numeral(token: &Token) -> bool {
        !token.text.is_empty() && token.text.bytes().all(|b| b.is_ascii_digit())
    }

    fn spell(token: Token) -> Token {
        match num2en::str_to_words(&token.text) {
            Ok(words) => token.with_text(words),
            Err(err) => {
                warn!("cannot spell out {:?}: {err:?}", token.text);
                token
            }
        }
    }
}

impl Filter for NumeralFilter {
    fn filter(&self, tokens: TokenStream, _diagnostics: &mut Diagnostics) -> Result<TokenStream> {
        let filtered_tokens = match self.mode {
            NumeralMode::Replace => tokens
                .map(|token| {
                    if Self::is_numeral(&token) {
                        Self::spell(token)
                    } else {
                        token
                    }
                })
                .collect::<Vec<_>>(),
            NumeralMode::Delete => tokens
                .filter(|token| !Self::is_numeral(token))
                .collect::<Vec<_>>(),
        };

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "numeral"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mode: NumeralMode, words: &[&str]) -> Vec<String> {
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect();
        NumeralFilter::new(mode)
            .filter(Box::new(tokens.into_iter()), &mut Diagnostics::new())
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_replace_numerals() {
        let result = run(NumeralMode::Replace, &["i", "have", "3", "cats", "3rd", "3.5"]);
        assert_eq!(result, vec!["i", "have", "three", "cats", "3rd", "3.5"]);
    }

    #[test]
    fn test_delete_numerals() {
        let result = run(NumeralMode::Delete, &["in", "2020", "and", "10:30"]);
        assert_eq!(result, vec!["in", "and", "10:30"]);
    }
}
