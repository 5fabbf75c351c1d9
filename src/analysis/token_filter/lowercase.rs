//! Lowercase filter implementation.
//!
//! Converts token text to lowercase, leaving the lexicon's constant tokens
//! (placeholders such as `URL` and category labels such as `EMOT_JOY`)
//! exactly as they are.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use socialnorm::analysis::diagnostic::Diagnostics;
//! use socialnorm::analysis::token::Token;
//! use socialnorm::analysis::token_filter::Filter;
//! use socialnorm::analysis::token_filter::lowercase::LowercaseFilter;
//! use socialnorm::lexicon::Lexicon;
//!
//! let filter = LowercaseFilter::new(Arc::new(Lexicon::builder().build().unwrap()));
//! let tokens = vec![Token::new("Hello", 0), Token::new("URL", 1)];
//! let filtered: Vec<_> = filter
//!     .filter(Box::new(tokens.into_iter()), &mut Diagnostics::new())
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "URL");
//! ```

use std::sync::Arc;

use crate::analysis::diagnostic::Diagnostics;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::lexicon::Lexicon;

/// A filter that converts non-constant tokens to lowercase.
#[derive(Clone, Debug)]
pub struct LowercaseFilter {
    lexicon: Arc<Lexicon>,
}

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        LowercaseFilter { lexicon }
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream, _diagnostics: &mut Diagnostics) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if self.lexicon.is_constant(&token.text) {
                    token
                } else {
                    let lowered = token.text.to_lowercase();
                    token.with_text(lowered)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn filter() -> LowercaseFilter {
        LowercaseFilter::new(Arc::new(Lexicon::builder().category("EMOT_JOY").build().unwrap()))
    }

    fn run(tokens: Vec<&str>) -> Vec<String> {
        let tokens: Vec<Token> = tokens
            .into_iter()
            .enumerate()
            .map(|(i, t)| Token::new(t, i))
            .collect();
        filter()
            .filter(Box::new(tokens.into_iter()), &mut Diagnostics::new())
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_lowercase_filter() {
        let result = run(vec!["Hello", "WORLD", "USER", "EMOT_JOY", "Émile"]);
        assert_eq!(result, vec!["hello", "world", "USER", "EMOT_JOY", "émile"]);
    }

    #[test]
    fn test_lowercase_is_idempotent() {
        let once = run(vec!["MiXeD", "case", "ΣΊΣΥΦΟΣ"]);
        let twice = run(once.iter().map(String::as_str).collect());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(filter().name(), "lowercase");
    }
}
