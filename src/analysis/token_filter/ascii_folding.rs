//! ASCII folding filter implementation.

use unicode_normalization::UnicodeNormalization;

use crate::analysis::diagnostic::Diagnostics;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Folds tokens to their closest ASCII form.
///
/// Text is decomposed with NFKD and every non-ASCII remnant is dropped, so
/// "café" becomes "cafe" and "ﬁne" becomes "fine". Tokens left empty (for
/// example CJK words or unmapped emoji) are removed from the stream.
#[derive(Clone, Debug, Default)]
pub struct AsciiFoldingFilter;

impl AsciiFoldingFilter {
    pub fn new() -> Self {
        AsciiFoldingFilter
    }

    /// Fold a single string.
    pub fn fold(text: &str) -> String {
        text.nfkd().filter(char::is_ascii).collect()
    }
}

impl Filter for AsciiFoldingFilter {
    fn filter(&self, tokens: TokenStream, _diagnostics: &mut Diagnostics) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .filter_map(|token| {
                if token.text.is_ascii() {
                    return (!token.is_empty()).then_some(token);
                }
                let folded = Self::fold(&token.text);
                (!folded.is_empty()).then(|| token.with_text(folded))
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "ascii_folding"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_fold() {
        assert_eq!(AsciiFoldingFilter::fold("naïve"), "naive");
        assert_eq!(AsciiFoldingFilter::fold("ﬁne"), "fine");
        assert_eq!(AsciiFoldingFilter::fold("Ünïcödé"), "Unicode");
        assert_eq!(AsciiFoldingFilter::fold("😂"), "");
    }

    #[test]
    fn test_drop_emptied_tokens() {
        let tokens = vec![
            Token::new("déjà", 0),
            Token::new("😂", 1),
            Token::new("vu", 2),
            Token::new("東京", 3),
        ];
        let result: Vec<Token> = AsciiFoldingFilter::new()
            .filter(Box::new(tokens.into_iter()), &mut Diagnostics::new())
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "deja");
        assert_eq!(result[1].text, "vu");
        assert_eq!(result[1].position, 2);
    }
}
