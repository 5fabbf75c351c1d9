//! Contraction expansion.
//!
//! Matches contraction keys from the lexicon as whole words, accepting either
//! a straight or a typographic apostrophe, and rewrites them to their expanded
//! form. The casing of the match is carried over: "Don't" becomes "Do not"
//! and "DON'T" becomes "DO NOT".
//!
//! Keys spelled without an apostrophe ("im", "dont") can collide with real
//! words. They are still expanded, but each expansion is reported as an
//! [`AmbiguousContraction`](crate::analysis::diagnostic::Diagnostic::AmbiguousContraction).

use std::sync::Arc;

use super::{CharFilter, Transformation, splice};
use crate::analysis::diagnostic::{Diagnostic, Diagnostics};
use crate::error::Result;
use crate::lexicon::Lexicon;

/// Expands contractions using the lexicon's contraction map.
#[derive(Clone, Debug)]
pub struct ContractionCharFilter {
    lexicon: Arc<Lexicon>,
}

impl ContractionCharFilter {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        ContractionCharFilter { lexicon }
    }
}

impl CharFilter for ContractionCharFilter {
    fn filter(
        &self,
        input: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<(String, Vec<Transformation>)> {
        let Some(pattern) = self.lexicon.contraction_pattern() else {
            return Ok((input.to_string(), Vec::new()));
        };

        let mut edits = Vec::new();
        for found in pattern.find_iter(input) {
            let found = found?;
            let matched = found.as_str();
            let Some(expansion) = self.lexicon.contraction(matched) else {
                continue;
            };

            if !matched.contains(['\'', '’']) {
                diagnostics.push(Diagnostic::AmbiguousContraction {
                    matched: matched.to_string(),
                    expansion: expansion.to_string(),
                });
            }

            edits.push((found.start()..found.end(), match_case(matched, expansion)));
        }

        Ok(splice(input, edits))
    }

    fn name(&self) -> &'static str {
        "contraction"
    }
}

/// Carry the casing of `matched` over to `expansion`.
fn match_case(matched: &str, expansion: &str) -> String {
    let letters: Vec<char> = matched.chars().filter(|c| c.is_alphabetic()).collect();
    let all_upper = letters.len() > 1 && letters.iter().all(|c| c.is_uppercase());

    if all_upper {
        return expansion.to_uppercase();
    }

    match (letters.first(), expansion.chars().next()) {
        (Some(first), Some(head)) if first.is_uppercase() => {
            let mut cased: String = head.to_uppercase().collect();
            cased.push_str(&expansion[head.len_utf8()..]);
            cased
        }
        _ => expansion.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> ContractionCharFilter {
        let lexicon = Lexicon::builder()
            .contraction("don't", "do not")
            .contraction("i'm", "i am")
            .contraction("can't", "cannot")
            .contraction("can't've", "cannot have")
            .contraction("'cause", "because")
            .contraction("im", "i am")
            .build()
            .unwrap();
        ContractionCharFilter::new(Arc::new(lexicon))
    }

    fn apply(text: &str) -> (String, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let (output, _) = filter().filter(text, &mut diagnostics).unwrap();
        (output, diagnostics)
    }

    #[test]
    fn test_expand_contractions() {
        let (output, diagnostics) = apply("I'm sure you don't know");
        assert_eq!(output, "I am sure you do not know");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_typographic_apostrophe_and_case() {
        assert_eq!(apply("DON’T stop").0, "DO NOT stop");
        assert_eq!(apply("Can't").0, "Cannot");
    }

    #[test]
    fn test_longest_key_wins() {
        assert_eq!(apply("I can't've").0, "I cannot have");
        assert_eq!(apply("just 'cause").0, "just because");
    }

    #[test]
    fn test_only_whole_words() {
        assert_eq!(apply("image imdb im").0, "image imdb i am");
        assert_eq!(apply("don'tcha").0, "don'tcha");
    }

    #[test]
    fn test_ambiguous_contraction_is_reported() {
        let (output, diagnostics) = apply("im here");
        assert_eq!(output, "i am here");
        assert_eq!(
            diagnostics.into_vec(),
            vec![Diagnostic::AmbiguousContraction {
                matched: "im".to_string(),
                expansion: "i am".to_string(),
            }]
        );
    }

    #[test]
    fn test_transformations_track_offsets() {
        let mut diagnostics = Diagnostics::new();
        let (_, transformations) = filter().filter("so don't", &mut diagnostics).unwrap();
        assert_eq!(transformations, vec![Transformation::new(3, 8, 3, 9)]);
    }
}
