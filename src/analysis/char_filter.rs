//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw post text before it reaches the tokenizer.
//! Every filter reports the byte ranges it rewrote so that token offsets can
//! be mapped back to the raw text afterwards.
//!
//! # Available Filters
//!
//! - [`contraction::ContractionCharFilter`] - Expands contractions ("don't" → "do not")
//! - [`pattern_replace::PatternReplaceCharFilter`] - URL/mention/hashtag substitution
//! - [`domain_term::DomainTermCharFilter`] - Folds spelling variants to one canonical term
//! - [`repetition::RepetitionCharFilter`] - Collapses repeated characters and words
//!
//! # Examples
//!
//! ```
//! use socialnorm::analysis::char_filter::CharFilter;
//! use socialnorm::analysis::char_filter::repetition::RepetitionCharFilter;
//! use socialnorm::analysis::diagnostic::Diagnostics;
//!
//! let filter = RepetitionCharFilter::characters().unwrap();
//! let mut diagnostics = Diagnostics::new();
//! let (text, _) = filter.filter("coooooool", &mut diagnostics).unwrap();
//! assert_eq!(text, "cool");
//! ```

use std::ops::Range;

use crate::analysis::diagnostic::Diagnostics;
use crate::error::Result;

pub mod contraction;
pub mod domain_term;
pub mod pattern_replace;
pub mod repetition;

/// Represents a change in the text, mapping a range in the original text
/// to a range in the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub original_start: usize,
    pub original_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Transformation {
    pub fn new(
        original_start: usize,
        original_end: usize,
        new_start: usize,
        new_end: usize,
    ) -> Self {
        Self {
            original_start,
            original_end,
            new_start,
            new_end,
        }
    }
}

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    ///
    /// Returns the filtered text along with the list of `Transformation`s,
    /// ordered by position. Recoverable oddities are pushed to `diagnostics`.
    fn filter(
        &self,
        input: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<(String, Vec<Transformation>)>;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// Apply ordered, non-overlapping replacements to `input`.
pub(crate) fn splice<I>(input: &str, edits: I) -> (String, Vec<Transformation>)
where
    I: IntoIterator<Item = (Range<usize>, String)>,
{
    let mut output = String::with_capacity(input.len());
    let mut transformations = Vec::new();
    let mut last_end = 0;

    for (range, replacement) in edits {
        output.push_str(&input[last_end..range.start]);

        if input[range.clone()] != replacement {
            let new_start = output.len();
            output.push_str(&replacement);
            transformations.push(Transformation::new(
                range.start,
                range.end,
                new_start,
                output.len(),
            ));
        } else {
            output.push_str(&replacement);
        }

        last_end = range.end;
    }

    output.push_str(&input[last_end..]);
    (output, transformations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splice() {
        let (output, transformations) = splice(
            "Year 2024 and 2025",
            vec![(5..9, "NUM".to_string()), (14..18, String::new())],
        );

        assert_eq!(output, "Year NUM and ");
        assert_eq!(
            transformations,
            vec![Transformation::new(5, 9, 5, 8), Transformation::new(14, 18, 13, 13)]
        );
    }

    #[test]
    fn test_splice_identity_is_not_recorded() {
        let (output, transformations) = splice("abc", vec![(0..1, "a".to_string())]);
        assert_eq!(output, "abc");
        assert!(transformations.is_empty());
    }
}
