//! Collapsing of elongated characters and stuttered words.
//!
//! Two passes exist, both driven by backreference patterns:
//!
//! - [`RepetitionCharFilter::characters`]: a run of three or more identical
//!   characters is cut down to exactly two ("coooooool" → "cool").
//! - [`RepetitionCharFilter::words`]: the same word repeated consecutively,
//!   separated by single spaces, is kept once ("need need need" → "need").

use fancy_regex::Regex;

use super::{CharFilter, Transformation, splice};
use crate::analysis::diagnostic::Diagnostics;
use crate::error::Result;

const REPEATED_CHARACTERS: &str = r"(.)\1\1+";
const REPEATED_WORDS: &str = r"\b(\w+)( \1\b)+";

/// Replaces each match with `copies` copies of its first capture group.
#[derive(Clone, Debug)]
pub struct RepetitionCharFilter {
    pattern: Regex,
    copies: usize,
    name: &'static str,
}

impl RepetitionCharFilter {
    /// Collapse character runs of length 3+ to length 2.
    pub fn characters() -> Result<Self> {
        Ok(RepetitionCharFilter {
            pattern: Regex::new(REPEATED_CHARACTERS)?,
            copies: 2,
            name: "repeated_characters",
        })
    }

    /// Collapse consecutive duplicate words to one occurrence.
    pub fn words() -> Result<Self> {
        Ok(RepetitionCharFilter {
            pattern: Regex::new(REPEATED_WORDS)?,
            copies: 1,
            name: "repeated_words",
        })
    }
}

impl CharFilter for RepetitionCharFilter {
    fn filter(
        &self,
        input: &str,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(String, Vec<Transformation>)> {
        let mut edits = Vec::new();
        for captures in self.pattern.captures_iter(input) {
            let captures = captures?;
            let (Some(whole), Some(unit)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            edits.push((whole.start()..whole.end(), unit.as_str().repeat(self.copies)));
        }

        Ok(splice(input, edits))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collapse(filter: &RepetitionCharFilter, input: &str) -> String {
        filter.filter(input, &mut Diagnostics::new()).unwrap().0
    }

    #[test]
    fn test_collapse_characters() {
        let filter = RepetitionCharFilter::characters().unwrap();
        assert_eq!(collapse(&filter, "coooooool"), "cool");
        assert_eq!(collapse(&filter, "soooo goood!!!"), "soo good!!");
        assert_eq!(collapse(&filter, "book"), "book");
        assert_eq!(collapse(&filter, "wait..."), "wait..");
    }

    #[test]
    fn test_collapse_words() {
        let filter = RepetitionCharFilter::words().unwrap();
        assert_eq!(
            collapse(&filter, "I so need need need to sing"),
            "I so need to sing"
        );
        assert_eq!(collapse(&filter, "the theory"), "the theory");
        assert_eq!(collapse(&filter, "no no, no"), "no, no");
    }

    #[test]
    fn test_transformation_offsets() {
        let filter = RepetitionCharFilter::characters().unwrap();
        let (_, transformations) = filter.filter("a yesss b", &mut Diagnostics::new()).unwrap();
        assert_eq!(transformations, vec![Transformation::new(4, 7, 4, 6)]);
    }
}
