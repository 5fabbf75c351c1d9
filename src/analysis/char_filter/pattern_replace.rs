use regex::{Captures, Regex};

use super::{CharFilter, Transformation, splice};
use crate::analysis::diagnostic::Diagnostics;
use crate::error::Result;

/// What a match is rewritten to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Replacement {
    /// Substitute a fixed string, typically a placeholder constant.
    Fixed(String),
    /// Remove the match.
    Delete,
    /// Keep capture group 1 when the pattern has one, otherwise drop the
    /// given leading sigil ("#tag" → "tag", "@user" → "user").
    Bare(char),
}

impl Replacement {
    fn apply(&self, captures: &Captures<'_>) -> String {
        let matched = captures.get(0).map_or("", |m| m.as_str());
        match self {
            Replacement::Fixed(text) => text.clone(),
            Replacement::Delete => String::new(),
            Replacement::Bare(sigil) => match captures.get(1) {
                Some(group) => group.as_str().to_string(),
                None => matched.strip_prefix(*sigil).unwrap_or(matched).to_string(),
            },
        }
    }
}

/// A char filter that rewrites every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: Replacement,
    name: &'static str,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: Replacement) -> Result<Self> {
        Ok(Self::with_regex(Regex::new(pattern)?, replacement))
    }

    /// Create a filter from an already compiled pattern.
    pub fn with_regex(pattern: Regex, replacement: Replacement) -> Self {
        PatternReplaceCharFilter {
            pattern,
            replacement,
            name: "pattern_replace",
        }
    }

    /// Set the name reported by [`CharFilter::name`].
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn replacement(&self) -> &Replacement {
        &self.replacement
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(
        &self,
        input: &str,
        _diagnostics: &mut Diagnostics,
    ) -> Result<(String, Vec<Transformation>)> {
        let edits = self.pattern.captures_iter(input).filter_map(|captures| {
            let whole = captures.get(0)?;
            Some((whole.range(), self.replacement.apply(&captures)))
        });

        Ok(splice(input, edits))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
