//! Lexicon and suffix based part-of-speech tagger.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::PosTagger;
use super::lemmatizer::IRREGULAR_VERBS;

/// Closed-class words and auxiliaries with their Penn Treebank tags.
const CLOSED_CLASS: &[(&str, &str)] = &[
    ("a", "DT"),
    ("an", "DT"),
    ("the", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("every", "DT"),
    ("some", "DT"),
    ("any", "DT"),
    ("no", "DT"),
    ("i", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("me", "PRP"),
    ("him", "PRP"),
    ("her", "PRP$"),
    ("us", "PRP"),
    ("them", "PRP"),
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("its", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    ("and", "CC"),
    ("or", "CC"),
    ("but", "CC"),
    ("nor", "CC"),
    ("in", "IN"),
    ("on", "IN"),
    ("at", "IN"),
    ("of", "IN"),
    ("for", "IN"),
    ("with", "IN"),
    ("from", "IN"),
    ("by", "IN"),
    ("about", "IN"),
    ("because", "IN"),
    ("if", "IN"),
    ("after", "IN"),
    ("before", "IN"),
    ("to", "TO"),
    ("can", "MD"),
    ("could", "MD"),
    ("will", "MD"),
    ("would", "MD"),
    ("shall", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    ("be", "VB"),
    ("am", "VBP"),
    ("are", "VBP"),
    ("is", "VBZ"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("have", "VBP"),
    ("has", "VBZ"),
    ("had", "VBD"),
    ("do", "VBP"),
    ("does", "VBZ"),
    ("did", "VBD"),
    ("not", "RB"),
    ("never", "RB"),
    ("very", "RB"),
    ("too", "RB"),
    ("so", "RB"),
    ("just", "RB"),
];

static CLOSED_CLASS_TAGS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CLOSED_CLASS.iter().copied().collect());

static IRREGULAR_PAST: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_VERBS.iter().copied().collect());

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ish", "ic"];

/// A small rule-based English tagger.
///
/// Words are tagged from a closed-class table first, then from the left
/// context (after a modal or "to" comes a base verb, after a subject a
/// present-tense verb) and finally from their suffix. Unknown words are
/// nouns.
#[derive(Clone, Debug, Default)]
pub struct LexicalTagger;

impl LexicalTagger {
    pub fn new() -> Self {
        LexicalTagger
    }

    fn tag_word(word: &str, previous: Option<&str>) -> &'static str {
        let lower = word.to_lowercase();

        if let Some(tag) = CLOSED_CLASS_TAGS.get(lower.as_str()) {
            return *tag;
        }
        if !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()) {
            return "CD";
        }
        if word.len() > 1 && word.chars().all(|c| !c.is_lowercase()) {
            return "NNP";
        }

        match previous {
            Some("MD") | Some("TO") => return "VB",
            Some("PRP") | Some("NNP") | Some("NN") if is_plural_shape(&lower) => return "VBZ",
            Some("PRP") => {
                if let Some(tag) = verb_suffix_tag(&lower) {
                    return tag;
                }
                return "VBP";
            }
            _ => {}
        }

        if let Some(lemma) = IRREGULAR_PAST.get(lower.as_str()) {
            if *lemma != lower {
                return "VBD";
            }
        }
        if let Some(tag) = verb_suffix_tag(&lower) {
            return tag;
        }
        if lower.ends_with("ly") && lower.len() > 4 {
            return "RB";
        }
        if ADJECTIVE_SUFFIXES
            .iter()
            .any(|suffix| lower.ends_with(suffix) && lower.len() > suffix.len() + 2)
        {
            return "JJ";
        }
        if is_plural_shape(&lower) {
            return "NNS";
        }

        "NN"
    }
}

fn is_plural_shape(word: &str) -> bool {
    word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us")
}

fn verb_suffix_tag(word: &str) -> Option<&'static str> {
    if word.len() > 4 && word.ends_with("ing") {
        Some("VBG")
    } else if word.len() > 3 && word.ends_with("ed") {
        Some("VBD")
    } else {
        None
    }
}

impl PosTagger for LexicalTagger {
    fn tag(&self, words: &[&str]) -> Vec<String> {
        let mut tags: Vec<String> = Vec::with_capacity(words.len());
        for word in words {
            let previous = tags.last().map(String::as_str);
            let tag = Self::tag_word(word, previous);
            tags.push(tag.to_string());
        }
        tags
    }

    fn name(&self) -> &'static str {
        "lexical"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(words: &[&str]) -> Vec<String> {
        LexicalTagger::new().tag(words)
    }

    #[test]
    fn test_closed_class_and_suffixes() {
        assert_eq!(
            tag(&["the", "dogs", "were", "barking", "loudly"]),
            vec!["DT", "NNS", "VBD", "VBG", "RB"]
        );
    }

    #[test]
    fn test_context() {
        assert_eq!(tag(&["i", "want", "to", "sing"]), vec!["PRP", "VBP", "TO", "VB"]);
        assert_eq!(tag(&["she", "loves", "pizza"]), vec!["PRP", "VBZ", "NN"]);
        assert_eq!(tag(&["we", "went", "home"]), vec!["PRP", "VBP", "NN"]);
    }

    #[test]
    fn test_irregular_past_and_constants() {
        assert_eq!(tag(&["children", "ate", "URL"]), vec!["NN", "VBD", "NNP"]);
        assert_eq!(tag(&["42"]), vec!["CD"]);
    }

    #[test]
    fn test_one_tag_per_word() {
        assert!(tag(&[]).is_empty());
        assert_eq!(tag(&["a", "b", "c", "d"]).len(), 4);
    }
}
