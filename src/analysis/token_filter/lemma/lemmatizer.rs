//! Rule-based English lemmatizer.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{LemmaPos, Lemmatizer};

/// Irregular verb forms and their lemma.
pub(crate) const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("goes", "go"),
    ("went", "go"),
    ("gone", "go"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("became", "become"),
    ("began", "begin"),
    ("begun", "begin"),
    ("bought", "buy"),
    ("brought", "bring"),
    ("came", "come"),
    ("caught", "catch"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("drank", "drink"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("felt", "feel"),
    ("fought", "fight"),
    ("found", "find"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("gave", "give"),
    ("given", "give"),
    ("got", "get"),
    ("gotten", "get"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("heard", "hear"),
    ("held", "hold"),
    ("kept", "keep"),
    ("knew", "know"),
    ("known", "know"),
    ("led", "lead"),
    ("left", "leave"),
    ("lost", "lose"),
    ("made", "make"),
    ("making", "make"),
    ("meant", "mean"),
    ("met", "meet"),
    ("paid", "pay"),
    ("ran", "run"),
    ("said", "say"),
    ("sang", "sing"),
    ("sung", "sing"),
    ("sat", "sit"),
    ("saw", "see"),
    ("seen", "see"),
    ("sent", "send"),
    ("slept", "sleep"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("spent", "spend"),
    ("stood", "stand"),
    ("taken", "take"),
    ("took", "take"),
    ("taking", "take"),
    ("taught", "teach"),
    ("thought", "think"),
    ("told", "tell"),
    ("understood", "understand"),
    ("won", "win"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("wrote", "write"),
    ("written", "write"),
];

/// Irregular plurals and their singular.
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("selves", "self"),
    ("people", "people"),
    ("news", "news"),
    ("series", "series"),
    ("species", "species"),
];

static VERBS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_VERBS.iter().copied().collect());

static NOUNS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_NOUNS.iter().copied().collect());

/// Stem endings after which a dropped "e" is restored ("lov" → "love").
const SILENT_E_ENDINGS: &[&str] = &["v", "c", "z", "u", "at", "iz", "bl", "pl", "tl", "dl", "gl"];

/// Irregular-form tables plus WordNet-style detachment of inflectional
/// suffixes. Words that match no rule are returned unchanged.
#[derive(Clone, Debug, Default)]
pub struct RuleLemmatizer;

impl RuleLemmatizer {
    pub fn new() -> Self {
        RuleLemmatizer
    }

    fn noun(word: &str) -> String {
        if let Some(lemma) = NOUNS.get(word) {
            return (*lemma).to_string();
        }
        if word.len() <= 3 || ["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
            return word.to_string();
        }

        for (suffix, replacement) in [
            ("ies", "y"),
            ("sses", "ss"),
            ("shes", "sh"),
            ("ches", "ch"),
            ("xes", "x"),
            ("s", ""),
        ] {
            if let Some(stem) = word.strip_suffix(suffix) {
                return format!("{stem}{replacement}");
            }
        }

        word.to_string()
    }

    fn verb(word: &str) -> String {
        if let Some(lemma) = VERBS.get(word) {
            return (*lemma).to_string();
        }
        if word.len() <= 3 {
            return word.to_string();
        }

        for (suffix, replacement) in [
            ("ies", "y"),
            ("sses", "ss"),
            ("shes", "sh"),
            ("ches", "ch"),
            ("xes", "x"),
            ("ied", "y"),
        ] {
            if let Some(stem) = word.strip_suffix(suffix) {
                return format!("{stem}{replacement}");
            }
        }

        if word.ends_with('s') && !word.ends_with("ss") {
            return word[..word.len() - 1].to_string();
        }

        for suffix in ["ing", "ed"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.len() >= 2 && stem.chars().any(is_vowel) {
                    return restore_stem(stem);
                }
            }
        }

        word.to_string()
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Undo consonant doubling ("stopp" → "stop") or restore a silent "e".
fn restore_stem(stem: &str) -> String {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n >= 3 && bytes[n - 1] == bytes[n - 2] {
        let last = bytes[n - 1] as char;
        if !is_vowel(last) && !matches!(last, 'l' | 's' | 'z') {
            return stem[..n - 1].to_string();
        }
    }
    if SILENT_E_ENDINGS.iter().any(|ending| stem.ends_with(ending)) {
        return format!("{stem}e");
    }
    stem.to_string()
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, word: &str, pos: LemmaPos) -> String {
        if !word.is_ascii() {
            return word.to_string();
        }
        match pos {
            LemmaPos::Noun => Self::noun(word),
            LemmaPos::Verb => Self::verb(word),
        }
    }

    fn name(&self) -> &'static str {
        "rule"
    }
}
