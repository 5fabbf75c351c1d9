//! Tokenizer for social-media text.

use std::sync::Arc;

use regex::{Captures, Regex};
use unicode_segmentation::UnicodeSegmentation;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenKind, TokenStream};
use crate::error::Result;
use crate::lexicon::{Lexicon, emoticon_alternation};

const URL: &str = r"(?:https?://|www\.)\S+";
/// Western emoticon shapes: optional hat, eyes, optional nose, mouth.
const GENERIC_EMOTICON: &str =
    r#"[<>]?[:;=][\-o\*']?(?:[\)\]\(\[/\}\{@\|\\]|[dDpP]\b)|<3"#;
const MENTION: &str = r"@\w+";
const HASHTAG: &str = r"#\w+";
const NUMBER: &str = r"[+\-]?\d+(?:[,/.:\-]\d+)+";
const WORD: &str = r"[\p{L}\p{M}\p{N}_]+(?:['’\-][\p{L}\p{M}\p{N}_]+)*";
const ELLIPSIS: &str = r"\.{2,}|…";
const PUNCTUATION: &str = r"[\p{P}[:punct:]]";

/// A tokenizer that keeps the units of social-media text whole.
///
/// Alternatives are tried in priority order at every position: URLs,
/// emoticons (lexicon entries, then generic shapes), mentions, hashtags,
/// numbers with inner separators, words, ellipses, single punctuation marks
/// and finally any other non-space character. A single-character match that
/// starts a longer grapheme cluster is widened to the whole cluster, so ZWJ
/// emoji, skin-tone modifiers, flags and keycaps stay atomic.
#[derive(Clone, Debug)]
pub struct SocialTokenizer {
    pattern: Regex,
    lexicon: Arc<Lexicon>,
}

impl SocialTokenizer {
    /// Create a tokenizer recognising the lexicon's emoticons and emoji.
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self> {
        let mut emoticons: Vec<&str> = lexicon.emoticons().collect();
        emoticons.sort_unstable();
        let known = if emoticons.is_empty() {
            String::new()
        } else {
            format!("(?i:{})|", emoticon_alternation(&emoticons))
        };

        let pattern = format!(
            "(?P<url>{URL})|(?P<emoticon>{known}{GENERIC_EMOTICON})|(?P<mention>{MENTION})\
             |(?P<hashtag>{HASHTAG})|(?P<number>{NUMBER})|(?P<word>{WORD})\
             |(?P<ellipsis>{ELLIPSIS})|(?P<punct>{PUNCTUATION})|(?P<other>\\S)"
        );

        Ok(SocialTokenizer {
            pattern: Regex::new(&pattern)?,
            lexicon,
        })
    }

    fn classify(&self, captures: &Captures<'_>, text: &str) -> TokenKind {
        let group = |name: &str| captures.name(name).is_some();

        if group("url") {
            TokenKind::Url
        } else if group("emoticon") {
            TokenKind::Emoticon
        } else if group("mention") {
            TokenKind::Mention
        } else if group("hashtag") {
            TokenKind::Hashtag
        } else if group("number") {
            TokenKind::Number
        } else if self.is_emoji(text) {
            TokenKind::Emoji
        } else if group("word") {
            if text.chars().all(|c| c.is_ascii_digit()) {
                TokenKind::Number
            } else {
                TokenKind::Word
            }
        } else if group("ellipsis") || group("punct") {
            TokenKind::Punctuation
        } else {
            TokenKind::Other
        }
    }

    fn is_emoji(&self, text: &str) -> bool {
        self.lexicon.is_emoji(text) || text.chars().any(is_pictographic)
    }
}

impl Tokenizer for SocialTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut cursor = 0;

        while let Some(captures) = self.pattern.captures_at(text, cursor) {
            let Some(whole) = captures.get(0) else {
                break;
            };
            let start = whole.start();
            let mut end = whole.end();

            let mut chars = whole.as_str().chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if !c.is_alphanumeric() {
                    if let Some(cluster) = text[start..].graphemes(true).next() {
                        end = start + cluster.len();
                    }
                }
            }

            let piece = &text[start..end];
            let kind = self.classify(&captures, piece);
            tokens.push(Token::with_offsets(piece, tokens.len(), start, end).with_kind(kind));

            cursor = end;
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "social"
    }
}

/// Characters that only occur in emoji presentation sequences, or that are
/// emoji by default.
fn is_pictographic(c: char) -> bool {
    matches!(
        c as u32,
        0x00A9 | 0x00AE | 0x203C | 0x2049 | 0x2122 | 0x2139
            | 0x2194..=0x2199
            | 0x21A9..=0x21AA
            | 0x20E3
            | 0x231A..=0x231B
            | 0x2328 | 0x23CF
            | 0x23E9..=0x23F3
            | 0x23F8..=0x23FA
            | 0x24C2
            | 0x25AA..=0x25AB
            | 0x25B6 | 0x25C0
            | 0x25FB..=0x25FE
            | 0x2600..=0x27BF
            | 0x2934..=0x2935
            | 0x2B05..=0x2B07
            | 0x2B1B..=0x2B1C
            | 0x2B50 | 0x2B55 | 0x3030 | 0x303D | 0x3297 | 0x3299
            | 0x1F000..=0x1FAFF
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> SocialTokenizer {
        let lexicon = Lexicon::builder()
            .emoticon(":-)", "EMOT_JOY")
            .emoticon("xD", "EMOT_JOY")
            .emoticon("D:", "EMOT_FEAR")
            .emoticon("(-_-)", "EMOT_SADNESS")
            .emoji("😂", "EMOT_JOY")
            .build()
            .unwrap();
        SocialTokenizer::new(Arc::new(lexicon)).unwrap()
    }

    fn tokenize(text: &str) -> Vec<Token> {
        tokenizer().tokenize(text).unwrap().collect()
    }

    fn texts(text: &str) -> Vec<String> {
        tokenize(text).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_words_and_punctuation() {
        let tokens = tokenize("Hello, world!");
        assert_eq!(
            tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>(),
            vec!["Hello", ",", "world", "!"]
        );
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[1].kind, TokenKind::Punctuation);
        assert_eq!(tokens[3].position, 3);
        assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (7, 12));
    }

    #[test]
    fn test_whitespace_is_never_a_token() {
        assert_eq!(texts("  a \t b\n\n c  "), vec!["a", "b", "c"]);
        assert!(texts(" \n\t ").is_empty());
    }

    #[test]
    fn test_emoticons_are_atomic() {
        assert_eq!(texts("fine :-) really"), vec!["fine", ":-)", "really"]);
        assert_eq!(texts("lol xD"), vec!["lol", "xD"]);
        assert_eq!(texts("no D: please"), vec!["no", "D:", "please"]);
        assert_eq!(texts("meh (-_-)"), vec!["meh", "(-_-)"]);
        assert_eq!(texts("ok ;) <3"), vec!["ok", ";)", "<3"]);

        let tokens = tokenize(":P");
        assert_eq!(tokens[0].kind, TokenKind::Emoticon);
    }

    #[test]
    fn test_emoticon_inside_word_is_not_split() {
        assert_eq!(texts("xDrive"), vec!["xDrive"]);
    }

    #[test]
    fn test_emoji_sequences_are_atomic() {
        let family = "👨\u{200d}👩\u{200d}👧";
        let tokens = tokenize(&format!("we {family} 👍🏽 🇫🇷 ❤\u{fe0f} 1\u{fe0f}\u{20e3}"));

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["we", family, "👍🏽", "🇫🇷", "❤\u{fe0f}", "1\u{fe0f}\u{20e3}"]
        );
        assert!(tokens[1..].iter().all(|t| t.kind == TokenKind::Emoji));
    }

    #[test]
    fn test_adjacent_emoji() {
        let tokens = tokenize("lol😂😂!");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["lol", "😂", "😂", "!"]);
        assert_eq!(tokens[1].kind, TokenKind::Emoji);
    }

    #[test]
    fn test_social_units() {
        let tokens = tokenize("@bob see https://t.co/x?y=1 #rust 10:30 3 don't covid-19 ...");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

        assert_eq!(
            kinds,
            vec![
                TokenKind::Mention,
                TokenKind::Word,
                TokenKind::Url,
                TokenKind::Hashtag,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Punctuation,
            ]
        );
        assert_eq!(tokens[6].text, "don't");
        assert_eq!(tokens[7].text, "covid-19");
        assert_eq!(tokens[8].text, "...");
    }

    #[test]
    fn test_restartable() {
        let tokenizer = tokenizer();
        let text = "so coool 😂 :-) #yes";
        let first: Vec<Token> = tokenizer.tokenize(text).unwrap().collect();
        let second: Vec<Token> = tokenizer.tokenize(text).unwrap().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(tokenizer().name(), "social");
    }
}
