//! Built-in tables for English and French social-media text.

use super::{LexiconBuilder, StopwordList};

pub const EMOT_JOY: &str = "EMOT_JOY";
pub const EMOT_LOVE: &str = "EMOT_LOVE";
pub const EMOT_SURPRISE: &str = "EMOT_SURPRISE";
pub const EMOT_ANGER: &str = "EMOT_ANGER";
pub const EMOT_SADNESS: &str = "EMOT_SADNESS";
pub const EMOT_FEAR: &str = "EMOT_FEAR";

/// Positive categories followed by negative ones.
pub const EMOTION_CATEGORIES: &[&str] = &[
    EMOT_JOY,
    EMOT_LOVE,
    EMOT_SURPRISE,
    EMOT_ANGER,
    EMOT_SADNESS,
    EMOT_FEAR,
];

/// Standard English stopwords.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// First- and second-person words kept by the no-personal variant.
pub const PERSONAL_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves",
];

/// Social-media noise removed on top of the English lists.
pub const CUSTOM_STOPWORDS: &[&str] = &[
    "rt", "via", "amp", "gt", "lt", "u", "ur", "pls", "plz", "oh", "ok", "okay",
];

/// Standard French stopwords.
pub const FRENCH_STOPWORDS: &[&str] = &[
    "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "et", "eux", "il",
    "ils", "je", "la", "le", "les", "leur", "lui", "ma", "mais", "me", "même", "mes", "moi", "mon",
    "ne", "nos", "notre", "nous", "on", "ou", "par", "pas", "pour", "qu", "que", "qui", "sa", "se",
    "ses", "son", "sur", "ta", "te", "tes", "toi", "ton", "tu", "un", "une", "vos", "votre",
    "vous", "c", "d", "j", "l", "à", "m", "n", "s", "t", "y", "été", "étée", "étées", "étés",
    "étant", "étante", "étants", "étantes", "suis", "es", "est", "sommes", "êtes", "sont",
    "serai", "seras", "sera", "serons", "serez", "seront", "serais", "serait", "serions",
    "seriez", "seraient", "étais", "était", "étions", "étiez", "étaient", "fus", "fut", "fûmes",
    "fûtes", "furent", "sois", "soit", "soyons", "soyez", "soient", "fusse", "fusses", "fût",
    "fussions", "fussiez", "fussent", "ayant", "ayante", "ayantes", "ayants", "eu", "eue", "eues",
    "eus", "ai", "as", "avons", "avez", "ont", "aurai", "auras", "aura", "aurons", "aurez",
    "auront", "aurais", "aurait", "aurions", "auriez", "auraient", "avais", "avait", "avions",
    "aviez", "avaient", "eut", "eûmes", "eûtes", "eurent", "aie", "aies", "ait", "ayons", "ayez",
    "aient", "eusse", "eusses", "eût", "eussions", "eussiez", "eussent",
];

/// Negations that survive stopword removal when negations are included.
pub const NEGATIONS: &[&str] = &[
    "n't", "not", "no", "nor", "never", "nothing", "nowhere", "noone", "none",
];

pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("ain't", "am not"),
    ("aren't", "are not"),
    ("can't", "cannot"),
    ("can't've", "cannot have"),
    ("'cause", "because"),
    ("could've", "could have"),
    ("couldn't", "could not"),
    ("couldn't've", "could not have"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("hadn't", "had not"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("he'd", "he would"),
    ("he'll", "he will"),
    ("he's", "he is"),
    ("how'd", "how did"),
    ("how'll", "how will"),
    ("how's", "how is"),
    ("i'd", "i would"),
    ("i'll", "i will"),
    ("i'm", "i am"),
    ("i've", "i have"),
    ("isn't", "is not"),
    ("it'd", "it would"),
    ("it'll", "it will"),
    ("it's", "it is"),
    ("let's", "let us"),
    ("ma'am", "madam"),
    ("mightn't", "might not"),
    ("might've", "might have"),
    ("mustn't", "must not"),
    ("must've", "must have"),
    ("needn't", "need not"),
    ("o'clock", "of the clock"),
    ("shan't", "shall not"),
    ("she'd", "she would"),
    ("she'll", "she will"),
    ("she's", "she is"),
    ("should've", "should have"),
    ("shouldn't", "should not"),
    ("that'd", "that would"),
    ("that's", "that is"),
    ("there'd", "there would"),
    ("there's", "there is"),
    ("they'd", "they would"),
    ("they'll", "they will"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("wasn't", "was not"),
    ("we'd", "we would"),
    ("we'll", "we will"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("weren't", "were not"),
    ("what'll", "what will"),
    ("what're", "what are"),
    ("what's", "what is"),
    ("what've", "what have"),
    ("when's", "when is"),
    ("where'd", "where did"),
    ("where's", "where is"),
    ("who'll", "who will"),
    ("who's", "who is"),
    ("who've", "who have"),
    ("why's", "why is"),
    ("won't", "will not"),
    ("would've", "would have"),
    ("wouldn't", "would not"),
    ("y'all", "you all"),
    ("you'd", "you would"),
    ("you'll", "you will"),
    ("you're", "you are"),
    ("you've", "you have"),
    // informal spellings without an apostrophe
    ("cant", "cannot"),
    ("didnt", "did not"),
    ("doesnt", "does not"),
    ("dont", "do not"),
    ("gonna", "going to"),
    ("gotta", "got to"),
    ("im", "i am"),
    ("isnt", "is not"),
    ("ive", "i have"),
    ("wanna", "want to"),
    ("wasnt", "was not"),
    ("wont", "will not"),
    ("youre", "you are"),
];

/// Domain-term groups as (canonical form, variants), applied in order.
pub const DOMAIN_TERMS: &[(&str, &[&str])] = &[
    (
        "longcovid",
        &[
            "#longcovid",
            "#long_covid",
            "#covidlong",
            "#covid_long",
            "long covid",
            "long-covid",
            "long_covid",
            "covid long",
            "covid_long",
            "covid-long",
            "mitcoronaleben",
            "langzeitcovid",
            "koronaoire",
        ],
    ),
    ("covid", &["covid-nineteen", "corona"]),
    ("longterm", &["long-term"]),
];

/// Emoji glyphs and their categories. An empty label marks a known emoji
/// without an emotional reading.
pub const EMOJI: &[(&str, &str)] = &[
    ("😀", EMOT_JOY),
    ("😃", EMOT_JOY),
    ("😄", EMOT_JOY),
    ("😁", EMOT_JOY),
    ("😆", EMOT_JOY),
    ("😂", EMOT_JOY),
    ("🤣", EMOT_JOY),
    ("😊", EMOT_JOY),
    ("🙂", EMOT_JOY),
    ("😎", EMOT_JOY),
    ("🥳", EMOT_JOY),
    ("🎉", EMOT_JOY),
    ("👍", EMOT_JOY),
    ("\u{2764}\u{fe0f}", EMOT_LOVE),
    ("\u{2764}", EMOT_LOVE),
    ("😍", EMOT_LOVE),
    ("🥰", EMOT_LOVE),
    ("😘", EMOT_LOVE),
    ("💕", EMOT_LOVE),
    ("💖", EMOT_LOVE),
    ("💙", EMOT_LOVE),
    ("💚", EMOT_LOVE),
    ("💜", EMOT_LOVE),
    ("😻", EMOT_LOVE),
    ("🤗", EMOT_LOVE),
    ("😮", EMOT_SURPRISE),
    ("😯", EMOT_SURPRISE),
    ("😲", EMOT_SURPRISE),
    ("🤯", EMOT_SURPRISE),
    ("😱", "EMOT_SURPRISE EMOT_FEAR"),
    ("🙀", "EMOT_SURPRISE EMOT_FEAR"),
    ("😠", EMOT_ANGER),
    ("😡", EMOT_ANGER),
    ("🤬", EMOT_ANGER),
    ("👿", EMOT_ANGER),
    ("💢", EMOT_ANGER),
    ("😤", EMOT_ANGER),
    ("😢", EMOT_SADNESS),
    ("😭", EMOT_SADNESS),
    ("😞", EMOT_SADNESS),
    ("😔", EMOT_SADNESS),
    ("😟", EMOT_SADNESS),
    ("🙁", EMOT_SADNESS),
    ("\u{2639}\u{fe0f}", EMOT_SADNESS),
    ("💔", EMOT_SADNESS),
    ("😿", EMOT_SADNESS),
    ("😨", EMOT_FEAR),
    ("😰", EMOT_FEAR),
    ("😧", EMOT_FEAR),
    ("😬", EMOT_FEAR),
    ("😖", EMOT_FEAR),
    ("🍕", ""),
    ("🦠", ""),
    ("💉", ""),
    ("😷", ""),
    ("🤒", ""),
    ("🏥", ""),
    ("👀", ""),
];

/// Emoticons and their categories.
pub const EMOTICONS: &[(&str, &str)] = &[
    (":)", EMOT_JOY),
    (":-)", EMOT_JOY),
    (":]", EMOT_JOY),
    ("=)", EMOT_JOY),
    (":D", EMOT_JOY),
    (":-D", EMOT_JOY),
    ("=D", EMOT_JOY),
    ("xD", EMOT_JOY),
    (";)", EMOT_JOY),
    (";-)", EMOT_JOY),
    (":P", EMOT_JOY),
    (":-P", EMOT_JOY),
    ("^_^", EMOT_JOY),
    ("<3", EMOT_LOVE),
    (":*", EMOT_LOVE),
    (":-*", EMOT_LOVE),
    (";*", EMOT_LOVE),
    (":o", EMOT_SURPRISE),
    (":-o", EMOT_SURPRISE),
    ("o_O", EMOT_SURPRISE),
    ("O_o", EMOT_SURPRISE),
    (">:(", EMOT_ANGER),
    (">:-(", EMOT_ANGER),
    (":@", EMOT_ANGER),
    (":(", EMOT_SADNESS),
    (":-(", EMOT_SADNESS),
    (":[", EMOT_SADNESS),
    ("=(", EMOT_SADNESS),
    (":'(", EMOT_SADNESS),
    (":'-(", EMOT_SADNESS),
    ("</3", EMOT_SADNESS),
    ("D:", "EMOT_FEAR EMOT_SADNESS"),
    (":S", EMOT_FEAR),
    (":-S", EMOT_FEAR),
    (":/", ""),
    (":-/", ""),
];

/// A builder pre-loaded with every built-in table.
pub fn builder() -> LexiconBuilder {
    let english_no_personal = ENGLISH_STOPWORDS
        .iter()
        .filter(|word| !PERSONAL_WORDS.contains(*word))
        .copied();

    let builder = LexiconBuilder::new()
        .contractions(CONTRACTIONS.iter().copied())
        .stopwords(StopwordList::English, ENGLISH_STOPWORDS.iter().copied())
        .stopwords(StopwordList::EnglishNoPersonal, english_no_personal)
        .stopwords(StopwordList::Custom, CUSTOM_STOPWORDS.iter().copied())
        .stopwords(StopwordList::French, FRENCH_STOPWORDS.iter().copied())
        .negations(NEGATIONS.iter().copied());

    let builder = DOMAIN_TERMS
        .iter()
        .fold(builder, |b, (canonical, variants)| {
            b.domain_term(*canonical, variants.iter().copied())
        });
    let builder = EMOJI
        .iter()
        .fold(builder, |b, (glyph, labels)| b.emoji(*glyph, *labels));
    let builder = EMOTICONS
        .iter()
        .fold(builder, |b, (glyph, labels)| b.emoticon(*glyph, *labels));

    EMOTION_CATEGORIES
        .iter()
        .fold(builder, |b, label| b.category(*label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_personal_variant_excludes_pronouns() {
        let lexicon = builder().build().unwrap();
        let no_personal = lexicon.stopwords(StopwordList::EnglishNoPersonal).unwrap();
        let standard = lexicon.stopwords(StopwordList::English).unwrap();

        for word in PERSONAL_WORDS {
            assert!(standard.contains(*word));
            assert!(!no_personal.contains(*word));
        }
        assert_eq!(standard.len() - no_personal.len(), PERSONAL_WORDS.len());
    }

    #[test]
    fn test_every_label_is_a_declared_category() {
        for (_, labels) in EMOJI.iter().chain(EMOTICONS.iter()) {
            for label in labels.split_whitespace() {
                assert!(EMOTION_CATEGORIES.contains(&label), "undeclared {label}");
            }
        }
    }
}
