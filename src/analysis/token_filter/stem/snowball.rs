//! Snowball stemmers backed by `rust-stemmers`.

use std::fmt;
use std::str::FromStr;

use rust_stemmers::Algorithm;
use serde::{Deserialize, Serialize};

use super::Stemmer;
use crate::error::NormalizeError;

/// Languages with a Snowball stemmer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemmerAlgorithm {
    Arabic,
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Italian,
    Norwegian,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
    Tamil,
    Turkish,
}

impl StemmerAlgorithm {
    pub const ALL: [StemmerAlgorithm; 18] = [
        StemmerAlgorithm::Arabic,
        StemmerAlgorithm::Danish,
        StemmerAlgorithm::Dutch,
        StemmerAlgorithm::English,
        StemmerAlgorithm::Finnish,
        StemmerAlgorithm::French,
        StemmerAlgorithm::German,
        StemmerAlgorithm::Greek,
        StemmerAlgorithm::Hungarian,
        StemmerAlgorithm::Italian,
        StemmerAlgorithm::Norwegian,
        StemmerAlgorithm::Portuguese,
        StemmerAlgorithm::Romanian,
        StemmerAlgorithm::Russian,
        StemmerAlgorithm::Spanish,
        StemmerAlgorithm::Swedish,
        StemmerAlgorithm::Tamil,
        StemmerAlgorithm::Turkish,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StemmerAlgorithm::Arabic => "arabic",
            StemmerAlgorithm::Danish => "danish",
            StemmerAlgorithm::Dutch => "dutch",
            StemmerAlgorithm::English => "english",
            StemmerAlgorithm::Finnish => "finnish",
            StemmerAlgorithm::French => "french",
            StemmerAlgorithm::German => "german",
            StemmerAlgorithm::Greek => "greek",
            StemmerAlgorithm::Hungarian => "hungarian",
            StemmerAlgorithm::Italian => "italian",
            StemmerAlgorithm::Norwegian => "norwegian",
            StemmerAlgorithm::Portuguese => "portuguese",
            StemmerAlgorithm::Romanian => "romanian",
            StemmerAlgorithm::Russian => "russian",
            StemmerAlgorithm::Spanish => "spanish",
            StemmerAlgorithm::Swedish => "swedish",
            StemmerAlgorithm::Tamil => "tamil",
            StemmerAlgorithm::Turkish => "turkish",
        }
    }

    fn to_algorithm(self) -> Algorithm {
        match self {
            StemmerAlgorithm::Arabic => Algorithm::Arabic,
            StemmerAlgorithm::Danish => Algorithm::Danish,
            StemmerAlgorithm::Dutch => Algorithm::Dutch,
            StemmerAlgorithm::English => Algorithm::English,
            StemmerAlgorithm::Finnish => Algorithm::Finnish,
            StemmerAlgorithm::French => Algorithm::French,
            StemmerAlgorithm::German => Algorithm::German,
            StemmerAlgorithm::Greek => Algorithm::Greek,
            StemmerAlgorithm::Hungarian => Algorithm::Hungarian,
            StemmerAlgorithm::Italian => Algorithm::Italian,
            StemmerAlgorithm::Norwegian => Algorithm::Norwegian,
            StemmerAlgorithm::Portuguese => Algorithm::Portuguese,
            StemmerAlgorithm::Romanian => Algorithm::Romanian,
            StemmerAlgorithm::Russian => Algorithm::Russian,
            StemmerAlgorithm::Spanish => Algorithm::Spanish,
            StemmerAlgorithm::Swedish => Algorithm::Swedish,
            StemmerAlgorithm::Tamil => Algorithm::Tamil,
            StemmerAlgorithm::Turkish => Algorithm::Turkish,
        }
    }
}

impl fmt::Display for StemmerAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StemmerAlgorithm {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == name)
            .ok_or_else(|| NormalizeError::invalid_config("stemmer", s))
    }
}

/// A Snowball stemmer for one language.
pub struct SnowballStemmer {
    algorithm: StemmerAlgorithm,
    stemmer: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    pub fn new(algorithm: StemmerAlgorithm) -> Self {
        SnowballStemmer {
            algorithm,
            stemmer: rust_stemmers::Stemmer::create(algorithm.to_algorithm()),
        }
    }

    pub fn english() -> Self {
        Self::new(StemmerAlgorithm::English)
    }

    pub fn french() -> Self {
        Self::new(StemmerAlgorithm::French)
    }

    pub fn algorithm(&self) -> StemmerAlgorithm {
        self.algorithm
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }

    fn name(&self) -> &'static str {
        "snowball"
    }
}
