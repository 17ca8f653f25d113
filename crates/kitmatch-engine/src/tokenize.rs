//! Text tokenization.
//!
//! Lowercases text, treats `/ , . -` as separators, strips everything that is not
//! alphanumeric from each piece and drops stopwords. Stemming is an optional post-step applied
//! only where term identity matters more than keyword lookup (the corpus vector space).

use rust_stemmers::{Algorithm, Stemmer};

use crate::{MatchError, Stopwords};

/// Characters treated as token separators in addition to whitespace.
const SEPARATORS: [char; 4] = ['/', ',', '.', '-'];

/// Splits text into lowercase alphanumeric tokens with stopwords removed.
#[derive(Clone, Default)]
pub struct Tokenizer {
    /// Words dropped after cleaning.
    stopwords: Stopwords,
    /// Snowball algorithm for the optional stemming step.
    stemmer: Option<Algorithm>,
}

impl Tokenizer {
    /// Creates a tokenizer with the given stopwords and no stemmer.
    pub fn new(stopwords: Stopwords) -> Self {
        Self {
            stopwords,
            stemmer: None,
        }
    }

    /// Sets the stemming algorithm used by [`Tokenizer::stem`].
    pub fn with_stemmer(mut self, stemmer: Option<Algorithm>) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Tokenizes text. Empty or punctuation-only input yields no tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase().replace(SEPARATORS, " ");
        lowered
            .split_whitespace()
            .map(|piece| piece.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
            .filter(|token| !token.is_empty() && !self.stopwords.contains(token))
            .collect()
    }

    /// Applies the configured stemmer. Without one, tokens pass through unchanged.
    pub fn stem(&self, tokens: Vec<String>) -> Vec<String> {
        let Some(algorithm) = self.stemmer else {
            return tokens;
        };
        let stemmer = Stemmer::create(algorithm);
        tokens
            .into_iter()
            .map(|token| stemmer.stem(&token).into_owned())
            .filter(|token| !token.is_empty())
            .collect()
    }
}

/// Parses a stemmer name from configuration.
///
/// `"none"` (or an empty string) disables stemming; otherwise the name selects a Snowball
/// algorithm.
pub fn parse_stemmer(name: &str) -> Result<Option<Algorithm>, MatchError> {
    let algorithm = match name.trim().to_lowercase().as_str() {
        "" | "none" => return Ok(None),
        "arabic" => Algorithm::Arabic,
        "danish" => Algorithm::Danish,
        "dutch" => Algorithm::Dutch,
        "english" => Algorithm::English,
        "finnish" => Algorithm::Finnish,
        "french" => Algorithm::French,
        "german" => Algorithm::German,
        "greek" => Algorithm::Greek,
        "hungarian" => Algorithm::Hungarian,
        "italian" => Algorithm::Italian,
        "norwegian" => Algorithm::Norwegian,
        "portuguese" => Algorithm::Portuguese,
        "romanian" => Algorithm::Romanian,
        "russian" => Algorithm::Russian,
        "spanish" => Algorithm::Spanish,
        "swedish" => Algorithm::Swedish,
        "tamil" => Algorithm::Tamil,
        "turkish" => Algorithm::Turkish,
        _ => return Err(MatchError::Stemmer(name.to_string())),
    };
    Ok(Some(algorithm))
}
