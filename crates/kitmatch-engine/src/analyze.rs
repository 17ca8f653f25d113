//! Text analysis pipeline.
//!
//! Runs text through the tokenizer, compound joining and canonical mapping, derives the
//! orientation flags, then applies the optional stemmer to produce the terms the corpus
//! vector space works with.

use kitmatch_config::Settings;
use serde::Serialize;

use crate::{
    CanonicalMap, ContentFlags, MatchError, RULESET_VERSION, Ruleset, Stopwords, Tokenizer,
    tokenize::parse_stemmer,
};

/// Every intermediate form of an analyzed text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Tokens after cleaning and stopword removal.
    pub tokens: Vec<String>,
    /// Tokens after compound joining and canonical mapping.
    pub normalized: Vec<String>,
    /// Normalized tokens after stemming; identical to `normalized` without a stemmer.
    pub terms: Vec<String>,
    /// Orientation flags of the normalized tokens.
    pub flags: ContentFlags,
}

/// Tokenizer and canonical mapper configured together.
#[derive(Clone)]
pub struct Analyzer {
    /// Token splitter and stemmer.
    tokenizer: Tokenizer,
    /// Canonical tag mapper.
    canon: CanonicalMap,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Tokenizer::default(), Ruleset::for_version(RULESET_VERSION))
    }
}

impl Analyzer {
    /// Creates an analyzer from its parts.
    pub fn new(tokenizer: Tokenizer, ruleset: &'static Ruleset) -> Self {
        Self {
            tokenizer,
            canon: CanonicalMap::new(ruleset),
        }
    }

    /// Builds an analyzer from configured settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, MatchError> {
        let stopwords = Stopwords::with_languages(&settings.stopword_languages)?;
        let tokenizer = Tokenizer::new(stopwords).with_stemmer(parse_stemmer(&settings.stemmer)?);
        Ok(Self::new(tokenizer, Ruleset::for_version(settings.ruleset)))
    }

    /// Returns the tokenizer.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Returns the canonical mapper.
    pub fn canon(&self) -> &CanonicalMap {
        &self.canon
    }

    /// Returns the active ruleset.
    pub fn ruleset(&self) -> &'static Ruleset {
        self.canon.ruleset()
    }

    /// Runs the full pipeline over a text.
    pub fn analyze(&self, text: &str) -> Analysis {
        let tokens = self.tokenizer.tokenize(text);
        let normalized = self.canon.normalize(&tokens);
        let flags = self.canon.flags(&normalized);
        let terms = self.tokenizer.stem(normalized.clone());
        Analysis {
            tokens,
            normalized,
            terms,
            flags,
        }
    }
}
