//! Canonical tag mapping.
//!
//! Maps raw token variants onto the fixed tag vocabulary. Lookup walks the ruleset's table in
//! declaration order and the first tag listing a variant wins.

use std::{collections::HashSet, fmt};

use serde::Serialize;

use crate::{CanonicalTag, Ruleset};

/// Coarse orientation flags of a normalized text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContentFlags {
    /// Text is about low-light shooting.
    pub lowlight: bool,
    /// Text is about outdoor shooting (outdoor or travel).
    pub outdoor: bool,
    /// Text is about indoor shooting (indoor or studio).
    pub indoor: bool,
}

impl fmt::Display for ContentFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{lowlight={}, outdoor={}, indoor={}}}",
            self.lowlight, self.outdoor, self.indoor
        )
    }
}

/// Maps tokens to canonical tags with a fixed ruleset.
#[derive(Debug, Clone, Copy)]
pub struct CanonicalMap {
    /// Active keyword tables.
    ruleset: &'static Ruleset,
}

impl CanonicalMap {
    /// Creates a mapper over a ruleset.
    pub fn new(ruleset: &'static Ruleset) -> Self {
        Self { ruleset }
    }

    /// Returns the ruleset in use.
    pub fn ruleset(&self) -> &'static Ruleset {
        self.ruleset
    }

    /// Joins adjacent token pairs listed as compounds, so `low light` reads as `lowlight`.
    pub fn join_compounds(&self, tokens: &[String]) -> Vec<String> {
        if self.ruleset.compounds.is_empty() {
            return tokens.to_vec();
        }

        let mut joined = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            let compound = tokens.get(i + 1).and_then(|next| {
                self.ruleset
                    .compounds
                    .iter()
                    .find(|(first, second, _)| tokens[i] == *first && next == second)
            });
            match compound {
                Some((_, _, combined)) => {
                    joined.push((*combined).to_string());
                    i += 2;
                }
                None => {
                    joined.push(tokens[i].clone());
                    i += 1;
                }
            }
        }
        joined
    }

    /// Returns the tag a single token maps to, if any.
    pub fn lookup(&self, token: &str) -> Option<CanonicalTag> {
        self.ruleset
            .canonical
            .iter()
            .find(|(_, variants)| variants.contains(&token))
            .map(|(tag, _)| *tag)
    }

    /// Replaces every token that is a known variant with its tag's canonical token.
    ///
    /// Unmatched tokens pass through unchanged.
    pub fn normalize(&self, tokens: &[String]) -> Vec<String> {
        self.join_compounds(tokens)
            .into_iter()
            .map(|token| match self.lookup(&token) {
                Some(tag) => tag.as_str().to_string(),
                None => token,
            })
            .collect()
    }

    /// Returns every tag with at least one variant among the tokens, in table order.
    ///
    /// Unlike [`CanonicalMap::normalize`], a token listed under several tags counts for all of
    /// them.
    pub fn hits(&self, tokens: &[String]) -> Vec<CanonicalTag> {
        let joined = self.join_compounds(tokens);
        let present: HashSet<&str> = joined.iter().map(String::as_str).collect();
        let mut hits = Vec::new();
        for (tag, variants) in self.ruleset.canonical {
            if variants.iter().any(|v| present.contains(*v)) && !hits.contains(tag) {
                hits.push(*tag);
            }
        }
        hits
    }

    /// Derives orientation flags from normalized tokens.
    pub fn flags(&self, normalized: &[String]) -> ContentFlags {
        let mut flags = ContentFlags::default();
        for token in normalized {
            if self.ruleset.lowlight_cues.contains(&token.as_str()) {
                flags.lowlight = true;
            }
            let Some(tag) = CanonicalTag::parse(token) else {
                continue;
            };
            let environment = if tag.is_environment() {
                Some(tag)
            } else {
                tag.implied_environment()
            };
            match environment {
                Some(CanonicalTag::Outdoor) => flags.outdoor = true,
                Some(CanonicalTag::Indoor) => flags.indoor = true,
                _ => {}
            }
        }
        flags
    }
}
