//! Stopword filtering for request and catalog text.
//!
//! The base list is a closed set of Indonesian function words and filler particles that show
//! up in rental requests ("saya pengen buat konten ..."). Extra languages from the
//! `stop-words` crate can be layered on top through configuration.

use std::collections::HashSet;

use stop_words::LANGUAGE;

use crate::MatchError;

/// Function words dropped from every token stream.
static BASE_STOPWORDS: &[&str] = &[
    "dan", "yang", "untuk", "dengan", "di", "ke", "dari", "atau", "pada", "ini", "itu", "saat",
    "karena", "dalam", "agar", "bagi", "guna", "serta", "ada", "akan", "tidak", "ya", "kok",
    "lah", "kah", "nih", "deh", "dong", "banget", "aja", "juga", "misalnya", "contoh", "seperti",
    "jadi", "kalau", "bila", "sudah", "belum", "saya", "aku", "kamu", "ingin", "pengen",
    "membuat", "buat", "konten", "kontennya", "kontenmu", "hari", "waktu",
];

/// A lowercase stopword set.
#[derive(Debug, Clone)]
pub struct Stopwords {
    /// Lowercased stopwords.
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates the base stopword set.
    pub fn new() -> Self {
        Self {
            words: BASE_STOPWORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Creates the base set extended with the named `stop-words` languages.
    pub fn with_languages(languages: &[String]) -> Result<Self, MatchError> {
        let mut stopwords = Self::new();
        for name in languages {
            let language = parse_language(name)
                .ok_or_else(|| MatchError::StopwordLanguage(name.clone()))?;
            stopwords.extend(stop_words::get(language));
        }
        Ok(stopwords)
    }

    /// Adds words to the set.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.insert(word.as_ref().to_lowercase());
        }
    }

    /// Checks if a token is a stopword. Tokens are expected to be lowercase already.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}

/// Maps a configured language name to a `stop-words` list.
fn parse_language(name: &str) -> Option<LANGUAGE> {
    match name.trim().to_lowercase().as_str() {
        "english" | "en" => Some(LANGUAGE::English),
        "indonesian" | "id" => Some(LANGUAGE::Indonesian),
        "malay" | "ms" => Some(LANGUAGE::Malay),
        "dutch" | "nl" => Some(LANGUAGE::Dutch),
        "french" | "fr" => Some(LANGUAGE::French),
        "german" | "de" => Some(LANGUAGE::German),
        "italian" | "it" => Some(LANGUAGE::Italian),
        "portuguese" | "pt" => Some(LANGUAGE::Portuguese),
        "spanish" | "es" => Some(LANGUAGE::Spanish),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    impl Stopwords {
        /// Test-only: checks if the set is empty.
        fn is_empty(&self) -> bool {
            self.words.is_empty()
        }
    }

    #[test]
    fn base_list_covers_filler_words() {
        let sw = Stopwords::new();
        for word in ["saya", "pengen", "buat", "konten", "yang", "banget"] {
            assert!(sw.contains(word), "{word} should be a stopword");
        }
    }

    #[test]
    fn domain_words_are_kept() {
        let sw = Stopwords::new();
        for word in ["outdoor", "murah", "vlog", "malam", "studio", "travel"] {
            assert!(!sw.contains(word), "{word} should not be a stopword");
        }
    }

    #[test]
    fn english_is_opt_in() {
        assert!(!Stopwords::new().contains("the"));
        let sw = Stopwords::with_languages(&["english".to_string()]).unwrap();
        assert!(sw.contains("the"));
        assert!(sw.contains("saya"));
        assert!(sw.words.len() > Stopwords::new().words.len());
    }

    #[test]
    fn unknown_language_is_rejected() {
        let err = Stopwords::with_languages(&["klingon".to_string()]).unwrap_err();
        assert!(matches!(err, MatchError::StopwordLanguage(name) if name == "klingon"));
    }

    #[test]
    fn extend_lowercases() {
        let mut sw = Stopwords::new();
        sw.extend(["Tolong"]);
        assert!(sw.contains("tolong"));
        assert!(!sw.is_empty());
    }
}
