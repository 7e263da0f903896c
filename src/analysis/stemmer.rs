//! Stemming algorithms for reducing words to their root forms.
//!
//! Stemming is delegated to the Snowball algorithms of the `rust-stemmers`
//! crate. A [`StemLanguageTable`] selects the algorithm for a language code
//! returned by language identification.
//!
//! # Examples
//!
//! ```
//! use doclex::analysis::stemmer::{StemLanguageTable, Stemmer};
//!
//! let table = StemLanguageTable::default();
//! let stemmer = table.stemmer_for("eng").unwrap();
//! assert_eq!(stemmer.stem("running"), "run");
//! assert!(table.stemmer_for("fra").is_err());
//! ```

use std::collections::HashMap;
use std::fmt;

use rust_stemmers::Algorithm;

use crate::error::{DoclexError, Result};

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Snowball stemmer for one language.
pub struct SnowballStemmer {
    algorithm: Algorithm,
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    /// Create a stemmer running the given Snowball algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        SnowballStemmer {
            algorithm,
            inner: rust_stemmers::Stemmer::create(algorithm),
        }
    }

    /// The Snowball algorithm this stemmer runs.
    pub fn algorithm(&self) -> Algorithm {
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
        self.inner.stem(word).into_owned()
    }

    fn name(&self) -> &'static str {
        "snowball"
    }
}

/// Fixed dictionary from language code to stemming algorithm.
///
/// The default table knows `eng`, `swe` and German under both its
/// bibliographic (`ger`) and terminological (`deu`) codes.
#[derive(Debug, Clone)]
pub struct StemLanguageTable {
    entries: HashMap<String, Algorithm>,
}

impl StemLanguageTable {
    /// Create an empty table.
    pub fn empty() -> Self {
        StemLanguageTable {
            entries: HashMap::new(),
        }
    }

    /// Add or replace the algorithm for a language code.
    pub fn with_entry<S: Into<String>>(mut self, code: S, algorithm: Algorithm) -> Self {
        self.entries.insert(code.into().to_ascii_lowercase(), algorithm);
        self
    }

    /// Look up the algorithm for a language code.
    pub fn algorithm_for(&self, code: &str) -> Result<Algorithm> {
        self.entries
            .get(&code.to_ascii_lowercase())
            .copied()
            .ok_or_else(|| DoclexError::unsupported_stem_language(code))
    }

    /// Build a stemmer for a language code.
    pub fn stemmer_for(&self, code: &str) -> Result<SnowballStemmer> {
        self.algorithm_for(code).map(SnowballStemmer::new)
    }

    /// Whether the table has an entry for the code.
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(&code.to_ascii_lowercase())
    }

    /// Registered codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl Default for StemLanguageTable {
    fn default() -> Self {
        StemLanguageTable::empty()
            .with_entry("eng", Algorithm::English)
            .with_entry("en", Algorithm::English)
            .with_entry("swe", Algorithm::Swedish)
            .with_entry("ger", Algorithm::German)
            .with_entry("deu", Algorithm::German)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stemmer() {
        let stemmer = SnowballStemmer::new(Algorithm::English);

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.stem("ran"), "ran");
        assert_eq!(stemmer.name(), "snowball");
    }

    #[test]
    fn test_default_table() {
        let table = StemLanguageTable::default();

        assert_eq!(table.algorithm_for("eng").unwrap(), Algorithm::English);
        assert_eq!(table.algorithm_for("en").unwrap(), Algorithm::English);
        assert_eq!(table.algorithm_for("swe").unwrap(), Algorithm::Swedish);
        assert_eq!(table.algorithm_for("ger").unwrap(), Algorithm::German);
        assert_eq!(table.algorithm_for("deu").unwrap(), Algorithm::German);
        assert_eq!(table.codes(), vec!["deu", "en", "eng", "ger", "swe"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = StemLanguageTable::default();
        assert!(table.contains("ENG"));
        assert!(table.stemmer_for("Swe").is_ok());
    }

    #[test]
    fn test_missing_language() {
        let table = StemLanguageTable::default();

        match table.stemmer_for("fra") {
            Err(DoclexError::UnsupportedStemLanguage(code)) => assert_eq!(code, "fra"),
            other => panic!("Expected UnsupportedStemLanguage, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_entry() {
        let table = StemLanguageTable::empty().with_entry("fra", Algorithm::French);
        assert!(table.contains("fra"));
        assert!(!table.contains("eng"));
    }
}
