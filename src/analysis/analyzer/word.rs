//! Word analyzer used to tokenize document bodies.
//!
//! # Pipeline
//!
//! 1. PatternReplaceCharFilter (deletes ASCII punctuation)
//! 2. WhitespaceTokenizer
//! 3. LowercaseFilter
//!
//! # Examples
//!
//! ```
//! use doclex::analysis::analyzer::WordAnalyzer;
//!
//! let analyzer = WordAnalyzer::new().unwrap();
//! let tokens = analyzer.tokenize("The cats are running. The dog ran.").unwrap();
//! assert_eq!(tokens, vec!["the", "cats", "are", "running", "the", "dog", "ran"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::PatternReplaceCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::LowercaseFilter;
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::error::Result;

/// Lowercase, punctuation-stripped, whitespace-delimited words.
#[derive(Clone, Debug)]
pub struct WordAnalyzer {
    inner: PipelineAnalyzer,
}

impl WordAnalyzer {
    /// Create the word analyzer.
    pub fn new() -> Result<Self> {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::ascii_punctuation()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("word");

        Ok(WordAnalyzer { inner: analyzer })
    }

    /// Tokenize text into its word strings, in order.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for WordAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
