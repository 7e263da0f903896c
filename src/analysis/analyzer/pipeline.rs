//! Pipeline analyzer that combines tokenizers and filters.
//!
//! Processing order:
//! 1. Char filters, in the order they were added
//! 2. Tokenizer
//! 3. Token filters, in the order they were added
//!
//! Token offsets are mapped back onto the unfiltered text afterwards.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use doclex::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use doclex::analysis::char_filter::PatternReplaceCharFilter;
//! use doclex::analysis::token_filter::LowercaseFilter;
//! use doclex::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_char_filter(Arc::new(PatternReplaceCharFilter::new(r"-", "").unwrap()))
//!     .add_filter(Arc::new(LowercaseFilter::new()));
//!
//! let tokens: Vec<_> = analyzer.analyze("Foo-Bar baz").unwrap().collect();
//! assert_eq!(tokens[0].text, "foobar");
//! assert_eq!(tokens[0].end_offset, 7);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::char_filter::{CharFilter, Transformation};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

/// Which end of a token an offset belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OffsetBound {
    Start,
    End,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// The configured name of this pipeline.
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    /// Maps an offset in filtered text back to the text before the filter ran.
    ///
    /// A deletion sitting exactly at the offset belongs to the token only
    /// when the offset is a start: `"ran."` keeps its end before the dot.
    fn correct_offset(offset: usize, transformations: &[Transformation], bound: OffsetBound) -> usize {
        let mut delta: isize = 0;

        // Transformations are ordered by position.
        for t in transformations {
            let past = match bound {
                OffsetBound::Start => offset >= t.new_end,
                OffsetBound::End => offset > t.new_end || (offset == t.new_end && t.new_len() > 0),
            };

            if past {
                delta += t.original_len() as isize - t.new_len() as isize;
            } else if offset >= t.new_start && offset < t.new_end {
                // Inside a replacement: interpolate linearly.
                let offset_in_new = offset - t.new_start;
                return t.original_start + offset_in_new * t.original_len() / t.new_len();
            } else {
                break;
            }
        }

        (offset as isize + delta).max(0) as usize
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut filtered_text = text.to_string();
        let mut filter_transformations = Vec::with_capacity(self.char_filters.len());

        for char_filter in &self.char_filters {
            let (new_text, transformations) = char_filter.filter(&filtered_text);
            filtered_text = new_text;
            filter_transformations.push(transformations);
        }

        let mut tokens = self.tokenizer.tokenize(&filtered_text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        if filter_transformations.iter().all(Vec::is_empty) {
            return Ok(tokens);
        }

        // Final -> Filter N -> ... -> Filter 1 -> Original
        let corrected: Vec<_> = tokens
            .map(|mut token| {
                for transformations in filter_transformations.iter().rev() {
                    token.start_offset =
                        Self::correct_offset(token.start_offset, transformations, OffsetBound::Start);
                    token.end_offset =
                        Self::correct_offset(token.end_offset, transformations, OffsetBound::End);
                }
                token
            })
            .collect();

        Ok(Box::new(corrected.into_iter()))
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::PatternReplaceCharFilter;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::LowercaseFilter;
    use crate::analysis::tokenizer::WhitespaceTokenizer;

    #[test]
    fn test_pipeline_analyzer() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("lowercase_words");

        let tokens: Vec<Token> = analyzer.analyze("Hello THE World").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "the");
        assert_eq!(tokens[2].text, "world");
        assert_eq!(analyzer.pipeline_name(), "lowercase_words");
    }

    #[test]
    fn test_pipeline_with_pattern_replace() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(r"-", "").unwrap()));

        let tokens: Vec<Token> = analyzer.analyze("123-456 789").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "123456");
        assert_eq!(tokens[1].text, "789");
    }

    #[test]
    fn test_offset_correction_inner_deletion() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(r"-", "").unwrap()));

        // "foo-bar" (7 bytes) -> "foobar" (6 bytes)
        let tokens: Vec<Token> = analyzer.analyze("foo-bar").unwrap().collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "foobar");
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 7);
    }

    #[test]
    fn test_offset_correction_edge_deletions() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::ascii_punctuation().unwrap()));

        let text = "(dog) ran.";
        let tokens: Vec<Token> = analyzer.analyze(text).unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(&text[tokens[0].start_offset..tokens[0].end_offset], "dog");
        assert_eq!(&text[tokens[1].start_offset..tokens[1].end_offset], "ran");
    }

    #[test]
    fn test_offset_correction_growing_replacement() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(r"&", " and ").unwrap()));

        let text = "salt&pepper now";
        let tokens: Vec<Token> = analyzer.analyze(text).unwrap().collect();

        assert_eq!(tokens.len(), 4);
        assert_eq!(&text[tokens[0].start_offset..tokens[0].end_offset], "salt");
        assert_eq!(&text[tokens[2].start_offset..tokens[2].end_offset], "pepper");
        assert_eq!(&text[tokens[3].start_offset..tokens[3].end_offset], "now");
    }
}
