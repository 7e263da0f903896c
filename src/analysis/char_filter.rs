//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text before it reaches the tokenizer.
//! Each filter reports the edits it made as [`Transformation`]s so that the
//! analyzer can map token offsets back onto the original text.

/// Represents a change in the text, mapping a range in the original text
/// to a range in the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub original_start: usize,
    pub original_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Transformation {
    pub fn new(
        original_start: usize,
        original_end: usize,
        new_start: usize,
        new_end: usize,
    ) -> Self {
        Self {
            original_start,
            original_end,
            new_start,
            new_end,
        }
    }

    /// Byte length of the replaced range in the original text.
    pub fn original_len(&self) -> usize {
        self.original_end - self.original_start
    }

    /// Byte length of the replacement in the new text.
    pub fn new_len(&self) -> usize {
        self.new_end - self.new_start
    }
}

/// Trait for character filters that transform text before tokenization.
///
/// Implementations return the filtered text along with the transformations
/// that occurred, ordered by position.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> (String, Vec<Transformation>);

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod pattern_replace;

pub use pattern_replace::PatternReplaceCharFilter;
