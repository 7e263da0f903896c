//! Error types for the doclex library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`DoclexError`] enum. Every variant is terminal for the call that raised
//! it: a failed operation never modifies the analyzed document.
//!
//! # Examples
//!
//! ```
//! use doclex::error::{DoclexError, Result};
//!
//! fn pick_language(code: &str) -> Result<&str> {
//!     match code {
//!         "eng" => Ok("english"),
//!         other => Err(DoclexError::unsupported_stem_language(other)),
//!     }
//! }
//!
//! assert!(pick_language("eng").is_ok());
//! assert!(pick_language("fra").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for doclex operations.
#[derive(Error, Debug)]
pub enum DoclexError {
    /// I/O errors (reading documents, configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input could not be turned into a document
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The file exists but its extension is not a supported document format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The text extractor failed to produce a body
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    /// The language identifier could not classify the text
    #[error("Language unknown: {0}")]
    LanguageUnknown(String),

    /// A POS tag has no entry in the label table
    #[error("Unknown POS tag: {0}")]
    UnknownPosTag(String),

    /// A POS tag does not map to a lemmatization category
    #[error("Unmappable POS category: {0}")]
    UnmappablePosCategory(String),

    /// No stemming algorithm is registered for the language code
    #[error("Unsupported stem language: {0}")]
    UnsupportedStemLanguage(String),

    /// POS tagger or lemmatizer failures
    #[error("Annotation error: {0}")]
    Annotation(String),

    /// Analysis pipeline errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with DoclexError.
pub type Result<T> = std::result::Result<T, DoclexError>;

impl DoclexError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        DoclexError::InvalidInput(msg.into())
    }

    /// Create a new unsupported format error.
    pub fn unsupported_format<S: Into<String>>(msg: S) -> Self {
        DoclexError::UnsupportedFormat(msg.into())
    }

    /// Create a new extraction error.
    pub fn extraction_failed<S: Into<String>>(msg: S) -> Self {
        DoclexError::ExtractionFailed(msg.into())
    }

    /// Create a new language unknown error.
    pub fn language_unknown<S: Into<String>>(msg: S) -> Self {
        DoclexError::LanguageUnknown(msg.into())
    }

    /// Create a new unknown POS tag error.
    pub fn unknown_pos_tag<S: Into<String>>(tag: S) -> Self {
        DoclexError::UnknownPosTag(tag.into())
    }

    /// Create a new unmappable POS category error.
    pub fn unmappable_pos_category<S: Into<String>>(tag: S) -> Self {
        DoclexError::UnmappablePosCategory(tag.into())
    }

    /// Create a new unsupported stem language error.
    pub fn unsupported_stem_language<S: Into<String>>(code: S) -> Self {
        DoclexError::UnsupportedStemLanguage(code.into())
    }

    /// Create a new annotation error.
    pub fn annotation<S: Into<String>>(msg: S) -> Self {
        DoclexError::Annotation(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        DoclexError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DoclexError::Config(msg.into())
    }
}
