//! # doclex
//!
//! Lexical statistics for a single document.
//!
//! ## Features
//!
//! - Documents from literal text or `.doc*` files (OOXML text extraction)
//! - Punctuation-stripped, lowercase word tokenization
//! - Word counts and frequency tables
//! - Language identification
//! - Part-of-speech tagging with readable tag labels
//! - Lemmatization and Snowball stemming
//!
//! ```
//! use doclex::prelude::*;
//!
//! let analyzer = DocumentAnalyzer::new(Document::from_text("The cats are running. The dog ran."))
//!     .unwrap()
//!     .with_identifier(std::sync::Arc::new(FixedLanguageIdentifier::new("eng")));
//!
//! assert_eq!(analyzer.word_count(true).unwrap(), 6);
//! assert_eq!(analyzer.pos_tags(false).unwrap().get("ran"), Some("VBD"));
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod document;
pub mod document_analyzer;
pub mod error;
pub mod language;
pub mod linguistics;
pub mod stats;

pub mod prelude {
    pub use crate::config::AnalyzerConfig;
    pub use crate::document::{Document, DocumentSource};
    pub use crate::document_analyzer::{AnalysisReport, DocumentAnalyzer, ReportOptions};
    pub use crate::error::{DoclexError, Result};
    pub use crate::language::{FixedLanguageIdentifier, LanguageCode, LanguageIdentifier};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
