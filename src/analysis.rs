//! Text analysis module for doclex.
//!
//! This module turns a document body into tokens. The pipeline is made of
//! char filters (raw text normalization), a tokenizer and token filters, and
//! is wrapped by an [`analyzer::Analyzer`].
//!
//! ```text
//! body → PatternReplaceCharFilter → WhitespaceTokenizer → LowercaseFilter → tokens
//! ```

pub mod analyzer;
pub mod char_filter;
pub mod stemmer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
