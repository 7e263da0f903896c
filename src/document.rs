//! Documents and text extraction.
//!
//! A [`Document`] owns the immutable plain-text body that every analysis
//! operation reads. It is built from a [`DocumentSource`]: either literal
//! text, or a path to a `.doc*` file whose text is produced by a
//! [`TextExtractor`].
//!
//! # Examples
//!
//! ```
//! use doclex::document::{Document, DocumentSource};
//!
//! let doc = Document::from_source(DocumentSource::Text("The dog ran.".to_string())).unwrap();
//! assert_eq!(doc.body(), "The dog ran.");
//! assert_eq!(doc.to_string(), "The dog ran.");
//! ```

pub mod document;
pub mod extractor;

pub use document::{Document, DocumentOrigin, DocumentSource, is_supported_extension};
pub use extractor::{DocxExtractor, TextExtractor};
