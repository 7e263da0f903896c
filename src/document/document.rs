//! The analyzed document and its construction.

use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::document::extractor::{DocxExtractor, TextExtractor};
use crate::error::{DoclexError, Result};

/// Extension prefix of the supported word-processing formats (`doc`, `docx`, `docm`).
const SUPPORTED_EXTENSION_PREFIX: &str = "doc";

/// Where a document body comes from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentSource {
    /// A file whose text is extracted.
    Path(PathBuf),
    /// Literal text used verbatim as the body.
    Text(String),
}

impl DocumentSource {
    /// Resolve a single string the way a user typing a path or a sentence
    /// expects: an existing file becomes [`DocumentSource::Path`], anything
    /// else is literal [`DocumentSource::Text`].
    pub fn infer(indata: &str) -> Self {
        let path = Path::new(indata);
        if path.is_file() {
            DocumentSource::Path(path.to_path_buf())
        } else {
            DocumentSource::Text(indata.to_string())
        }
    }
}

/// Origin recorded on a constructed document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentOrigin {
    File(PathBuf),
    Text,
}

/// A document with an immutable plain-text body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    body: String,
    origin: DocumentOrigin,
}

/// Whether the file extension matches `doc*`, case-insensitively.
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase().starts_with(SUPPORTED_EXTENSION_PREFIX))
        .unwrap_or(false)
}

impl Document {
    /// Build a document from a source, extracting `.doc*` files with
    /// [`DocxExtractor`].
    pub fn from_source(source: DocumentSource) -> Result<Self> {
        match source {
            DocumentSource::Path(path) => Self::from_path(path),
            DocumentSource::Text(text) => Ok(Self::from_text(text)),
        }
    }

    /// Build a document whose body is `text`, verbatim.
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Document {
            body: text.into(),
            origin: DocumentOrigin::Text,
        }
    }

    /// Build a document from a file using the default extractor.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path_with(path, &DocxExtractor::new())
    }

    /// Build a document from a file using a custom extractor.
    ///
    /// Fails with `InvalidInput` when the path is not an existing file and
    /// with `UnsupportedFormat` when its extension does not match `doc*`.
    pub fn from_path_with<P: AsRef<Path>>(path: P, extractor: &dyn TextExtractor) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(DoclexError::invalid_input(format!(
                "'{}' is not an existing file",
                path.display()
            )));
        }

        if !is_supported_extension(path) {
            return Err(DoclexError::unsupported_format(format!(
                "'{}' does not have a .doc* extension",
                path.display()
            )));
        }

        debug!("Extracting {} with the {} extractor", path.display(), extractor.name());
        let body = extractor.extract(path)?;

        Ok(Document {
            body,
            origin: DocumentOrigin::File(path.to_path_buf()),
        })
    }

    /// The plain-text body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Where the body came from.
    pub fn origin(&self) -> &DocumentOrigin {
        &self.origin
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct UppercaseExtractor;

    impl TextExtractor for UppercaseExtractor {
        fn extract(&self, path: &Path) -> Result<String> {
            Ok(fs::read_to_string(path)?.to_uppercase())
        }

        fn name(&self) -> &'static str {
            "uppercase"
        }
    }

    #[test]
    fn test_text_source_is_verbatim() {
        let doc = Document::from_source(DocumentSource::Text("  Keep  it. ".to_string())).unwrap();
        assert_eq!(doc.body(), "  Keep  it. ");
        assert_eq!(doc.origin(), &DocumentOrigin::Text);
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension(Path::new("a.doc")));
        assert!(is_supported_extension(Path::new("a.DOCX")));
        assert!(is_supported_extension(Path::new("dir.v2/a.Docm")));
        assert!(!is_supported_extension(Path::new("a.pdf")));
        assert!(!is_supported_extension(Path::new("a.txt")));
        assert!(!is_supported_extension(Path::new("document")));
    }

    #[test]
    fn test_missing_file_is_invalid_input() {
        let result = Document::from_source(DocumentSource::Path(PathBuf::from(
            "/nonexistent/file.docx",
        )));
        assert!(matches!(result, Err(DoclexError::InvalidInput(_))));
    }

    #[test]
    fn test_unsupported_extension_fails_eagerly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.pdf");
        fs::write(&path, "%PDF-1.4").unwrap();

        let result = Document::from_path(&path);
        assert!(matches!(result, Err(DoclexError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_custom_extractor() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.doc");
        fs::write(&path, "quiet words").unwrap();

        let doc = Document::from_path_with(&path, &UppercaseExtractor).unwrap();
        assert_eq!(doc.body(), "QUIET WORDS");
        assert_eq!(doc.origin(), &DocumentOrigin::File(path));
    }

    #[test]
    fn test_infer_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.docx");
        fs::write(&path, "x").unwrap();

        let path_str = path.to_str().unwrap();
        assert_eq!(DocumentSource::infer(path_str), DocumentSource::Path(path.clone()));
        assert_eq!(
            DocumentSource::infer("just some words"),
            DocumentSource::Text("just some words".to_string())
        );
        // Directories are not files.
        let dir_str = dir.path().to_str().unwrap();
        assert_eq!(
            DocumentSource::infer(dir_str),
            DocumentSource::Text(dir_str.to_string())
        );
    }

    #[test]
    fn test_display_writes_body() {
        let doc = Document::from_text("The dog ran.");
        assert_eq!(format!("{doc}"), "The dog ran.");
    }
}
