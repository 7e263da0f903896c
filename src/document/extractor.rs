//! Plain-text extraction from document files.
//!
//! `.docx` files are ZIP archives holding OOXML; `docx-rs` parses the
//! package into a typed tree:
//!
//! ```text
//! Document
//!   ├── Paragraph
//!   │     ├── Run → Text | Tab | Break
//!   │     └── Hyperlink → Run → Text
//!   └── Table → Row → Cell → Paragraph | Table
//! ```
//!
//! Run text is concatenated per paragraph and paragraphs are joined with
//! newlines. Table cells are read row by row, each cell paragraph on its own
//! line.

use std::fs;
use std::path::Path;

use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild, read_docx,
};
use log::debug;

use crate::error::{DoclexError, Result};

/// Converts a document file into plain text.
pub trait TextExtractor: Send + Sync {
    /// Extract the plain text of the file at `path`.
    fn extract(&self, path: &Path) -> Result<String>;

    /// Get the name of this extractor.
    fn name(&self) -> &'static str;
}

/// Extractor for Office Open XML word-processing files.
#[derive(Clone, Debug, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new docx extractor.
    pub fn new() -> Self {
        DocxExtractor
    }

    /// Extract plain text from the raw bytes of a docx package.
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        let docx = read_docx(bytes)
            .map_err(|e| DoclexError::extraction_failed(format!("docx parse error: {e}")))?;

        let mut lines: Vec<String> = Vec::new();
        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(paragraph) => lines.push(paragraph_text(paragraph)),
                DocumentChild::Table(table) => push_table_lines(table, &mut lines),
                _ => {}
            }
        }

        Ok(lines.join("\n"))
    }
}

impl TextExtractor for DocxExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| {
            DoclexError::extraction_failed(format!("cannot read '{}': {e}", path.display()))
        })?;

        let text = self.extract_bytes(&bytes).map_err(|e| match e {
            DoclexError::ExtractionFailed(msg) => {
                DoclexError::extraction_failed(format!("'{}': {msg}", path.display()))
            }
            other => other,
        })?;

        debug!("Extracted {} bytes of text from {}", text.len(), path.display());
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "docx"
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&paragraph.children, &mut text);
    text
}

fn push_table_lines(table: &Table, lines: &mut Vec<String>) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => lines.push(paragraph_text(paragraph)),
                    TableCellContent::Table(nested) => push_table_lines(nested, lines),
                    _ => {}
                }
            }
        }
    }
}

fn push_children_text(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, out),
            _ => {}
        }
    }
}
