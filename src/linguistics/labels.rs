//! POS tag → human-readable label table.
//!
//! The default table ships with the crate (`data/pos_labels.json`), is
//! parsed on first use and shared for the rest of the process.
//!
//! # Examples
//!
//! ```
//! use doclex::linguistics::labels::PosLabelTable;
//!
//! let table = PosLabelTable::shared();
//! assert_eq!(table.label("NNS").unwrap(), "noun, common, plural");
//! assert!(table.label("XYZ").is_err());
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::error::{DoclexError, Result};

const DEFAULT_LABELS_JSON: &str = include_str!("../../data/pos_labels.json");

static DEFAULT_TABLE: LazyLock<Arc<PosLabelTable>> = LazyLock::new(|| {
    Arc::new(
        PosLabelTable::from_json_str(DEFAULT_LABELS_JSON)
            .expect("Embedded POS label table should be valid"),
    )
});

/// Read-only mapping from POS tag to explanation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PosLabelTable {
    labels: BTreeMap<String, String>,
}

impl PosLabelTable {
    /// An empty table.
    pub fn empty() -> Self {
        PosLabelTable::default()
    }

    /// The process-wide default table.
    pub fn shared() -> Arc<PosLabelTable> {
        Arc::clone(&DEFAULT_TABLE)
    }

    /// Parse a table from a JSON object of `"TAG": "label"` pairs.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let labels: BTreeMap<String, String> = serde_json::from_str(json)?;
        if labels.is_empty() {
            return Err(DoclexError::config("POS label table is empty"));
        }
        Ok(PosLabelTable { labels })
    }

    /// Load a table from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Add or replace a label.
    pub fn with_label<T: Into<String>, L: Into<String>>(mut self, tag: T, label: L) -> Self {
        self.labels.insert(tag.into(), label.into());
        self
    }

    /// Translate a tag; fails with `UnknownPosTag` for tags not in the table.
    pub fn label(&self, tag: &str) -> Result<&str> {
        self.labels
            .get(tag)
            .map(String::as_str)
            .ok_or_else(|| DoclexError::unknown_pos_tag(tag))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over `(tag, label)` pairs in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels.iter().map(|(tag, label)| (tag.as_str(), label.as_str()))
    }
}
