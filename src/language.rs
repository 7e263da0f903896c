//! Language identification.
//!
//! A [`LanguageIdentifier`] guesses the language of a whole document body and
//! returns a [`LanguageCode`] (ISO 639-3, e.g. `eng`, `swe`, `deu`). The code
//! parameterizes POS tagging, lemmatization and stemming.
//!
//! # Examples
//!
//! ```
//! use doclex::language::{FixedLanguageIdentifier, LanguageIdentifier};
//!
//! let identifier = FixedLanguageIdentifier::new("eng");
//! assert_eq!(identifier.identify("anything").unwrap().as_str(), "eng");
//! ```

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{DoclexError, Result};

/// A language code as produced by a [`LanguageIdentifier`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a language code; codes are stored lowercase.
    pub fn new<S: AsRef<str>>(code: S) -> Self {
        LanguageCode(code.as_ref().trim().to_ascii_lowercase())
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// English name of the language, when the code is known to whatlang.
    pub fn english_name(&self) -> Option<&'static str> {
        whatlang::Lang::from_code(&self.0).map(|lang| lang.eng_name())
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        LanguageCode::new(code)
    }
}

/// Guesses the language of a text.
pub trait LanguageIdentifier: Send + Sync {
    /// Identify the language of `text`; fails with `LanguageUnknown` when the
    /// text cannot be classified.
    fn identify(&self, text: &str) -> Result<LanguageCode>;

    /// Get the name of this identifier.
    fn name(&self) -> &'static str;
}

/// Trigram-based identification backed by the `whatlang` crate.
#[derive(Clone, Debug, Default)]
pub struct WhatlangIdentifier {
    min_confidence: f64,
    require_reliable: bool,
}

impl WhatlangIdentifier {
    /// Create an identifier that accepts any detection.
    pub fn new() -> Self {
        WhatlangIdentifier::default()
    }

    /// Reject detections whose confidence is below `min_confidence` (0..=1).
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Reject detections that whatlang flags as unreliable.
    pub fn with_require_reliable(mut self, require_reliable: bool) -> Self {
        self.require_reliable = require_reliable;
        self
    }
}

impl LanguageIdentifier for WhatlangIdentifier {
    fn identify(&self, text: &str) -> Result<LanguageCode> {
        let info = whatlang::detect(text)
            .ok_or_else(|| DoclexError::language_unknown("no language could be detected"))?;

        debug!(
            "Detected {} (confidence {:.3}, reliable: {})",
            info.lang().code(),
            info.confidence(),
            info.is_reliable()
        );

        if self.require_reliable && !info.is_reliable() {
            return Err(DoclexError::language_unknown(format!(
                "detection of '{}' is not reliable",
                info.lang().code()
            )));
        }

        if info.confidence() < self.min_confidence {
            return Err(DoclexError::language_unknown(format!(
                "confidence {:.3} for '{}' is below {:.3}",
                info.confidence(),
                info.lang().code(),
                self.min_confidence
            )));
        }

        Ok(LanguageCode::new(info.lang().code()))
    }

    fn name(&self) -> &'static str {
        "whatlang"
    }
}

/// Identifier that always answers with the same code.
#[derive(Clone, Debug)]
pub struct FixedLanguageIdentifier {
    code: LanguageCode,
}

impl FixedLanguageIdentifier {
    pub fn new<S: AsRef<str>>(code: S) -> Self {
        FixedLanguageIdentifier {
            code: LanguageCode::new(code),
        }
    }
}

impl LanguageIdentifier for FixedLanguageIdentifier {
    fn identify(&self, _text: &str) -> Result<LanguageCode> {
        Ok(self.code.clone())
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}
