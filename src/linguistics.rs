//! Part-of-speech tagging, tag labels and lemmatization.
//!
//! - [`pos::PosTagger`] assigns a Penn Treebank tag to every token occurrence
//! - [`labels::PosLabelTable`] translates tags into readable labels
//! - [`lemma::Lemmatizer`] reduces a token to its lemma given a [`lemma::LemmaCategory`]

pub mod labels;
pub mod lemma;
pub mod pos;

pub use labels::PosLabelTable;
pub use lemma::{LemmaCategory, Lemmatizer, RuleBasedLemmatizer};
pub use pos::{PosTagger, RuleBasedTagger, TaggedToken};
