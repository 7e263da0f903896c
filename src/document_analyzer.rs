//! Lexical statistics over one document.
//!
//! [`DocumentAnalyzer`] owns a [`Document`] and the collaborators needed to
//! analyze it: the word analyzer, a language identifier, a POS tagger, a
//! lemmatizer, the stem language table and the POS label table. Every
//! operation recomputes its result from the stored body; nothing is cached.
//!
//! # Examples
//!
//! ```
//! use doclex::document::Document;
//! use doclex::document_analyzer::DocumentAnalyzer;
//!
//! let document = Document::from_text("The cats are running. The dog ran.");
//! let analyzer = DocumentAnalyzer::new(document).unwrap();
//!
//! assert_eq!(analyzer.word_count(false).unwrap(), 7);
//! assert_eq!(analyzer.word_count(true).unwrap(), 6);
//! assert_eq!(analyzer.word_frequency().unwrap().get("the"), Some(2));
//! ```

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;

use crate::analysis::analyzer::WordAnalyzer;
use crate::analysis::stemmer::StemLanguageTable;
use crate::analysis::token::{IntoTokenStream, Token};
use crate::analysis::token_filter::{Filter, StemFilter};
use crate::config::AnalyzerConfig;
use crate::document::{Document, DocumentSource};
use crate::error::{DoclexError, Result};
use crate::language::{
    FixedLanguageIdentifier, LanguageCode, LanguageIdentifier, WhatlangIdentifier,
};
use crate::linguistics::labels::PosLabelTable;
use crate::linguistics::lemma::{LemmaCategory, Lemmatizer, RuleBasedLemmatizer};
use crate::linguistics::pos::{PosTagger, RuleBasedTagger};
use crate::stats::{self, PosTagMap, WordFrequency};

/// Analysis operations over a single document body.
#[derive(Clone)]
pub struct DocumentAnalyzer {
    document: Document,
    word_analyzer: WordAnalyzer,
    identifier: Arc<dyn LanguageIdentifier>,
    tagger: Arc<dyn PosTagger>,
    lemmatizer: Arc<dyn Lemmatizer>,
    stem_table: StemLanguageTable,
    labels: Arc<PosLabelTable>,
}

impl fmt::Debug for DocumentAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentAnalyzer")
            .field("document", &self.document.origin())
            .field("body_len", &self.document.body().len())
            .field("identifier", &self.identifier.name())
            .field("tagger", &self.tagger.name())
            .field("lemmatizer", &self.lemmatizer.name())
            .field("stem_languages", &self.stem_table.codes())
            .field("labels", &self.labels.len())
            .finish()
    }
}

impl DocumentAnalyzer {
    /// Create an analyzer with the default collaborators.
    pub fn new(document: Document) -> Result<Self> {
        Ok(DocumentAnalyzer {
            document,
            word_analyzer: WordAnalyzer::new()?,
            identifier: Arc::new(WhatlangIdentifier::new()),
            tagger: Arc::new(RuleBasedTagger::new()),
            lemmatizer: Arc::new(RuleBasedLemmatizer::new()),
            stem_table: StemLanguageTable::default(),
            labels: PosLabelTable::shared(),
        })
    }

    /// Build the document from a source, then the analyzer.
    pub fn from_source(source: DocumentSource) -> Result<Self> {
        Self::new(Document::from_source(source)?)
    }

    /// Create an analyzer whose collaborators follow `config`.
    pub fn from_config(document: Document, config: &AnalyzerConfig) -> Result<Self> {
        config.validate()?;

        let mut analyzer = Self::new(document)?;

        analyzer.identifier = match &config.language {
            Some(code) => Arc::new(FixedLanguageIdentifier::new(code)),
            None => Arc::new(
                WhatlangIdentifier::new()
                    .with_min_confidence(config.min_language_confidence)
                    .with_require_reliable(config.require_reliable_language),
            ),
        };

        if let Some(path) = &config.pos_labels_path {
            analyzer.labels = Arc::new(PosLabelTable::from_json_file(path)?);
        }

        Ok(analyzer)
    }

    pub fn with_identifier(mut self, identifier: Arc<dyn LanguageIdentifier>) -> Self {
        self.identifier = identifier;
        self
    }

    pub fn with_tagger(mut self, tagger: Arc<dyn PosTagger>) -> Self {
        self.tagger = tagger;
        self
    }

    pub fn with_lemmatizer(mut self, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    pub fn with_stem_table(mut self, stem_table: StemLanguageTable) -> Self {
        self.stem_table = stem_table;
        self
    }

    pub fn with_labels(mut self, labels: Arc<PosLabelTable>) -> Self {
        self.labels = labels;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn body(&self) -> &str {
        self.document.body()
    }

    /// Lowercase, punctuation-stripped words of the body, in order.
    pub fn tokens(&self) -> Result<Vec<String>> {
        let tokens = self.word_analyzer.tokenize(self.document.body())?;
        debug!("Tokenized body into {} tokens", tokens.len());
        Ok(tokens)
    }

    /// Total number of tokens, or number of distinct tokens when `unique`.
    pub fn word_count(&self, unique: bool) -> Result<usize> {
        Ok(stats::word_count(&self.tokens()?, unique))
    }

    pub fn word_frequency(&self) -> Result<WordFrequency> {
        Ok(stats::word_frequency(&self.tokens()?))
    }

    /// Identify the language of the whole body.
    pub fn language(&self) -> Result<LanguageCode> {
        let language = self.identifier.identify(self.document.body())?;
        debug!("Language of body: {language} ({})", self.identifier.name());
        Ok(language)
    }

    /// Distinct token → tag for the body; see [`pos_tags_of`](Self::pos_tags_of).
    pub fn pos_tags(&self, friendly: bool) -> Result<PosTagMap> {
        self.pos_tags_of(&self.tokens()?, &self.language()?, friendly)
    }

    /// Tag `tokens` and collapse to one tag per distinct token.
    ///
    /// When a token occurs more than once, the tag of its last occurrence is
    /// kept, so tags from earlier contexts are lost. With `friendly` each tag
    /// is replaced by its label and unknown tags fail with `UnknownPosTag`.
    pub fn pos_tags_of(
        &self,
        tokens: &[String],
        language: &LanguageCode,
        friendly: bool,
    ) -> Result<PosTagMap> {
        let tagged = self.tagger.tag(tokens, language)?;
        if tagged.len() != tokens.len() {
            return Err(DoclexError::annotation(format!(
                "{} returned {} tags for {} tokens",
                self.tagger.name(),
                tagged.len(),
                tokens.len()
            )));
        }

        let tags = stats::collapse_pos_tags(&tagged);
        debug!("Collapsed {} tagged tokens into {} entries", tagged.len(), tags.len());

        if friendly {
            tags.try_map_tags(|tag| self.labels.label(tag).map(str::to_string))
        } else {
            Ok(tags)
        }
    }

    pub fn pos_tag_counts(&self) -> Result<Vec<(String, usize)>> {
        self.pos_tag_counts_of(&self.tokens()?, &self.language()?)
    }

    /// Number of distinct tokens per tag.
    pub fn pos_tag_counts_of(
        &self,
        tokens: &[String],
        language: &LanguageCode,
    ) -> Result<Vec<(String, usize)>> {
        let tags = self.pos_tags_of(tokens, language, false)?;
        Ok(stats::pos_tag_counts(&tags))
    }

    pub fn lemmatize(&self) -> Result<Vec<String>> {
        self.lemmatize_of(&self.tokens()?, &self.language()?)
    }

    /// Lemma of every token occurrence, in order.
    ///
    /// Each token is lemmatized under the category of its collapsed tag.
    /// Tokens whose tag is not an adjective, noun, verb or adverb tag fail
    /// the whole call with `UnmappablePosCategory`.
    pub fn lemmatize_of(&self, tokens: &[String], language: &LanguageCode) -> Result<Vec<String>> {
        let tags = self.pos_tags_of(tokens, language, false)?;

        tokens
            .iter()
            .map(|token| {
                let tag = tags.get(token).ok_or_else(|| {
                    DoclexError::annotation(format!("no tag for token '{token}'"))
                })?;
                let category = LemmaCategory::from_tag(tag)?;
                self.lemmatizer.lemmatize(token, category, language)
            })
            .collect()
    }

    pub fn lemma_count(&self) -> Result<usize> {
        self.lemma_count_of(&self.tokens()?, &self.language()?)
    }

    /// Number of distinct lemmas.
    pub fn lemma_count_of(&self, tokens: &[String], language: &LanguageCode) -> Result<usize> {
        let lemmas = self.lemmatize_of(tokens, language)?;
        Ok(stats::word_count(&lemmas, true))
    }

    pub fn stem(&self) -> Result<Vec<String>> {
        self.stem_of(&self.tokens()?, &self.language()?)
    }

    /// Stem every token with the algorithm registered for `language`.
    pub fn stem_of(&self, tokens: &[String], language: &LanguageCode) -> Result<Vec<String>> {
        let stemmer = self.stem_table.stemmer_for(language.as_str())?;
        let filter = StemFilter::new(Arc::new(stemmer));

        let stream = tokens
            .iter()
            .enumerate()
            .map(|(position, text)| Token::new(text.as_str(), position))
            .collect::<Vec<_>>()
            .into_token_stream();

        Ok(filter.filter(stream)?.map(|token| token.text).collect())
    }

    /// Collect the statistics of the body into one report.
    ///
    /// Raw counts always succeed once the body is tokenized. Sections that
    /// need the language or annotation are `None` when they fail, with the
    /// reason appended to `warnings`.
    pub fn report(&self, options: &ReportOptions) -> Result<AnalysisReport> {
        let tokens = self.tokens()?;
        let frequency = stats::word_frequency(&tokens);

        let mut report = AnalysisReport {
            word_count: tokens.len(),
            unique_word_count: frequency.len(),
            top_words: frequency.top(options.top).to_vec(),
            language: None,
            pos_tag_counts: None,
            lemma_count: None,
            unique_stem_count: None,
            warnings: Vec::new(),
        };

        let language = match self.language() {
            Ok(language) => language,
            Err(e) => {
                report.warn(format!("language: {e}"));
                return Ok(report);
            }
        };

        match self.stem_of(&tokens, &language) {
            Ok(stems) => report.unique_stem_count = Some(stats::word_count(&stems, true)),
            Err(e) => report.warn(format!("stems: {e}")),
        }

        if options.annotate {
            match self.pos_tag_counts_of(&tokens, &language) {
                Ok(counts) => report.pos_tag_counts = Some(counts),
                Err(e) => report.warn(format!("pos tags: {e}")),
            }
            match self.lemma_count_of(&tokens, &language) {
                Ok(count) => report.lemma_count = Some(count),
                Err(e) => report.warn(format!("lemmas: {e}")),
            }
        }

        report.language = Some(language);
        Ok(report)
    }
}

/// Which optional sections [`DocumentAnalyzer::report`] computes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    /// Number of most frequent words to include.
    pub top: usize,
    /// Include POS tag counts and the lemma count.
    pub annotate: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            top: 10,
            annotate: false,
        }
    }
}

/// Snapshot of the statistics of one document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub word_count: usize,
    pub unique_word_count: usize,
    pub top_words: Vec<(String, usize)>,
    pub language: Option<LanguageCode>,
    pub pos_tag_counts: Option<Vec<(String, usize)>>,
    pub lemma_count: Option<usize>,
    pub unique_stem_count: Option<usize>,
    pub warnings: Vec<String>,
}

impl AnalysisReport {
    fn warn(&mut self, message: String) {
        warn!("Report section skipped: {message}");
        self.warnings.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linguistics::pos::TaggedToken;

    const SCENARIO: &str = "The cats are running. The dog ran.";

    fn english(text: &str) -> DocumentAnalyzer {
        DocumentAnalyzer::new(Document::from_text(text))
            .unwrap()
            .with_identifier(Arc::new(FixedLanguageIdentifier::new("eng")))
    }

    struct ShortTagger;

    impl PosTagger for ShortTagger {
        fn tag(&self, _tokens: &[String], _language: &LanguageCode) -> Result<Vec<TaggedToken>> {
            Ok(vec![TaggedToken::new("the", "DT")])
        }

        fn name(&self) -> &'static str {
            "short"
        }
    }

    #[test]
    fn test_scenario_counts() {
        let analyzer = english(SCENARIO);
        assert_eq!(
            analyzer.tokens().unwrap(),
            vec!["the", "cats", "are", "running", "the", "dog", "ran"]
        );
        assert_eq!(analyzer.word_count(true).unwrap(), 6);
        assert_eq!(analyzer.word_count(false).unwrap(), 7);

        let frequency = analyzer.word_frequency().unwrap();
        assert_eq!(frequency.get("the"), Some(2));
        assert_eq!(frequency.total(), 7);
    }

    #[test]
    fn test_pos_tags() {
        let analyzer = english(SCENARIO);
        let tags = analyzer.pos_tags(false).unwrap();

        assert_eq!(tags.len(), 6);
        assert_eq!(tags.get("cats"), Some("NNS"));
        assert_eq!(tags.get("ran"), Some("VBD"));

        let friendly = analyzer.pos_tags(true).unwrap();
        assert_eq!(friendly.get("the"), Some("determiner"));
        assert_eq!(friendly.get("cats"), Some("noun, common, plural"));
    }

    #[test]
    fn test_friendly_unknown_tag() {
        let analyzer = english(SCENARIO).with_labels(Arc::new(PosLabelTable::empty().with_label("DT", "det")));
        assert!(matches!(
            analyzer.pos_tags(true),
            Err(DoclexError::UnknownPosTag(_))
        ));
    }

    #[test]
    fn test_pos_tag_counts_sum_to_distinct_tokens() {
        let analyzer = english(SCENARIO);
        let counts = analyzer.pos_tag_counts().unwrap();

        assert_eq!(counts[0], ("DT".to_string(), 1));
        assert_eq!(counts.iter().map(|(_, c)| c).sum::<usize>(), 6);
    }

    #[test]
    fn test_misaligned_tagger() {
        let analyzer = english(SCENARIO).with_tagger(Arc::new(ShortTagger));
        assert!(matches!(
            analyzer.pos_tags(false),
            Err(DoclexError::Annotation(_))
        ));
    }

    #[test]
    fn test_lemmatize() {
        let analyzer = english("cats are running dogs ran");
        assert_eq!(
            analyzer.lemmatize().unwrap(),
            vec!["cat", "be", "run", "dog", "run"]
        );
        assert_eq!(analyzer.lemma_count().unwrap(), 4);
    }

    #[test]
    fn test_lemmatize_unmappable_tag() {
        // "the" is a determiner and has no lemma category.
        let analyzer = english(SCENARIO);
        match analyzer.lemmatize() {
            Err(DoclexError::UnmappablePosCategory(tag)) => assert_eq!(tag, "DT"),
            other => panic!("Expected UnmappablePosCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_stem() {
        let analyzer = english(SCENARIO);
        let stems = analyzer.stem().unwrap();
        assert_eq!(stems, vec!["the", "cat", "are", "run", "the", "dog", "ran"]);
    }

    #[test]
    fn test_two_letter_english_code_supports_every_annotation() {
        let analyzer = english(SCENARIO);
        let tokens = analyzer.tokens().unwrap();
        let en = LanguageCode::new("en");

        assert!(analyzer.pos_tags_of(&tokens, &en, false).is_ok());
        assert_eq!(
            analyzer.stem_of(&tokens, &en).unwrap(),
            analyzer.stem_of(&tokens, &LanguageCode::new("eng")).unwrap()
        );
    }

    #[test]
    fn test_stem_unsupported_language() {
        let analyzer = english(SCENARIO);
        let tokens = analyzer.tokens().unwrap();

        let result = analyzer.stem_of(&tokens, &LanguageCode::new("fra"));
        assert!(matches!(result, Err(DoclexError::UnsupportedStemLanguage(_))));

        // The document is untouched by the failed call.
        assert_eq!(analyzer.body(), SCENARIO);
        assert_eq!(analyzer.stem().unwrap().len(), tokens.len());
    }

    #[test]
    fn test_from_config_fixed_language() {
        let config = AnalyzerConfig {
            language: Some("swe".to_string()),
            ..Default::default()
        };
        let analyzer = DocumentAnalyzer::from_config(Document::from_text("hundarna"), &config).unwrap();
        assert_eq!(analyzer.language().unwrap().as_str(), "swe");
        assert_eq!(analyzer.stem().unwrap(), vec!["hund"]);
    }

    #[test]
    fn test_from_config_invalid() {
        let config = AnalyzerConfig {
            min_language_confidence: -0.1,
            ..Default::default()
        };
        let result = DocumentAnalyzer::from_config(Document::from_text("x"), &config);
        assert!(matches!(result, Err(DoclexError::Config(_))));
    }

    #[test]
    fn test_report() {
        let analyzer = english(SCENARIO);
        let report = analyzer
            .report(&ReportOptions {
                top: 1,
                annotate: true,
            })
            .unwrap();

        assert_eq!(report.word_count, 7);
        assert_eq!(report.unique_word_count, 6);
        assert_eq!(report.top_words, vec![("the".to_string(), 2)]);
        assert_eq!(report.language, Some(LanguageCode::new("eng")));
        assert!(report.pos_tag_counts.is_some());
        assert_eq!(report.unique_stem_count, Some(6));

        // Lemmatization fails on the determiner and is reported, not raised.
        assert_eq!(report.lemma_count, None);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("lemmas:"));
    }

    #[test]
    fn test_report_without_language() {
        let analyzer = DocumentAnalyzer::new(Document::from_text("1234 5678")).unwrap();
        let report = analyzer.report(&ReportOptions::default()).unwrap();

        assert_eq!(report.word_count, 2);
        assert_eq!(report.language, None);
        assert_eq!(report.unique_stem_count, None);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("language:"));
    }
}
