//! Lemmatization.
//!
//! A lemma is looked up for a token under one of four coarse categories,
//! derived from the first character of its Penn Treebank tag.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{DoclexError, Result};
use crate::language::LanguageCode;

/// Coarse word category used for lemma lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LemmaCategory {
    Adjective,
    Noun,
    Verb,
    Adverb,
}

impl LemmaCategory {
    /// Map a POS tag by its first character: `J`, `N`, `V`, `R`.
    ///
    /// Any other tag (`DT`, `PRP`, `IN`, `CD`, ...) fails with
    /// `UnmappablePosCategory`.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag.chars().next() {
            Some('J') => Ok(LemmaCategory::Adjective),
            Some('N') => Ok(LemmaCategory::Noun),
            Some('V') => Ok(LemmaCategory::Verb),
            Some('R') => Ok(LemmaCategory::Adverb),
            _ => Err(DoclexError::unmappable_pos_category(tag)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LemmaCategory::Adjective => "adjective",
            LemmaCategory::Noun => "noun",
            LemmaCategory::Verb => "verb",
            LemmaCategory::Adverb => "adverb",
        }
    }
}

impl fmt::Display for LemmaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reduces a token to its dictionary form.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, token: &str, category: LemmaCategory, language: &LanguageCode)
    -> Result<String>;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("oxen", "ox"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("wolves", "wolf"),
    ("leaves", "leaf"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("selves", "self"),
    ("thieves", "thief"),
    ("loaves", "loaf"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("series", "series"),
    ("species", "species"),
    ("news", "news"),
];

const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("goes", "go"),
    ("went", "go"),
    ("gone", "go"),
    ("ran", "run"),
    ("saw", "see"),
    ("seen", "see"),
    ("took", "take"),
    ("taken", "take"),
    ("came", "come"),
    ("made", "make"),
    ("said", "say"),
    ("says", "say"),
    ("got", "get"),
    ("gotten", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("found", "find"),
    ("thought", "think"),
    ("told", "tell"),
    ("became", "become"),
    ("left", "leave"),
    ("felt", "feel"),
    ("brought", "bring"),
    ("began", "begin"),
    ("begun", "begin"),
    ("kept", "keep"),
    ("held", "hold"),
    ("wrote", "write"),
    ("written", "write"),
    ("stood", "stand"),
    ("heard", "hear"),
    ("meant", "mean"),
    ("met", "meet"),
    ("paid", "pay"),
    ("sat", "sit"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("led", "lead"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("lost", "lose"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("sent", "send"),
    ("built", "build"),
    ("understood", "understand"),
    ("drew", "draw"),
    ("drawn", "draw"),
    ("broke", "break"),
    ("broken", "break"),
    ("spent", "spend"),
    ("rose", "rise"),
    ("risen", "rise"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("bought", "buy"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("drank", "drink"),
    ("drunk", "drink"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("knew", "know"),
    ("known", "know"),
    ("sang", "sing"),
    ("sung", "sing"),
    ("swam", "swim"),
    ("swum", "swim"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("shown", "show"),
    ("won", "win"),
    ("caught", "catch"),
    ("taught", "teach"),
    ("fought", "fight"),
    ("sold", "sell"),
    ("slept", "sleep"),
    ("lying", "lie"),
    ("dying", "die"),
    ("tying", "tie"),
];

const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("further", "far"),
    ("furthest", "far"),
    ("farther", "far"),
    ("farthest", "far"),
    ("elder", "old"),
    ("eldest", "old"),
];

const ADVERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "well"),
    ("best", "well"),
    ("further", "far"),
    ("furthest", "far"),
    ("farther", "far"),
    ("farthest", "far"),
];

/// Adjectives ending in "-er" that are not comparatives.
const PLAIN_ER_ADJECTIVES: &[&str] = &[
    "other", "over", "under", "after", "clever", "proper", "eager", "bitter", "tender", "sober",
    "former", "latter", "inner", "outer", "upper", "super", "silver", "ever", "together",
    "either", "neither", "rather", "sheer", "slender", "sinister",
];

type ExceptionTable = HashMap<&'static str, &'static str>;

static EXCEPTIONS: LazyLock<HashMap<LemmaCategory, ExceptionTable>> = LazyLock::new(|| {
    let tables = [
        (LemmaCategory::Noun, NOUN_EXCEPTIONS),
        (LemmaCategory::Verb, VERB_EXCEPTIONS),
        (LemmaCategory::Adjective, ADJECTIVE_EXCEPTIONS),
        (LemmaCategory::Adverb, ADVERB_EXCEPTIONS),
    ];
    tables
        .into_iter()
        .map(|(category, entries)| (category, entries.iter().copied().collect()))
        .collect()
});

/// English lemmatizer: irregular-form tables first, then suffix detachment.
#[derive(Clone, Debug, Default)]
pub struct RuleBasedLemmatizer;

impl RuleBasedLemmatizer {
    pub fn new() -> Self {
        RuleBasedLemmatizer
    }

    pub fn supports(&self, language: &LanguageCode) -> bool {
        matches!(language.as_str(), "eng" | "en")
    }

    /// Lemmatize an English word.
    pub fn lemma_of(&self, word: &str, category: LemmaCategory) -> String {
        if let Some(lemma) = EXCEPTIONS.get(&category).and_then(|t| t.get(word)) {
            return (*lemma).to_string();
        }

        match category {
            LemmaCategory::Noun => noun_lemma(word),
            LemmaCategory::Verb => verb_lemma(word),
            LemmaCategory::Adjective => adjective_lemma(word),
            LemmaCategory::Adverb => word.to_string(),
        }
    }
}

impl Lemmatizer for RuleBasedLemmatizer {
    fn lemmatize(
        &self,
        token: &str,
        category: LemmaCategory,
        language: &LanguageCode,
    ) -> Result<String> {
        if !self.supports(language) {
            return Err(DoclexError::annotation(format!(
                "the rule-based lemmatizer has no rules for language '{language}'"
            )));
        }
        Ok(self.lemma_of(token, category))
    }

    fn name(&self) -> &'static str {
        "rule_based"
    }
}

fn noun_lemma(word: &str) -> String {
    let len = word.chars().count();
    if len <= 3 || word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }

    if len > 4 && word.ends_with("ies") {
        return format!("{}y", strip(word, 3));
    }

    for suffix in ["sses", "xes", "ches", "shes", "zes"] {
        if word.ends_with(suffix) {
            return strip(word, 2).to_string();
        }
    }

    if word.ends_with("men") && len > 4 {
        return format!("{}man", strip(word, 3));
    }

    if let Some(stem) = word.strip_suffix('s') {
        return stem.to_string();
    }

    word.to_string()
}

fn verb_lemma(word: &str) -> String {
    let len = word.chars().count();
    if len <= 3 {
        return word.to_string();
    }

    if len > 4 && (word.ends_with("ies") || word.ends_with("ied")) {
        return format!("{}y", strip(word, 3));
    }

    if len > 4 && word.ends_with("ing") {
        let stem = strip(word, 3);
        if !has_vowel(stem) {
            return word.to_string();
        }
        return restore_verb_stem(stem);
    }

    if word.ends_with("eed") {
        let stem = strip(word, 1);
        if len > 4 && (stem.ends_with("ree") || stem.ends_with("tee")) {
            return stem.to_string();
        }
        return word.to_string();
    }

    if word.ends_with("ed") {
        let stem = strip(word, 2);
        if !has_vowel(stem) {
            return word.to_string();
        }
        return restore_verb_stem(stem);
    }

    for suffix in ["sses", "shes", "ches", "xes", "zes", "oes"] {
        if word.ends_with(suffix) {
            return strip(word, 2).to_string();
        }
    }

    if word.ends_with('s') && !word.ends_with("ss") {
        return strip(word, 1).to_string();
    }

    word.to_string()
}

fn adjective_lemma(word: &str) -> String {
    let len = word.chars().count();

    if len > 5 && word.ends_with("iest") {
        return format!("{}y", strip(word, 4));
    }
    if len > 4 && word.ends_with("ier") {
        return format!("{}y", strip(word, 3));
    }
    if len > 5 && word.ends_with("est") {
        return restore_adjective_stem(strip(word, 3));
    }
    if len > 4 && word.ends_with("er") && !PLAIN_ER_ADJECTIVES.contains(&word) {
        return restore_adjective_stem(strip(word, 2));
    }

    word.to_string()
}

/// Rebuild a base form after "-ing" or "-ed" was detached.
fn restore_verb_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();

    if chars.len() >= 4
        && ends_with_double_consonant(&chars)
        && !matches!(chars[chars.len() - 1], 'l' | 's' | 'z')
    {
        return chars[..chars.len() - 1].iter().collect();
    }

    if stem == "us" {
        return "use".to_string();
    }

    if stem.ends_with("creat") || ends_with_consonant_at(&chars) {
        return format!("{stem}e");
    }

    for suffix in ["bl", "iz", "uc", "ov", "iv", "rg", "dg"] {
        if stem.ends_with(suffix) {
            return format!("{stem}e");
        }
    }

    if measure(&chars) == 1 && ends_cvc(&chars) {
        return format!("{stem}e");
    }

    stem.to_string()
}

fn restore_adjective_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();

    if chars.len() >= 3 && ends_with_double_consonant(&chars) {
        return chars[..chars.len() - 1].iter().collect();
    }

    for suffix in ["c", "v", "rg", "bl", "pl", "tl", "dl", "gl", "os", "id", "at"] {
        if stem.ends_with(suffix) {
            return format!("{stem}e");
        }
    }

    let n = chars.len();
    if n >= 2 && chars[n - 1] == 'r' && chars[n - 2] == 'u' {
        return format!("{stem}e");
    }

    stem.to_string()
}

fn strip(word: &str, count: usize) -> &str {
    match word.char_indices().rev().nth(count - 1) {
        Some((index, _)) => &word[..index],
        None => "",
    }
}

fn has_vowel(stem: &str) -> bool {
    stem.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}

fn is_consonant(chars: &[char], i: usize) -> bool {
    match chars[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => false,
        'y' => i == 0 || !is_consonant(chars, i - 1),
        _ => true,
    }
}

fn ends_with_double_consonant(chars: &[char]) -> bool {
    let n = chars.len();
    n >= 2 && chars[n - 1] == chars[n - 2] && is_consonant(chars, n - 1)
}

/// Stems like "relat" or "operat" where "-at" follows a consonant.
fn ends_with_consonant_at(chars: &[char]) -> bool {
    let n = chars.len();
    n >= 4 && chars[n - 2] == 'a' && chars[n - 1] == 't' && is_consonant(chars, n - 3)
}

/// Number of vowel-consonant sequences in the stem.
fn measure(chars: &[char]) -> usize {
    let mut count = 0;
    let mut previous_vowel = false;
    for i in 0..chars.len() {
        let consonant = is_consonant(chars, i);
        if consonant && previous_vowel {
            count += 1;
        }
        previous_vowel = !consonant;
    }
    count
}

/// consonant-vowel-consonant ending, where the last consonant is not w, x or y.
fn ends_cvc(chars: &[char]) -> bool {
    let n = chars.len();
    n >= 3
        && is_consonant(chars, n - 3)
        && !is_consonant(chars, n - 2)
        && is_consonant(chars, n - 1)
        && !matches!(chars[n - 1], 'w' | 'x' | 'y')
}
