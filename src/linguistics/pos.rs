//! Part-of-speech tagging.
//!
//! [`RuleBasedTagger`] tags English tokens with Penn Treebank tags using a
//! closed-class lexicon, suffix rules for open-class words and a few
//! contextual corrections from the previous token.
//!
//! # Examples
//!
//! ```
//! use doclex::language::LanguageCode;
//! use doclex::linguistics::pos::{PosTagger, RuleBasedTagger};
//!
//! let tokens: Vec<String> = ["the", "dog", "ran"].iter().map(|s| s.to_string()).collect();
//! let tagged = RuleBasedTagger::new().tag(&tokens, &LanguageCode::new("eng")).unwrap();
//!
//! let tags: Vec<&str> = tagged.iter().map(|t| t.tag.as_str()).collect();
//! assert_eq!(tags, vec!["DT", "NN", "VBD"]);
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{DoclexError, Result};
use crate::language::LanguageCode;

/// One token occurrence and its tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new<T: Into<String>, G: Into<String>>(token: T, tag: G) -> Self {
        TaggedToken {
            token: token.into(),
            tag: tag.into(),
        }
    }
}

/// Assigns a POS tag to every token occurrence.
pub trait PosTagger: Send + Sync {
    /// Tag `tokens` in `language`.
    ///
    /// Implementations return exactly one [`TaggedToken`] per input token,
    /// in input order, duplicates included.
    fn tag(&self, tokens: &[String], language: &LanguageCode) -> Result<Vec<TaggedToken>>;

    /// Get the name of this tagger.
    fn name(&self) -> &'static str;
}

const LEXICON: &[(&str, &[&str])] = &[
    (
        "DT",
        &[
            "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any",
            "no", "another", "either", "neither", "all", "both",
        ],
    ),
    (
        "PRP",
        &[
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself",
            "yourself", "himself", "herself", "itself", "ourselves", "themselves",
        ],
    ),
    ("PRP$", &["my", "your", "his", "her", "its", "our", "their"]),
    (
        "IN",
        &[
            "in", "on", "at", "of", "by", "with", "from", "for", "about", "into", "over",
            "under", "after", "before", "between", "through", "during", "without", "within",
            "against", "among", "upon", "because", "if", "while", "although", "though", "since",
            "than", "as", "unless", "until", "whether", "across", "behind", "below", "above",
            "near", "toward", "towards", "onto", "off", "via", "per", "like",
        ],
    ),
    ("TO", &["to"]),
    ("CC", &["and", "or", "but", "nor", "yet", "plus"]),
    (
        "MD",
        &[
            "can", "could", "will", "would", "shall", "should", "may", "might", "must", "cannot",
        ],
    ),
    ("EX", &["there"]),
    ("WDT", &["which", "whatever", "whichever"]),
    ("WP", &["who", "what", "whom", "whoever"]),
    ("WP$", &["whose"]),
    ("WRB", &["where", "when", "why", "how", "whenever", "wherever"]),
    ("UH", &["oh", "yes", "hello", "hi", "wow", "ok", "okay", "please"]),
    (
        "CD",
        &[
            "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "eleven", "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand",
            "million", "billion", "zero",
        ],
    ),
    (
        "RB",
        &[
            "not", "never", "very", "also", "too", "often", "always", "here", "now", "then",
            "just", "only", "still", "already", "soon", "again", "ever", "perhaps", "maybe",
            "sometimes", "together", "indeed", "quite", "rather", "almost", "away", "back",
            "once", "twice", "even", "else", "however", "therefore", "instead", "today",
            "tomorrow", "yesterday", "well", "so",
        ],
    ),
    ("RBR", &["more", "less"]),
    ("RBS", &["most", "least"]),
    ("JJR", &[
        "better", "worse", "bigger", "smaller", "larger", "longer", "higher", "greater",
        "older", "younger", "faster", "easier", "harder", "lower", "stronger", "newer",
        "happier", "earlier", "later",
    ]),
    ("JJS", &[
        "best", "worst", "biggest", "smallest", "largest", "longest", "highest", "greatest",
        "oldest", "youngest", "fastest", "easiest", "hardest", "lowest", "strongest", "newest",
    ]),
    (
        "JJ",
        &[
            "good", "new", "first", "last", "long", "great", "little", "own", "other", "old",
            "right", "big", "high", "different", "small", "large", "next", "early", "young",
            "important", "few", "public", "bad", "same", "able", "many", "much", "several",
            "such", "whole", "true", "free", "full", "sure", "real", "hot", "cold",
            "happy", "sad", "easy", "hard", "red", "blue", "green", "black", "white", "lazy",
            "quick", "brown", "fine", "clear", "simple", "open", "short", "late", "low", "strong",
        ],
    ),
    ("VBZ", &["is", "has", "does", "says", "goes", "seems"]),
    ("VBP", &["are", "am", "have", "do"]),
    (
        "VBD",
        &[
            "was", "were", "had", "did", "ran", "went", "saw", "took", "came", "made", "said",
            "got", "gave", "found", "thought", "told", "became", "left", "felt", "brought",
            "began", "kept", "held", "wrote", "stood", "heard", "meant", "met", "paid", "sat",
            "spoke", "led", "grew", "lost", "fell", "sent", "built", "understood", "drew",
            "broke", "spent", "rose", "drove", "bought", "wore", "chose", "ate", "drank", "flew",
            "forgot", "knew", "sang", "swam", "threw", "won", "used", "caught", "taught",
            "fought", "sold", "slept",
        ],
    ),
    (
        "VBN",
        &[
            "been", "done", "gone", "seen", "taken", "given", "known", "written", "spoken",
            "eaten", "driven", "broken", "chosen", "fallen", "forgotten", "flown", "grown",
            "shown", "thrown", "begun", "drunk", "sung", "swum", "worn", "drawn", "risen",
        ],
    ),
    ("VBG", &["being", "having", "doing"]),
    ("VB", &["be"]),
    (
        "NN",
        &[
            "nothing", "something", "anything", "everything", "morning", "evening", "thing",
            "family", "animal", "hospital", "festival", "capital", "signal", "material",
            "individual", "journal", "metal", "interval", "time", "people", "news", "series",
            "species", "bus", "gas", "analysis", "basis", "crisis", "ceiling", "king", "ring",
            "spring", "string", "wing", "bed", "seed", "speed",
        ],
    ),
];

const BASE_VERBS: &[&str] = &[
    "run", "walk", "go", "see", "make", "take", "come", "know", "think", "get", "give", "find",
    "tell", "work", "call", "try", "ask", "feel", "become", "leave", "put", "mean", "keep",
    "let", "begin", "seem", "help", "talk", "turn", "start", "show", "hear", "play", "move",
    "live", "believe", "hold", "bring", "write", "sit", "stand", "lose", "pay", "meet",
    "include", "continue", "set", "learn", "change", "lead", "understand", "watch", "follow",
    "stop", "create", "speak", "read", "allow", "add", "spend", "grow", "win", "offer",
    "remember", "love", "consider", "appear", "buy", "wait", "serve", "die", "send", "expect",
    "build", "stay", "fall", "cut", "reach", "kill", "remain", "want", "use", "say", "eat",
    "drink", "sleep", "jump", "swim", "fly", "sing", "dance", "apply", "supply", "reply", "need",
];

/// Forms of "be" and "have" that turn a following past tense into a participle.
const AUXILIARIES: &[&str] = &[
    "be", "is", "are", "am", "was", "were", "been", "being", "have", "has", "had", "having",
];

static LEXICON_INDEX: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    for word in BASE_VERBS {
        index.insert(*word, "VBP");
    }
    // Later entries win, so closed classes override base verbs.
    for (tag, words) in LEXICON {
        for word in *words {
            index.insert(*word, *tag);
        }
    }
    index
});

/// Ordered suffix rules for words missing from the lexicon.
const SUFFIX_RULES: &[(&str, &str, usize)] = &[
    ("ing", "VBG", 5),
    ("ed", "VBD", 5),
    ("ly", "RB", 5),
    ("iest", "JJS", 6),
    ("ous", "JJ", 5),
    ("ful", "JJ", 5),
    ("able", "JJ", 6),
    ("ible", "JJ", 6),
    ("ive", "JJ", 5),
    ("less", "JJ", 6),
    ("ical", "JJ", 6),
    ("ish", "JJ", 5),
    ("al", "JJ", 6),
    ("ic", "JJ", 5),
    ("tion", "NN", 5),
    ("sion", "NN", 5),
    ("ment", "NN", 6),
    ("ness", "NN", 6),
    ("ity", "NN", 5),
    ("ism", "NN", 5),
];

/// English tagger built from a lexicon, suffix rules and context rules.
#[derive(Clone, Debug, Default)]
pub struct RuleBasedTagger;

impl RuleBasedTagger {
    pub fn new() -> Self {
        RuleBasedTagger
    }

    /// Whether the tagger has rules for the language.
    pub fn supports(&self, language: &LanguageCode) -> bool {
        matches!(language.as_str(), "eng" | "en")
    }

    /// Tag a single word without context.
    pub fn tag_word(&self, word: &str) -> &'static str {
        if let Some(&tag) = LEXICON_INDEX.get(word) {
            return tag;
        }

        if !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()) {
            return "CD";
        }

        for &(suffix, tag, min_len) in SUFFIX_RULES {
            if word.len() >= min_len && word.ends_with(suffix) {
                let stem = &word[..word.len() - suffix.len()];
                // "-ing"/"-ed" need a vowel before the suffix: "thing" and "shred" are not verbs.
                if matches!(suffix, "ing" | "ed") && !stem.chars().any(is_vowel) {
                    continue;
                }
                return tag;
            }
        }

        if is_plural_form(word) {
            return "NNS";
        }

        "NN"
    }

    fn apply_context(previous: Option<(&str, &str)>, tag: &'static str) -> &'static str {
        let Some((prev_word, prev_tag)) = previous else {
            return tag;
        };

        match (prev_tag, tag) {
            ("TO" | "MD", "VBP") => "VB",
            ("DT" | "PRP$" | "JJ", "VBP" | "VB") => "NN",
            ("DT" | "PRP$", "VBD" | "VBN") => "JJ",
            ("PRP", "NNS") if matches!(prev_word, "he" | "she" | "it") => "VBZ",
            (_, "VBD") if AUXILIARIES.contains(&prev_word) => "VBN",
            _ => tag,
        }
    }
}

impl PosTagger for RuleBasedTagger {
    fn tag(&self, tokens: &[String], language: &LanguageCode) -> Result<Vec<TaggedToken>> {
        if !self.supports(language) {
            return Err(DoclexError::annotation(format!(
                "the rule-based tagger has no rules for language '{language}'"
            )));
        }

        let mut tagged: Vec<TaggedToken> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let tag = self.tag_word(token);
            let previous = tagged.last().map(|t| (t.token.as_str(), t.tag.as_str()));
            let tag = Self::apply_context(previous, tag);
            tagged.push(TaggedToken::new(token.as_str(), tag));
        }

        Ok(tagged)
    }

    fn name(&self) -> &'static str {
        "rule_based"
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

fn is_plural_form(word: &str) -> bool {
    word.len() > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
}
