//! Counting and aggregation over token sequences.
//!
//! # Examples
//!
//! ```
//! use doclex::stats::{word_count, word_frequency};
//!
//! let tokens: Vec<String> = ["the", "cat", "the"].iter().map(|s| s.to_string()).collect();
//!
//! assert_eq!(word_count(&tokens, false), 3);
//! assert_eq!(word_count(&tokens, true), 2);
//!
//! let frequency = word_frequency(&tokens);
//! assert_eq!(frequency.get("the"), Some(2));
//! assert_eq!(frequency.total(), 3);
//! ```

use std::collections::{HashMap, HashSet};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Result;
use crate::linguistics::pos::TaggedToken;

/// Number of tokens, or of distinct tokens when `unique` is set.
pub fn word_count(tokens: &[String], unique: bool) -> usize {
    if unique {
        tokens.iter().collect::<HashSet<_>>().len()
    } else {
        tokens.len()
    }
}

/// Count occurrences of every distinct token.
///
/// Entries are sorted by descending count; tokens with equal counts keep the
/// order in which they first appeared.
pub fn word_frequency(tokens: &[String]) -> WordFrequency {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<(String, usize)> = Vec::new();

    for token in tokens {
        match index.get(token.as_str()) {
            Some(&i) => entries[i].1 += 1,
            None => {
                index.insert(token.as_str(), entries.len());
                entries.push((token.clone(), 1));
            }
        }
    }

    // sort_by is stable, so ties stay in first-seen order.
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    WordFrequency::from_sorted(entries)
}

/// Ordered `(token, count)` pairs produced by [`word_frequency`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordFrequency {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl WordFrequency {
    fn from_sorted(entries: Vec<(String, usize)>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (token, _))| (token.clone(), i))
            .collect();
        WordFrequency { entries, index }
    }

    /// Count for a token, if it occurred.
    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).map(|&i| self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// The `n` most frequent entries.
    pub fn top(&self, n: usize) -> &[(String, usize)] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Sum of all counts, i.e. the number of tokens counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<(String, usize)> {
        self.entries
    }
}

impl Serialize for WordFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_pairs(serializer, self.entries.iter().map(|(t, c)| (t, c)))
    }
}

/// Distinct token → tag, in first-occurrence order.
///
/// Built with [`collapse_pos_tags`]: when a token occurs several times with
/// different tags, the tag of its last occurrence is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PosTagMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl PosTagMap {
    pub fn new() -> Self {
        PosTagMap::default()
    }

    /// Set the tag of a token; a new token is appended, an existing one keeps
    /// its position and gets the new tag.
    pub fn insert<T: Into<String>, G: Into<String>>(&mut self, token: T, tag: G) {
        let token = token.into();
        let tag = tag.into();
        match self.index.get(&token) {
            Some(&i) => self.entries[i].1 = tag,
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token, tag));
            }
        }
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.index.get(token).map(|&i| self.entries[i].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, g)| (t.as_str(), g.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every tag through `f`, keeping token order.
    pub fn try_map_tags<F>(&self, mut f: F) -> Result<PosTagMap>
    where
        F: FnMut(&str) -> Result<String>,
    {
        let mut mapped = PosTagMap::new();
        for (token, tag) in self.iter() {
            mapped.insert(token, f(tag)?);
        }
        Ok(mapped)
    }
}

impl Serialize for PosTagMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_pairs(serializer, self.entries.iter().map(|(t, g)| (t, g)))
    }
}

/// Collapse per-occurrence tags into one tag per distinct token (last wins).
pub fn collapse_pos_tags(tagged: &[TaggedToken]) -> PosTagMap {
    let mut map = PosTagMap::new();
    for entry in tagged {
        map.insert(entry.token.as_str(), entry.tag.as_str());
    }
    map
}

/// Number of distinct tokens per tag, in order of first appearance of the
/// tag in the collapsed map.
pub fn pos_tag_counts(map: &PosTagMap) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for (_, tag) in map.iter() {
        match index.get(tag) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(tag, counts.len());
                counts.push((tag.to_string(), 1));
            }
        }
    }
    counts
}

fn serialize_pairs<'a, S, K, V, I>(serializer: S, pairs: I) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    K: Serialize + 'a,
    V: Serialize + 'a,
    I: ExactSizeIterator<Item = (&'a K, &'a V)>,
{
    let mut map = serializer.serialize_map(Some(pairs.len()))?;
    for (key, value) in pairs {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn tagged(pairs: &[(&str, &str)]) -> Vec<TaggedToken> {
        pairs.iter().map(|(t, g)| TaggedToken::new(*t, *g)).collect()
    }

    #[test]
    fn test_word_count() {
        let tokens = tokens("the cats are running the dog ran");
        assert_eq!(word_count(&tokens, false), 7);
        assert_eq!(word_count(&tokens, true), 6);
        assert_eq!(word_count(&[], false), 0);
        assert_eq!(word_count(&[], true), 0);

        let distinct = self::tokens("a b c");
        assert_eq!(word_count(&distinct, false), word_count(&distinct, true));
    }

    #[test]
    fn test_word_frequency_order() {
        let tokens = tokens("b a c a b a");
        let frequency = word_frequency(&tokens);

        let entries: Vec<(&str, usize)> = frequency.iter().collect();
        assert_eq!(entries, vec![("a", 3), ("b", 2), ("c", 1)]);
        assert_eq!(frequency.total(), tokens.len());
        assert_eq!(frequency.len(), 3);
    }

    #[test]
    fn test_word_frequency_ties_keep_first_seen_order() {
        let frequency = word_frequency(&tokens("dog cat bird cat dog bird"));
        let words: Vec<&str> = frequency.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["dog", "cat", "bird"]);
    }

    #[test]
    fn test_word_frequency_top() {
        let frequency = word_frequency(&tokens("x y y z z z"));
        assert_eq!(frequency.top(1), &[("z".to_string(), 3)]);
        assert_eq!(frequency.top(10).len(), 3);
        assert!(frequency.top(0).is_empty());
        assert_eq!(frequency.get("missing"), None);
    }

    #[test]
    fn test_word_frequency_lookup_matches_entries() {
        let tokens: Vec<String> = (0..2000).map(|i| format!("w{}", i % 500)).collect();
        let frequency = word_frequency(&tokens);

        assert_eq!(frequency.len(), 500);
        for (word, count) in frequency.iter() {
            assert_eq!(frequency.get(word), Some(count));
        }
        assert_eq!(frequency.get("w499"), Some(4));
        assert_eq!(frequency.get("w500"), None);
    }

    #[test]
    fn test_pos_tag_counts_many_tags() {
        let pairs: Vec<(String, String)> = (0..1000)
            .map(|i| (format!("t{i}"), format!("TAG{}", i % 40)))
            .collect();
        let tagged: Vec<TaggedToken> = pairs
            .iter()
            .map(|(t, g)| TaggedToken::new(t.as_str(), g.as_str()))
            .collect();

        let counts = pos_tag_counts(&collapse_pos_tags(&tagged));
        assert_eq!(counts.len(), 40);
        assert_eq!(counts[0], ("TAG0".to_string(), 25));
        assert_eq!(counts[39], ("TAG39".to_string(), 25));
        assert!(counts.iter().all(|(_, c)| *c == 25));
    }

    #[test]
    fn test_collapse_last_tag_wins() {
        let map = collapse_pos_tags(&tagged(&[
            ("run", "VBP"),
            ("the", "DT"),
            ("run", "NN"),
        ]));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("run"), Some("NN"));
        assert_eq!(map.iter().collect::<Vec<_>>(), vec![("run", "NN"), ("the", "DT")]);
    }

    #[test]
    fn test_pos_tag_counts() {
        let map = collapse_pos_tags(&tagged(&[
            ("the", "DT"),
            ("cats", "NNS"),
            ("are", "VBP"),
            ("the", "DT"),
            ("dog", "NN"),
            ("a", "DT"),
        ]));

        let counts = pos_tag_counts(&map);
        assert_eq!(
            counts,
            vec![
                ("DT".to_string(), 2),
                ("NNS".to_string(), 1),
                ("VBP".to_string(), 1),
                ("NN".to_string(), 1),
            ]
        );
        assert_eq!(counts.iter().map(|(_, c)| c).sum::<usize>(), map.len());
    }

    #[test]
    fn test_try_map_tags() {
        let map = collapse_pos_tags(&tagged(&[("dog", "NN"), ("ran", "VBD")]));
        let lowered = map.try_map_tags(|tag| Ok(tag.to_lowercase())).unwrap();
        assert_eq!(lowered.get("ran"), Some("vbd"));

        let failed = map.try_map_tags(|tag| Err(crate::error::DoclexError::unknown_pos_tag(tag)));
        assert!(failed.is_err());
    }

    #[test]
    fn test_serialization_keeps_order() {
        let frequency = word_frequency(&tokens("b a a"));
        assert_eq!(serde_json::to_string(&frequency).unwrap(), r#"{"a":2,"b":1}"#);

        let map = collapse_pos_tags(&tagged(&[("dog", "NN"), ("a", "DT")]));
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"dog":"NN","a":"DT"}"#);
    }
}
