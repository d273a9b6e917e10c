//! Lexical transformation rules
//!
//! Each rule maps a word to the candidate words one step away from it.
//! Candidates are not checked against the dictionary here; the builder
//! keeps only those still waiting in its pending pool.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordWebError};

pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Which transformations connect two words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RuleFlags")]
pub struct RuleSet {
    /// Replace one letter
    pub substitution: bool,
    /// Insert or delete one letter
    pub insertion_deletion: bool,
    /// Rearrange all letters
    pub anagram: bool,
}

/// `[rules]` table as written in a config file.
///
/// A rule left out of an explicit table is off.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleFlags {
    substitution: Option<bool>,
    insertion_deletion: Option<bool>,
    anagram: Option<bool>,
}

impl From<RuleFlags> for RuleSet {
    fn from(flags: RuleFlags) -> Self {
        RuleSet {
            substitution: flags.substitution.unwrap_or(false),
            insertion_deletion: flags.insertion_deletion.unwrap_or(false),
            anagram: flags.anagram.unwrap_or(false),
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::SUBSTITUTION_ONLY
    }
}

impl RuleSet {
    pub const SUBSTITUTION_ONLY: RuleSet = RuleSet {
        substitution: true,
        insertion_deletion: false,
        anagram: false,
    };

    pub const NONE: RuleSet = RuleSet {
        substitution: false,
        insertion_deletion: false,
        anagram: false,
    };

    pub fn is_empty(&self) -> bool {
        !(self.substitution || self.insertion_deletion || self.anagram)
    }

    /// Reject a rule set with nothing enabled
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(WordWebError::InvalidRuleSet);
        }
        Ok(())
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.substitution {
            names.push("substitution");
        }
        if self.insertion_deletion {
            names.push("insertion-deletion");
        }
        if self.anagram {
            names.push("anagram");
        }
        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join("+"))
        }
    }
}

/// Letters tried by substitution and insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    /// Build an alphabet from the distinct characters of `letters`
    pub fn new(letters: &str) -> Result<Self> {
        let mut seen = HashSet::new();
        let chars: Vec<char> = letters.chars().filter(|c| seen.insert(*c)).collect();
        if chars.is_empty() {
            return Err(WordWebError::invalid_value("alphabet", "(empty)"));
        }
        Ok(Self(chars))
    }

    pub fn letters(&self) -> &[char] {
        &self.0
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self(DEFAULT_ALPHABET.chars().collect())
    }
}

/// Every word produced by replacing one letter of `word`
pub fn substitutions(word: &str, alphabet: &Alphabet) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::with_capacity(chars.len() * alphabet.letters().len());
    for i in 0..chars.len() {
        for &c in alphabet.letters() {
            if c == chars[i] {
                continue;
            }
            let mut candidate = chars.clone();
            candidate[i] = c;
            out.push(candidate.into_iter().collect());
        }
    }
    out
}

/// Every word produced by inserting one letter into `word`
pub fn insertions(word: &str, alphabet: &Alphabet) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::with_capacity((chars.len() + 1) * alphabet.letters().len());
    for i in 0..=chars.len() {
        for &c in alphabet.letters() {
            let mut candidate = String::with_capacity(word.len() + c.len_utf8());
            candidate.extend(&chars[..i]);
            candidate.push(c);
            candidate.extend(&chars[i..]);
            out.push(candidate);
        }
    }
    out
}

/// Every word produced by deleting one letter of `word`
pub fn deletions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len())
        .map(|i| chars[..i].iter().chain(&chars[i + 1..]).collect())
        .collect()
}

/// Canonical anagram key: the word's letters in sorted order
pub fn anagram_key(word: &str) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}

/// Words grouped by anagram key
#[derive(Debug, Default)]
pub struct AnagramIndex {
    buckets: HashMap<String, Vec<String>>,
}

impl AnagramIndex {
    pub fn build<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut buckets: HashMap<String, Vec<String>> = HashMap::new();
        for word in words {
            let bucket = buckets.entry(anagram_key(word)).or_default();
            if !bucket.iter().any(|w| w == word) {
                bucket.push(word.to_string());
            }
        }
        Self { buckets }
    }

    /// All other words sharing `word`'s key
    pub fn anagrams_of<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.buckets
            .get(&anagram_key(word))
            .into_iter()
            .flatten()
            .map(String::as_str)
            .filter(move |w| *w != word)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Generates neighbour candidates for a word under a [`RuleSet`]
#[derive(Debug)]
pub struct CandidateGenerator<'a> {
    rules: RuleSet,
    alphabet: &'a Alphabet,
    anagrams: Option<&'a AnagramIndex>,
}

impl<'a> CandidateGenerator<'a> {
    pub fn new(rules: RuleSet, alphabet: &'a Alphabet, anagrams: Option<&'a AnagramIndex>) -> Self {
        Self {
            rules,
            alphabet,
            anagrams,
        }
    }

    /// Candidates for `word`, without repeats, in rule order
    pub fn candidates(&self, word: &str) -> Vec<String> {
        let mut raw = Vec::new();
        if self.rules.substitution {
            raw.extend(substitutions(word, self.alphabet));
        }
        if self.rules.insertion_deletion {
            raw.extend(insertions(word, self.alphabet));
            raw.extend(deletions(word));
        }
        if self.rules.anagram {
            if let Some(index) = self.anagrams {
                raw.extend(index.anagrams_of(word).map(str::to_string));
            }
        }

        let mut seen = HashSet::with_capacity(raw.len());
        raw.retain(|c| c != word && seen.insert(c.clone()));
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Alphabet {
        Alphabet::new("abc").unwrap()
    }

    #[test]
    fn test_rule_set_validate() {
        assert!(RuleSet::NONE.validate().is_err());
        assert!(RuleSet::default().validate().is_ok());
        assert_eq!(RuleSet::default(), RuleSet::SUBSTITUTION_ONLY);
    }

    #[test]
    fn test_rule_set_display() {
        let rules = RuleSet {
            substitution: true,
            insertion_deletion: false,
            anagram: true,
        };
        assert_eq!(rules.to_string(), "substitution+anagram");
        assert_eq!(RuleSet::NONE.to_string(), "none");
    }

    #[test]
    fn test_alphabet_dedupes_and_rejects_empty() {
        assert_eq!(Alphabet::new("abca").unwrap().letters(), &['a', 'b', 'c']);
        assert!(Alphabet::new("").is_err());
        assert_eq!(Alphabet::default().letters().len(), 26);
    }

    #[test]
    fn test_substitutions_differ_in_one_position() {
        let subs = substitutions("ab", &abc());
        assert_eq!(subs, vec!["bb", "cb", "aa", "ac"]);
    }

    #[test]
    fn test_insertions_cover_every_position() {
        let ins = insertions("a", &Alphabet::new("xy").unwrap());
        assert_eq!(ins, vec!["xa", "ya", "ax", "ay"]);
    }

    #[test]
    fn test_deletions() {
        assert_eq!(deletions("cat"), vec!["at", "ct", "ca"]);
        assert!(deletions("").is_empty());
    }

    #[test]
    fn test_rules_handle_multibyte_chars() {
        let alphabet = Alphabet::new("é").unwrap();
        assert_eq!(substitutions("ab", &alphabet), vec!["éb", "aé"]);
        assert_eq!(deletions("éa"), vec!["a", "é"]);
        assert_eq!(anagram_key("aé"), "aé");
    }

    #[test]
    fn test_anagram_index_excludes_queried_word() {
        let index = AnagramIndex::build(["listen", "silent", "enlist", "cat"]);
        let mut found: Vec<&str> = index.anagrams_of("silent").collect();
        found.sort();
        assert_eq!(found, vec!["enlist", "listen"]);
        assert_eq!(index.anagrams_of("cat").count(), 0);
        assert_eq!(index.anagrams_of("dog").count(), 0);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_candidates_are_unique() {
        let alphabet = abc();
        let generator = CandidateGenerator::new(
            RuleSet {
                substitution: false,
                insertion_deletion: true,
                anagram: false,
            },
            &alphabet,
            None,
        );
        // Inserting 'a' before or after the existing 'a' gives the same word
        let candidates = generator.candidates("a");
        assert_eq!(candidates.iter().filter(|c| *c == "aa").count(), 1);
        assert!(candidates.contains(&String::new()));
    }

    #[test]
    fn test_candidates_never_include_word_itself() {
        let alphabet = abc();
        let index = AnagramIndex::build(["ab", "ba"]);
        let all = RuleSet {
            substitution: true,
            insertion_deletion: true,
            anagram: true,
        };
        let generator = CandidateGenerator::new(all, &alphabet, Some(&index));
        let candidates = generator.candidates("ab");
        assert!(!candidates.iter().any(|c| c == "ab"));
        assert!(candidates.iter().any(|c| c == "ba"));
    }
}
