//! Word list loading
//!
//! A word list is a UTF-8 text file with one word per line. Surrounding
//! whitespace is trimmed and blank lines are skipped.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Result, WordWebError};
use crate::graph::RuleSet;

/// Which words of the list to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthFilter {
    #[default]
    All,
    /// Only words of exactly this many characters
    Exactly(usize),
}

impl LengthFilter {
    /// Resolve the requested word length against the active rules.
    ///
    /// Insertion/deletion links words of neighbouring lengths, so a length
    /// restriction is dropped when that rule is active.
    pub fn for_rules(word_length: Option<usize>, rules: RuleSet) -> Self {
        match word_length {
            Some(len) if rules.insertion_deletion => {
                warn!(
                    word_length = len,
                    "word length is ignored when insertions/deletions are enabled"
                );
                LengthFilter::All
            }
            Some(len) => LengthFilter::Exactly(len),
            None => LengthFilter::All,
        }
    }

    pub fn accepts(&self, word: &str) -> bool {
        match self {
            LengthFilter::All => true,
            LengthFilter::Exactly(len) => word.chars().count() == *len,
        }
    }
}

/// Extract words from word-list text
pub fn parse_word_list(content: &str, filter: LengthFilter) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty() && filter.accepts(word))
        .map(str::to_string)
        .collect()
}

/// Read a word list from disk
pub fn load_word_list(path: &Path, filter: LengthFilter) -> Result<Vec<String>> {
    match filter {
        LengthFilter::All => info!("reading in all words"),
        LengthFilter::Exactly(len) => info!("reading in words of length {}", len),
    }

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => WordWebError::WordListNotFound {
            path: path.to_path_buf(),
        },
        _ => WordWebError::io_operation("read word list", path.display(), e),
    })?;

    let words = parse_word_list(&content, filter);
    info!("{} words read", words.len());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let words = parse_word_list("cat\r\n  bat \n\n\t\nbad\n", LengthFilter::All);
        assert_eq!(words, vec!["cat", "bat", "bad"]);
    }

    #[test]
    fn test_parse_applies_length_filter() {
        let words = parse_word_list("a\nat\ncat\ncart\ndog\n", LengthFilter::Exactly(3));
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_length_counts_characters() {
        // "café" is five bytes but four characters
        assert!(LengthFilter::Exactly(4).accepts("café"));
        assert!(!LengthFilter::Exactly(5).accepts("café"));
    }

    #[test]
    fn test_length_filter_dropped_for_insertion_deletion() {
        let rules = RuleSet {
            substitution: true,
            insertion_deletion: true,
            anagram: false,
        };
        assert_eq!(LengthFilter::for_rules(Some(4), rules), LengthFilter::All);
        assert_eq!(
            LengthFilter::for_rules(Some(4), RuleSet::SUBSTITUTION_ONLY),
            LengthFilter::Exactly(4)
        );
        assert_eq!(
            LengthFilter::for_rules(None, RuleSet::SUBSTITUTION_ONLY),
            LengthFilter::All
        );
    }

    #[test]
    fn test_load_word_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "cat\nbat\n").unwrap();
        let words = load_word_list(&path, LengthFilter::All).unwrap();
        assert_eq!(words, vec!["cat", "bat"]);
    }

    #[test]
    fn test_missing_word_list() {
        let dir = tempdir().unwrap();
        let err = load_word_list(&dir.path().join("missing.txt"), LengthFilter::All).unwrap_err();
        assert!(matches!(err, WordWebError::WordListNotFound { .. }));
    }
}
