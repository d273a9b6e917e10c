//! Analysis configuration
//!
//! Settings can be read from a TOML file such as:
//!
//! ```toml
//! alphabet = "abcdefghijklmnopqrstuvwxyz"
//! word_length = 4
//!
//! [rules]
//! substitution = true
//! insertion_deletion = false
//! anagram = true
//! ```
//!
//! Every field is optional. A `[rules]` table enables only the rules it
//! sets to true. Command-line flags take precedence.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{Result, WordWebError};
use crate::graph::rules::{Alphabet, RuleSet, DEFAULT_ALPHABET};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Transformations that connect words
    pub rules: RuleSet,
    /// Letters tried by substitution and insertion
    pub alphabet: String,
    /// Keep only words of this length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_length: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            rules: RuleSet::default(),
            alphabet: DEFAULT_ALPHABET.to_string(),
            word_length: None,
        }
    }
}

impl AnalysisConfig {
    /// Load and validate configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| WordWebError::io_operation("read config", path.display(), e))?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.rules.validate()?;
        if self.alphabet.is_empty() {
            bail_invalid!("alphabet", "(empty)");
        }
        if self.word_length == Some(0) {
            bail_invalid!("word length", 0);
        }
        Ok(())
    }

    pub fn alphabet(&self) -> Result<Alphabet> {
        Alphabet::new(&self.alphabet)
    }
}
