//!
//! Bridge Configuration
//!
//! The bridge needs one piece of configuration data it cannot compute
//! itself: the set of reserved words in the host language, used to escape
//! Opal identifiers that would otherwise fail to parse as host
//! identifiers. The set can be supplied programmatically, loaded from a
//! TOML file, or defaulted to the Rust keyword list.
//!

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Rust strict and reserved keywords, used as the default host
/// reserved-word set.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const",
    "continue", "crate", "do", "dyn", "else", "enum", "extern", "false",
    "final", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "macro",
    "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "try", "type", "typeof", "unsafe", "unsized", "use", "virtual",
    "where", "while", "yield",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A set of host-language reserved words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ReservedWords(BTreeSet<String>);

impl ReservedWords {
    /// An empty set; nothing gets escaped.
    pub fn new() -> Self {
        Self::default()
    }

    /// The Rust keyword list.
    pub fn rust() -> Self {
        RUST_KEYWORDS.iter().copied().collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for ReservedWords {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for ReservedWords {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

/// Configuration consumed by the bridge.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    /// Host reserved words that Opal identifiers must not collide with.
    #[serde(default = "ReservedWords::rust")]
    pub reserved_words: ReservedWords,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            reserved_words: ReservedWords::rust(),
        }
    }
}

impl BridgeConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn rust_keywords_present() {
        let words = ReservedWords::rust();
        assert!(words.contains("fn"));
        assert!(words.contains("match"));
        assert!(!words.contains("frobnicate"));
    }

    #[test]
    fn default_config_uses_rust_keywords() {
        let config = BridgeConfig::default();
        assert!(config.reserved_words.contains("loop"));
    }

    #[test]
    fn parse_toml() {
        let config =
            BridgeConfig::from_toml_str(r#"reserved_words = ["class", "def"]"#).unwrap();
        assert!(config.reserved_words.contains("class"));
        assert!(config.reserved_words.contains("def"));
        assert_eq!(config.reserved_words.len(), 2);
    }

    #[test]
    fn missing_field_defaults_to_rust() {
        let config = BridgeConfig::from_toml_str("").unwrap();
        assert!(config.reserved_words.contains("fn"));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"reserved_words = ["lambda"]"#).unwrap();
        let config = BridgeConfig::load(file.path()).unwrap();
        assert!(config.reserved_words.contains("lambda"));
        assert!(!config.reserved_words.contains("fn"));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            BridgeConfig::from_toml_str("reserved_words = 7"),
            Err(ConfigError::Parse(_))
        ));
    }
}
