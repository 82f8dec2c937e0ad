//! Core types and data structures for the Earshot degradation engine
//!
//! This module defines the fundamental data structures shared across the
//! library: the language mode selecting a confusion table, and the result
//! value handed back to callers.
//!
//! Copyright (c) 2026 Earshot Team
//! Licensed under the MIT OR Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Language mode selecting which phonetic confusion table is active
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LanguageMode {
    /// English single-character table with digraph-like replacements
    English,
    /// Italian table with doubled-consonant and digraph cluster entries
    Italian,
    /// Language-neutral table based on generic phonetic proximity
    Agnostic,
}

impl LanguageMode {
    /// Parse a language tag into a mode
    ///
    /// Tags are matched case-insensitively against the three recognized
    /// values (`english`, `italian`, `agnostic`). Any other tag is an
    /// [`Error::InvalidConfiguration`]; callers that want a silent fallback
    /// normalize the tag before constructing the engine.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "english" => Ok(LanguageMode::English),
            "italian" => Ok(LanguageMode::Italian),
            "agnostic" => Ok(LanguageMode::Agnostic),
            other => Err(Error::invalid_configuration(
                "language",
                format!("unknown language tag '{}'", other),
            )),
        }
    }

    /// The canonical lowercase tag for this mode
    pub fn tag(&self) -> &'static str {
        match self {
            LanguageMode::English => "english",
            LanguageMode::Italian => "italian",
            LanguageMode::Agnostic => "agnostic",
        }
    }
}

impl FromStr for LanguageMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LanguageMode::from_tag(s)
    }
}

impl fmt::Display for LanguageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Result of one degradation pass over an utterance
///
/// Produced fresh on every call; the engine keeps no history. Serializes with
/// camelCase field names (`lossPercentage`) to match the external contract
/// expected by the chat shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DegradationResult {
    /// The caller-supplied utterance, trimmed
    pub original: String,

    /// The degraded rendition of the utterance
    pub degraded: String,

    /// Measured loss, in whole percent, within [0, 100]
    pub loss_percentage: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_tag_round_trip() {
        for mode in [
            LanguageMode::English,
            LanguageMode::Italian,
            LanguageMode::Agnostic,
        ] {
            assert_eq!(LanguageMode::from_tag(mode.tag()).unwrap(), mode);
        }
    }

    #[test]
    fn test_language_tag_case_insensitive() {
        assert_eq!(
            LanguageMode::from_tag("  Italian ").unwrap(),
            LanguageMode::Italian
        );
        assert_eq!(
            "ENGLISH".parse::<LanguageMode>().unwrap(),
            LanguageMode::English
        );
    }

    #[test]
    fn test_language_tag_unrecognized() {
        let err = LanguageMode::from_tag("klingon").unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = DegradationResult {
            original: "hello".to_string(),
            degraded: "h...".to_string(),
            loss_percentage: 0,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("lossPercentage").is_some());
        assert!(json.get("loss_percentage").is_none());
    }
}
