//! Per-word outcome selection
//!
//! For each token the selector rolls once against cumulative thresholds built
//! from the severity level's recognition profile, adjusted upward for
//! "important" tokens - long words, capitalized words, and interrogatives in
//! the active language carry enough salience that listeners catch them more
//! often.
//!
//! Copyright (c) 2026 Earshot Team
//! Licensed under the MIT OR Apache-2.0 license

use crate::degradation::profile::{
    base_keep_rate, garble_rate, partial_rate, IMPORTANCE_BONUS, KEEP_THRESHOLD_CAP,
};
use crate::noise::NoiseSource;
use crate::types::LanguageMode;

const ENGLISH_INTERROGATIVES: &[&str] = &["what", "who", "why", "when", "where", "how"];
const ITALIAN_INTERROGATIVES: &[&str] = &["cosa", "chi", "perché", "quando", "dove", "come"];

/// Outcome chosen for a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordAction {
    /// Token passes through verbatim
    Keep,
    /// Token is distorted at the character level
    Garble,
    /// Token is truncated to a heard fragment
    Partial,
    /// Token vanishes from the output
    Drop,
}

/// Rolls each token against level-specific thresholds to pick its outcome
#[derive(Debug, Clone, Copy)]
pub struct ActionSelector {
    level: u8,
    language: LanguageMode,
}

impl ActionSelector {
    /// `level` must already be clamped into [1, 10]
    pub fn new(level: u8, language: LanguageMode) -> Self {
        Self { level, language }
    }

    /// Choose the outcome for one token, consuming one uniform draw
    pub fn select(&self, token: &str, noise: &mut dyn NoiseSource) -> WordAction {
        let roll = noise.unit() * 100.0;

        let bonus = if self.is_important(token) {
            IMPORTANCE_BONUS
        } else {
            0
        };
        let keep = base_keep_rate(self.level)
            .saturating_add(bonus)
            .min(KEEP_THRESHOLD_CAP) as f64;
        let garble = keep + garble_rate(self.level) as f64;
        let partial = garble + partial_rate(self.level) as f64;

        if roll < keep {
            WordAction::Keep
        } else if roll < garble {
            WordAction::Garble
        } else if roll < partial {
            WordAction::Partial
        } else {
            WordAction::Drop
        }
    }

    /// Important tokens earn a keep-threshold bonus: length over 5, a leading
    /// capital, or an interrogative-word prefix in the active language.
    fn is_important(&self, token: &str) -> bool {
        if token.chars().count() > 5 {
            return true;
        }
        if token.chars().next().is_some_and(|c| c.is_uppercase()) {
            return true;
        }
        let lowered = token.to_lowercase();
        let matches = |words: &[&str]| words.iter().any(|w| lowered.starts_with(w));
        match self.language {
            LanguageMode::English => matches(ENGLISH_INTERROGATIVES),
            LanguageMode::Italian => matches(ITALIAN_INTERROGATIVES),
            LanguageMode::Agnostic => {
                matches(ENGLISH_INTERROGATIVES) || matches(ITALIAN_INTERROGATIVES)
            }
        }
    }
}
