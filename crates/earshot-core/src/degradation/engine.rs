//! The degradation engine
//!
//! A `DegradationEngine` is configured once with a severity level and a
//! language mode, then invoked per utterance. Each `transform` call is an
//! independent, side-effect-free transformation apart from its random draws:
//! the engine holds only immutable configuration and shared read-only tables,
//! so instances are safe to use concurrently.
//!
//! Copyright (c) 2026 Earshot Team
//! Licensed under the MIT OR Apache-2.0 license

use tracing::debug;

use crate::degradation::mangler::WordMangler;
use crate::degradation::profile::{
    clamp_level, PLACEHOLDER_MIN_LEVEL, PLACEHOLDER_PROBABILITY,
};
use crate::degradation::selector::{ActionSelector, WordAction};
use crate::error::Result;
use crate::noise::{NoiseSource, ThreadNoise};
use crate::types::{DegradationResult, LanguageMode};

/// Marker emitted for a dropped word the listener noticed but could not parse
pub const PLACEHOLDER: &str = "[?]";

/// Simulates hearing loss over text at a fixed severity and language
#[derive(Debug, Clone, Copy)]
pub struct DegradationEngine {
    level: u8,
    language: LanguageMode,
    selector: ActionSelector,
    mangler: WordMangler,
}

impl DegradationEngine {
    /// Build an engine for a severity level and language mode
    ///
    /// `level` is clamped into [1, 10]; out-of-range values saturate rather
    /// than fail. Construction is otherwise side-effect-free.
    pub fn new(level: i32, language: LanguageMode) -> Self {
        let level = clamp_level(level);
        debug!(level, language = %language, "configured degradation engine");
        Self {
            level,
            language,
            selector: ActionSelector::new(level, language),
            mangler: WordMangler::new(level, language),
        }
    }

    /// Build an engine from a raw language tag
    ///
    /// Fails with [`Error::InvalidConfiguration`] for a tag outside the three
    /// recognized modes; callers that prefer a silent default normalize the
    /// tag first.
    ///
    /// [`Error::InvalidConfiguration`]: crate::error::Error::InvalidConfiguration
    pub fn from_tag(level: i32, language_tag: &str) -> Result<Self> {
        Ok(Self::new(level, LanguageMode::from_tag(language_tag)?))
    }

    /// A new engine at a different severity, retaining the current language
    pub fn with_level(&self, level: i32) -> Self {
        Self::new(level, self.language)
    }

    /// Current severity level, always within [1, 10]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Active language mode
    pub fn language(&self) -> LanguageMode {
        self.language
    }

    /// Degrade an utterance using the thread-local random source
    pub fn transform(&self, text: &str) -> DegradationResult {
        self.transform_with(text, &mut ThreadNoise)
    }

    /// Degrade an utterance, drawing randomness from the supplied source
    ///
    /// Tokens are processed in order; each rolls through the action selector
    /// and, when lossy, the word mangler. Surviving tokens are rejoined with
    /// single spaces, so dropped words collapse without leaving gaps.
    ///
    /// The loss percentage counts emitted placeholder markers as lost - they
    /// signal perceived-but-unintelligible, not recovered, content. An empty
    /// or whitespace-only utterance yields loss 0 by convention.
    pub fn transform_with(&self, text: &str, noise: &mut dyn NoiseSource) -> DegradationResult {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.is_empty() {
            return DegradationResult {
                original: String::new(),
                degraded: String::new(),
                loss_percentage: 0,
            };
        }

        let mut output: Vec<String> = Vec::with_capacity(tokens.len());
        let mut placeholders = 0usize;
        for token in &tokens {
            match self.selector.select(token, noise) {
                WordAction::Keep => output.push((*token).to_string()),
                WordAction::Garble => output.push(self.mangler.garble(token, noise)),
                WordAction::Partial => output.push(self.mangler.partial(token, noise)),
                WordAction::Drop => {
                    if self.level >= PLACEHOLDER_MIN_LEVEL
                        && noise.unit() < PLACEHOLDER_PROBABILITY
                    {
                        output.push(PLACEHOLDER.to_string());
                        placeholders += 1;
                    }
                }
            }
        }

        let heard = output.len() - placeholders;
        let loss = loss_percentage(heard, tokens.len());
        debug!(
            input_tokens = tokens.len(),
            output_tokens = output.len(),
            loss,
            "degraded utterance"
        );

        DegradationResult {
            original: text.trim().to_string(),
            degraded: output.join(" "),
            loss_percentage: loss,
        }
    }
}

/// Rounded percentage of input tokens with no intelligible counterpart in the
/// output, floored at zero
fn loss_percentage(heard: usize, input: usize) -> u8 {
    let loss = (1.0 - heard as f64 / input as f64) * 100.0;
    loss.round().max(0.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::ScriptedNoise;

    #[test]
    fn test_level_is_clamped_at_construction() {
        assert_eq!(DegradationEngine::new(0, LanguageMode::English).level(), 1);
        assert_eq!(DegradationEngine::new(42, LanguageMode::English).level(), 10);
        assert_eq!(DegradationEngine::new(6, LanguageMode::English).level(), 6);
    }

    #[test]
    fn test_from_tag_valid_and_invalid() {
        let engine = DegradationEngine::from_tag(3, "Italian").unwrap();
        assert_eq!(engine.language(), LanguageMode::Italian);
        assert!(DegradationEngine::from_tag(3, "esperanto").is_err());
    }

    #[test]
    fn test_with_level_retains_language() {
        let engine = DegradationEngine::new(2, LanguageMode::Italian);
        let louder = engine.with_level(9);
        assert_eq!(louder.level(), 9);
        assert_eq!(louder.language(), LanguageMode::Italian);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let engine = DegradationEngine::new(5, LanguageMode::English);
        let mut noise = ScriptedNoise::default();
        for input in ["", "   ", "\t\n  "] {
            let result = engine.transform_with(input, &mut noise);
            assert_eq!(result.original, "");
            assert_eq!(result.degraded, "");
            assert_eq!(result.loss_percentage, 0);
        }
    }

    #[test]
    fn test_forced_keep_passes_through_verbatim() {
        // an empty script draws 0.0 rolls, which always land in the keep band
        let engine = DegradationEngine::new(1, LanguageMode::Agnostic);
        let mut noise = ScriptedNoise::default();
        let result = engine.transform_with("The weather is nice today", &mut noise);
        assert_eq!(result.degraded, "The weather is nice today");
        assert_eq!(result.loss_percentage, 0);
    }

    #[test]
    fn test_forced_drop_loses_everything() {
        // rolls of 0.99 exceed every level-10 threshold; placeholder draws
        // of 0.5 stay above the 0.3 emission probability
        let engine = DegradationEngine::new(10, LanguageMode::Agnostic);
        let mut noise = ScriptedNoise::new(&[0.99, 0.5, 0.99, 0.5], &[]);
        let result = engine.transform_with("Hello world", &mut noise);
        assert_eq!(result.degraded, "");
        assert_eq!(result.loss_percentage, 100);
    }

    #[test]
    fn test_placeholder_counts_as_loss() {
        let engine = DegradationEngine::new(10, LanguageMode::Agnostic);
        let mut noise = ScriptedNoise::new(&[0.99, 0.1], &[]);
        let result = engine.transform_with("Hello", &mut noise);
        assert_eq!(result.degraded, PLACEHOLDER);
        assert_eq!(result.loss_percentage, 100);
    }

    #[test]
    fn test_no_placeholder_below_level_seven() {
        // at level 6 a drop consumes no placeholder draw and emits nothing
        let engine = DegradationEngine::new(6, LanguageMode::Agnostic);
        let mut noise = ScriptedNoise::new(&[0.99], &[]);
        let result = engine.transform_with("Hello", &mut noise);
        assert_eq!(result.degraded, "");
        assert_eq!(result.loss_percentage, 100);
    }

    #[test]
    fn test_drops_collapse_whitespace() {
        // keep, drop, keep at level 6: single space in the output
        let engine = DegradationEngine::new(6, LanguageMode::Agnostic);
        let mut noise = ScriptedNoise::new(&[0.0, 0.99, 0.0], &[]);
        let result = engine.transform_with("uno due tre", &mut noise);
        assert_eq!(result.degraded, "uno tre");
        assert_eq!(result.loss_percentage, 33);
    }

    #[test]
    fn test_original_is_trimmed_input() {
        let engine = DegradationEngine::new(1, LanguageMode::English);
        let mut noise = ScriptedNoise::default();
        let result = engine.transform_with("  hold the line  ", &mut noise);
        assert_eq!(result.original, "hold the line");
    }
}
