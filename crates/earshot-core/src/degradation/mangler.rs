//! Character-level word distortion
//!
//! Implements the two lossy outcomes the selector can choose: **garble**
//! (substitution via the confusion table, transposition, deletion) and
//! **partial** (truncation to a heard prefix or tail plus an ellipsis
//! marker).
//!
//! Copyright (c) 2026 Earshot Team
//! Licensed under the MIT OR Apache-2.0 license

use crate::degradation::confusion::ConfusionTable;
use crate::noise::NoiseSource;
use crate::types::LanguageMode;

/// Marker standing in for the unheard part of a partially caught word
pub const ELLIPSIS: &str = "...";

/// Probability that a garble edit substitutes via the confusion table
const SUBSTITUTE_PROBABILITY: f64 = 0.4;

/// Cumulative probability bound for a transposition edit
const TRANSPOSE_BOUND: f64 = 0.7;

/// Probability that a partial word keeps its head rather than its tail;
/// word-initial sounds are statistically more perceptible.
const HEAD_BIAS: f64 = 0.6;

/// Applies the selector's lossy outcomes to individual words
#[derive(Debug, Clone, Copy)]
pub struct WordMangler {
    level: u8,
    table: &'static ConfusionTable,
}

impl WordMangler {
    /// `level` must already be clamped into [1, 10]
    pub fn new(level: u8, language: LanguageMode) -> Self {
        Self {
            level,
            table: ConfusionTable::for_language(language),
        }
    }

    /// Distort a word with `ceil(len * level / 20)` sequential character
    /// edits. Words of two characters or fewer are too short to meaningfully
    /// distort and pass through unchanged.
    pub fn garble(&self, token: &str, noise: &mut dyn NoiseSource) -> String {
        let mut work: Vec<char> = token.chars().collect();
        let len = work.len();
        if len <= 2 {
            return token.to_string();
        }

        let edits = (len * self.level as usize).div_ceil(20);
        for _ in 0..edits {
            if work.is_empty() {
                break;
            }
            let pos = noise.index(work.len());
            let op = noise.unit();
            if op < SUBSTITUTE_PROBABILITY {
                self.substitute(&mut work, pos, noise);
            } else if op < TRANSPOSE_BOUND {
                if pos + 1 < work.len() {
                    work.swap(pos, pos + 1);
                }
            } else {
                work.remove(pos);
            }
        }
        work.into_iter().collect()
    }

    /// Truncate a word to the fragment a listener caught. Words of three
    /// characters or fewer collapse to their first character plus the
    /// ellipsis marker.
    pub fn partial(&self, token: &str, noise: &mut dyn NoiseSource) -> String {
        let chars: Vec<char> = token.chars().collect();
        let len = chars.len();
        if len <= 3 {
            return match chars.first() {
                Some(first) => format!("{first}{ELLIPSIS}"),
                None => String::new(),
            };
        }

        let keep_ratio = 1.0 - self.level as f64 / 15.0;
        let keep_len = ((len as f64 * keep_ratio).floor() as usize).max(1);
        if noise.unit() < HEAD_BIAS {
            let head: String = chars[..keep_len].iter().collect();
            format!("{head}{ELLIPSIS}")
        } else {
            let tail: String = chars[len - keep_len..].iter().collect();
            format!("{ELLIPSIS}{tail}")
        }
    }

    /// Replace the character at `pos` (or the two-character cluster starting
    /// there, when the active table keys it) with a confusion-table entry,
    /// restoring the original character's case onto the replacement. A
    /// character absent from the table is left unchanged.
    fn substitute(&self, work: &mut Vec<char>, pos: usize, noise: &mut dyn NoiseSource) {
        let original = work[pos];

        if pos + 1 < work.len() {
            if let Some(options) = self.table.cluster_substitutes(original, work[pos + 1]) {
                let replacement = restore_case(original, options[noise.index(options.len())]);
                work.splice(pos..pos + 2, replacement.chars());
                return;
            }
        }

        if let Some(options) = self.table.substitutes(original) {
            let replacement = restore_case(original, options[noise.index(options.len())]);
            work.splice(pos..pos + 1, replacement.chars());
        }
    }
}

/// Carry an uppercase original's case onto the first letter of a replacement
fn restore_case(original: char, replacement: &str) -> String {
    if original.is_uppercase() {
        let mut chars = replacement.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        replacement.to_string()
    }
}
