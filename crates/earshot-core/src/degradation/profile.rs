//! Severity levels and clinically-inspired recognition-rate tiers
//!
//! The level-to-rate mappings are plain data arrays indexed by level so the
//! monotonicity invariant can be checked exhaustively over all ten tiers.
//!
//! Copyright (c) 2026 Earshot Team
//! Licensed under the MIT OR Apache-2.0 license

/// Mildest severity level
pub const MIN_LEVEL: u8 = 1;

/// Profound-loss severity level
pub const MAX_LEVEL: u8 = 10;

/// Base percentage of words a listener recognizes at each level, 1 through 10
///
/// Invariant: monotonically non-increasing as severity rises.
const BASE_KEEP_RATE: [u8; 10] = [97, 92, 85, 78, 70, 60, 45, 30, 18, 8];

/// Garble-rate percentage per level: rare near both extremes, peaking at mid
/// severities where perception is noisy but not binary.
const GARBLE_RATE: [u8; 10] = [2, 2, 15, 15, 15, 15, 15, 15, 5, 5];

/// Partial-word-rate percentage per level, following the same mid-severity bump
const PARTIAL_RATE: [u8; 10] = [1, 1, 10, 10, 10, 10, 10, 10, 3, 3];

/// Keep-threshold bonus for important tokens (long, capitalized, interrogative)
pub const IMPORTANCE_BONUS: u8 = 5;

/// Hard ceiling on the keep threshold; even trivial utterances at level 1
/// retain a small chance of degradation.
pub const KEEP_THRESHOLD_CAP: u8 = 98;

/// Minimum severity at which dropped words may leave an audible placeholder
pub const PLACEHOLDER_MIN_LEVEL: u8 = 7;

/// Probability that a dropped word at high severity emits a placeholder
pub const PLACEHOLDER_PROBABILITY: f64 = 0.3;

/// Clamp a raw caller-supplied level into the supported [1, 10] range
///
/// Out-of-range values are not errors; they saturate at the nearest bound.
pub fn clamp_level(raw: i32) -> u8 {
    raw.clamp(MIN_LEVEL as i32, MAX_LEVEL as i32) as u8
}

/// Base keep-rate percentage for a clamped level
pub fn base_keep_rate(level: u8) -> u8 {
    BASE_KEEP_RATE[(level - 1) as usize]
}

/// Garble-rate percentage for a clamped level
pub fn garble_rate(level: u8) -> u8 {
    GARBLE_RATE[(level - 1) as usize]
}

/// Partial-word-rate percentage for a clamped level
pub fn partial_rate(level: u8) -> u8 {
    PARTIAL_RATE[(level - 1) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_level_bounds() {
        assert_eq!(clamp_level(-3), 1);
        assert_eq!(clamp_level(0), 1);
        assert_eq!(clamp_level(1), 1);
        assert_eq!(clamp_level(5), 5);
        assert_eq!(clamp_level(10), 10);
        assert_eq!(clamp_level(99), 10);
    }

    #[test]
    fn test_keep_rate_monotonically_non_increasing() {
        for level in MIN_LEVEL..MAX_LEVEL {
            assert!(
                base_keep_rate(level) >= base_keep_rate(level + 1),
                "keep rate rose between level {} and {}",
                level,
                level + 1
            );
        }
    }

    #[test]
    fn test_rate_extremes() {
        assert_eq!(base_keep_rate(1), 97);
        assert_eq!(base_keep_rate(10), 8);
        assert_eq!(garble_rate(1), 2);
        assert_eq!(garble_rate(5), 15);
        assert_eq!(garble_rate(10), 5);
        assert_eq!(partial_rate(2), 1);
        assert_eq!(partial_rate(6), 10);
        assert_eq!(partial_rate(9), 3);
    }
}
