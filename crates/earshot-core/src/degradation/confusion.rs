//! Phonetic confusion tables for each language mode
//!
//! Each table maps a lowercase character (or, for Italian, a two-character
//! cluster) to an ordered list of plausible replacement strings. Tables are
//! read-only, built once per language behind a `OnceLock`, and safe for
//! unsynchronized concurrent reads by any number of engine instances.
//!
//! Copyright (c) 2026 Earshot Team
//! Licensed under the MIT OR Apache-2.0 license

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::types::LanguageMode;

/// Language-neutral single-character confusions: vowels slide to adjacent
/// vowels, consonants to their voiced/unvoiced or place-of-articulation
/// neighbors.
const AGNOSTIC_SINGLES: &[(char, &[&str])] = &[
    ('a', &["e", "o"]),
    ('e', &["i", "a"]),
    ('i', &["e", "y"]),
    ('o', &["u", "a"]),
    ('u', &["o", "i"]),
    ('p', &["b", "t"]),
    ('b', &["p", "d"]),
    ('t', &["d", "p"]),
    ('d', &["t", "b"]),
    ('k', &["g", "t"]),
    ('g', &["k", "d"]),
    ('c', &["k", "g"]),
    ('q', &["k"]),
    ('f', &["v", "s"]),
    ('v', &["f", "b"]),
    ('s', &["z", "f"]),
    ('z', &["s", "v"]),
    ('m', &["n"]),
    ('n', &["m"]),
    ('l', &["r"]),
    ('r', &["l"]),
    ('w', &["v"]),
    ('y', &["i", "j"]),
    ('j', &["g", "y"]),
    ('x', &["s", "k"]),
    ('h', &["f"]),
];

/// English confusions: single-character keys, but replacements may be
/// digraph-like strings reflecting consonant-cluster ambiguity.
const ENGLISH_SINGLES: &[(char, &[&str])] = &[
    ('a', &["e", "u", "o"]),
    ('e', &["i", "a", "u"]),
    ('i', &["e", "ee", "y"]),
    ('o', &["u", "aw", "a"]),
    ('u', &["o", "a", "oo"]),
    ('p', &["b", "t"]),
    ('b', &["p", "d", "v"]),
    ('t', &["d", "th", "p"]),
    ('d', &["t", "b"]),
    ('k', &["g", "t", "c"]),
    ('g', &["k", "d", "j"]),
    ('c', &["k", "s", "t"]),
    ('q', &["k", "g"]),
    ('f', &["v", "th", "s"]),
    ('v', &["f", "b"]),
    ('s', &["z", "sh", "f"]),
    ('z', &["s", "th"]),
    ('m', &["n", "ng"]),
    ('n', &["m", "ng"]),
    ('l', &["r", "w"]),
    ('r', &["l", "w"]),
    ('w', &["v", "r"]),
    ('y', &["i", "e"]),
    ('j', &["ch", "g"]),
    ('x', &["ks", "s"]),
    ('h', &["th", "wh"]),
];

/// Italian single-character confusions; `h` is silent and maps only to the
/// empty string.
const ITALIAN_SINGLES: &[(char, &[&str])] = &[
    ('a', &["e", "o"]),
    ('e', &["i", "a"]),
    ('i', &["e", "a"]),
    ('o', &["u", "a"]),
    ('u', &["o", "i"]),
    ('p', &["b", "t"]),
    ('b', &["p", "d"]),
    ('t', &["d", "p"]),
    ('d', &["t", "b"]),
    ('c', &["g", "t"]),
    ('g', &["c", "d"]),
    ('q', &["c"]),
    ('f', &["v", "s"]),
    ('v', &["f", "b"]),
    ('s', &["z", "f"]),
    ('z', &["s", "c"]),
    ('m', &["n"]),
    ('n', &["m", "gn"]),
    ('l', &["r", "gl"]),
    ('r', &["l"]),
    ('h', &[""]),
];

/// Italian cluster confusions: orthographic doubled consonants degrade toward
/// their single form, and digraphs toward their perceived sound.
const ITALIAN_CLUSTERS: &[((char, char), &[&str])] = &[
    (('c', 'c'), &["c", "g"]),
    (('g', 'g'), &["g", "c"]),
    (('s', 's'), &["s", "z"]),
    (('z', 'z'), &["z", "s"]),
    (('t', 't'), &["t", "d"]),
    (('d', 'd'), &["d", "t"]),
    (('p', 'p'), &["p", "b"]),
    (('b', 'b'), &["b", "p"]),
    (('r', 'r'), &["r", "l"]),
    (('l', 'l'), &["l", "r"]),
    (('m', 'm'), &["m", "n"]),
    (('n', 'n'), &["n", "m"]),
    (('g', 'l'), &["li", "l"]),
    (('g', 'n'), &["ni", "n"]),
    (('s', 'c'), &["sh", "s"]),
    (('c', 'h'), &["c", "k"]),
    (('g', 'h'), &["g"]),
];

/// Read-only character-to-substitute mapping for one language mode
#[derive(Debug)]
pub struct ConfusionTable {
    singles: HashMap<char, &'static [&'static str]>,
    clusters: HashMap<(char, char), &'static [&'static str]>,
}

impl ConfusionTable {
    fn build(
        singles: &[(char, &'static [&'static str])],
        clusters: &[((char, char), &'static [&'static str])],
    ) -> Self {
        Self {
            singles: singles.iter().copied().collect(),
            clusters: clusters.iter().copied().collect(),
        }
    }

    /// The shared table for a language mode
    pub fn for_language(language: LanguageMode) -> &'static ConfusionTable {
        static AGNOSTIC: OnceLock<ConfusionTable> = OnceLock::new();
        static ENGLISH: OnceLock<ConfusionTable> = OnceLock::new();
        static ITALIAN: OnceLock<ConfusionTable> = OnceLock::new();

        match language {
            LanguageMode::Agnostic => {
                AGNOSTIC.get_or_init(|| ConfusionTable::build(AGNOSTIC_SINGLES, &[]))
            }
            LanguageMode::English => {
                ENGLISH.get_or_init(|| ConfusionTable::build(ENGLISH_SINGLES, &[]))
            }
            LanguageMode::Italian => {
                ITALIAN.get_or_init(|| ConfusionTable::build(ITALIAN_SINGLES, ITALIAN_CLUSTERS))
            }
        }
    }

    /// Plausible substitutes for a single character, looked up
    /// case-insensitively; `None` if the character has no entry.
    pub fn substitutes(&self, c: char) -> Option<&'static [&'static str]> {
        self.singles
            .get(&c.to_ascii_lowercase())
            .copied()
            .filter(|subs| !subs.is_empty())
    }

    /// Substitutes for a two-character cluster starting at `a`, if this
    /// language keys any clusters (only Italian does).
    pub fn cluster_substitutes(&self, a: char, b: char) -> Option<&'static [&'static str]> {
        self.clusters
            .get(&(a.to_ascii_lowercase(), b.to_ascii_lowercase()))
            .copied()
    }
}
