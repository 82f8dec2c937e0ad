//! Hearing-loss degradation engine
//!
//! The engine turns an utterance into what a listener at a given severity
//! level would perceive. Control flow per call: the [`ActionSelector`] rolls
//! each whitespace token against level-specific thresholds, the
//! [`WordMangler`] realizes the lossy outcomes against the active language's
//! [`ConfusionTable`], and the engine reassembles survivors into the degraded
//! string plus a loss metric.
//!
//! # Examples
//!
//! ```
//! use earshot_core::{DegradationEngine, LanguageMode};
//!
//! let engine = DegradationEngine::new(4, LanguageMode::English);
//! let result = engine.transform("Could you repeat the question please");
//! assert!(result.loss_percentage <= 100);
//! assert_eq!(result.original, "Could you repeat the question please");
//! ```
//!
//! Copyright (c) 2026 Earshot Team
//! Licensed under the MIT OR Apache-2.0 license

pub mod confusion;
pub mod engine;
pub mod mangler;
pub mod profile;
pub mod selector;

pub use confusion::ConfusionTable;
pub use engine::{DegradationEngine, PLACEHOLDER};
pub use mangler::{WordMangler, ELLIPSIS};
pub use selector::{ActionSelector, WordAction};
