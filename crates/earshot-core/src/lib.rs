//! Earshot Core - Hearing-loss simulation engine for text
//!
//! This crate degrades an utterance the way a listener with a given degree of
//! hearing loss would perceive it, and measures the resulting loss. It is the
//! core the surrounding chat shell calls: the shell forwards the degraded
//! text as the user turn of a conversation and owns all transport, history,
//! and rendering concerns.
//!
//! # Main Components
//!
//! - **Error Handling**: `thiserror`-based error types for configuration
//!   failures
//! - **Core Types**: Language modes and the degradation result contract
//! - **Degradation Engine**: Per-word action selection, character-level
//!   mangling, and phonetic confusion tables for three language modes
//! - **Noise Sources**: Explicit, swappable random generators so callers and
//!   tests control every probabilistic branch
//!
//! # Example
//!
//! ```
//! use earshot_core::{DegradationEngine, LanguageMode, Result};
//!
//! fn example() -> Result<()> {
//!     let engine = DegradationEngine::from_tag(7, "english")?;
//!     let heard = engine.transform("When does the train leave");
//!     println!("{} (lost {}%)", heard.degraded, heard.loss_percentage);
//!     Ok(())
//! }
//! ```

pub mod degradation;
pub mod error;
pub mod noise;
pub mod types;

// Re-export main types for convenience
pub use degradation::{
    ActionSelector, ConfusionTable, DegradationEngine, WordAction, WordMangler, ELLIPSIS,
    PLACEHOLDER,
};
pub use error::{Error, Result};
pub use noise::{NoiseSource, ScriptedNoise, SeededNoise, ThreadNoise};
pub use types::{DegradationResult, LanguageMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
