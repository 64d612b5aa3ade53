//! Vietnamese syllable composition for Telex and VNI input.
//!
//! Pure building blocks used by the session crate: lexical tables, the
//! syllable parser/validator/transformer, immutable syllable state, typing
//! methods, keystroke diffs and per-application output strategies.

pub mod diff;
pub mod lexicon;
pub mod method;
pub mod settings;
pub mod state;
pub mod strategy;
pub mod syllable;
