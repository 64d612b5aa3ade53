//! Structured view of a single Vietnamese syllable and the three pure
//! functions over it: parse, validate, transform.

pub mod parser;
pub mod transformer;
pub mod validator;

use std::fmt;

pub use parser::parse;
pub use transformer::{accent, transform};
pub use validator::needs_recovery;

/// A raw keystroke sequence partitioned left to right.
///
/// `initial + nucleus + coda + tail` reconstructs the raw input once the
/// accents placed by [`accent`] are stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Syllable {
    pub initial: Vec<char>,
    pub nucleus: Vec<char>,
    /// Final consonant.
    pub coda: Vec<char>,
    /// Unmatched remainder. Non-empty means the input is not Vietnamese.
    pub tail: Vec<char>,
    /// Nucleus index that received the diacritic, set by the transformer.
    pub mark_position: Option<usize>,
    /// Nucleus index that received the tone, set by the transformer.
    pub tone_position: Option<usize>,
    pub is_uo_diphthong: bool,
}

impl Syllable {
    pub fn is_empty(&self) -> bool {
        self.initial.is_empty()
            && self.nucleus.is_empty()
            && self.coda.is_empty()
            && self.tail.is_empty()
    }

    pub fn has_nucleus(&self) -> bool {
        !self.nucleus.is_empty()
    }

    /// Case-insensitive test for `letter` inside the nucleus.
    pub fn nucleus_contains(&self, letter: char) -> bool {
        self.nucleus
            .iter()
            .any(|c| c.eq_ignore_ascii_case(&letter))
    }

    pub fn nucleus_contains_any(&self, letters: &[char]) -> bool {
        letters.iter().any(|&l| self.nucleus_contains(l))
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in [&self.initial, &self.nucleus, &self.coda, &self.tail] {
            for c in part {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
