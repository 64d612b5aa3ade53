//! Typing methods: which keystrokes place marks, and which key sequences
//! cancel composition for the rest of the word.

mod telex;
mod vni;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::lexicon::{DiacriticMark, ToneMark};
use crate::state::SyllableState;
use crate::syllable::Syllable;

pub use telex::Telex;
pub use vni::Vni;

/// A mark a keystroke resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Tone(ToneMark),
    Diacritic(DiacriticMark),
    Stroke,
}

impl Mark {
    fn apply_to(self, state: &SyllableState) -> SyllableState {
        match self {
            Mark::Tone(tone) => state.with_tone(tone),
            Mark::Diacritic(diacritic) => state.with_diacritic(diacritic),
            Mark::Stroke => state.with_stroke(),
        }
    }
}

pub trait TypingMethod: Send + Sync {
    /// The mark `key` places on `state`, if any. `syl` is `state`'s parse.
    fn mark_for(&self, key: char, state: &SyllableState, syl: &Syllable) -> Option<Mark>;

    /// Whether the keys typed so far end in a cancellation pattern, after
    /// which the rest of the word is taken literally.
    fn should_stop_processing(&self, keys: &[char]) -> bool;

    /// Feed one keystroke. Returns the new state and whether the key was
    /// consumed as a mark rather than appended.
    fn push(&self, key: char, state: &SyllableState) -> (SyllableState, bool) {
        let syl = state.syllable();
        if syl.tail.is_empty() {
            if let Some(mark) = self.mark_for(key, state, &syl) {
                return (mark.apply_to(state), true);
            }
        }
        (state.push(key), false)
    }

    fn pop(&self, state: &SyllableState) -> SyllableState {
        state.pop()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    #[default]
    Telex,
    Vni,
}

impl MethodKind {
    pub fn method(self) -> &'static dyn TypingMethod {
        match self {
            MethodKind::Telex => &Telex,
            MethodKind::Vni => &Vni,
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodKind::Telex => f.write_str("telex"),
            MethodKind::Vni => f.write_str("vni"),
        }
    }
}

impl FromStr for MethodKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "telex" => Ok(MethodKind::Telex),
            "vni" => Ok(MethodKind::Vni),
            other => Err(format!("unknown typing method: {other}")),
        }
    }
}

fn starts_with_d(raw: &[char]) -> bool {
    raw.first().is_some_and(|c| c.eq_ignore_ascii_case(&'d'))
}

fn lowercase_keys(keys: &[char]) -> Vec<char> {
    keys.iter().map(|c| c.to_ascii_lowercase()).collect()
}

/// `keys` ends with `key` typed twice.
fn ends_with_pair(keys: &[char], key: char) -> bool {
    matches!(keys, [.., a, b] if *a == key && *b == key)
}

/// `keys` ends with `key` typed twice, preceded by `lead` and then only
/// ASCII letters.
fn ends_with_repeat(keys: &[char], lead: char, key: char) -> bool {
    ends_with_pair(keys, key)
        && keys[..keys.len() - 2]
            .iter()
            .rev()
            .take_while(|c| c.is_ascii_alphabetic())
            .any(|&c| c == lead)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_ends_with_pair() {
        assert!(ends_with_pair(&chars("ass"), 's'));
        assert!(!ends_with_pair(&chars("as"), 's'));
        assert!(!ends_with_pair(&chars("s"), 's'));
    }

    #[test]
    fn test_ends_with_repeat() {
        assert!(ends_with_repeat(&chars("aaa"), 'a', 'a'));
        assert!(ends_with_repeat(&chars("taataa"), 'a', 'a'));
        assert!(!ends_with_repeat(&chars("aa"), 'a', 'a'));
        assert!(!ends_with_repeat(&chars("xaa"), 'a', 'a'));
        // a non-letter breaks the run back to the lead
        assert!(!ends_with_repeat(&chars("a1baa"), 'a', 'a'));
        assert!(ends_with_repeat(&chars("ca66"), 'a', '6'));
    }

    #[test]
    fn test_method_kind_parse() {
        assert_eq!("telex".parse::<MethodKind>(), Ok(MethodKind::Telex));
        assert_eq!("VNI".parse::<MethodKind>(), Ok(MethodKind::Vni));
        assert!("viqr".parse::<MethodKind>().is_err());
        assert_eq!(MethodKind::Vni.to_string(), "vni");
    }
}
