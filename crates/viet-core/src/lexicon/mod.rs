//! Static Vietnamese inventories: initial consonants, vowel nuclei, final
//! consonants, and the tone/diacritic substitution tables.
//!
//! Inventories are compiled into byte tries once per process. Two initial
//! consonant sets exist (with and without the foreign letters z/w/j/f); each
//! syllable state carries which one it parses against, so toggling the
//! preference never mutates shared tables.

mod marks;

use std::sync::OnceLock;

use lexime_trie::{DoubleArray, TrieSearch};

pub use marks::{stroke, DiacriticMark, ToneMark};

pub const INITIAL_CLUSTERS: &[&str] = &[
    "ngh", "ch", "gh", "gi", "kh", "ng", "nh", "ph", "qu", "th", "tr",
];

pub const INITIAL_SINGLES: &[&str] = &[
    "b", "c", "d", "g", "h", "k", "l", "m", "n", "p", "q", "r", "s", "t", "v", "x",
];

/// Loanword initials, enabled by the "allow foreign consonants" preference.
pub const FOREIGN_INITIALS: &[&str] = &["z", "w", "j", "f"];

pub const NUCLEI: &[&str] = &[
    "ieu", "oai", "uou", "oeo", "oao", "oay", "uya", "uyu", "uye", "uoi", "yeu", "uay", //
    "uo", "uu", "ua", "ia", "ai", "io", "ao", "au", "oi", "ie", "ay", "oa", "eo", "oe", "oo",
    "ui", "uy", "ye", "eu", "ue", "iu", //
    "a", "e", "i", "y", "o", "u",
];

/// Nuclei whose horn form marks both letters ("ươ").
pub const UO_FAMILY: &[&str] = &["uo", "uou", "uoi"];

pub const FINALS: &[&str] = &["nh", "ng", "ch", "m", "n", "c", "p", "t"];

/// Which initial-consonant inventory a syllable is parsed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConsonantSet {
    /// Native Vietnamese initials only.
    Native,
    /// Native initials plus z, w, j, f.
    #[default]
    Extended,
}

impl ConsonantSet {
    pub fn from_allow_foreign(allow: bool) -> Self {
        if allow {
            ConsonantSet::Extended
        } else {
            ConsonantSet::Native
        }
    }
}

pub struct Lexicon {
    initials: DoubleArray<u8>,
    nuclei: DoubleArray<u8>,
    finals: DoubleArray<u8>,
}

impl Lexicon {
    /// Get or build the lexicon for `set`.
    pub fn get(set: ConsonantSet) -> &'static Lexicon {
        static NATIVE: OnceLock<Lexicon> = OnceLock::new();
        static EXTENDED: OnceLock<Lexicon> = OnceLock::new();
        match set {
            ConsonantSet::Native => NATIVE.get_or_init(|| Lexicon::build(false)),
            ConsonantSet::Extended => EXTENDED.get_or_init(|| Lexicon::build(true)),
        }
    }

    fn build(foreign: bool) -> Self {
        let mut initials: Vec<&str> = INITIAL_CLUSTERS.to_vec();
        initials.extend_from_slice(INITIAL_SINGLES);
        if foreign {
            initials.extend_from_slice(FOREIGN_INITIALS);
        }
        Lexicon {
            initials: build_trie(&initials),
            nuclei: build_trie(NUCLEI),
            finals: build_trie(FINALS),
        }
    }

    pub fn match_initial(&self, input: &[char]) -> usize {
        longest_match(&self.initials, input)
    }

    pub fn match_nucleus(&self, input: &[char]) -> usize {
        longest_match(&self.nuclei, input)
    }

    pub fn match_final(&self, input: &[char]) -> usize {
        longest_match(&self.finals, input)
    }

    /// Exact, case-insensitive membership in the final-consonant inventory.
    pub fn is_final(&self, input: &[char]) -> bool {
        let query = ascii_query(input);
        query.len() == input.len() && self.finals.exact_match(&query).is_some()
    }
}

/// `DoubleArray::build` wants sorted, deduplicated keys.
fn build_trie(entries: &[&str]) -> DoubleArray<u8> {
    let mut keys: Vec<Vec<u8>> = entries
        .iter()
        .map(|e| e.to_ascii_lowercase().into_bytes())
        .collect();
    keys.sort();
    keys.dedup();
    DoubleArray::<u8>::build(&keys)
}

/// Lower-cased ASCII bytes of `input`, cut at the first non-ASCII char.
/// Inventories are ASCII, so nothing past that point can match.
fn ascii_query(input: &[char]) -> Vec<u8> {
    input
        .iter()
        .map_while(|c| c.is_ascii().then(|| c.to_ascii_lowercase() as u8))
        .collect()
}

/// Length in chars of the longest inventory entry prefixing `input`.
fn longest_match(trie: &DoubleArray<u8>, input: &[char]) -> usize {
    let query = ascii_query(input);
    trie.common_prefix_search(&query)
        .map(|m| m.len)
        .max()
        .unwrap_or(0)
}

/// Case-insensitive membership of `chars` in an inventory slice.
pub fn contains_ignore_case(table: &[&str], chars: &[char]) -> bool {
    table.iter().any(|entry| {
        entry.chars().count() == chars.len()
            && entry
                .chars()
                .zip(chars)
                .all(|(a, b)| b.to_lowercase().eq(std::iter::once(a)))
    })
}

pub fn is_uo_family(nucleus: &[char]) -> bool {
    contains_ignore_case(UO_FAMILY, nucleus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_cluster_before_single() {
        let lex = Lexicon::get(ConsonantSet::Native);
        assert_eq!(lex.match_initial(&chars("nghieng")), 3);
        assert_eq!(lex.match_initial(&chars("ngan")), 2);
        assert_eq!(lex.match_initial(&chars("nam")), 1);
        assert_eq!(lex.match_initial(&chars("quy")), 2);
    }

    #[test]
    fn test_foreign_initials() {
        let native = Lexicon::get(ConsonantSet::Native);
        let extended = Lexicon::get(ConsonantSet::Extended);
        for s in ["za", "wi", "ja", "fa"] {
            assert_eq!(native.match_initial(&chars(s)), 0, "{s} native");
            assert_eq!(extended.match_initial(&chars(s)), 1, "{s} extended");
        }
    }

    #[test]
    fn test_nucleus_longest() {
        let lex = Lexicon::get(ConsonantSet::Native);
        assert_eq!(lex.match_nucleus(&chars("uoi")), 3);
        assert_eq!(lex.match_nucleus(&chars("uon")), 2);
        assert_eq!(lex.match_nucleus(&chars("an")), 1);
        assert_eq!(lex.match_nucleus(&chars("nh")), 0);
    }

    #[test]
    fn test_finals() {
        let lex = Lexicon::get(ConsonantSet::Native);
        assert_eq!(lex.match_final(&chars("nh")), 2);
        assert_eq!(lex.match_final(&chars("ng")), 2);
        assert_eq!(lex.match_final(&chars("nk")), 1);
        assert!(lex.is_final(&chars("CH")));
        assert!(!lex.is_final(&chars("k")));
        assert!(!lex.is_final(&chars("n\u{fffd}")));
    }

    #[test]
    fn test_longest_match_mixed_case() {
        let lex = Lexicon::get(ConsonantSet::Native);
        assert_eq!(lex.match_initial(&chars("NGHe")), 3);
        assert_eq!(lex.match_initial(&chars("Tr")), 2);
        assert_eq!(lex.match_nucleus(&chars("OAi")), 3);
    }

    #[test]
    fn test_prefix_without_entry() {
        let lex = Lexicon::get(ConsonantSet::Native);
        assert_eq!(lex.match_initial(&chars("nga")), 2);
        assert_eq!(lex.match_final(&chars("h")), 0);
        assert_eq!(lex.match_final(&chars("")), 0);
    }

    #[test]
    fn test_non_ascii_stops_match() {
        let lex = Lexicon::get(ConsonantSet::Native);
        assert_eq!(lex.match_initial(&chars("đi")), 0);
        assert_eq!(lex.match_initial(&chars("nđ")), 1);
        assert_eq!(lex.match_nucleus(&chars("uơ")), 1);
    }

    #[test]
    fn test_uo_family() {
        assert!(is_uo_family(&chars("uo")));
        assert!(is_uo_family(&chars("UOI")));
        assert!(is_uo_family(&chars("uou")));
        assert!(!is_uo_family(&chars("ua")));
        assert!(!is_uo_family(&chars("u")));
    }

    #[test]
    fn test_consonant_set_from_preference() {
        assert_eq!(ConsonantSet::from_allow_foreign(true), ConsonantSet::Extended);
        assert_eq!(ConsonantSet::from_allow_foreign(false), ConsonantSet::Native);
    }
}
