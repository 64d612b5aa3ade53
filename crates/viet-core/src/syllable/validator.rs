use crate::lexicon::{contains_ignore_case, ConsonantSet, DiacriticMark, Lexicon};

use super::Syllable;

/// Nucleus spellings that can never occur.
const IMPOSSIBLE_NUCLEI: &[&str] = &["ae", "ea", "ey", "iy", "yi", "yo", "yu"];

/// Finals each (marked) nucleus accepts. An empty list means the nucleus
/// takes no final at all.
const NUCLEUS_FINALS: &[(&str, &[&str])] = &[
    ("a", &["c", "ch", "m", "n", "ng", "nh", "p", "t"]),
    ("ă", &["c", "m", "n", "ng", "p", "t"]),
    ("â", &["c", "m", "n", "ng", "p", "t"]),
    ("e", &["c", "m", "n", "p", "t"]),
    ("ê", &["c", "ch", "m", "n", "nh", "p", "t"]),
    ("i", &["c", "ch", "m", "n", "nh", "p", "t"]),
    ("o", &["c", "m", "n", "ng", "p", "t"]),
    ("ô", &["c", "m", "n", "ng", "p", "t"]),
    ("ơ", &["m", "n", "p", "t"]),
    ("u", &["c", "m", "n", "ng", "p", "t"]),
    ("ư", &["c", "m", "n", "ng", "p", "t"]),
    ("y", &["c", "ch", "m", "n", "nh", "p", "t"]),
    ("iê", &["c", "m", "n", "ng", "p", "t"]),
    ("ie", &["c", "m", "n", "ng", "p", "t"]),
    ("uô", &["c", "m", "n", "ng", "p", "t"]),
    ("uo", &["c", "m", "n", "ng", "p", "t"]),
    ("ươ", &["c", "m", "n", "ng", "p", "t"]),
    ("oa", &["c", "ch", "m", "n", "ng", "nh", "p", "t"]),
    ("oă", &["c", "m", "n", "ng", "p", "t"]),
    ("uâ", &["n", "t"]),
    ("uê", &["c", "ch", "n", "nh"]),
    ("uy", &["c", "ch", "n", "nh", "p", "t"]),
    ("uyê", &["n", "t"]),
    ("uye", &["n", "t"]),
    ("yê", &["m", "n", "p", "t"]),
    ("ye", &["m", "n", "p", "t"]),
    ("ai", &[]),
    ("ao", &[]),
    ("au", &[]),
    ("ay", &[]),
    ("âu", &[]),
    ("ây", &[]),
    ("eo", &[]),
    ("êu", &[]),
    ("ia", &[]),
    ("iu", &[]),
    ("oi", &[]),
    ("ôi", &[]),
    ("ơi", &[]),
    ("ua", &[]),
    ("uya", &[]),
    ("uơ", &[]),
    ("ui", &[]),
    ("ưa", &[]),
    ("ưi", &[]),
    ("ươi", &[]),
    ("ưu", &[]),
];

fn lowercase(chars: &[char]) -> Vec<char> {
    chars.iter().flat_map(|c| c.to_lowercase()).collect()
}

fn allowed_finals(nucleus: &[char]) -> Option<&'static [&'static str]> {
    NUCLEUS_FINALS
        .iter()
        .find(|(n, _)| n.chars().eq(nucleus.iter().copied()))
        .map(|(_, finals)| *finals)
}

/// Whether the syllable cannot be Vietnamese and the raw keystrokes should be
/// emitted instead.
///
/// Finals are checked against the nucleus as it reads with `diacritic`
/// applied, so "ua" + circumflex accepts "t" ("uất"). A nucleus absent from
/// the compatibility table accepts any legal final.
pub fn needs_recovery(syl: &Syllable, diacritic: DiacriticMark) -> bool {
    if !syl.tail.is_empty() {
        return true;
    }

    let nucleus = lowercase(&syl.nucleus);
    if contains_ignore_case(IMPOSSIBLE_NUCLEI, &nucleus) {
        return true;
    }

    if syl.coda.is_empty() {
        return false;
    }
    if !Lexicon::get(ConsonantSet::Native).is_final(&syl.coda) {
        return true;
    }

    let coda: String = lowercase(&syl.coda).into_iter().collect();
    let marked = diacritic.apply_all(&nucleus);
    match allowed_finals(&marked).or_else(|| allowed_finals(&nucleus)) {
        Some(finals) => !finals.contains(&coda.as_str()),
        None => false,
    }
}
