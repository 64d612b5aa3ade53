use crate::lexicon::{is_uo_family, Lexicon};

use super::Syllable;

/// Partition `input` into initial, nucleus, final and tail.
///
/// Each part takes the longest inventory entry that prefixes what remains, so
/// every input has exactly one parse. A leading "gi" with no vowel after it is
/// read as consonant "g" plus nucleus "i" ("gì", "gin").
pub fn parse(input: &[char], lexicon: &Lexicon) -> Syllable {
    let mut syl = Syllable::default();
    if input.is_empty() {
        return syl;
    }

    let initial_len = lexicon.match_initial(input);
    let mut rest = &input[initial_len..];

    let is_gi = initial_len == 2
        && input[0].eq_ignore_ascii_case(&'g')
        && input[1].eq_ignore_ascii_case(&'i');

    if is_gi && lexicon.match_nucleus(rest) == 0 {
        syl.initial = input[..1].to_vec();
        syl.nucleus = input[1..2].to_vec();
    } else {
        syl.initial = input[..initial_len].to_vec();
        let nucleus_len = lexicon.match_nucleus(rest);
        syl.nucleus = rest[..nucleus_len].to_vec();
        syl.is_uo_diphthong = is_uo_family(&syl.nucleus);
        rest = &rest[nucleus_len..];
    }

    let final_len = lexicon.match_final(rest);
    syl.coda = rest[..final_len].to_vec();
    syl.tail = rest[final_len..].to_vec();
    syl
}
