use crate::lexicon::{DiacriticMark, ToneMark};
use crate::state::SyllableState;
use crate::syllable::Syllable;

use super::{ends_with_pair, ends_with_repeat, lowercase_keys, starts_with_d, Mark, TypingMethod};

/// Letter-key convention: s f r x j for tones, aa ee oo for the circumflex,
/// w for horn or breve, dd for đ.
pub struct Telex;

impl TypingMethod for Telex {
    fn mark_for(&self, key: char, state: &SyllableState, syl: &Syllable) -> Option<Mark> {
        let key = key.to_ascii_lowercase();
        if key == 'd' && starts_with_d(state.raw()) {
            return Some(Mark::Stroke);
        }
        if !syl.has_nucleus() {
            return None;
        }
        match key {
            's' => Some(Mark::Tone(ToneMark::Rising)),
            'f' => Some(Mark::Tone(ToneMark::Falling)),
            'r' => Some(Mark::Tone(ToneMark::Dipping)),
            'x' => Some(Mark::Tone(ToneMark::Tilde)),
            'j' => Some(Mark::Tone(ToneMark::Heavy)),
            'a' | 'o' | 'e' if syl.nucleus_contains(key) => {
                Some(Mark::Diacritic(DiacriticMark::Circumflex))
            }
            'w' if syl.nucleus_contains('u') => Some(Mark::Diacritic(DiacriticMark::Horn)),
            'w' if syl.nucleus_contains('a') => Some(Mark::Diacritic(DiacriticMark::Breve)),
            'w' if syl.nucleus_contains('o') => Some(Mark::Diacritic(DiacriticMark::Horn)),
            _ => None,
        }
    }

    fn should_stop_processing(&self, keys: &[char]) -> bool {
        let keys = lowercase_keys(keys);
        if keys.last().is_some_and(|c| c.is_ascii_digit()) {
            return true;
        }
        ['s', 'f', 'r', 'x', 'j', 'w']
            .into_iter()
            .any(|k| ends_with_pair(&keys, k))
            || ['a', 'o', 'e', 'd']
                .into_iter()
                .any(|v| ends_with_repeat(&keys, v, v))
    }
}
