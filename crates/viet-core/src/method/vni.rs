use crate::lexicon::{DiacriticMark, ToneMark};
use crate::state::SyllableState;
use crate::syllable::Syllable;

use super::{ends_with_pair, ends_with_repeat, lowercase_keys, starts_with_d, Mark, TypingMethod};

/// Digit-key convention: 1-5 for tones, 6 circumflex, 7 horn, 8 breve, 9 for đ.
pub struct Vni;

impl TypingMethod for Vni {
    fn mark_for(&self, key: char, state: &SyllableState, syl: &Syllable) -> Option<Mark> {
        if key == '9' && starts_with_d(state.raw()) {
            return Some(Mark::Stroke);
        }
        if !syl.has_nucleus() {
            return None;
        }
        match key {
            '1' => Some(Mark::Tone(ToneMark::Rising)),
            '2' => Some(Mark::Tone(ToneMark::Falling)),
            '3' => Some(Mark::Tone(ToneMark::Dipping)),
            '4' => Some(Mark::Tone(ToneMark::Tilde)),
            '5' => Some(Mark::Tone(ToneMark::Heavy)),
            '6' if syl.nucleus_contains_any(&['a', 'o', 'e']) => {
                Some(Mark::Diacritic(DiacriticMark::Circumflex))
            }
            '7' if syl.nucleus_contains_any(&['u', 'o']) => {
                Some(Mark::Diacritic(DiacriticMark::Horn))
            }
            '8' if syl.nucleus_contains('a') => Some(Mark::Diacritic(DiacriticMark::Breve)),
            _ => None,
        }
    }

    fn should_stop_processing(&self, keys: &[char]) -> bool {
        let keys = lowercase_keys(keys);
        ['1', '2', '3', '4', '5', '8']
            .into_iter()
            .any(|k| ends_with_pair(&keys, k))
            || ['a', 'o', 'e']
                .into_iter()
                .any(|v| ends_with_repeat(&keys, v, '6'))
            || ['u', 'o']
                .into_iter()
                .any(|v| ends_with_repeat(&keys, v, '7'))
            || ends_with_repeat(&keys, 'd', '9')
    }
}
