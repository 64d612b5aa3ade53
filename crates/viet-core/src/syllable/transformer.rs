use crate::lexicon::{stroke, DiacriticMark, ToneMark};

use super::Syllable;

/// Place the stroke, diacritic and tone onto `syl`, in that order.
///
/// Both marks prefer the second nucleus letter when the nucleus has three
/// letters, or two letters followed by a final. The tone additionally prefers
/// whichever letter took the diacritic. The horn on a "uo" nucleus marks the
/// second letter and, when a third letter or a final follows, the first one
/// too ("ươ").
pub fn accent(
    syl: &Syllable,
    tone: ToneMark,
    diacritic: DiacriticMark,
    stroke_d: bool,
) -> Syllable {
    let mut out = syl.clone();
    out.mark_position = None;
    out.tone_position = None;
    if out.is_empty() {
        return out;
    }

    if stroke_d {
        if let Some(first) = out.initial.first_mut() {
            if let Some(stroked) = stroke(*first) {
                *first = stroked;
            }
        }
    }

    place_diacritic(&mut out, diacritic);
    place_tone(&mut out, tone);
    out
}

/// Accented display string for `syl`.
pub fn transform(
    syl: &Syllable,
    tone: ToneMark,
    diacritic: DiacriticMark,
    stroke_d: bool,
) -> String {
    accent(syl, tone, diacritic, stroke_d).to_string()
}

fn prefers_second(syl: &Syllable) -> bool {
    let n = syl.nucleus.len();
    n == 3 || (n == 2 && !syl.coda.is_empty())
}

fn try_place(nucleus: &mut [char], idx: usize, apply: impl Fn(char) -> Option<char>) -> bool {
    match nucleus.get(idx).copied().and_then(apply) {
        Some(marked) => {
            nucleus[idx] = marked;
            true
        }
        None => false,
    }
}

fn place_diacritic(syl: &mut Syllable, diacritic: DiacriticMark) {
    if diacritic == DiacriticMark::None {
        return;
    }
    let apply = |c| diacritic.apply(c);
    let count = syl.nucleus.len();

    if diacritic == DiacriticMark::Horn
        && syl.is_uo_diphthong
        && try_place(&mut syl.nucleus, 1, apply)
    {
        syl.mark_position = Some(1);
        if count == 3 || !syl.coda.is_empty() {
            try_place(&mut syl.nucleus, 0, apply);
        }
        return;
    }

    if prefers_second(syl) && try_place(&mut syl.nucleus, 1, apply) {
        syl.mark_position = Some(1);
        return;
    }

    syl.mark_position = (0..count).find(|&i| try_place(&mut syl.nucleus, i, apply));
}

fn place_tone(syl: &mut Syllable, tone: ToneMark) {
    if tone == ToneMark::Level {
        return;
    }
    let apply = |c| tone.apply(c);

    if let Some(pos) = syl.mark_position {
        if try_place(&mut syl.nucleus, pos, apply) {
            syl.tone_position = Some(pos);
            return;
        }
    }

    if prefers_second(syl) && try_place(&mut syl.nucleus, 1, apply) {
        syl.tone_position = Some(1);
        return;
    }

    let count = syl.nucleus.len();
    syl.tone_position = (0..count).find(|&i| try_place(&mut syl.nucleus, i, apply));
}
