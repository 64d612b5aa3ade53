//! Immutable syllable state: raw keystrokes plus the marks typed so far.
//!
//! Every mutator returns a new value. The parse, validity and rendered
//! string are derived on demand, so a state can be kept as an undo point
//! without copying any derived data.

use crate::lexicon::{ConsonantSet, DiacriticMark, Lexicon, ToneMark};
use crate::syllable::{self, Syllable};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyllableState {
    raw: Vec<char>,
    tone: ToneMark,
    diacritic: DiacriticMark,
    stroke: bool,
    consonants: ConsonantSet,
}

impl SyllableState {
    /// Empty state parsing against `consonants`.
    pub fn new(consonants: ConsonantSet) -> Self {
        Self {
            consonants,
            ..Self::default()
        }
    }

    pub fn raw(&self) -> &[char] {
        &self.raw
    }

    pub fn tone(&self) -> ToneMark {
        self.tone
    }

    pub fn diacritic(&self) -> DiacriticMark {
        self.diacritic
    }

    pub fn has_stroke(&self) -> bool {
        self.stroke
    }

    pub fn consonants(&self) -> ConsonantSet {
        self.consonants
    }

    pub fn is_blank(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn syllable(&self) -> Syllable {
        syllable::parse(&self.raw, Lexicon::get(self.consonants))
    }

    pub fn needs_recovery(&self) -> bool {
        syllable::needs_recovery(&self.syllable(), self.diacritic)
    }

    pub fn is_valid(&self) -> bool {
        !self.needs_recovery()
    }

    /// Accented rendering of the current keystrokes.
    pub fn transformed(&self) -> String {
        if self.is_blank() {
            return String::new();
        }
        syllable::transform(&self.syllable(), self.tone, self.diacritic, self.stroke)
    }

    /// The raw letters without any marks.
    pub fn original_input(&self) -> String {
        self.raw.iter().collect()
    }

    #[must_use]
    pub fn push(&self, letter: char) -> Self {
        let mut next = self.clone();
        next.raw.push(letter);
        next
    }

    /// Drop the last raw letter. Tone and diacritic are cleared once no
    /// nucleus remains to carry them, and the stroke once the word is empty.
    #[must_use]
    pub fn pop(&self) -> Self {
        if self.raw.is_empty() {
            return self.clone();
        }
        let mut next = self.clone();
        next.raw.pop();
        if !next.syllable().has_nucleus() {
            next.tone = ToneMark::Level;
            next.diacritic = DiacriticMark::None;
        }
        if next.raw.is_empty() {
            next.stroke = false;
        }
        next
    }

    /// Set `tone`, or clear it if it is already set.
    #[must_use]
    pub fn with_tone(&self, tone: ToneMark) -> Self {
        let mut next = self.clone();
        next.tone = if self.tone == tone {
            ToneMark::Level
        } else {
            tone
        };
        next
    }

    /// Set `diacritic`, or clear it if it is already set.
    #[must_use]
    pub fn with_diacritic(&self, diacritic: DiacriticMark) -> Self {
        let mut next = self.clone();
        next.diacritic = if self.diacritic == diacritic {
            DiacriticMark::None
        } else {
            diacritic
        };
        next
    }

    #[must_use]
    pub fn with_stroke(&self) -> Self {
        let mut next = self.clone();
        next.stroke = !self.stroke;
        next
    }
}
