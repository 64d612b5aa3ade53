/// Tone (pitch contour) carried by a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToneMark {
    /// Unmarked (thanh ngang).
    #[default]
    Level,
    /// Sắc: á
    Rising,
    /// Huyền: à
    Falling,
    /// Hỏi: ả
    Dipping,
    /// Ngã: ã
    Tilde,
    /// Nặng: ạ
    Heavy,
}

/// Letter-forming mark applied to a base vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DiacriticMark {
    #[default]
    None,
    /// â ê ô
    Circumflex,
    /// ơ ư
    Horn,
    /// ă
    Breve,
}

// Columns: rising, falling, dipping, tilde, heavy.
const TONE_TABLE: &[(char, [char; 5])] = &[
    ('a', ['á', 'à', 'ả', 'ã', 'ạ']),
    ('ă', ['ắ', 'ằ', 'ẳ', 'ẵ', 'ặ']),
    ('â', ['ấ', 'ầ', 'ẩ', 'ẫ', 'ậ']),
    ('e', ['é', 'è', 'ẻ', 'ẽ', 'ẹ']),
    ('ê', ['ế', 'ề', 'ể', 'ễ', 'ệ']),
    ('i', ['í', 'ì', 'ỉ', 'ĩ', 'ị']),
    ('o', ['ó', 'ò', 'ỏ', 'õ', 'ọ']),
    ('ô', ['ố', 'ồ', 'ổ', 'ỗ', 'ộ']),
    ('ơ', ['ớ', 'ờ', 'ở', 'ỡ', 'ợ']),
    ('u', ['ú', 'ù', 'ủ', 'ũ', 'ụ']),
    ('ư', ['ứ', 'ừ', 'ử', 'ữ', 'ự']),
    ('y', ['ý', 'ỳ', 'ỷ', 'ỹ', 'ỵ']),
    ('A', ['Á', 'À', 'Ả', 'Ã', 'Ạ']),
    ('Ă', ['Ắ', 'Ằ', 'Ẳ', 'Ẵ', 'Ặ']),
    ('Â', ['Ấ', 'Ầ', 'Ẩ', 'Ẫ', 'Ậ']),
    ('E', ['É', 'È', 'Ẻ', 'Ẽ', 'Ẹ']),
    ('Ê', ['Ế', 'Ề', 'Ể', 'Ễ', 'Ệ']),
    ('I', ['Í', 'Ì', 'Ỉ', 'Ĩ', 'Ị']),
    ('O', ['Ó', 'Ò', 'Ỏ', 'Õ', 'Ọ']),
    ('Ô', ['Ố', 'Ồ', 'Ổ', 'Ỗ', 'Ộ']),
    ('Ơ', ['Ớ', 'Ờ', 'Ở', 'Ỡ', 'Ợ']),
    ('U', ['Ú', 'Ù', 'Ủ', 'Ũ', 'Ụ']),
    ('Ư', ['Ứ', 'Ừ', 'Ử', 'Ữ', 'Ự']),
    ('Y', ['Ý', 'Ỳ', 'Ỷ', 'Ỹ', 'Ỵ']),
];

impl ToneMark {
    pub const MARKED: [ToneMark; 5] = [
        ToneMark::Rising,
        ToneMark::Falling,
        ToneMark::Dipping,
        ToneMark::Tilde,
        ToneMark::Heavy,
    ];

    fn column(self) -> Option<usize> {
        match self {
            ToneMark::Level => None,
            ToneMark::Rising => Some(0),
            ToneMark::Falling => Some(1),
            ToneMark::Dipping => Some(2),
            ToneMark::Tilde => Some(3),
            ToneMark::Heavy => Some(4),
        }
    }

    /// Toned form of `vowel`, or `None` if the tone is level or the letter
    /// cannot carry a tone.
    pub fn apply(self, vowel: char) -> Option<char> {
        let col = self.column()?;
        TONE_TABLE
            .iter()
            .find(|(base, _)| *base == vowel)
            .map(|(_, row)| row[col])
    }
}

impl DiacriticMark {
    /// Marked form of `vowel`, or `None` if the mark does not apply to it.
    pub fn apply(self, vowel: char) -> Option<char> {
        let marked = match (self, vowel) {
            (DiacriticMark::Circumflex, 'a') => 'â',
            (DiacriticMark::Circumflex, 'A') => 'Â',
            (DiacriticMark::Circumflex, 'e') => 'ê',
            (DiacriticMark::Circumflex, 'E') => 'Ê',
            (DiacriticMark::Circumflex, 'o') => 'ô',
            (DiacriticMark::Circumflex, 'O') => 'Ô',
            (DiacriticMark::Breve, 'a') => 'ă',
            (DiacriticMark::Breve, 'A') => 'Ă',
            (DiacriticMark::Horn, 'o') => 'ơ',
            (DiacriticMark::Horn, 'O') => 'Ơ',
            (DiacriticMark::Horn, 'u') => 'ư',
            (DiacriticMark::Horn, 'U') => 'Ư',
            _ => return None,
        };
        Some(marked)
    }

    /// Substitute every letter of `nucleus` the mark applies to.
    pub fn apply_all(self, nucleus: &[char]) -> Vec<char> {
        nucleus
            .iter()
            .map(|&c| self.apply(c).unwrap_or(c))
            .collect()
    }
}

/// d → đ, D → Đ.
pub fn stroke(letter: char) -> Option<char> {
    match letter {
        'd' => Some('đ'),
        'D' => Some('Đ'),
        _ => None,
    }
}
