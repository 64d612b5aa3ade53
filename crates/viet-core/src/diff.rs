/// Minimal edit turning `previous` into `next`: how many characters to
/// delete from the end, and what to type afterwards.
///
/// Accent changes only ever rewrite a suffix of the syllable, so the common
/// prefix is the longest span that can be left on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeystrokeDiff {
    pub backspaces: usize,
    pub insert: String,
}

impl KeystrokeDiff {
    pub fn is_noop(&self) -> bool {
        self.backspaces == 0 && self.insert.is_empty()
    }

    /// A single deletion with nothing to retype, which the OS can perform
    /// itself.
    pub fn is_plain_backspace(&self) -> bool {
        self.backspaces == 1 && self.insert.is_empty()
    }

    /// Exactly `ch` appended, nothing deleted.
    pub fn is_plain_insert(&self, ch: char) -> bool {
        let mut chars = self.insert.chars();
        self.backspaces == 0 && chars.next() == Some(ch) && chars.next().is_none()
    }
}

pub fn keystroke_diff(previous: &str, next: &str) -> KeystrokeDiff {
    let common = previous
        .chars()
        .zip(next.chars())
        .take_while(|(a, b)| a == b)
        .count();
    KeystrokeDiff {
        backspaces: previous.chars().count() - common,
        insert: next.chars().skip(common).collect(),
    }
}
