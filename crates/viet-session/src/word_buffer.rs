use tracing::debug;

use viet_core::diff::{keystroke_diff, KeystrokeDiff};
use viet_core::lexicon::ConsonantSet;
use viet_core::method::TypingMethod;
use viet_core::state::SyllableState;

/// Whether keystrokes are still being composed into Vietnamese.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Composing,
    /// The word cannot be Vietnamese (or a cancel pattern was typed); keys
    /// are echoed verbatim until the word ends.
    Recovering,
}

/// Everything needed to put a word back exactly as it was.
#[derive(Debug, Clone)]
struct Snapshot {
    state: SyllableState,
    keys: Vec<char>,
    text: String,
    mode: Mode,
}

/// Composition state for the word under the cursor.
///
/// `text` always mirrors what is on screen for this word. A single rollback
/// point is kept while recovering: popping the key that broke the syllable
/// restores the composed word, any other pop just drops a letter.
pub struct WordBuffer {
    consonants: ConsonantSet,
    state: SyllableState,
    /// Every key typed into the word, mark keys included.
    keys: Vec<char>,
    mode: Mode,
    text: String,
    last_text: String,
    rollback: Option<Snapshot>,
    previous_word: Option<Snapshot>,
}

impl WordBuffer {
    pub fn new(consonants: ConsonantSet) -> Self {
        Self {
            consonants,
            state: SyllableState::new(consonants),
            keys: Vec::new(),
            mode: Mode::Composing,
            text: String::new(),
            last_text: String::new(),
            rollback: None,
            previous_word: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text on screen before the latest push or pop.
    pub fn last_text(&self) -> &str {
        &self.last_text
    }

    pub fn keys(&self) -> &[char] {
        &self.keys
    }

    pub fn state(&self) -> &SyllableState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_recovering(&self) -> bool {
        self.mode == Mode::Recovering
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_blank()
    }

    pub fn has_rollback(&self) -> bool {
        self.rollback.is_some()
    }

    pub fn has_previous_word(&self) -> bool {
        self.previous_word.is_some()
    }

    /// Consonant inventory for words started from now on. An empty buffer
    /// switches immediately.
    pub fn set_consonants(&mut self, consonants: ConsonantSet) {
        self.consonants = consonants;
        if self.state.is_blank() {
            self.state = SyllableState::new(consonants);
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
            keys: self.keys.clone(),
            text: self.text.clone(),
            mode: self.mode,
        }
    }

    fn restore(&mut self, snap: Snapshot) {
        self.state = snap.state;
        self.keys = snap.keys;
        self.text = snap.text;
        self.mode = snap.mode;
    }

    /// Start a fresh word. With `store_previous`, a non-empty outgoing word
    /// is kept so a backspace across the boundary can resume it.
    pub fn new_word(&mut self, store_previous: bool) {
        self.previous_word = None;
        if !self.state.is_blank() && store_previous {
            self.previous_word = Some(self.snapshot());
        }
        self.state = SyllableState::new(self.consonants);
        self.keys.clear();
        self.mode = Mode::Composing;
        self.text.clear();
        self.last_text.clear();
        self.rollback = None;
    }

    /// Feed one key. Returns the edit from the previous screen text.
    pub fn push(&mut self, key: char, method: &dyn TypingMethod) -> KeystrokeDiff {
        let before = self.snapshot();
        self.keys.push(key);
        self.last_text = self.text.clone();

        if self.mode == Mode::Recovering {
            self.text.push(key);
            self.state = self.state.push(key);
            return keystroke_diff(&self.last_text, &self.text);
        }

        self.state = method.push(key, &self.state).0;

        if self.state.needs_recovery() {
            debug!(keys = ?self.keys, "entering recovery");
            self.mode = Mode::Recovering;
            self.text = self.keys.iter().collect();
            self.rollback = Some(before);
        } else {
            self.text = self.state.transformed();
            self.rollback = None;
        }

        if method.should_stop_processing(&self.keys) {
            debug!(keys = ?self.keys, "cancel pattern, composing stopped");
            self.mode = Mode::Recovering;
            if self.text.chars().count() == self.last_text.chars().count() {
                self.text.push(key);
                self.state = self.state.push(key);
            }
        }

        keystroke_diff(&self.last_text, &self.text)
    }

    /// Handle a backspace. A plain one-character deletion comes back as a
    /// no-op so the OS can perform it itself.
    pub fn pop(&mut self, method: &dyn TypingMethod) -> KeystrokeDiff {
        self.last_text = self.text.clone();

        if self.mode == Mode::Recovering {
            if let Some(snap) = self.rollback.take() {
                if self.keys.len() == snap.keys.len() + 1 {
                    debug!(keys = ?snap.keys, "rolled back out of recovery");
                    self.restore(snap);
                    return self.screen_edit();
                }
            }
        }

        if self.state.is_blank() {
            if let Some(prev) = self.previous_word.take() {
                debug!(text = %prev.text, "resumed previous word");
                self.restore(prev);
                self.last_text = self.text.clone();
                self.rollback = None;
                return KeystrokeDiff::default();
            }
        }

        let was_recovering = self.mode == Mode::Recovering;
        self.state = method.pop(&self.state);
        self.rollback = None;
        if self.state.needs_recovery() {
            // still literal: drop exactly the last key shown
            if was_recovering {
                self.keys.pop();
            } else {
                self.keys = self.state.raw().to_vec();
            }
            self.mode = Mode::Recovering;
            self.text = self.keys.iter().collect();
        } else {
            self.keys = self.state.raw().to_vec();
            self.mode = Mode::Composing;
            self.text = self.state.transformed();
        }
        self.screen_edit()
    }

    fn screen_edit(&self) -> KeystrokeDiff {
        let diff = keystroke_diff(&self.last_text, &self.text);
        if diff.is_plain_backspace() {
            KeystrokeDiff::default()
        } else {
            diff
        }
    }
}
