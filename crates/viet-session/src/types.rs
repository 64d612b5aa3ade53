use viet_core::strategy::{render, Step, Strategy, Timing};

/// Non-text keys the keyboard hook classifies upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKey {
    Enter,
    Tab,
    Space,
    Delete,
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    /// F1..F12
    Function(u8),
}

impl TaskKey {
    /// Keys that end the word and remember it for backspacing into.
    pub(crate) fn closes_word(self) -> bool {
        matches!(self, TaskKey::Enter | TaskKey::Space | TaskKey::Tab)
    }

    /// Cursor movement: the word under composition is abandoned.
    pub(crate) fn moves_cursor(self) -> bool {
        matches!(
            self,
            TaskKey::Home
                | TaskKey::End
                | TaskKey::ArrowLeft
                | TaskKey::ArrowRight
                | TaskKey::ArrowUp
                | TaskKey::ArrowDown
        )
    }
}

/// A key event after layout resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// A printable character, already shift/caps-resolved.
    Text {
        ch: char,
        /// The focused field currently shows selected text (inline
        /// autocomplete in browsers and spreadsheets).
        has_selection: bool,
    },
    Task(TaskKey),
    /// Any key pressed with Cmd, Ctrl or Alt.
    Modified,
}

impl KeyEvent {
    pub fn text(ch: char) -> Self {
        KeyEvent::Text {
            ch,
            has_selection: false,
        }
    }
}

/// Characters that end a word and pass through untouched.
pub(crate) const WORD_BOUNDARY_CHARS: &str = r#"`!@#$%^&*()-=[]\;',./~_+{}|:"<>?"#;

pub(crate) fn is_word_boundary(ch: char) -> bool {
    WORD_BOUNDARY_CHARS.contains(ch)
}

/// Edit for the text-injection side: delete `backspaces` characters, then
/// type `text`, delivered with `strategy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub backspaces: usize,
    pub text: String,
    pub strategy: Strategy,
}

impl Replacement {
    pub fn steps(&self, timing: Timing) -> Vec<Step> {
        render(self.backspaces, &self.text, self.strategy, timing)
    }
}

/// Response from handle_key, returned to the caller (Swift via FFI).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    /// The original key event must be swallowed.
    pub consumed: bool,
    pub replacement: Option<Replacement>,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            replacement: None,
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            replacement: None,
        }
    }

    pub(crate) fn replace(backspaces: usize, text: String, strategy: Strategy) -> Self {
        Self {
            consumed: true,
            replacement: Some(Replacement {
                backspaces,
                text,
                strategy,
            }),
        }
    }
}
