use viet_core::method::MethodKind;
use viet_core::strategy::{Step, Strategy};
use viet_session::{KeyEvent, KeyResponse, Replacement, TaskKey};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum VieError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct VieReplacement {
    pub backspaces: u32,
    pub text: String,
    pub strategy: VieStrategy,
}

#[derive(Debug, uniffi::Record)]
pub struct VieKeyResponse {
    pub consumed: bool,
    pub replacement: Option<VieReplacement>,
}

#[derive(Debug, uniffi::Record)]
pub struct VieKeystrokeDiff {
    pub backspaces: u32,
    pub insert: String,
}

#[derive(Debug, uniffi::Record)]
pub struct VieAppStrategy {
    pub strategy: VieStrategy,
    pub label: String,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, uniffi::Enum)]
pub enum VieTaskKey {
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
    Function { number: u8 },
}

#[derive(Clone, Debug, uniffi::Enum)]
pub enum VieKeyEvent {
    /// `text` is the resolved character; only its first char is used.
    Text { text: String, has_selection: bool },
    Task { key: VieTaskKey },
    Modified,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum VieStrategy {
    Batch,
    StepByStep,
    Hybrid { backspace_delay_us: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum VieTypingMethod {
    Telex,
    Vni,
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum VieStep {
    Backspace,
    Insert { text: String },
    Pause { us: u32 },
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

impl From<VieTaskKey> for TaskKey {
    fn from(key: VieTaskKey) -> Self {
        match key {
            VieTaskKey::Enter => TaskKey::Enter,
            VieTaskKey::Tab => TaskKey::Tab,
            VieTaskKey::Space => TaskKey::Space,
            VieTaskKey::Delete => TaskKey::Delete,
            VieTaskKey::Escape => TaskKey::Escape,
            VieTaskKey::ArrowLeft => TaskKey::ArrowLeft,
            VieTaskKey::ArrowRight => TaskKey::ArrowRight,
            VieTaskKey::ArrowUp => TaskKey::ArrowUp,
            VieTaskKey::ArrowDown => TaskKey::ArrowDown,
            VieTaskKey::Home => TaskKey::Home,
            VieTaskKey::End => TaskKey::End,
            VieTaskKey::Function { number } => TaskKey::Function(number),
        }
    }
}

impl VieKeyEvent {
    /// Layout-resolved event, or None for an empty text payload.
    pub(super) fn into_event(self) -> Option<KeyEvent> {
        match self {
            VieKeyEvent::Text {
                text,
                has_selection,
            } => text
                .chars()
                .next()
                .map(|ch| KeyEvent::Text { ch, has_selection }),
            VieKeyEvent::Task { key } => Some(KeyEvent::Task(key.into())),
            VieKeyEvent::Modified => Some(KeyEvent::Modified),
        }
    }
}

impl From<Strategy> for VieStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Batch => VieStrategy::Batch,
            Strategy::StepByStep => VieStrategy::StepByStep,
            Strategy::Hybrid { backspace_delay_us } => VieStrategy::Hybrid { backspace_delay_us },
        }
    }
}

impl From<VieStrategy> for Strategy {
    fn from(s: VieStrategy) -> Self {
        match s {
            VieStrategy::Batch => Strategy::Batch,
            VieStrategy::StepByStep => Strategy::StepByStep,
            VieStrategy::Hybrid { backspace_delay_us } => Strategy::Hybrid { backspace_delay_us },
        }
    }
}

impl From<VieTypingMethod> for MethodKind {
    fn from(m: VieTypingMethod) -> Self {
        match m {
            VieTypingMethod::Telex => MethodKind::Telex,
            VieTypingMethod::Vni => MethodKind::Vni,
        }
    }
}

impl From<Step> for VieStep {
    fn from(step: Step) -> Self {
        match step {
            Step::Backspace => VieStep::Backspace,
            Step::Insert(text) => VieStep::Insert { text },
            Step::Pause { us } => VieStep::Pause { us },
        }
    }
}

fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl From<Replacement> for VieReplacement {
    fn from(r: Replacement) -> Self {
        Self {
            backspaces: count_u32(r.backspaces),
            text: r.text,
            strategy: r.strategy.into(),
        }
    }
}

impl From<VieReplacement> for Replacement {
    fn from(r: VieReplacement) -> Self {
        Self {
            backspaces: r.backspaces as usize,
            text: r.text,
            strategy: r.strategy.into(),
        }
    }
}

impl From<KeyResponse> for VieKeyResponse {
    fn from(resp: KeyResponse) -> Self {
        Self {
            consumed: resp.consumed,
            replacement: resp.replacement.map(Into::into),
        }
    }
}

impl From<viet_core::diff::KeystrokeDiff> for VieKeystrokeDiff {
    fn from(d: viet_core::diff::KeystrokeDiff) -> Self {
        Self {
            backspaces: count_u32(d.backspaces),
            insert: d.insert,
        }
    }
}
