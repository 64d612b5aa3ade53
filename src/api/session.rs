use std::sync::{Arc, Mutex};

use tracing::debug;

use viet_session::{InputProcessor, ProcessorConfig, Replacement};

use super::types::{VieKeyEvent, VieKeyResponse, VieStep, VieStrategy, VieTypingMethod};
use super::VieReplacement;

/// One keyboard-hook session. All calls arrive on the hook thread; the
/// mutex only satisfies the FFI object's Sync bound.
#[derive(uniffi::Object)]
pub struct VieSession {
    processor: Mutex<InputProcessor>,
}

impl VieSession {
    fn with<R>(&self, f: impl FnOnce(&mut InputProcessor) -> R) -> R {
        let mut processor = self
            .processor
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut processor)
    }
}

#[uniffi::export]
impl VieSession {
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        let config = ProcessorConfig::default();
        debug!(method = ?config.method, threshold = config.failure_threshold, "session created");
        Arc::new(Self {
            processor: Mutex::new(InputProcessor::new(config)),
        })
    }

    pub fn handle_key(&self, event: VieKeyEvent) -> VieKeyResponse {
        let Some(event) = event.into_event() else {
            return VieKeyResponse {
                consumed: false,
                replacement: None,
            };
        };
        self.with(|p| p.handle_key(event)).into()
    }

    pub fn focus_changed(&self, app_id: String) {
        self.with(|p| p.focus_changed(&app_id));
    }

    pub fn paste_detected(&self) {
        self.with(|p| p.paste_detected());
    }

    pub fn pointer_clicked(&self) {
        self.with(|p| p.pointer_clicked());
    }

    pub fn set_secure_input(&self, active: bool) {
        self.with(|p| p.set_secure_input(active));
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.with(|p| p.set_enabled(enabled));
    }

    pub fn set_app_enabled(&self, app_id: String, enabled: bool) {
        self.with(|p| p.set_app_enabled(&app_id, enabled));
    }

    pub fn set_typing_method(&self, method: VieTypingMethod) {
        self.with(|p| p.set_typing_method(method.into()));
    }

    pub fn set_allow_foreign_consonants(&self, allow: bool) {
        self.with(|p| p.set_allow_foreign_consonants(allow));
    }

    pub fn set_auto_switch(&self, enabled: bool) {
        self.with(|p| p.set_auto_switch(enabled));
    }

    pub fn composed_text(&self) -> String {
        self.with(|p| p.composed_text().to_string())
    }

    pub fn current_strategy(&self) -> VieStrategy {
        self.with(|p| p.current_strategy()).into()
    }

    /// Event plan for a replacement, paced with this session's timing.
    pub fn render(&self, replacement: VieReplacement) -> Vec<VieStep> {
        let replacement: Replacement = replacement.into();
        self.with(|p| p.render(&replacement))
            .into_iter()
            .map(Into::into)
            .collect()
    }
}
