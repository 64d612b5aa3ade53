//! Stateful keystroke processor driving Vietnamese composition.
//!
//! `InputProcessor` owns the word under composition and the per-application
//! contexts. Each key event yields a `KeyResponse` telling the keyboard hook
//! whether to swallow the key and which replacement to inject.

mod app_context;
mod key_handlers;
mod types;
mod word_buffer;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use tracing::debug;

use viet_core::lexicon::ConsonantSet;
use viet_core::method::MethodKind;
use viet_core::settings::{settings, Settings};
use viet_core::strategy::{Step, Strategy, StrategyRegistry, Timing};

pub use app_context::AppContext;
pub use types::{KeyEvent, KeyResponse, Replacement, TaskKey};
pub use word_buffer::{Mode, WordBuffer};

/// Construction parameters, normally taken from the global settings.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub method: MethodKind,
    pub allow_foreign_consonants: bool,
    pub auto_switch: bool,
    pub failure_threshold: u32,
    pub autocomplete_fix_apps: Vec<String>,
    pub registry: StrategyRegistry,
    pub timing: Timing,
}

impl ProcessorConfig {
    pub fn from_settings(s: &Settings) -> Self {
        Self {
            method: s.input.typing_method,
            allow_foreign_consonants: s.input.allow_foreign_consonants,
            auto_switch: s.strategy.auto_switch,
            failure_threshold: s.strategy.failure_threshold,
            autocomplete_fix_apps: s.strategy.autocomplete_fix_apps.clone(),
            registry: StrategyRegistry::new(s.strategy.app_strategies().to_vec()),
            timing: s.strategy.timing(),
        }
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::from_settings(settings())
    }
}

pub struct InputProcessor {
    method: MethodKind,
    consonants: ConsonantSet,
    buffer: WordBuffer,

    enabled: bool,
    secure_input: bool,
    auto_switch: bool,
    failure_threshold: u32,
    autocomplete_fix_apps: Vec<String>,

    registry: StrategyRegistry,
    timing: Timing,

    active_app: String,
    apps: HashMap<String, AppContext>,
}

impl InputProcessor {
    pub fn new(config: ProcessorConfig) -> Self {
        let consonants = ConsonantSet::from_allow_foreign(config.allow_foreign_consonants);
        Self {
            method: config.method,
            consonants,
            buffer: WordBuffer::new(consonants),
            enabled: true,
            secure_input: false,
            auto_switch: config.auto_switch,
            failure_threshold: config.failure_threshold,
            autocomplete_fix_apps: config.autocomplete_fix_apps,
            registry: config.registry,
            timing: config.timing,
            active_app: String::new(),
            apps: HashMap::new(),
        }
    }

    /// Processor configured from the global settings.
    pub fn from_settings() -> Self {
        Self::new(ProcessorConfig::default())
    }

    // --- signals from the keyboard hook ---

    /// A different application took focus. The word is dropped and the
    /// new app's failure counter starts over.
    pub fn focus_changed(&mut self, app_id: &str) {
        self.buffer.new_word(false);
        self.active_app = app_id.to_string();
        let ctx = self.context_mut();
        ctx.tracker.reset();
        let strategy = ctx.strategy;
        debug!(app_id, ?strategy, "focus changed");
    }

    pub fn paste_detected(&mut self) {
        self.buffer.new_word(false);
    }

    pub fn pointer_clicked(&mut self) {
        self.buffer.new_word(false);
    }

    /// While secure input is on, every key passes through untouched.
    pub fn set_secure_input(&mut self, active: bool) {
        if active {
            self.buffer.new_word(false);
        }
        self.secure_input = active;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.buffer.new_word(false);
        self.enabled = enabled;
    }

    pub fn set_app_enabled(&mut self, app_id: &str, enabled: bool) {
        if app_id == self.active_app {
            self.buffer.new_word(false);
        }
        let strategy = self.registry.strategy_for(app_id);
        let threshold = self.failure_threshold;
        self.apps
            .entry(app_id.to_string())
            .or_insert_with(|| AppContext::new(strategy, threshold))
            .enabled = enabled;
    }

    pub fn set_typing_method(&mut self, method: MethodKind) {
        self.buffer.new_word(false);
        self.method = method;
    }

    pub fn set_allow_foreign_consonants(&mut self, allow: bool) {
        self.consonants = ConsonantSet::from_allow_foreign(allow);
        self.buffer.set_consonants(self.consonants);
    }

    pub fn set_auto_switch(&mut self, enabled: bool) {
        self.auto_switch = enabled;
    }

    // --- queries ---

    pub fn composed_text(&self) -> &str {
        self.buffer.text()
    }

    pub fn is_composing(&self) -> bool {
        !self.buffer.is_empty()
    }

    pub fn method(&self) -> MethodKind {
        self.method
    }

    pub fn active_app(&self) -> &str {
        &self.active_app
    }

    pub fn app_context(&self, app_id: &str) -> Option<&AppContext> {
        self.apps.get(app_id)
    }

    /// Strategy replacements are currently delivered with.
    pub fn current_strategy(&self) -> Strategy {
        self.apps
            .get(&self.active_app)
            .map(|ctx| ctx.strategy)
            .unwrap_or_else(|| self.registry.strategy_for(&self.active_app))
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Event plan for delivering `replacement`.
    pub fn render(&self, replacement: &Replacement) -> Vec<Step> {
        replacement.steps(self.timing)
    }

    fn app_enabled(&self) -> bool {
        self.apps
            .get(&self.active_app)
            .map_or(true, |ctx| ctx.enabled)
    }

    fn needs_autocomplete_fix(&self) -> bool {
        self.autocomplete_fix_apps
            .iter()
            .any(|prefix| self.active_app.starts_with(prefix.as_str()))
    }

    fn context_mut(&mut self) -> &mut AppContext {
        let strategy = self.registry.strategy_for(&self.active_app);
        let threshold = self.failure_threshold;
        self.apps
            .entry(self.active_app.clone())
            .or_insert_with(|| AppContext::new(strategy, threshold))
    }
}
