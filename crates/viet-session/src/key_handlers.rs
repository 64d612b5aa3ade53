use tracing::{debug_span, info, trace};

use viet_core::diff::KeystrokeDiff;

use super::types::{is_word_boundary, KeyEvent, KeyResponse, TaskKey};
use super::InputProcessor;

impl InputProcessor {
    /// Process a key event. Returns a KeyResponse describing what the caller should do.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        if self.secure_input || !self.enabled || !self.app_enabled() {
            return KeyResponse::not_consumed();
        }

        match event {
            // Shortcuts act on the application, not on the word
            KeyEvent::Modified => {
                self.buffer.new_word(false);
                KeyResponse::not_consumed()
            }

            KeyEvent::Task(key) if key.closes_word() => {
                self.buffer.new_word(true);
                KeyResponse::not_consumed()
            }

            KeyEvent::Task(TaskKey::Delete) => self.handle_delete(),

            KeyEvent::Task(key) if key.moves_cursor() => {
                self.buffer.new_word(false);
                KeyResponse::not_consumed()
            }

            // Escape, F-keys
            KeyEvent::Task(_) => KeyResponse::not_consumed(),

            KeyEvent::Text { ch, .. } if is_word_boundary(ch) || ch.is_whitespace() => {
                self.buffer.new_word(true);
                KeyResponse::not_consumed()
            }

            KeyEvent::Text { ch, has_selection } => self.handle_text(ch, has_selection),
        }
    }

    fn handle_delete(&mut self) -> KeyResponse {
        let diff = self.buffer.pop(self.method.method());
        if diff.is_noop() {
            return KeyResponse::not_consumed();
        }
        self.respond(diff)
    }

    fn handle_text(&mut self, ch: char, has_selection: bool) -> KeyResponse {
        let mut diff = self.buffer.push(ch, self.method.method());
        trace!(text = self.buffer.text(), ?diff, "composed");

        if diff.is_plain_insert(ch) {
            return KeyResponse::not_consumed();
        }
        if diff.is_noop() {
            return KeyResponse::consumed();
        }

        // Only keys that send a replacement can have failed in the target app
        let auto_switch = self.auto_switch;
        let ctx = self.context_mut();
        if ctx.record_replacement(ch, auto_switch) {
            let strategy = ctx.strategy;
            info!(app = %self.active_app, ?strategy, "repeated replacement, switched strategy");
        }

        if has_selection && self.needs_autocomplete_fix() {
            diff.backspaces += 1;
        }
        self.respond(diff)
    }

    fn respond(&self, diff: KeystrokeDiff) -> KeyResponse {
        KeyResponse::replace(diff.backspaces, diff.insert, self.current_strategy())
    }
}
