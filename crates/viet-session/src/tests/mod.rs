mod basic;
mod signals;

use viet_core::method::MethodKind;
use viet_core::strategy::{AppStrategy, Strategy, StrategyRegistry, Timing};

use super::{InputProcessor, KeyEvent, KeyResponse, ProcessorConfig};

pub(super) const EDITOR: &str = "com.example.editor";
pub(super) const ELECTRON: &str = "com.example.electron";
pub(super) const BROWSER: &str = "com.example.browser";

pub(super) fn make_test_registry() -> StrategyRegistry {
    let entry = |prefix: &str, strategy, label: &str| AppStrategy {
        prefix: prefix.to_string(),
        strategy,
        label: label.to_string(),
    };
    StrategyRegistry::new(vec![
        entry(ELECTRON, Strategy::StepByStep, "Electron"),
        entry(
            BROWSER,
            Strategy::Hybrid {
                backspace_delay_us: 800,
            },
            "Browser",
        ),
    ])
}

pub(super) fn make_test_config(method: MethodKind) -> ProcessorConfig {
    ProcessorConfig {
        method,
        allow_foreign_consonants: true,
        auto_switch: true,
        failure_threshold: 3,
        autocomplete_fix_apps: vec![BROWSER.to_string()],
        registry: make_test_registry(),
        timing: Timing::default(),
    }
}

/// Processor with a fixed configuration, focused on a batch-strategy app.
pub(super) fn make_processor(method: MethodKind) -> InputProcessor {
    let mut processor = InputProcessor::new(make_test_config(method));
    processor.focus_changed(EDITOR);
    processor
}

pub(super) fn type_string(processor: &mut InputProcessor, s: &str) -> Vec<KeyResponse> {
    s.chars()
        .map(|ch| processor.handle_key(KeyEvent::text(ch)))
        .collect()
}
