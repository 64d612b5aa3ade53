use viet_core::method::MethodKind;
use viet_core::strategy::{Step, Strategy};

use super::*;
use crate::{Replacement, TaskKey};

// --- Pass-through ---

#[test]
fn test_plain_letters_pass_through() {
    let mut processor = make_processor(MethodKind::Telex);
    for resp in type_string(&mut processor, "xin") {
        assert!(!resp.consumed);
        assert!(resp.replacement.is_none());
    }
    assert_eq!(processor.composed_text(), "xin");
    assert!(processor.is_composing());
}

#[test]
fn test_tone_key_replaces() {
    let mut processor = make_processor(MethodKind::Telex);
    type_string(&mut processor, "a");
    let resp = processor.handle_key(KeyEvent::text('s'));
    assert!(resp.consumed);
    assert_eq!(
        resp.replacement,
        Some(Replacement {
            backspaces: 1,
            text: "á".to_string(),
            strategy: Strategy::Batch,
        })
    );
}

#[test]
fn test_minimal_rewrite() {
    let mut processor = make_processor(MethodKind::Telex);
    type_string(&mut processor, "tooi");
    let resp = processor.handle_key(KeyEvent::text('s'));
    let rep = resp.replacement.unwrap();
    // "tôi" -> "tối" keeps the leading "t"
    assert_eq!(rep.backspaces, 2);
    assert_eq!(rep.text, "ối");
}

#[test]
fn test_vni_digit_marks() {
    let mut processor = make_processor(MethodKind::Vni);
    type_string(&mut processor, "a");
    let resp = processor.handle_key(KeyEvent::text('1'));
    assert!(resp.consumed);
    assert_eq!(processor.composed_text(), "á");
}

// --- Word boundaries ---

#[test]
fn test_space_ends_word() {
    let mut processor = make_processor(MethodKind::Telex);
    type_string(&mut processor, "as");
    let resp = processor.handle_key(KeyEvent::Task(TaskKey::Space));
    assert!(!resp.consumed);
    assert!(!processor.is_composing());
    assert_eq!(processor.composed_text(), "");
}

#[test]
fn test_punctuation_ends_word() {
    for ch in ['.', ',', '!', '?', '"', '\\', ';'] {
        let mut processor = make_processor(MethodKind::Telex);
        type_string(&mut processor, "as");
        let resp = processor.handle_key(KeyEvent::text(ch));
        assert!(!resp.consumed, "{ch:?} must pass through");
        assert!(!processor.is_composing(), "{ch:?} must end the word");
    }
}

#[test]
fn test_punctuation_keeps_word_for_backspace() {
    let mut processor = make_processor(MethodKind::Telex);
    type_string(&mut processor, "chaof.");
    assert!(processor.buffer.has_previous_word());
}

#[test]
fn test_arrow_drops_word() {
    let mut processor = make_processor(MethodKind::Telex);
    type_string(&mut processor, "as");
    let resp = processor.handle_key(KeyEvent::Task(TaskKey::ArrowLeft));
    assert!(!resp.consumed);
    assert!(!processor.is_composing());
    assert!(!processor.buffer.has_previous_word());
}

#[test]
fn test_modifier_drops_word() {
    let mut processor = make_processor(MethodKind::Telex);
    type_string(&mut processor, "as");
    let resp = processor.handle_key(KeyEvent::Modified);
    assert!(!resp.consumed);
    assert!(!processor.is_composing());
    assert!(!processor.buffer.has_previous_word());
}

#[test]
fn test_escape_and_function_keys_leave_word() {
    let mut processor = make_processor(MethodKind::Telex);
    type_string(&mut processor, "as");
    for key in [TaskKey::Escape, TaskKey::Function(5)] {
        let resp = processor.handle_key(KeyEvent::Task(key));
        assert!(!resp.consumed);
        assert_eq!(processor.composed_text(), "á");
    }
}

// --- Backspace ---

#[test]
fn test_backspace_plain_passes_through() {
    let mut processor = make_processor(MethodKind::Telex);
    type_string(&mut processor, "xin");
    let resp = processor.handle_key(KeyEvent::Task(TaskKey::Delete));
    assert!(!resp.consumed);
    assert_eq!(processor.composed_text(), "xi");
}

#[test]
fn test_backspace_reaccents() {
    let mut processor = make_processor(MethodKind::Telex);
    type_string(&mut processor, "dduowcj");
    let resp = processor.handle_key(KeyEvent::Task(TaskKey::Delete));
    assert!(resp.consumed);
    let rep = resp.replacement.unwrap();
    assert_eq!(rep.backspaces, 3);
    assert_eq!(rep.text, "uợ");
}

#[test]
fn test_backspace_on_empty_passes_through() {
    let mut processor = make_processor(MethodKind::Telex);
    let resp = processor.handle_key(KeyEvent::Task(TaskKey::Delete));
    assert!(!resp.consumed);
}

// --- Strategy and rendering ---

#[test]
fn test_replacement_carries_app_strategy() {
    let mut processor = make_processor(MethodKind::Telex);
    processor.focus_changed(ELECTRON);
    type_string(&mut processor, "a");
    let resp = processor.handle_key(KeyEvent::text('s'));
    let rep = resp.replacement.unwrap();
    assert_eq!(rep.strategy, Strategy::StepByStep);
    assert_eq!(processor.current_strategy(), Strategy::StepByStep);
}

#[test]
fn test_render_replacement() {
    let mut processor = make_processor(MethodKind::Telex);
    processor.focus_changed(BROWSER);
    type_string(&mut processor, "a");
    let rep = processor.handle_key(KeyEvent::text('s')).replacement.unwrap();
    assert_eq!(
        processor.render(&rep),
        vec![Step::Backspace, Step::Insert("á".to_string())]
    );
}

#[test]
fn test_unknown_app_defaults_to_batch() {
    let mut processor = make_processor(MethodKind::Telex);
    processor.focus_changed("org.unlisted.app");
    assert_eq!(processor.current_strategy(), Strategy::Batch);
}

#[test]
fn test_default_config_from_settings() {
    let processor = InputProcessor::from_settings();
    assert_eq!(processor.method(), MethodKind::Telex);
    assert_eq!(processor.timing().step_delay_us, 2000);
}
