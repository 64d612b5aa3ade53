use viet_core::method::MethodKind;
use viet_core::strategy::Strategy;

use super::*;
use crate::TaskKey;

// --- Reset signals ---

#[test]
fn test_focus_change_drops_word() {
    let mut processor = make_processor(MethodKind::Telex);
    type_string(&mut processor, "as");
    processor.focus_changed(ELECTRON);
    assert!(!processor.is_composing());
    assert_eq!(processor.active_app(), ELECTRON);
    // nothing to resume across apps
    let resp = processor.handle_key(KeyEvent::Task(TaskKey::Delete));
    assert!(!resp.consumed);
    assert_eq!(processor.composed_text(), "");
}

#[test]
fn test_paste_and_click_drop_word() {
    let mut processor = make_processor(MethodKind::Telex);
    type_string(&mut processor, "as");
    processor.paste_detected();
    assert!(!processor.is_composing());

    type_string(&mut processor, "as");
    processor.pointer_clicked();
    assert!(!processor.is_composing());
    assert!(!processor.buffer.has_previous_word());
}

// --- Enable / secure input ---

#[test]
fn test_secure_input_passes_everything() {
    let mut processor = make_processor(MethodKind::Telex);
    processor.set_secure_input(true);
    for resp in type_string(&mut processor, "as") {
        assert!(!resp.consumed);
    }
    assert!(!processor.is_composing());

    processor.set_secure_input(false);
    type_string(&mut processor, "a");
    assert!(processor.handle_key(KeyEvent::text('s')).consumed);
}

#[test]
fn test_globally_disabled() {
    let mut processor = make_processor(MethodKind::Telex);
    processor.set_enabled(false);
    for resp in type_string(&mut processor, "as") {
        assert!(!resp.consumed);
    }
    processor.set_enabled(true);
    type_string(&mut processor, "a");
    assert!(processor.handle_key(KeyEvent::text('s')).consumed);
}

#[test]
fn test_disabled_app() {
    let mut processor = make_processor(MethodKind::Telex);
    processor.set_app_enabled(BROWSER, false);
    processor.focus_changed(BROWSER);
    for resp in type_string(&mut processor, "as") {
        assert!(!resp.consumed);
    }

    processor.focus_changed(EDITOR);
    type_string(&mut processor, "a");
    assert!(processor.handle_key(KeyEvent::text('s')).consumed);

    processor.set_app_enabled(BROWSER, true);
    processor.focus_changed(BROWSER);
    type_string(&mut processor, "a");
    assert!(processor.handle_key(KeyEvent::text('s')).consumed);
}

// --- Preferences ---

#[test]
fn test_switch_typing_method() {
    let mut processor = make_processor(MethodKind::Telex);
    processor.set_typing_method(MethodKind::Vni);
    assert_eq!(processor.method(), MethodKind::Vni);
    type_string(&mut processor, "a1");
    assert_eq!(processor.composed_text(), "á");
}

#[test]
fn test_foreign_consonants() {
    let mut processor = make_processor(MethodKind::Telex);
    type_string(&mut processor, "zas");
    assert_eq!(processor.composed_text(), "zá");

    processor.handle_key(KeyEvent::Task(TaskKey::Space));
    processor.set_allow_foreign_consonants(false);
    type_string(&mut processor, "zas");
    assert_eq!(processor.composed_text(), "zas");
}

// --- Failure-driven strategy switch ---

#[test]
fn test_repeated_replacement_escalates_strategy() {
    let mut processor = make_processor(MethodKind::Telex);
    assert_eq!(processor.current_strategy(), Strategy::Batch);
    // each "s" rewrites "a" into "á"
    type_string(&mut processor, "as as ");
    assert_eq!(processor.current_strategy(), Strategy::Batch);
    let resp = type_string(&mut processor, "as").pop().unwrap();
    assert_eq!(processor.current_strategy(), Strategy::StepByStep);
    assert_eq!(resp.replacement.unwrap().strategy, Strategy::StepByStep);
    assert_eq!(processor.app_context(EDITOR).unwrap().tracker.count(), 0);
}

#[test]
fn test_pass_through_keys_do_not_escalate() {
    let mut processor = make_processor(MethodKind::Telex);
    processor.focus_changed(BROWSER);
    for resp in type_string(&mut processor, "www") {
        assert!(!resp.consumed);
    }
    assert_eq!(
        processor.current_strategy(),
        Strategy::Hybrid {
            backspace_delay_us: 800
        }
    );
    assert_eq!(processor.app_context(BROWSER).unwrap().tracker.count(), 0);
}

#[test]
fn test_escalation_persists_per_app() {
    let mut processor = make_processor(MethodKind::Telex);
    type_string(&mut processor, "as as as");
    processor.focus_changed(BROWSER);
    assert_eq!(
        processor.current_strategy(),
        Strategy::Hybrid {
            backspace_delay_us: 800
        }
    );
    processor.focus_changed(EDITOR);
    assert_eq!(processor.current_strategy(), Strategy::StepByStep);
}

#[test]
fn test_focus_resets_failure_count() {
    let mut processor = make_processor(MethodKind::Telex);
    type_string(&mut processor, "as as");
    processor.focus_changed(EDITOR);
    type_string(&mut processor, "as");
    assert_eq!(processor.current_strategy(), Strategy::Batch);
    assert_eq!(processor.app_context(EDITOR).unwrap().tracker.count(), 1);
}

#[test]
fn test_auto_switch_disabled() {
    let mut processor = make_processor(MethodKind::Telex);
    processor.set_auto_switch(false);
    type_string(&mut processor, "as as as as");
    assert_eq!(processor.current_strategy(), Strategy::Batch);
    assert_eq!(processor.app_context(EDITOR).unwrap().tracker.count(), 4);
}

// --- Autocomplete fix ---

#[test]
fn test_autocomplete_fix_adds_backspace() {
    let mut processor = make_processor(MethodKind::Telex);
    processor.focus_changed(BROWSER);
    type_string(&mut processor, "a");
    let resp = processor.handle_key(KeyEvent::Text {
        ch: 's',
        has_selection: true,
    });
    let rep = resp.replacement.unwrap();
    assert_eq!(rep.backspaces, 2);
    assert_eq!(rep.text, "á");
}

#[test]
fn test_autocomplete_fix_only_for_listed_apps() {
    let mut processor = make_processor(MethodKind::Telex);
    type_string(&mut processor, "a");
    let resp = processor.handle_key(KeyEvent::Text {
        ch: 's',
        has_selection: true,
    });
    assert_eq!(resp.replacement.unwrap().backspaces, 1);
}

#[test]
fn test_autocomplete_fix_needs_selection() {
    let mut processor = make_processor(MethodKind::Telex);
    processor.focus_changed(BROWSER);
    type_string(&mut processor, "a");
    let resp = processor.handle_key(KeyEvent::text('s'));
    assert_eq!(resp.replacement.unwrap().backspaces, 1);
}
