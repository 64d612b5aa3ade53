use serde::Serialize;

use viet_core::diff::keystroke_diff;
use viet_core::lexicon::ConsonantSet;
use viet_core::method::MethodKind;
use viet_core::strategy::{Strategy, StrategyRegistry};
use viet_session::{Mode, WordBuffer};

/// One word typed through a fresh buffer.
#[derive(Debug, Serialize)]
pub struct ComposedWord {
    pub keys: String,
    pub text: String,
    pub recovered: bool,
}

pub fn compose_words(text: &str, method: MethodKind) -> Vec<ComposedWord> {
    let typing = method.method();
    text.split_whitespace()
        .map(|word| {
            let mut buf = WordBuffer::new(ConsonantSet::Extended);
            for ch in word.chars() {
                buf.push(ch, typing);
            }
            ComposedWord {
                keys: word.to_string(),
                text: buf.text().to_string(),
                recovered: buf.mode() == Mode::Recovering,
            }
        })
        .collect()
}

pub fn compose(text: &str, method: MethodKind, json: bool) {
    let words = compose_words(text, method);
    if json {
        match serde_json::to_string_pretty(&words) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }
    let line: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
    println!("{}", line.join(" "));
}

pub fn diff(previous: &str, next: &str) {
    let d = keystroke_diff(previous, next);
    println!("backspaces={} insert={:?}", d.backspaces, d.insert);
}

pub fn describe_strategy(strategy: Strategy) -> String {
    match strategy {
        Strategy::Batch => "batch".to_string(),
        Strategy::StepByStep => "step-by-step".to_string(),
        Strategy::Hybrid { backspace_delay_us } => {
            format!("hybrid (backspace delay {backspace_delay_us}us)")
        }
    }
}

pub fn strategy(app_id: &str) {
    let registry = StrategyRegistry::global();
    println!(
        "{}: {}",
        registry.label_for(app_id),
        describe_strategy(registry.strategy_for(app_id))
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str, method: MethodKind) -> Vec<String> {
        compose_words(input, method)
            .into_iter()
            .map(|w| w.text)
            .collect()
    }

    #[test]
    fn test_compose_telex() {
        assert_eq!(
            texts("xin chaof   Vieetj Nam", MethodKind::Telex),
            vec!["xin", "chào", "Việt", "Nam"]
        );
    }

    #[test]
    fn test_compose_vni() {
        assert_eq!(texts("d9uo7c5", MethodKind::Vni), vec!["được"]);
    }

    #[test]
    fn test_compose_marks_recovered() {
        let words = compose_words("bank tooi", MethodKind::Telex);
        assert!(words[0].recovered);
        assert!(!words[1].recovered);
        assert_eq!(words[1].keys, "tooi");
    }

    #[test]
    fn test_compose_json_shape() {
        let words = compose_words("as", MethodKind::Telex);
        let json = serde_json::to_value(&words).unwrap();
        assert_eq!(json[0]["text"], "á");
        assert_eq!(json[0]["recovered"], false);
    }

    #[test]
    fn test_describe_strategy() {
        assert_eq!(describe_strategy(Strategy::Batch), "batch");
        assert_eq!(
            describe_strategy(Strategy::Hybrid {
                backspace_delay_us: 800
            }),
            "hybrid (backspace delay 800us)"
        );
    }
}
