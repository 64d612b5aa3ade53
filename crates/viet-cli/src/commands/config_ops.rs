use std::fs;
use std::process;

use viet_core::settings::{parse_settings_toml, Settings};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", viet_core::settings::default_toml());
}

/// Read and parse a settings file without installing it.
pub fn load_settings(file: &str) -> Result<Settings, String> {
    let content = fs::read_to_string(file).map_err(|e| format!("reading {file}: {e}"))?;
    parse_settings_toml(&content).map_err(|e| e.to_string())
}

pub fn settings_validate(file: &str) {
    let s = die!(load_settings(file), "Error: {}");
    println!(
        "OK: input.typing_method={}, strategy.failure_threshold={}, strategy.apps={}",
        s.input.typing_method,
        s.strategy.failure_threshold,
        s.strategy.app_strategies().len()
    );
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_default_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(viet_core::settings::default_toml().as_bytes())
            .unwrap();
        let s = load_settings(file.path().to_str().unwrap()).unwrap();
        assert!(s.strategy.auto_switch);
        assert!(!s.strategy.app_strategies().is_empty());
    }

    #[test]
    fn test_load_invalid_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[input]\ntyping_method = \"viqr\"\n").unwrap();
        assert!(load_settings(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_settings("/nonexistent/viet-settings.toml").unwrap_err();
        assert!(err.contains("/nonexistent/viet-settings.toml"));
    }
}
