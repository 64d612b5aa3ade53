//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! These are startup defaults. Preferences the user can flip at runtime
//! (typing method, foreign consonants, auto-switch) are pushed into the
//! session through its setters.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::method::MethodKind;
use crate::strategy::{AppStrategy, Strategy, Timing};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Upper bound for any configured delay. Output runs on the keyboard hook
/// thread, so pauses must stay in the low milliseconds.
pub const MAX_DELAY_US: u32 = 10_000;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        tracing::debug!(custom = CUSTOM_TOML.get().is_some(), "loading settings");
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub input: InputSettings,
    pub strategy: StrategySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    pub typing_method: MethodKind,
    pub allow_foreign_consonants: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StrategySettings {
    pub auto_switch: bool,
    pub failure_threshold: u32,
    pub step_delay_us: u32,
    pub step_settle_us: u32,
    #[serde(default)]
    pub autocomplete_fix_apps: Vec<String>,
    #[serde(default)]
    apps: Vec<AppEntry>,
    /// Parsed `apps`, in file order.
    #[serde(skip)]
    app_strategies: Vec<AppStrategy>,
}

impl StrategySettings {
    pub fn app_strategies(&self) -> &[AppStrategy] {
        &self.app_strategies
    }

    pub fn timing(&self) -> Timing {
        Timing {
            step_delay_us: self.step_delay_us,
            settle_us: self.step_settle_us,
        }
    }

    pub fn needs_autocomplete_fix(&self, app_id: &str) -> bool {
        self.autocomplete_fix_apps
            .iter()
            .any(|prefix| app_id.starts_with(prefix.as_str()))
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum StrategyKind {
    Batch,
    StepByStep,
    Hybrid,
}

#[derive(Debug, Clone, Deserialize)]
struct AppEntry {
    prefix: String,
    label: String,
    kind: StrategyKind,
    #[serde(default)]
    backspace_delay_us: Option<u32>,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.strategy.app_strategies = parse_apps(&s.strategy.apps)?;
    Ok(s)
}

fn parse_apps(raw: &[AppEntry]) -> Result<Vec<AppStrategy>, SettingsError> {
    raw.iter()
        .enumerate()
        .map(|(i, entry)| {
            let field = |name: &str| format!("strategy.apps[{i}].{name}");
            if entry.prefix.is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: field("prefix"),
                    reason: "must not be empty".to_string(),
                });
            }
            let strategy = match (entry.kind, entry.backspace_delay_us) {
                (StrategyKind::Hybrid, Some(delay)) if delay <= MAX_DELAY_US => {
                    Strategy::Hybrid {
                        backspace_delay_us: delay,
                    }
                }
                (StrategyKind::Hybrid, Some(_)) => {
                    return Err(SettingsError::InvalidValue {
                        field: field("backspace_delay_us"),
                        reason: format!("must be at most {MAX_DELAY_US}"),
                    })
                }
                (StrategyKind::Hybrid, None) => {
                    return Err(SettingsError::InvalidValue {
                        field: field("backspace_delay_us"),
                        reason: "required for hybrid".to_string(),
                    })
                }
                (_, Some(_)) => {
                    return Err(SettingsError::InvalidValue {
                        field: field("backspace_delay_us"),
                        reason: "only valid for hybrid".to_string(),
                    })
                }
                (StrategyKind::Batch, None) => Strategy::Batch,
                (StrategyKind::StepByStep, None) => Strategy::StepByStep,
            };
            Ok(AppStrategy {
                prefix: entry.prefix.clone(),
                strategy,
                label: entry.label.clone(),
            })
        })
        .collect()
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_delay {
        ($section:ident . $field:ident) => {
            if s.$section.$field > MAX_DELAY_US {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: format!("must be at most {MAX_DELAY_US}"),
                });
            }
        };
    }

    if s.strategy.failure_threshold == 0 {
        return Err(SettingsError::InvalidValue {
            field: "strategy.failure_threshold".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    check_delay!(strategy.step_delay_us);
    check_delay!(strategy.step_settle_us);

    Ok(())
}
