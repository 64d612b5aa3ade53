//! UniFFI export layer: type-safe Swift bindings for the Vietnamese engine.
//!
//! Each public type here maps to a generated Swift class, struct, or enum.

mod session;
mod types;


pub use session::VieSession;
pub use types::{
    VieAppStrategy, VieError, VieKeyEvent, VieKeyResponse, VieKeystrokeDiff, VieReplacement,
    VieStep, VieStrategy, VieTaskKey, VieTypingMethod,
};

use std::path::Path;

use tracing::debug;
use viet_core::strategy::{render, StrategyRegistry};

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Install a settings file. Must run before the first session is created.
#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), VieError> {
    debug!(%path, "loading settings file");
    let content = std::fs::read_to_string(&path).map_err(|e| VieError::Io {
        msg: format!("{path}: {e}"),
    })?;
    viet_core::settings::init_custom(content)
        .map_err(|e| VieError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    viet_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) -> Result<(), VieError> {
    crate::trace_init::init_tracing(Path::new(&log_dir)).map_err(|e| VieError::Io {
        msg: format!("{log_dir}: {e}"),
    })
}

#[uniffi::export]
fn keystroke_diff(previous: String, next: String) -> VieKeystrokeDiff {
    viet_core::diff::keystroke_diff(&previous, &next).into()
}

#[uniffi::export]
fn strategy_for_app(app_id: String) -> VieAppStrategy {
    let registry = StrategyRegistry::global();
    VieAppStrategy {
        strategy: registry.strategy_for(&app_id).into(),
        label: registry.label_for(&app_id).to_string(),
    }
}

/// Event plan for a replacement using the configured step timing.
#[uniffi::export]
fn render_replacement(replacement: VieReplacement) -> Vec<VieStep> {
    let timing = viet_core::settings::settings().strategy.timing();
    render(
        replacement.backspaces as usize,
        &replacement.text,
        replacement.strategy.into(),
        timing,
    )
    .into_iter()
    .map(Into::into)
    .collect()
}
