//! How a replacement is delivered to the focused application.
//!
//! Text fields differ in how they cope with a burst of synthetic events: most
//! native fields take a batch, Electron and terminals drop or reorder events
//! unless they are paced. The registry maps application id prefixes to a
//! [`Strategy`]; [`render`] turns a replacement into the concrete event plan.

use std::sync::OnceLock;

use tracing::debug;

use crate::settings::settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// One backspace burst, one string insert.
    #[default]
    Batch,
    /// One event per character, paced.
    StepByStep,
    /// Paced backspaces, batched insert.
    Hybrid { backspace_delay_us: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppStrategy {
    pub prefix: String,
    pub strategy: Strategy,
    pub label: String,
}

pub const DEFAULT_LABEL: &str = "Unknown App";

/// Ordered prefix table; the first match wins, unmatched apps get
/// [`Strategy::Batch`].
#[derive(Debug, Clone, Default)]
pub struct StrategyRegistry {
    entries: Vec<AppStrategy>,
}

impl StrategyRegistry {
    pub fn new(entries: Vec<AppStrategy>) -> Self {
        Self { entries }
    }

    /// Registry built from the global settings table.
    pub fn global() -> &'static StrategyRegistry {
        static INSTANCE: OnceLock<StrategyRegistry> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let entries = settings().strategy.app_strategies().to_vec();
            debug!(count = entries.len(), "strategy registry built");
            StrategyRegistry::new(entries)
        })
    }

    pub fn lookup(&self, app_id: &str) -> Option<&AppStrategy> {
        self.entries
            .iter()
            .find(|e| app_id.starts_with(e.prefix.as_str()))
    }

    pub fn strategy_for(&self, app_id: &str) -> Strategy {
        self.lookup(app_id).map(|e| e.strategy).unwrap_or_default()
    }

    pub fn label_for(&self, app_id: &str) -> &str {
        self.lookup(app_id)
            .map(|e| e.label.as_str())
            .unwrap_or(DEFAULT_LABEL)
    }
}

/// Guesses that output is being lost when the same key arrives several times
/// in a row: users retype a letter that did not appear.
///
/// This is a heuristic. A user who really means "ooo" trips it too, and lost
/// output on varying keys never does.
#[derive(Debug, Clone)]
pub struct FailureTracker {
    threshold: u32,
    count: u32,
    last: Option<char>,
}

impl FailureTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            count: 0,
            last: None,
        }
    }

    /// Record `input`; true once it has repeated `threshold` times in a row.
    pub fn detect(&mut self, input: char) -> bool {
        if self.last == Some(input) {
            self.count += 1;
        } else {
            self.count = 1;
        }
        self.last = Some(input);
        self.count >= self.threshold
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.last = None;
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Default for FailureTracker {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Pacing for step-by-step output, microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub step_delay_us: u32,
    pub settle_us: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            step_delay_us: 2000,
            settle_us: 3000,
        }
    }
}

/// One synthetic action for the text-injection side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Backspace,
    Insert(String),
    Pause { us: u32 },
}

/// Event plan that deletes `backspaces` characters and types `text`.
pub fn render(backspaces: usize, text: &str, strategy: Strategy, timing: Timing) -> Vec<Step> {
    let mut steps = Vec::new();
    match strategy {
        Strategy::Batch => {
            steps.extend(std::iter::repeat(Step::Backspace).take(backspaces));
            if !text.is_empty() {
                steps.push(Step::Insert(text.to_string()));
            }
        }
        Strategy::Hybrid { backspace_delay_us } => {
            paced_backspaces(&mut steps, backspaces, backspace_delay_us);
            if !text.is_empty() {
                steps.push(Step::Insert(text.to_string()));
            }
        }
        Strategy::StepByStep => {
            paced_backspaces(&mut steps, backspaces, timing.step_delay_us);
            if backspaces > 0 {
                steps.push(Step::Pause {
                    us: timing.settle_us,
                });
            }
            for (i, ch) in text.chars().enumerate() {
                if i > 0 {
                    steps.push(Step::Pause {
                        us: timing.step_delay_us,
                    });
                }
                steps.push(Step::Insert(ch.to_string()));
            }
            if !text.is_empty() {
                steps.push(Step::Pause {
                    us: timing.settle_us,
                });
            }
        }
    }
    steps
}

fn paced_backspaces(steps: &mut Vec<Step>, count: usize, delay_us: u32) {
    for i in 0..count {
        if i > 0 && delay_us > 0 {
            steps.push(Step::Pause { us: delay_us });
        }
        steps.push(Step::Backspace);
    }
}
