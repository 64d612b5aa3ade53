use viet_core::strategy::{FailureTracker, Strategy};

/// Per-application state, created the first time an app gains focus and
/// kept in memory for the rest of the session.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub enabled: bool,
    /// Starts as the registry's choice; may be escalated by the tracker.
    pub strategy: Strategy,
    pub tracker: FailureTracker,
}

impl AppContext {
    pub fn new(strategy: Strategy, failure_threshold: u32) -> Self {
        Self {
            enabled: true,
            strategy,
            tracker: FailureTracker::new(failure_threshold),
        }
    }

    /// Feed a key that produced a replacement to the failure heuristic.
    /// Returns true when the strategy was escalated to step-by-step; the
    /// count restarts only then.
    pub(crate) fn record_replacement(&mut self, ch: char, auto_switch: bool) -> bool {
        if !self.tracker.detect(ch) {
            return false;
        }
        if !auto_switch || self.strategy == Strategy::StepByStep {
            return false;
        }
        self.tracker.reset();
        self.strategy = Strategy::StepByStep;
        true
    }
}
