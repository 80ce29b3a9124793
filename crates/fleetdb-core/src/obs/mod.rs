//! Module: obs
//! Responsibility: in-process counters for service execution.
//! Does not own: query or persistence logic; nothing here affects results.
//! Boundary: service code records events through `sink::record`.

mod sink;

pub use sink::{ExecKind, MetricsEvent, MetricsSink, record};

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

static STATE: Mutex<MetricsState> = Mutex::new(MetricsState::new());

///
/// MetricsState
///
/// Process-global operation counters. All arithmetic saturates.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MetricsState {
    pub list_calls: u64,
    pub count_calls: u64,
    pub create_calls: u64,
    pub get_calls: u64,
    pub edit_calls: u64,
    pub delete_calls: u64,
    pub rows_scanned: u64,
    pub rows_returned: u64,
}

impl MetricsState {
    const fn new() -> Self {
        Self {
            list_calls: 0,
            count_calls: 0,
            create_calls: 0,
            get_calls: 0,
            edit_calls: 0,
            delete_calls: 0,
            rows_scanned: 0,
            rows_returned: 0,
        }
    }

    const fn calls_slot(&mut self, kind: ExecKind) -> &mut u64 {
        match kind {
            ExecKind::List => &mut self.list_calls,
            ExecKind::Count => &mut self.count_calls,
            ExecKind::Create => &mut self.create_calls,
            ExecKind::Get => &mut self.get_calls,
            ExecKind::Edit => &mut self.edit_calls,
            ExecKind::Delete => &mut self.delete_calls,
        }
    }
}

pub(crate) fn with_state_mut<T>(f: impl FnOnce(&mut MetricsState) -> T) -> T {
    let mut state = STATE.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

    f(&mut state)
}

/// Snapshot the current counters.
#[must_use]
pub fn metrics_report() -> MetricsState {
    with_state_mut(|m| *m)
}

/// Reset all counters.
pub fn metrics_reset_all() {
    with_state_mut(|m| *m = MetricsState::new());
}
