use crate::obs::with_state_mut;

///
/// ExecKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExecKind {
    List,
    Count,
    Create,
    Get,
    Edit,
    Delete,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    ExecStart { kind: ExecKind },
    ExecFinish { kind: ExecKind, rows_returned: u64 },
    RowsScanned { rows_scanned: u64 },
}

///
/// MetricsSink
///
/// Instrumentation boundary: service code emits events, sinks account for
/// them. The process-global sink below is the only shipped implementation.
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::ExecStart { kind } => with_state_mut(|m| {
                let slot = m.calls_slot(kind);
                *slot = slot.saturating_add(1);
            }),

            MetricsEvent::ExecFinish { rows_returned, .. } => with_state_mut(|m| {
                m.rows_returned = m.rows_returned.saturating_add(rows_returned);
            }),

            MetricsEvent::RowsScanned { rows_scanned } => with_state_mut(|m| {
                m.rows_scanned = m.rows_scanned.saturating_add(rows_scanned);
            }),
        }
    }
}

const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

/// Record one event against the process-global sink.
pub fn record(event: MetricsEvent) {
    GLOBAL_METRICS_SINK.record(event);
}

///
/// TESTS
///
