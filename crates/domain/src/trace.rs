use serde::Serialize;

use crate::recurrence::Frequency;

/// Structured trace events emitted by the schedule editor and CLI.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    ScheduleLoaded {
        input: String,
        frequency: Frequency,
        /// The input did not split into five fields.
        malformed: bool,
    },
    ScheduleEdited {
        field: String,
        frequency: Frequency,
        expression: String,
        /// The submitted value was outside the field's range or not a number.
        clamped: bool,
    },
    ConfigLoaded {
        path: String,
        from_file: bool,
        issues: usize,
    },
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "cadence_event");
    }
}
