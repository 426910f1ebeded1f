//! Structured editing surface for a single schedule.
//!
//! [`ScheduleEditor`] plays the host-widget role: it seeds a descriptor from
//! an incoming cron string, applies one field edit at a time (clamping form
//! input to each field's range), re-serializes after every edit and hands the
//! new expression to a change callback.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use cadence_domain::recurrence::{Frequency, RecurrenceDescriptor, Weekday};
use cadence_domain::trace::TraceEvent;

use super::{build, describe, is_malformed, parse};

pub const MINUTE_INTERVAL_RANGE: RangeInclusive<u32> = 1..=59;
pub const HOUR_INTERVAL_RANGE: RangeInclusive<u32> = 1..=23;
pub const MINUTE_RANGE: RangeInclusive<u32> = 0..=59;
pub const HOUR_RANGE: RangeInclusive<u32> = 0..=23;
pub const DAY_OF_MONTH_RANGE: RangeInclusive<u32> = 1..=31;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Edits
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A single field-level mutation. Numeric fields carry the raw text the
/// user typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    Frequency(Frequency),
    MinuteInterval(String),
    HourInterval(String),
    StartingMinute(String),
    Hour(String),
    Minute(String),
    ToggleDay(Weekday),
    SetDays([bool; 7]),
    DayOfMonth(String),
    CustomCron(String),
}

impl Edit {
    /// Name used on the command line and in trace events.
    pub fn field(&self) -> &'static str {
        match self {
            Edit::Frequency(_) => "frequency",
            Edit::MinuteInterval(_) => "minute_interval",
            Edit::HourInterval(_) => "hour_interval",
            Edit::StartingMinute(_) => "starting_minute",
            Edit::Hour(_) => "hour",
            Edit::Minute(_) => "minute",
            Edit::ToggleDay(_) => "toggle",
            Edit::SetDays(_) => "days",
            Edit::DayOfMonth(_) => "day_of_month",
            Edit::CustomCron(_) => "custom",
        }
    }
}

impl FromStr for Edit {
    type Err = cadence_domain::Error;

    /// Parse `field=value`, e.g. `hour=14`, `toggle=Fri`, `days=Mon,Wed`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = s.split_once('=').ok_or_else(|| {
            cadence_domain::Error::InvalidEdit(format!("expected field=value, got '{s}'"))
        })?;
        let text = value.to_string();
        let edit = match field.trim() {
            "frequency" => Edit::Frequency(value.parse()?),
            "minute_interval" => Edit::MinuteInterval(text),
            "hour_interval" => Edit::HourInterval(text),
            "starting_minute" => Edit::StartingMinute(text),
            "hour" => Edit::Hour(text),
            "minute" => Edit::Minute(text),
            "toggle" => Edit::ToggleDay(value.parse()?),
            "days" => {
                let mut days = [false; 7];
                for name in value.split(',').filter(|n| !n.trim().is_empty()) {
                    let day: Weekday = name.parse()?;
                    days[day.index()] = true;
                }
                Edit::SetDays(days)
            }
            "day_of_month" => Edit::DayOfMonth(text),
            "custom" => Edit::CustomCron(text),
            other => {
                return Err(cadence_domain::Error::InvalidEdit(format!(
                    "unknown field '{other}'"
                )))
            }
        };
        Ok(edit)
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", self.field())?;
        match self {
            Edit::Frequency(v) => write!(f, "{v}"),
            Edit::ToggleDay(d) => f.write_str(d.abbrev()),
            Edit::SetDays(days) => {
                let names: Vec<&str> = Weekday::ALL
                    .into_iter()
                    .filter(|d| days[d.index()])
                    .map(Weekday::abbrev)
                    .collect();
                f.write_str(&names.join(","))
            }
            Edit::MinuteInterval(t)
            | Edit::HourInterval(t)
            | Edit::StartingMinute(t)
            | Edit::Hour(t)
            | Edit::Minute(t)
            | Edit::DayOfMonth(t)
            | Edit::CustomCron(t) => f.write_str(t),
        }
    }
}

fn set_clamped(slot: &mut u32, text: &str, range: &RangeInclusive<u32>) -> bool {
    let (value, clamped) = clamp_text(text, range);
    *slot = value;
    clamped
}

/// Clamp form text into `range`. Text that is not an integer takes the
/// range minimum. The flag is `true` when the value had to be adjusted.
pub fn clamp_text(text: &str, range: &RangeInclusive<u32>) -> (u32, bool) {
    let (min, max) = (*range.start(), *range.end());
    match text.trim().parse::<i64>() {
        Ok(v) => {
            let clamped = v.clamp(i64::from(min), i64::from(max));
            (clamped as u32, clamped != v)
        }
        Err(_) => (min, true),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Editor
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Owns one descriptor for the length of an editing session.
pub struct ScheduleEditor<F> {
    descriptor: RecurrenceDescriptor,
    on_change: F,
}

impl<F> ScheduleEditor<F>
where
    F: FnMut(&str),
{
    /// Seed the editor by classifying `cron` once. `on_change` is not called
    /// until the first edit.
    pub fn new(cron: &str, on_change: F) -> Self {
        let descriptor = parse(cron);
        TraceEvent::ScheduleLoaded {
            input: cron.to_string(),
            frequency: descriptor.frequency,
            malformed: is_malformed(cron),
        }
        .emit();
        Self {
            descriptor,
            on_change,
        }
    }

    /// Apply one edit, re-serialize, notify the callback and return the new
    /// expression.
    pub fn apply(&mut self, edit: Edit) -> String {
        let field = edit.field();
        let clamped = self.mutate(edit);
        let expression = build(&self.descriptor);

        TraceEvent::ScheduleEdited {
            field: field.to_string(),
            frequency: self.descriptor.frequency,
            expression: expression.clone(),
            clamped,
        }
        .emit();

        (self.on_change)(&expression);
        expression
    }

    fn mutate(&mut self, edit: Edit) -> bool {
        let d = &mut self.descriptor;
        match edit {
            Edit::Frequency(frequency) => {
                // Switching to custom with nothing typed yet keeps the
                // current schedule instead of emitting an empty string.
                if frequency == Frequency::Custom && d.custom_cron.trim().is_empty() {
                    d.custom_cron = build(d);
                }
                d.frequency = frequency;
                false
            }
            Edit::MinuteInterval(t) => {
                set_clamped(&mut d.minute_interval, &t, &MINUTE_INTERVAL_RANGE)
            }
            Edit::HourInterval(t) => set_clamped(&mut d.hour_interval, &t, &HOUR_INTERVAL_RANGE),
            Edit::StartingMinute(t) => set_clamped(&mut d.starting_minute, &t, &MINUTE_RANGE),
            Edit::Hour(t) => set_clamped(&mut d.hour, &t, &HOUR_RANGE),
            Edit::Minute(t) => set_clamped(&mut d.minute, &t, &MINUTE_RANGE),
            Edit::DayOfMonth(t) => set_clamped(&mut d.day_of_month, &t, &DAY_OF_MONTH_RANGE),
            Edit::ToggleDay(day) => {
                let slot = &mut d.selected_days[day.index()];
                *slot = !*slot;
                false
            }
            Edit::SetDays(days) => {
                d.selected_days = days;
                false
            }
            Edit::CustomCron(text) => {
                d.custom_cron = text;
                false
            }
        }
    }

    pub fn descriptor(&self) -> &RecurrenceDescriptor {
        &self.descriptor
    }

    pub fn expression(&self) -> String {
        build(&self.descriptor)
    }

    pub fn preview(&self) -> String {
        describe(&self.descriptor)
    }

    pub fn into_descriptor(self) -> RecurrenceDescriptor {
        self.descriptor
    }
}
