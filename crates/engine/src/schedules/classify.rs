//! Classifier: cron string → [`RecurrenceDescriptor`].
//!
//! Total: every input yields a descriptor. Inputs that do not split into
//! exactly five fields fall back to a default daily descriptor carrying the
//! raw text; five-field inputs that match no structured shape become
//! [`Frequency::Custom`].

use std::sync::LazyLock;

use regex::Regex;

use cadence_domain::recurrence::{
    Frequency, RecurrenceDescriptor, Weekday, DEFAULT_HOUR_INTERVAL, DEFAULT_MINUTE_INTERVAL,
};

// `[0-9]` rather than `\d`: Unicode digits would match but not parse.
static STEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*/([0-9]+)$").expect("valid regex"));
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));
static NUMBER_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(,[0-9]+)*$").expect("valid regex"));

/// The five positional fields of a cron expression.
struct Fields<'a> {
    minute: &'a str,
    hour: &'a str,
    day_of_month: &'a str,
    month: &'a str,
    day_of_week: &'a str,
}

impl<'a> Fields<'a> {
    fn split(cron: &'a str) -> Option<Self> {
        let parts: Vec<&str> = cron.split_whitespace().collect();
        match parts.as_slice() {
            &[minute, hour, day_of_month, month, day_of_week] => Some(Self {
                minute,
                hour,
                day_of_month,
                month,
                day_of_week,
            }),
            _ => None,
        }
    }
}

fn is_any(field: &str) -> bool {
    field == "*"
}

/// Interval of a `*/N` step field. An `N` too large for `u32` takes
/// `fallback`.
fn step(field: &str, fallback: u32) -> Option<u32> {
    STEP.captures(field)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().parse().unwrap_or(fallback))
}

/// A bare integer field. `None` for anything else, including digits that
/// overflow `u32`, so the literal is never replaced by a made-up value.
fn number(field: &str) -> Option<u32> {
    if NUMBER.is_match(field) {
        field.parse().ok()
    } else {
        None
    }
}

/// Classify a cron expression into a structured descriptor.
///
/// Shapes are tried in a fixed order (minute, hourly, daily, weekly,
/// monthly) and the first match wins. The month field must be `*` for every
/// structured shape. `custom_cron` always carries the input verbatim.
pub fn parse(cron: &str) -> RecurrenceDescriptor {
    let mut d = RecurrenceDescriptor {
        custom_cron: cron.to_string(),
        ..Default::default()
    };

    let Some(f) = Fields::split(cron) else {
        // Malformed field count: keep the daily defaults.
        return d;
    };

    if !is_any(f.month) {
        d.frequency = Frequency::Custom;
        return d;
    }

    // every N minutes
    if let Some(n) = step(f.minute, DEFAULT_MINUTE_INTERVAL) {
        if is_any(f.hour) && is_any(f.day_of_month) && is_any(f.day_of_week) {
            d.frequency = Frequency::Minute;
            d.minute_interval = n;
            return d;
        }
    }

    // every N hours at a fixed minute
    if let (Some(minute), Some(n)) = (number(f.minute), step(f.hour, DEFAULT_HOUR_INTERVAL)) {
        if is_any(f.day_of_month) && is_any(f.day_of_week) {
            d.frequency = Frequency::Hourly;
            d.starting_minute = minute;
            d.hour_interval = n;
            return d;
        }
    }

    // The remaining shapes all pin a wall-clock time.
    let (Some(minute), Some(hour)) = (number(f.minute), number(f.hour)) else {
        d.frequency = Frequency::Custom;
        return d;
    };

    if is_any(f.day_of_month) && is_any(f.day_of_week) {
        d.frequency = Frequency::Daily;
    } else if is_any(f.day_of_month) && NUMBER_LIST.is_match(f.day_of_week) {
        d.frequency = Frequency::Weekly;
        d.selected_days = [false; 7];
        for day in f
            .day_of_week
            .split(',')
            .filter_map(|n| n.parse().ok())
            .filter_map(Weekday::from_posix)
        {
            d.selected_days[day.index()] = true;
        }
    } else if let (Some(day_of_month), true) = (number(f.day_of_month), is_any(f.day_of_week)) {
        d.frequency = Frequency::Monthly;
        d.day_of_month = day_of_month;
    } else {
        d.frequency = Frequency::Custom;
        return d;
    }

    d.hour = hour;
    d.minute = minute;
    d
}

/// `true` when `cron` does not split into exactly five fields.
pub fn is_malformed(cron: &str) -> bool {
    Fields::split(cron).is_none()
}
