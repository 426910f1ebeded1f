//! Previewer: a short English sentence describing a descriptor.
//!
//! Display only. Nothing downstream parses this text.

use cadence_domain::recurrence::{Frequency, RecurrenceDescriptor, Weekday};

use super::synth::FALLBACK_DAY;

const CUSTOM_LABEL: &str = "Custom schedule: ";

/// Render the active shape of `d` as a sentence fragment.
///
/// Times are shown on a 12-hour clock, e.g. `"Every Mon, Wed, Fri at 9:00 AM"`.
pub fn describe(d: &RecurrenceDescriptor) -> String {
    match d.frequency {
        Frequency::Minute => every(d.minute_interval, "minute"),
        Frequency::Hourly => format!(
            "{} at :{:02}",
            every(d.hour_interval, "hour"),
            d.starting_minute
        ),
        Frequency::Daily => format!("Daily at {}", clock(d.hour, d.minute)),
        Frequency::Weekly => {
            let mut days = d.days();
            if days.len() == Weekday::ALL.len() {
                return format!("Daily at {}", clock(d.hour, d.minute));
            }
            // Mirrors what `build` emits for an empty selection.
            if days.is_empty() {
                days.push(FALLBACK_DAY);
            }
            let names: Vec<&str> = days.into_iter().map(Weekday::abbrev).collect();
            format!("Every {} at {}", names.join(", "), clock(d.hour, d.minute))
        }
        Frequency::Monthly => format!(
            "Monthly on the {} at {}",
            ordinal(d.day_of_month),
            clock(d.hour, d.minute)
        ),
        Frequency::Custom => format!("{CUSTOM_LABEL}{}", d.custom_cron),
    }
}

fn every(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("Every 1 {unit}")
    } else {
        format!("Every {n} {unit}s")
    }
}

/// `13, 5` → `"1:05 PM"`.
fn clock(hour: u32, minute: u32) -> String {
    let meridiem = if hour % 24 < 12 { "AM" } else { "PM" };
    let h12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{h12}:{minute:02} {meridiem}")
}

/// `1` → `"1st"`, `12` → `"12th"`, `22` → `"22nd"`.
fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
