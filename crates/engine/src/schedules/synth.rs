//! Synthesizer: [`RecurrenceDescriptor`] → cron string.

use cadence_domain::recurrence::{Frequency, RecurrenceDescriptor, Weekday};

/// Day emitted when a weekly descriptor has no day selected, so the result
/// is always schedulable.
pub(crate) const FALLBACK_DAY: Weekday = Weekday::Mon;

/// Serialize the active shape of `d` as a 5-field cron expression.
///
/// Only the fields of `d.frequency` are read. Custom descriptors return
/// `custom_cron` unchanged, without re-validating it.
pub fn build(d: &RecurrenceDescriptor) -> String {
    match d.frequency {
        Frequency::Minute => format!("*/{} * * * *", d.minute_interval),
        Frequency::Hourly => format!("{} */{} * * *", d.starting_minute, d.hour_interval),
        Frequency::Daily => format!("{} {} * * *", d.minute, d.hour),
        Frequency::Weekly => format!("{} {} * * {}", d.minute, d.hour, posix_day_list(d)),
        Frequency::Monthly => format!("{} {} {} * *", d.minute, d.hour, d.day_of_month),
        Frequency::Custom => d.custom_cron.clone(),
    }
}

/// Selected days as POSIX numbers, ascending and comma-joined.
fn posix_day_list(d: &RecurrenceDescriptor) -> String {
    let mut posix: Vec<u32> = d.days().into_iter().map(Weekday::posix).collect();
    if posix.is_empty() {
        posix.push(FALLBACK_DAY.posix());
    }
    posix.sort_unstable();
    posix
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
