//! Recurrence descriptor — the structured, editable form of a schedule.
//!
//! A [`RecurrenceDescriptor`] keeps every shape's fields around at all
//! times so a form can switch between shapes without losing what the user
//! typed. Only the fields of the active [`Frequency`] are meaningful; use
//! [`RecurrenceDescriptor::view`] to get a [`Recurrence`] that exposes just
//! those.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Frequency
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Which shape of the descriptor is authoritative.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// Every N minutes.
    Minute,
    /// Every N hours at a fixed minute offset.
    Hourly,
    /// Once a day at a wall-clock time.
    Daily,
    /// On selected weekdays at a wall-clock time.
    Weekly,
    /// On one day of the month at a wall-clock time.
    Monthly,
    /// Raw cron text the structured shapes cannot express.
    Custom,
}

impl Frequency {
    pub const ALL: [Frequency; 6] = [
        Frequency::Minute,
        Frequency::Hourly,
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Minute => "minute",
            Frequency::Hourly => "hourly",
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Custom => "custom",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Frequency::ALL
            .into_iter()
            .find(|f| f.as_str() == lower)
            .ok_or_else(|| crate::Error::InvalidEdit(format!("unknown frequency: '{s}'")))
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Weekdays (Monday-first UI order ↔ POSIX numbering)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// POSIX day-of-week number for each UI index (Monday-first).
///
/// This table is the only place day numbering is translated.
const POSIX_DAY: [u32; 7] = [1, 2, 3, 4, 5, 6, 0];

const ABBREV: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A day of the week in Monday-first UI order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Position in the Monday-first `selected_days` array.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Weekday> {
        Weekday::ALL.get(index).copied()
    }

    /// POSIX cron day number (0 = Sunday … 6 = Saturday).
    pub fn posix(self) -> u32 {
        POSIX_DAY[self.index()]
    }

    /// Reverse lookup of [`Weekday::posix`]. `7` is accepted as Sunday.
    pub fn from_posix(n: u32) -> Option<Weekday> {
        let n = if n == 7 { 0 } else { n };
        POSIX_DAY
            .iter()
            .position(|&d| d == n)
            .and_then(Weekday::from_index)
    }

    pub fn abbrev(self) -> &'static str {
        ABBREV[self.index()]
    }
}

impl FromStr for Weekday {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|d| d.abbrev().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| crate::Error::InvalidEdit(format!("unknown weekday: '{s}'")))
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Descriptor
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The full editable record. Every field is always present, even when the
/// active `frequency` ignores it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceDescriptor {
    pub frequency: Frequency,
    #[serde(default = "d_minute_interval")]
    pub minute_interval: u32,
    #[serde(default = "d_hour_interval")]
    pub hour_interval: u32,
    #[serde(default)]
    pub starting_minute: u32,
    #[serde(default)]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    /// Index 0 = Monday … 6 = Sunday.
    #[serde(default = "d_selected_days")]
    pub selected_days: [bool; 7],
    #[serde(default = "d_day_of_month")]
    pub day_of_month: u32,
    #[serde(default)]
    pub custom_cron: String,
}

pub const DEFAULT_MINUTE_INTERVAL: u32 = 5;
pub const DEFAULT_HOUR_INTERVAL: u32 = 6;

fn d_minute_interval() -> u32 {
    DEFAULT_MINUTE_INTERVAL
}

fn d_hour_interval() -> u32 {
    DEFAULT_HOUR_INTERVAL
}

fn d_selected_days() -> [bool; 7] {
    let mut days = [false; 7];
    days[Weekday::Mon.index()] = true;
    days
}

fn d_day_of_month() -> u32 {
    1
}

impl Default for RecurrenceDescriptor {
    fn default() -> Self {
        Self {
            frequency: Frequency::Daily,
            minute_interval: d_minute_interval(),
            hour_interval: d_hour_interval(),
            starting_minute: 0,
            hour: 0,
            minute: 0,
            selected_days: d_selected_days(),
            day_of_month: d_day_of_month(),
            custom_cron: String::new(),
        }
    }
}

impl RecurrenceDescriptor {
    /// Selected weekdays in Monday-first order.
    pub fn days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|d| self.selected_days[d.index()])
            .collect()
    }

    /// Narrow the record to the fields of the active shape.
    pub fn view(&self) -> Recurrence {
        let time = TimeOfDay {
            hour: self.hour,
            minute: self.minute,
        };
        match self.frequency {
            Frequency::Minute => Recurrence::EveryMinutes {
                interval: self.minute_interval,
            },
            Frequency::Hourly => Recurrence::EveryHours {
                interval: self.hour_interval,
                starting_minute: self.starting_minute,
            },
            Frequency::Daily => Recurrence::Daily { time },
            Frequency::Weekly => Recurrence::Weekly {
                time,
                days: self.days(),
            },
            Frequency::Monthly => Recurrence::Monthly {
                time,
                day_of_month: self.day_of_month,
            },
            Frequency::Custom => Recurrence::Custom {
                expression: self.custom_cron.clone(),
            },
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Narrowed view
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Local wall-clock time, 24h.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

/// The active shape of a descriptor with only its own fields.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "frequency", rename_all = "snake_case")]
pub enum Recurrence {
    #[serde(rename = "minute")]
    EveryMinutes { interval: u32 },
    #[serde(rename = "hourly")]
    EveryHours { interval: u32, starting_minute: u32 },
    Daily { time: TimeOfDay },
    /// `days` is in Monday-first order.
    Weekly { time: TimeOfDay, days: Vec<Weekday> },
    Monthly { time: TimeOfDay, day_of_month: u32 },
    Custom { expression: String },
}

impl Recurrence {
    pub fn frequency(&self) -> Frequency {
        match self {
            Recurrence::EveryMinutes { .. } => Frequency::Minute,
            Recurrence::EveryHours { .. } => Frequency::Hourly,
            Recurrence::Daily { .. } => Frequency::Daily,
            Recurrence::Weekly { .. } => Frequency::Weekly,
            Recurrence::Monthly { .. } => Frequency::Monthly,
            Recurrence::Custom { .. } => Frequency::Custom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_table_is_exact() {
        let posix: Vec<u32> = Weekday::ALL.iter().map(|d| d.posix()).collect();
        assert_eq!(posix, vec![1, 2, 3, 4, 5, 6, 0]);
    }

    #[test]
    fn posix_lookup_roundtrips_every_day() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_posix(day.posix()), Some(day));
        }
        for n in 0..7 {
            assert_eq!(Weekday::from_posix(n).map(Weekday::posix), Some(n));
        }
    }

    #[test]
    fn posix_seven_is_sunday() {
        assert_eq!(Weekday::from_posix(7), Some(Weekday::Sun));
        assert_eq!(Weekday::from_posix(8), None);
    }

    #[test]
    fn weekday_parses_abbreviation_case_insensitively() {
        assert_eq!("wed".parse::<Weekday>().unwrap(), Weekday::Wed);
        assert_eq!("SUN".parse::<Weekday>().unwrap(), Weekday::Sun);
        assert!("Funday".parse::<Weekday>().is_err());
    }

    #[test]
    fn frequency_parses_and_displays() {
        for f in Frequency::ALL {
            assert_eq!(f.to_string().parse::<Frequency>().unwrap(), f);
        }
        assert!("yearly".parse::<Frequency>().is_err());
    }

    #[test]
    fn default_descriptor() {
        let d = RecurrenceDescriptor::default();
        assert_eq!(d.frequency, Frequency::Daily);
        assert_eq!(d.minute_interval, 5);
        assert_eq!(d.hour_interval, 6);
        assert_eq!(d.days(), vec![Weekday::Mon]);
        assert_eq!(d.day_of_month, 1);
        assert!(d.custom_cron.is_empty());
    }

    #[test]
    fn view_exposes_only_active_shape() {
        let mut d = RecurrenceDescriptor {
            frequency: Frequency::Weekly,
            hour: 9,
            minute: 30,
            selected_days: [false, true, false, false, true, false, false],
            ..Default::default()
        };
        assert_eq!(
            d.view(),
            Recurrence::Weekly {
                time: TimeOfDay { hour: 9, minute: 30 },
                days: vec![Weekday::Tue, Weekday::Fri],
            }
        );

        d.frequency = Frequency::Minute;
        assert_eq!(d.view(), Recurrence::EveryMinutes { interval: 5 });
        assert_eq!(d.view().frequency(), Frequency::Minute);
        // weekly fields survive the switch
        assert_eq!(d.days(), vec![Weekday::Tue, Weekday::Fri]);
    }

    #[test]
    fn descriptor_uses_camel_case_wire_names() {
        let json = serde_json::to_value(RecurrenceDescriptor::default()).unwrap();
        assert_eq!(json["frequency"], "daily");
        assert_eq!(json["minuteInterval"], 5);
        assert_eq!(json["selectedDays"][0], true);
        assert_eq!(json["customCron"], "");
    }

    #[test]
    fn descriptor_deserializes_with_missing_fields() {
        let json = serde_json::json!({ "frequency": "monthly", "dayOfMonth": 15 });
        let d: RecurrenceDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(d.frequency, Frequency::Monthly);
        assert_eq!(d.day_of_month, 15);
        assert_eq!(d.hour_interval, 6);
        assert_eq!(d.days(), vec![Weekday::Mon]);
    }
}
