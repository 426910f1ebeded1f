//! Shared types for the cadence workspace: the recurrence data model,
//! configuration, errors and structured trace events.

pub mod config;
pub mod error;
pub mod recurrence;
pub mod trace;

pub use error::{Error, Result};
pub use recurrence::{Frequency, Recurrence, RecurrenceDescriptor, TimeOfDay, Weekday};
