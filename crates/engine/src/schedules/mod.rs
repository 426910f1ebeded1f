//! Recurrence engine — translates between cron strings and the structured
//! descriptor a schedule form edits.
//!
//! Split into submodules:
//! - [`classify`] — cron string → descriptor (`parse`)
//! - [`synth`] — descriptor → cron string (`build`)
//! - [`preview`] — descriptor → human-readable sentence (`describe`)
//! - [`editor`] — clamped field edits with a change callback
//!
//! All hour/minute values are local wall-clock time. Converting to and from
//! the stored timezone is the caller's job.

pub mod classify;
pub mod editor;
pub mod preview;
pub mod synth;

pub use classify::{is_malformed, parse};
pub use editor::{clamp_text, Edit, ScheduleEditor};
pub use preview::describe;
pub use synth::build;
