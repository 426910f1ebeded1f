pub mod cli;
pub mod schedules;
