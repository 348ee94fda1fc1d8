#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod error;
pub mod format;
pub mod schedule;
pub mod working_hours;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::error::{InvalidTimeFormat, ParserError};
pub use crate::format::{FormatOptions, ScheduleDisplay};
pub use crate::schedule::{OpeningTimes, Schedule};
pub use crate::working_hours::WorkingHours;
pub use working_hours_syntax::{DaysRange, HoursRange, RangePair, Weekday};
