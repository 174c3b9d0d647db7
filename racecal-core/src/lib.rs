//! Core library for racecal.
//!
//! Loads per-series race schedules and assembles them into ICS calendars:
//! - `schedule` reads the JSON schedule files
//! - `assembler` turns races into calendar events, with optional filtering
//! - `ics` serializes the result (and reads it back)
//! - `generator` ties loading and assembly together per request

pub mod assembler;
pub mod error;
pub mod event;
pub mod fantasy;
pub mod generator;
pub mod ics;
pub mod schedule;
pub mod series;
pub mod session;

pub use assembler::{Assembler, SeriesSchedule};
pub use error::{RaceCalError, RaceCalResult};
pub use event::{CalendarArtifact, CalendarEvent, Reminder};
pub use schedule::{Race, Session};
pub use series::Series;
