//! This crate implements the rotating weekly trash duty timetable of a shared
//! house: six rooms take turns, alternating between the refuse and the
//! recycle bin, one room per ISO week.
//! It computes the forward-looking schedule from a given date and exports one
//! room's duty dates as an iCalendar file.

pub use ical;

pub mod duty_calendar;
pub mod duty_schedule;
pub mod error;
