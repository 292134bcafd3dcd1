//! This module computes the rotating duty schedule: ISO week numbering, the
//! room/bin rotation and the calendar dates of each duty week.
//!
//! Every function is pure; "now" is always passed in by the caller.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

/// The rooms taking part in the rotation, in rotation order.
pub static ROOMS: [&str; 6] = [
    "Room 1", "Room 2", "Room 3", "Room 4", "Room 5", "Room 6",
];
/// The bins taken out in alternating weeks, in rotation order.
pub static BINS: [&str; 2] = ["Refuse Bin", "Recycle Bin"];

/// Number of weeks a generated schedule covers by default.
pub static DEFAULT_HORIZON: u32 = 8;

// Week 4 is a week in which `ROOMS[0]` is on duty, week 1 a week in which
// `BINS[0]` is taken out. Changing either offset reshuffles every published
// schedule.
static ROOM_ROTATION_OFFSET: i64 = 4;
static BIN_ROTATION_OFFSET: i64 = 1;

static LABEL_FORMAT: &str = "%d %b";
static MILLISECONDS_PER_WEEK: i64 = 7 * 24 * 60 * 60 * 1000;

/// The duty assignment of one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub room: &'static str,
    pub bin: &'static str,
}

/// One week of the generated schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// ISO week number, counted on past the year's last week for batches
    /// crossing the year end.
    pub week: i64,
    /// Monday of the week.
    pub range_start: NaiveDate,
    /// Sunday of the week.
    pub range_end: NaiveDate,
    pub room: &'static str,
    pub bin: &'static str,
    /// Human-readable date range, e.g. "17 Jun - 23 Jun".
    pub display_label: String,
}

/// Which year anchors the week-to-date derivation of a schedule batch.
///
/// The two variants agree for most of the year. They differ when `now` falls
/// in an ISO week belonging to the neighbouring year (late December in week 1
/// of the next year, or early January in the last week of the previous year):
/// `Calendar` keeps the batch anchored to the calendar year of `now`, which
/// shifts all derived dates by a full year in those days, while `IsoWeek`
/// anchors to the ISO week year of `now` and keeps the dates adjacent to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearBasis {
    #[default]
    Calendar,
    IsoWeek,
}

/// Get the ISO-8601 week number of `now`.
///
/// Weeks start on Monday; week 1 is the week containing the year's first
/// Thursday, so dates around New Year may belong to a week of the
/// neighbouring year.
pub fn current_week_number(now: NaiveDate) -> i64 {
    i64::from(now.iso_week().week())
}

/// Get the duty assignment of a week.
///
/// The rotation is periodic in the week number alone. The Euclidean modulo
/// keeps the index valid for weeks before the rotation offsets as well.
pub fn assignment_for_week(week: i64) -> Assignment {
    let room_index = (week - ROOM_ROTATION_OFFSET).rem_euclid(ROOMS.len() as i64);
    let bin_index = (week - BIN_ROTATION_OFFSET).rem_euclid(BINS.len() as i64);
    Assignment {
        room: ROOMS[room_index as usize],
        bin: BINS[bin_index as usize],
    }
}

/// Get the date of a weekday (1 = Monday .. 7 = Sunday) within an ISO week of
/// `year`.
///
/// Week numbers past the year's last week spill into the following year, so a
/// schedule batch may run across the year end without re-deriving its year.
pub fn date_for_weekday(year: i32, week: i64, iso_day: u32) -> NaiveDate {
    let simple = NaiveDate::from_ymd_opt(year, 1, 1).unwrap() + Duration::days((week - 1) * 7);
    let weekday = i64::from(simple.weekday().number_from_monday());
    let monday = if weekday <= 4 {
        simple - Duration::days(weekday - 1)
    } else {
        simple + Duration::days(8 - weekday)
    };
    monday + Duration::days(i64::from(iso_day) - 1)
}

/// Build the schedule for `horizon` weeks starting at `start_week`.
///
/// All entries derive their dates from the same `year`; see [`YearBasis`] for
/// how callers choose it.
pub fn generate_schedule(year: i32, start_week: i64, horizon: u32) -> Vec<ScheduleEntry> {
    (0..i64::from(horizon))
        .map(|offset| {
            let week = start_week + offset;
            let range_start = date_for_weekday(year, week, 1);
            let range_end = date_for_weekday(year, week, 7);
            let Assignment { room, bin } = assignment_for_week(week);
            let display_label = format!(
                "{} - {}",
                range_start.format(LABEL_FORMAT),
                range_end.format(LABEL_FORMAT)
            );
            ScheduleEntry {
                week,
                range_start,
                range_end,
                room,
                bin,
                display_label,
            }
        })
        .collect()
}

/// Get the year anchoring a schedule batch that starts at `now`.
pub fn base_year(now: NaiveDate, basis: YearBasis) -> i32 {
    match basis {
        YearBasis::Calendar => now.year(),
        YearBasis::IsoWeek => now.iso_week().year(),
    }
}

/// Build the schedule for the `horizon` weeks starting at the week of `now`.
pub fn upcoming_schedule(now: NaiveDate, horizon: u32, basis: YearBasis) -> Vec<ScheduleEntry> {
    generate_schedule(base_year(now, basis), current_week_number(now), horizon)
}

/// Get the percentage of the 7-day window starting at `week_start` midnight
/// that has elapsed at `now`, clamped to `[0, 100]`.
pub fn week_progress(now: NaiveDateTime, week_start: NaiveDate) -> f64 {
    let elapsed = now - week_start.and_time(NaiveTime::MIN);
    (elapsed.num_milliseconds() as f64 / MILLISECONDS_PER_WEEK as f64 * 100.0).clamp(0.0, 100.0)
}

/// Get the 1-based slot of a room label from its trailing number, e.g. 3 for
/// "Room 3".
///
/// A missing, zero or unparseable suffix degrades to slot 1 instead of
/// failing.
pub fn room_slot(room: &str) -> usize {
    let suffix_regex = Regex::new(r"(\d+)\s*$").unwrap();
    suffix_regex
        .captures(room)
        .and_then(|captures| captures[1].parse::<usize>().ok())
        .filter(|&slot| slot > 0)
        .unwrap_or(1)
}
