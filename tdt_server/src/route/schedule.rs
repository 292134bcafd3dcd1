use axum::{extract::Query, Json};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tdt_core::duty_schedule::{self, ScheduleEntry, YearBasis};

#[derive(Debug, Clone, Deserialize)]
pub struct QueryParams {
    #[serde(default = "default_weeks")]
    weeks: u32,
    #[serde(default)]
    iso_week_year: bool,
}

fn default_weeks() -> u32 {
    duty_schedule::DEFAULT_HORIZON
}

impl From<&QueryParams> for YearBasis {
    fn from(value: &QueryParams) -> Self {
        if value.iso_week_year {
            YearBasis::IsoWeek
        } else {
            YearBasis::Calendar
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    week: i64,
    room: &'static str,
    bin: &'static str,
    progress: f64,
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, Serialize)]
struct Entry {
    week: i64,
    range_start: String,
    range_end: String,
    room: &'static str,
    bin: &'static str,
    dates: String,
}

impl From<ScheduleEntry> for Entry {
    fn from(value: ScheduleEntry) -> Self {
        Entry {
            week: value.week,
            range_start: value.range_start.to_string(),
            range_end: value.range_end.to_string(),
            room: value.room,
            bin: value.bin,
            dates: value.display_label,
        }
    }
}

/// Handle schedule requests, answering with the upcoming duty weeks as JSON.
pub async fn handler(Query(query_params): Query<QueryParams>) -> Json<ScheduleResponse> {
    let now = Local::now().naive_local();
    let today = now.date();
    let basis = YearBasis::from(&query_params);
    let week = duty_schedule::current_week_number(today);
    let assignment = duty_schedule::assignment_for_week(week);
    let week_start = duty_schedule::date_for_weekday(duty_schedule::base_year(today, basis), week, 1);
    let entries = duty_schedule::upcoming_schedule(today, query_params.weeks, basis)
        .into_iter()
        .map(Entry::from)
        .collect();
    Json(ScheduleResponse {
        week,
        room: assignment.room,
        bin: assignment.bin,
        progress: duty_schedule::week_progress(now, week_start),
        entries,
    })
}
