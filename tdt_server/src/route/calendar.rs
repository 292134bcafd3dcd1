use axum::{
    extract::Query,
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        StatusCode,
    },
    response::{IntoResponse, Response},
};
use chrono::Local;
use serde::Deserialize;
use tdt_core::{
    duty_calendar, duty_schedule,
    duty_schedule::YearBasis,
    ical::generator::Emitter,
};

#[derive(Debug, Clone, Deserialize)]
pub struct QueryParams {
    #[serde(default)]
    room: String,
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

/// Handle calendar requests.
///
/// The `room` must be given in the query string; without it the request is a
/// user-input error and answered with 400.
pub async fn handler(
    Query(query_params): Query<QueryParams>,
) -> Result<Response, (StatusCode, String)> {
    let now = Local::now().date_naive();
    let schedule =
        duty_schedule::upcoming_schedule(now, query_params.weeks, YearBasis::from(&query_params));
    let calendar = duty_calendar::export_calendar(&schedule, &query_params.room)
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;
    let file_name = duty_calendar::calendar_file_name(&query_params.room);
    tracing::info!(room = %query_params.room, weeks = query_params.weeks, "serving calendar");
    let response = (
        [
            (CONTENT_TYPE, String::from("text/calendar")),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        calendar.generate(),
    )
        .into_response();
    Ok(response)
}
