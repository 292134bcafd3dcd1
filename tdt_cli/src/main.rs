use std::{env::current_dir, fs::write};

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tdt_core::{
    duty_calendar, duty_schedule,
    duty_schedule::YearBasis,
    ical::generator::Emitter,
};

#[derive(Debug, Parser)]
pub struct Arguments {
    /// the room whose duty dates are exported
    pub room: String,
    /// the number of weeks to cover, starting at the current week
    #[arg(long, default_value_t = duty_schedule::DEFAULT_HORIZON)]
    pub weeks: u32,
    /// derive week dates from the ISO week year instead of the calendar year
    #[arg(long)]
    pub iso_week_year: bool,
}

impl From<&Arguments> for YearBasis {
    fn from(value: &Arguments) -> Self {
        if value.iso_week_year {
            YearBasis::IsoWeek
        } else {
            YearBasis::Calendar
        }
    }
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    let now = Local::now().date_naive();
    let schedule = duty_schedule::upcoming_schedule(now, args.weeks, YearBasis::from(&args));
    let calendar = duty_calendar::export_calendar(&schedule, &args.room)?;
    let mut path = current_dir()?;
    path.push(duty_calendar::calendar_file_name(&args.room));
    write(path, calendar.generate())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arguments_for_year_basis() {
        let arguments = Arguments {
            room: "Room 1".to_string(),
            weeks: 8,
            iso_week_year: false,
        };
        assert_eq!(YearBasis::from(&arguments), YearBasis::Calendar);
        let arguments = Arguments {
            room: "Room 1".to_string(),
            weeks: 8,
            iso_week_year: true,
        };
        assert_eq!(YearBasis::from(&arguments), YearBasis::IsoWeek);
    }
}
