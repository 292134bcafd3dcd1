//! This module exports one room's duty weeks as an iCalendar document.

use chrono::NaiveTime;
use ical::{
    generator::{IcalCalendar, IcalEvent, Property},
    ical_property,
};

use crate::{duty_schedule::ScheduleEntry, error::ExportError};

static DTSTART_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Get the download file name for a room's calendar.
pub fn calendar_file_name(room: &str) -> String {
    format!("TrashDuty_{room}.ics")
}

/// Build the calendar of a room's upcoming duty dates.
///
/// Fails with [`ExportError::NoRoomSelected`] when no room is given, before
/// any other work. A room without matching entries yields a valid empty
/// calendar. The document carries `VERSION:2.0` and one event per duty week;
/// callers serialize it with [`ical::generator::Emitter`].
pub fn export_calendar(
    schedule: &[ScheduleEntry],
    room: &str,
) -> Result<IcalCalendar, ExportError> {
    if room.is_empty() {
        return Err(ExportError::NoRoomSelected);
    }
    let mut calendar = IcalCalendar::new();
    calendar.properties.push(ical_property!("VERSION", "2.0"));
    for entry in schedule.iter().filter(|entry| entry.room == room) {
        calendar.events.push(duty_event(entry));
    }
    Ok(calendar)
}

/// Build the event of a single duty week, due by the end of the week.
fn duty_event(entry: &ScheduleEntry) -> IcalEvent {
    let dt_start = entry
        .range_end
        .and_time(NaiveTime::MIN)
        .format(DTSTART_FORMAT)
        .to_string();
    let mut event = IcalEvent::new();
    event
        .properties
        .push(ical_property!("SUMMARY", format!("{} Duty", entry.bin)));
    event.properties.push(ical_property!("DTSTART", dt_start));
    event
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor};

    use ical::{generator::Emitter, IcalParser};

    use crate::duty_schedule::generate_schedule;

    use super::*;

    fn get_test_schedule() -> Vec<ScheduleEntry> {
        generate_schedule(2024, 25, 8)
    }

    fn property_value<'a>(event: &'a IcalEvent, name: &str) -> &'a str {
        event
            .properties
            .iter()
            .find(|property| property.name == name)
            .and_then(|property| property.value.as_deref())
            .unwrap()
    }

    #[test]
    fn test_export_requires_room() {
        let result = export_calendar(&get_test_schedule(), "");
        assert_eq!(result.unwrap_err(), ExportError::NoRoomSelected);
    }

    #[test]
    fn test_export_filters_by_room() {
        let calendar = export_calendar(&get_test_schedule(), "Room 4").unwrap();
        assert_eq!(calendar.events.len(), 2);
        for event in &calendar.events {
            assert_eq!(property_value(event, "SUMMARY"), "Refuse Bin Duty");
        }
        let dt_starts: Vec<&str> = calendar
            .events
            .iter()
            .map(|event| property_value(event, "DTSTART"))
            .collect();
        assert_eq!(dt_starts, ["20240623T000000Z", "20240804T000000Z"]);
    }

    #[test]
    fn test_export_other_room_bin() {
        let calendar = export_calendar(&get_test_schedule(), "Room 5").unwrap();
        assert_eq!(calendar.events.len(), 2);
        for event in &calendar.events {
            assert_eq!(property_value(event, "SUMMARY"), "Recycle Bin Duty");
        }
    }

    #[test]
    fn test_export_without_matching_weeks() {
        let calendar = export_calendar(&generate_schedule(2024, 25, 2), "Room 1").unwrap();
        assert!(calendar.events.is_empty());
    }

    #[test]
    fn test_generated_document() {
        let calendar = export_calendar(&get_test_schedule(), "Room 5").unwrap();
        let text = calendar.generate();
        assert!(text.starts_with("BEGIN:VCALENDAR"));
        assert!(text.contains("VERSION:2.0"));
        assert!(!text.contains("PRODID"));
        assert!(text.trim_end().ends_with("END:VCALENDAR"));
    }

    /// The emitted text must survive a round trip through the parser so
    /// standard calendar readers can import it.
    #[test]
    fn test_generated_document_parses() {
        let calendar = export_calendar(&get_test_schedule(), "Room 5").unwrap();
        let parser = IcalParser::new(BufReader::new(Cursor::new(calendar.generate())));
        let parsed: Vec<_> = parser.collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].events.len(), 2);
        assert_eq!(property_value(&parsed[0].events[0], "SUMMARY"), "Recycle Bin Duty");
    }

    #[test]
    fn test_calendar_file_name() {
        assert_eq!(calendar_file_name("Room 2"), "TrashDuty_Room 2.ics");
    }
}
