//! iCalendar export of scheduling events
//!
//! Every event becomes an all-day VEVENT so the deadlines can be
//! subscribed to from an ordinary calendar client.

use icalendar::{Calendar, Component, Event as IcsEvent, EventLike};
use log::debug;

use crate::models::{Priority, ScheduleEvent};

pub const CALENDAR_NAME: &str = "IEP Schedule";

pub fn event_uid(event: &ScheduleEvent) -> String {
    format!("iep-scheduler-{}", event.id)
}

// RFC 5545: 1 is highest, 9 lowest.
fn ics_priority(priority: Priority) -> u32 {
    match priority {
        Priority::High => 1,
        Priority::Medium => 5,
        Priority::Low => 9,
    }
}

fn to_ics_event(event: &ScheduleEvent) -> IcsEvent {
    let mut ics = IcsEvent::new();
    ics.uid(&event_uid(event))
        .summary(&event.title)
        .all_day(event.date)
        .priority(ics_priority(event.priority))
        .add_property("CATEGORIES", event.event_type.as_str());

    let mut description = event.description.clone().unwrap_or_default();
    if let Some(student) = &event.student_name {
        if !description.is_empty() {
            description.push('\n');
        }
        description.push_str(&format!("Student: {}", student));
    }
    if !description.is_empty() {
        ics.description(&description);
    }

    ics.done()
}

pub fn to_ics(events: &[ScheduleEvent]) -> String {
    let mut calendar = Calendar::new();
    calendar.name(CALENDAR_NAME);
    for event in events {
        calendar.push(to_ics_event(event));
    }
    debug!("Exported {} events to iCalendar", events.len());
    calendar.done().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventType;
    use chrono::NaiveDate;

    fn sample() -> ScheduleEvent {
        ScheduleEvent::new(
            1000,
            "IEP Annual Review Due - John Smith",
            NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
            EventType::IepDue,
            Priority::High,
        )
        .with_student("John Smith")
        .with_description("Annual IEP review and goal updates required")
    }

    #[test]
    fn test_event_uid() {
        assert_eq!(event_uid(&sample()), "iep-scheduler-1000");
    }

    #[test]
    fn test_to_ics_contains_all_day_event() {
        let ics = to_ics(&[sample()]);

        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(ics.contains("BEGIN:VEVENT"));
        assert!(ics.contains("UID:iep-scheduler-1000"));
        assert!(ics.contains("SUMMARY:IEP Annual Review Due - John Smith"));
        assert!(ics.contains("20250915"));
        assert!(ics.contains("CATEGORIES:iep-due"));
        assert!(ics.contains("PRIORITY:1"));
    }

    #[test]
    fn test_to_ics_empty() {
        let ics = to_ics(&[]);
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(!ics.contains("BEGIN:VEVENT"));
    }
}
