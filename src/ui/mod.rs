// src/ui/mod.rs
// Plain-text formatting for the scheduling views. Nothing here decides dates.

use chrono::NaiveDate;

use crate::calendar::CalendarMonth;
use crate::models::{EventType, Priority, ScheduleEvent};

pub mod calendar;

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// "January 2025"
pub fn format_month_title(month: CalendarMonth) -> String {
    match month.first_day() {
        Some(first) => first.format("%B %Y").to_string(),
        None => month.to_string(),
    }
}

/// "Jan 15"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Marker shown before high and medium priority events.
pub fn priority_marker(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "!",
        Priority::Medium => "~",
        Priority::Low => " ",
    }
}

/// Event types and priorities with their display labels, in legend order.
pub fn legend() -> Vec<(String, &'static str)> {
    let types = [
        EventType::IepDue,
        EventType::ProgressReport,
        EventType::Meeting,
        EventType::Evaluation,
        EventType::Conference,
    ];
    let priorities = [Priority::High, Priority::Medium];

    types
        .iter()
        .map(|t| (format!("[{}]", t.as_str()), t.label()))
        .chain(
            priorities
                .iter()
                .map(|p| (priority_marker(*p).to_string(), p.label())),
        )
        .collect()
}

pub fn format_event_line(event: &ScheduleEvent) -> String {
    format!(
        "{} {} {} ({})",
        priority_marker(event.priority),
        format_short_date(event.date),
        event.title,
        event.time
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_month_title() {
        assert_eq!(format_month_title(CalendarMonth::new(2025, 1)), "January 2025");
        assert_eq!(format_month_title(CalendarMonth::new(2025, 13)), "2025-13");
    }

    #[test]
    fn test_format_short_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(format_short_date(date), "Mar 5");
    }

    #[test]
    fn test_legend_lists_types_then_priorities() {
        let legend = legend();
        assert_eq!(legend.len(), 7);
        assert_eq!(legend[0].1, "IEP Due Dates");
        assert_eq!(legend[5].1, "High Priority");
    }

    #[test]
    fn test_format_event_line() {
        let event = ScheduleEvent::new(
            1,
            "IEP Meeting - John Smith",
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            EventType::Meeting,
            Priority::High,
        )
        .with_time("10:00 AM");

        assert_eq!(format_event_line(&event), "! Sep 1 IEP Meeting - John Smith (10:00 AM)");
    }
}
