use chrono::NaiveDate;

use crate::calendar::CalendarMonth;
use crate::models::{EventType, Priority};

/// Fields of the "New Event" form before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub event_type: EventType,
    pub student_name: Option<String>,
    pub priority: Priority,
    pub description: Option<String>,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, date: NaiveDate, event_type: EventType, priority: Priority) -> Self {
        Self {
            title: title.into(),
            date,
            time: None,
            event_type,
            student_name: None,
            priority,
            description: None,
        }
    }
}

/// Actions the scheduling screen can apply to its state.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedulingMessage {
    // ===== Navigation =====
    /// Show the following month
    NextMonth,
    /// Show the preceding month
    PreviousMonth,
    /// Show an arbitrary month
    JumpToMonth(CalendarMonth),
    /// Return to the month containing today
    JumpToToday,

    // ===== Event Management =====
    /// Add a manually entered event
    AddEvent(EventDraft),
}
