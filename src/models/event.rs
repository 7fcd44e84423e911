// file: src/models/event.rs
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    IepDue,
    Meeting,
    ProgressReport,
    Evaluation,
    Conference,
    Other,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::IepDue => "iep-due",
            EventType::Meeting => "meeting",
            EventType::ProgressReport => "progress-report",
            EventType::Evaluation => "evaluation",
            EventType::Conference => "conference",
            EventType::Other => "other",
        }
    }

    /// Legend wording shown next to each event colour.
    pub fn label(&self) -> &'static str {
        match self {
            EventType::IepDue => "IEP Due Dates",
            EventType::Meeting => "IEP Meetings",
            EventType::ProgressReport => "Progress Reports",
            EventType::Evaluation => "Evaluations",
            EventType::Conference => "Conferences",
            EventType::Other => "Other",
        }
    }
}

/// Variant order is the sort order: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low Priority",
            Priority::Medium => "Medium Priority",
            Priority::High => "High Priority",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub time: String, // display only, e.g. "All Day" or "10:00 AM"
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ScheduleEvent {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        date: NaiveDate,
        event_type: EventType,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            date,
            time: "All Day".to_string(),
            event_type,
            student_name: None,
            priority,
            description: None,
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn with_student(mut self, name: impl Into<String>) -> Self {
        self.student_name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }

    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today
    }
}
