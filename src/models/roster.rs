// file: src/models/roster.rs
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};

use super::event::{EventType, Priority, ScheduleEvent};
use super::student::Student;
use crate::error::{AppError, AppResult};

/// Caseload snapshot handed to the scheduling screen: students plus any
/// manually entered events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub students: Vec<Student>,
    #[serde(default)]
    pub events: Vec<ScheduleEvent>,
}

impl Roster {
    pub fn new(students: Vec<Student>, events: Vec<ScheduleEvent>) -> Self {
        Self { students, events }
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let roster: Roster = serde_json::from_str(json)?;
        roster.validate()?;
        Ok(roster)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::not_found(format!("roster file {}", path.display())));
        }
        let raw = fs::read_to_string(path)?;
        let roster = Self::from_json_str(&raw)?;
        info!(
            "Loaded roster with {} students and {} manual events",
            roster.students.len(),
            roster.events.len()
        );
        Ok(roster)
    }

    /// Rejects blank names and titles. Dates are checked by deserialization.
    pub fn validate(&self) -> AppResult<()> {
        for student in &self.students {
            student.validate()?;
        }
        for event in &self.events {
            if event.title.trim().is_empty() {
                return Err(AppError::invalid_input(format!(
                    "event {} has an empty title",
                    event.id
                )));
            }
        }
        Ok(())
    }

    /// Caseload used by the dashboard when no roster file is given.
    pub fn demo() -> Self {
        let students = vec![
            Student::new("John Smith", ymd(2024, 9, 15), ymd(2024, 12, 15)),
            Student::new("Emily Johnson", ymd(2024, 6, 10), ymd(2024, 11, 10)),
            Student::new("Michael Davis", ymd(2024, 3, 5), ymd(2024, 10, 5)),
            Student::new("Sarah Wilson", ymd(2024, 8, 20), ymd(2025, 1, 20)),
            Student::new("David Thompson", ymd(2024, 11, 30), ymd(2024, 9, 30)),
        ];

        let events = vec![
            ScheduleEvent::new(1, "IEP Team Training", ymd(2025, 1, 15), EventType::Other, Priority::Medium)
                .with_time("9:00 AM")
                .with_description("Professional development on new IEP procedures"),
            ScheduleEvent::new(
                2,
                "Parent Conference - Emily Johnson",
                ymd(2025, 1, 22),
                EventType::Conference,
                Priority::Medium,
            )
            .with_time("2:30 PM")
            .with_student("Emily Johnson")
            .with_description("Quarterly parent conference"),
            ScheduleEvent::new(
                3,
                "Behavior Assessment - Michael Davis",
                ymd(2025, 1, 28),
                EventType::Evaluation,
                Priority::High,
            )
            .with_time("1:00 PM")
            .with_student("Michael Davis")
            .with_description("Functional behavior assessment"),
        ];

        Self { students, events }
    }
}

// Literal dates in `demo` are all valid.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
