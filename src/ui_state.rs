//! Scheduling screen state
//!
//! The screen's state is an immutable snapshot. Every user action produces
//! a new snapshot through [`SchedulingState::update`], and the displayed
//! events are recomputed from the snapshot on demand.

use chrono::NaiveDate;
use log::{info, warn};

use crate::calendar::{self, CalendarMonth, CalendarViews};
use crate::error::{AppError, AppResult};
use crate::messages::{EventDraft, SchedulingMessage};
use crate::models::{Roster, ScheduleEvent, SchedulerSettings, Student};
use crate::schedule;
use crate::utils::{normalize_optional, normalize_title};

#[derive(Debug, Clone, PartialEq)]
pub struct SchedulingState {
    /// Reference date for every "future" and "upcoming" decision
    pub today: NaiveDate,

    /// Month shown in the calendar grid
    pub current_month: CalendarMonth,

    pub students: Vec<Student>,

    /// Manually entered events, in entry order
    pub manual_events: Vec<ScheduleEvent>,

    pub settings: SchedulerSettings,
}

impl SchedulingState {
    pub fn new(today: NaiveDate, roster: Roster, settings: SchedulerSettings) -> Self {
        Self {
            today,
            current_month: CalendarMonth::from_date(today),
            students: roster.students,
            manual_events: roster.events,
            settings,
        }
    }

    /// Apply `message` and return the resulting state. `self` is untouched,
    /// including when the message is rejected.
    pub fn update(&self, message: SchedulingMessage) -> AppResult<Self> {
        let mut next = self.clone();
        match message {
            SchedulingMessage::NextMonth => next.current_month = self.current_month.next(),
            SchedulingMessage::PreviousMonth => next.current_month = self.current_month.previous(),
            SchedulingMessage::JumpToMonth(month) => next.current_month = month,
            SchedulingMessage::JumpToToday => {
                next.current_month = CalendarMonth::from_date(self.today)
            }
            SchedulingMessage::AddEvent(draft) => {
                let event = self.event_from_draft(draft).map_err(|e| {
                    warn!("Rejected new event: {}", e.to_safe_string());
                    e
                })?;
                info!("Added manual event {} on {}", event.id, event.date);
                next.manual_events.push(event);
            }
        }
        Ok(next)
    }

    fn next_manual_id(&self) -> i64 {
        self.manual_events.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    fn event_from_draft(&self, draft: EventDraft) -> AppResult<ScheduleEvent> {
        let title = normalize_title(&draft.title);
        if title.is_empty() {
            return Err(AppError::invalid_input("event title cannot be empty"));
        }

        Ok(ScheduleEvent {
            id: self.next_manual_id(),
            title,
            date: draft.date,
            time: normalize_optional(draft.time).unwrap_or_else(|| "All Day".to_string()),
            event_type: draft.event_type,
            student_name: normalize_optional(draft.student_name),
            priority: draft.priority,
            description: normalize_optional(draft.description),
        })
    }

    /// Manual events followed by events generated fresh from the roster.
    pub fn events(&self) -> Vec<ScheduleEvent> {
        let generated = schedule::generate_automatic_events(&self.students, self.today, &self.settings);
        schedule::merge_events(&self.manual_events, generated)
    }

    pub fn views<'a>(&self, events: &'a [ScheduleEvent]) -> CalendarViews<'a> {
        calendar::build_views(events, self.current_month, self.today, &self.settings)
    }
}
