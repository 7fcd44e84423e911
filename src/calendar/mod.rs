// Calendar aggregation
// Filters and orders a merged event list into the month, grid, upcoming and summary views

use chrono::{Datelike, NaiveDate};
use log::debug;
use serde::Serialize;

use crate::models::{EventType, ScheduleEvent, SchedulerSettings};

pub mod month;

pub use month::CalendarMonth;

/// Events in `month`, highest priority first, then earliest date.
/// Ties keep their input order.
pub fn month_events(events: &[ScheduleEvent], month: CalendarMonth) -> Vec<&ScheduleEvent> {
    let mut selected: Vec<&ScheduleEvent> = events
        .iter()
        .filter(|event| event.is_in_month(month.year, month.month))
        .collect();

    // sort_by is stable
    selected.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.date.cmp(&b.date)));
    selected
}

/// All events on exactly `date`, in input order.
pub fn events_on_day(events: &[ScheduleEvent], date: NaiveDate) -> Vec<&ScheduleEvent> {
    events.iter().filter(|event| event.is_on(date)).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct DayBucket<'a> {
    pub date: NaiveDate,
    pub events: Vec<&'a ScheduleEvent>,
}

impl<'a> DayBucket<'a> {
    pub fn visible(&self, cap: usize) -> &[&'a ScheduleEvent] {
        &self.events[..self.events.len().min(cap)]
    }

    /// Number of events hidden behind the "+N more" marker.
    pub fn overflow(&self, cap: usize) -> usize {
        self.events.len().saturating_sub(cap)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// One bucket per calendar day of `month`, empty days included.
pub fn day_buckets(events: &[ScheduleEvent], month: CalendarMonth) -> Vec<DayBucket<'_>> {
    month
        .days()
        .into_iter()
        .map(|date| DayBucket {
            date,
            events: events_on_day(events, date),
        })
        .collect()
}

/// Events on or after `today` across all months, earliest first, at most `limit`.
pub fn upcoming_events(
    events: &[ScheduleEvent],
    today: NaiveDate,
    limit: usize,
) -> Vec<&ScheduleEvent> {
    let mut upcoming: Vec<&ScheduleEvent> = events
        .iter()
        .filter(|event| event.is_upcoming(today))
        .collect();
    upcoming.sort_by_key(|event| event.date);
    upcoming.truncate(limit);
    upcoming
}

/// Counts behind the four summary cards. Only events on or after `today` count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleSummary {
    pub iep_due: usize,
    pub progress_reports: usize,
    pub meetings: usize,
    pub evaluations: usize,
}

pub fn summarize(events: &[ScheduleEvent], today: NaiveDate) -> ScheduleSummary {
    events
        .iter()
        .filter(|event| event.is_upcoming(today))
        .fold(ScheduleSummary::default(), |mut summary, event| {
            match event.event_type {
                EventType::IepDue => summary.iep_due += 1,
                EventType::ProgressReport => summary.progress_reports += 1,
                EventType::Meeting => summary.meetings += 1,
                EventType::Evaluation => summary.evaluations += 1,
                EventType::Conference | EventType::Other => {}
            }
            summary
        })
}

#[derive(Debug, Clone, Serialize)]
pub struct GridCell<'a> {
    pub bucket: DayBucket<'a>,
    pub is_today: bool,
}

/// Sunday-first month layout with blank padding cells on both ends.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid<'a> {
    pub month: CalendarMonth,
    pub leading_blanks: u32,
    pub cells: Vec<GridCell<'a>>,
    pub trailing_blanks: u32,
}

impl MonthGrid<'_> {
    /// Grid rows of seven, counting padding cells.
    pub fn weeks(&self) -> usize {
        let total = self.leading_blanks as usize + self.cells.len() + self.trailing_blanks as usize;
        total / 7
    }
}

pub fn month_grid(
    events: &[ScheduleEvent],
    month: CalendarMonth,
    today: NaiveDate,
) -> MonthGrid<'_> {
    let leading_blanks = month
        .first_day()
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0);
    let trailing_blanks = month
        .last_day()
        .map(|d| 6 - d.weekday().num_days_from_sunday())
        .unwrap_or(0);

    let cells = day_buckets(events, month)
        .into_iter()
        .map(|bucket| GridCell {
            is_today: bucket.date == today,
            bucket,
        })
        .collect();

    MonthGrid {
        month,
        leading_blanks,
        cells,
        trailing_blanks,
    }
}

/// Everything the scheduling screen shows for one month.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarViews<'a> {
    pub today: NaiveDate,
    pub month: CalendarMonth,
    pub summary: ScheduleSummary,
    pub month_events: Vec<&'a ScheduleEvent>,
    pub grid: MonthGrid<'a>,
    pub upcoming: Vec<&'a ScheduleEvent>,
}

pub fn build_views<'a>(
    events: &'a [ScheduleEvent],
    month: CalendarMonth,
    today: NaiveDate,
    settings: &SchedulerSettings,
) -> CalendarViews<'a> {
    let views = CalendarViews {
        today,
        month,
        summary: summarize(events, today),
        month_events: month_events(events, month),
        grid: month_grid(events, month, today),
        upcoming: upcoming_events(events, today, settings.upcoming_limit),
    };
    debug!(
        "Built views for {}: {} month events, {} upcoming",
        month,
        views.month_events.len(),
        views.upcoming.len()
    );
    views
}
