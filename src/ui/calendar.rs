// src/ui/calendar.rs

use chrono::Datelike;
use std::fmt::Write;

use super::{format_event_line, format_month_title, format_short_date, legend, WEEKDAYS};
use crate::calendar::{CalendarViews, GridCell, MonthGrid, ScheduleSummary};
use crate::models::ScheduleEvent;

const CELL_WIDTH: usize = 6;

pub fn render_summary(summary: &ScheduleSummary) -> String {
    format!(
        "IEP Due Dates: {}  |  Progress Reports: {}  |  IEP Meetings: {}  |  Evaluations: {}\n",
        summary.iep_due, summary.progress_reports, summary.meetings, summary.evaluations
    )
}

fn render_cell(cell: &GridCell<'_>) -> String {
    let today_mark = if cell.is_today { "*" } else { " " };
    let count = match cell.bucket.events.len() {
        0 => String::new(),
        n => format!("({})", n),
    };
    format!("{:>2}{}{:<3}", cell.bucket.date.day(), today_mark, count)
}

/// Week rows with per-day event counts, followed by the capped event list
/// for each day that has events.
pub fn render_month_grid(grid: &MonthGrid<'_>, max_per_day: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format_month_title(grid.month));

    for day in WEEKDAYS {
        let _ = write!(out, "{:<width$}", day, width = CELL_WIDTH);
    }
    out.push('\n');

    let blank = " ".repeat(CELL_WIDTH);
    let mut slots: Vec<String> = Vec::with_capacity(grid.weeks() * 7);
    slots.extend((0..grid.leading_blanks).map(|_| blank.clone()));
    slots.extend(grid.cells.iter().map(render_cell));
    slots.extend((0..grid.trailing_blanks).map(|_| blank.clone()));

    for week in slots.chunks(7) {
        let line: String = week.concat();
        let _ = writeln!(out, "{}", line.trim_end());
    }

    for cell in grid.cells.iter().filter(|c| !c.bucket.is_empty()) {
        let titles: Vec<&str> = cell
            .bucket
            .visible(max_per_day)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        let _ = write!(out, "  {}: {}", format_short_date(cell.bucket.date), titles.join("; "));
        let overflow = cell.bucket.overflow(max_per_day);
        if overflow > 0 {
            let _ = write!(out, "; +{} more", overflow);
        }
        out.push('\n');
    }

    out
}

pub fn render_upcoming(events: &[&ScheduleEvent]) -> String {
    if events.is_empty() {
        return "No upcoming events\n".to_string();
    }

    let mut out = String::new();
    for event in events {
        let _ = writeln!(out, "{}", format_event_line(event));
        if let Some(student) = &event.student_name {
            let _ = writeln!(out, "    Student: {}", student);
        }
        if let Some(description) = &event.description {
            let _ = writeln!(out, "    {}", description);
        }
    }
    out
}

pub fn render_dashboard(views: &CalendarViews<'_>, max_per_day: usize) -> String {
    let mut out = String::new();
    out.push_str(&render_summary(&views.summary));
    out.push('\n');
    out.push_str(&render_month_grid(&views.grid, max_per_day));
    out.push('\n');

    let _ = writeln!(out, "This Month");
    if views.month_events.is_empty() {
        let _ = writeln!(out, "No events this month");
    }
    for event in &views.month_events {
        let _ = writeln!(out, "{}", format_event_line(event));
    }
    out.push('\n');

    let _ = writeln!(out, "Upcoming Events");
    out.push_str(&render_upcoming(&views.upcoming));
    out.push('\n');

    let _ = writeln!(out, "Legend");
    for (marker, label) in legend() {
        let _ = writeln!(out, "  {:<18} {}", marker, label);
    }
    out
}
