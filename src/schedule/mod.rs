// Recurring IEP deadline generation
// Derives annual, meeting, quarterly and triennial events from each student's anchor dates

use crate::models::{EventType, Priority, ScheduleEvent, SchedulerSettings, Student};
use chrono::{Datelike, Days, Months, NaiveDate};
use log::{debug, warn};

pub const PROGRESS_REPORTS_PER_YEAR: u32 = 4;
pub const MONTHS_PER_QUARTER: u32 = 3;

/// Anchor IEP date one calendar year later, clamped to month end.
pub fn annual_iep_due(iep_date: NaiveDate) -> Option<NaiveDate> {
    iep_date.checked_add_months(Months::new(12))
}

pub fn pre_iep_meeting_date(annual_due: NaiveDate, lead_days: i64) -> Option<NaiveDate> {
    shift_days(annual_due, -lead_days)
}

/// Report dates at 0, 3, 6 and 9 months after the last report, unfiltered.
pub fn quarterly_report_dates(last_progress: NaiveDate) -> Vec<NaiveDate> {
    (0..PROGRESS_REPORTS_PER_YEAR)
        .filter_map(|quarter| {
            last_progress.checked_add_months(Months::new(quarter * MONTHS_PER_QUARTER))
        })
        .collect()
}

/// The three-year re-evaluation date before any lead time is applied.
pub fn triennial_anchor(iep_date: NaiveDate) -> Option<NaiveDate> {
    iep_date.checked_add_months(Months::new(36))
}

/// Evaluation date, or `None` unless the triennial anchor falls in the year after `today`.
pub fn triennial_evaluation_date(
    iep_date: NaiveDate,
    today: NaiveDate,
    lead_days: i64,
) -> Option<NaiveDate> {
    let anchor = triennial_anchor(iep_date)?;
    if anchor.year() != today.year() + 1 {
        return None;
    }
    shift_days(anchor, -lead_days)
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

struct IdSequence(i64);

impl IdSequence {
    fn next(&mut self) -> i64 {
        let id = self.0;
        self.0 += 1;
        id
    }
}

/// Derive every automatic event for the roster as of `today`.
///
/// Events come out student by student in rule order (annual due, meeting,
/// progress reports, triennial). Ids are sequential from
/// `settings.first_generated_id` and only consumed by emitted events.
pub fn generate_automatic_events(
    students: &[Student],
    today: NaiveDate,
    settings: &SchedulerSettings,
) -> Vec<ScheduleEvent> {
    let mut events = Vec::new();
    let mut ids = IdSequence(settings.first_generated_id);

    for student in students {
        generate_for_student(student, today, settings, &mut ids, &mut events);
    }

    debug!(
        "Generated {} automatic events for {} students as of {}",
        events.len(),
        students.len(),
        today
    );
    events
}

fn generate_for_student(
    student: &Student,
    today: NaiveDate,
    settings: &SchedulerSettings,
    ids: &mut IdSequence,
    events: &mut Vec<ScheduleEvent>,
) {
    let name = student.name.as_str();

    match annual_iep_due(student.iep_date) {
        Some(annual_due) => {
            events.push(
                ScheduleEvent::new(
                    ids.next(),
                    format!("IEP Annual Review Due - {}", name),
                    annual_due,
                    EventType::IepDue,
                    Priority::High,
                )
                .with_time("All Day")
                .with_student(name)
                .with_description("Annual IEP review and goal updates required"),
            );

            match pre_iep_meeting_date(annual_due, settings.pre_meeting_lead_days) {
                Some(meeting) => events.push(
                    ScheduleEvent::new(
                        ids.next(),
                        format!("IEP Meeting - {}", name),
                        meeting,
                        EventType::Meeting,
                        Priority::High,
                    )
                    .with_time("10:00 AM")
                    .with_student(name)
                    .with_description("Annual IEP review meeting with team and parents"),
                ),
                None => warn!("Skipping IEP meeting: date out of range for one student"),
            }
        }
        None => warn!("Skipping annual IEP review: date out of range for one student"),
    }

    for report_date in quarterly_report_dates(student.last_progress) {
        if report_date > today {
            events.push(
                ScheduleEvent::new(
                    ids.next(),
                    format!("Progress Report Due - {}", name),
                    report_date,
                    EventType::ProgressReport,
                    Priority::Medium,
                )
                .with_time("End of Day")
                .with_student(name)
                .with_description("Quarterly progress report on IEP goals"),
            );
        }
    }

    if let Some(evaluation) =
        triennial_evaluation_date(student.iep_date, today, settings.triennial_lead_days)
    {
        events.push(
            ScheduleEvent::new(
                ids.next(),
                format!("Triennial Evaluation Due - {}", name),
                evaluation,
                EventType::Evaluation,
                Priority::High,
            )
            .with_time("All Day")
            .with_student(name)
            .with_description("Three-year comprehensive evaluation required"),
        );
    }
}

/// Manual events first, generated events after. No de-duplication.
pub fn merge_events(manual: &[ScheduleEvent], generated: Vec<ScheduleEvent>) -> Vec<ScheduleEvent> {
    let mut merged = Vec::with_capacity(manual.len() + generated.len());
    merged.extend_from_slice(manual);
    merged.extend(generated);
    merged
}
