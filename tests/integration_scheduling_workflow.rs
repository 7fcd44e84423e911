use chrono::NaiveDate;
use iep_scheduler::export::to_ics;
use iep_scheduler::ui::calendar::render_dashboard;
use iep_scheduler::{
    AppError, CalendarMonth, EventDraft, EventType, Priority, Roster, SchedulerSettings, SchedulingMessage,
    SchedulingState,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn demo_state() -> SchedulingState {
    SchedulingState::new(date(2025, 1, 1), Roster::demo(), SchedulerSettings::default())
}

#[test]
fn test_navigate_and_add_event_workflow() {
    // 1. Start on January
    let state = demo_state();
    let events = state.events();
    let views = state.views(&events);
    assert_eq!(views.month, CalendarMonth::new(2025, 1));
    assert_eq!(views.month_events.len(), 5);

    // 2. Move to February and add a meeting there
    let state = state.update(SchedulingMessage::NextMonth).unwrap();
    let draft = EventDraft {
        time: Some("3:00 PM".to_string()),
        student_name: Some("Michael Davis".to_string()),
        description: Some("Review behavior plan".to_string()),
        ..EventDraft::new("Team Check-in", date(2025, 2, 19), EventType::Meeting, Priority::Low)
    };
    let state = state.update(SchedulingMessage::AddEvent(draft)).unwrap();

    // 3. The new event shares Feb 19 with Michael's generated IEP meeting
    let events = state.events();
    let views = state.views(&events);
    let cell = &views.grid.cells[18];
    assert_eq!(cell.bucket.date, date(2025, 2, 19));
    assert_eq!(cell.bucket.events.len(), 2);
    assert_eq!(cell.bucket.events[0].id, 4);

    // Low priority sorts after everything else in the month
    assert_eq!(views.month_events.last().unwrap().id, 4);

    // 4. Back to today's month
    let state = state.update(SchedulingMessage::JumpToToday).unwrap();
    assert_eq!(state.current_month, CalendarMonth::new(2025, 1));
    assert_eq!(state.manual_events.len(), 4);
}

#[test]
fn test_rejected_draft_leaves_state_alone() {
    let state = demo_state();
    let draft = EventDraft::new("", date(2025, 2, 1), EventType::Other, Priority::Low);

    let result = state.update(SchedulingMessage::AddEvent(draft));
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert_eq!(state, demo_state());
}

#[test]
fn test_roster_file_to_dashboard_and_ics() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "students": [
                {{ "name": "Jordan Lee", "iep_date": "2024-04-01", "last_progress": "2024-12-01" }}
            ],
            "events": [
                {{ "id": 1, "title": "Case Review", "date": "2025-04-02", "time": "8:00 AM",
                   "type": "other", "priority": "low" }}
            ]
        }}"#
    )
    .unwrap();

    let roster = Roster::load(file.path()).unwrap();
    let state = SchedulingState::new(date(2025, 1, 1), roster, SchedulerSettings::default())
        .update(SchedulingMessage::JumpToMonth(CalendarMonth::new(2025, 4)))
        .unwrap();

    let events = state.events();
    let views = state.views(&events);
    let april: Vec<i64> = views.month_events.iter().map(|e| e.id).collect();
    // Annual due 2025-04-01 (high), report 2025-03-01 not in April, Case Review (low)
    assert_eq!(april, vec![1000, 1]);

    let text = render_dashboard(&views, state.settings.max_events_per_day);
    assert!(text.contains("April 2025"));
    assert!(text.contains("IEP Annual Review Due - Jordan Lee"));

    let ics = to_ics(&events);
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), events.len());
}

#[test]
fn test_views_serialize_to_json() {
    let state = demo_state();
    let events = state.events();
    let views = state.views(&events);

    let json = serde_json::to_value(&views).unwrap();
    assert_eq!(json["month"]["month"], 1);
    assert_eq!(json["upcoming"].as_array().unwrap().len(), 5);
    assert_eq!(json["upcoming"][0]["type"], "progress-report");
    assert_eq!(json["summary"]["iep_due"], 5);
}
