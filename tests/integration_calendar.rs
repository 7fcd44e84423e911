use chrono::NaiveDate;
use iep_scheduler::calendar::{day_buckets, events_on_day, month_events, summarize, upcoming_events};
use iep_scheduler::{
    build_views, generate_automatic_events, merge_events, CalendarMonth, EventType, Priority, Roster,
    ScheduleEvent, ScheduleSummary, SchedulerSettings,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn demo_events(today: NaiveDate) -> Vec<ScheduleEvent> {
    let roster = Roster::demo();
    let generated = generate_automatic_events(&roster.students, today, &SchedulerSettings::default());
    merge_events(&roster.events, generated)
}

fn ids(events: &[&ScheduleEvent]) -> Vec<i64> {
    events.iter().map(|e| e.id).collect()
}

#[test]
fn test_january_month_view() {
    let events = demo_events(date(2025, 1, 1));
    assert_eq!(events.len(), 28);

    let january = month_events(&events, CalendarMonth::new(2025, 1));
    // High first, then medium by date.
    assert_eq!(ids(&january), vec![3, 1012, 1, 1017, 2]);
}

#[test]
fn test_month_view_membership() {
    let events = demo_events(date(2025, 1, 1));
    for month in (1..=12).map(|m| CalendarMonth::new(2025, m)) {
        let selected = month_events(&events, month);
        let expected = events.iter().filter(|e| month.contains(e.date)).count();
        assert_eq!(selected.len(), expected);
        assert!(selected.iter().all(|e| month.contains(e.date)));
    }
}

#[test]
fn test_upcoming_view() {
    let events = demo_events(date(2025, 1, 1));
    let upcoming = upcoming_events(&events, date(2025, 1, 1), 5);
    assert_eq!(ids(&upcoming), vec![1012, 1, 1017, 2, 3]);

    let later = upcoming_events(&events, date(2025, 12, 1), 5);
    assert!(later.is_empty());
}

#[test]
fn test_upcoming_never_exceeds_limit_and_is_sorted() {
    let events = demo_events(date(2025, 1, 1));
    for limit in [0, 1, 5, 50] {
        let upcoming = upcoming_events(&events, date(2025, 2, 1), limit);
        assert!(upcoming.len() <= limit);
        assert!(upcoming.windows(2).all(|w| w[0].date <= w[1].date));
    }
}

#[test]
fn test_day_buckets_match_exact_day() {
    let events = demo_events(date(2025, 1, 1));
    let september = day_buckets(&events, CalendarMonth::new(2025, 9));
    assert_eq!(september.len(), 30);

    // John's annual due and his last quarterly report share Sep 15.
    let sep_15 = &september[14];
    assert_eq!(ids(&sep_15.events), vec![1000, 1004]);
    assert_eq!(sep_15.overflow(2), 0);
    assert_eq!(sep_15.overflow(1), 1);

    let total: usize = september.iter().map(|b| b.events.len()).sum();
    assert_eq!(total, month_events(&events, CalendarMonth::new(2025, 9)).len());
}

#[test]
fn test_events_on_day_ignores_other_years() {
    let events = vec![
        ScheduleEvent::new(1, "This year", date(2025, 3, 5), EventType::Other, Priority::Low),
        ScheduleEvent::new(2, "Last year", date(2024, 3, 5), EventType::Other, Priority::Low),
    ];
    assert_eq!(ids(&events_on_day(&events, date(2025, 3, 5))), vec![1]);
}

#[test]
fn test_summary_counts() {
    let events = demo_events(date(2025, 1, 1));
    assert_eq!(
        summarize(&events, date(2025, 1, 1)),
        ScheduleSummary {
            iep_due: 5,
            progress_reports: 15,
            meetings: 5,
            evaluations: 1,
        }
    );
}

#[test]
fn test_views_borrow_without_mutation() {
    let events = demo_events(date(2025, 1, 1));
    let before = events.clone();

    let views = build_views(&events, CalendarMonth::new(2025, 1), date(2025, 1, 1), &SchedulerSettings::default());
    assert_eq!(views.upcoming.len(), 5);
    assert!(std::ptr::eq(views.month_events[0], &events[2]));
    assert_eq!(views.grid.leading_blanks, 3);

    drop(views);
    assert_eq!(events, before);
}
