// IEP Scheduler Library
// Derives IEP deadlines from a student roster and aggregates them into calendar views

pub mod calendar;
pub mod config;
pub mod error;
pub mod export;
pub mod messages;
pub mod models;
pub mod schedule;
pub mod ui;
pub mod ui_state;
pub mod utils;

// Re-export commonly used types
pub use calendar::{build_views, CalendarMonth, CalendarViews, DayBucket, MonthGrid, ScheduleSummary};
pub use error::{AppError, AppResult};
pub use messages::{EventDraft, SchedulingMessage};
pub use models::*;
pub use schedule::{generate_automatic_events, merge_events};
pub use ui_state::SchedulingState;
