// Declare modules
pub mod event;
pub mod roster;
pub mod settings;
pub mod student;

// Re-export so callers can `use crate::models::ScheduleEvent` directly.
pub use event::{EventType, Priority, ScheduleEvent};
pub use roster::Roster;
pub use settings::SchedulerSettings;
pub use student::Student;
