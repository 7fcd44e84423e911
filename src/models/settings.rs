// file: src/models/settings.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    pub upcoming_limit: usize,      // entries in the upcoming list
    pub max_events_per_day: usize,  // shown per grid cell before "+N more"
    pub pre_meeting_lead_days: i64, // meeting before the annual due date
    pub triennial_lead_days: i64,   // evaluation before the triennial date
    pub first_generated_id: i64,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            upcoming_limit: 5,
            max_events_per_day: 2,
            pre_meeting_lead_days: 14,
            triennial_lead_days: 30,
            first_generated_id: 1000,
        }
    }
}
