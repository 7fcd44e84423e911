// file: src/models/student.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub iep_date: NaiveDate,
    pub last_progress: NaiveDate,
}

impl Student {
    pub fn new(name: impl Into<String>, iep_date: NaiveDate, last_progress: NaiveDate) -> Self {
        Self {
            name: name.into(),
            iep_date,
            last_progress,
        }
    }

    /// Presence check only; both anchor dates are already typed.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input("student name cannot be empty"));
        }
        Ok(())
    }
}
