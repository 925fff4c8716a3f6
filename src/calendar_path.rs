use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};

/// Folder labels for one day: `2024`, `01-January`, `01-Monday`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarPath {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl CalendarPath {
    /// Labels in nesting order, year first.
    pub fn levels(&self) -> [&str; 3] {
        [&self.year, &self.month, &self.day]
    }

    pub fn relative(&self) -> PathBuf {
        self.levels().into_iter().collect()
    }
}

impl From<NaiveDate> for CalendarPath {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: format!("{:04}", date.year()),
            month: date.format("%m-%B").to_string(),
            day: date.format("%d-%A").to_string(),
        }
    }
}
