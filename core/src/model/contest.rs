use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive date range a contest's charts are laid out over.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ContestPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ContestPeriod {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Contest {
    pub id: u64,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub open: bool,
}

impl Contest {
    pub fn period(&self) -> ContestPeriod {
        ContestPeriod::new(self.start, self.end)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub display_name: String,
}
