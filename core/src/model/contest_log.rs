use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContestLog {
    pub id: u64,
    pub contest_id: u64,
    pub user_id: u64,
    pub user_display_name: Option<String>,
    pub language_code: String,
    pub medium_id: u32,
    pub amount: f64,
    // Weighted per medium upstream. This is what gets charted, never `amount`.
    pub adjusted_amount: f64,
    /// The API sends `""` for "no description"; that is always held as `None`.
    pub description: Option<String>,
    pub date: DateTime<Utc>,
}

// Shape returned by the contest API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawContestLog {
    pub id: u64,
    pub contest_id: u64,
    pub user_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_display_name: Option<String>,
    pub language_code: String,
    pub medium_id: u32,
    pub amount: f64,
    pub adjusted_amount: f64,
    #[serde(default)]
    pub description: String,
    pub date: String,
}

impl ContestLog {
    pub fn new(
        language_code: &str,
        medium_id: u32,
        amount: f64,
        adjusted_amount: f64,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            contest_id: 0,
            user_id: 0,
            user_display_name: None,
            language_code: language_code.to_string(),
            medium_id,
            amount,
            adjusted_amount,
            description: None,
            date,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = non_empty(description.to_string());
        self
    }

    /// Calendar day of the log, always taken in UTC so every client buckets the same way.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    pub fn from_raw(raw: RawContestLog) -> Result<Self> {
        let date = DateTime::parse_from_rfc3339(&raw.date)
            .map_err(|e| anyhow!("Invalid date '{}' on log {}: {}", raw.date, raw.id, e))?
            .with_timezone(&Utc);

        Ok(Self {
            id: raw.id,
            contest_id: raw.contest_id,
            user_id: raw.user_id,
            user_display_name: raw.user_display_name,
            language_code: raw.language_code,
            medium_id: raw.medium_id,
            amount: raw.amount,
            adjusted_amount: raw.adjusted_amount,
            description: non_empty(raw.description),
            date,
        })
    }

    pub fn to_raw(&self) -> RawContestLog {
        RawContestLog {
            id: self.id,
            contest_id: self.contest_id,
            user_id: self.user_id,
            user_display_name: self.user_display_name.clone(),
            language_code: self.language_code.clone(),
            medium_id: self.medium_id,
            amount: self.amount,
            adjusted_amount: self.adjusted_amount,
            description: self.description.clone().unwrap_or_default(),
            date: self.date.to_rfc3339(),
        }
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
