use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Language code of the ranking that sums every language of a registration.
pub const GLOBAL_LANGUAGE_CODE: &str = "GLO";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Ranking {
    pub contest_id: u64,
    pub user_id: u64,
    pub user_display_name: String,
    pub language_code: String,
    pub amount: f64,
}

impl Ranking {
    pub fn is_global(&self) -> bool {
        self.language_code == GLOBAL_LANGUAGE_CODE
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegistrationAmount {
    pub language_code: String,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegistrationOverview {
    pub contest_id: u64,
    pub user_id: u64,
    pub user_display_name: String,
    pub registrations: Vec<RegistrationAmount>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RankingRegistration {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub contest_id: u64,
    pub languages: Vec<String>,
}
