use chrono::{DateTime, Utc};

use crate::model::catalog::language_by_code;
use crate::model::contest::{Contest, User};
use crate::model::ranking::RankingRegistration;

pub fn validate_amount(input: &str) -> bool {
    match input.trim().parse::<f64>() {
        Ok(v) => v.is_finite() && v > 0.0,
        Err(_) => false,
    }
}

pub fn validate_language_code(code: &str) -> bool {
    !code.is_empty() && language_by_code(code).is_some()
}

pub fn is_contest_active(contest: &Contest, now: DateTime<Utc>) -> bool {
    contest.open && contest.end > now
}

pub fn is_registered_for_contest(registration: Option<&RankingRegistration>, contest: &Contest) -> bool {
    registration.map(|r| r.contest_id == contest.id).unwrap_or(false)
}

pub fn can_join_contest(
    user: Option<&User>,
    registration: Option<&RankingRegistration>,
    contest: &Contest,
    now: DateTime<Utc>,
) -> bool {
    user.is_some() && is_contest_active(contest, now) && !is_registered_for_contest(registration, contest)
}
