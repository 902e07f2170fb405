use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Stable identifier of a calendar day, used as chart x-value and bucket key.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Every UTC calendar day from the day of `start` to the day of `end`, inclusive.
pub fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<NaiveDate> {
    let first = start.date_naive();
    let last = end.date_naive();

    let mut days = Vec::new();
    let mut current = first;
    while current <= last {
        days.push(current);
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    days
}

/// Parses a command line date. Everything is resolved in UTC.
pub fn parse_utc_date(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("Empty date string"));
    }

    let today = Utc::now().date_naive();

    // 1. Reserved keywords
    match input.to_lowercase().as_str() {
        "today" | "tod" => return start_of_day(today),
        "yesterday" | "yes" => return start_of_day(today - Duration::days(1)),
        _ => {}
    }

    // 2. Relative format (+Nd, -Nd, +Nw, -Nw)
    if input.starts_with('+') || input.starts_with('-') {
        let (unit_at, unit) = input
            .char_indices()
            .last()
            .ok_or_else(|| anyhow!("Invalid relative format: {}", input))?;
        let count: i64 = input[..unit_at]
            .parse()
            .map_err(|_| anyhow!("Invalid relative format: {}", input))?;
        let delta = match unit {
            'd' => Duration::try_days(count),
            'w' => Duration::try_weeks(count),
            _ => return Err(anyhow!("Unknown unit in relative date: {}", unit)),
        }
        .ok_or_else(|| anyhow!("Relative date out of range: {}", input))?;
        let target = today
            .checked_add_signed(delta)
            .ok_or_else(|| anyhow!("Relative date out of range: {}", input))?;
        return start_of_day(target);
    }

    // 3. Standard formats
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return start_of_day(d);
    }

    Err(anyhow!("Could not parse date: {}", input))
}

fn start_of_day(date: NaiveDate) -> Result<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .ok_or_else(|| anyhow!("Invalid day: {}", date))
}
