use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::{round_tenth, LEGEND_STROKE_WIDTH};
use crate::model::catalog::language_name;
use crate::model::contest::ContestPeriod;
use crate::model::contest_log::ContestLog;
use crate::time::days_between;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActivityPoint {
    pub date: NaiveDate, // serialized as "YYYY-MM-DD"
    pub value: f64,
    pub language_label: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LanguageSeries {
    pub language_code: String,
    pub points: Vec<ActivityPoint>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub stroke_width: u32,
}

/// Per-language daily series. Every series has one point per contest day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AggregatedSeries {
    pub series: Vec<LanguageSeries>,
    pub legend: Vec<LegendEntry>,
}

impl AggregatedSeries {
    pub fn points(&self, language_code: &str) -> Option<&[ActivityPoint]> {
        self.series
            .iter()
            .find(|s| s.language_code == language_code)
            .map(|s| s.points.as_slice())
    }

    pub fn language_codes(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.language_code.as_str()).collect()
    }
}

pub fn aggregate_reading_activity(logs: &[ContestLog], period: &ContestPeriod) -> AggregatedSeries {
    let days = days_between(period.start, period.end);
    let day_index: HashMap<NaiveDate, usize> = days.iter().enumerate().map(|(i, d)| (*d, i)).collect();

    let mut result = AggregatedSeries::default();
    let mut series_index: HashMap<&str, usize> = HashMap::new();

    // Pass 1: languages in first-seen order, each with a zero-filled series
    for log in logs {
        if series_index.contains_key(log.language_code.as_str()) {
            continue;
        }
        let label = language_name(&log.language_code);
        series_index.insert(log.language_code.as_str(), result.series.len());
        result.series.push(LanguageSeries {
            language_code: log.language_code.clone(),
            points: days
                .iter()
                .map(|date| ActivityPoint {
                    date: *date,
                    value: 0.0,
                    language_label: label.clone(),
                })
                .collect(),
        });
        result.legend.push(LegendEntry {
            label,
            stroke_width: LEGEND_STROKE_WIDTH,
        });
    }

    // Pass 2: accumulate; days outside the contest have no slot and are dropped
    for log in logs {
        let Some(&day) = day_index.get(&log.day()) else {
            continue;
        };
        let Some(&idx) = series_index.get(log.language_code.as_str()) else {
            continue;
        };
        result.series[idx].points[day].value += round_tenth(log.adjusted_amount);
    }

    result
}
