use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::aggregate::LEGEND_STROKE_WIDTH;
use crate::model::catalog::{graph_color, medium_description};
use crate::model::contest_log::ContestLog;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MediumEntry {
    pub medium_id: u32,
    pub amount: f64,
    pub medium_label: String,
    pub color: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MediumLegendEntry {
    pub label: String,
    pub color: String,
    pub stroke_width: u32,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MediumDistribution {
    pub entries: Vec<MediumEntry>,
    pub legend: Vec<MediumLegendEntry>,
    pub total_amount: f64,
}

pub fn aggregate_media_distribution(logs: &[ContestLog]) -> MediumDistribution {
    // (medium_id, summed amount) in first-seen order
    let mut grouped: Vec<(u32, f64)> = Vec::new();
    let mut index: HashMap<u32, usize> = HashMap::new();
    let mut total = 0.0;

    for log in logs {
        let idx = *index.entry(log.medium_id).or_insert_with(|| {
            grouped.push((log.medium_id, 0.0));
            grouped.len() - 1
        });
        grouped[idx].1 += log.adjusted_amount;
        total += log.adjusted_amount;
    }

    // Colors follow grouping order so a medium keeps its color whatever its rank.
    let mut entries: Vec<MediumEntry> = grouped
        .into_iter()
        .enumerate()
        .map(|(i, (medium_id, amount))| MediumEntry {
            medium_id,
            amount,
            medium_label: medium_description(medium_id),
            color: graph_color(i).to_string(),
        })
        .collect();

    // sort_by is stable: ties keep first-seen order
    entries.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(std::cmp::Ordering::Equal));

    let legend = entries
        .iter()
        .map(|e| MediumLegendEntry {
            label: e.medium_label.clone(),
            color: e.color.clone(),
            stroke_width: LEGEND_STROKE_WIDTH,
            amount: e.amount,
        })
        .collect();

    MediumDistribution {
        entries,
        legend,
        total_amount: total,
    }
}
