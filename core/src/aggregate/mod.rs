pub mod activity;
pub mod media;
pub mod overview;

pub use activity::{aggregate_reading_activity, ActivityPoint, AggregatedSeries, LanguageSeries, LegendEntry};
pub use media::{aggregate_media_distribution, MediumDistribution, MediumEntry, MediumLegendEntry};
pub use overview::{rankings_to_registration_overview, RankingError};

/// Line/bar width handed to the chart legend.
pub const LEGEND_STROKE_WIDTH: u32 = 10;

/// Rounds a charted amount to one decimal place.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
