//! Output table row types produced by the aggregation core.

use serde::Serialize;

/// Mean rider counts for a single hour of the day, across all days present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyUserAverage {
    pub hour: u8,
    pub casual_mean: f64,
    pub registered_mean: f64,
}

/// Total rentals recorded under one weather condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherTotal {
    pub condition: String,
    pub total_rentals: u64,
}

/// Mean, median, and sum of rental counts within one group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupSummary {
    pub mean: f64,
    pub median: f64,
    pub sum: u64,
}

/// Flat row form of [`GroupSummary`] keyed by season code, for CSV output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonStatsRow {
    pub season: u8,
    pub mean_rentals: f64,
    pub median_rentals: f64,
    pub total_rentals: u64,
}

/// Flat row form of [`GroupSummary`] keyed by working-day code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkingDayStatsRow {
    pub workingday: u8,
    pub mean_rentals: f64,
    pub median_rentals: f64,
    pub total_rentals: u64,
}
