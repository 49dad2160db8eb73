//! Dashboard report assembly.
//!
//! Runs all four aggregations fresh over the loaded datasets and derives a
//! short narrative from the resulting tables. Nothing is cached between
//! calls; the report is rebuilt from the raw rows every time.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::aggregate::group_stats::{season_stats, working_day_stats};
use crate::aggregate::hourly::hourly_user_averages;
use crate::aggregate::types::{
    HourlyUserAverage, SeasonStatsRow, WeatherTotal, WorkingDayStatsRow,
};
use crate::aggregate::weather::weather_totals;
use crate::records::{DailyRecord, HourlyRecord};

/// Complete dashboard summary: the four chart-ready tables plus a derived
/// narrative, serialized as `report.json`.
#[derive(Debug, Serialize)]
pub struct DashboardReport {
    pub schema_version: u8,
    pub generated_at: DateTime<Utc>,
    pub hourly_user_averages: Vec<HourlyUserAverage>,
    pub weather_totals: Vec<WeatherTotal>,
    pub season_stats: Vec<SeasonStatsRow>,
    pub working_day_stats: Vec<WorkingDayStatsRow>,
    pub conclusions: Vec<String>,
}

/// Builds the full report from the two loaded datasets.
///
/// # Errors
///
/// Returns an error if any daily record carries an unrecognized weather code.
pub fn build_report(
    hourly: &[HourlyRecord],
    daily: &[DailyRecord],
) -> Result<DashboardReport> {
    let hourly_averages = hourly_user_averages(hourly);
    let weather = weather_totals(daily)?;

    let seasons: Vec<SeasonStatsRow> = season_stats(hourly)
        .into_iter()
        .map(|(season, s)| SeasonStatsRow {
            season,
            mean_rentals: s.mean,
            median_rentals: s.median,
            total_rentals: s.sum,
        })
        .collect();

    let working_days: Vec<WorkingDayStatsRow> = working_day_stats(hourly)
        .into_iter()
        .map(|(workingday, s)| WorkingDayStatsRow {
            workingday,
            mean_rentals: s.mean,
            median_rentals: s.median,
            total_rentals: s.sum,
        })
        .collect();

    let conclusions = conclusions(&hourly_averages, &weather, &seasons, &working_days);

    Ok(DashboardReport {
        schema_version: 1,
        generated_at: Utc::now(),
        hourly_user_averages: hourly_averages,
        weather_totals: weather,
        season_stats: seasons,
        working_day_stats: working_days,
        conclusions,
    })
}

fn season_name(code: u8) -> &'static str {
    match code {
        1 => "spring",
        2 => "summer",
        3 => "fall",
        4 => "winter",
        _ => "unknown season",
    }
}

/// Derives the narrative sentences from the computed tables. Sentences whose
/// underlying table is empty are omitted.
fn conclusions(
    hourly_averages: &[HourlyUserAverage],
    weather: &[WeatherTotal],
    seasons: &[SeasonStatsRow],
    working_days: &[WorkingDayStatsRow],
) -> Vec<String> {
    let mut lines = Vec::new();

    let casual_peak = hourly_averages
        .iter()
        .max_by(|a, b| a.casual_mean.total_cmp(&b.casual_mean));
    let registered_peak = hourly_averages
        .iter()
        .max_by(|a, b| a.registered_mean.total_cmp(&b.registered_mean));
    if let (Some(casual), Some(registered)) = (casual_peak, registered_peak) {
        lines.push(format!(
            "Casual riding peaks at hour {} ({:.1} rentals on average); registered riding peaks at hour {} ({:.1}).",
            casual.hour, casual.casual_mean, registered.hour, registered.registered_mean
        ));
    }

    // weather_totals is sorted descending, so the head is the busiest bucket
    if let Some(top) = weather.first() {
        lines.push(format!(
            "Rentals are highest under '{}' conditions, with {} rentals in total.",
            top.condition, top.total_rentals
        ));
    }

    if let Some(top) = seasons
        .iter()
        .max_by(|a, b| a.mean_rentals.total_cmp(&b.mean_rentals))
    {
        lines.push(format!(
            "{} sees the highest average rentals ({:.1} per hour).",
            capitalize(season_name(top.season)),
            top.mean_rentals
        ));
    }

    let on = working_days.iter().find(|w| w.workingday == 1);
    let off = working_days.iter().find(|w| w.workingday == 0);
    if let (Some(on), Some(off)) = (on, off) {
        lines.push(format!(
            "Working days average {:.1} rentals per hour versus {:.1} on non-working days.",
            on.mean_rentals, off.mean_rentals
        ));
    }

    lines
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
