//! Input data model for the two bike-share datasets.
//!
//! Records are deserialized straight from the cleaned CSV exports; columns
//! the aggregation core does not consume (temperature, humidity, wind speed)
//! are absent from the structs and skipped during deserialization.

use anyhow::bail;
use chrono::NaiveDate;
use serde::Deserialize;

/// One row per hour of bike-share operation.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyRecord {
    #[serde(rename = "hr")]
    pub hour: u8,
    pub season: u8,
    pub workingday: u8,
    pub casual: u32,
    pub registered: u32,
    pub cnt: u32,
}

impl HourlyRecord {
    /// Builds a record with `cnt` derived as `casual + registered`.
    pub fn new(hour: u8, season: u8, workingday: u8, casual: u32, registered: u32) -> Self {
        Self {
            hour,
            season,
            workingday,
            casual,
            registered,
            cnt: casual + registered,
        }
    }
}

/// One row per calendar day.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyRecord {
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    pub weathersit: u8,
    pub cnt: u32,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, weathersit: u8, cnt: u32) -> Self {
        Self {
            date,
            weathersit,
            cnt,
        }
    }
}

/// The four documented weather-condition buckets.
///
/// Codes outside 1–4 are rejected rather than bucketed: the datasets are
/// pre-cleaned, so an out-of-range code means the input file is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WeatherCondition {
    Clear,
    Mist,
    LightPrecipitation,
    HeavyPrecipitation,
}

impl WeatherCondition {
    /// Maps a `weathersit` code to its condition.
    ///
    /// # Errors
    ///
    /// Returns an error naming the code if it is outside 1–4.
    pub fn from_code(code: u8) -> anyhow::Result<Self> {
        match code {
            1 => Ok(WeatherCondition::Clear),
            2 => Ok(WeatherCondition::Mist),
            3 => Ok(WeatherCondition::LightPrecipitation),
            4 => Ok(WeatherCondition::HeavyPrecipitation),
            _ => bail!("unrecognized weathersit code: {code}"),
        }
    }

    /// The descriptive label used in summary tables and charts.
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear/Few clouds",
            WeatherCondition::Mist => "Mist/Cloudy",
            WeatherCondition::LightPrecipitation => "Light Snow/Rain",
            WeatherCondition::HeavyPrecipitation => "Heavy Rain/Ice Pallets",
        }
    }
}
