//! CSV ingestion for the two cleaned datasets.
//!
//! Each dataset is read once at startup and handed to the aggregation core
//! by reference. Columns the record structs do not name are skipped; a row
//! that fails to deserialize aborts the load with its position in the file.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::records::{DailyRecord, HourlyRecord};

/// Loads the hourly rental dataset from a CSV file.
pub fn load_hourly_records(path: &Path) -> Result<Vec<HourlyRecord>> {
    let rows = read_rows(path)?;
    debug!(path = %path.display(), rows = rows.len(), "Hourly dataset loaded");
    Ok(rows)
}

/// Loads the daily rental dataset from a CSV file.
pub fn load_daily_records(path: &Path) -> Result<Vec<DailyRecord>> {
    let rows = read_rows(path)?;
    debug!(path = %path.display(), rows = rows.len(), "Daily dataset loaded");
    Ok(rows)
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut rdr = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        // csv errors carry the record position, so context only names the file
        let record: T =
            result.with_context(|| format!("malformed record in {}", path.display()))?;
        rows.push(record);
    }

    Ok(rows)
}
