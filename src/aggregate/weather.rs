use std::collections::BTreeMap;

use anyhow::{Context, Result};

use crate::aggregate::types::WeatherTotal;
use crate::records::{DailyRecord, WeatherCondition};

/// Sums daily rentals per weather condition, sorted descending by total.
///
/// Ties are broken by label ascending so the output order is deterministic.
///
/// # Errors
///
/// Returns an error if any row carries a `weathersit` code outside 1–4.
pub fn weather_totals(rows: &[DailyRecord]) -> Result<Vec<WeatherTotal>> {
    let mut totals: BTreeMap<WeatherCondition, u64> = BTreeMap::new();

    for row in rows {
        let condition = WeatherCondition::from_code(row.weathersit)
            .with_context(|| format!("daily record dated {}", row.date))?;
        *totals.entry(condition).or_insert(0) += row.cnt as u64;
    }

    let mut table: Vec<WeatherTotal> = totals
        .into_iter()
        .map(|(condition, total_rentals)| WeatherTotal {
            condition: condition.label().to_string(),
            total_rentals,
        })
        .collect();

    table.sort_by(|a, b| {
        b.total_rentals
            .cmp(&a.total_rentals)
            .then_with(|| a.condition.cmp(&b.condition))
    });

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(ordinal: u32, weathersit: u8, cnt: u32) -> DailyRecord {
        let date = NaiveDate::from_yo_opt(2011, ordinal).unwrap();
        DailyRecord::new(date, weathersit, cnt)
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        assert!(weather_totals(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_totals_grouped_and_sorted_descending() {
        let rows = vec![
            day(1, 2, 1000),
            day(2, 1, 4000),
            day(3, 1, 3000),
            day(4, 3, 500),
        ];

        let table = weather_totals(&rows).unwrap();

        assert_eq!(
            table,
            vec![
                WeatherTotal {
                    condition: "Clear/Few clouds".to_string(),
                    total_rentals: 7000,
                },
                WeatherTotal {
                    condition: "Mist/Cloudy".to_string(),
                    total_rentals: 1000,
                },
                WeatherTotal {
                    condition: "Light Snow/Rain".to_string(),
                    total_rentals: 500,
                },
            ]
        );
    }

    #[test]
    fn test_count_conservation() {
        let rows = vec![day(1, 1, 120), day(2, 2, 340), day(3, 4, 7), day(4, 2, 90)];

        let table = weather_totals(&rows).unwrap();

        let input_sum: u64 = rows.iter().map(|r| r.cnt as u64).sum();
        let output_sum: u64 = table.iter().map(|t| t.total_rentals).sum();
        assert_eq!(input_sum, output_sum);
    }

    #[test]
    fn test_tie_broken_by_label() {
        // Same total for Clear and Mist; Clear sorts first alphabetically
        let rows = vec![day(1, 2, 500), day(2, 1, 500)];

        let table = weather_totals(&rows).unwrap();

        assert_eq!(table[0].condition, "Clear/Few clouds");
        assert_eq!(table[1].condition, "Mist/Cloudy");
    }

    #[test]
    fn test_descending_invariant_adjacent_pairs() {
        let rows = vec![
            day(1, 1, 10),
            day(2, 2, 9000),
            day(3, 3, 450),
            day(4, 4, 450),
        ];

        let table = weather_totals(&rows).unwrap();

        for pair in table.windows(2) {
            assert!(pair[0].total_rentals >= pair[1].total_rentals);
        }
    }

    #[test]
    fn test_unrecognized_code_rejected() {
        let rows = vec![day(1, 1, 100), day(2, 7, 50)];

        let err = weather_totals(&rows).unwrap_err();
        assert!(err.root_cause().to_string().contains("7"));
    }
}
