use std::collections::BTreeMap;

use crate::aggregate::types::HourlyUserAverage;
use crate::aggregate::utility::mean;
use crate::records::HourlyRecord;

/// Computes the mean casual and registered rider counts for each hour of the
/// day that appears in the input.
///
/// Output rows are sorted ascending by hour, one row per distinct hour value
/// present. Hours that never appear are not zero-filled. An empty input
/// yields an empty table.
pub fn hourly_user_averages(rows: &[HourlyRecord]) -> Vec<HourlyUserAverage> {
    let mut by_hour: BTreeMap<u8, (Vec<f64>, Vec<f64>)> = BTreeMap::new();

    for row in rows {
        let (casual, registered) = by_hour.entry(row.hour).or_default();
        casual.push(row.casual as f64);
        registered.push(row.registered as f64);
    }

    by_hour
        .into_iter()
        .map(|(hour, (casual, registered))| HourlyUserAverage {
            hour,
            casual_mean: mean(&casual),
            registered_mean: mean(&registered),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_table() {
        assert!(hourly_user_averages(&[]).is_empty());
    }

    #[test]
    fn test_averages_per_hour() {
        let rows = vec![
            HourlyRecord::new(0, 1, 1, 2, 8),
            HourlyRecord::new(0, 1, 1, 4, 12),
            HourlyRecord::new(1, 1, 1, 1, 5),
        ];

        let averages = hourly_user_averages(&rows);

        assert_eq!(
            averages,
            vec![
                HourlyUserAverage {
                    hour: 0,
                    casual_mean: 3.0,
                    registered_mean: 10.0,
                },
                HourlyUserAverage {
                    hour: 1,
                    casual_mean: 1.0,
                    registered_mean: 5.0,
                },
            ]
        );
    }

    #[test]
    fn test_output_sorted_ascending_no_zero_fill() {
        // Hours arrive out of order and with gaps
        let rows = vec![
            HourlyRecord::new(17, 3, 1, 50, 200),
            HourlyRecord::new(8, 3, 1, 10, 250),
            HourlyRecord::new(23, 3, 0, 5, 30),
        ];

        let averages = hourly_user_averages(&rows);

        let hours: Vec<u8> = averages.iter().map(|a| a.hour).collect();
        assert_eq!(hours, vec![8, 17, 23]);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let rows = vec![
            HourlyRecord::new(6, 2, 1, 3, 40),
            HourlyRecord::new(6, 2, 1, 7, 60),
            HourlyRecord::new(12, 2, 0, 90, 110),
        ];

        let first = hourly_user_averages(&rows);
        let second = hourly_user_averages(&rows);
        assert_eq!(first, second);
    }
}
