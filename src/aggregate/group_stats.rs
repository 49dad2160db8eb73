use std::collections::BTreeMap;

use crate::aggregate::types::GroupSummary;
use crate::aggregate::utility::median;
use crate::records::HourlyRecord;

/// Generic group-reduce: partitions rows by `key_fn` and computes mean,
/// median, and sum of `value_fn` within each group.
///
/// One entry per distinct key present in the input; absent keys are not
/// imputed. An empty input yields an empty map. A group of size one has
/// mean = median = sum = its single value.
pub fn group_stats<R, K, KF, VF>(rows: &[R], key_fn: KF, value_fn: VF) -> BTreeMap<K, GroupSummary>
where
    K: Ord,
    KF: Fn(&R) -> K,
    VF: Fn(&R) -> u64,
{
    let mut groups: BTreeMap<K, Vec<u64>> = BTreeMap::new();

    for row in rows {
        groups.entry(key_fn(row)).or_default().push(value_fn(row));
    }

    groups
        .into_iter()
        .map(|(key, mut values)| {
            let sum: u64 = values.iter().sum();
            let mean = sum as f64 / values.len() as f64;
            let median = median(&mut values);
            (key, GroupSummary { mean, median, sum })
        })
        .collect()
}

/// Rental count statistics per season code (1–4).
pub fn season_stats(rows: &[HourlyRecord]) -> BTreeMap<u8, GroupSummary> {
    group_stats(rows, |r| r.season, |r| r.cnt as u64)
}

/// Rental count statistics per working-day code (0 or 1).
pub fn working_day_stats(rows: &[HourlyRecord]) -> BTreeMap<u8, GroupSummary> {
    group_stats(rows, |r| r.workingday, |r| r.cnt as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_map() {
        let stats = group_stats(&[] as &[HourlyRecord], |r| r.season, |r| r.cnt as u64);
        assert!(stats.is_empty());
    }

    #[test]
    fn test_odd_group_mean_median_sum() {
        let values = [10u64, 20, 30];
        let stats = group_stats(&values, |_| 1u8, |v| *v);

        let summary = stats[&1];
        assert_eq!(summary.mean, 20.0);
        assert_eq!(summary.median, 20.0);
        assert_eq!(summary.sum, 60);
    }

    #[test]
    fn test_even_group_mean_median_sum() {
        let values = [10u64, 20, 30, 40];
        let stats = group_stats(&values, |_| 1u8, |v| *v);

        let summary = stats[&1];
        assert_eq!(summary.mean, 25.0);
        assert_eq!(summary.median, 25.0);
        assert_eq!(summary.sum, 100);
    }

    #[test]
    fn test_singleton_group() {
        let values = [42u64];
        let stats = group_stats(&values, |_| 9u8, |v| *v);

        let summary = stats[&9];
        assert_eq!(summary.mean, 42.0);
        assert_eq!(summary.median, 42.0);
        assert_eq!(summary.sum, 42);
    }

    #[test]
    fn test_keys_match_distinct_input_values() {
        let rows = vec![
            HourlyRecord::new(0, 1, 1, 5, 10),
            HourlyRecord::new(1, 3, 1, 5, 10),
            HourlyRecord::new(2, 3, 0, 5, 10),
            HourlyRecord::new(3, 1, 0, 5, 10),
        ];

        let stats = season_stats(&rows);

        let keys: Vec<u8> = stats.keys().copied().collect();
        assert_eq!(keys, vec![1, 3]);
    }

    #[test]
    fn test_working_day_split() {
        let rows = vec![
            HourlyRecord::new(8, 2, 1, 10, 190), // cnt 200
            HourlyRecord::new(9, 2, 1, 20, 280), // cnt 300
            HourlyRecord::new(10, 2, 0, 40, 60), // cnt 100
        ];

        let stats = working_day_stats(&rows);

        assert_eq!(stats[&1].mean, 250.0);
        assert_eq!(stats[&1].sum, 500);
        assert_eq!(stats[&0].mean, 100.0);
        assert_eq!(stats[&0].median, 100.0);
    }
}
