//! Daily-average weight series for the weight chart.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::stats::daybucket::local_day;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyWeight {
    pub date: NaiveDate,
    pub weight: f64,
}

/// Bucket timestamped weight samples by KST day and average each bucket.
/// Output is ascending by date.
pub fn daily_average(samples: &[(DateTime<Utc>, f64)]) -> Vec<DailyWeight> {
    let mut buckets: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();

    for &(ts, weight) in samples {
        let entry = buckets.entry(local_day(ts)).or_insert((0.0, 0));
        entry.0 += weight;
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(date, (total, count))| DailyWeight {
            date,
            weight: total / f64::from(count),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn kst_ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap() - chrono::Duration::hours(9)
    }

    #[test]
    fn test_two_samples_same_day_average() {
        let samples = vec![
            (kst_ts(2026, 3, 2, 7, 0), 51.0),
            (kst_ts(2026, 3, 2, 20, 0), 52.0),
        ];
        let avg = daily_average(&samples);
        assert_eq!(avg.len(), 1);
        assert_eq!(avg[0].date, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        assert_eq!(avg[0].weight, 51.5);
    }

    #[test]
    fn test_days_sorted_ascending() {
        let samples = vec![
            (kst_ts(2026, 3, 3, 8, 0), 52.0),
            (kst_ts(2026, 3, 1, 8, 0), 50.0),
            (kst_ts(2026, 3, 2, 8, 0), 51.0),
        ];
        let avg = daily_average(&samples);
        let dates: Vec<_> = avg.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
                NaiveDate::from_ymd_opt(2026, 3, 3).unwrap(),
            ]
        );
    }

    #[test]
    fn test_sample_near_midnight_buckets_by_kst() {
        // 23:50 KST and 00:10 KST the next day are different buckets
        let samples = vec![
            (kst_ts(2026, 3, 1, 23, 50), 50.0),
            (kst_ts(2026, 3, 2, 0, 10), 52.0),
        ];
        let avg = daily_average(&samples);
        assert_eq!(avg.len(), 2);
        assert_eq!(avg[0].weight, 50.0);
        assert_eq!(avg[1].weight, 52.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(daily_average(&[]).is_empty());
    }
}
