//! Box-plot statistics for intraday measurement series.
//!
//! Quartiles use the nearest-rank positions `sorted[n/4]` and `sorted[3n/4]`
//! (integer floor), not the interpolated textbook method. The chart consumers
//! expect exactly these ranks.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::stats::daybucket::local_day;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayTrend {
    Up,
    DownOrFlat,
}

/// One calendar day of a box-plot series.
#[derive(Debug, Clone, Serialize)]
pub struct DailyBoxStats {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub stats: BoxStats,
    pub trend: DayTrend,
}

/// Compute box-plot stats for one day's samples. Empty input means no data,
/// not an error.
pub fn box_stats(samples: &[f64]) -> Option<BoxStats> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let median = if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    };

    Some(BoxStats {
        min: sorted[0],
        q1: sorted[n / 4],
        median,
        q3: sorted[3 * n / 4],
        max: sorted[n - 1],
    })
}

/// Group timestamped samples by KST day and compute per-day stats plus the
/// day-over-day trend flag. `Up` means the day's latest sample exceeds the
/// latest sample of the most recent earlier day that has any data.
///
/// Output is ascending by date; days without samples do not appear.
pub fn daily_box_stats(samples: &[(DateTime<Utc>, f64)]) -> Vec<DailyBoxStats> {
    use std::collections::BTreeMap;

    let mut by_day: BTreeMap<NaiveDate, Vec<(DateTime<Utc>, f64)>> = BTreeMap::new();
    for &(ts, value) in samples {
        by_day.entry(local_day(ts)).or_default().push((ts, value));
    }

    let mut result = Vec::with_capacity(by_day.len());
    let mut prev_last: Option<f64> = None;

    for (date, mut day_samples) in by_day {
        day_samples.sort_by_key(|(ts, _)| *ts);
        let values: Vec<f64> = day_samples.iter().map(|(_, v)| *v).collect();
        let last = day_samples
            .last()
            .map(|(_, v)| *v)
            .unwrap_or_default();

        let stats = match box_stats(&values) {
            Some(stats) => stats,
            None => continue,
        };

        let trend = match prev_last {
            Some(prev) if last > prev => DayTrend::Up,
            _ => DayTrend::DownOrFlat,
        };

        result.push(DailyBoxStats { date, stats, trend });
        prev_last = Some(last);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn kst_ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        // Build a KST wall-clock time as its UTC instant (KST = UTC+9)
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap() - chrono::Duration::hours(9)
    }

    #[test]
    fn test_empty_input_is_no_data() {
        assert_eq!(box_stats(&[]), None);
    }

    #[test]
    fn test_single_sample() {
        let stats = box_stats(&[51.0]).unwrap();
        assert_eq!(stats.min, 51.0);
        assert_eq!(stats.q1, 51.0);
        assert_eq!(stats.median, 51.0);
        assert_eq!(stats.q3, 51.0);
        assert_eq!(stats.max, 51.0);
    }

    #[test]
    fn test_odd_length_median_is_middle_element() {
        let stats = box_stats(&[3.0, 1.0, 2.0]).unwrap();
        assert_eq!(stats.median, 2.0);
    }

    #[test]
    fn test_even_length_median_averages_middles() {
        let stats = box_stats(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.median, 2.5);
    }

    #[test]
    fn test_nearest_rank_quartiles() {
        // sorted: [1..=8], n=8 → q1 = sorted[2] = 3, q3 = sorted[6] = 7
        let samples: Vec<f64> = (1..=8).map(f64::from).collect();
        let stats = box_stats(&samples).unwrap();
        assert_eq!(stats.q1, 3.0);
        assert_eq!(stats.q3, 7.0);
        assert_eq!(stats.median, 4.5);
    }

    #[test]
    fn test_ordering_invariant() {
        let cases: Vec<Vec<f64>> = vec![
            vec![5.0],
            vec![2.0, 9.0],
            vec![7.0, 1.0, 4.0, 4.0, 8.0],
            vec![50.5, 51.0, 52.0, 49.8, 50.1, 51.7, 50.9],
        ];
        for samples in cases {
            let s = box_stats(&samples).unwrap();
            assert!(s.min <= s.q1, "min <= q1 for {samples:?}");
            assert!(s.q1 <= s.median, "q1 <= median for {samples:?}");
            assert!(s.median <= s.q3, "median <= q3 for {samples:?}");
            assert!(s.q3 <= s.max, "q3 <= max for {samples:?}");
        }
    }

    #[test]
    fn test_trend_up_against_previous_day_last_sample() {
        let samples = vec![
            (kst_ts(2026, 3, 1, 20, 0), 50.5),
            (kst_ts(2026, 3, 2, 7, 0), 51.0),
            (kst_ts(2026, 3, 2, 20, 0), 52.0),
        ];
        let days = daily_box_stats(&samples);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].trend, DayTrend::DownOrFlat); // no earlier day
        assert_eq!(days[1].trend, DayTrend::Up); // 52.0 > 50.5
    }

    #[test]
    fn test_trend_compares_latest_samples_not_averages() {
        // Day 1 ends high; day 2 ends lower even though it has a high reading
        let samples = vec![
            (kst_ts(2026, 3, 1, 21, 0), 53.0),
            (kst_ts(2026, 3, 2, 7, 0), 54.0),
            (kst_ts(2026, 3, 2, 22, 0), 52.5),
        ];
        let days = daily_box_stats(&samples);
        assert_eq!(days[1].trend, DayTrend::DownOrFlat);
    }

    #[test]
    fn test_trend_skips_gap_days() {
        // Most recent prior day with data is Mar 1, not Mar 2
        let samples = vec![
            (kst_ts(2026, 3, 1, 20, 0), 50.0),
            (kst_ts(2026, 3, 4, 20, 0), 50.5),
        ];
        let days = daily_box_stats(&samples);
        assert_eq!(days.len(), 2);
        assert_eq!(days[1].trend, DayTrend::Up);
    }

    #[test]
    fn test_equal_last_samples_are_flat() {
        let samples = vec![
            (kst_ts(2026, 3, 1, 20, 0), 51.0),
            (kst_ts(2026, 3, 2, 20, 0), 51.0),
        ];
        let days = daily_box_stats(&samples);
        assert_eq!(days[1].trend, DayTrend::DownOrFlat);
    }
}
