//! Calendar-day bucketing for timestamped entries.
//!
//! All grouping uses a single strategy: convert the stored UTC instant
//! through a fixed +09:00 offset (KST) and take the local calendar date.
//! KST has no daylight saving, so this is exactly the "UTC + 9h" rule and
//! is stable regardless of where the server or viewer runs.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

const KST_OFFSET_SECS: i32 = 9 * 3600;

fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_OFFSET_SECS).expect("KST offset is valid")
}

/// The KST calendar day a UTC instant falls on.
pub fn local_day(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&kst()).date_naive()
}

/// Grouping key in `YYYY-MM-DD` form.
pub fn local_day_key(ts: DateTime<Utc>) -> String {
    local_day(ts).format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid RFC 3339 timestamp")
    }

    #[test]
    fn test_evening_utc_buckets_to_next_kst_day() {
        // 15:30 UTC + 9h = 00:30 the next day
        let ts = utc("2026-03-01T15:30:00Z");
        assert_eq!(local_day(ts), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        assert_eq!(local_day_key(ts), "2026-03-02");
    }

    #[test]
    fn test_kst_midnight_boundary() {
        // 14:59:59 UTC is still 23:59:59 KST on the same day
        let before = utc("2026-03-01T14:59:59Z");
        assert_eq!(local_day(before), NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());

        // 15:00:00 UTC is exactly 00:00:00 KST on the next day
        let after = utc("2026-03-01T15:00:00Z");
        assert_eq!(local_day(after), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
    }

    #[test]
    fn test_morning_utc_stays_on_same_day() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 1, 3, 0, 0).unwrap();
        assert_eq!(local_day_key(ts), "2026-03-01");
    }
}
