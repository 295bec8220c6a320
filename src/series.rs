//! Record-series helpers
//!
//! Windowing and per-metric extraction shared by every derivation. The
//! trailing window is the single place the "last N days" rule lives; it
//! shrinks silently when the series is shorter than the configured window.

use crate::types::{DailyRecord, Metric};

/// Trailing window of at most `days` records
pub fn tail_window(records: &[DailyRecord], days: usize) -> &[DailyRecord] {
    let start = records.len().saturating_sub(days);
    &records[start..]
}

/// One metric's values across a window, in series order
pub fn metric_values(records: &[DailyRecord], metric: Metric) -> Vec<f64> {
    records.iter().map(|r| metric.value_of(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_records(count: usize) -> Vec<DailyRecord> {
        (0..count)
            .map(|i| DailyRecord {
                date: Utc.with_ymd_and_hms(2024, 3, 1 + i as u32, 8, 0, 0).unwrap(),
                sleep_hours: 7.0 + i as f64 * 0.1,
                steps: 8_000 + i as u32 * 100,
                heart_rate_bpm: 68,
                water_oz: 64.0,
                mood: 7.0,
            })
            .collect()
    }

    #[test]
    fn test_tail_window_takes_most_recent() {
        let records = make_records(10);
        let window = tail_window(&records, 7);
        assert_eq!(window.len(), 7);
        assert_eq!(window[0].steps, 8_300);
        assert_eq!(window[6].steps, 8_900);
    }

    #[test]
    fn test_tail_window_shrinks() {
        let records = make_records(3);
        assert_eq!(tail_window(&records, 7).len(), 3);
        assert!(tail_window(&[], 7).is_empty());
    }

    #[test]
    fn test_metric_values_preserve_order() {
        let records = make_records(4);
        let sleep = metric_values(&records, Metric::Sleep);
        assert_eq!(sleep, vec![7.0, 7.1, 7.2, 7.3]);

        let steps = metric_values(&records, Metric::Steps);
        assert_eq!(steps, vec![8_000.0, 8_100.0, 8_200.0, 8_300.0]);
    }
}
