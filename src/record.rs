//! Record input plumbing
//!
//! Parses the storage layer's JSON blob (array or NDJSON) into daily
//! records, and scans a series for the guarantees the engine itself does
//! not enforce: ascending dates, one record per day, finite values. The
//! scan is a CLI/debugging aid; the engine trusts its callers.

use serde::Serialize;
use tracing::debug;

use crate::error::AnalyticsError;
use crate::types::DailyRecord;

/// Adapter for record input formats
pub struct RecordAdapter;

impl RecordAdapter {
    /// Parse a JSON array of records
    pub fn parse_array(json: &str) -> Result<Vec<DailyRecord>, AnalyticsError> {
        let records: Vec<DailyRecord> = serde_json::from_str(json)?;
        debug!(count = records.len(), "parsed record array");
        Ok(records)
    }

    /// Parse NDJSON (newline-delimited JSON), one record per line
    pub fn parse_ndjson(ndjson: &str) -> Result<Vec<DailyRecord>, AnalyticsError> {
        let mut records = Vec::new();
        for (line_num, line) in ndjson.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str::<DailyRecord>(trimmed) {
                Ok(record) => records.push(record),
                Err(e) => {
                    return Err(AnalyticsError::ParseError(format!(
                        "failed to parse line {}: {}",
                        line_num + 1,
                        e
                    )));
                }
            }
        }
        debug!(count = records.len(), "parsed ndjson records");
        Ok(records)
    }

    /// Scan a series for ordering and value issues
    pub fn validate_series(records: &[DailyRecord]) -> Vec<SeriesIssue> {
        let mut issues = Vec::new();

        for (idx, pair) in records.windows(2).enumerate() {
            let prev_day = pair[0].date.date_naive();
            let day = pair[1].date.date_naive();
            if day < prev_day {
                issues.push(SeriesIssue {
                    index: idx + 1,
                    kind: SeriesIssueKind::OutOfOrder,
                    detail: format!("{day} sorts before {prev_day}"),
                });
            } else if day == prev_day {
                issues.push(SeriesIssue {
                    index: idx + 1,
                    kind: SeriesIssueKind::DuplicateDay,
                    detail: format!("second record for {day}"),
                });
            }
        }

        for (idx, record) in records.iter().enumerate() {
            for (field, value) in [
                ("sleepHours", record.sleep_hours),
                ("waterOz", record.water_oz),
                ("mood", record.mood),
            ] {
                if !value.is_finite() {
                    issues.push(SeriesIssue {
                        index: idx,
                        kind: SeriesIssueKind::NonFiniteValue,
                        detail: format!("{field} is {value}"),
                    });
                }
            }
        }

        if !issues.is_empty() {
            debug!(count = issues.len(), "series validation found issues");
        }
        issues
    }
}

/// A problem found in a record series
#[derive(Debug, Clone, Serialize)]
pub struct SeriesIssue {
    /// Index of the offending record
    pub index: usize,
    pub kind: SeriesIssueKind,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesIssueKind {
    OutOfOrder,
    DuplicateDay,
    NonFiniteValue,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_json() -> &'static str {
        r#"[
            {"date": "2024-03-01T08:00:00Z", "sleepHours": 7.2, "steps": 9200, "heartRateBpm": 66, "waterOz": 70.0, "mood": 7.5},
            {"date": "2024-03-02T08:00:00Z", "sleepHours": 6.8, "steps": 10400, "heartRateBpm": 68, "waterOz": 58.0, "mood": 6.9}
        ]"#
    }

    #[test]
    fn test_parse_array() {
        let records = RecordAdapter::parse_array(sample_json()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sleep_hours, 7.2);
        assert_eq!(records[1].steps, 10_400);
        assert_eq!(records[1].heart_rate_bpm, 68);
    }

    #[test]
    fn test_parse_ndjson_skips_blank_lines() {
        let ndjson = concat!(
            r#"{"date": "2024-03-01T08:00:00Z", "sleepHours": 7.2, "steps": 9200, "heartRateBpm": 66, "waterOz": 70.0, "mood": 7.5}"#,
            "\n\n",
            r#"{"date": "2024-03-02T08:00:00Z", "sleepHours": 6.8, "steps": 10400, "heartRateBpm": 68, "waterOz": 58.0, "mood": 6.9}"#,
            "\n",
        );
        let records = RecordAdapter::parse_ndjson(ndjson).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_ndjson_reports_line_number() {
        let ndjson = concat!(
            r#"{"date": "2024-03-01T08:00:00Z", "sleepHours": 7.2, "steps": 9200, "heartRateBpm": 66, "waterOz": 70.0, "mood": 7.5}"#,
            "\n",
            "not json\n",
        );
        let err = RecordAdapter::parse_ndjson(ndjson).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_roundtrip_camel_case() {
        let records = RecordAdapter::parse_array(sample_json()).unwrap();
        let json = serde_json::to_string(&records).unwrap();
        assert!(json.contains("sleepHours"));
        assert!(json.contains("heartRateBpm"));
        assert!(json.contains("waterOz"));
    }

    fn make_record(day: u32) -> DailyRecord {
        DailyRecord {
            date: Utc.with_ymd_and_hms(2024, 3, day, 8, 0, 0).unwrap(),
            sleep_hours: 7.0,
            steps: 8_000,
            heart_rate_bpm: 70,
            water_oz: 64.0,
            mood: 7.0,
        }
    }

    #[test]
    fn test_validate_clean_series() {
        let records = vec![make_record(1), make_record(2), make_record(3)];
        assert!(RecordAdapter::validate_series(&records).is_empty());
    }

    #[test]
    fn test_validate_out_of_order() {
        let records = vec![make_record(2), make_record(1)];
        let issues = RecordAdapter::validate_series(&records);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, SeriesIssueKind::OutOfOrder);
        assert_eq!(issues[0].index, 1);
    }

    #[test]
    fn test_validate_duplicate_day() {
        let records = vec![make_record(1), make_record(1)];
        let issues = RecordAdapter::validate_series(&records);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, SeriesIssueKind::DuplicateDay);
    }

    #[test]
    fn test_validate_non_finite_value() {
        let mut records = vec![make_record(1)];
        records[0].mood = f64::NAN;
        let issues = RecordAdapter::validate_series(&records);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, SeriesIssueKind::NonFiniteValue);
        assert!(issues[0].detail.contains("mood"));
    }
}
