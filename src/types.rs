//! Core types for the insight engine
//!
//! This module defines the record format supplied by the storage layer, the
//! metric abstraction shared by every derivation, and the report payload
//! emitted for the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::badges::Badge;
use crate::focus::FocusCategory;

/// One calendar day's health measurements.
///
/// Records arrive from the storage/sync collaborator ordered by ascending
/// date, one entry per day, with every field populated. Values outside the
/// ranges a consumer wearable typically produces are accepted as-is; the
/// engine enforces no per-field bounds and never mutates a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    /// Day this record represents (ISO-8601, UTC)
    pub date: DateTime<Utc>,
    /// Sleep duration (hours)
    pub sleep_hours: f64,
    /// Step count
    pub steps: u32,
    /// Resting heart rate (bpm)
    pub heart_rate_bpm: u32,
    /// Water intake (fluid ounces)
    pub water_oz: f64,
    /// Self-reported mood (1-10)
    pub mood: f64,
}

/// The five tracked metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Sleep,
    Steps,
    HeartRate,
    Water,
    Mood,
}

impl Metric {
    /// All metrics in their fixed display order
    pub const ALL: [Metric; 5] = [
        Metric::Sleep,
        Metric::Steps,
        Metric::HeartRate,
        Metric::Water,
        Metric::Mood,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Sleep => "sleep",
            Metric::Steps => "steps",
            Metric::HeartRate => "heartRate",
            Metric::Water => "water",
            Metric::Mood => "mood",
        }
    }

    /// Extract this metric's value from a record
    pub fn value_of(&self, record: &DailyRecord) -> f64 {
        match self {
            Metric::Sleep => record.sleep_hours,
            Metric::Steps => f64::from(record.steps),
            Metric::HeartRate => f64::from(record.heart_rate_bpm),
            Metric::Water => record.water_oz,
            Metric::Mood => record.mood,
        }
    }

    /// Whether an increase in this metric counts as improvement. Resting
    /// heart rate is the one tracked metric where lower is better.
    pub fn polarity(&self) -> Polarity {
        match self {
            Metric::HeartRate => Polarity::LowerIsBetter,
            _ => Polarity::HigherIsBetter,
        }
    }
}

/// Direction of change that counts as improvement for a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

/// Trend direction over a data window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Neutral,
}

/// Split-half trend over a data window.
///
/// `Up` means the window moved in the metric's favorable direction, `Down`
/// the opposite. `Neutral` covers changes inside the stability band as well
/// as windows where no percent change could be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResult {
    pub direction: TrendDirection,
    /// Percent change between half-window averages. `None` when the window
    /// had fewer than 2 points or a zero first-half baseline.
    pub magnitude_percent: Option<f64>,
    /// Set when the window was too short to split
    pub insufficient_data: bool,
}

impl TrendResult {
    /// Display caption matching the dashboard's trend line
    pub fn label(&self) -> String {
        if self.insufficient_data {
            return "Not enough data".to_string();
        }
        match (self.direction, self.magnitude_percent) {
            (TrendDirection::Up, Some(pct)) => format!("Up {:.0}%", pct.abs()),
            (TrendDirection::Down, Some(pct)) => format!("Down {:.0}%", pct.abs()),
            _ => "Stable (±5%)".to_string(),
        }
    }
}

/// Categorical mood label derived from a numeric rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodDescriptor {
    Excellent,
    Good,
    Neutral,
    Poor,
    Bad,
}

impl MoodDescriptor {
    /// Bands used for a weekly average rating
    pub fn from_weekly_average(mood: f64) -> Self {
        if mood >= 8.5 {
            MoodDescriptor::Excellent
        } else if mood >= 7.0 {
            MoodDescriptor::Good
        } else if mood >= 5.0 {
            MoodDescriptor::Neutral
        } else if mood >= 3.5 {
            MoodDescriptor::Poor
        } else {
            MoodDescriptor::Bad
        }
    }

    /// Bands used for a single day's rating
    pub fn from_daily(mood: f64) -> Self {
        if mood >= 9.0 {
            MoodDescriptor::Excellent
        } else if mood >= 7.0 {
            MoodDescriptor::Good
        } else if mood >= 5.0 {
            MoodDescriptor::Neutral
        } else if mood >= 3.0 {
            MoodDescriptor::Poor
        } else {
            MoodDescriptor::Bad
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodDescriptor::Excellent => "Excellent",
            MoodDescriptor::Good => "Good",
            MoodDescriptor::Neutral => "Neutral",
            MoodDescriptor::Poor => "Poor",
            MoodDescriptor::Bad => "Bad",
        }
    }
}

/// Per-metric averages over the analyzed window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricAverages {
    pub sleep_hours: f64,
    pub steps: f64,
    pub heart_rate_bpm: f64,
    pub water_oz: f64,
    pub mood: f64,
}

/// Per-metric split-half trends over the analyzed window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTrends {
    pub sleep: TrendResult,
    pub steps: TrendResult,
    pub heart_rate: TrendResult,
    pub water: TrendResult,
    pub mood: TrendResult,
}

/// Weekly summary: averages, trends, and a categorical mood readout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub averages: MetricAverages,
    pub trends: MetricTrends,
    pub mood: MoodDescriptor,
}

/// The most recent record with its categorical mood label, for the
/// dashboard's metric cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySnapshot {
    pub record: DailyRecord,
    pub mood_label: MoodDescriptor,
}

/// Report producer metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// The window a report was derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportWindow {
    /// Configured trailing window length
    pub requested_days: usize,
    /// Records actually available inside the window
    pub record_count: usize,
    /// First day in the window (YYYY-MM-DD)
    pub start_date: String,
    /// Last day in the window (YYYY-MM-DD)
    pub end_date: String,
}

/// Weekly-focus block of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusReport {
    pub category: FocusCategory,
    pub title: String,
    pub recommendation: String,
}

/// Complete insight report payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightReport {
    pub report_version: String,
    pub producer: ReportProducer,
    pub generated_at_utc: String,
    pub window: ReportWindow,
    pub summary: WeeklySummary,
    pub snapshot: DailySnapshot,
    pub focus: FocusReport,
    pub insights: Vec<String>,
    pub badges: Vec<Badge>,
}
