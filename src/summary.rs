//! Weekly summary derivation
//!
//! Mirrors the dashboard's weekly view: per-metric averages and split-half
//! trends over the trailing window, plus a categorical mood readout. Also
//! provides the latest-day snapshot behind the metric cards.

use crate::config::AnalyticsConfig;
use crate::error::AnalyticsError;
use crate::series::{metric_values, tail_window};
use crate::stats::{average, trend};
use crate::types::{
    DailyRecord, DailySnapshot, Metric, MetricAverages, MetricTrends, MoodDescriptor,
    TrendResult, WeeklySummary,
};

/// Summarize the trailing window of a record series
pub fn summarize(
    records: &[DailyRecord],
    config: &AnalyticsConfig,
) -> Result<WeeklySummary, AnalyticsError> {
    let window = tail_window(records, config.window_days);
    if window.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }

    let averages = MetricAverages {
        sleep_hours: average(&metric_values(window, Metric::Sleep))?,
        steps: average(&metric_values(window, Metric::Steps))?,
        heart_rate_bpm: average(&metric_values(window, Metric::HeartRate))?,
        water_oz: average(&metric_values(window, Metric::Water))?,
        mood: average(&metric_values(window, Metric::Mood))?,
    };

    let trends = MetricTrends {
        sleep: metric_trend(window, Metric::Sleep, config),
        steps: metric_trend(window, Metric::Steps, config),
        heart_rate: metric_trend(window, Metric::HeartRate, config),
        water: metric_trend(window, Metric::Water, config),
        mood: metric_trend(window, Metric::Mood, config),
    };

    let mood = MoodDescriptor::from_weekly_average(averages.mood);

    Ok(WeeklySummary {
        averages,
        trends,
        mood,
    })
}

/// The most recent record with its categorical mood label, or `None` for an
/// empty series
pub fn latest(records: &[DailyRecord]) -> Option<DailySnapshot> {
    records.last().map(|record| DailySnapshot {
        mood_label: MoodDescriptor::from_daily(record.mood),
        record: record.clone(),
    })
}

fn metric_trend(window: &[DailyRecord], metric: Metric, config: &AnalyticsConfig) -> TrendResult {
    trend(
        &metric_values(window, metric),
        metric.polarity(),
        config.trend_neutral_band_pct,
    )
}
