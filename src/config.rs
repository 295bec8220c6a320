//! Engine configuration
//!
//! Every tuned constant lives in one table so thresholds stay independently
//! testable and adjustable: the shared trailing window, the trend stability
//! band, per-metric ideals, insight thresholds, and badge rules.

use serde::{Deserialize, Serialize};

/// Default trailing window (days) shared by all windowed derivations
pub const DEFAULT_WINDOW_DAYS: usize = 7;

/// Tuned constants for the analytics engine.
///
/// `Default` carries the fixed design values; deserializing a partial config
/// fills the rest from the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Trailing window, in days, shared by summary, focus, insights, and
    /// badges. Shrinks silently when the series is shorter.
    pub window_days: usize,
    /// Absolute percent change strictly below this classifies as Neutral
    pub trend_neutral_band_pct: f64,

    /// Ideal nightly sleep (hours)
    pub sleep_ideal_hours: f64,
    /// Below this weekly average, suggest more sleep
    pub sleep_low_hours: f64,
    /// Above this weekly average, caution about excessive sleep
    pub sleep_high_hours: f64,
    /// Days at or above this duration count toward the sleep streak
    pub good_sleep_hours: f64,
    /// Days needed for the good-sleep streak badge
    pub good_sleep_streak_days: usize,

    /// Daily step goal
    pub steps_goal: f64,
    /// Below this weekly average, nudge toward the goal
    pub steps_low: f64,
    /// Above this weekly average, acknowledge high activity
    pub steps_high: f64,
    /// Every-day step floor for the consistency badge
    pub active_day_steps: f64,

    /// Daily water goal (oz)
    pub water_goal_oz: f64,
    /// Below this weekly average, nudge hydration
    pub water_low_oz: f64,
    /// Days meeting the water goal needed for the hydration badge
    pub hydration_days: usize,

    /// Healthy resting heart-rate floor (bpm, inclusive)
    pub heart_rate_healthy_min: f64,
    /// Healthy resting heart-rate ceiling (bpm, inclusive)
    pub heart_rate_healthy_max: f64,

    /// Ideal mood rating
    pub mood_ideal: f64,
    /// Below this weekly average, suggest mood support
    pub mood_low: f64,
    /// Above this weekly average, acknowledge positive mood
    pub mood_high: f64,
    /// Second-half average required for the improving-mood badge
    pub improving_mood_floor: f64,

    /// Minimum sleep-mood correlation for the correlation insight
    pub sleep_mood_correlation_min: f64,
    /// Minimum steps-heart-rate correlation for the correlation insight
    pub steps_heart_correlation_min: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            trend_neutral_band_pct: 5.0,

            sleep_ideal_hours: 7.5,
            sleep_low_hours: 7.0,
            sleep_high_hours: 9.0,
            good_sleep_hours: 7.0,
            good_sleep_streak_days: 3,

            steps_goal: 10_000.0,
            steps_low: 7_500.0,
            steps_high: 12_000.0,
            active_day_steps: 5_000.0,

            water_goal_oz: 64.0,
            water_low_oz: 60.0,
            hydration_days: 5,

            heart_rate_healthy_min: 60.0,
            heart_rate_healthy_max: 80.0,

            mood_ideal: 8.0,
            mood_low: 6.0,
            mood_high: 8.0,
            improving_mood_floor: 7.0,

            sleep_mood_correlation_min: 0.5,
            steps_heart_correlation_min: 0.4,
        }
    }
}
