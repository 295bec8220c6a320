//! Rule-based insight text
//!
//! Classifies the trailing window's per-metric averages against the
//! configured thresholds and appends correlation callouts. Emission order is
//! fixed so output is deterministic: sleep, steps, water, heart rate, mood,
//! then sleep-mood and steps-heart-rate correlations. The presentation
//! layer may reorder for display.

use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::error::AnalyticsError;
use crate::series::{metric_values, tail_window};
use crate::stats::{average, pearson_correlation};
use crate::types::{DailyRecord, Metric};

/// Generate insight strings for the trailing window of a record series
pub fn generate(
    records: &[DailyRecord],
    config: &AnalyticsConfig,
) -> Result<Vec<String>, AnalyticsError> {
    let window = tail_window(records, config.window_days);
    if window.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }

    let sleep = metric_values(window, Metric::Sleep);
    let steps = metric_values(window, Metric::Steps);
    let water = metric_values(window, Metric::Water);
    let heart_rate = metric_values(window, Metric::HeartRate);
    let mood = metric_values(window, Metric::Mood);

    let mut insights = Vec::new();

    sleep_insight(average(&sleep)?, config, &mut insights);
    steps_insight(average(&steps)?, config, &mut insights);
    water_insight(average(&water)?, config, &mut insights);
    heart_rate_insight(average(&heart_rate)?, config, &mut insights);
    mood_insight(average(&mood)?, config, &mut insights);

    if pearson_correlation(&sleep, &mood)? > config.sleep_mood_correlation_min {
        insights.push(
            "There appears to be a positive correlation between your sleep quality and mood. Prioritizing good sleep habits may help maintain your positive mood."
                .to_string(),
        );
    }

    if pearson_correlation(&steps, &heart_rate)? > config.steps_heart_correlation_min {
        insights.push(
            "Your increased activity levels appear to be having a positive impact on your heart health. Keep up the good work!"
                .to_string(),
        );
    }

    debug!(count = insights.len(), window = window.len(), "generated insights");
    Ok(insights)
}

fn sleep_insight(avg: f64, config: &AnalyticsConfig, out: &mut Vec<String>) {
    if avg < config.sleep_low_hours {
        out.push(
            "Try going to bed 30 minutes earlier to improve your sleep duration. Aim for 7-8 hours per night for optimal health."
                .to_string(),
        );
    } else if avg > config.sleep_high_hours {
        out.push(
            "You're sleeping more than average. While rest is important, excessive sleep can sometimes indicate other health issues."
                .to_string(),
        );
    } else {
        out.push(
            "Your sleep patterns are in a healthy range. Maintain your current sleep schedule for optimal rest."
                .to_string(),
        );
    }
}

fn steps_insight(avg: f64, config: &AnalyticsConfig, out: &mut Vec<String>) {
    if avg < config.steps_low {
        out.push(
            "Your step count is below the recommended 10,000 steps per day. Try adding a 15-minute walk to your daily routine."
                .to_string(),
        );
    } else if avg > config.steps_high {
        out.push(
            "Great job staying active! Your step count is above average. Make sure to balance activity with proper recovery."
                .to_string(),
        );
    }
}

fn water_insight(avg: f64, config: &AnalyticsConfig, out: &mut Vec<String>) {
    if avg < config.water_low_oz {
        out.push(
            "Try drinking 2 more cups of water daily to reach the recommended intake of 64 oz (8 cups)."
                .to_string(),
        );
    } else {
        out.push(
            "You're staying well-hydrated! Maintaining proper hydration supports energy levels and overall health."
                .to_string(),
        );
    }
}

fn heart_rate_insight(avg: f64, config: &AnalyticsConfig, out: &mut Vec<String>) {
    if avg > config.heart_rate_healthy_max {
        out.push(
            "Your resting heart rate is slightly elevated. Consider adding relaxation techniques like deep breathing to your daily routine."
                .to_string(),
        );
    } else if avg < config.heart_rate_healthy_min {
        out.push(
            "Your low resting heart rate may indicate good cardiovascular fitness. Continue with your current exercise routine."
                .to_string(),
        );
    }
}

fn mood_insight(avg: f64, config: &AnalyticsConfig, out: &mut Vec<String>) {
    if avg < config.mood_low {
        out.push(
            "Your mood ratings have been lower recently. Physical activity and social connections can help improve mood and mental wellbeing."
                .to_string(),
        );
    } else if avg > config.mood_high {
        out.push(
            "Your positive mood is excellent! Consider journaling about what's working well to maintain this positive trend."
                .to_string(),
        );
    }
}
