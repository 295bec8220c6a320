//! Achievement badges
//!
//! Six independent rules over the trailing window, evaluated in a fixed
//! order. Any subset may fire; none persists — badges are recomputed from
//! the series on every call.

use serde::{Deserialize, Serialize};

use crate::config::AnalyticsConfig;
use crate::error::AnalyticsError;
use crate::series::{metric_values, tail_window};
use crate::stats::average;
use crate::types::{DailyRecord, Metric};

/// Achievement types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    GoodSleepStreak,
    StepGoalDays,
    HydrationChampion,
    HealthyHeartRate,
    ImprovingMood,
    ActiveEveryDay,
}

/// A derived achievement flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub kind: BadgeKind,
    pub label: String,
}

/// Evaluate the badge rules over the trailing window of a record series
pub fn award(
    records: &[DailyRecord],
    config: &AnalyticsConfig,
) -> Result<Vec<Badge>, AnalyticsError> {
    let window = tail_window(records, config.window_days);
    if window.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }

    let mut badges = Vec::new();

    let good_sleep_days = window
        .iter()
        .filter(|r| r.sleep_hours >= config.good_sleep_hours)
        .count();
    if good_sleep_days >= config.good_sleep_streak_days {
        badges.push(Badge {
            kind: BadgeKind::GoodSleepStreak,
            label: format!("Good Sleep Streak: {good_sleep_days} Days"),
        });
    }

    let step_goal_days = window
        .iter()
        .filter(|r| f64::from(r.steps) >= config.steps_goal)
        .count();
    if step_goal_days > 0 {
        badges.push(Badge {
            kind: BadgeKind::StepGoalDays,
            label: format!("{step_goal_days} Days with 10,000+ Steps"),
        });
    }

    let water_goal_days = window
        .iter()
        .filter(|r| r.water_oz >= config.water_goal_oz)
        .count();
    if water_goal_days >= config.hydration_days {
        badges.push(Badge {
            kind: BadgeKind::HydrationChampion,
            label: "Hydration Champion".to_string(),
        });
    }

    let heart_rate_avg = average(&metric_values(window, Metric::HeartRate))?;
    if heart_rate_avg >= config.heart_rate_healthy_min
        && heart_rate_avg <= config.heart_rate_healthy_max
    {
        badges.push(Badge {
            kind: BadgeKind::HealthyHeartRate,
            label: "Healthy Heart Rate Range".to_string(),
        });
    }

    // Improving mood needs a non-empty first half to compare against.
    if window.len() >= 2 {
        let mood = metric_values(window, Metric::Mood);
        let mid = mood.len() / 2;
        let first_avg = mood[..mid].iter().sum::<f64>() / mid as f64;
        let second_avg = mood[mid..].iter().sum::<f64>() / (mood.len() - mid) as f64;
        if second_avg > first_avg && second_avg > config.improving_mood_floor {
            badges.push(Badge {
                kind: BadgeKind::ImprovingMood,
                label: "Improving Mood Trend".to_string(),
            });
        }
    }

    if window
        .iter()
        .all(|r| f64::from(r.steps) > config.active_day_steps)
    {
        badges.push(Badge {
            kind: BadgeKind::ActiveEveryDay,
            label: "Active Every Day".to_string(),
        });
    }

    Ok(badges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn make_record(day: u32, sleep: f64, steps: u32, heart_rate: u32, water: f64, mood: f64) -> DailyRecord {
        DailyRecord {
            date: Utc.with_ymd_and_hms(2024, 3, day, 8, 0, 0).unwrap(),
            sleep_hours: sleep,
            steps,
            heart_rate_bpm: heart_rate,
            water_oz: water,
            mood,
        }
    }

    fn flat_week(sleep: f64, steps: u32, heart_rate: u32, water: f64, mood: f64) -> Vec<DailyRecord> {
        (1..=7)
            .map(|day| make_record(day, sleep, steps, heart_rate, water, mood))
            .collect()
    }

    fn kinds(badges: &[Badge]) -> Vec<BadgeKind> {
        badges.iter().map(|b| b.kind).collect()
    }

    #[test]
    fn test_active_every_day_isolation() {
        // Steps fixed at 6000, everything else neutral: only the activity
        // badge and the in-range heart-rate badge can fire at 70 bpm.
        let records = flat_week(6.5, 6_000, 70, 50.0, 6.0);
        let badges = award(&records, &AnalyticsConfig::default()).unwrap();
        assert_eq!(
            kinds(&badges),
            vec![BadgeKind::HealthyHeartRate, BadgeKind::ActiveEveryDay]
        );
    }

    #[test]
    fn test_sleep_streak_counts_days() {
        let mut records = flat_week(6.0, 4_000, 85, 50.0, 6.0);
        for record in records.iter_mut().take(4) {
            record.sleep_hours = 7.5;
        }
        let badges = award(&records, &AnalyticsConfig::default()).unwrap();
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].kind, BadgeKind::GoodSleepStreak);
        assert_eq!(badges[0].label, "Good Sleep Streak: 4 Days");
    }

    #[test]
    fn test_sleep_streak_needs_three_days() {
        let mut records = flat_week(6.0, 4_000, 85, 50.0, 6.0);
        for record in records.iter_mut().take(2) {
            record.sleep_hours = 7.5;
        }
        let badges = award(&records, &AnalyticsConfig::default()).unwrap();
        assert!(badges.is_empty());
    }

    #[test]
    fn test_step_goal_days_fires_on_one_day() {
        let mut records = flat_week(6.0, 4_000, 85, 50.0, 6.0);
        records[3].steps = 12_000;
        let badges = award(&records, &AnalyticsConfig::default()).unwrap();
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].label, "1 Days with 10,000+ Steps");
    }

    #[test]
    fn test_hydration_champion_needs_five_days() {
        let mut records = flat_week(6.0, 4_000, 85, 70.0, 6.0);
        records[0].water_oz = 40.0;
        records[1].water_oz = 40.0;
        // 5 of 7 days at or above 64oz
        let badges = award(&records, &AnalyticsConfig::default()).unwrap();
        assert_eq!(kinds(&badges), vec![BadgeKind::HydrationChampion]);

        records[2].water_oz = 40.0;
        let badges = award(&records, &AnalyticsConfig::default()).unwrap();
        assert!(badges.is_empty());
    }

    #[test]
    fn test_healthy_heart_rate_is_inclusive() {
        let at_floor = flat_week(6.0, 4_000, 60, 50.0, 6.0);
        let badges = award(&at_floor, &AnalyticsConfig::default()).unwrap();
        assert_eq!(kinds(&badges), vec![BadgeKind::HealthyHeartRate]);

        let at_ceiling = flat_week(6.0, 4_000, 80, 50.0, 6.0);
        let badges = award(&at_ceiling, &AnalyticsConfig::default()).unwrap();
        assert_eq!(kinds(&badges), vec![BadgeKind::HealthyHeartRate]);

        let above = flat_week(6.0, 4_000, 81, 50.0, 6.0);
        let badges = award(&above, &AnalyticsConfig::default()).unwrap();
        assert!(badges.is_empty());
    }

    #[test]
    fn test_improving_mood_needs_high_second_half() {
        // First half 6.0, second half 7.5: rising and above the floor.
        let records: Vec<DailyRecord> = (1..=7)
            .map(|day| {
                let mood = if day <= 3 { 6.0 } else { 7.5 };
                make_record(day, 6.0, 4_000, 85, 50.0, mood)
            })
            .collect();
        let badges = award(&records, &AnalyticsConfig::default()).unwrap();
        assert_eq!(kinds(&badges), vec![BadgeKind::ImprovingMood]);

        // Rising but capped at 6.8 never crosses the floor.
        let records: Vec<DailyRecord> = (1..=7)
            .map(|day| {
                let mood = if day <= 3 { 6.0 } else { 6.8 };
                make_record(day, 6.0, 4_000, 85, 50.0, mood)
            })
            .collect();
        let badges = award(&records, &AnalyticsConfig::default()).unwrap();
        assert!(badges.is_empty());
    }

    #[test]
    fn test_improving_mood_skipped_for_single_record() {
        let records = vec![make_record(1, 6.0, 4_000, 85, 50.0, 9.0)];
        let badges = award(&records, &AnalyticsConfig::default()).unwrap();
        assert!(!badges.iter().any(|b| b.kind == BadgeKind::ImprovingMood));
    }

    #[test]
    fn test_active_every_day_is_strict_on_every_record() {
        let mut records = flat_week(6.0, 6_000, 85, 50.0, 6.0);
        records[5].steps = 5_000; // floor is exclusive
        let badges = award(&records, &AnalyticsConfig::default()).unwrap();
        assert!(!badges.iter().any(|b| b.kind == BadgeKind::ActiveEveryDay));
    }

    #[test]
    fn test_badges_only_window_records_count() {
        // 10 records: the 3 oldest hit the step goal but fall outside the
        // 7-day window.
        let mut records: Vec<DailyRecord> = (1..=10)
            .map(|day| make_record(day, 6.0, 4_000, 85, 50.0, 6.0))
            .collect();
        for record in records.iter_mut().take(3) {
            record.steps = 11_000;
        }
        let badges = award(&records, &AnalyticsConfig::default()).unwrap();
        assert!(!badges.iter().any(|b| b.kind == BadgeKind::StepGoalDays));
    }

    #[test]
    fn test_empty_series_is_error() {
        let result = award(&[], &AnalyticsConfig::default());
        assert!(matches!(result, Err(AnalyticsError::EmptyInput)));
    }
}
