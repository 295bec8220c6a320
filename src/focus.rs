//! Weekly focus selection
//!
//! Ranks the four actionable metrics by normalized deviation from their
//! ideals over the trailing window and maps the worst one to a fixed
//! recommendation. Heart rate is not rankable here: it has no deficit the
//! user can directly act on week to week.

use serde::{Deserialize, Serialize};

use crate::config::AnalyticsConfig;
use crate::error::AnalyticsError;
use crate::series::{metric_values, tail_window};
use crate::stats::average;
use crate::types::{DailyRecord, Metric};

/// Deviations below this count as exactly on target
const BALANCE_EPSILON: f64 = 1e-9;

/// The single metric judged furthest from its ideal, or balance when
/// nothing deviates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusCategory {
    ImproveSleepQuality,
    IncreaseDailyActivity,
    BoostHydration,
    EnhanceMood,
    MaintainBalance,
}

impl FocusCategory {
    /// Short title shown as the week's priority
    pub fn title(&self) -> &'static str {
        match self {
            FocusCategory::ImproveSleepQuality => "Improve Sleep Quality",
            FocusCategory::IncreaseDailyActivity => "Increase Daily Activity",
            FocusCategory::BoostHydration => "Boost Hydration",
            FocusCategory::EnhanceMood => "Enhance Mood and Mental Wellbeing",
            FocusCategory::MaintainBalance => "Maintain Your Healthy Balance",
        }
    }

    /// The fixed recommendation paired with this category (1:1, no
    /// randomness)
    pub fn recommendation(&self) -> &'static str {
        match self {
            FocusCategory::ImproveSleepQuality => {
                "This week, focus on establishing a consistent sleep schedule. Aim to go to bed and wake up at the same time each day, even on weekends. Limit screen time before bed and create a relaxing bedtime routine."
            }
            FocusCategory::IncreaseDailyActivity => {
                "Try to incorporate more movement into your day. Take short walking breaks, use stairs instead of elevators, or add a 15-minute workout to your morning routine. Small changes can lead to significant improvements."
            }
            FocusCategory::BoostHydration => {
                "Keep a water bottle with you throughout the day and set reminders to drink regularly. Try infusing your water with fruits or herbs for variety, and remember that many foods like fruits and vegetables also contribute to hydration."
            }
            FocusCategory::EnhanceMood => {
                "Prioritize activities that bring you joy and relaxation. Practice mindfulness or meditation for a few minutes each day, connect with friends or family, and make time for hobbies you enjoy."
            }
            FocusCategory::MaintainBalance => {
                "You're doing well across all health metrics! This week, focus on maintaining your healthy habits while finding ways to make them more enjoyable and sustainable for the long term."
            }
        }
    }
}

/// Pick the focus for the coming week from the trailing window.
///
/// Sleep deviation is two-sided (oversleeping counts against the ideal);
/// steps, water, and mood only count deficits, floored at zero. Ties
/// resolve in the fixed order sleep, steps, water, mood. A window with
/// every deviation at zero maintains balance.
pub fn weekly_focus(
    records: &[DailyRecord],
    config: &AnalyticsConfig,
) -> Result<FocusCategory, AnalyticsError> {
    let window = tail_window(records, config.window_days);
    if window.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }

    let sleep_avg = average(&metric_values(window, Metric::Sleep))?;
    let steps_avg = average(&metric_values(window, Metric::Steps))?;
    let water_avg = average(&metric_values(window, Metric::Water))?;
    let mood_avg = average(&metric_values(window, Metric::Mood))?;

    let candidates = [
        (
            FocusCategory::ImproveSleepQuality,
            ((sleep_avg - config.sleep_ideal_hours) / config.sleep_ideal_hours).abs(),
        ),
        (
            FocusCategory::IncreaseDailyActivity,
            ((config.steps_goal - steps_avg) / config.steps_goal).max(0.0),
        ),
        (
            FocusCategory::BoostHydration,
            ((config.water_goal_oz - water_avg) / config.water_goal_oz).max(0.0),
        ),
        (
            FocusCategory::EnhanceMood,
            ((config.mood_ideal - mood_avg) / config.mood_ideal).max(0.0),
        ),
    ];

    let (mut focus, mut worst) = candidates[0];
    for &(category, deviation) in &candidates[1..] {
        if deviation > worst {
            focus = category;
            worst = deviation;
        }
    }

    if worst < BALANCE_EPSILON {
        return Ok(FocusCategory::MaintainBalance);
    }

    Ok(focus)
}
