//! Report assembly
//!
//! Bundles every derivation into one JSON payload for the presentation
//! layer, stamped with producer metadata and the window that was actually
//! analyzed.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::config::AnalyticsConfig;
use crate::error::AnalyticsError;
use crate::series::tail_window;
use crate::types::{DailyRecord, FocusReport, InsightReport, ReportProducer, ReportWindow};
use crate::{badges, focus, insights, summary};
use crate::{ENGINE_VERSION, PRODUCER_NAME};

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Builder for aggregate insight reports
pub struct ReportBuilder {
    instance_id: String,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder {
    /// Create a builder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create a builder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    /// Build a report from the trailing window of a record series
    pub fn build(
        &self,
        records: &[DailyRecord],
        config: &AnalyticsConfig,
    ) -> Result<InsightReport, AnalyticsError> {
        let window = tail_window(records, config.window_days);
        if window.is_empty() {
            return Err(AnalyticsError::EmptyInput);
        }
        debug!(
            records = window.len(),
            requested = config.window_days,
            "building insight report"
        );

        let summary = summary::summarize(records, config)?;
        let snapshot = summary::latest(records).ok_or(AnalyticsError::EmptyInput)?;
        let focus_category = focus::weekly_focus(records, config)?;
        let insights = insights::generate(records, config)?;
        let badges = badges::award(records, config)?;

        Ok(InsightReport {
            report_version: REPORT_VERSION.to_string(),
            producer: ReportProducer {
                name: PRODUCER_NAME.to_string(),
                version: ENGINE_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            generated_at_utc: Utc::now().to_rfc3339(),
            window: ReportWindow {
                requested_days: config.window_days,
                record_count: window.len(),
                start_date: window[0].date.format("%Y-%m-%d").to_string(),
                end_date: window[window.len() - 1].date.format("%Y-%m-%d").to_string(),
            },
            summary,
            snapshot,
            focus: FocusReport {
                category: focus_category,
                title: focus_category.title().to_string(),
                recommendation: focus_category.recommendation().to_string(),
            },
            insights,
            badges,
        })
    }

    /// Build and serialize to pretty JSON
    pub fn build_json(
        &self,
        records: &[DailyRecord],
        config: &AnalyticsConfig,
    ) -> Result<String, AnalyticsError> {
        let report = self.build(records, config)?;
        serde_json::to_string_pretty(&report).map_err(AnalyticsError::JsonError)
    }
}
