// ABOUTME: Daily nutrition report pipeline from raw metrics and meal logs
// ABOUTME: Targets, BMI, daily deficits, recommendations, weekly patterns, recovery and alert in one record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

use chrono::{DateTime, Days, NaiveDate, Utc};
use nutrition_core::constants::deficit::{DEFAULT_CHRONIC_DAYS_THRESHOLD, DEFAULT_TOP_DEFICITS};
use nutrition_core::errors::{AppError, AppResult};
use nutrition_core::models::{
    DailyNutrientLog, DietPreference, MealEntry, Nutrient, NutritionTargets, RawUserMetrics,
    UserMetrics,
};
use nutrition_intelligence::{
    analyze_weekly_deficits, calculate_bmi, calculate_nutrition_targets, classify_bmi,
    compute_deficits, compute_excesses, daily_totals, estimate_recovery_time,
    generate_daily_alert, generate_deficit_summary, generate_recommendations,
    identify_chronic_deficits, parse_user_metrics, weekly_window, BmiCategory, DailyAlert,
    DailyDeficits, FoodRecommendation, NutrientDeficit, NutrientExcess, NutritionConfig,
    RecoveryEstimate, WeeklyDeficitPattern,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Input for a daily report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionReportRequest {
    /// Unvalidated body metrics
    pub metrics: RawUserMetrics,
    /// Day the report is for
    pub date: NaiveDate,
    /// Meal log covering the report day and the week before it
    #[serde(default)]
    pub meals: Vec<MealEntry>,
    /// Diet used to filter food recommendations
    #[serde(default)]
    pub diet_preference: DietPreference,
}

/// Recovery estimate attached to a weekly pattern
#[derive(Debug, Clone, Serialize)]
pub struct PatternRecovery {
    /// Nutrient the estimate refers to
    pub nutrient_key: Nutrient,
    /// Estimated recovery
    #[serde(flatten)]
    pub estimate: RecoveryEstimate,
}

/// Complete daily nutrition report
#[derive(Debug, Clone, Serialize)]
pub struct NutritionReport {
    /// Unique report identifier
    pub report_id: Uuid,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Day the report is for
    pub date: NaiveDate,
    /// Validated metrics
    pub metrics: UserMetrics,
    /// Activity level display label
    pub activity_level: &'static str,
    /// Daily targets
    pub targets: NutritionTargets,
    /// Body mass index, one decimal
    pub bmi: f64,
    /// WHO category for `bmi`
    pub bmi_category: BmiCategory,
    /// Totals logged on the report day
    pub today: DailyNutrientLog,
    /// All deficits for the report day, worst first
    pub deficits: Vec<NutrientDeficit>,
    /// Intakes above tolerable upper limits
    pub excesses: Vec<NutrientExcess>,
    /// One-sentence summary of `deficits`
    pub summary: String,
    /// The highest-priority deficits
    pub top_deficits: Vec<NutrientDeficit>,
    /// Foods for the top deficits
    pub recommendations: Vec<FoodRecommendation>,
    /// Patterns over the seven days before the report day
    pub weekly_patterns: Vec<WeeklyDeficitPattern>,
    /// Recovery estimate per weekly pattern
    pub recovery_estimates: Vec<PatternRecovery>,
    /// Nutrients short on at least three days of the week
    pub chronic_deficits: Vec<Nutrient>,
    /// Alert for a chronic high-risk pattern
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_alert: Option<DailyAlert>,
}

/// Builds [`NutritionReport`]s with a fixed engine configuration
#[derive(Debug, Clone, Default)]
pub struct NutritionReportService {
    config: NutritionConfig,
}

impl NutritionReportService {
    /// Create a service with an explicit configuration
    #[must_use]
    pub const fn new(config: NutritionConfig) -> Self {
        Self { config }
    }

    /// Create a service using the process-wide configuration
    #[must_use]
    pub fn from_global_config() -> Self {
        Self::new(NutritionConfig::global().clone())
    }

    /// Run the full pipeline for one day
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` when the metrics fail validation or the report
    /// date has no preceding day
    #[instrument(skip(self, request), fields(date = %request.date, meals = request.meals.len()))]
    pub fn generate(&self, request: NutritionReportRequest) -> AppResult<NutritionReport> {
        let NutritionReportRequest {
            metrics,
            date,
            meals,
            diet_preference,
        } = request;

        let metrics = parse_user_metrics(metrics).inspect_err(|e| {
            warn!(error = %e, "Rejected report request with invalid metrics");
        })?;
        let yesterday = date
            .checked_sub_days(Days::new(1))
            .ok_or_else(|| AppError::invalid_input(format!("Report date {date} is out of range")))?;

        let targets = calculate_nutrition_targets(&metrics, &self.config);
        let bmi = calculate_bmi(metrics.weight_kg, metrics.height_cm);
        info!(
            bmr = targets.bmr,
            tdee = targets.tdee,
            calories = targets.calories,
            bmi,
            "Computed nutrition targets"
        );

        let today = daily_totals(&meals, date);
        let deficits = compute_deficits(&today.nutrients, &targets);
        let excesses = compute_excesses(&today.nutrients);
        let summary = generate_deficit_summary(&deficits);
        let top_deficits: Vec<NutrientDeficit> =
            deficits.iter().take(DEFAULT_TOP_DEFICITS).cloned().collect();
        debug!(
            meals_logged = today.meals_logged,
            deficits = deficits.len(),
            excesses = excesses.len(),
            "Analyzed daily intake"
        );
        if !excesses.is_empty() {
            warn!(excesses = excesses.len(), "Intake above tolerable upper limits");
        }

        let recommendations = generate_recommendations(&deficits, diet_preference);

        let week = weekly_window(&meals, yesterday);
        let weekly_patterns = analyze_weekly_deficits(&week, &targets);
        let recovery_estimates = weekly_patterns
            .iter()
            .map(|pattern| PatternRecovery {
                nutrient_key: pattern.nutrient,
                estimate: estimate_recovery_time(pattern),
            })
            .collect();
        let chronic_deficits = chronic_deficits_for(&week, &targets);
        debug!(
            patterns = weekly_patterns.len(),
            chronic = chronic_deficits.len(),
            "Analyzed weekly patterns"
        );

        let yesterday_deficits = week
            .last()
            .map(|log| compute_deficits(&log.nutrients, &targets))
            .unwrap_or_default();
        let daily_alert = generate_daily_alert(&yesterday_deficits, &weekly_patterns);
        if let Some(alert) = &daily_alert {
            info!(priority = ?alert.priority, title = %alert.title, "Raised daily alert");
        }

        Ok(NutritionReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            date,
            activity_level: metrics.activity_level.label(),
            metrics,
            targets,
            bmi,
            bmi_category: classify_bmi(bmi),
            today,
            deficits,
            excesses,
            summary,
            top_deficits,
            recommendations,
            weekly_patterns,
            recovery_estimates,
            chronic_deficits,
            daily_alert,
        })
    }
}

fn chronic_deficits_for(week: &[DailyNutrientLog], targets: &NutritionTargets) -> Vec<Nutrient> {
    let daily: Vec<DailyDeficits> = week
        .iter()
        .map(|log| DailyDeficits {
            date: log.date,
            deficits: compute_deficits(&log.nutrients, targets),
        })
        .collect();
    identify_chronic_deficits(&daily, DEFAULT_CHRONIC_DAYS_THRESHOLD)
}
