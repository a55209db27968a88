// ABOUTME: Seven-day deficit pattern analysis with health risk scoring
// ABOUTME: Weekly patterns, daily alerts for chronic gaps, and recovery time estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

//! Weekly Deficit Tracking
//!
//! Looks at a week of daily totals and reports nutrients that were short
//! often enough to matter, scored by magnitude and consistency.

use crate::deficit_calculator::NutrientDeficit;
use crate::health_impact::{health_impact, HealthStory};
use crate::nutrient_info::documented_nutrients;
use nutrition_core::constants::alert::{
    CRITICAL_RISK_SCORE, MAX_ACTIONABLE_NUTRIENTS, MIN_ALERT_RISK_SCORE,
};
use nutrition_core::constants::recovery::{
    CHRONIC_CONFIDENCE, DEFAULT_BASE_DAYS, DEFAULT_CONFIDENCE, IRON_BASE_DAYS,
    NORMAL_LEVELS_FRACTION, VITAMIN_C_BASE_DAYS, VITAMIN_D_BASE_DAYS,
};
use nutrition_core::constants::weekly::{
    CHRONIC_MIN_DAYS, DAYS_PER_WEEK, DAY_DEFICIENT_FRACTION, FREQUENT_MIN_DAYS, MAX_RISK_SCORE,
    RISK_CONSISTENCY_POINTS, RISK_MAGNITUDE_WEIGHT,
};
use nutrition_core::models::{DailyNutrientLog, Nutrient, NutritionTargets};
use serde::Serialize;
use std::cmp::Ordering;

/// How consistently a nutrient was short across the week
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PatternSeverity {
    /// Fewer than 3 deficient days
    Occasional,
    /// 3 or 4 deficient days
    Frequent,
    /// 5 or more deficient days
    Chronic,
}

impl PatternSeverity {
    /// Severity for a count of deficient days
    #[must_use]
    pub const fn from_days_deficient(days: usize) -> Self {
        if days >= CHRONIC_MIN_DAYS {
            Self::Chronic
        } else if days >= FREQUENT_MIN_DAYS {
            Self::Frequent
        } else {
            Self::Occasional
        }
    }
}

/// A nutrient that fell short of its weekly target
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeeklyDeficitPattern {
    /// Nutrient identifier
    #[serde(rename = "nutrient_key")]
    pub nutrient: Nutrient,
    /// Human-readable name
    pub display_name: &'static str,
    /// Measurement unit
    pub unit: &'static str,
    /// Days with intake strictly below 80% of the daily target
    pub days_deficient: usize,
    /// Mean daily intake over the supplied days
    pub average_intake: f64,
    /// Daily target times seven
    pub weekly_target: f64,
    /// `weekly_target` minus intake over the supplied days, always positive
    pub cumulative_deficit: f64,
    /// Consistency tier
    pub severity: PatternSeverity,
    /// 0-100 blend of deficit magnitude and consistency
    pub health_risk_score: f64,
    /// Symptoms within days or weeks
    pub immediate_symptoms: &'static [&'static str],
    /// Conditions risked over months or years
    pub long_term_risks: &'static [&'static str],
    /// How long correction usually takes
    pub recovery_timeline: &'static str,
    /// Narrative content
    pub story: &'static HealthStory,
}

/// Urgency of a daily alert
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertPriority {
    /// Risk score up to 50
    Medium,
    /// Risk score above 50
    High,
    /// Risk score above 75
    Critical,
}

/// A nutrient to focus on today
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActionableNutrient {
    /// Display name of the nutrient
    pub nutrient: &'static str,
    /// Daily target
    pub target_today: f64,
    /// Measurement unit
    pub unit: &'static str,
}

/// Nudge raised when a chronic, high-risk pattern exists
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyAlert {
    /// Urgency
    pub priority: AlertPriority,
    /// Headline
    pub title: String,
    /// Body text
    pub message: String,
    /// Up to three nutrients with today's target
    pub actionable_nutrients: Vec<ActionableNutrient>,
}

/// Expected time to correct a weekly pattern
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RecoveryEstimate {
    /// Days until levels are back in the normal range
    pub days_to_normal_levels: u32,
    /// Days until levels are optimal
    pub days_to_optimal_levels: u32,
    /// Fixed heuristic confidence
    pub confidence: f64,
}

/// Weekly patterns for nutrients with a target and documented health impact
///
/// `daily_logs` is normally seven days; the average is taken over however many
/// are supplied. An empty slice yields no patterns. Result is sorted by
/// `health_risk_score`, highest first.
#[must_use]
pub fn analyze_weekly_deficits(
    daily_logs: &[DailyNutrientLog],
    targets: &NutritionTargets,
) -> Vec<WeeklyDeficitPattern> {
    if daily_logs.is_empty() {
        return Vec::new();
    }
    let days_logged = daily_logs.len() as f64;
    let days_per_week = DAYS_PER_WEEK as f64;

    let mut patterns: Vec<WeeklyDeficitPattern> = documented_nutrients()
        .filter_map(|(nutrient, info)| {
            let impact = health_impact(nutrient)?;
            let daily_target = targets.defined_target(nutrient)?;

            let intakes = daily_logs
                .iter()
                .map(|log| log.nutrients.amount_or_zero(nutrient));
            let days_deficient = intakes
                .clone()
                .filter(|&intake| intake < daily_target * DAY_DEFICIENT_FRACTION)
                .count();
            let average_intake = intakes.clone().sum::<f64>() / days_logged;
            let weekly_target = daily_target * days_per_week;
            // Per-day shortfalls keep an exactly met week at exactly zero
            let shortfall: f64 = intakes.map(|intake| daily_target - intake).sum();
            let cumulative_deficit = (days_per_week - days_logged).mul_add(daily_target, shortfall);

            if cumulative_deficit <= 0.0 {
                return None;
            }

            let percentage_deficit = cumulative_deficit / weekly_target * 100.0;
            let consistency = days_deficient as f64 / days_per_week;
            let health_risk_score = percentage_deficit
                .mul_add(RISK_MAGNITUDE_WEIGHT, consistency * RISK_CONSISTENCY_POINTS)
                .min(MAX_RISK_SCORE);

            Some(WeeklyDeficitPattern {
                nutrient,
                display_name: info.display_name,
                unit: info.unit,
                days_deficient,
                average_intake,
                weekly_target,
                cumulative_deficit,
                severity: PatternSeverity::from_days_deficient(days_deficient),
                health_risk_score,
                immediate_symptoms: impact.immediate_symptoms,
                long_term_risks: impact.long_term_risks,
                recovery_timeline: impact.recovery_timeline,
                story: &impact.story,
            })
        })
        .collect();

    patterns.sort_by(|a, b| {
        b.health_risk_score
            .partial_cmp(&a.health_risk_score)
            .unwrap_or(Ordering::Equal)
    });
    patterns
}

/// Alert for the highest-risk chronic pattern, if any scores above 50
///
/// `weekly_patterns` is expected in the order returned by
/// [`analyze_weekly_deficits`]; the first qualifying pattern drives the text.
/// Thresholds apply to the risk score rounded to a whole point.
#[must_use]
pub fn generate_daily_alert(
    yesterday_deficits: &[NutrientDeficit],
    weekly_patterns: &[WeeklyDeficitPattern],
) -> Option<DailyAlert> {
    let chronic: Vec<&WeeklyDeficitPattern> = weekly_patterns
        .iter()
        .filter(|p| {
            p.severity == PatternSeverity::Chronic
                && p.health_risk_score.round() > MIN_ALERT_RISK_SCORE
        })
        .collect();

    let top = chronic.first()?;
    let name = top.display_name;
    let days = top.days_deficient;
    let symptom = top.immediate_symptoms.first().copied().unwrap_or_default();

    let risk_score = top.health_risk_score.round();
    let priority = if risk_score > CRITICAL_RISK_SCORE {
        AlertPriority::Critical
    } else if risk_score > MIN_ALERT_RISK_SCORE {
        AlertPriority::High
    } else {
        AlertPriority::Medium
    };

    let deficient_yesterday = yesterday_deficits
        .iter()
        .any(|d| d.nutrient == top.nutrient);
    let message = if deficient_yesterday {
        format!(
            "You missed your {name} target yesterday AND for {days} of the last 7 days. \
             This chronic deficit increases your risk of: {symptom}. \
             TODAY is critical - aim for your full daily target to start recovery."
        )
    } else {
        format!(
            "You've been deficient in {name} for {days}/7 days this week. \
             Your body's stores are depleting. \
             Prioritize {name}-rich foods TODAY to prevent: {symptom}."
        )
    };

    let actionable_nutrients = chronic
        .iter()
        .take(MAX_ACTIONABLE_NUTRIENTS)
        .map(|p| ActionableNutrient {
            nutrient: p.display_name,
            target_today: p.weekly_target / DAYS_PER_WEEK as f64,
            unit: p.unit,
        })
        .collect();

    Some(DailyAlert {
        priority,
        title: format!("{name} Alert: {days}/7 Days Deficient"),
        message,
        actionable_nutrients,
    })
}

const fn recovery_base_days(nutrient: Nutrient) -> f64 {
    match nutrient {
        Nutrient::VitaminDMcg => VITAMIN_D_BASE_DAYS,
        Nutrient::IronMg => IRON_BASE_DAYS,
        Nutrient::VitaminCMg => VITAMIN_C_BASE_DAYS,
        Nutrient::ProteinG
        | Nutrient::CarbsG
        | Nutrient::FatG
        | Nutrient::FiberG
        | Nutrient::VitaminAMcg
        | Nutrient::VitaminEMg
        | Nutrient::VitaminKMcg
        | Nutrient::ThiaminMg
        | Nutrient::RiboflavinMg
        | Nutrient::NiacinMg
        | Nutrient::VitaminB6Mg
        | Nutrient::FolateMcg
        | Nutrient::VitaminB12Mcg
        | Nutrient::CalciumMg
        | Nutrient::MagnesiumMg
        | Nutrient::PhosphorusMg
        | Nutrient::PotassiumMg
        | Nutrient::SodiumMg
        | Nutrient::ZincMg
        | Nutrient::CopperMg
        | Nutrient::ManganeseMg
        | Nutrient::SeleniumMcg
        | Nutrient::Omega3G
        | Nutrient::Omega6G
        | Nutrient::WaterL => DEFAULT_BASE_DAYS,
    }
}

/// Days to normal and optimal levels, scaled by the size of the weekly deficit
#[must_use]
pub fn estimate_recovery_time(pattern: &WeeklyDeficitPattern) -> RecoveryEstimate {
    let deficit_fraction = pattern.cumulative_deficit / pattern.weekly_target;
    let adjusted_days = recovery_base_days(pattern.nutrient) * deficit_fraction;

    RecoveryEstimate {
        days_to_normal_levels: (adjusted_days * NORMAL_LEVELS_FRACTION).ceil() as u32,
        days_to_optimal_levels: adjusted_days.ceil() as u32,
        confidence: if pattern.severity == PatternSeverity::Chronic {
            CHRONIC_CONFIDENCE
        } else {
            DEFAULT_CONFIDENCE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NutritionConfig;
    use crate::nutrition_calculator::calculate_nutrition_targets;
    use nutrition_core::models::{ActivityLevel, Goal, Sex, UserMetrics};

    #[test]
    fn test_pattern_severity_tiers() {
        assert_eq!(PatternSeverity::from_days_deficient(7), PatternSeverity::Chronic);
        assert_eq!(PatternSeverity::from_days_deficient(5), PatternSeverity::Chronic);
        assert_eq!(PatternSeverity::from_days_deficient(4), PatternSeverity::Frequent);
        assert_eq!(PatternSeverity::from_days_deficient(3), PatternSeverity::Frequent);
        assert_eq!(PatternSeverity::from_days_deficient(2), PatternSeverity::Occasional);
    }

    #[test]
    fn test_recovery_base_days() {
        assert!((recovery_base_days(Nutrient::VitaminDMcg) - 60.0).abs() < f64::EPSILON);
        assert!((recovery_base_days(Nutrient::Omega3G) - 21.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_week_has_no_patterns() {
        let metrics = UserMetrics {
            age: 30,
            sex: Sex::Male,
            weight_kg: 75.0,
            height_cm: 180.0,
            activity_level: ActivityLevel::ModeratelyActive,
            goal: Goal::Maintain,
        };
        let targets = calculate_nutrition_targets(&metrics, &NutritionConfig::default());
        assert!(analyze_weekly_deficits(&[], &targets).is_empty());
    }
}
