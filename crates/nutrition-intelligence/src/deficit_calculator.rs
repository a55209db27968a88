// ABOUTME: Daily nutrient gap and excess detection against personal targets
// ABOUTME: Severity classification, priority ordering, chronic gap detection and summary text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

//! Deficit Calculator
//!
//! Compares one day of logged intake against [`NutritionTargets`] for every
//! nutrient with an educational record. Absent intake counts as zero.

use crate::nutrient_info::{documented_nutrients, NutrientInfo};
use chrono::NaiveDate;
use nutrition_core::constants::deficit::{
    HIGH_SEVERITY_MIN_PERCENT, LOW_SEVERITY_MIN_PERCENT, MEDIUM_SEVERITY_MIN_PERCENT,
};
use nutrition_core::models::{Nutrient, NutrientTotals, NutritionTargets};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// How far below target a nutrient is, ordered from least to most severe
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DeficitSeverity {
    /// 80% of target or more
    Low,
    /// 50% up to 80%
    Medium,
    /// 25% up to 50%
    High,
    /// Below 25%
    Critical,
}

/// A nutrient whose intake fell short of its target
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NutrientDeficit {
    /// Nutrient identifier
    #[serde(rename = "nutrient_key")]
    pub nutrient: Nutrient,
    /// Human-readable name
    pub display_name: &'static str,
    /// Measurement unit
    pub unit: &'static str,
    /// Logged intake
    pub current: f64,
    /// Daily target
    pub target: f64,
    /// `target - current`, always positive
    pub deficit: f64,
    /// `current / target * 100`
    pub percentage_met: f64,
    /// Severity tier from `percentage_met`
    pub severity: DeficitSeverity,
    /// What the nutrient does in the body
    pub health_impact: &'static [&'static str],
    /// Foods that supply it
    pub food_sources: &'static [&'static str],
}

/// A nutrient whose intake exceeded its tolerable upper limit
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NutrientExcess {
    /// Nutrient identifier
    #[serde(rename = "nutrient_key")]
    pub nutrient: Nutrient,
    /// Human-readable name
    pub display_name: &'static str,
    /// Measurement unit
    pub unit: &'static str,
    /// Logged intake
    pub current: f64,
    /// The upper limit that was exceeded
    pub target: f64,
    /// `current - upper_limit`
    pub excess: f64,
    /// `excess / upper_limit * 100`
    pub percentage_over: f64,
    /// Warning messages
    pub health_risks: Vec<String>,
}

/// Deficits computed for one calendar day
#[derive(Debug, Clone, Serialize)]
pub struct DailyDeficits {
    /// Day the deficits refer to
    pub date: NaiveDate,
    /// Deficits for that day
    pub deficits: Vec<NutrientDeficit>,
}

/// Severity tier for a percentage of target met
#[must_use]
pub fn classify_severity(percentage_met: f64) -> DeficitSeverity {
    if percentage_met >= LOW_SEVERITY_MIN_PERCENT {
        DeficitSeverity::Low
    } else if percentage_met >= MEDIUM_SEVERITY_MIN_PERCENT {
        DeficitSeverity::Medium
    } else if percentage_met >= HIGH_SEVERITY_MIN_PERCENT {
        DeficitSeverity::High
    } else {
        DeficitSeverity::Critical
    }
}

fn build_deficit(
    nutrient: Nutrient,
    info: &'static NutrientInfo,
    current: f64,
    target: f64,
) -> NutrientDeficit {
    let percentage_met = current / target * 100.0;
    NutrientDeficit {
        nutrient,
        display_name: info.display_name,
        unit: info.unit,
        current,
        target,
        deficit: target - current,
        percentage_met,
        severity: classify_severity(percentage_met),
        health_impact: info.health_impact,
        food_sources: info.food_sources,
    }
}

/// Every documented nutrient below target, worst first
///
/// Ordered by severity (critical first), then by `percentage_met` ascending.
/// Nutrients without a positive target are skipped.
#[must_use]
pub fn compute_deficits(current: &NutrientTotals, targets: &NutritionTargets) -> Vec<NutrientDeficit> {
    let mut deficits: Vec<NutrientDeficit> = documented_nutrients()
        .filter_map(|(nutrient, info)| {
            let target = targets.defined_target(nutrient)?;
            let intake = current.amount_or_zero(nutrient);
            (target - intake > 0.0).then(|| build_deficit(nutrient, info, intake, target))
        })
        .collect();

    deficits.sort_by(|a, b| {
        b.severity.cmp(&a.severity).then_with(|| {
            a.percentage_met
                .partial_cmp(&b.percentage_met)
                .unwrap_or(Ordering::Equal)
        })
    });
    deficits
}

/// Every documented nutrient above its tolerable upper limit
#[must_use]
pub fn compute_excesses(current: &NutrientTotals) -> Vec<NutrientExcess> {
    documented_nutrients()
        .filter_map(|(nutrient, info)| {
            let limit = info.upper_limit?;
            let intake = current.amount_or_zero(nutrient);
            let excess = intake - limit;
            if excess <= 0.0 {
                return None;
            }

            let percentage_over = excess / limit * 100.0;
            Some(NutrientExcess {
                nutrient,
                display_name: info.display_name,
                unit: info.unit,
                current: intake,
                target: limit,
                excess,
                percentage_over,
                health_risks: vec![format!(
                    "Exceeding upper limit by {}%",
                    percentage_over.round()
                )],
            })
        })
        .collect()
}

/// The `count` highest-priority deficits
#[must_use]
pub fn get_top_deficits(
    current: &NutrientTotals,
    targets: &NutritionTargets,
    count: usize,
) -> Vec<NutrientDeficit> {
    let mut deficits = compute_deficits(current, targets);
    deficits.truncate(count);
    deficits
}

/// Nutrients deficient on at least `days_threshold` of the given days, in catalog order
#[must_use]
pub fn identify_chronic_deficits(
    daily_deficits: &[DailyDeficits],
    days_threshold: usize,
) -> Vec<Nutrient> {
    let mut counts: BTreeMap<Nutrient, usize> = BTreeMap::new();
    for day in daily_deficits {
        for deficit in &day.deficits {
            *counts.entry(deficit.nutrient).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .filter(|&(_, days)| days >= days_threshold)
        .map(|(nutrient, _)| nutrient)
        .collect()
}

const fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// One-sentence summary of a priority-ordered deficit list
#[must_use]
pub fn generate_deficit_summary(deficits: &[NutrientDeficit]) -> String {
    let Some(top) = deficits.first() else {
        return "Great job! You're meeting all your nutrition targets today.".to_owned();
    };

    let critical = deficits
        .iter()
        .filter(|d| d.severity == DeficitSeverity::Critical)
        .count();
    let high = deficits
        .iter()
        .filter(|d| d.severity == DeficitSeverity::High)
        .count();

    if critical > 0 {
        format!(
            "You have {critical} critical nutrient gap{}. Priority: {}.",
            plural(critical),
            top.display_name
        )
    } else if high > 0 {
        format!(
            "You're low on {high} nutrient{}. Top gap: {}.",
            plural(high),
            top.display_name
        )
    } else {
        format!(
            "Minor gaps in {} nutrient{}. You're doing well!",
            deficits.len(),
            plural(deficits.len())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_boundaries() {
        assert_eq!(classify_severity(80.0), DeficitSeverity::Low);
        assert_eq!(classify_severity(79.9), DeficitSeverity::Medium);
        assert_eq!(classify_severity(50.0), DeficitSeverity::Medium);
        assert_eq!(classify_severity(25.0), DeficitSeverity::High);
        assert_eq!(classify_severity(24.9), DeficitSeverity::Critical);
        assert_eq!(classify_severity(0.0), DeficitSeverity::Critical);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(DeficitSeverity::Critical > DeficitSeverity::High);
        assert!(DeficitSeverity::High > DeficitSeverity::Medium);
        assert!(DeficitSeverity::Medium > DeficitSeverity::Low);
    }

    #[test]
    fn test_excess_message_rounds_percentage() {
        let current = NutrientTotals::new().with(Nutrient::IronMg, 60.0);
        let excesses = compute_excesses(&current);

        assert_eq!(excesses.len(), 1);
        assert_eq!(excesses[0].nutrient, Nutrient::IronMg);
        assert!((excesses[0].excess - 15.0).abs() < 1e-9);
        assert_eq!(excesses[0].health_risks, vec!["Exceeding upper limit by 33%"]);
    }

    #[test]
    fn test_excess_at_limit_not_reported() {
        let current = NutrientTotals::new().with(Nutrient::ZincMg, 40.0);
        assert!(compute_excesses(&current).is_empty());
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(
            generate_deficit_summary(&[]),
            "Great job! You're meeting all your nutrition targets today."
        );
    }
}
