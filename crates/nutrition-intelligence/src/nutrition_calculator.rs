// ABOUTME: Nutrition target calculation using the Mifflin-St Jeor equation and DRI heuristics
// ABOUTME: BMR, TDEE, goal calories, macro split, BMI, metric validation, and full target records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

//! Nutrition Calculator Module
//!
//! Deterministic daily target calculation from body metrics. Every function
//! is pure: identical inputs always produce identical outputs.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>
//!
//! - World Health Organization BMI classification.

use crate::config::{BmrConfig, EnergyBalanceConfig, MacronutrientConfig, NutritionConfig};
use crate::rda::get_micronutrient_rda;
use nutrition_core::constants::bmi::{NORMAL_BELOW, OVERWEIGHT_BELOW, UNDERWEIGHT_BELOW};
use nutrition_core::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use nutrition_core::errors::AppResult;
use nutrition_core::models::{
    ActivityLevel, Goal, MacroTargets, NutritionTargets, RawUserMetrics, Sex, UserMetrics,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// WHO body mass index category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BmiCategory {
    /// BMI below 18.5
    #[serde(rename = "Underweight")]
    Underweight,
    /// BMI from 18.5 up to 25
    #[serde(rename = "Normal weight")]
    NormalWeight,
    /// BMI from 25 up to 30
    #[serde(rename = "Overweight")]
    Overweight,
    /// BMI of 30 or more
    #[serde(rename = "Obese")]
    Obese,
}

impl BmiCategory {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Male: +5
/// - Female: -161
/// - Other: -78 (midpoint, configurable)
///
/// The result is not rounded.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(metrics: &UserMetrics, config: &BmrConfig) -> f64 {
    let weight_component = config.msj_weight_coef * metrics.weight_kg;
    let height_component = config.msj_height_coef * metrics.height_cm;
    let age_component = config.msj_age_coef * f64::from(metrics.age);

    let sex_constant = match metrics.sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
        Sex::Other => config.msj_other_constant,
    };

    weight_component + height_component + age_component + sex_constant
}

/// Calculate Total Daily Energy Expenditure, rounded to whole kcal
///
/// Formula: TDEE = round(BMR x activity multiplier)
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> u32 {
    round_kcal(bmr * activity_level.multiplier())
}

/// Adjust TDEE for the user's goal
///
/// Lose applies a 20% deficit, gain a 15% surplus; maintain returns TDEE unchanged.
#[must_use]
pub fn calculate_target_calories(tdee: u32, goal: Goal, config: &EnergyBalanceConfig) -> u32 {
    match goal {
        Goal::Lose => round_kcal(f64::from(tdee) * config.lose_calorie_factor),
        Goal::Gain => round_kcal(f64::from(tdee) * config.gain_calorie_factor),
        Goal::Maintain => tdee,
    }
}

/// Split a calorie target into macronutrient grams
///
/// Protein is goal-dependent g/kg body weight, fat a fixed share of calories,
/// carbohydrates take the remainder and fiber follows the 14 g per 1000 kcal
/// DRI heuristic. Intermediate values are kept exact; each gram target is
/// rounded once at the end.
#[must_use]
pub fn calculate_macros(
    calories: u32,
    weight_kg: f64,
    goal: Goal,
    config: &MacronutrientConfig,
) -> MacroTargets {
    let calories = f64::from(calories);

    let protein_g_per_kg = match goal {
        Goal::Lose => config.protein_lose_g_per_kg,
        Goal::Gain => config.protein_gain_g_per_kg,
        Goal::Maintain => config.protein_maintain_g_per_kg,
    };
    let protein_g = weight_kg * protein_g_per_kg;

    let fat_kcal = calories * config.fat_calorie_fraction;
    let fat_g = fat_kcal / KCAL_PER_G_FAT;

    let protein_kcal = protein_g * KCAL_PER_G_PROTEIN;
    let carbs_g = (calories - protein_kcal - fat_kcal) / KCAL_PER_G_CARBS;

    let fiber_g = calories / 1000.0 * config.fiber_g_per_1000_kcal;

    MacroTargets {
        protein_g: protein_g.round(),
        carbs_g: carbs_g.round(),
        fat_g: fat_g.round(),
        fiber_g: fiber_g.round(),
    }
}

/// Report every violated bound in unvalidated metrics
///
/// Never fails; an empty list means the metrics can be converted.
#[must_use]
pub fn validate_user_metrics(metrics: &RawUserMetrics) -> Vec<String> {
    metrics.violations()
}

/// Validate and convert raw metrics
///
/// # Errors
///
/// Returns `INVALID_INPUT` with the violation list in `details` when any bound is violated
pub fn parse_user_metrics(metrics: RawUserMetrics) -> AppResult<UserMetrics> {
    UserMetrics::try_from(metrics)
}

/// Body mass index rounded to one decimal place
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / height_m.powi(2);
    (bmi * 10.0).round() / 10.0
}

/// Classify a BMI value using strictly-less-than WHO cut-offs
#[must_use]
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < NORMAL_BELOW {
        BmiCategory::NormalWeight
    } else if bmi < OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Compose energy, macro and micronutrient targets for a user
#[must_use]
pub fn calculate_nutrition_targets(
    metrics: &UserMetrics,
    config: &NutritionConfig,
) -> NutritionTargets {
    let bmr = calculate_bmr(metrics, &config.bmr);
    let tdee = calculate_tdee(bmr, metrics.activity_level);
    let calories = calculate_target_calories(tdee, metrics.goal, &config.energy_balance);
    let macros = calculate_macros(
        calories,
        metrics.weight_kg,
        metrics.goal,
        &config.macronutrients,
    );

    NutritionTargets {
        bmr: round_kcal(bmr),
        tdee,
        calories,
        macros,
        micros: get_micronutrient_rda(metrics.age, metrics.sex),
    }
}

/// Round an energy value to whole kcal, clamping negatives to zero
fn round_kcal(kcal: f64) -> u32 {
    kcal.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn male_metrics() -> UserMetrics {
        UserMetrics {
            age: 30,
            sex: Sex::Male,
            weight_kg: 75.0,
            height_cm: 180.0,
            activity_level: ActivityLevel::ModeratelyActive,
            goal: Goal::Maintain,
        }
    }

    #[test]
    fn test_bmr_sex_offsets() {
        let config = BmrConfig::default();
        let mut metrics = male_metrics();
        assert!((calculate_bmr(&metrics, &config) - 1730.0).abs() < 1e-9);

        metrics.sex = Sex::Female;
        assert!((calculate_bmr(&metrics, &config) - 1564.0).abs() < 1e-9);

        metrics.sex = Sex::Other;
        assert!((calculate_bmr(&metrics, &config) - 1647.0).abs() < 1e-9);
    }

    #[test]
    fn test_tdee_rounds_half_up() {
        assert_eq!(calculate_tdee(1730.0, ActivityLevel::ModeratelyActive), 2682);
    }

    #[test]
    fn test_maintenance_macros() {
        let macros = calculate_macros(2000, 75.0, Goal::Maintain, &MacronutrientConfig::default());

        assert!((macros.protein_g - 120.0).abs() < f64::EPSILON);
        assert!((macros.fat_g - 60.0).abs() < f64::EPSILON);
        assert!((macros.fiber_g - 28.0).abs() < f64::EPSILON);
        assert!((macros.carbs_g - 245.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_lose_protein() {
        let macros = calculate_macros(1600, 75.0, Goal::Lose, &MacronutrientConfig::default());
        assert!((macros.protein_g - 165.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmi_rounding() {
        assert!((calculate_bmi(75.0, 180.0) - 23.1).abs() < 1e-9);
        assert_eq!(classify_bmi(23.1), BmiCategory::NormalWeight);
    }
}
