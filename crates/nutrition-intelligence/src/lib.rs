// ABOUTME: Pure nutrition calculation engine for targets, deficits, weekly patterns, and food scoring
// ABOUTME: Stateless functions over explicit inputs; configuration is passed in, never read implicitly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

#![deny(unsafe_code)]

//! # Nutrition Intelligence
//!
//! Deterministic calculators with no I/O and no logging in the calculation
//! paths, so every function can be property-tested in isolation.
//!
//! ## Modules
//!
//! - **`nutrition_calculator`**: BMR, TDEE, goal calories, macros, BMI, metric validation
//! - **rda**: micronutrient reference intakes by age and sex
//! - **`deficit_calculator`**: daily gaps, excesses, severity and summary text
//! - **`weekly_deficits`**: seven-day patterns, daily alerts, recovery estimates
//! - **`food_recommendations`**: severity-weighted food scoring
//! - **intake**: meal aggregation into daily and weekly logs
//! - **config**: tunable coefficients with environment overrides

/// Engine configuration and validation
pub mod config;

/// Daily deficit and excess detection
pub mod deficit_calculator;

/// Food table and recommendation scoring
pub mod food_recommendations;

/// Deficiency consequences and narrative content
pub mod health_impact;

/// Meal aggregation
pub mod intake;

/// Educational nutrient records
pub mod nutrient_info;

/// Energy and macronutrient target calculation
pub mod nutrition_calculator;

/// Micronutrient reference table
pub mod rda;

/// Weekly pattern analysis
pub mod weekly_deficits;

pub use config::{ConfigError, NutritionConfig};
pub use deficit_calculator::{
    classify_severity, compute_deficits, compute_excesses, generate_deficit_summary,
    get_top_deficits, identify_chronic_deficits, DailyDeficits, DeficitSeverity, NutrientDeficit,
    NutrientExcess,
};
pub use food_recommendations::{
    foods_for_diet, foods_rich_in, generate_recommendations, FoodItem, FoodRecommendation,
    NutrientContribution,
};
pub use intake::{daily_totals, weekly_window};
pub use nutrient_info::{nutrient_info, NutrientInfo};
pub use nutrition_calculator::{
    calculate_bmi, calculate_bmr, calculate_macros, calculate_nutrition_targets,
    calculate_target_calories, calculate_tdee, classify_bmi, parse_user_metrics,
    validate_user_metrics, BmiCategory,
};
pub use rda::get_micronutrient_rda;
pub use weekly_deficits::{
    analyze_weekly_deficits, estimate_recovery_time, generate_daily_alert, ActionableNutrient,
    AlertPriority, DailyAlert, PatternSeverity, RecoveryEstimate, WeeklyDeficitPattern,
};
