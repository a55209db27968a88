// ABOUTME: Core data models for body metrics, nutrient identifiers, and intake logs
// ABOUTME: Re-exports metric enums, the Nutrient catalog, totals, targets, and meal entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

/// Body metrics, goals, activity levels, and diet preferences
pub mod metrics;

/// Closed catalog of tracked nutrients
pub mod nutrient;

/// Intake totals, nutrition targets, and meal logs
pub mod nutrition;

pub use metrics::{ActivityLevel, DietPreference, Goal, RawUserMetrics, Sex, UserMetrics};
pub use nutrient::{Nutrient, NutrientCategory};
pub use nutrition::{
    DailyNutrientLog, MacroTargets, MealEntry, MealType, MicronutrientTargets, NutrientTotals,
    NutritionTargets,
};
