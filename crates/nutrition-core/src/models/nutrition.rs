// ABOUTME: Nutrition intake and target models shared by every engine component
// ABOUTME: NutrientTotals, NutritionTargets, MealEntry, MealType and DailyNutrientLog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

use super::nutrient::Nutrient;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Add, AddAssign};

/// Logged intake for some subset of nutrients
///
/// A nutrient that was never logged is absent, not zero. Callers that need
/// a number use [`NutrientTotals::amount_or_zero`], which is the single
/// place the default-to-zero rule is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientTotals(BTreeMap<Nutrient, f64>);

impl NutrientTotals {
    /// Empty totals
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    #[must_use]
    pub fn with(mut self, nutrient: Nutrient, amount: f64) -> Self {
        self.0.insert(nutrient, amount);
        self
    }

    /// Set the logged amount for a nutrient
    pub fn set(&mut self, nutrient: Nutrient, amount: f64) {
        self.0.insert(nutrient, amount);
    }

    /// Logged amount, if any
    #[must_use]
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.0.get(&nutrient).copied()
    }

    /// Logged amount, treating an absent nutrient as zero intake
    #[must_use]
    pub fn amount_or_zero(&self, nutrient: Nutrient) -> f64 {
        self.get(nutrient).unwrap_or(0.0)
    }

    /// Whether nothing has been logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate logged nutrients in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.0.iter().map(|(nutrient, amount)| (*nutrient, *amount))
    }
}

impl FromIterator<(Nutrient, f64)> for NutrientTotals {
    fn from_iter<I: IntoIterator<Item = (Nutrient, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl AddAssign<&Self> for NutrientTotals {
    fn add_assign(&mut self, rhs: &Self) {
        for (nutrient, amount) in rhs.iter() {
            *self.0.entry(nutrient).or_insert(0.0) += amount;
        }
    }
}

impl Add for NutrientTotals {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += &rhs;
        self
    }
}

/// Daily macronutrient targets (whole grams)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Fiber (g)
    pub fiber_g: f64,
}

/// Daily micronutrient, essential fatty acid and water targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MicronutrientTargets {
    /// Vitamin D (mcg)
    pub vitamin_d_mcg: f64,
    /// Vitamin C (mg)
    pub vitamin_c_mg: f64,
    /// Vitamin A (mcg)
    pub vitamin_a_mcg: f64,
    /// Vitamin E (mg)
    pub vitamin_e_mg: f64,
    /// Vitamin K (mcg)
    pub vitamin_k_mcg: f64,
    /// Thiamin (mg)
    pub thiamin_mg: f64,
    /// Riboflavin (mg)
    pub riboflavin_mg: f64,
    /// Niacin (mg)
    pub niacin_mg: f64,
    /// Vitamin B6 (mg)
    pub vitamin_b6_mg: f64,
    /// Folate (mcg)
    pub folate_mcg: f64,
    /// Vitamin B12 (mcg)
    pub vitamin_b12_mcg: f64,
    /// Calcium (mg)
    pub calcium_mg: f64,
    /// Iron (mg)
    pub iron_mg: f64,
    /// Magnesium (mg)
    pub magnesium_mg: f64,
    /// Phosphorus (mg)
    pub phosphorus_mg: f64,
    /// Potassium (mg)
    pub potassium_mg: f64,
    /// Sodium (mg), an upper-limit style target
    pub sodium_mg: f64,
    /// Zinc (mg)
    pub zinc_mg: f64,
    /// Copper (mg)
    pub copper_mg: f64,
    /// Manganese (mg)
    pub manganese_mg: f64,
    /// Selenium (mcg)
    pub selenium_mcg: f64,
    /// Omega-3 (g)
    pub omega3_g: f64,
    /// Omega-6 (g)
    pub omega6_g: f64,
    /// Water (L)
    pub water_l: f64,
}

/// Complete daily targets derived from body metrics
///
/// Serializes as one flat record: energy fields followed by every macro
/// and micronutrient key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Basal metabolic rate, rounded (kcal/day)
    pub bmr: u32,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: u32,
    /// Goal-adjusted calorie target (kcal/day)
    pub calories: u32,
    /// Macronutrient targets
    #[serde(flatten)]
    pub macros: MacroTargets,
    /// Micronutrient targets
    #[serde(flatten)]
    pub micros: MicronutrientTargets,
}

impl NutritionTargets {
    /// Daily target for a nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        let m = &self.micros;
        match nutrient {
            Nutrient::ProteinG => self.macros.protein_g,
            Nutrient::CarbsG => self.macros.carbs_g,
            Nutrient::FatG => self.macros.fat_g,
            Nutrient::FiberG => self.macros.fiber_g,
            Nutrient::VitaminDMcg => m.vitamin_d_mcg,
            Nutrient::VitaminCMg => m.vitamin_c_mg,
            Nutrient::VitaminAMcg => m.vitamin_a_mcg,
            Nutrient::VitaminEMg => m.vitamin_e_mg,
            Nutrient::VitaminKMcg => m.vitamin_k_mcg,
            Nutrient::ThiaminMg => m.thiamin_mg,
            Nutrient::RiboflavinMg => m.riboflavin_mg,
            Nutrient::NiacinMg => m.niacin_mg,
            Nutrient::VitaminB6Mg => m.vitamin_b6_mg,
            Nutrient::FolateMcg => m.folate_mcg,
            Nutrient::VitaminB12Mcg => m.vitamin_b12_mcg,
            Nutrient::CalciumMg => m.calcium_mg,
            Nutrient::IronMg => m.iron_mg,
            Nutrient::MagnesiumMg => m.magnesium_mg,
            Nutrient::PhosphorusMg => m.phosphorus_mg,
            Nutrient::PotassiumMg => m.potassium_mg,
            Nutrient::SodiumMg => m.sodium_mg,
            Nutrient::ZincMg => m.zinc_mg,
            Nutrient::CopperMg => m.copper_mg,
            Nutrient::ManganeseMg => m.manganese_mg,
            Nutrient::SeleniumMcg => m.selenium_mcg,
            Nutrient::Omega3G => m.omega3_g,
            Nutrient::Omega6G => m.omega6_g,
            Nutrient::WaterL => m.water_l,
        }
    }

    /// Daily target for a nutrient when one is defined (strictly positive)
    #[must_use]
    pub fn defined_target(&self, nutrient: Nutrient) -> Option<f64> {
        let target = self.get(nutrient);
        (target > 0.0).then_some(target)
    }
}

/// Type of meal
///
/// Deserialization is lenient: matching ignores case and unknown slots become `Other`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    #[default]
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }
}

impl From<String> for MealType {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// A single logged meal with its analyzed nutrient content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEntry {
    /// Day the meal was eaten
    pub date: NaiveDate,
    /// Meal slot
    #[serde(default)]
    pub meal_type: MealType,
    /// Meal description or name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Nutrient content of the meal
    #[serde(default)]
    pub nutrients: NutrientTotals,
}

/// One day of summed intake
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyNutrientLog {
    /// Calendar day
    pub date: NaiveDate,
    /// Summed nutrients for the day
    pub nutrients: NutrientTotals,
    /// Number of meals that contributed
    #[serde(default)]
    pub meals_logged: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_absent_reads_as_zero() {
        let totals = NutrientTotals::new().with(Nutrient::IronMg, 4.5);
        assert_eq!(totals.get(Nutrient::CalciumMg), None);
        assert!((totals.amount_or_zero(Nutrient::CalciumMg)).abs() < f64::EPSILON);
        assert!((totals.amount_or_zero(Nutrient::IronMg) - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_meal_type_parses_leniently() {
        let meal: MealEntry = serde_json::from_str(
            r#"{"date": "2025-03-01", "meal_type": "Dinner", "nutrients": {"iron_mg": 2.0}}"#,
        )
        .unwrap();
        assert_eq!(meal.meal_type, MealType::Dinner);

        let brunch: MealEntry =
            serde_json::from_str(r#"{"date": "2025-03-01", "meal_type": "brunch"}"#).unwrap();
        assert_eq!(brunch.meal_type, MealType::Other);
        assert_eq!(serde_json::to_value(MealType::Snack).unwrap(), "snack");
    }

    #[test]
    fn test_totals_addition_merges_keys() {
        let breakfast = NutrientTotals::new()
            .with(Nutrient::CalciumMg, 300.0)
            .with(Nutrient::ProteinG, 20.0);
        let lunch = NutrientTotals::new().with(Nutrient::CalciumMg, 200.0);

        let day = breakfast + lunch;
        assert!((day.amount_or_zero(Nutrient::CalciumMg) - 500.0).abs() < f64::EPSILON);
        assert!((day.amount_or_zero(Nutrient::ProteinG) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_totals_reject_unknown_keys() {
        let result = serde_json::from_str::<NutrientTotals>(r#"{"vitamin_dd_mcg": 5.0}"#);
        assert!(result.is_err());

        let totals: NutrientTotals =
            serde_json::from_str(r#"{"vitamin_d_mcg": 5.0, "omega3_g": 0.4}"#).unwrap();
        assert_eq!(totals.get(Nutrient::VitaminDMcg), Some(5.0));
        assert_eq!(totals.get(Nutrient::Omega3G), Some(0.4));
    }
}
