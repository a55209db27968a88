// ABOUTME: Food suggestions that close the user's most severe nutrient gaps
// ABOUTME: Static per-100g food table, severity-weighted scoring, and diet-filtered queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

//! Food Recommendation Scorer
//!
//! Each food in a small curated table is scored against the top three
//! deficits. Contributions from critical gaps weigh three times as much as
//! low or medium ones, high gaps twice as much.

use crate::deficit_calculator::{DeficitSeverity, NutrientDeficit};
use nutrition_core::constants::recommendations::{
    CRITICAL_WEIGHT, DEFAULT_WEIGHT, DEFICITS_CONSIDERED, HIGH_WEIGHT, MAX_RECOMMENDATIONS,
    MIN_FOOD_SCORE, SERVING_SIZE_G,
};
use nutrition_core::models::{DietPreference, Nutrient};
use serde::Serialize;
use std::cmp::Ordering;

const ALL_DIETS: &[DietPreference] = &[
    DietPreference::Omnivore,
    DietPreference::Vegetarian,
    DietPreference::Vegan,
];
const VEGETARIAN_DIETS: &[DietPreference] = &[DietPreference::Omnivore, DietPreference::Vegetarian];
const OMNIVORE_ONLY: &[DietPreference] = &[DietPreference::Omnivore];

/// A food with its nutrient content per 100 g
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodItem {
    /// Display name
    pub name: &'static str,
    /// Nutrient amounts per 100 g
    pub nutrients: &'static [(Nutrient, f64)],
    /// Diets the food fits
    pub diets: &'static [DietPreference],
    /// Serving suggestion
    pub preparation_tips: &'static str,
}

impl FoodItem {
    /// Amount of a nutrient per 100 g, zero if absent
    #[must_use]
    pub fn amount(&self, nutrient: Nutrient) -> f64 {
        self.nutrients
            .iter()
            .find(|(n, _)| *n == nutrient)
            .map_or(0.0, |(_, amount)| *amount)
    }

    /// Whether the food fits a diet
    #[must_use]
    pub fn fits(&self, diet: DietPreference) -> bool {
        self.diets.contains(&diet)
    }
}

/// Curated foods, in presentation order
pub static FOOD_TABLE: [FoodItem; 9] = [
    FoodItem {
        name: "Salmon (wild-caught)",
        nutrients: &[
            (Nutrient::VitaminDMcg, 13.0),
            (Nutrient::Omega3G, 1.5),
            (Nutrient::VitaminB12Mcg, 3.0),
            (Nutrient::ProteinG, 25.0),
        ],
        diets: OMNIVORE_ONLY,
        preparation_tips: "Grill or bake with lemon for best flavor",
    },
    FoodItem {
        name: "Spinach (cooked)",
        nutrients: &[
            (Nutrient::IronMg, 3.6),
            (Nutrient::CalciumMg, 136.0),
            (Nutrient::MagnesiumMg, 79.0),
            (Nutrient::FolateMcg, 146.0),
            (Nutrient::VitaminAMcg, 469.0),
        ],
        diets: ALL_DIETS,
        preparation_tips: "Sauté with garlic or add to smoothies",
    },
    FoodItem {
        name: "Almonds",
        nutrients: &[
            (Nutrient::MagnesiumMg, 76.0),
            (Nutrient::CalciumMg, 75.0),
            (Nutrient::VitaminEMg, 7.3),
            (Nutrient::FiberG, 3.5),
        ],
        diets: ALL_DIETS,
        preparation_tips: "Great as a snack or in oatmeal",
    },
    FoodItem {
        name: "Greek Yogurt (plain)",
        nutrients: &[
            (Nutrient::CalciumMg, 110.0),
            (Nutrient::VitaminB12Mcg, 0.75),
            (Nutrient::ProteinG, 10.0),
        ],
        diets: VEGETARIAN_DIETS,
        preparation_tips: "Top with berries and honey",
    },
    FoodItem {
        name: "Lentils (cooked)",
        nutrients: &[
            (Nutrient::IronMg, 3.3),
            (Nutrient::FolateMcg, 181.0),
            (Nutrient::MagnesiumMg, 36.0),
            (Nutrient::FiberG, 7.9),
            (Nutrient::PotassiumMg, 369.0),
        ],
        diets: ALL_DIETS,
        preparation_tips: "Add to soups or make dal",
    },
    FoodItem {
        name: "Sweet Potato",
        nutrients: &[
            (Nutrient::VitaminAMcg, 961.0),
            (Nutrient::PotassiumMg, 337.0),
            (Nutrient::VitaminCMg, 20.0),
            (Nutrient::FiberG, 3.0),
        ],
        diets: ALL_DIETS,
        preparation_tips: "Roast with olive oil and spices",
    },
    FoodItem {
        name: "Sardines (canned)",
        nutrients: &[
            (Nutrient::VitaminDMcg, 4.8),
            (Nutrient::CalciumMg, 351.0),
            (Nutrient::Omega3G, 1.5),
            (Nutrient::VitaminB12Mcg, 8.9),
        ],
        diets: OMNIVORE_ONLY,
        preparation_tips: "Eat on whole grain crackers",
    },
    FoodItem {
        name: "Fortified Orange Juice",
        nutrients: &[
            (Nutrient::VitaminCMg, 50.0),
            (Nutrient::CalciumMg, 150.0),
            (Nutrient::VitaminDMcg, 2.5),
        ],
        diets: ALL_DIETS,
        preparation_tips: "Drink with breakfast for iron absorption",
    },
    FoodItem {
        name: "Quinoa (cooked)",
        nutrients: &[
            (Nutrient::MagnesiumMg, 64.0),
            (Nutrient::IronMg, 1.5),
            (Nutrient::ZincMg, 1.1),
            (Nutrient::FiberG, 2.8),
            (Nutrient::ProteinG, 4.4),
        ],
        diets: ALL_DIETS,
        preparation_tips: "Use as rice alternative in any dish",
    },
];

/// How much of one deficit a serving covers
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NutrientContribution {
    /// Nutrient identifier
    pub nutrient_key: Nutrient,
    /// Human-readable name
    pub display_name: &'static str,
    /// Amount per serving
    pub amount: f64,
    /// Measurement unit
    pub unit: &'static str,
    /// `amount / deficit * 100`
    pub percentage_of_deficit: f64,
}

/// A suggested food
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FoodRecommendation {
    /// Food display name
    pub food_name: &'static str,
    /// Suggested serving (g)
    pub quantity_g: f64,
    /// Why the food was picked
    pub reasoning: String,
    /// Contributions, largest share of deficit first
    pub nutrient_contributions: Vec<NutrientContribution>,
    /// Serving suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_tips: Option<&'static str>,
    /// Severity-weighted score used for ranking
    pub score: f64,
}

const fn severity_weight(severity: DeficitSeverity) -> f64 {
    match severity {
        DeficitSeverity::Critical => CRITICAL_WEIGHT,
        DeficitSeverity::High => HIGH_WEIGHT,
        DeficitSeverity::Medium | DeficitSeverity::Low => DEFAULT_WEIGHT,
    }
}

fn score_food(
    food: &'static FoodItem,
    top_deficits: &[NutrientDeficit],
) -> Option<FoodRecommendation> {
    let mut score = 0.0;
    let mut contributions: Vec<NutrientContribution> = Vec::new();

    for deficit in top_deficits {
        let amount = food.amount(deficit.nutrient);
        if amount <= 0.0 {
            continue;
        }
        let percentage_of_deficit = amount / deficit.deficit * 100.0;
        score = percentage_of_deficit.mul_add(severity_weight(deficit.severity), score);
        contributions.push(NutrientContribution {
            nutrient_key: deficit.nutrient,
            display_name: deficit.display_name,
            amount,
            unit: deficit.unit,
            percentage_of_deficit,
        });
    }

    if contributions.is_empty() || score <= MIN_FOOD_SCORE {
        return None;
    }

    contributions.sort_by(|a, b| {
        b.percentage_of_deficit
            .partial_cmp(&a.percentage_of_deficit)
            .unwrap_or(Ordering::Equal)
    });
    let top = contributions.first()?;
    let reasoning = format!(
        "High in {} ({}% of your deficit)",
        top.display_name,
        top.percentage_of_deficit.round()
    );

    Some(FoodRecommendation {
        food_name: food.name,
        quantity_g: SERVING_SIZE_G,
        reasoning,
        nutrient_contributions: contributions,
        preparation_tips: Some(food.preparation_tips),
        score,
    })
}

/// Up to five foods for the three highest-priority deficits, best score first
///
/// `deficits` must be priority-ordered as returned by the deficit calculator.
/// Foods that do not fit `diet` are excluded. Equal scores keep table order.
#[must_use]
pub fn generate_recommendations(
    deficits: &[NutrientDeficit],
    diet: DietPreference,
) -> Vec<FoodRecommendation> {
    let top_deficits = &deficits[..deficits.len().min(DEFICITS_CONSIDERED)];
    if top_deficits.is_empty() {
        return Vec::new();
    }

    let mut recommendations: Vec<FoodRecommendation> = FOOD_TABLE
        .iter()
        .filter(|food| food.fits(diet))
        .filter_map(|food| score_food(food, top_deficits))
        .collect();

    recommendations.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

/// Foods with at least `min_amount` of a nutrient per 100 g, richest first
#[must_use]
pub fn foods_rich_in(nutrient: Nutrient, min_amount: f64) -> Vec<&'static FoodItem> {
    let mut foods: Vec<&'static FoodItem> = FOOD_TABLE
        .iter()
        .filter(|food| {
            let amount = food.amount(nutrient);
            amount > 0.0 && amount >= min_amount
        })
        .collect();
    foods.sort_by(|a, b| {
        b.amount(nutrient)
            .partial_cmp(&a.amount(nutrient))
            .unwrap_or(Ordering::Equal)
    });
    foods
}

/// Foods that fit a diet, in table order
#[must_use]
pub fn foods_for_diet(diet: DietPreference) -> Vec<&'static FoodItem> {
    FOOD_TABLE.iter().filter(|food| food.fits(diet)).collect()
}
