// ABOUTME: Integration tests for severity-weighted food recommendations and food table queries
// ABOUTME: Verifies score ordering, diet filtering, the minimum score cut-off, and reasoning text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use nutrition_core::models::{DietPreference, Nutrient, NutrientTotals, NutritionTargets};
use nutrition_intelligence::config::NutritionConfig;
use nutrition_intelligence::{
    calculate_nutrition_targets, compute_deficits, foods_rich_in, generate_recommendations,
    NutrientDeficit,
};

fn targets() -> NutritionTargets {
    calculate_nutrition_targets(&common::reference_male(), &NutritionConfig::default())
}

/// Vitamin D and omega-3 missed entirely, calcium at 30%, everything else met
fn seafood_deficits(targets: &NutritionTargets) -> Vec<NutrientDeficit> {
    let current: NutrientTotals = Nutrient::ALL
        .iter()
        .filter_map(|&nutrient| {
            targets
                .defined_target(nutrient)
                .map(|target| (nutrient, target * 1.1))
        })
        .collect::<NutrientTotals>()
        .with(Nutrient::VitaminDMcg, 0.0)
        .with(Nutrient::Omega3G, 0.0)
        .with(Nutrient::CalciumMg, 300.0);
    compute_deficits(&current, targets)
}

#[test]
fn test_recommendations_sorted_by_score() {
    common::init_test_logging();
    let targets = targets();
    let deficits = seafood_deficits(&targets);
    assert_eq!(deficits.len(), 3);

    let recommendations = generate_recommendations(&deficits, DietPreference::Omnivore);
    let names: Vec<&str> = recommendations.iter().map(|r| r.food_name).collect();

    assert_eq!(
        names,
        vec![
            "Salmon (wild-caught)",
            "Sardines (canned)",
            "Fortified Orange Juice",
            "Spinach (cooked)",
            "Greek Yogurt (plain)",
        ]
    );
    assert!(recommendations
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));
}

#[test]
fn test_salmon_reasoning_and_contributions() {
    let targets = targets();
    let recommendations =
        generate_recommendations(&seafood_deficits(&targets), DietPreference::Omnivore);
    let salmon = &recommendations[0];

    assert_eq!(salmon.reasoning, "High in Omega-3 (94% of your deficit)");
    assert!((salmon.quantity_g - 100.0).abs() < f64::EPSILON);
    assert!((salmon.score - 541.25).abs() < 1e-6);
    assert_eq!(salmon.nutrient_contributions.len(), 2);
    assert_eq!(salmon.nutrient_contributions[0].nutrient_key, Nutrient::Omega3G);
    assert_eq!(
        salmon.preparation_tips,
        Some("Grill or bake with lemon for best flavor")
    );
}

#[test]
fn test_vegan_recommendations_exclude_fish() {
    let targets = targets();
    let recommendations =
        generate_recommendations(&seafood_deficits(&targets), DietPreference::Vegan);
    let names: Vec<&str> = recommendations.iter().map(|r| r.food_name).collect();

    assert_eq!(
        names,
        vec!["Fortified Orange Juice", "Spinach (cooked)", "Almonds"]
    );
}

#[test]
fn test_low_scores_filtered_out() {
    let targets = targets();
    let current: NutrientTotals = Nutrient::ALL
        .iter()
        .filter_map(|&nutrient| targets.defined_target(nutrient).map(|t| (nutrient, t * 1.1)))
        .collect::<NutrientTotals>()
        .with(Nutrient::ProteinG, targets.macros.protein_g * 0.5);
    let deficits = compute_deficits(&current, &targets);

    let names: Vec<&str> = generate_recommendations(&deficits, DietPreference::Omnivore)
        .iter()
        .map(|r| r.food_name)
        .collect();
    assert_eq!(names, vec!["Salmon (wild-caught)", "Greek Yogurt (plain)"]);

    // Quinoa covers only 7% of a medium protein gap
    assert!(generate_recommendations(&deficits, DietPreference::Vegan).is_empty());
}

#[test]
fn test_foods_rich_in_threshold() {
    let foods = foods_rich_in(Nutrient::Omega3G, 1.0);
    let names: Vec<&str> = foods.iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["Salmon (wild-caught)", "Sardines (canned)"]);

    assert!(foods_rich_in(Nutrient::SeleniumMcg, 0.0).is_empty());
}
