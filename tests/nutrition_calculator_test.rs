// ABOUTME: Integration tests for BMR, TDEE, goal calories, macros, BMI, and metric validation
// ABOUTME: Covers reference scenarios, monotonicity, macro energy balance, and WHO boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use nutrition_core::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use nutrition_core::errors::ErrorCode;
use nutrition_core::models::{ActivityLevel, Goal, RawUserMetrics, Sex, UserMetrics};
use nutrition_intelligence::config::{EnergyBalanceConfig, NutritionConfig};
use nutrition_intelligence::{
    calculate_bmi, calculate_bmr, calculate_macros, calculate_nutrition_targets,
    calculate_target_calories, calculate_tdee, classify_bmi, parse_user_metrics,
    validate_user_metrics, BmiCategory,
};

#[test]
fn test_reference_male_targets() {
    common::init_test_logging();
    let targets = calculate_nutrition_targets(&common::reference_male(), &NutritionConfig::default());

    assert_eq!(targets.bmr, 1730);
    assert_eq!(targets.tdee, 2682);
    assert_eq!(targets.calories, 2682);
    assert!((targets.macros.protein_g - 120.0).abs() < f64::EPSILON);
    assert!((targets.macros.fat_g - 80.0).abs() < f64::EPSILON);
    assert!((targets.macros.carbs_g - 369.0).abs() < f64::EPSILON);
    assert!((targets.macros.fiber_g - 38.0).abs() < f64::EPSILON);
    assert!((targets.micros.iron_mg - 8.0).abs() < f64::EPSILON);
}

#[test]
fn test_reference_female_losing_weight() {
    let metrics = UserMetrics {
        age: 28,
        sex: Sex::Female,
        weight_kg: 60.0,
        height_cm: 165.0,
        activity_level: ActivityLevel::LightlyActive,
        goal: Goal::Lose,
    };
    let config = NutritionConfig::default();

    assert!((calculate_bmr(&metrics, &config.bmr) - 1330.25).abs() < 1e-9);

    let targets = calculate_nutrition_targets(&metrics, &config);
    assert_eq!(targets.bmr, 1330);
    assert_eq!(targets.tdee, 1829);
    assert_eq!(targets.calories, 1463);
    assert!((targets.macros.protein_g - 132.0).abs() < f64::EPSILON);
    assert!((targets.micros.iron_mg - 18.0).abs() < f64::EPSILON);
}

#[test]
fn test_macro_energy_matches_calories() {
    let config = NutritionConfig::default();
    for sex in [Sex::Male, Sex::Female, Sex::Other] {
        for activity_level in ActivityLevel::ALL {
            for goal in [Goal::Lose, Goal::Maintain, Goal::Gain] {
                for (age, weight_kg, height_cm) in
                    [(13, 30.0, 100.0), (35, 82.5, 177.0), (70, 140.0, 195.0), (120, 300.0, 250.0)]
                {
                    let metrics = UserMetrics {
                        age,
                        sex,
                        weight_kg,
                        height_cm,
                        activity_level,
                        goal,
                    };
                    let targets = calculate_nutrition_targets(&metrics, &config);
                    let macros = targets.macros;
                    let kcal = macros.protein_g.mul_add(
                        KCAL_PER_G_PROTEIN,
                        macros.fat_g.mul_add(KCAL_PER_G_FAT, macros.carbs_g * KCAL_PER_G_CARBS),
                    );
                    assert!(
                        (kcal - f64::from(targets.calories)).abs() <= 10.0,
                        "macro energy {kcal} drifted from {} for {metrics:?}",
                        targets.calories
                    );
                }
            }
        }
    }
}

#[test]
fn test_tdee_monotonic_in_activity_level() {
    for bmr in [900.0, 1330.25, 1730.0, 2500.5] {
        let tdees: Vec<u32> = ActivityLevel::ALL
            .iter()
            .map(|level| calculate_tdee(bmr, *level))
            .collect();
        assert!(tdees.windows(2).all(|pair| pair[0] <= pair[1]), "{tdees:?}");
    }
}

#[test]
fn test_goal_calories_ordered() {
    let config = EnergyBalanceConfig::default();
    for tdee in [1200, 1829, 2682, 4000] {
        let lose = calculate_target_calories(tdee, Goal::Lose, &config);
        let maintain = calculate_target_calories(tdee, Goal::Maintain, &config);
        let gain = calculate_target_calories(tdee, Goal::Gain, &config);
        assert!(lose < maintain && maintain < gain);
    }
}

#[test]
fn test_gain_protein_uses_gain_factor() {
    let config = NutritionConfig::default();
    let macros = calculate_macros(3000, 80.0, Goal::Gain, &config.macronutrients);
    assert!((macros.protein_g - 160.0).abs() < f64::EPSILON);
}

#[test]
fn test_bmi_classification_boundaries() {
    assert_eq!(classify_bmi(18.4), BmiCategory::Underweight);
    assert_eq!(classify_bmi(18.5), BmiCategory::NormalWeight);
    assert_eq!(classify_bmi(24.99), BmiCategory::NormalWeight);
    assert_eq!(classify_bmi(25.0), BmiCategory::Overweight);
    assert_eq!(classify_bmi(29.99), BmiCategory::Overweight);
    assert_eq!(classify_bmi(30.0), BmiCategory::Obese);
    assert_eq!(BmiCategory::NormalWeight.to_string(), "Normal weight");
}

#[test]
fn test_bmi_value() {
    assert!((calculate_bmi(60.0, 165.0) - 22.0).abs() < 1e-9);
    assert!((calculate_bmi(120.0, 170.0) - 41.5).abs() < 1e-9);
}

#[test]
fn test_targets_are_pure() {
    let config = NutritionConfig::default();
    let metrics = common::reference_female();
    assert_eq!(
        calculate_nutrition_targets(&metrics, &config),
        calculate_nutrition_targets(&metrics, &config)
    );
}

#[test]
fn test_under_age_reports_only_age_violation() {
    let mut metrics = common::reference_male_raw();
    metrics.age = Some(10.0);

    assert_eq!(
        validate_user_metrics(&metrics),
        vec!["Age must be between 13 and 120".to_owned()]
    );
}

#[test]
fn test_every_violation_reported() {
    let metrics = RawUserMetrics {
        age: Some(200.0),
        sex: Some("robot".to_owned()),
        weight_kg: Some(20.0),
        height_cm: Some(300.0),
        activity_level: Some(1.6),
        goal: Some("bulk".to_owned()),
    };

    assert_eq!(
        validate_user_metrics(&metrics),
        vec![
            "Age must be between 13 and 120",
            "Weight must be between 30 and 300 kg",
            "Height must be between 100 and 250 cm",
            "Sex must be male, female, or other",
            "Invalid activity level",
            "Goal must be maintain, lose, or gain",
        ]
    );
}

#[test]
fn test_parse_rejects_with_violation_details() {
    let mut metrics = common::reference_male_raw();
    metrics.weight_kg = Some(301.0);

    let error = parse_user_metrics(metrics).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(
        error.details["violations"][0],
        "Weight must be between 30 and 300 kg"
    );
}

#[test]
fn test_parse_accepts_reference_metrics() {
    let metrics = parse_user_metrics(common::reference_male_raw()).unwrap();
    assert_eq!(metrics, common::reference_male());
}
