// ABOUTME: Integration tests for meal aggregation into daily and weekly logs
// ABOUTME: Verifies per-day summing, meal counts, and the zero-filled seven-day window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use nutrition_core::models::{MealEntry, MealType, Nutrient};
use nutrition_intelligence::{daily_totals, weekly_window};

#[test]
fn test_daily_totals_merge_nutrients() {
    common::init_test_logging();
    let meals = vec![
        common::meal(common::march(5), &[(Nutrient::IronMg, 3.0), (Nutrient::ProteinG, 30.0)]),
        common::meal(common::march(5), &[(Nutrient::IronMg, 2.5), (Nutrient::CalciumMg, 200.0)]),
        common::meal(common::march(6), &[(Nutrient::IronMg, 10.0)]),
    ];

    let day = daily_totals(&meals, common::march(5));

    assert_eq!(day.date, common::march(5));
    assert_eq!(day.meals_logged, 2);
    assert!((day.nutrients.amount_or_zero(Nutrient::IronMg) - 5.5).abs() < 1e-9);
    assert!((day.nutrients.amount_or_zero(Nutrient::ProteinG) - 30.0).abs() < 1e-9);
    assert!((day.nutrients.amount_or_zero(Nutrient::CalciumMg) - 200.0).abs() < 1e-9);
    assert_eq!(day.nutrients.get(Nutrient::ZincMg), None);
}

#[test]
fn test_day_without_meals_is_empty() {
    let day = daily_totals(&[], common::march(5));
    assert_eq!(day.meals_logged, 0);
    assert!(day.nutrients.is_empty());
}

#[test]
fn test_weekly_window_crosses_month_boundary() {
    let meals = vec![common::meal(common::march(1), &[(Nutrient::IronMg, 4.0)])];
    let window = weekly_window(&meals, common::march(3));

    let dates: Vec<String> = window.iter().map(|d| d.date.to_string()).collect();
    assert_eq!(
        dates,
        vec![
            "2025-02-25",
            "2025-02-26",
            "2025-02-27",
            "2025-02-28",
            "2025-03-01",
            "2025-03-02",
            "2025-03-03",
        ]
    );
    assert_eq!(window[4].meals_logged, 1);
    assert_eq!(window.iter().map(|d| d.meals_logged).sum::<usize>(), 1);
}

#[test]
fn test_meal_entry_json_shape() {
    let meal: MealEntry = serde_json::from_str(
        r#"{"date": "2025-03-05", "meal_type": "breakfast", "nutrients": {"iron_mg": 2.0}}"#,
    )
    .unwrap();

    assert_eq!(meal.meal_type, MealType::Breakfast);
    assert_eq!(meal.name, None);
    assert!((meal.nutrients.amount_or_zero(Nutrient::IronMg) - 2.0).abs() < f64::EPSILON);
}
