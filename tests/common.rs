// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet test logging, reference user metrics, and meal log builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutrition_engine`

use chrono::NaiveDate;
use nutrition_engine::models::{
    ActivityLevel, Goal, MealEntry, MealType, Nutrient, NutrientTotals, RawUserMetrics, Sex,
    UserMetrics,
};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 30 year old man, 75 kg, 180 cm, moderately active, maintaining
pub fn reference_male() -> UserMetrics {
    UserMetrics {
        age: 30,
        sex: Sex::Male,
        weight_kg: 75.0,
        height_cm: 180.0,
        activity_level: ActivityLevel::ModeratelyActive,
        goal: Goal::Maintain,
    }
}

/// 25 year old woman, 60 kg, 165 cm, sedentary, losing
pub fn reference_female() -> UserMetrics {
    UserMetrics {
        age: 25,
        sex: Sex::Female,
        weight_kg: 60.0,
        height_cm: 165.0,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::Lose,
    }
}

/// Raw form of [`reference_male`]
pub fn reference_male_raw() -> RawUserMetrics {
    RawUserMetrics {
        age: Some(30.0),
        sex: Some("male".to_owned()),
        weight_kg: Some(75.0),
        height_cm: Some(180.0),
        activity_level: Some(1.55),
        goal: Some("maintain".to_owned()),
    }
}

/// Calendar day in March 2025
pub fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

/// A lunch on `date` with the given nutrient amounts
pub fn meal(date: NaiveDate, nutrients: &[(Nutrient, f64)]) -> MealEntry {
    MealEntry {
        date,
        meal_type: MealType::Lunch,
        name: Some("Test meal".to_owned()),
        nutrients: nutrients.iter().copied().collect::<NutrientTotals>(),
    }
}
