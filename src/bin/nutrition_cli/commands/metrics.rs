// ABOUTME: Target, validation, and BMI commands for nutrition-cli
// ABOUTME: Converts command-line metrics and prints calculator results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

use nutrition_engine::config::NutritionConfig;
use nutrition_engine::engine::{
    calculate_bmi, calculate_nutrition_targets, classify_bmi, parse_user_metrics,
    validate_user_metrics,
};
use nutrition_engine::errors::{AppError, AppResult, ErrorCode};
use nutrition_engine::models::RawUserMetrics;
use serde_json::json;
use tracing::{debug, info};

use crate::helpers::output::print_json;

/// Print daily targets for valid metrics
pub fn targets(metrics: RawUserMetrics, pretty: bool) -> AppResult<()> {
    let metrics = parse_user_metrics(metrics)?;
    let targets = calculate_nutrition_targets(&metrics, NutritionConfig::global());
    info!(calories = targets.calories, "Computed targets");
    print_json(&targets, pretty)
}

/// Print the violation list; never fails on invalid metrics
pub fn validate(metrics: &RawUserMetrics, pretty: bool) -> AppResult<()> {
    let violations = validate_user_metrics(metrics);
    debug!(count = violations.len(), "Validated metrics");
    print_json(
        &json!({
            "valid": violations.is_empty(),
            "violations": violations,
        }),
        pretty,
    )
}

/// Print BMI and WHO category
pub fn bmi(weight_kg: f64, height_cm: f64, pretty: bool) -> AppResult<()> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            "Weight and height must be positive",
        )
        .with_details(json!({ "weight_kg": weight_kg, "height_cm": height_cm })));
    }
    let bmi = calculate_bmi(weight_kg, height_cm);
    print_json(
        &json!({
            "bmi": bmi,
            "category": classify_bmi(bmi),
        }),
        pretty,
    )
}
