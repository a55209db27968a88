// ABOUTME: Daily report command for nutrition-cli
// ABOUTME: Reads a report request file, runs the pipeline, and prints the report as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

use nutrition_engine::errors::{AppError, AppResult, ErrorCode};
use nutrition_engine::services::{NutritionReportRequest, NutritionReportService};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::helpers::output::print_json;

/// Generate and print a report from a request file
pub fn generate(input: &Path, pretty: bool) -> AppResult<()> {
    info!("Reading report request from {}", input.display());
    let contents = fs::read_to_string(input).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", input.display())).with_source(e)
    })?;
    let request: NutritionReportRequest = serde_json::from_str(&contents).map_err(|e| {
        AppError::new(ErrorCode::InvalidFormat, format!("Invalid report request: {e}"))
            .with_source(e)
    })?;

    let report = NutritionReportService::from_global_config().generate(request)?;
    print_json(&report, pretty)
}
