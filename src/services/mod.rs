// ABOUTME: Service layer composing the pure nutrition engine into end-to-end workflows
// ABOUTME: Adds input validation, identifiers, timestamps, and structured logging around the calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

//! Service layer
//!
//! The engine crates are pure and silent. Services here are where requests
//! are validated, reports are stamped and pipeline stages are logged.

/// Daily nutrition report pipeline
pub mod nutrition_report;

pub use nutrition_report::{
    NutritionReport, NutritionReportRequest, NutritionReportService, PatternRecovery,
};
