// ABOUTME: Main library entry point for the nutrition target and deficit engine
// ABOUTME: Re-exports the engine crates and provides logging setup and the report service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

#![deny(unsafe_code)]

//! # Nutrition Engine
//!
//! Personalized daily nutrition targets from body metrics, detection of
//! nutrient gaps against those targets, seven-day deficit pattern analysis
//! with health-risk scoring, and food recommendations that close the largest
//! gaps.
//!
//! ## Architecture
//!
//! - **`nutrition_core`**: error types, threshold constants, domain models
//! - **`nutrition_intelligence`**: the pure calculators and engine configuration
//! - **logging**: `tracing` subscriber setup for binaries
//! - **services**: the report pipeline, which validates input and logs each stage
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use nutrition_engine::models::{DietPreference, RawUserMetrics};
//! use nutrition_engine::services::{NutritionReportRequest, NutritionReportService};
//!
//! # fn main() -> nutrition_engine::errors::AppResult<()> {
//! let request = NutritionReportRequest {
//!     metrics: RawUserMetrics {
//!         age: Some(30.0),
//!         sex: Some("female".to_owned()),
//!         weight_kg: Some(62.0),
//!         height_cm: Some(165.0),
//!         activity_level: Some(1.375),
//!         goal: Some("maintain".to_owned()),
//!     },
//!     date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap_or_default(),
//!     meals: Vec::new(),
//!     diet_preference: DietPreference::Vegetarian,
//! };
//!
//! let report = NutritionReportService::default().generate(request)?;
//! println!("{}", report.summary);
//! # Ok(())
//! # }
//! ```

/// Structured logging configuration
pub mod logging;

/// End-to-end workflows over the engine
pub mod services;

pub use nutrition_core::{constants, errors, models};
pub use nutrition_intelligence as engine;
pub use nutrition_intelligence::config;
