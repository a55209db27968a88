// ABOUTME: Core types and constants for the nutrition target and deficit engine
// ABOUTME: Foundation crate with error handling, threshold constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

#![deny(unsafe_code)]

//! # Nutrition Core
//!
//! Foundation crate providing shared types and constants for the nutrition
//! engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **constants**: Named thresholds for deficit severity, weekly patterns, and recommendations
//! - **models**: Body metrics, nutrient identifiers, intake totals, and targets

/// Unified error handling system with standard error codes
pub mod errors;

/// Named thresholds and fixed heuristics organized by domain
pub mod constants;

/// Core data models (metrics, nutrients, targets, meal logs)
pub mod models;
