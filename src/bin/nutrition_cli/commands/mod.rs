// ABOUTME: Command modules for nutrition-cli
// ABOUTME: Metric-driven calculations and the daily report pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

pub mod metrics;
pub mod report;
