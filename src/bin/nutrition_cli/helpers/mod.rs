// ABOUTME: Helper modules for nutrition-cli
// ABOUTME: JSON output formatting shared by all commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

pub mod output;
