// ABOUTME: Output formatting helpers for nutrition-cli
// ABOUTME: Writes results and error envelopes to stdout as compact or pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

use nutrition_engine::errors::{AppError, AppResult, ErrorResponse};
use serde::Serialize;
use tracing::error;

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let json = to_json(value, pretty)?;
    println!("{json}");
    Ok(())
}

/// Print an error envelope on stdout
pub fn print_error(app_error: AppError, pretty: bool) {
    error!(code = ?app_error.code, "{}", app_error.message);
    let response = ErrorResponse::from(app_error);
    match to_json(&response, pretty) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to serialize error response: {e}"),
    }
}
