// ABOUTME: nutrition-cli - command-line front end for the nutrition engine
// ABOUTME: Computes targets, validates metrics, classifies BMI, and produces daily reports as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors
//!
//! Usage:
//! ```bash
//! # Daily targets for a moderately active 30 year old man
//! nutrition-cli targets --age 30 --sex male --weight-kg 75 --height-cm 180 \
//!     --activity-level 1.55 --goal maintain
//!
//! # List every violated bound without failing
//! nutrition-cli validate --age 10 --sex male
//!
//! # BMI and WHO category
//! nutrition-cli bmi --weight-kg 75 --height-cm 180
//!
//! # Full daily report from a request file
//! nutrition-cli report --input request.json --pretty
//! ```
//!
//! Results are written to stdout as JSON. Failures print an error envelope
//! to stdout and exit with 2 (invalid input), 3 (configuration) or 1.

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use nutrition_engine::errors::AppResult;
use nutrition_engine::logging::LoggingConfig;
use nutrition_engine::models::RawUserMetrics;
use std::path::PathBuf;
use std::process::ExitCode;

use helpers::output::print_error;

#[derive(Parser)]
#[command(
    name = "nutrition-cli",
    about = "Nutrition target and deficit engine",
    long_about = "Compute personalized nutrition targets, detect nutrient gaps, and generate daily reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute daily nutrition targets
    Targets(MetricsArgs),

    /// Report every violated metric bound
    Validate(MetricsArgs),

    /// Compute BMI and its WHO category
    Bmi {
        /// Body weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,
    },

    /// Generate a daily report from a JSON request file
    Report {
        /// Path to the request JSON
        #[arg(long, short = 'i')]
        input: PathBuf,
    },
}

/// Body metric flags, all optional so validation can report every gap
#[derive(Args)]
struct MetricsArgs {
    /// Age in years
    #[arg(long)]
    age: Option<f64>,

    /// male, female, or other
    #[arg(long)]
    sex: Option<String>,

    /// Body weight in kilograms
    #[arg(long)]
    weight_kg: Option<f64>,

    /// Height in centimeters
    #[arg(long)]
    height_cm: Option<f64>,

    /// Activity multiplier (1.2, 1.375, 1.55, 1.725, 1.9)
    #[arg(long)]
    activity_level: Option<f64>,

    /// maintain, lose, or gain
    #[arg(long)]
    goal: Option<String>,
}

impl From<MetricsArgs> for RawUserMetrics {
    fn from(args: MetricsArgs) -> Self {
        Self {
            age: args.age,
            sex: args.sex,
            weight_kg: args.weight_kg,
            height_cm: args.height_cm,
            activity_level: args.activity_level,
            goal: args.goal,
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let pretty = cli.pretty;
    match cli.command {
        Command::Targets(args) => commands::metrics::targets(args.into(), pretty),
        Command::Validate(args) => commands::metrics::validate(&args.into(), pretty),
        Command::Bmi {
            weight_kg,
            height_cm,
        } => commands::metrics::bmi(weight_kg, height_cm, pretty),
        Command::Report { input } => commands::report::generate(&input, pretty),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = LoggingConfig::from_env()
        .with_default_level(default_level)
        .init()
    {
        eprintln!("{e}");
    }

    let pretty = cli.pretty;
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let code = error.code.exit_code();
            print_error(error, pretty);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
