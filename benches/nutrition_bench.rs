// ABOUTME: Criterion benchmarks for the nutrition engine calculators and report pipeline
// ABOUTME: Measures target calculation, deficit detection, weekly analysis, and full reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

//! Criterion benchmarks for the nutrition engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nutrition_engine::config::NutritionConfig;
use nutrition_engine::engine::{
    analyze_weekly_deficits, calculate_nutrition_targets, compute_deficits,
    generate_recommendations, weekly_window,
};
use nutrition_engine::models::{
    ActivityLevel, DietPreference, Goal, MealEntry, MealType, Nutrient, NutrientTotals,
    RawUserMetrics, Sex, UserMetrics,
};
use nutrition_engine::services::{NutritionReportRequest, NutritionReportService};

const REPORT_DATE: (i32, u32, u32) = (2025, 3, 10);

fn report_date() -> NaiveDate {
    let (year, month, day) = REPORT_DATE;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn bench_metrics() -> UserMetrics {
    UserMetrics {
        age: 30,
        sex: Sex::Male,
        weight_kg: 75.0,
        height_cm: 180.0,
        activity_level: ActivityLevel::ModeratelyActive,
        goal: Goal::Maintain,
    }
}

/// Four meals a day for `days` days ending on the report date
#[allow(clippy::cast_precision_loss)]
fn generate_meals(days: u64) -> Vec<MealEntry> {
    let meal_types = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];
    (0..days)
        .filter_map(|offset| report_date().checked_sub_days(Days::new(offset)))
        .flat_map(|date| {
            meal_types.iter().enumerate().map(move |(slot, meal_type)| {
                let scale = 0.15 + (slot as f64) * 0.05;
                MealEntry {
                    date,
                    meal_type: *meal_type,
                    name: None,
                    nutrients: NutrientTotals::new()
                        .with(Nutrient::ProteinG, 120.0 * scale)
                        .with(Nutrient::CarbsG, 350.0 * scale)
                        .with(Nutrient::FatG, 80.0 * scale)
                        .with(Nutrient::FiberG, 30.0 * scale)
                        .with(Nutrient::VitaminDMcg, 8.0 * scale)
                        .with(Nutrient::IronMg, 9.0 * scale)
                        .with(Nutrient::CalciumMg, 700.0 * scale)
                        .with(Nutrient::MagnesiumMg, 300.0 * scale)
                        .with(Nutrient::Omega3G, 0.6 * scale),
                }
            })
        })
        .collect()
}

fn bench_targets(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let metrics = bench_metrics();

    c.bench_function("nutrition_targets", |b| {
        b.iter(|| calculate_nutrition_targets(black_box(&metrics), black_box(&config)));
    });
}

fn bench_daily_analysis(c: &mut Criterion) {
    let targets = calculate_nutrition_targets(&bench_metrics(), &NutritionConfig::default());
    let current = NutrientTotals::new()
        .with(Nutrient::IronMg, 3.0)
        .with(Nutrient::CalciumMg, 400.0)
        .with(Nutrient::ProteinG, 90.0);

    c.bench_function("compute_deficits", |b| {
        b.iter(|| compute_deficits(black_box(&current), black_box(&targets)));
    });

    let deficits = compute_deficits(&current, &targets);
    c.bench_function("food_recommendations", |b| {
        b.iter(|| generate_recommendations(black_box(&deficits), DietPreference::Omnivore));
    });
}

fn bench_weekly_analysis(c: &mut Criterion) {
    let targets = calculate_nutrition_targets(&bench_metrics(), &NutritionConfig::default());
    let mut group = c.benchmark_group("weekly_analysis");

    for days in [7_u64, 30, 90] {
        let meals = generate_meals(days);
        group.bench_with_input(BenchmarkId::from_parameter(days), &meals, |b, meals| {
            b.iter(|| {
                let week = weekly_window(black_box(meals), report_date());
                analyze_weekly_deficits(&week, &targets)
            });
        });
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let service = NutritionReportService::default();
    let request = NutritionReportRequest {
        metrics: RawUserMetrics::from(bench_metrics()),
        date: report_date(),
        meals: generate_meals(8),
        diet_preference: DietPreference::Omnivore,
    };

    c.bench_function("nutrition_report", |b| {
        b.iter(|| service.generate(black_box(request.clone())));
    });
}

criterion_group!(
    benches,
    bench_targets,
    bench_daily_analysis,
    bench_weekly_analysis,
    bench_report
);
criterion_main!(benches);
