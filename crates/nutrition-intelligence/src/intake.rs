// ABOUTME: Meal log aggregation into per-day nutrient totals
// ABOUTME: Sums one day of meals and builds the zero-filled seven-day window for weekly analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

use chrono::{Days, NaiveDate};
use nutrition_core::constants::weekly::DAYS_PER_WEEK;
use nutrition_core::models::{DailyNutrientLog, MealEntry, NutrientTotals};

/// Sum every meal logged on `date`
#[must_use]
pub fn daily_totals(meals: &[MealEntry], date: NaiveDate) -> DailyNutrientLog {
    let mut nutrients = NutrientTotals::new();
    let mut meals_logged = 0;

    for meal in meals.iter().filter(|meal| meal.date == date) {
        nutrients += &meal.nutrients;
        meals_logged += 1;
    }

    DailyNutrientLog {
        date,
        nutrients,
        meals_logged,
    }
}

/// Seven consecutive daily logs ending at `end_date`, oldest first
///
/// Days without meals appear with empty totals and `meals_logged = 0`.
#[must_use]
pub fn weekly_window(meals: &[MealEntry], end_date: NaiveDate) -> Vec<DailyNutrientLog> {
    (0..DAYS_PER_WEEK as u64)
        .rev()
        .filter_map(|offset| end_date.checked_sub_days(Days::new(offset)))
        .map(|date| daily_totals(meals, date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrition_core::models::{MealType, Nutrient};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn meal(day: u32, meal_type: MealType, iron: f64) -> MealEntry {
        MealEntry {
            date: date(day),
            meal_type,
            name: None,
            nutrients: NutrientTotals::new().with(Nutrient::IronMg, iron),
        }
    }

    #[test]
    fn test_daily_totals_sums_same_day_only() {
        let meals = vec![
            meal(10, MealType::Breakfast, 2.0),
            meal(10, MealType::Dinner, 3.5),
            meal(11, MealType::Lunch, 9.0),
        ];

        let day = daily_totals(&meals, date(10));
        assert_eq!(day.meals_logged, 2);
        assert!((day.nutrients.amount_or_zero(Nutrient::IronMg) - 5.5).abs() < 1e-9);
    }

    #[test]
    fn test_weekly_window_zero_fills() {
        let meals = vec![meal(4, MealType::Snack, 1.0), meal(10, MealType::Lunch, 4.0)];
        let window = weekly_window(&meals, date(10));

        assert_eq!(window.len(), 7);
        assert_eq!(window[0].date, date(4));
        assert_eq!(window[6].date, date(10));
        assert_eq!(window[0].meals_logged, 1);
        assert_eq!(window[3].meals_logged, 0);
        assert!(window[3].nutrients.is_empty());
    }
}
