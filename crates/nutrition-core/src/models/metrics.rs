// ABOUTME: Body metric models used as input to target calculation
// ABOUTME: Sex, Goal, ActivityLevel, DietPreference, UserMetrics and unvalidated RawUserMetrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

use crate::constants::metric_bounds::{
    MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};

/// Sex used for BMR offsets and reference intake lookups
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male reference values
    Male,
    /// Female reference values
    Female,
    /// Declined to specify; BMR uses the midpoint offset, RDA uses non-male values
    Other,
}

impl Sex {
    /// Parse from the lowercase identifier (`male`, `female`, `other`)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

/// Body composition goal driving calorie and protein adjustments
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric balance
    Maintain,
    /// Caloric deficit
    Lose,
    /// Caloric surplus
    Gain,
}

impl Goal {
    /// Parse from the lowercase identifier (`maintain`, `lose`, `gain`)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "maintain" => Some(Self::Maintain),
            "lose" => Some(Self::Lose),
            "gain" => Some(Self::Gain),
            _ => None,
        }
    }

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Maintain => "maintain",
            Self::Lose => "lose",
            Self::Gain => "gain",
        }
    }
}

/// Activity level for TDEE calculation
///
/// Each level maps to one of five fixed multipliers (1.2, 1.375, 1.55, 1.725, 1.9).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise and a physical job
    ExtraActive,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// TDEE multiplier for this level
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
            Self::ExtraActive => 1.9,
        }
    }

    /// Map a raw multiplier back to its level; anything but the five exact values is `None`
    #[must_use]
    pub fn from_multiplier(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| (level.multiplier() - value).abs() < f64::EPSILON)
    }

    /// Short display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly Active",
            Self::ModeratelyActive => "Moderately Active",
            Self::VeryActive => "Very Active",
            Self::ExtraActive => "Extra Active",
        }
    }

    /// One-line description of the expected training volume
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Sedentary => "Little or no exercise",
            Self::LightlyActive => "Light exercise 1-3 days/week",
            Self::ModeratelyActive => "Moderate exercise 3-5 days/week",
            Self::VeryActive => "Hard exercise 6-7 days/week",
            Self::ExtraActive => "Very hard exercise & physical job",
        }
    }
}

/// Dietary pattern used to filter food suggestions
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietPreference {
    /// No restriction
    #[default]
    Omnivore,
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
}

/// Validated body metrics
///
/// Construct through the calculator's `parse_user_metrics` so ranges are
/// checked; the calculators assume these fields are in bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UserMetrics {
    /// Age in years (13-120)
    pub age: u32,
    /// Sex for BMR and reference intake lookups
    pub sex: Sex,
    /// Body weight in kilograms (30-300)
    pub weight_kg: f64,
    /// Height in centimeters (100-250)
    pub height_cm: f64,
    /// Activity level for TDEE
    pub activity_level: ActivityLevel,
    /// Body composition goal
    pub goal: Goal,
}

/// Unvalidated body metrics as submitted by a settings form or JSON request
///
/// Every field is optional and enums are kept as raw strings/numbers so
/// that validation can report each violation instead of failing on the
/// first unparseable value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawUserMetrics {
    /// Age in years; must be a whole number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    /// `male`, `female` or `other`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    /// Body weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// One of 1.2, 1.375, 1.55, 1.725, 1.9
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<f64>,
    /// `maintain`, `lose` or `gain`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

impl RawUserMetrics {
    /// Age as whole years, when present, integral and within bounds
    #[must_use]
    pub fn whole_age(&self) -> Option<u32> {
        self.age
            .filter(|age| age.fract().abs() < f64::EPSILON && self.age_in_range())
            .map(|age| age as u32)
    }

    fn age_in_range(&self) -> bool {
        self.age
            .is_some_and(|age| (f64::from(MIN_AGE)..=f64::from(MAX_AGE)).contains(&age))
    }

    /// Every violated bound, one message per field; empty when the metrics are usable
    #[must_use]
    pub fn violations(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.age_in_range() {
            errors.push(format!("Age must be between {MIN_AGE} and {MAX_AGE}"));
        } else if self.whole_age().is_none() {
            errors.push("Age must be a whole number".to_owned());
        }
        if !self
            .weight_kg
            .is_some_and(|weight| (MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight))
        {
            errors.push(format!(
                "Weight must be between {MIN_WEIGHT_KG} and {MAX_WEIGHT_KG} kg"
            ));
        }
        if !self
            .height_cm
            .is_some_and(|height| (MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height))
        {
            errors.push(format!(
                "Height must be between {MIN_HEIGHT_CM} and {MAX_HEIGHT_CM} cm"
            ));
        }
        if self.sex.as_deref().and_then(Sex::parse).is_none() {
            errors.push("Sex must be male, female, or other".to_owned());
        }
        if self
            .activity_level
            .and_then(ActivityLevel::from_multiplier)
            .is_none()
        {
            errors.push("Invalid activity level".to_owned());
        }
        if self.goal.as_deref().and_then(Goal::parse).is_none() {
            errors.push("Goal must be maintain, lose, or gain".to_owned());
        }

        errors
    }
}

impl TryFrom<RawUserMetrics> for UserMetrics {
    type Error = AppError;

    fn try_from(raw: RawUserMetrics) -> Result<Self, Self::Error> {
        let violations = raw.violations();
        if !violations.is_empty() {
            return Err(AppError::validation_failed(&violations));
        }

        match (
            raw.whole_age(),
            raw.sex.as_deref().and_then(Sex::parse),
            raw.weight_kg,
            raw.height_cm,
            raw.activity_level.and_then(ActivityLevel::from_multiplier),
            raw.goal.as_deref().and_then(Goal::parse),
        ) {
            (
                Some(age),
                Some(sex),
                Some(weight_kg),
                Some(height_cm),
                Some(activity_level),
                Some(goal),
            ) => Ok(Self {
                age,
                sex,
                weight_kg,
                height_cm,
                activity_level,
                goal,
            }),
            _ => Err(AppError::internal(
                "metrics passed validation but a field failed to convert",
            )),
        }
    }
}

impl From<UserMetrics> for RawUserMetrics {
    fn from(metrics: UserMetrics) -> Self {
        Self {
            age: Some(f64::from(metrics.age)),
            sex: Some(metrics.sex.as_str().to_owned()),
            weight_kg: Some(metrics.weight_kg),
            height_cm: Some(metrics.height_cm),
            activity_level: Some(metrics.activity_level.multiplier()),
            goal: Some(metrics.goal.as_str().to_owned()),
        }
    }
}
