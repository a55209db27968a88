// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Fixed thresholds for deficit severity, weekly patterns, alerts, and food scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

//! Constants module
//!
//! Thresholds and fixed heuristics grouped by the component that consults
//! them. Values that users may reasonably tune (BMR coefficients, goal
//! factors, macro splits) live in the engine configuration instead.

/// Energy conversion factors (Atwater)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Body metric bounds accepted by validation
pub mod metric_bounds {
    /// Minimum supported age (years)
    pub const MIN_AGE: u32 = 13;
    /// Maximum supported age (years)
    pub const MAX_AGE: u32 = 120;
    /// Minimum supported body weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Maximum supported body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;
    /// Minimum supported height (cm)
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Maximum supported height (cm)
    pub const MAX_HEIGHT_CM: f64 = 250.0;
}

/// WHO BMI category cut-offs (exclusive upper bounds)
pub mod bmi {
    /// Below this value: underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Below this value: normal weight
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Below this value: overweight, otherwise obese
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
}

/// Micronutrient reference table age thresholds
pub mod rda {
    /// Age at which iron, calcium and B6 switch to the older-adult values
    pub const OLDER_ADULT_AGE: u32 = 50;
    /// Age at which magnesium switches to the higher adult value
    pub const MAGNESIUM_ADULT_AGE: u32 = 30;
}

/// Daily deficit severity tiers (percentage of target met)
pub mod deficit {
    /// At or above this percentage: low severity
    pub const LOW_SEVERITY_MIN_PERCENT: f64 = 80.0;
    /// At or above this percentage: medium severity
    pub const MEDIUM_SEVERITY_MIN_PERCENT: f64 = 50.0;
    /// At or above this percentage: high severity, otherwise critical
    pub const HIGH_SEVERITY_MIN_PERCENT: f64 = 25.0;
    /// Default number of deficits returned by a top-N query
    pub const DEFAULT_TOP_DEFICITS: usize = 3;
    /// Default number of days a nutrient must be short to count as chronic
    pub const DEFAULT_CHRONIC_DAYS_THRESHOLD: usize = 3;
}

/// Weekly pattern analysis
pub mod weekly {
    /// Number of days in an analysis window
    pub const DAYS_PER_WEEK: usize = 7;
    /// A day is deficient when intake is strictly below this fraction of target
    pub const DAY_DEFICIENT_FRACTION: f64 = 0.8;
    /// Days deficient at or above which a pattern is chronic
    pub const CHRONIC_MIN_DAYS: usize = 5;
    /// Days deficient at or above which a pattern is frequent
    pub const FREQUENT_MIN_DAYS: usize = 3;
    /// Weight applied to the cumulative percentage deficit in the risk score
    pub const RISK_MAGNITUDE_WEIGHT: f64 = 0.5;
    /// Points contributed by a fully consistent (7/7) deficit
    pub const RISK_CONSISTENCY_POINTS: f64 = 50.0;
    /// Upper clamp of the risk score
    pub const MAX_RISK_SCORE: f64 = 100.0;
}

/// Daily alert thresholds
pub mod alert {
    /// Chronic patterns must score strictly above this to raise an alert
    pub const MIN_ALERT_RISK_SCORE: f64 = 50.0;
    /// Scores strictly above this produce a critical alert
    pub const CRITICAL_RISK_SCORE: f64 = 75.0;
    /// Maximum actionable nutrients listed in an alert
    pub const MAX_ACTIONABLE_NUTRIENTS: usize = 3;
}

/// Recovery time heuristic
pub mod recovery {
    /// Base recovery days for vitamin D
    pub const VITAMIN_D_BASE_DAYS: f64 = 60.0;
    /// Base recovery days for iron
    pub const IRON_BASE_DAYS: f64 = 40.0;
    /// Base recovery days for vitamin C
    pub const VITAMIN_C_BASE_DAYS: f64 = 7.0;
    /// Base recovery days for every other nutrient
    pub const DEFAULT_BASE_DAYS: f64 = 21.0;
    /// Fraction of the adjusted days needed to reach normal levels
    pub const NORMAL_LEVELS_FRACTION: f64 = 0.5;
    /// Confidence reported for chronic patterns
    pub const CHRONIC_CONFIDENCE: f64 = 0.85;
    /// Confidence reported for frequent and occasional patterns
    pub const DEFAULT_CONFIDENCE: f64 = 0.70;
}

/// Food recommendation scoring
pub mod recommendations {
    /// Number of top deficits a food is scored against
    pub const DEFICITS_CONSIDERED: usize = 3;
    /// Foods must score strictly above this to be recommended
    pub const MIN_FOOD_SCORE: f64 = 10.0;
    /// Maximum recommendations returned
    pub const MAX_RECOMMENDATIONS: usize = 5;
    /// Serving size every recommendation is expressed in (grams)
    pub const SERVING_SIZE_G: f64 = 100.0;
    /// Score multiplier for critical deficits
    pub const CRITICAL_WEIGHT: f64 = 3.0;
    /// Score multiplier for high deficits
    pub const HIGH_WEIGHT: f64 = 2.0;
    /// Score multiplier for medium and low deficits
    pub const DEFAULT_WEIGHT: f64 = 1.0;
}
