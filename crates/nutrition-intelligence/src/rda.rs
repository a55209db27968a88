// ABOUTME: Micronutrient reference intake table keyed by age and sex
// ABOUTME: Single source of truth for vitamin, mineral, fatty acid and water targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

//! Recommended Dietary Allowances for adults (NIH Dietary Reference Intakes).
//!
//! Only `male` selects the male column; `female` and `other` share the
//! non-male values.

use nutrition_core::constants::rda::{MAGNESIUM_ADULT_AGE, OLDER_ADULT_AGE};
use nutrition_core::models::{MicronutrientTargets, Sex};

/// Pick the male or non-male value
const fn by_sex(is_male: bool, male: f64, non_male: f64) -> f64 {
    if is_male {
        male
    } else {
        non_male
    }
}

/// Daily micronutrient targets for an adult
#[must_use]
pub fn get_micronutrient_rda(age: u32, sex: Sex) -> MicronutrientTargets {
    let is_male = sex == Sex::Male;
    let older = age >= OLDER_ADULT_AGE;

    MicronutrientTargets {
        vitamin_d_mcg: 15.0,
        vitamin_c_mg: by_sex(is_male, 90.0, 75.0),
        vitamin_a_mcg: by_sex(is_male, 900.0, 700.0),
        vitamin_e_mg: 15.0,
        vitamin_k_mcg: by_sex(is_male, 120.0, 90.0),
        thiamin_mg: by_sex(is_male, 1.2, 1.1),
        riboflavin_mg: by_sex(is_male, 1.3, 1.1),
        niacin_mg: by_sex(is_male, 16.0, 14.0),
        vitamin_b6_mg: if older {
            by_sex(is_male, 1.7, 1.5)
        } else {
            1.3
        },
        folate_mcg: 400.0,
        vitamin_b12_mcg: 2.4,

        calcium_mg: if older {
            by_sex(is_male, 1000.0, 1200.0)
        } else {
            1000.0
        },
        iron_mg: if older { 8.0 } else { by_sex(is_male, 8.0, 18.0) },
        magnesium_mg: if age < MAGNESIUM_ADULT_AGE {
            by_sex(is_male, 400.0, 310.0)
        } else {
            by_sex(is_male, 420.0, 320.0)
        },
        phosphorus_mg: 700.0,
        potassium_mg: by_sex(is_male, 3400.0, 2600.0),
        // Upper-limit style target; the adequate intake is 1500 mg
        sodium_mg: 2300.0,
        zinc_mg: by_sex(is_male, 11.0, 8.0),
        copper_mg: 0.9,
        manganese_mg: by_sex(is_male, 2.3, 1.8),
        selenium_mcg: 55.0,

        omega3_g: by_sex(is_male, 1.6, 1.1),
        omega6_g: by_sex(is_male, 17.0, 12.0),

        water_l: by_sex(is_male, 3.7, 2.7),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iron_by_age_and_sex() {
        assert!((get_micronutrient_rda(30, Sex::Male).iron_mg - 8.0).abs() < f64::EPSILON);
        assert!((get_micronutrient_rda(28, Sex::Female).iron_mg - 18.0).abs() < f64::EPSILON);
        assert!((get_micronutrient_rda(50, Sex::Female).iron_mg - 8.0).abs() < f64::EPSILON);
        assert!((get_micronutrient_rda(49, Sex::Other).iron_mg - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_other_uses_non_male_column() {
        let other = get_micronutrient_rda(35, Sex::Other);
        let female = get_micronutrient_rda(35, Sex::Female);
        assert_eq!(other, female);
    }

    #[test]
    fn test_age_thresholds() {
        let young = get_micronutrient_rda(29, Sex::Male);
        let adult = get_micronutrient_rda(30, Sex::Male);
        assert!((young.magnesium_mg - 400.0).abs() < f64::EPSILON);
        assert!((adult.magnesium_mg - 420.0).abs() < f64::EPSILON);

        let older_female = get_micronutrient_rda(55, Sex::Female);
        assert!((older_female.calcium_mg - 1200.0).abs() < f64::EPSILON);
        assert!((older_female.vitamin_b6_mg - 1.5).abs() < f64::EPSILON);
    }
}
