//! # Nutrition Calculator Module
//!
//! Pure daily-nutrition math: Mifflin-St Jeor basal metabolic rate, an
//! activity multiplier for total daily energy expenditure, a goal-based
//! caloric adjustment with a 1200 kcal floor, and a percentage macro split
//! converted to grams via Atwater factors (4 kcal/g protein and carbohydrate,
//! 9 kcal/g fat).
//!
//! Everything here is deterministic and side-effect free. Input validation
//! (range checks, string-to-enum parsing) is owned by the request handler in
//! front of this module; unknown enum strings are rejected at that parse
//! boundary, so the functions below are total over their typed inputs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::nutrition_errors::NutritionError;

/// Hard floor for the daily calorie target, in kcal
pub const CALORIE_FLOOR: i32 = 1200;

/// Biological sex used by the Mifflin-St Jeor formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(NutritionError::InvalidEnumValue {
                field: "gender",
                value: other.to_string(),
            }),
        }
    }
}

/// Weekly activity level, mapped to a fixed TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary lifestyle
    Low,
    /// Training 1-3 times a week
    Medium,
    /// Training 4+ times a week
    High,
}

impl ActivityLevel {
    /// TDEE multiplier applied to BMR
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Low => 1.2,
            ActivityLevel::Medium => 1.55,
            ActivityLevel::High => 1.725,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(ActivityLevel::Low),
            "medium" => Ok(ActivityLevel::Medium),
            "high" => Ok(ActivityLevel::High),
            other => Err(NutritionError::InvalidEnumValue {
                field: "activity",
                value: other.to_string(),
            }),
        }
    }
}

/// User-selected caloric intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseFat,
    Maintain,
    GainMuscle,
}

/// Percentage-of-calories allocation for one goal; rows sum to 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub fat: f64,
    pub carb: f64,
}

impl Goal {
    /// Caloric offset applied to TDEE, in kcal
    pub fn calorie_adjustment(self) -> i32 {
        match self {
            Goal::LoseFat => -500,
            Goal::Maintain => 0,
            Goal::GainMuscle => 300,
        }
    }

    /// Macro percentage row for this goal
    pub fn macro_split(self) -> MacroSplit {
        match self {
            // Cutting: more protein, fewer carbs
            Goal::LoseFat => MacroSplit {
                protein: 0.35,
                fat: 0.25,
                carb: 0.40,
            },
            // Bulking: more protein and carbs
            Goal::GainMuscle => MacroSplit {
                protein: 0.30,
                fat: 0.20,
                carb: 0.50,
            },
            Goal::Maintain => MacroSplit {
                protein: 0.30,
                fat: 0.25,
                carb: 0.45,
            },
        }
    }
}

impl FromStr for Goal {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lose_fat" => Ok(Goal::LoseFat),
            "maintain" => Ok(Goal::Maintain),
            "gain_muscle" => Ok(Goal::GainMuscle),
            other => Err(NutritionError::InvalidEnumValue {
                field: "goal",
                value: other.to_string(),
            }),
        }
    }
}

/// Validated biometric profile, input to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    pub gender: Gender,
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

/// Daily nutrition targets, output of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionResult {
    /// Target intake in kcal/day (goal-adjusted, floored at 1200)
    pub calories: i32,
    /// Protein in grams/day
    pub protein: i32,
    /// Carbohydrates in grams/day
    pub carbs: i32,
    /// Fat in grams/day
    pub fats: i32,
}

/// Basal metabolic rate via the Mifflin-St Jeor equation.
///
/// Men:   BMR = 10*weight + 6.25*height - 5*age + 5
/// Women: BMR = 10*weight + 6.25*height - 5*age - 161
///
/// No clamping: pathological inputs yield a pathological (even negative) BMR.
pub fn calculate_bmr(profile: &UserProfile) -> f64 {
    let base = 10.0 * profile.weight + 6.25 * profile.height - 5.0 * f64::from(profile.age);

    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier,
/// rounded to the nearest kcal (halves away from zero).
pub fn calculate_tdee(profile: &UserProfile) -> i32 {
    (calculate_bmr(profile) * profile.activity.multiplier()).round() as i32
}

/// Goal-adjusted calorie target, never below [`CALORIE_FLOOR`].
pub fn calculate_target_calories(profile: &UserProfile) -> i32 {
    let tdee = calculate_tdee(profile);
    (tdee + profile.goal.calorie_adjustment()).max(CALORIE_FLOOR)
}

/// Split a calorie target into protein/carb/fat grams for a goal.
///
/// Each gram value is rounded independently, so re-summing the grams through
/// the Atwater factors can drift from `calories` by a few kcal.
pub fn calculate_macros(calories: i32, goal: Goal) -> NutritionResult {
    let split = goal.macro_split();
    let calories_f = f64::from(calories);

    let protein = (calories_f * split.protein / 4.0).round() as i32;
    let fats = (calories_f * split.fat / 9.0).round() as i32;
    let carbs = (calories_f * split.carb / 4.0).round() as i32;

    NutritionResult {
        calories,
        protein,
        carbs,
        fats,
    }
}

/// Entry point: full profile-to-targets pipeline.
pub fn calculate_nutrition(profile: &UserProfile) -> NutritionResult {
    let target_calories = calculate_target_calories(profile);
    calculate_macros(target_calories, profile.goal)
}

/// Human-readable rendering of a result, shown by the mini-app.
pub fn format_nutrition_results(result: &NutritionResult) -> String {
    format!(
        "📊 Your daily targets:\n\n\
         🔥 Calories: {} kcal\n\n\
         🥩 Protein: {} g\n\
         🍞 Carbs: {} g\n\
         🥑 Fats: {} g",
        result.calories, result.protein, result.carbs, result.fats
    )
}
