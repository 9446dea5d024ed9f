//! # Nutrition Error Types Module
//!
//! This module defines the error types used by the nutrition calculator and
//! the profile validation layer in front of it.

/// Custom error types for nutrition calculations and profile validation
#[derive(Debug, Clone, PartialEq)]
pub enum NutritionError {
    /// A gender/activity/goal string outside the fixed enum set
    InvalidEnumValue { field: &'static str, value: String },
    /// A numeric profile field outside its plausible physiological range
    OutOfRange { field: &'static str, value: f64 },
}

impl std::fmt::Display for NutritionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NutritionError::InvalidEnumValue { field, value } => {
                write!(f, "Invalid value for {field}: '{value}'")
            }
            NutritionError::OutOfRange { field, value } => {
                write!(f, "Value out of range for {field}: {value}")
            }
        }
    }
}

impl std::error::Error for NutritionError {}
