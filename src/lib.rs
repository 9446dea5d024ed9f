//! # Nutribot
//!
//! A Telegram bot that links users to a questionnaire mini-app, persists the
//! collected biometric profile in Postgres and computes daily nutrition
//! targets: Mifflin-St Jeor BMR scaled by an activity multiplier, a
//! goal-based caloric adjustment with a 1200 kcal floor, and a macro split
//! converted to grams.

pub mod bot;
pub mod config;
pub mod db;
pub mod nutrition;
pub mod nutrition_errors;
pub mod webapp;
