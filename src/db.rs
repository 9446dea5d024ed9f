//! # Database Module
//!
//! Postgres persistence for Telegram users, their questionnaire profiles and
//! the denormalized nutrition score. All writes are upserts keyed on
//! `telegram_id` (users) or `user_id` (profiles, scores): re-submitting the
//! questionnaire overwrites the previous answers.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPool;
use tracing::info;

/// A Telegram user known to the bot
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Questionnaire answers persisted for one user
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Profile {
    pub user_id: i64,
    pub age: i32,
    pub gender: String,
    pub height: f64,
    pub weight: f64,
    pub activity_level: String,
    pub goal: String,
    pub updated_at: DateTime<Utc>,
}

/// Denormalized gamification record; `score` mirrors the calorie target
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UserScore {
    pub user_id: i64,
    pub score: i32,
    pub streak_days: i32,
    pub level: i32,
    pub updated_at: DateTime<Utc>,
}

/// Initialize the database schema
pub async fn init_database_schema(pool: &PgPool) -> Result<()> {
    info!("Initializing database schema");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            telegram_id BIGINT NOT NULL UNIQUE,
            username TEXT,
            first_name TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    )
    .execute(pool)
    .await
    .context("Failed to create users table")?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS profiles (
            user_id BIGINT PRIMARY KEY REFERENCES users(id) ON DELETE CASCADE,
            age INTEGER NOT NULL,
            gender TEXT NOT NULL,
            height DOUBLE PRECISION NOT NULL,
            weight DOUBLE PRECISION NOT NULL,
            activity_level TEXT NOT NULL,
            goal TEXT NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    )
    .execute(pool)
    .await
    .context("Failed to create profiles table")?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS user_score (
            user_id BIGINT PRIMARY KEY REFERENCES users(id) ON DELETE CASCADE,
            score INTEGER NOT NULL,
            streak_days INTEGER NOT NULL DEFAULT 0,
            level INTEGER NOT NULL DEFAULT 1,
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    )
    .execute(pool)
    .await
    .context("Failed to create user_score table")?;

    info!("Database schema initialized successfully");
    Ok(())
}

/// Upsert a user by telegram_id, refreshing username and first name.
pub async fn get_or_create_user(
    pool: &PgPool,
    telegram_id: i64,
    username: Option<&str>,
    first_name: Option<&str>,
) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (telegram_id, username, first_name)
         VALUES ($1, $2, $3)
         ON CONFLICT (telegram_id) DO UPDATE
             SET username = EXCLUDED.username,
                 first_name = EXCLUDED.first_name
         RETURNING id, telegram_id, username, first_name, created_at",
    )
    .bind(telegram_id)
    .bind(username)
    .bind(first_name)
    .fetch_one(pool)
    .await
    .context("Failed to upsert user")?;

    info!(telegram_id, user_id = user.id, "User upserted");
    Ok(user)
}

/// Find a user by telegram_id, if one exists.
pub async fn get_user_by_telegram_id(pool: &PgPool, telegram_id: i64) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, telegram_id, username, first_name, created_at
         FROM users WHERE telegram_id = $1",
    )
    .bind(telegram_id)
    .fetch_optional(pool)
    .await
    .context("Failed to fetch user by telegram_id")?;

    Ok(user)
}

/// Upsert the questionnaire profile for a user.
#[allow(clippy::too_many_arguments)]
pub async fn upsert_profile(
    pool: &PgPool,
    user_id: i64,
    age: i32,
    gender: &str,
    height: f64,
    weight: f64,
    activity_level: &str,
    goal: &str,
) -> Result<Profile> {
    let profile = sqlx::query_as::<_, Profile>(
        "INSERT INTO profiles (user_id, age, gender, height, weight, activity_level, goal, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
         ON CONFLICT (user_id) DO UPDATE
             SET age = EXCLUDED.age,
                 gender = EXCLUDED.gender,
                 height = EXCLUDED.height,
                 weight = EXCLUDED.weight,
                 activity_level = EXCLUDED.activity_level,
                 goal = EXCLUDED.goal,
                 updated_at = NOW()
         RETURNING user_id, age, gender, height, weight, activity_level, goal, updated_at",
    )
    .bind(user_id)
    .bind(age)
    .bind(gender)
    .bind(height)
    .bind(weight)
    .bind(activity_level)
    .bind(goal)
    .fetch_one(pool)
    .await
    .context("Failed to upsert profile")?;

    info!(user_id, "Profile upserted");
    Ok(profile)
}

/// Read the stored profile for a user, if any.
pub async fn get_profile(pool: &PgPool, user_id: i64) -> Result<Option<Profile>> {
    let profile = sqlx::query_as::<_, Profile>(
        "SELECT user_id, age, gender, height, weight, activity_level, goal, updated_at
         FROM profiles WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .context("Failed to fetch profile")?;

    Ok(profile)
}

/// Upsert the denormalized nutrition score for a user.
///
/// A fresh submission resets the streak and keeps the level; first insert
/// starts at level 1.
pub async fn upsert_user_score(pool: &PgPool, user_id: i64, score: i32) -> Result<UserScore> {
    let record = sqlx::query_as::<_, UserScore>(
        "INSERT INTO user_score (user_id, score, streak_days, level, updated_at)
         VALUES ($1, $2, 0, 1, NOW())
         ON CONFLICT (user_id) DO UPDATE
             SET score = EXCLUDED.score,
                 streak_days = 0,
                 updated_at = NOW()
         RETURNING user_id, score, streak_days, level, updated_at",
    )
    .bind(user_id)
    .bind(score)
    .fetch_one(pool)
    .await
    .context("Failed to upsert user score")?;

    info!(user_id, score, "User score upserted");
    Ok(record)
}
