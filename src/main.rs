use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nutribot::bot;
use nutribot::config::Config;
use nutribot::db;
use nutribot::webapp;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting nutrition questionnaire bot");

    let config = Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    db::init_database_schema(&pool).await?;

    // The mini-app API runs alongside the bot dispatcher.
    let server = webapp::run_server(pool.clone(), &config.bind_addr)
        .context("Failed to bind webapp API server")?;
    info!(bind_addr = %config.bind_addr, "Webapp API listening");
    let _server_handle = tokio::spawn(server);

    let bot = Bot::new(config.bot_token.clone());
    let shared_pool = Arc::new(pool);
    let webapp_url = Arc::new(config.webapp_url.clone());

    info!("Bot initialized, starting dispatcher");

    // Set up the dispatcher with shared connection pool
    let handler = dptree::entry().branch(Update::filter_message().endpoint({
        let pool = Arc::clone(&shared_pool);
        let webapp_url = Arc::clone(&webapp_url);
        move |bot: Bot, msg: Message| {
            let pool = Arc::clone(&pool);
            let webapp_url = Arc::clone(&webapp_url);
            async move { bot::message_handler(bot, msg, pool, webapp_url).await }
        }
    }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
