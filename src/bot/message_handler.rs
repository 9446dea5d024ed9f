//! Message Handler module for processing incoming Telegram messages

use std::sync::Arc;

use anyhow::Result;
use sqlx::postgres::PgPool;
use teloxide::prelude::*;
use tracing::{info, warn};
use url::Url;

use crate::db;

use super::ui_builder::{create_webapp_keyboard, format_help_message, format_welcome_message};

/// Route an incoming message to the matching command handler.
pub async fn message_handler(
    bot: Bot,
    msg: Message,
    pool: Arc<PgPool>,
    webapp_url: Arc<Url>,
) -> Result<()> {
    let Some(text) = msg.text() else {
        info!(chat_id = %msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    match text {
        "/start" => handle_start(&bot, &msg, &pool, &webapp_url).await,
        "/help" => {
            bot.send_message(msg.chat.id, format_help_message()).await?;
            Ok(())
        }
        other => {
            // Anything that is not a command is only logged, never answered.
            info!(chat_id = %msg.chat.id, text = other, "Unhandled message");
            Ok(())
        }
    }
}

/// Handle /start: register the sender and offer the questionnaire button.
async fn handle_start(bot: &Bot, msg: &Message, pool: &PgPool, webapp_url: &Url) -> Result<()> {
    let first_name = match msg.from.as_ref() {
        Some(from) => {
            let telegram_id = i64::try_from(from.id.0).unwrap_or_default();

            // Registration failures must not keep the greeting from going out.
            if let Err(e) = db::get_or_create_user(
                pool,
                telegram_id,
                from.username.as_deref(),
                Some(from.first_name.as_str()),
            )
            .await
            {
                warn!(telegram_id, error = %e, "Failed to register user on /start");
            }

            Some(from.first_name.clone())
        }
        None => None,
    };

    bot.send_message(msg.chat.id, format_welcome_message(first_name.as_deref()))
        .reply_markup(create_webapp_keyboard(webapp_url.clone()))
        .await?;

    info!(chat_id = %msg.chat.id, "Sent questionnaire invitation");
    Ok(())
}
