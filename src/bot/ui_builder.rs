//! UI Builder module for creating keyboards and formatting messages

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, WebAppInfo};
use url::Url;

/// Create the single-button inline keyboard that opens the questionnaire
/// mini-app.
pub fn create_webapp_keyboard(webapp_url: Url) -> InlineKeyboardMarkup {
    let button = InlineKeyboardButton::web_app(
        "Fill in the questionnaire ✅",
        WebAppInfo { url: webapp_url },
    );

    InlineKeyboardMarkup::new(vec![vec![button]])
}

/// Greeting sent in response to /start
pub fn format_welcome_message(first_name: Option<&str>) -> String {
    let name = first_name.unwrap_or("friend");

    format!(
        "Hi, {name}! 👋\n\
         This is your first step towards a healthier routine.\n\n\
         Tap the button below and answer a few questions — I'll work out \
         your daily calorie target and a starting point for your meal plan."
    )
}

/// Usage text sent in response to /help
pub fn format_help_message() -> String {
    "Send /start to open the questionnaire. \
     After you submit it, the mini-app shows your daily calories and macros."
        .to_string()
}
