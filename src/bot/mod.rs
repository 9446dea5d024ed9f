//! Bot module for handling Telegram interactions
//!
//! Split into two submodules:
//! - `message_handler`: routes incoming commands and messages
//! - `ui_builder`: creates the mini-app keyboard and formats bot messages

pub mod message_handler;
pub mod ui_builder;

// Re-export main handler function for use in main.rs
pub use message_handler::message_handler;

pub use ui_builder::{create_webapp_keyboard, format_welcome_message};
