//! Telegram admin bot for the storefront backend.
//!
//! Bridges Telegram chat to the REST API: admins add products by sending
//! a structured text block, anyone can list the catalog.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api_client;
mod config;
mod handlers;
mod session;

use api_client::ApiClient;
use config::BotConfig;
use handlers::{BotState, Command};
use session::SessionMap;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrina_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = BotConfig::from_env();
    if config.admin_ids.is_empty() {
        tracing::warn!("ADMIN_IDS is empty; /addproduct will be refused for everyone");
    }
    tracing::info!(api = %config.api_base_url, admins = config.admin_ids.len(), "Loaded bot configuration");

    // --- Bot ---
    let bot = Bot::from_env();
    bot.set_my_commands(Command::bot_commands())
        .await
        .expect("Failed to register bot commands");

    let state = Arc::new(BotState {
        api: ApiClient::new(config.api_base_url.clone()),
        sessions: SessionMap::default(),
        config,
    });

    tracing::info!("Bot started");
    Dispatcher::builder(bot, handlers::schema())
        .dependencies(dptree::deps![Arc::clone(&state)])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
