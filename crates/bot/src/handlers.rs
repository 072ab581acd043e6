//! Dispatcher schema and message handlers.

use std::sync::Arc;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::InputFile;
use teloxide::utils::command::BotCommands;
use vitrina_core::product_message::{self, ParsedProduct};

use crate::api_client::ApiClient;
use crate::config::BotConfig;
use crate::session::{PendingAction, SessionMap};

/// Bot commands.
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "add a product (admins only)")]
    AddProduct,
    #[command(description = "list products")]
    Products,
}

/// Prompt sent after `/addproduct`, describing the expected block.
const ADD_PRODUCT_PROMPT: &str = "Send the new product in this format, one field per line:\n\n\
    Name\n\
    Category (iphone, macbook, ipad, watch, airpods)\n\
    Price\n\
    Old price (leave the line empty if none)\n\
    Image URL\n\
    Badge (leave the line empty if none)\n\
    Description";

/// Shared handler dependencies.
pub struct BotState {
    pub config: BotConfig,
    pub sessions: SessionMap,
    pub api: ApiClient,
}

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Build the dispatcher handler tree. The same schema is used by `main`
/// and can be exercised in tests.
pub fn schema() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync>> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(
            // A plain message only matters while its chat has a pending flow.
            Update::filter_message()
                .filter(|msg: Message, state: Arc<BotState>| {
                    state.sessions.peek(msg.chat.id).is_some()
                })
                .endpoint(handle_pending_message),
        )
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    command: Command,
    state: Arc<BotState>,
) -> HandlerResult {
    match command {
        Command::AddProduct => {
            let from_id = msg.from.as_ref().map(|u| u.id.0).unwrap_or_default();
            if !state.config.is_admin(from_id) {
                tracing::warn!(user = from_id, "Rejected /addproduct from non-admin");
                bot.send_message(msg.chat.id, "You are not allowed to run this command.")
                    .await?;
                return Ok(());
            }

            state
                .sessions
                .set(msg.chat.id, PendingAction::AwaitingProductData);
            bot.send_message(msg.chat.id, ADD_PRODUCT_PROMPT).await?;
        }
        Command::Products => {
            send_product_list(&bot, &msg, &state).await?;
        }
    }
    Ok(())
}

async fn send_product_list(bot: &Bot, msg: &Message, state: &Arc<BotState>) -> HandlerResult {
    match state.api.list_products().await {
        Ok(products) if products.is_empty() => {
            bot.send_message(msg.chat.id, "No products yet.").await?;
        }
        Ok(products) => {
            let mut text = String::from("Products:\n\n");
            for (i, p) in products.iter().enumerate() {
                text.push_str(&format!("{}. {} - {} so'm\n", i + 1, p.name, p.price));
            }
            bot.send_message(msg.chat.id, text).await?;
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to fetch products");
            bot.send_message(msg.chat.id, "Failed to fetch products.")
                .await?;
        }
    }
    Ok(())
}

/// Handle the message following `/addproduct`. The pending flag is
/// cleared before anything else, so one submission gets one attempt.
async fn handle_pending_message(bot: Bot, msg: Message, state: Arc<BotState>) -> HandlerResult {
    let Some(PendingAction::AwaitingProductData) = state.sessions.take(msg.chat.id) else {
        return Ok(());
    };

    let Some(text) = msg.text() else {
        bot.send_message(msg.chat.id, "Expected a text message with the product fields.")
            .await?;
        return Ok(());
    };

    let parsed = match product_message::parse(text) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::debug!(error = %err, "Product message rejected");
            bot.send_message(
                msg.chat.id,
                format!("Wrong format ({err}). Run /addproduct to try again."),
            )
            .await?;
            return Ok(());
        }
    };

    match state.api.create_product(&parsed).await {
        Ok(()) => {
            tracing::info!(name = %parsed.name, "Product submitted via bot");
            bot.send_message(msg.chat.id, "Product added.").await?;
            send_preview(&bot, &msg, &parsed).await?;
        }
        Err(err) => {
            tracing::error!(error = %err, "Product submission failed");
            bot.send_message(msg.chat.id, format!("Could not add the product: {err}"))
                .await?;
        }
    }
    Ok(())
}

/// Photo preview with a short caption; falls back to plain text when the
/// image reference is not a fetchable URL.
async fn send_preview(bot: &Bot, msg: &Message, parsed: &ParsedProduct) -> HandlerResult {
    let caption = format!("{}\n{} so'm\n{}", parsed.name, parsed.price, parsed.description);

    match reqwest::Url::parse(&parsed.image) {
        Ok(url) => {
            bot.send_photo(msg.chat.id, InputFile::url(url))
                .caption(caption)
                .await?;
        }
        Err(_) => {
            bot.send_message(msg.chat.id, caption).await?;
        }
    }
    Ok(())
}
