// src/web/handlers/chat_handlers.rs
use crate::chat::{ChatRequest, ChatResponse, ChatService};

use rocket::serde::json::Json;
use rocket::State;
use tracing::debug;

pub async fn chat_handler(
    request: Json<ChatRequest>,
    chat_service: &State<ChatService>,
) -> Json<ChatResponse> {
    debug!("Chat message received ({} chars)", request.message.chars().count());
    Json(chat_service.reply(&request.message).await)
}
