// src/web/handlers/system_handlers.rs
use crate::chat::ChatService;
use crate::jobs::JobAggregator;
use crate::web::types::HealthResponse;

use rocket::serde::json::Json;
use rocket::State;

pub async fn health_handler(
    aggregator: &State<JobAggregator>,
    chat_service: &State<ChatService>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        jobs_provider_configured: aggregator.is_configured(),
        chat_model_configured: chat_service.is_configured(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
