// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use crate::chat::{ChatRequest, ChatResponse, ChatService};
use crate::core::{ConfigManager, ServiceClient};
use crate::events::EventsResponse;
use crate::jobs::{JobAggregator, JobsResponse};
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[get("/jobs?<city>")]
pub async fn get_jobs(city: Option<String>, aggregator: &State<JobAggregator>) -> Json<JobsResponse> {
    handlers::get_jobs_handler(city, aggregator).await
}

#[get("/events?<query..>")]
pub async fn get_events(query: EventsQuery) -> Json<EventsResponse> {
    handlers::get_events_handler(query).await
}

#[post("/chat", data = "<request>")]
pub async fn chat(
    request: Json<ChatRequest>,
    chat_service: &State<ChatService>,
) -> Json<ChatResponse> {
    handlers::chat_handler(request, chat_service).await
}

#[get("/health")]
pub async fn health(
    aggregator: &State<JobAggregator>,
    chat_service: &State<ChatService>,
) -> Json<HealthResponse> {
    handlers::health_handler(aggregator, chat_service).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format",
        "BAD_REQUEST",
        &["Check your request JSON format"],
    ))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Endpoint not found",
        "NOT_FOUND",
        &["Available endpoints: /api/jobs, /api/events, /api/chat, /api/health"],
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request body could not be processed",
        "UNPROCESSABLE_ENTITY",
        &["Send a JSON object such as {\"message\": \"...\"}"],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error",
        "INTERNAL_ERROR",
        &[
            "Try again in a few moments",
            "Contact support if the problem persists",
        ],
    ))
}

/// Assemble the Rocket instance with all services built from `config`.
pub fn build_rocket(config: ConfigManager) -> Result<Rocket<Build>> {
    let client = ServiceClient::new(config.http.timeout_seconds)?;
    let aggregator = JobAggregator::new(&config.jobs, client.clone());
    let chat_service = ChatService::new(&config.chat, client);

    let figment = rocket::Config::figment()
        .merge(("address", "0.0.0.0"))
        .merge(("port", config.server.port));

    Ok(rocket::custom(figment)
        .attach(Cors)
        .manage(aggregator)
        .manage(chat_service)
        .register(
            "/api",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
        .mount("/api", routes![get_jobs, get_events, chat, health, options]))
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    info!("Starting Asha API server");
    info!("Environment: {}", config.environment);
    info!("Server: http://0.0.0.0:{}", config.server.port);
    info!("Jobs provider: {}", config.jobs.endpoint);

    let _rocket = build_rocket(config)?
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket server failed: {}", e))?;

    Ok(())
}
