// src/web/handlers/jobs_handlers.rs
use crate::jobs::{resolve_city, JobAggregator, JobsResponse};

use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

/// Always 200: provider problems degrade to the fallback set inside the aggregator.
pub async fn get_jobs_handler(
    city: Option<String>,
    aggregator: &State<JobAggregator>,
) -> Json<JobsResponse> {
    let city = resolve_city(city.as_deref());
    info!("Jobs requested for city: {}", city);

    Json(aggregator.search(&city).await)
}
