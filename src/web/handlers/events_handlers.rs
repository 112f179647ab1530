// src/web/handlers/events_handlers.rs
use crate::events::{filter_events, EventsResponse, ALL_TYPES};
use crate::jobs::resolve_city;
use crate::web::types::EventsQuery;

use rocket::serde::json::Json;
use tracing::info;

pub async fn get_events_handler(query: EventsQuery) -> Json<EventsResponse> {
    let city = resolve_city(query.city.as_deref());
    let kind = query
        .kind
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .unwrap_or(ALL_TYPES);

    let events = filter_events(&city, kind);
    info!("Serving {} events for city: {}, type: {}", events.len(), city, kind);

    Json(EventsResponse { events })
}
