// src/events/mod.rs
//! Static events listing, filtered by city and event type

use serde::Serialize;

use crate::jobs::{is_all_cities, ALL_CITIES};

pub const ALL_TYPES: &str = "All Types";

pub const CITIES: [&str; 11] = [
    ALL_CITIES,
    "Bangalore",
    "Mumbai",
    "Delhi",
    "Hyderabad",
    "Chennai",
    "Pune",
    "Kolkata",
    "Ahmedabad",
    "Gurgaon",
    "Noida",
];

pub const EVENT_TYPES: [&str; 5] = [ALL_TYPES, "Webinar", "Workshop", "Conference", "Networking"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Webinar,
    Workshop,
    Conference,
    Networking,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Webinar => "webinar",
            EventType::Workshop => "workshop",
            EventType::Conference => "conference",
            EventType::Networking => "networking",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub city: &'static str,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub image_url: &'static str,
    pub ticket_url: &'static str,
    pub price: &'static str,
    pub organizer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

pub const EVENTS: [Event; 3] = [
    Event {
        id: "1",
        title: "Women in Tech Conference 2024",
        description: "Join us for a day of inspiring talks, workshops, and networking opportunities for women in technology.",
        date: "2024-03-15",
        time: "09:00 AM",
        location: "Taj West End",
        city: "Bangalore",
        kind: EventType::Conference,
        image_url: "/events/women-tech.jpg",
        ticket_url: "https://bookmyshow.com/events/women-tech-2024",
        price: "₹2,999",
        organizer: "Women Who Code",
    },
    Event {
        id: "2",
        title: "Leadership Workshop for Women",
        description: "A comprehensive workshop focusing on leadership skills, negotiation, and career advancement.",
        date: "2024-03-20",
        time: "02:00 PM",
        location: "The Oberoi",
        city: "Mumbai",
        kind: EventType::Workshop,
        image_url: "/events/leadership.jpg",
        ticket_url: "https://insider.in/leadership-workshop",
        price: "₹1,999",
        organizer: "Lean In India",
    },
    Event {
        id: "3",
        title: "Digital Marketing Webinar",
        description: "Learn the latest trends in digital marketing and how to build your personal brand online.",
        date: "2024-03-25",
        time: "07:00 PM",
        location: "Online",
        city: ALL_CITIES,
        kind: EventType::Webinar,
        image_url: "/events/digital-marketing.jpg",
        ticket_url: "https://zoom.us/webinar/register",
        price: "Free",
        organizer: "SheSays India",
    },
];

fn is_all_types(kind: &str) -> bool {
    kind.trim().is_empty() || kind.trim().eq_ignore_ascii_case(ALL_TYPES)
}

/// Online events (city `All Cities`) match every city.
pub fn filter_events(city: &str, kind: &str) -> Vec<Event> {
    EVENTS
        .iter()
        .filter(|event| {
            is_all_cities(city)
                || is_all_cities(event.city)
                || event.city.eq_ignore_ascii_case(city.trim())
        })
        .filter(|event| is_all_types(kind) || event.kind.as_str().eq_ignore_ascii_case(kind.trim()))
        .cloned()
        .collect()
}
