// src/web/types.rs
use rocket::form::FromForm;
use rocket::serde::Serialize;

#[derive(Debug, FromForm)]
pub struct EventsQuery {
    pub city: Option<String>,
    #[field(name = "type")]
    pub kind: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: &'static str,
    pub jobs_provider_configured: bool,
    pub chat_model_configured: bool,
    pub timestamp: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl StandardErrorResponse {
    pub fn new(error: &str, error_code: &str, suggestions: &[&str]) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            error_code: error_code.to_string(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }
}
