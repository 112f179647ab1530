// src/jobs/mod.rs
//! Job aggregation: plan provider queries, fetch them concurrently, normalize,
//! filter by city and fall back to a static set when the provider path fails.

use serde::{Deserialize, Serialize};

pub mod aggregator;
pub mod fallback;
pub mod fetcher;
pub mod locality;
pub mod normalizer;
pub mod query_planner;
pub mod types;

pub use aggregator::JobAggregator;
pub use fallback::{fallback_jobs, FallbackReason};
pub use fetcher::JobFetcher;
pub use types::{ProviderQuery, RawProviderJob};

/// Sentinel city meaning "no locality restriction".
pub const ALL_CITIES: &str = "All Cities";

/// Upper bound on provider-sourced jobs in one response.
pub const MAX_API_JOBS: usize = 15;

/// Normalized job record returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalJob {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(rename = "applyLink")]
    pub apply_link: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobsSource {
    Api,
    Fallback,
}

/// Response envelope for `GET /api/jobs`. All jobs share one origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<CanonicalJob>,
    pub total: usize,
    pub source: JobsSource,
}

impl JobsResponse {
    pub fn from_api(jobs: Vec<CanonicalJob>) -> Self {
        Self {
            total: jobs.len(),
            jobs,
            source: JobsSource::Api,
        }
    }

    pub fn fallback() -> Self {
        let jobs = fallback_jobs();
        Self {
            total: jobs.len(),
            jobs,
            source: JobsSource::Fallback,
        }
    }
}

/// Resolve the `city` query parameter, mapping missing or blank to `All Cities`.
pub fn resolve_city(city: Option<&str>) -> String {
    match city.map(str::trim) {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => ALL_CITIES.to_string(),
    }
}

pub fn is_all_cities(city: &str) -> bool {
    city.trim().eq_ignore_ascii_case(ALL_CITIES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_city() {
        assert_eq!(resolve_city(None), ALL_CITIES);
        assert_eq!(resolve_city(Some("")), ALL_CITIES);
        assert_eq!(resolve_city(Some("  ")), ALL_CITIES);
        assert_eq!(resolve_city(Some(" Pune ")), "Pune");
    }

    #[test]
    fn test_is_all_cities() {
        assert!(is_all_cities("All Cities"));
        assert!(is_all_cities("all cities"));
        assert!(!is_all_cities("Mumbai"));
    }

    #[test]
    fn test_envelope_serialization() {
        let response = JobsResponse::from_api(vec![CanonicalJob {
            id: "linkedin-1".to_string(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Pune".to_string(),
            salary: None,
            apply_link: "https://www.linkedin.com/jobs/view/1".to_string(),
            source: "LinkedIn".to_string(),
            description: None,
            posted_date: Some("Recently posted".to_string()),
        }]);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["source"], "api");
        assert_eq!(json["total"], 1);
        assert_eq!(
            json["jobs"][0]["applyLink"],
            "https://www.linkedin.com/jobs/view/1"
        );
        assert!(json["jobs"][0].get("salary").is_none());
    }
}
