// src/jobs/locality.rs
use super::{is_all_cities, CanonicalJob};

/// Substring heuristic: the lower-cased location contains the city, the city
/// with spaces removed, or the city's first word.
pub fn matches_city(location: &str, city: &str) -> bool {
    let location = location.to_lowercase();
    let city = city.trim().to_lowercase();

    let compact: String = city.chars().filter(|c| !c.is_whitespace()).collect();
    let first_token = city.split_whitespace().next().unwrap_or_default();

    location.contains(&city) || location.contains(&compact) || location.contains(first_token)
}

/// Keep jobs located in `city`; `All Cities` keeps everything.
pub fn filter_by_city(jobs: Vec<CanonicalJob>, city: &str) -> Vec<CanonicalJob> {
    if is_all_cities(city) {
        return jobs;
    }

    jobs.into_iter()
        .filter(|job| matches_city(&job.location, city))
        .collect()
}
